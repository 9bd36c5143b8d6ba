//! Recipe list screen

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::data::{Recipes, Resource};
use crate::model::{ActiveSection, UiState};
use super::utils::{calculate_num_width, render_scrollable_list, truncate_string};

pub fn render_recipes_list(frame: &mut Frame, area: Rect, ui_state: &UiState, recipes: &Resource<Recipes>) {
    let is_focused = ui_state.active_section == ActiveSection::List;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recipes ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    let recipes = match recipes {
        Resource::Loading => {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
            return;
        }
        Resource::Success(recipes) if !recipes.is_empty() => recipes,
        _ => {
            let empty = Paragraph::new("No recipes to show\n\nPress R to refresh")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }
    };

    let num_width = calculate_num_width(recipes.len());
    // Borders (2) + padding (2) + index column + gaps
    let text_width = (area.width as usize).saturating_sub(4 + num_width + 3);
    let name_width = (text_width * 45) / 100;
    let headline_width = text_width.saturating_sub(name_width);

    let items: Vec<ListItem> = recipes
        .recipes_list
        .iter()
        .enumerate()
        .map(|(i, recipe)| {
            let is_selected = i == ui_state.selected_index;
            let name_style = if is_selected && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", i + 1, width = num_width),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate_string(&recipe.name, name_width), name_style),
                Span::raw("  "),
                Span::styled(
                    truncate_string(&recipe.headline, headline_width),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    render_scrollable_list(frame, area, items, ui_state.selected_index, block);
}
