//! Layout rendering (top bar, key hint footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::data::{Recipes, Resource};
use crate::model::{ActiveSection, Screen, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, recipes: &Resource<Recipes>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(30), // Load status
        ])
        .split(area);

    let search_focused =
        ui_state.screen == Screen::RecipesList && ui_state.active_section == ActiveSection::Search;
    let search_style = if search_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_query.is_empty() {
        "Press / to search recipes..."
    } else {
        &ui_state.search_query
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if search_focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    let (status, color) = match recipes {
        Resource::Loading => ("Loading...".to_string(), Color::Yellow),
        Resource::DataError(code) => (format!("Failed ({})", code), Color::Red),
        Resource::Success(list) => match ui_state.last_refreshed {
            Some(at) => (format!("{} recipes @ {}", list.len(), at.format("%H:%M")), Color::Cyan),
            None => (format!("{} recipes", list.len()), Color::Cyan),
        },
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(" Recipes "));
    frame.render_widget(status, chunks[1]);
}

pub fn render_footer(frame: &mut Frame, area: Rect, screen: Screen) {
    let hints = match screen {
        Screen::RecipesList => " ↑/↓ select  Enter open  / search  R refresh  H help  Q quit",
        Screen::Details => " F favourite  Esc back  H help  Q quit",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
