//! Recipe detail screen

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::data::{RecipesItem, Resource};

fn favourite_badge(is_favourite: &Resource<bool>) -> Span<'static> {
    match is_favourite {
        Resource::Loading => Span::styled("…", Style::default().fg(Color::Yellow)),
        Resource::Success(true) => Span::styled("★ Favourite", Style::default().fg(Color::Yellow)),
        Resource::Success(false) => Span::styled("☆ Not a favourite", Style::default().fg(Color::DarkGray)),
        Resource::DataError(_) => Span::styled("☆ Unknown", Style::default().fg(Color::Red)),
    }
}

fn fact(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}  ", label), Style::default().fg(Color::Green)),
        Span::raw(value),
    ])
}

pub fn render_details(
    frame: &mut Frame,
    area: Rect,
    recipe: Option<&RecipesItem>,
    is_favourite: &Resource<bool>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recipe ")
        .padding(Padding::uniform(1))
        .border_style(Style::default().fg(Color::Green));

    let Some(recipe) = recipe else {
        frame.render_widget(Paragraph::new("No recipe selected").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(recipe.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            favourite_badge(is_favourite),
        ]),
        Line::from(Span::styled(
            recipe.headline.clone(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
    ];

    if let Some(minutes) = recipe.time_minutes() {
        lines.push(fact("Time", format!("{} min", minutes)));
    }
    for (label, value) in [
        ("Calories", &recipe.calories),
        ("Carbs", &recipe.carbos),
        ("Fats", &recipe.fats),
        ("Proteins", &recipe.proteins),
    ] {
        if !value.is_empty() {
            lines.push(fact(label, value.clone()));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(recipe.description.clone()));

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(details, area);
}
