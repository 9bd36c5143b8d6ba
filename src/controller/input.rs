//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, Screen};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Toast blocks other input until dismissed or expired
        if model.has_toast().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_toast().await;
            }
            return Ok(());
        }

        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        if ui_state.screen == Screen::Details {
            match key.code {
                KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char(' ') => {
                    self.toggle_favourite().await;
                }
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
                    model.show_recipes_list().await;
                }
                KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.show_help_popup().await;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    model.set_should_quit(true).await;
                }
                _ => {}
            }
            return Ok(());
        }

        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    model.cycle_section().await;
                }
                KeyCode::Enter => {
                    self.perform_search(&ui_state.search_query).await;
                }
                KeyCode::Esc => {
                    model.clear_search().await;
                    model.set_active_section(ActiveSection::List).await;
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                }
                KeyCode::Char(c) => {
                    model.append_to_search(c).await;
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                model.cycle_section().await;
            }
            KeyCode::Char('/') | KeyCode::Char('g') | KeyCode::Char('G') => {
                model.set_active_section(ActiveSection::Search).await;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                model.move_selection_up().await;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                model.move_selection_down().await;
            }
            KeyCode::Enter | KeyCode::Right => {
                self.open_selected_recipe().await;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.spawn_refresh();
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
