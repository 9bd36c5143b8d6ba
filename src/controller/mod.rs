//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and drives the view-models. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `recipes`: Loading, searching and opening recipes
//! - `favourites`: Favourite toggle on the detail screen

mod input;
mod recipes;
mod favourites;

use std::sync::Arc;

use crate::data::{DataErrorKind, ErrorLookupError};
use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
}

impl AppController {
    pub fn new(model: Arc<AppModel>) -> Self {
        Self { model }
    }

    /// Deliver one-shot events raised by the list view-model
    pub(crate) async fn dispatch_events(&self) {
        if let Some(message) = self.model.recipes_list.take_toast().await {
            self.model.set_toast(message).await;
        }

        if let Some(recipe) = self.model.recipes_list.take_open_recipe_details().await {
            tracing::debug!(id = %recipe.id, "Opening recipe details");
            self.model.show_details(recipe).await;
            self.model.details.is_favourites().await;
        }
    }

    /// Toast the message for `code`, or a fallback when the table has none
    pub(crate) async fn show_error(&self, code: i32) {
        if let Err(e) = self.model.recipes_list.show_toast_message(code).await {
            tracing::error!(code, error = %e, "Error code has no message");
            self.model.set_toast(Self::fallback_message(&e)).await;
        }
        self.dispatch_events().await;
    }

    pub(crate) fn fallback_message(error: &ErrorLookupError) -> String {
        let ErrorLookupError::UnknownCode(code) = error;
        match DataErrorKind::from_code(*code) {
            DataErrorKind::HttpStatus(status) => format!("Server answered with HTTP {}", status),
            _ => format!("Unexpected error ({})", code),
        }
    }
}
