//! Favourite toggle on the detail screen

use crate::data::Resource;
use super::AppController;

impl AppController {
    pub async fn toggle_favourite(&self) {
        self.model.details.toggle_favourite().await;

        if let Resource::DataError(code) = self.model.details.is_favourite_state().await {
            tracing::warn!(code, "Favourite toggle failed");
            self.show_error(code).await;
        }
    }
}
