//! One-shot events handed from view-models to the controller

/// Wraps content that must be acted on at most once, such as a navigation
/// request or a toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleEvent<T> {
    content: T,
    has_been_handled: bool,
}

impl<T: Clone> SingleEvent<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            has_been_handled: false,
        }
    }

    /// Returns the content the first time only
    pub fn get_content_if_not_handled(&mut self) -> Option<T> {
        if self.has_been_handled {
            None
        } else {
            self.has_been_handled = true;
            Some(self.content.clone())
        }
    }

    /// Returns the content even if it has already been handled
    pub fn peek_content(&self) -> &T {
        &self.content
    }

    pub fn has_been_handled(&self) -> bool {
        self.has_been_handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_delivered_once() {
        let mut event = SingleEvent::new("open".to_string());

        assert_eq!(event.get_content_if_not_handled().as_deref(), Some("open"));
        assert_eq!(event.get_content_if_not_handled(), None);
        assert!(event.has_been_handled());
        assert_eq!(event.peek_content(), "open");
    }
}
