//! Text prompt collaborator used by the built-in add action.
//!
//! The control never draws a dialog itself. It describes what to ask in a
//! [`PromptRequest`] and hands it to a [`TextPrompt`] supplied by the host,
//! typically a modal input dialog.

/// What to ask the user for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Dialog title.
    pub title: String,
    /// Optional header above the content.
    pub header: Option<String>,
    /// Label next to the input field.
    pub content: String,
    /// Initial text in the input field.
    pub initial_text: String,
}

impl PromptRequest {
    /// The request used when adding a new item.
    pub fn new_item() -> Self {
        Self {
            title: "New Item".to_string(),
            header: None,
            content: "Please enter the new item: ".to_string(),
            initial_text: String::new(),
        }
    }
}

/// Asks the user for one line of text.
pub trait TextPrompt: Send + Sync {
    /// Show the prompt and wait for the answer.
    ///
    /// Returns `None` if the user cancelled.
    fn prompt(&self, request: &PromptRequest) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: Fn(&PromptRequest) -> Option<String> + Send + Sync,
{
    fn prompt(&self, request: &PromptRequest) -> Option<String> {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_prompt() {
        let prompt = |request: &PromptRequest| Some(format!("{}!", request.title));
        assert_eq!(prompt.prompt(&PromptRequest::new_item()), Some("New Item!".into()));
    }

    #[test]
    fn test_new_item_request() {
        let request = PromptRequest::new_item();
        assert_eq!(request.content, "Please enter the new item: ");
        assert!(request.header.is_none());
    }
}
