//! Creation dialog state.

use crate::models::NewPost;

/// Input fields of the creation form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Content,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Content,
            FormField::Content => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Description => FormField::Title,
            FormField::Content => FormField::Description,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Summary",
            FormField::Content => "Content",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FormField::Content)
    }
}

/// Text typed into the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub description: String,
    pub content: String,
    pub focus: FormField,
}

impl PostForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Content => &self.content,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Content => &mut self.content,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn insert_str(&mut self, text: &str) {
        if self.focus.is_multiline() {
            self.focused_mut().push_str(text);
        } else {
            let flat: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
            self.focused_mut().push_str(&flat);
        }
    }

    /// Newline in the content field; single-line fields advance focus instead.
    pub fn newline(&mut self) {
        if self.focus.is_multiline() {
            self.content.push('\n');
        } else {
            self.focus = self.focus.next();
        }
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the submission, or name the first missing field.
    ///
    /// Values are trimmed; a field holding only whitespace counts as missing.
    pub fn validate(&self) -> Result<NewPost, String> {
        for field in [FormField::Title, FormField::Description, FormField::Content] {
            if self.value(field).trim().is_empty() {
                return Err(format!("{} is required", field.label()));
            }
        }
        Ok(NewPost::new(
            self.title.trim(),
            self.description.trim(),
            self.content.trim(),
        ))
    }
}

/// Lifecycle of the create request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error(String),
}

/// The "new post" dialog.
#[derive(Debug, Clone, Default)]
pub struct CreateDialog {
    pub open: bool,
    pub form: PostForm,
    pub status: MutationStatus,
    /// Set when a submit was rejected locally
    pub validation_error: Option<String>,
}

impl CreateDialog {
    pub fn is_pending(&self) -> bool {
        self.status == MutationStatus::Pending
    }

    /// Message to show inside the dialog, if any.
    pub fn error_message(&self) -> Option<&str> {
        if let Some(message) = &self.validation_error {
            return Some(message);
        }
        match &self.status {
            MutationStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut form = PostForm::default();
        assert_eq!(form.focus, FormField::Title);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, FormField::Content);
        form.focus_next();
        assert_eq!(form.focus, FormField::Title);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Content);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = PostForm::default();
        form.insert_char('T');
        form.focus_next();
        form.insert_str("Sum\nmary");
        form.backspace();
        assert_eq!(form.title, "T");
        assert_eq!(form.description, "Summar");
    }

    #[test]
    fn test_newline_only_in_content() {
        let mut form = PostForm::default();
        form.newline();
        assert_eq!(form.focus, FormField::Description);
        assert!(form.title.is_empty());

        form.focus = FormField::Content;
        form.insert_str("line one");
        form.newline();
        form.insert_str("line two");
        assert_eq!(form.content, "line one\nline two");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = PostForm::default();
        assert_eq!(form.validate(), Err("Title is required".to_string()));

        form.title = "T".to_string();
        form.description = "   ".to_string();
        assert_eq!(form.validate(), Err("Summary is required".to_string()));

        form.description = "D".to_string();
        assert_eq!(form.validate(), Err("Content is required".to_string()));
    }

    #[test]
    fn test_validate_trims_values() {
        let form = PostForm {
            title: "  T ".to_string(),
            description: "D".to_string(),
            content: "\nC\n".to_string(),
            focus: FormField::Title,
        };
        assert_eq!(form.validate(), Ok(NewPost::new("T", "D", "C")));
    }

    #[test]
    fn test_dialog_error_message_prefers_validation() {
        let mut dialog = CreateDialog {
            status: MutationStatus::Error("server down".to_string()),
            ..Default::default()
        };
        assert_eq!(dialog.error_message(), Some("server down"));
        dialog.validation_error = Some("Title is required".to_string());
        assert_eq!(dialog.error_message(), Some("Title is required"));
    }
}
