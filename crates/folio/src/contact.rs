//! Inline contact form state.

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Next field in tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// Previous field in tab order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// State of the contact form pane.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    active: ContactField,
    status: Option<String>,
}

impl ContactForm {
    /// The field currently being edited.
    pub fn active(&self) -> ContactField {
        self.active
    }

    /// Status line from the last submission attempt, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
    }

    /// Current text of `field`.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.active = self.active.next();
    }

    pub fn focus_prev(&mut self) {
        self.active = self.active.prev();
    }

    /// Append a typed character to the active field.
    pub fn insert(&mut self, c: char) {
        self.active_value_mut().push(c);
        self.status = None;
    }

    /// Delete the last character of the active field.
    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    /// Whether every field has content to submit.
    pub fn ready(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_routes_to_active_field() {
        let mut form = ContactForm::default();
        form.insert('J');
        form.insert('o');
        form.focus_next();
        form.insert('j');
        form.insert('@');
        assert_eq!(form.name, "Jo");
        assert_eq!(form.email, "j@");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_backspace_only_touches_active_field() {
        let mut form = ContactForm::default();
        form.insert('a');
        form.focus_next();
        form.backspace();
        assert_eq!(form.name, "a");
        assert_eq!(form.email, "");
    }

    #[test]
    fn test_field_order_wraps_both_ways() {
        assert_eq!(ContactField::Message.next(), ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Message);
        for field in ContactField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn test_ready_needs_all_fields() {
        let mut form = ContactForm::default();
        assert!(!form.ready());
        form.name = "Jane".to_string();
        form.email = "jane@example.com".to_string();
        assert!(!form.ready());
        form.message = "  ".to_string();
        assert!(!form.ready());
        form.message = "Hello".to_string();
        assert!(form.ready());
    }

    #[test]
    fn test_typing_clears_stale_status() {
        let mut form = ContactForm::default();
        form.set_status("Opened your mail client".to_string());
        form.insert('x');
        assert!(form.status().is_none());
    }
}
