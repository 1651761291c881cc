//! Form field value objects

/// Every field name used across the login, signup and recovery forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    Email,
    Company,
    Password,
    ConfirmPassword,
    TechStack,
    GithubUrl,
    LinkedinUrl,
}

impl FieldName {
    /// Stable camelCase key for the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Company => "company",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::TechStack => "techStack",
            Self::GithubUrl => "githubUrl",
            Self::LinkedinUrl => "linkedinUrl",
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub required: bool,
    /// Rendered masked unless `revealed`
    pub secret: bool,
    pub revealed: bool,
}

impl FormField {
    /// Create a new optional text field
    pub fn text(name: FieldName, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: String::new(),
            required: false,
            secret: false,
            revealed: false,
        }
    }

    /// Mark the field as required (shown with an asterisk)
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the field as a password field
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Flip the show/hide state of a secret field. No-op for plain fields.
    pub fn toggle_reveal(&mut self) {
        if self.secret {
            self.revealed = !self.revealed;
        }
    }

    /// Label with the required marker appended
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.secret && !self.revealed {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_field() -> FormField {
        FormField::text(FieldName::Password, "Password", "Enter your password")
            .required()
            .secret()
    }

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text(FieldName::Company, "Company (Optional)", "");
        assert!(!field.required);
        assert!(!field.secret);
        assert!(field.is_empty());
        assert_eq!(field.display_label(), "Company (Optional)");
    }

    #[test]
    fn test_required_label_has_marker() {
        let field = FormField::text(FieldName::Email, "Email Address", "").required();
        assert_eq!(field.display_label(), "Email Address *");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text(FieldName::Email, "Email", "");
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text(FieldName::Email, "Email", "");
        field.pop_char();
        assert!(field.is_empty());
    }

    #[test]
    fn test_secret_field_is_masked() {
        let mut field = password_field();
        field.set_text("secret1");
        assert_eq!(field.display_value(), "•••••••");
    }

    #[test]
    fn test_revealed_secret_shows_value() {
        let mut field = password_field();
        field.set_text("secret1");
        field.toggle_reveal();
        assert_eq!(field.display_value(), "secret1");
        field.toggle_reveal();
        assert_eq!(field.display_value(), "•••••••");
    }

    #[test]
    fn test_toggle_reveal_ignored_for_plain_field() {
        let mut field = FormField::text(FieldName::FullName, "Full Name", "");
        field.toggle_reveal();
        assert!(!field.revealed);
    }

    #[test]
    fn test_field_keys_are_camel_case() {
        assert_eq!(FieldName::ConfirmPassword.key(), "confirmPassword");
        assert_eq!(FieldName::GithubUrl.key(), "githubUrl");
        assert_eq!(FieldName::LinkedinUrl.key(), "linkedinUrl");
    }
}
