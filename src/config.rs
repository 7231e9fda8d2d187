//! Page configuration
//!
//! Element ids and class names agreed with the markup. Every field defaults
//! to the stock page, so an empty YAML document is a valid config.

use serde::Deserialize;

use crate::error::{InteractionError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub ids: ElementIds,
    pub classes: ClassNames,
    /// Text shown after a successful signup.
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub click_button: String,
    pub click_message: String,
    pub hover_box: String,
    pub hover_message: String,
    pub name_input: String,
    pub greeting: String,
    pub mode_toggle: String,
    pub signup_form: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub form_success: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassNames {
    pub hidden: String,
    pub error: String,
    pub dark_mode: String,
    pub faq_question: String,
    pub error_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            success_message: "Registration successful! 🎉".to_string(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            click_button: "clickButton".to_string(),
            click_message: "clickMessage".to_string(),
            hover_box: "hoverBox".to_string(),
            hover_message: "hoverMessage".to_string(),
            name_input: "nameInput".to_string(),
            greeting: "greeting".to_string(),
            mode_toggle: "modeToggle".to_string(),
            signup_form: "signupForm".to_string(),
            full_name: "fullName".to_string(),
            email: "email".to_string(),
            password: "password".to_string(),
            confirm_password: "confirmPassword".to_string(),
            form_success: "formSuccess".to_string(),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden: "hidden".to_string(),
            error: "error".to_string(),
            dark_mode: "dark-mode".to_string(),
            faq_question: "faq-question".to_string(),
            error_message: "error-message".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a YAML config.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document as a struct, treat it as all defaults
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject blank identifiers; a blank id or class can never match markup.
    pub fn validate(&self) -> Result<()> {
        let ids = &self.ids;
        let classes = &self.classes;
        let named = [
            ("ids.click_button", &ids.click_button),
            ("ids.click_message", &ids.click_message),
            ("ids.hover_box", &ids.hover_box),
            ("ids.hover_message", &ids.hover_message),
            ("ids.name_input", &ids.name_input),
            ("ids.greeting", &ids.greeting),
            ("ids.mode_toggle", &ids.mode_toggle),
            ("ids.signup_form", &ids.signup_form),
            ("ids.full_name", &ids.full_name),
            ("ids.email", &ids.email),
            ("ids.password", &ids.password),
            ("ids.confirm_password", &ids.confirm_password),
            ("ids.form_success", &ids.form_success),
            ("classes.hidden", &classes.hidden),
            ("classes.error", &classes.error),
            ("classes.dark_mode", &classes.dark_mode),
            ("classes.faq_question", &classes.faq_question),
            ("classes.error_message", &classes.error_message),
        ];

        for (key, value) in named {
            if value.trim().is_empty() {
                return Err(InteractionError::InvalidConfig {
                    message: format!("{key} must not be empty"),
                });
            }
            if value.chars().any(char::is_whitespace) {
                return Err(InteractionError::InvalidConfig {
                    message: format!("{key} must not contain whitespace: '{value}'"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        let config = PageConfig::from_yaml_str("").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.ids.confirm_password, "confirmPassword");
        assert_eq!(config.classes.dark_mode, "dark-mode");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let yaml = r#"
ids:
  full_name: signupName
classes:
  hidden: is-hidden
"#;
        let config = PageConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.ids.full_name, "signupName");
        assert_eq!(config.ids.email, "email");
        assert_eq!(config.classes.hidden, "is-hidden");
        assert_eq!(config.classes.error, "error");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = PageConfig::from_yaml_str("ids:\n  footer: x\n").unwrap_err();
        assert!(matches!(err, InteractionError::Config(_)));
    }

    #[test]
    fn test_blank_class_rejected() {
        let err = PageConfig::from_yaml_str("classes:\n  error: \"\"\n").unwrap_err();
        match err {
            InteractionError::InvalidConfig { message } => {
                assert!(message.contains("classes.error"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_whitespace_in_id_rejected() {
        let err = PageConfig::from_yaml_str("ids:\n  email: \"e mail\"\n").unwrap_err();
        assert!(matches!(err, InteractionError::InvalidConfig { .. }));
    }
}
