use crate::scanner::{MarkupEvent, MarkupVisitor};
use crate::tag::{has_attribute_value, is_named};
use html5ever::tokenizer::Tag;

/// Flags a page as having a login form when it contains a password input,
/// a form posting to `login`, or a form styled as `login-form`
#[derive(Debug, Default)]
pub struct LoginFormDetector {
    detected: bool,
}

impl LoginFormDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detected(&self) -> bool {
        self.detected
    }

    fn is_login_marker(tag: &Tag) -> bool {
        if is_named(tag, "input") {
            return has_attribute_value(tag, "type", "password");
        }
        if is_named(tag, "form") {
            return has_attribute_value(tag, "action", "login")
                || has_attribute_value(tag, "class", "login-form");
        }
        false
    }
}

impl MarkupVisitor for LoginFormDetector {
    fn visit(&mut self, event: &MarkupEvent<'_>) {
        if self.detected {
            return;
        }
        if let Some(tag) = event.opening_tag() {
            self.detected = Self::is_login_marker(tag);
        }
    }
}
