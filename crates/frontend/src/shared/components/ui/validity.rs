//! Rendering of a field's validity into classes and ARIA attributes.

pub const INVALID_CLASS: &str = "is-invalid";

pub fn with_invalid(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} {}", base, INVALID_CLASS)
    } else {
        base.to_string()
    }
}

/// Value for `aria-invalid`.
pub fn aria_invalid(invalid: bool) -> &'static str {
    if invalid {
        "true"
    } else {
        "false"
    }
}

/// Inline `display` of the `.validation-message` next to a field.
pub fn message_display(invalid: bool) -> &'static str {
    if invalid {
        "block"
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rendering() {
        assert_eq!(with_invalid("form-input", true), "form-input is-invalid");
        assert_eq!(aria_invalid(true), "true");
        assert_eq!(message_display(true), "block");
    }

    #[test]
    fn test_valid_rendering() {
        assert_eq!(with_invalid("checkbox-group", false), "checkbox-group");
        assert_eq!(aria_invalid(false), "false");
        assert_eq!(message_display(false), "none");
    }

    #[test]
    fn test_rendering_is_stable() {
        for invalid in [false, true] {
            assert_eq!(with_invalid("x", invalid), with_invalid("x", invalid));
        }
    }
}
