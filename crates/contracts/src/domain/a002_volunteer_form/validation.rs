use super::aggregate::FieldKey;

/// Basic `local@domain.tld` shape check.
///
/// Accepts exactly one `@` with a non-empty local part, and a domain that has
/// a `.` with at least one character on both sides. Whitespace anywhere makes
/// the address invalid. No further RFC rules are applied.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(is_blank_char) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// U+FEFF is not Unicode White_Space but browsers treat it as `\s`.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Per-field validity snapshot of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormValidation {
    pub name: bool,
    pub email: bool,
    pub interest: bool,
    pub terms_accepted: bool,
}

impl FormValidation {
    pub fn field(&self, key: FieldKey) -> bool {
        match key {
            FieldKey::Name => self.name,
            FieldKey::Email => self.email,
            FieldKey::Interest => self.interest,
        }
    }

    /// Required inputs that currently fail validation, in form order.
    pub fn invalid_fields(&self) -> Vec<FieldKey> {
        FieldKey::all()
            .into_iter()
            .filter(|key| !self.field(*key))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.name && self.email && self.interest && self.terms_accepted
    }
}

/// Validate one required field value.
pub(crate) fn validate_field(key: FieldKey, raw: &str, interest_placeholder: &str) -> bool {
    let value = raw.trim_matches(is_blank_char);
    if value.is_empty() {
        return false;
    }
    match key {
        FieldKey::Name => true,
        FieldKey::Email => is_valid_email(value),
        FieldKey::Interest => value != interest_placeholder,
    }
}
