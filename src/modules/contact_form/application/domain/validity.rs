use super::fields::{utf16_len, FieldSpec};

/// Constraint violations in reporting priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Violation {
    ValueMissing,
    TypeMismatch,
    PatternMismatch,
    TooShort,
    TooLong,
}

/// Highest-priority violation of `value`, if any.
///
/// Empty optional values satisfy every constraint; type, pattern and length
/// checks only apply to non-empty values.
pub fn check(spec: &FieldSpec, value: &str) -> Option<Violation> {
    if value.is_empty() {
        return spec.required.then_some(Violation::ValueMissing);
    }

    if !spec.matches_type(value) {
        return Some(Violation::TypeMismatch);
    }

    if !spec.allows(value) {
        return Some(Violation::PatternMismatch);
    }

    let len = utf16_len(value);
    if spec.min_length.is_some_and(|min| len < min) {
        return Some(Violation::TooShort);
    }
    if spec.max_length.is_some_and(|max| len > max) {
        return Some(Violation::TooLong);
    }

    None
}

pub fn message(spec: &FieldSpec, violation: Violation) -> String {
    let label = spec.label();

    match violation {
        Violation::ValueMissing => format!("{label} is required."),
        Violation::TypeMismatch => {
            format!("{label} must be a valid {} address.", spec.input_type.as_str())
        }
        Violation::PatternMismatch => match spec.pattern_message {
            Some(text) => text.to_string(),
            None => format!("Please enter a valid {}.", label.to_lowercase()),
        },
        Violation::TooShort => match spec.min_length {
            Some(min) => format!("{label} must be at least {min} characters long."),
            None => fallback_message(spec),
        },
        Violation::TooLong => match spec.max_length {
            Some(max) => format!("{label} must be at most {max} characters long."),
            None => fallback_message(spec),
        },
    }
}

pub fn fallback_message(spec: &FieldSpec) -> String {
    format!("Invalid {}.", spec.label().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact_form::application::domain::fields::{
        ContactFormSchema, FieldName,
    };

    fn schema() -> ContactFormSchema {
        ContactFormSchema::standard().unwrap()
    }

    #[test]
    fn missing_wins_over_everything() {
        let schema = schema();
        let name = schema.field(FieldName::Name);

        assert_eq!(check(name, ""), Some(Violation::ValueMissing));
        assert_eq!(message(name, Violation::ValueMissing), "Name is required.");
    }

    #[test]
    fn optional_empty_fields_are_valid() {
        let schema = schema();
        assert_eq!(check(schema.field(FieldName::Phone), ""), None);
        assert_eq!(check(schema.field(FieldName::Msg), ""), None);
    }

    #[test]
    fn email_type_mismatch() {
        let schema = schema();
        let email = schema.field(FieldName::Email);

        assert_eq!(check(email, "not-an-email"), Some(Violation::TypeMismatch));
        assert_eq!(check(email, "ada@example.com"), None);
        assert_eq!(check(email, "a..b@example.com"), None);
        assert_eq!(
            check(email, "\"john doe\"@example.com"),
            Some(Violation::TypeMismatch)
        );
        assert_eq!(
            message(email, Violation::TypeMismatch),
            "Email must be a valid email address."
        );
    }

    #[test]
    fn pattern_beats_length() {
        let schema = schema();
        let name = schema.field(FieldName::Name);

        assert_eq!(check(name, "1"), Some(Violation::PatternMismatch));
        assert_eq!(
            message(name, Violation::PatternMismatch),
            "Name can only contain letters and spaces."
        );
    }

    #[test]
    fn length_bounds() {
        let schema = schema();
        let name = schema.field(FieldName::Name);
        let phone = schema.field(FieldName::Phone);

        assert_eq!(check(name, "A"), Some(Violation::TooShort));
        assert_eq!(check(name, &"a".repeat(61)), Some(Violation::TooLong));
        assert_eq!(check(name, &"a".repeat(60)), None);
        assert_eq!(check(phone, "12345"), Some(Violation::TooShort));
        assert_eq!(
            message(phone, Violation::TooShort),
            "Phone must be at least 7 characters long."
        );
    }

    #[test]
    fn comments_too_long_message_uses_label() {
        let schema = ContactFormSchema::with_message_max(10).unwrap();
        let msg = schema.field(FieldName::Msg);

        assert_eq!(check(msg, "eleven char"), Some(Violation::TooLong));
        assert_eq!(
            message(msg, Violation::TooLong),
            "Comments must be at most 10 characters long."
        );
        assert_eq!(fallback_message(msg), "Invalid comments.");
    }
}
