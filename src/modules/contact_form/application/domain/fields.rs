use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MESSAGE_MAX_LENGTH: usize = 500;

pub const NAME_TYPING_MESSAGE: &str = "Only letters and spaces are allowed in the name.";
pub const NAME_PATTERN_MESSAGE: &str = "Name can only contain letters and spaces.";
pub const PHONE_PATTERN_MESSAGE: &str =
    "Phone can only contain digits, spaces, +, -, and parentheses.";

const NAME_ALLOWED: &str = r"^[A-Za-z\s]*$";
const PHONE_ALLOWED: &str = r"^[0-9\-+()\s]*$";
/// The HTML "valid e-mail address" production used by `type=email`.
const EMAIL_ADDRESS: &str = concat!(
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@",
    r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
    r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
);

#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("Invalid allowed-character pattern for {field}: {source}")]
    Pattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("Message max length must be positive")]
    ZeroMessageLength,
}

// ────────────────────────────────────────────────────────────────
// Field identity
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Msg,
}

impl FieldName {
    /// Validation order; the first invalid field gets focus.
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Msg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Msg => "msg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone",
            FieldName::Msg => "Comments",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Tel,
    TextArea,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::TextArea => "textarea",
        }
    }
}

// ────────────────────────────────────────────────────────────────
// Constraints
// ────────────────────────────────────────────────────────────────

/// Declarative constraints of one control, evaluated like browser
/// constraint validation.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: FieldName,
    pub input_type: InputType,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Full-value pattern, also checked on every keystroke.
    pub allowed: Option<Regex>,
    /// Syntax a non-empty value must have for its input type.
    pub type_syntax: Option<Regex>,
    /// Shown while typing a disallowed character.
    pub typing_message: Option<&'static str>,
    /// Shown on submit for a pattern mismatch.
    pub pattern_message: Option<&'static str>,
}

impl FieldSpec {
    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Always true when no allowed set is declared.
    pub fn allows(&self, value: &str) -> bool {
        self.allowed.as_ref().map_or(true, |re| re.is_match(value))
    }

    /// Always true when the input type imposes no syntax.
    pub fn matches_type(&self, value: &str) -> bool {
        self.type_syntax
            .as_ref()
            .map_or(true, |re| re.is_match(value))
    }
}

#[derive(Debug, Clone)]
pub struct ContactFormSchema {
    fields: [FieldSpec; 4],
}

impl ContactFormSchema {
    pub fn standard() -> Result<Self, SchemaError> {
        Self::with_message_max(DEFAULT_MESSAGE_MAX_LENGTH)
    }

    pub fn with_message_max(max: usize) -> Result<Self, SchemaError> {
        if max == 0 {
            return Err(SchemaError::ZeroMessageLength);
        }

        let name_allowed = compile(FieldName::Name, NAME_ALLOWED)?;
        let phone_allowed = compile(FieldName::Phone, PHONE_ALLOWED)?;
        let email_syntax = compile(FieldName::Email, EMAIL_ADDRESS)?;

        Ok(Self {
            fields: [
                FieldSpec {
                    name: FieldName::Name,
                    input_type: InputType::Text,
                    required: true,
                    min_length: Some(2),
                    max_length: Some(60),
                    allowed: Some(name_allowed),
                    type_syntax: None,
                    typing_message: Some(NAME_TYPING_MESSAGE),
                    pattern_message: Some(NAME_PATTERN_MESSAGE),
                },
                FieldSpec {
                    name: FieldName::Email,
                    input_type: InputType::Email,
                    required: true,
                    min_length: None,
                    max_length: Some(254),
                    allowed: None,
                    type_syntax: Some(email_syntax),
                    typing_message: None,
                    pattern_message: None,
                },
                FieldSpec {
                    name: FieldName::Phone,
                    input_type: InputType::Tel,
                    required: false,
                    min_length: Some(7),
                    max_length: Some(20),
                    allowed: Some(phone_allowed),
                    type_syntax: None,
                    typing_message: Some(PHONE_PATTERN_MESSAGE),
                    pattern_message: Some(PHONE_PATTERN_MESSAGE),
                },
                FieldSpec {
                    name: FieldName::Msg,
                    input_type: InputType::TextArea,
                    required: false,
                    min_length: None,
                    max_length: Some(max),
                    allowed: None,
                    type_syntax: None,
                    typing_message: None,
                    pattern_message: None,
                },
            ],
        })
    }

    pub fn field(&self, name: FieldName) -> &FieldSpec {
        match name {
            FieldName::Name => &self.fields[0],
            FieldName::Email => &self.fields[1],
            FieldName::Phone => &self.fields[2],
            FieldName::Msg => &self.fields[3],
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn message_max_length(&self) -> usize {
        self.field(FieldName::Msg)
            .max_length
            .unwrap_or(DEFAULT_MESSAGE_MAX_LENGTH)
    }
}

fn compile(field: FieldName, pattern: &str) -> Result<Regex, SchemaError> {
    Regex::new(pattern).map_err(|source| SchemaError::Pattern {
        field: field.as_str(),
        source,
    })
}

/// Length as a browser's `maxLength` counts it.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_spaces_only() {
        let schema = ContactFormSchema::standard().unwrap();
        let name = schema.field(FieldName::Name);

        assert!(name.allows("Ada Lovelace"));
        assert!(name.allows(""));
        assert!(!name.allows("R2D2"));
        assert!(!name.allows("O'Brien"));
    }

    #[test]
    fn phone_accepts_dial_characters() {
        let schema = ContactFormSchema::standard().unwrap();
        let phone = schema.field(FieldName::Phone);

        assert!(phone.allows("+62 (812) 555-0101"));
        assert!(!phone.allows("555-CALL"));
    }

    #[test]
    fn email_syntax_follows_input_type_rules() {
        let schema = ContactFormSchema::standard().unwrap();
        let email = schema.field(FieldName::Email);

        for ok in [
            "a..b@example.com",
            ".ab@example.com",
            "ada@localhost",
            "x+y@mail.example.org",
        ] {
            assert!(email.matches_type(ok), "{ok}");
        }
        for bad in [
            "\"john doe\"@example.com",
            "user@[127.0.0.1]",
            "ü@example.com",
            "ada@",
            "ada@-example.com",
            "plain",
        ] {
            assert!(!email.matches_type(bad), "{bad}");
        }
    }

    #[test]
    fn message_limit_is_configurable() {
        let schema = ContactFormSchema::with_message_max(120).unwrap();
        assert_eq!(schema.message_max_length(), 120);
        assert!(matches!(
            ContactFormSchema::with_message_max(0),
            Err(SchemaError::ZeroMessageLength)
        ));
    }

    #[test]
    fn field_names_round_trip_and_labels() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::parse(field.as_str()), Some(field));
        }
        assert_eq!(FieldName::Msg.label(), "Comments");
        assert_eq!(FieldName::parse("comments"), None);
    }

    #[test]
    fn utf16_length_counts_surrogate_pairs() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("é"), 1);
        assert_eq!(utf16_len("🚀"), 2);
    }
}
