use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::modules::contact_form::application::domain::entities::{FormErrorRecord, Submission};
use crate::modules::contact_form::application::domain::fields::{
    utf16_len, ContactFormSchema, FieldName,
};
use crate::modules::contact_form::application::domain::validity;
use crate::modules::contact_form::application::ports::outgoing::{FormSubmitter, SubmitError};
use crate::shared::clock::Clock;

pub const ERROR_AUTO_CLEAR_MS: i64 = 3500;
pub const FLASH_MS: i64 = 180;
pub const NEAR_LIMIT_REMAINING: i64 = 50;

pub const TOO_LONG_MESSAGE: &str = "Your comment is too long. Please shorten it.";
pub const TOO_LONG_VALIDITY: &str = "Your comment exceeds the maximum allowed length.";
pub const READY_MESSAGE: &str = "Form is valid. Submitting now…";

#[derive(Debug, Clone, Default)]
struct Control {
    value: String,
    custom_error: Option<String>,
    flashed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
struct ErrorArea {
    text: String,
    shown_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoArea {
    pub text: String,
    pub near_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field is invalid; nothing was sent.
    Blocked {
        errors: Vec<FormErrorRecord>,
        focus: FieldName,
    },
    Ready(Submission),
}

// ============================================================
// Controller
// ============================================================

/// Contact form controller: one method per user event.
///
/// Timed effects (error auto-clear, field flash) are kept as timestamps and
/// resolved against the injected clock when read.
pub struct ContactFormService<C>
where
    C: Clock,
{
    schema: ContactFormSchema,
    clock: C,
    controls: BTreeMap<FieldName, Control>,
    error: ErrorArea,
    info: InfoArea,
    log: Vec<FormErrorRecord>,
    audit: Option<String>,
    focused: Option<FieldName>,
}

impl<C> ContactFormService<C>
where
    C: Clock,
{
    pub fn new(schema: ContactFormSchema, clock: C) -> Self {
        let mut service = Self {
            schema,
            clock,
            controls: BTreeMap::new(),
            error: ErrorArea::default(),
            info: InfoArea::default(),
            log: Vec::new(),
            audit: None,
            focused: None,
        };
        service.update_message_counter();
        service
    }

    pub fn input(&mut self, field: FieldName, value: impl Into<String>) {
        self.controls.entry(field).or_default().value = value.into();

        match field {
            FieldName::Name | FieldName::Phone => self.check_typing(field),
            FieldName::Msg => self.update_message_counter(),
            FieldName::Email => {}
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.clear_error();
        self.update_message_counter();

        let now = self.clock.now();
        let mut current = Vec::new();

        for spec in self.schema.fields() {
            let control = self.controls.entry(spec.name).or_default();
            control.custom_error = None;

            if let Some(violation) = validity::check(spec, &control.value) {
                let message = validity::message(spec, violation);
                control.custom_error = Some(message.clone());
                current.push(FormErrorRecord::new(
                    spec.name,
                    message,
                    control.value.clone(),
                    now,
                ));
            }
        }

        if let Some(first) = current.first() {
            let focus = first.field;
            let summary = format!("{}: {}", first.label, first.message);

            warn!(
                invalid = current.len(),
                first = focus.as_str(),
                "Contact form submission blocked"
            );

            self.log.extend(current.iter().cloned());
            self.show_error(summary);
            self.focused = Some(focus);

            return SubmitOutcome::Blocked {
                errors: current,
                focus,
            };
        }

        self.show_info(READY_MESSAGE.to_string(), false);

        let audit = serde_json::to_string(&self.log).unwrap_or_else(|e| {
            warn!(error = %e, "Could not serialise form error log");
            "[]".to_string()
        });
        self.audit = Some(audit.clone());

        info!(prior_errors = self.log.len(), "Contact form ready to submit");

        SubmitOutcome::Ready(Submission {
            name: self.value(FieldName::Name).to_string(),
            email: self.value(FieldName::Email).to_string(),
            phone: self.value(FieldName::Phone).to_string(),
            msg: self.value(FieldName::Msg).to_string(),
            form_errors: audit,
        })
    }

    /// Validates, then hands a valid submission to `submitter`.
    pub async fn submit_with<F>(&mut self, submitter: &F) -> Result<SubmitOutcome, SubmitError>
    where
        F: FormSubmitter + ?Sized,
    {
        let outcome = self.submit();

        if let SubmitOutcome::Ready(submission) = &outcome {
            submitter.submit(submission).await?;
        }

        Ok(outcome)
    }

    // ────────────────────────────────────────────────────────────────
    // Observable state
    // ────────────────────────────────────────────────────────────────

    pub fn value(&self, field: FieldName) -> &str {
        self.controls
            .get(&field)
            .map(|c| c.value.as_str())
            .unwrap_or("")
    }

    /// Current custom validity message of a field.
    pub fn validation_message(&self, field: FieldName) -> Option<&str> {
        self.controls
            .get(&field)
            .and_then(|c| c.custom_error.as_deref())
    }

    pub fn is_flashing(&self, field: FieldName) -> bool {
        let now = self.clock.now();
        self.controls
            .get(&field)
            .and_then(|c| c.flashed_at)
            .is_some_and(|at| now - at < Duration::milliseconds(FLASH_MS))
    }

    /// Error area text; empty once the auto-clear delay has passed.
    pub fn error_text(&self) -> &str {
        let now = self.clock.now();
        match self.error.shown_at {
            Some(at) if now - at < Duration::milliseconds(ERROR_AUTO_CLEAR_MS) => &self.error.text,
            _ => "",
        }
    }

    pub fn info(&self) -> &InfoArea {
        &self.info
    }

    /// Hidden audit field; only written by a successful submit.
    pub fn audit_field(&self) -> Option<&str> {
        self.audit.as_deref()
    }

    pub fn error_log(&self) -> &[FormErrorRecord] {
        &self.log
    }

    pub fn focused(&self) -> Option<FieldName> {
        self.focused
    }

    pub fn schema(&self) -> &ContactFormSchema {
        &self.schema
    }

    // ────────────────────────────────────────────────────────────────
    // Internals
    // ────────────────────────────────────────────────────────────────

    fn check_typing(&mut self, field: FieldName) {
        let spec = self.schema.field(field);
        let Some(message) = spec.typing_message else {
            return;
        };

        let now = self.clock.now();
        let control = self.controls.entry(field).or_default();

        if !spec.allows(&control.value) {
            debug!(field = field.as_str(), "Disallowed character typed");
            control.custom_error = Some(message.to_string());
            control.flashed_at = Some(now);
            self.show_error(message.to_string());
        } else {
            control.custom_error = None;
            if self.error_text() == message {
                self.clear_error();
            }
        }
    }

    fn update_message_counter(&mut self) {
        let max = self.schema.message_max_length() as i64;
        let len = utf16_len(self.value(FieldName::Msg)) as i64;
        let remaining = max - len;

        if remaining >= 0 {
            self.show_info(
                format!("{remaining} characters remaining."),
                remaining <= NEAR_LIMIT_REMAINING,
            );
            self.controls.entry(FieldName::Msg).or_default().custom_error = None;
        } else {
            self.controls.entry(FieldName::Msg).or_default().custom_error =
                Some(TOO_LONG_VALIDITY.to_string());
            self.show_error(TOO_LONG_MESSAGE.to_string());
        }
    }

    fn show_error(&mut self, text: String) {
        self.error = ErrorArea {
            text,
            shown_at: Some(self.clock.now()),
        };
    }

    fn clear_error(&mut self) {
        self.error = ErrorArea::default();
    }

    fn show_info(&mut self, text: String, near_limit: bool) {
        self.info = InfoArea { text, near_limit };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::TimeZone;
    use mockall::mock;

    use crate::modules::contact_form::application::domain::fields::{
        NAME_TYPING_MESSAGE, PHONE_PATTERN_MESSAGE,
    };
    use crate::shared::clock::ManualClock;

    mock! {
        pub Submitter {}

        #[async_trait]
        impl FormSubmitter for Submitter {
            async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
        }
    }

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 5, 4, 12, 0, 0).unwrap(),
        ))
    }

    fn form(clock: &Arc<ManualClock>) -> ContactFormService<Arc<ManualClock>> {
        ContactFormService::new(ContactFormSchema::standard().unwrap(), clock.clone())
    }

    fn fill_valid(form: &mut ContactFormService<Arc<ManualClock>>) {
        form.input(FieldName::Name, "Ada Lovelace");
        form.input(FieldName::Email, "ada@example.com");
        form.input(FieldName::Phone, "+44 20 7946 0018");
        form.input(FieldName::Msg, "Hello there");
    }

    #[test]
    fn counter_is_shown_on_load() {
        let form = form(&clock());

        assert_eq!(form.info().text, "500 characters remaining.");
        assert!(!form.info().near_limit);
    }

    #[test]
    fn disallowed_name_character_flashes_and_reports() {
        let clock = clock();
        let mut form = form(&clock);

        form.input(FieldName::Name, "Ada9");

        assert_eq!(form.validation_message(FieldName::Name), Some(NAME_TYPING_MESSAGE));
        assert_eq!(form.error_text(), NAME_TYPING_MESSAGE);
        assert!(form.is_flashing(FieldName::Name));

        clock.advance(Duration::milliseconds(FLASH_MS));
        assert!(!form.is_flashing(FieldName::Name));
        assert_eq!(form.error_text(), NAME_TYPING_MESSAGE);

        clock.advance(Duration::milliseconds(ERROR_AUTO_CLEAR_MS));
        assert_eq!(form.error_text(), "");
    }

    #[test]
    fn replaced_error_is_not_cleared_by_earlier_timer() {
        let clock = clock();
        let mut form = form(&clock);

        form.input(FieldName::Name, "Ada9");
        clock.advance(Duration::milliseconds(2000));
        form.input(FieldName::Phone, "555-CALL");
        clock.advance(Duration::milliseconds(2000));

        assert_eq!(form.error_text(), PHONE_PATTERN_MESSAGE);
    }

    #[test]
    fn fixing_field_clears_only_its_own_message() {
        let clock = clock();
        let mut form = form(&clock);

        form.input(FieldName::Name, "Ada9");
        form.input(FieldName::Name, "Ada");
        assert_eq!(form.error_text(), "");
        assert_eq!(form.validation_message(FieldName::Name), None);

        form.input(FieldName::Phone, "x");
        form.input(FieldName::Name, "Ada L");
        assert_eq!(form.error_text(), PHONE_PATTERN_MESSAGE);
    }

    #[test]
    fn every_letters_and_spaces_name_is_accepted_while_typing() {
        let mut form = form(&clock());

        for value in ["a", "Ada", "Ada Lovelace", "  spaced  ", "ZZ top"] {
            form.input(FieldName::Name, value);
            assert_eq!(form.validation_message(FieldName::Name), None, "{value}");
        }
        for value in ["Ada!", "née", "a_b", "12"] {
            form.input(FieldName::Name, value);
            assert!(form.validation_message(FieldName::Name).is_some(), "{value}");
        }
    }

    #[test]
    fn remaining_counter_and_near_limit_boundary() {
        let mut form = form(&clock());

        form.input(FieldName::Msg, "a".repeat(449));
        assert_eq!(form.info().text, "51 characters remaining.");
        assert!(!form.info().near_limit);

        form.input(FieldName::Msg, "a".repeat(450));
        assert_eq!(form.info().text, "50 characters remaining.");
        assert!(form.info().near_limit);

        form.input(FieldName::Msg, "a".repeat(500));
        assert_eq!(form.info().text, "0 characters remaining.");
        assert_eq!(form.validation_message(FieldName::Msg), None);
    }

    #[test]
    fn over_long_message_is_invalid() {
        let mut form = form(&clock());

        form.input(FieldName::Msg, "a".repeat(501));

        assert_eq!(form.validation_message(FieldName::Msg), Some(TOO_LONG_VALIDITY));
        assert_eq!(form.error_text(), TOO_LONG_MESSAGE);
    }

    #[test]
    fn counter_uses_utf16_units() {
        let schema = ContactFormSchema::with_message_max(10).unwrap();
        let mut form = ContactFormService::new(schema, clock());

        form.input(FieldName::Msg, "🚀🚀🚀");

        assert_eq!(form.info().text, "4 characters remaining.");
    }

    #[test]
    fn empty_name_with_valid_email_blocks_with_one_error() {
        let mut form = form(&clock());
        form.input(FieldName::Email, "ada@example.com");

        let outcome = form.submit();

        let SubmitOutcome::Blocked { errors, focus } = outcome else {
            panic!("expected blocked submission");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FieldName::Name);
        assert_eq!(errors[0].message, "Name is required.");
        assert_eq!(focus, FieldName::Name);
        assert_eq!(form.focused(), Some(FieldName::Name));
        assert_eq!(form.error_text(), "Name: Name is required.");
        assert_eq!(form.audit_field(), None);
    }

    #[test]
    fn first_invalid_field_in_form_order_gets_focus() {
        let mut form = form(&clock());
        form.input(FieldName::Name, "Ada");
        form.input(FieldName::Email, "nope");
        form.input(FieldName::Phone, "123");

        let SubmitOutcome::Blocked { errors, focus } = form.submit() else {
            panic!("expected blocked submission");
        };

        assert_eq!(focus, FieldName::Email);
        assert_eq!(
            errors.iter().map(|e| e.field).collect::<Vec<_>>(),
            vec![FieldName::Email, FieldName::Phone]
        );
        assert_eq!(
            form.validation_message(FieldName::Phone),
            Some("Phone must be at least 7 characters long.")
        );
    }

    #[test]
    fn valid_submit_writes_accumulated_audit_trail() {
        let clock = clock();
        let mut form = form(&clock);

        form.submit();
        clock.advance(Duration::seconds(5));
        form.input(FieldName::Email, "ada@example.com");
        form.submit();
        assert_eq!(form.error_log().len(), 3);

        fill_valid(&mut form);
        let SubmitOutcome::Ready(submission) = form.submit() else {
            panic!("expected ready submission");
        };

        assert_eq!(form.error_text(), "");
        assert_eq!(form.info().text, READY_MESSAGE);
        assert_eq!(submission.name, "Ada Lovelace");

        let audit: Vec<FormErrorRecord> =
            serde_json::from_str(form.audit_field().unwrap()).unwrap();
        assert_eq!(audit.len(), 3);
        assert_eq!(audit[0].field, FieldName::Name);
        assert_eq!(audit[1].field, FieldName::Email);
        assert_eq!(audit[2].time, "2025-05-04T12:00:05.000Z");
        assert_eq!(submission.form_errors, form.audit_field().unwrap());
    }

    #[test]
    fn first_valid_submit_has_empty_audit_array() {
        let mut form = form(&clock());
        fill_valid(&mut form);

        assert!(matches!(form.submit(), SubmitOutcome::Ready(_)));
        assert_eq!(form.audit_field(), Some("[]"));
    }

    #[tokio::test]
    async fn submitter_only_called_for_valid_form() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .withf(|s| s.email == "ada@example.com" && s.form_errors.starts_with('['))
            .times(1)
            .returning(|_| Ok(()));

        let mut form = form(&clock());
        let blocked = form.submit_with(&submitter).await.unwrap();
        assert!(matches!(blocked, SubmitOutcome::Blocked { .. }));

        fill_valid(&mut form);
        let ready = form.submit_with(&submitter).await.unwrap();
        assert!(matches!(ready, SubmitOutcome::Ready(_)));
    }

    #[tokio::test]
    async fn submitter_failure_is_returned() {
        let mut submitter = MockSubmitter::new();
        submitter
            .expect_submit()
            .returning(|_| Err(SubmitError::Rejected(503)));

        let mut form = form(&clock());
        fill_valid(&mut form);

        assert!(matches!(
            form.submit_with(&submitter).await,
            Err(SubmitError::Rejected(503))
        ));
    }
}
