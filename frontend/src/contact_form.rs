//! Submission lifecycle of the contact form.
//!
//! `Idle -> Submitting -> {Succeeded, Failed}`; a finished submission can be
//! retried, an in-flight one cannot be started again.

use thiserror::Error;

use crate::relay::{EmailRelay, RelayError, RelayReply, TemplateParams};

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I'll get back to you soon.";
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }

    /// `id` of the input element bound to this field.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn first_blank(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    InFlight,
    #[error("{} is required", .0.label())]
    MissingField(Field),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    fields: ContactFields,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.get_mut(field) = value;
    }

    /// Enters `Submitting` and hands back the payload for the relay.
    pub fn begin_submit(&mut self) -> Result<TemplateParams, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        if let Some(field) = self.fields.first_blank() {
            return Err(SubmitError::MissingField(field));
        }

        self.status = SubmissionStatus::Submitting;
        Ok(TemplateParams::from(&self.fields))
    }

    /// Applies the relay outcome of the submission in flight.
    pub fn resolve<R: EmailRelay>(&mut self, relay: &R, outcome: Result<RelayReply, RelayError>) {
        if !self.is_submitting() {
            log::warn!("Dropping relay outcome with no submission in flight");
            return;
        }

        self.status = match outcome {
            Ok(reply) if relay.is_success(&reply) => {
                self.fields = ContactFields::default();
                SubmissionStatus::Succeeded(SUCCESS_MESSAGE.to_string())
            }
            Ok(reply) => {
                log::warn!("Relay answered {} {:?}", reply.status, reply.text);
                SubmissionStatus::Failed(FALLBACK_FAILURE_MESSAGE.to_string())
            }
            Err(err) => SubmissionStatus::Failed(failure_message(&err)),
        };
    }
}

fn failure_message(err: &RelayError) -> String {
    match err {
        RelayError::Transport(text) | RelayError::Rejected { text, .. }
            if !text.trim().is_empty() =>
        {
            text.clone()
        }
        RelayError::Configuration(missing) => {
            log::warn!("Contact form relay is missing its {}", missing);
            FALLBACK_FAILURE_MESSAGE.to_string()
        }
        _ => FALLBACK_FAILURE_MESSAGE.to_string(),
    }
}

/// Runs one full submission against `relay`.
#[allow(dead_code)]
pub async fn submit<R: EmailRelay>(
    state: &mut ContactFormState,
    relay: &R,
) -> Result<(), SubmitError> {
    let params = state.begin_submit()?;
    let outcome = relay.send(params).await;
    state.resolve(relay, outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct MockRelay {
        outcome: Result<RelayReply, RelayError>,
        sent: RefCell<Vec<TemplateParams>>,
    }

    impl MockRelay {
        fn replying(text: &str) -> Self {
            Self {
                outcome: Ok(RelayReply {
                    status: 200,
                    text: text.to_string(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: RelayError) -> Self {
            Self {
                outcome: Err(err),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl EmailRelay for MockRelay {
        async fn send(&self, params: TemplateParams) -> Result<RelayReply, RelayError> {
            self.sent.borrow_mut().push(params);
            self.outcome.clone()
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.set_field(Field::Name, "A".to_string());
        state.set_field(Field::Email, "a@b.com".to_string());
        state.set_field(Field::Subject, "S".to_string());
        state.set_field(Field::Message, "M".to_string());
        state
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = ContactFormState::new();
        assert_eq!(state.status(), &SubmissionStatus::Idle);
        assert_eq!(state.fields(), &ContactFields::default());
    }

    #[test]
    fn ok_reply_clears_fields_and_confirms() {
        let relay = MockRelay::replying("OK");
        let mut state = filled();

        block_on(submit(&mut state, &relay)).unwrap();

        assert_eq!(state.fields(), &ContactFields::default());
        match state.status() {
            SubmissionStatus::Succeeded(message) => assert!(!message.is_empty()),
            other => panic!("unexpected status {:?}", other),
        }
        assert_eq!(
            relay.sent.borrow().as_slice(),
            [TemplateParams {
                user_name: "A".to_string(),
                user_email: "a@b.com".to_string(),
                subject: "S".to_string(),
                message: "M".to_string(),
            }]
        );
    }

    #[test]
    fn transport_failure_keeps_fields_and_shows_its_text() {
        let relay = MockRelay::failing(RelayError::Transport("network down".to_string()));
        let mut state = filled();
        let before = state.fields().clone();

        block_on(submit(&mut state, &relay)).unwrap();

        assert_eq!(state.fields(), &before);
        assert_eq!(
            state.status(),
            &SubmissionStatus::Failed("network down".to_string())
        );
    }

    #[test]
    fn non_ok_reply_fails_with_fallback() {
        let relay = MockRelay::replying("ERROR");
        let mut state = filled();
        let before = state.fields().clone();

        block_on(submit(&mut state, &relay)).unwrap();

        assert_eq!(state.fields(), &before);
        assert_eq!(
            state.status(),
            &SubmissionStatus::Failed(FALLBACK_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn rejection_uses_relay_text_when_present() {
        let relay = MockRelay::failing(RelayError::Rejected {
            status: 400,
            text: "The template ID is invalid".to_string(),
        });
        let mut state = filled();
        block_on(submit(&mut state, &relay)).unwrap();
        assert_eq!(
            state.status(),
            &SubmissionStatus::Failed("The template ID is invalid".to_string())
        );

        let relay = MockRelay::failing(RelayError::Rejected {
            status: 502,
            text: String::new(),
        });
        block_on(submit(&mut state, &relay)).unwrap();
        assert_eq!(
            state.status(),
            &SubmissionStatus::Failed(FALLBACK_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn missing_configuration_shows_fallback() {
        let relay = MockRelay::failing(RelayError::Configuration("service id"));
        let mut state = filled();
        block_on(submit(&mut state, &relay)).unwrap();
        assert_eq!(
            state.status(),
            &SubmissionStatus::Failed(FALLBACK_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn second_submit_is_blocked_while_in_flight() {
        let relay = MockRelay::replying("OK");
        let mut state = filled();

        let params = state.begin_submit().unwrap();
        assert!(state.is_submitting());
        assert_eq!(state.begin_submit(), Err(SubmitError::InFlight));
        assert_eq!(
            block_on(submit(&mut state, &relay)),
            Err(SubmitError::InFlight)
        );
        assert!(relay.sent.borrow().is_empty());

        let outcome = block_on(relay.send(params));
        state.resolve(&relay, outcome);
        assert!(matches!(state.status(), SubmissionStatus::Succeeded(_)));
        assert_eq!(relay.sent.borrow().len(), 1);
    }

    #[test]
    fn failed_submission_can_be_retried() {
        let mut state = filled();
        block_on(submit(&mut state, &MockRelay::replying("ERROR"))).unwrap();
        assert!(matches!(state.status(), SubmissionStatus::Failed(_)));

        let relay = MockRelay::replying("OK");
        block_on(submit(&mut state, &relay)).unwrap();
        assert!(matches!(state.status(), SubmissionStatus::Succeeded(_)));
        assert_eq!(relay.sent.borrow().len(), 1);
    }

    #[test]
    fn blank_field_never_reaches_the_relay() {
        let relay = MockRelay::replying("OK");
        let mut state = filled();
        state.set_field(Field::Subject, "  ".to_string());

        assert_eq!(
            block_on(submit(&mut state, &relay)),
            Err(SubmitError::MissingField(Field::Subject))
        );
        assert_eq!(state.status(), &SubmissionStatus::Idle);
        assert!(relay.sent.borrow().is_empty());
    }

    #[test]
    fn stray_outcome_is_ignored() {
        let relay = MockRelay::replying("OK");
        let mut state = filled();
        state.resolve(&relay, Ok(RelayReply { status: 200, text: "OK".to_string() }));
        assert_eq!(state.status(), &SubmissionStatus::Idle);
        assert_eq!(state.fields().name, "A");
    }

    #[test]
    fn custom_success_predicate_is_respected() {
        struct StatusRelay;

        impl EmailRelay for StatusRelay {
            async fn send(&self, _params: TemplateParams) -> Result<RelayReply, RelayError> {
                Ok(RelayReply {
                    status: 202,
                    text: "queued".to_string(),
                })
            }

            fn is_success(&self, reply: &RelayReply) -> bool {
                (200..300).contains(&reply.status)
            }
        }

        let mut state = filled();
        block_on(submit(&mut state, &StatusRelay)).unwrap();
        assert!(matches!(state.status(), SubmissionStatus::Succeeded(_)));
    }
}
