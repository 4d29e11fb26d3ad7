//! Email relay used by the contact form.
//!
//! The relay is an opaque external service. [`EmailRelay`] is the seam the
//! form talks to; [`EmailJsRelay`] is the production implementation that
//! posts to the EmailJS REST endpoint.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::{RelayConfig, EMAILJS_SEND_URL};
use crate::contact_form::ContactFields;

/// The form fields under the names the relay template expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub subject: String,
    pub message: String,
}

impl From<&ContactFields> for TemplateParams {
    fn from(fields: &ContactFields) -> Self {
        Self {
            user_name: fields.name.clone(),
            user_email: fields.email.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub text: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("email relay is not configured: missing {0}")]
    Configuration(&'static str),
    #[error("email relay rejected the message ({status}): {text}")]
    Rejected { status: u16, text: String },
    #[error("{0}")]
    Transport(String),
}

impl From<gloo_net::Error> for RelayError {
    fn from(err: gloo_net::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}

pub trait EmailRelay {
    /// Delivers one message. Called exactly once per submit.
    async fn send(&self, params: TemplateParams) -> Result<RelayReply, RelayError>;

    /// Whether a completed reply means the message went out.
    fn is_success(&self, reply: &RelayReply) -> bool {
        reply.text == "OK"
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsRelay {
    config: RelayConfig,
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            endpoint: EMAILJS_SEND_URL.to_string(),
        }
    }

    fn request<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: TemplateParams) -> Result<RelayReply, RelayError> {
        if let Some(missing) = self.config.missing() {
            return Err(RelayError::Configuration(missing));
        }

        log::debug!("Sending contact message to {}", self.endpoint);
        let response = Request::post(&self.endpoint)
            .json(&self.request(&params))?
            .send()
            .await?;

        let status = response.status();
        let accepted = response.ok();
        let text = response.text().await?;

        if accepted {
            Ok(RelayReply { status, text })
        } else {
            Err(RelayError::Rejected { status, text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    fn fields() -> ContactFields {
        ContactFields {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "M".to_string(),
        }
    }

    fn configured() -> RelayConfig {
        RelayConfig {
            service_id: "service_1".to_string(),
            template_id: "template_1".to_string(),
            public_key: "pk_1".to_string(),
        }
    }

    #[test]
    fn maps_form_fields_to_template_names() {
        let params = TemplateParams::from(&fields());
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "user_name": "A",
                "user_email": "a@b.com",
                "subject": "S",
                "message": "M",
            })
        );
    }

    #[test]
    fn request_body_carries_credentials_and_params() {
        let relay = EmailJsRelay::new(configured());
        let params = TemplateParams::from(&fields());
        let body = serde_json::to_value(relay.request(&params)).unwrap();

        assert_eq!(body["service_id"], "service_1");
        assert_eq!(body["template_id"], "template_1");
        assert_eq!(body["user_id"], "pk_1");
        assert_eq!(body["template_params"]["user_email"], "a@b.com");
    }

    #[test]
    fn missing_credentials_fail_without_a_request() {
        let relay = EmailJsRelay::new(RelayConfig {
            public_key: String::new(),
            ..configured()
        });
        let outcome = block_on(relay.send(TemplateParams::from(&fields())));
        assert_eq!(outcome, Err(RelayError::Configuration("public key")));
    }

    #[test]
    fn only_ok_text_counts_as_success() {
        let relay = EmailJsRelay::new(configured());
        let reply = |text: &str| RelayReply {
            status: 200,
            text: text.to_string(),
        };
        assert!(relay.is_success(&reply("OK")));
        assert!(!relay.is_success(&reply("ERROR")));
        assert!(!relay.is_success(&reply("ok")));
        assert!(!relay.is_success(&reply("")));
    }
}
