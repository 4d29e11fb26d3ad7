use log::Level;

use crate::typewriter::TypewriterTiming;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials for the email relay. All three values are opaque to us; a
/// missing one is only noticed when the relay is called.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Values baked in by trunk from the build environment.
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or_default().to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or_default().to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or_default().to_string(),
        }
    }

    /// Name of the first credential that is blank, if any.
    pub fn missing(&self) -> Option<&'static str> {
        if self.service_id.trim().is_empty() {
            Some("service id")
        } else if self.template_id.trim().is_empty() {
            Some("template id")
        } else if self.public_key.trim().is_empty() {
            Some("public key")
        } else {
            None
        }
    }
}

pub fn typewriter_timing() -> TypewriterTiming {
    TypewriterTiming {
        type_interval_ms: 100,
        delete_interval_ms: 50,
        hold_ms: 2000,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_are_reported_in_order() {
        let mut config = RelayConfig::default();
        assert_eq!(config.missing(), Some("service id"));

        config.service_id = "service_x".to_string();
        assert_eq!(config.missing(), Some("template id"));

        config.template_id = "template_y".to_string();
        config.public_key = "   ".to_string();
        assert_eq!(config.missing(), Some("public key"));

        config.public_key = "pk".to_string();
        assert_eq!(config.missing(), None);
    }
}
