//! Email relay adapter.
//!
//! Sends the contact form through the EmailJS browser widget loaded in the
//! page head. The widget is initialised lazily with the public key on the
//! first send.

use std::sync::OnceLock;

use dioxus::prelude::*;
use folio_core::{ContactMessage, EmailRelay, RelayConfig, RelayError};
use serde::{Deserialize, Serialize};

static PUBLIC_KEY: OnceLock<String> = OnceLock::new();

/// Record the widget's public key; later calls are ignored
pub fn init(public_key: &str) {
    if PUBLIC_KEY.set(public_key.to_string()).is_ok() {
        tracing::debug!("Email relay configured");
    }
}

/// Awaits `emailjs.send` and replies with the outcome
const SEND_JS: &str = r#"
const request = await dioxus.recv();
if (!window.emailjs) {
    dioxus.send({ ok: false, loaded: false, error: null });
} else {
    try {
        if (!window.__folioRelayReady) {
            window.emailjs.init({ publicKey: request.public_key });
            window.__folioRelayReady = true;
        }
        await window.emailjs.send(request.service_id, request.template_id, request.params);
        dioxus.send({ ok: true, loaded: true, error: null });
    } catch (err) {
        const text = (err && (err.text || err.message)) || String(err);
        dioxus.send({ ok: false, loaded: true, error: text });
    }
}
"#;

#[derive(Serialize)]
struct SendRequest<'a> {
    public_key: &'a str,
    service_id: &'a str,
    template_id: &'a str,
    params: &'a ContactMessage,
}

#[derive(Deserialize)]
struct RelayReply {
    ok: bool,
    loaded: bool,
    error: Option<String>,
}

impl RelayReply {
    fn into_outcome(self) -> Result<(), RelayError> {
        match self {
            RelayReply { ok: true, .. } => Ok(()),
            RelayReply { loaded: false, .. } => Err(RelayError::NotLoaded),
            RelayReply { error, .. } => Err(RelayError::Delivery(
                error.unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }
}

/// The EmailJS widget in the page
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    public_key: &'static str,
}

impl EmailJsRelay {
    /// The relay, once [`init`] has supplied a public key
    pub fn initialized() -> Option<Self> {
        PUBLIC_KEY.get().map(|key| Self {
            public_key: key.as_str(),
        })
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send_form(&self, config: &RelayConfig, form: &ContactMessage) -> Result<(), RelayError> {
        let request = SendRequest {
            public_key: self.public_key,
            service_id: &config.service_id,
            template_id: &config.template_id,
            params: form,
        };

        let mut eval = document::eval(SEND_JS);
        eval.send(&request)
            .map_err(|e| RelayError::Delivery(format!("{:?}", e)))?;

        let reply = eval
            .recv::<RelayReply>()
            .await
            .map_err(|e| RelayError::Delivery(format!("{:?}", e)))?;
        reply.into_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> Result<(), RelayError> {
        serde_json::from_str::<RelayReply>(json).unwrap().into_outcome()
    }

    #[test]
    fn test_reply_outcomes() {
        assert_eq!(reply(r#"{ "ok": true, "loaded": true, "error": null }"#), Ok(()));
        assert_eq!(
            reply(r#"{ "ok": false, "loaded": false, "error": null }"#),
            Err(RelayError::NotLoaded)
        );
        assert_eq!(
            reply(r#"{ "ok": false, "loaded": true, "error": "Bad template" }"#),
            Err(RelayError::Delivery("Bad template".to_string()))
        );
    }
}
