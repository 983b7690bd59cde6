use crate::action::types::{ActionRequest, DialogSpec, DialogTone};
use thiserror::Error;

/// The single failure shape of an admin action. Covers transport errors and
/// non-2xx statuses alike: `reason` becomes the error dialog title, `body`
/// its message.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("{reason}")]
pub struct RequestFailed {
    pub reason: String,
    pub body: String,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ActionOutcome {
    Success { body: String },
    Failure(RequestFailed),
}

impl ActionOutcome {
    /// Maps the outcome to the dialog the user sees. Success reads "Done"
    /// over the verbatim response body and asks for a page reload on
    /// dismissal; failure shows the error indicator and body and leaves the
    /// page alone.
    pub fn dialog(self) -> DialogSpec {
        match self {
            ActionOutcome::Success { body } => DialogSpec {
                title: "Done".to_string(),
                message: body,
                tone: DialogTone::Success,
                reload_on_dismiss: true,
            },
            ActionOutcome::Failure(err) => DialogSpec {
                title: err.reason,
                message: err.body,
                tone: DialogTone::Error,
                reload_on_dismiss: false,
            },
        }
    }
}

/// Classifies a completed HTTP exchange. The body is never parsed, only
/// carried.
pub fn outcome_for(status: u16, reason: Option<&str>, body: String) -> ActionOutcome {
    if (200..300).contains(&status) {
        return ActionOutcome::Success { body };
    }

    let reason = reason
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"));

    ActionOutcome::Failure(RequestFailed { reason, body })
}

/// Issues `verb endpoint` and reports how it went. The endpoint string goes
/// to the HTTP layer exactly as configured; on wasm, relative paths resolve
/// against the page origin.
pub async fn perform(request: &ActionRequest) -> ActionOutcome {
    let response = reqwest::Client::new()
        .request(request.verb.method(), &request.endpoint)
        .send()
        .await;

    match response {
        Ok(resp) => {
            let status = resp.status();
            let reason = status.canonical_reason().map(str::to_string);
            match resp.text().await {
                Ok(body) => outcome_for(status.as_u16(), reason.as_deref(), body),
                Err(e) => ActionOutcome::Failure(RequestFailed {
                    reason: reason.unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
                    body: e.to_string(),
                }),
            }
        }
        Err(e) => ActionOutcome::Failure(RequestFailed {
            reason: "Network Error".to_string(),
            body: e.to_string(),
        }),
    }
}

/// Full document re-fetch from the origin server, discarding the cached
/// copy. No-op outside a browser window.
pub fn force_reload() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.reload_with_forceget(true).is_err() {
            let _ = location.reload();
        }
    }
}
