use serde::{Deserialize, Serialize};

/// HTTP method an admin action is issued with. Closed set so a typo in the
/// panel config is rejected at parse time instead of producing a bogus
/// request on click.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum Verb {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "PATCH")]
    Patch,
    #[serde(rename = "DELETE")]
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }

    pub fn method(&self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }

    /// Drives button styling only, never request behavior.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Verb::Delete)
    }
}

/// One action to perform against the admin backend. The endpoint is passed
/// through to the HTTP layer untouched.
#[derive(Clone, PartialEq, Debug)]
pub struct ActionRequest {
    pub endpoint: String,
    pub verb: Verb,
}

impl ActionRequest {
    pub fn new(endpoint: impl Into<String>, verb: Verb) -> Self {
        Self {
            endpoint: endpoint.into(),
            verb,
        }
    }
}

/// Visual tone of a result dialog.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogTone {
    Success,
    Error,
}

/// Everything a result dialog needs to render, plus what dismissing it
/// should do.
#[derive(Clone, PartialEq, Debug)]
pub struct DialogSpec {
    pub title: String,
    pub message: String,
    pub tone: DialogTone,
    pub reload_on_dismiss: bool,
}
