use crate::action::types::{ActionRequest, Verb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Panel config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PanelError>;

/// One clickable action in the panel.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PanelAction {
    pub label: String,
    pub endpoint: String,
    pub verb: Verb,
}

impl PanelAction {
    pub fn request(&self) -> ActionRequest {
        ActionRequest::new(self.endpoint.clone(), self.verb)
    }
}

/// A titled group of actions, one per backend resource.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
pub struct ResourceSection {
    pub name: String,
    pub actions: Vec<PanelAction>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PanelConfig {
    pub title: String,
    pub resources: Vec<ResourceSection>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Admin Panel".to_string(),
            resources: Vec::new(),
        }
    }
}

const PANEL_JSONC: &str = include_str!("../../assets/panel.jsonc");

/// Parses the embedded panel catalog. The file allows comments, which are
/// stripped before deserializing.
pub fn load_panel() -> Result<PanelConfig> {
    parse_panel(PANEL_JSONC)
}

fn parse_panel(content: &str) -> Result<PanelConfig> {
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: PanelConfig = serde_json::from_reader(stripped)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_panel_parses() {
        let panel = load_panel().expect("embedded panel.jsonc should parse");
        assert!(!panel.title.is_empty());
        assert!(!panel.resources.is_empty());
    }

    #[test]
    fn test_comments_are_allowed() {
        let panel = parse_panel(
            r#"{
                // catalog served to the panel
                "title": "Admin",
                "resources": [
                    {
                        "name": "users",
                        "actions": [
                            { "label": "Delete", "endpoint": "/users/delete/3", "verb": "DELETE" }
                        ]
                    }
                ]
            }"#,
        )
        .expect("should parse");

        assert_eq!(panel.title, "Admin");
        let action = &panel.resources[0].actions[0];
        assert_eq!(action.verb, Verb::Delete);
        assert_eq!(action.request().endpoint, "/users/delete/3");
    }

    #[test]
    fn test_bad_verb_is_rejected() {
        let result = parse_panel(
            r#"{
                "title": "Admin",
                "resources": [
                    {
                        "name": "users",
                        "actions": [
                            { "label": "Nuke", "endpoint": "/users/1", "verb": "NUKE" }
                        ]
                    }
                ]
            }"#,
        );
        assert!(result.is_err());
    }
}
