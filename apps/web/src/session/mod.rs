//! Per-visitor state for the upload -> template -> preview flow.
//!
//! One typed `Session` holds what a browser would otherwise keep in local
//! storage, under the same key names so the JSON round-trips unchanged.

pub mod extract;
pub mod handlers;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::customize::sections::SectionList;
use crate::models::portfolio::DisplayMode;
use crate::models::resume::ParsedResume;
use crate::render::color::DEFAULT_ACCENT;
use crate::render::TemplateId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub resume_data: Option<ParsedResume>,
    #[serde(default)]
    pub selected_template: Option<TemplateId>,
    #[serde(default = "default_color")]
    pub selected_color: String,
    #[serde(default)]
    pub selected_mode: DisplayMode,
    #[serde(default)]
    pub custom_sections: Option<SectionList>,
    #[serde(default)]
    pub current_portfolio_id: Option<String>,
    /// Name of the saved portfolio being edited.
    #[serde(default)]
    pub portfolio_name: Option<String>,
    /// Bearer token for the backend. Never serialized.
    #[serde(skip)]
    pub access_token: Option<String>,
}

fn default_color() -> String {
    DEFAULT_ACCENT.to_string()
}

impl Default for Session {
    fn default() -> Self {
        Self {
            resume_data: None,
            selected_template: None,
            selected_color: default_color(),
            selected_mode: DisplayMode::default(),
            custom_sections: None,
            current_portfolio_id: None,
            portfolio_name: None,
            access_token: None,
        }
    }
}

impl Session {
    /// Resume data worth rendering, if any.
    pub fn resume(&self) -> Option<&ParsedResume> {
        self.resume_data.as_ref().filter(|r| !r.is_blank())
    }

    /// Detaches the work from the saved portfolio it came from.
    pub fn forget_saved(&mut self) {
        self.current_portfolio_id = None;
        self.portfolio_name = None;
    }

    /// Forgets the current resume and everything chosen for it. Keeps the sign-in.
    pub fn start_over(&mut self) {
        *self = Session {
            access_token: self.access_token.take(),
            ..Session::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_storage_key_names() {
        let mut session = Session {
            selected_template: Some(TemplateId::CreativeBold),
            current_portfolio_id: Some("p-7".into()),
            access_token: Some("secret".into()),
            ..Default::default()
        };
        session.custom_sections = Some(SectionList::default());
        let value = serde_json::to_value(&session).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "resumeData",
            "selectedTemplate",
            "selectedColor",
            "selectedMode",
            "customSections",
            "currentPortfolioId",
            "portfolioName",
        ] {
            assert!(keys.contains(&key), "{key}");
        }
        assert!(!value.to_string().contains("secret"));
        assert_eq!(value["selectedTemplate"], "creative-bold");
        assert_eq!(value["selectedColor"], "#2563EB");
        assert_eq!(value["selectedMode"], "light");
    }

    #[test]
    fn test_decodes_stored_state_with_defaults() {
        let session: Session = serde_json::from_value(json!({
            "resumeData": { "skills": ["Rust"] },
            "selectedTemplate": "3"
        }))
        .unwrap();
        assert_eq!(session.selected_template, Some(TemplateId::CreativeBold));
        assert_eq!(session.selected_color, DEFAULT_ACCENT);
        assert_eq!(session.resume().unwrap().skills, ["Rust"]);
    }

    #[test]
    fn test_start_over_keeps_token() {
        let mut session = Session {
            resume_data: Some(ParsedResume::default()),
            selected_template: Some(TemplateId::Custom),
            selected_color: "#EF4444".into(),
            access_token: Some("tok".into()),
            ..Default::default()
        };
        session.start_over();
        assert_eq!(session.access_token.as_deref(), Some("tok"));
        assert!(session.resume_data.is_none());
        assert!(session.selected_template.is_none());
        assert_eq!(session.selected_color, DEFAULT_ACCENT);
    }
}
