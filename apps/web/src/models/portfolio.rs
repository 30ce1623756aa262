use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::nullable;
use crate::models::resume::ParsedResume;

/// Light or dark page background. Decoding ignores case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    /// Page background painted behind the chosen template.
    pub fn background_hex(&self) -> &'static str {
        match self {
            DisplayMode::Light => "#F8FAFC",
            DisplayMode::Dark => "#0B1220",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(format!("Unknown display mode '{other}'")),
        }
    }
}

impl TryFrom<String> for DisplayMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A saved portfolio as stored by the external backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    pub template_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub data: ParsedResume,
    #[serde(default = "default_color", deserialize_with = "color_or_default")]
    pub color: String,
    #[serde(default, deserialize_with = "mode_or_default")]
    pub display_mode: DisplayMode,
    #[serde(default, deserialize_with = "nullable")]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /portfolios/` and `PUT /portfolios/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPayload {
    pub name: String,
    pub template_id: String,
    pub data: ParsedResume,
    pub color: String,
    pub display_mode: DisplayMode,
    pub is_published: bool,
}

/// Response of `PATCH /portfolios/{id}/publish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishState {
    #[serde(default)]
    pub success: bool,
    pub is_published: bool,
}

fn default_color() -> String {
    "blue".to_string()
}

fn color_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_color))
}

/// Stored modes are free text; anything unrecognised reads as light.
fn mode_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DisplayMode, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .and_then(|mode| mode.parse().ok())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_portfolio_decodes_with_backend_defaults() {
        let portfolio: Portfolio = serde_json::from_value(json!({
            "id": "p-1",
            "user_id": "u-1",
            "name": "Main",
            "template_id": "modern-minimal",
            "data": { "skills": ["Rust"] },
            "created_at": "2025-01-02T03:04:05Z",
            "updated_at": "2025-01-02T03:04:05Z"
        }))
        .unwrap();

        assert_eq!(portfolio.color, "blue");
        assert_eq!(portfolio.display_mode, DisplayMode::Light);
        assert!(!portfolio.is_published);
        assert_eq!(portfolio.data.skills, vec!["Rust"]);
    }

    #[test]
    fn test_portfolio_tolerates_null_and_mixed_case_fields() {
        let record = |display_mode: serde_json::Value| {
            json!({
                "id": "p-2",
                "name": "Resume 2025",
                "template_id": "creative-bold",
                "data": null,
                "color": null,
                "display_mode": display_mode,
                "is_published": null,
                "created_at": "2025-01-02T03:04:05Z",
                "updated_at": "2025-01-02T03:04:05Z"
            })
        };

        let portfolio: Portfolio = serde_json::from_value(record(json!(null))).unwrap();
        assert_eq!(portfolio.color, "blue");
        assert_eq!(portfolio.display_mode, DisplayMode::Light);
        assert!(!portfolio.is_published);

        let portfolio: Portfolio = serde_json::from_value(record(json!("Dark"))).unwrap();
        assert_eq!(portfolio.display_mode, DisplayMode::Dark);

        let portfolio: Portfolio = serde_json::from_value(record(json!("sepia"))).unwrap();
        assert_eq!(portfolio.display_mode, DisplayMode::Light);

        let listed: Vec<Portfolio> =
            serde_json::from_value(json!([record(json!("DARK")), record(json!(null))])).unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn test_display_mode_wire_format() {
        assert_eq!(serde_json::to_value(DisplayMode::Dark).unwrap(), json!("dark"));
        assert_eq!("LIGHT".parse::<DisplayMode>().unwrap(), DisplayMode::Light);
        assert!("sepia".parse::<DisplayMode>().is_err());
        assert_eq!(serde_json::from_value::<DisplayMode>(json!("Dark")).unwrap(), DisplayMode::Dark);
        assert!(serde_json::from_value::<DisplayMode>(json!("sepia")).is_err());
    }
}
