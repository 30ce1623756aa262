//! Template renderers.
//!
//! Every template is a pure function of its [`RenderInput`] and the active
//! [`Tab`]: same input, same bytes out. Dispatch goes through one exhaustive
//! match on [`TemplateId`].

pub mod classic_professional;
pub mod color;
pub mod creative_bold;
pub mod custom;
pub mod elegant_sophisticated;
pub mod export;
pub mod html;
pub mod modern_minimal;
pub mod shared;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::customize::sections::SectionList;
use crate::models::resume::ParsedResume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[serde(alias = "1")]
    ModernMinimal,
    #[serde(alias = "2")]
    ClassicProfessional,
    #[serde(alias = "3")]
    CreativeBold,
    #[serde(alias = "4")]
    ElegantSophisticated,
    Custom,
}

impl TemplateId {
    /// The fixed templates offered on the selection screen, in display order.
    pub const CATALOG: [TemplateId; 4] = [
        TemplateId::ModernMinimal,
        TemplateId::ClassicProfessional,
        TemplateId::CreativeBold,
        TemplateId::ElegantSophisticated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::ModernMinimal => "modern-minimal",
            TemplateId::ClassicProfessional => "classic-professional",
            TemplateId::CreativeBold => "creative-bold",
            TemplateId::ElegantSophisticated => "elegant-sophisticated",
            TemplateId::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::ModernMinimal => "Modern Minimal",
            TemplateId::ClassicProfessional => "Classic Professional",
            TemplateId::CreativeBold => "Creative Bold",
            TemplateId::ElegantSophisticated => "Elegant Sophisticated",
            TemplateId::Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::ModernMinimal => "Modern and minimalist design",
            TemplateId::ClassicProfessional => "Classic professional layout",
            TemplateId::CreativeBold => "Creative and bold design",
            TemplateId::ElegantSophisticated => "Elegant and sophisticated",
            TemplateId::Custom => "Your own section layout",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "modern-minimal" | "1" => Ok(TemplateId::ModernMinimal),
            "classic-professional" | "2" => Ok(TemplateId::ClassicProfessional),
            "creative-bold" | "3" => Ok(TemplateId::CreativeBold),
            "elegant-sophisticated" | "4" => Ok(TemplateId::ElegantSophisticated),
            "custom" => Ok(TemplateId::Custom),
            other => Err(format!("Unknown template '{other}'")),
        }
    }
}

/// The five in-page sections of a fixed template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    About,
    Projects,
    Skills,
    Experience,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::About,
        Tab::Projects,
        Tab::Skills,
        Tab::Experience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::About => "about",
            Tab::Projects => "projects",
            Tab::Skills => "skills",
            Tab::Experience => "experience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::About => "About",
            Tab::Projects => "Projects",
            Tab::Skills => "Skills",
            Tab::Experience => "Experience",
        }
    }

    /// Unknown or missing values select the overview.
    pub fn from_query(value: Option<&str>) -> Tab {
        let Some(value) = value else {
            return Tab::Overview;
        };
        let value = value.trim();
        Tab::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

/// Everything a renderer reads. All resume content is optional.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub resume: Option<&'a ParsedResume>,
    pub main_color: &'a str,
    pub background_color: &'a str,
    /// Page the tab links point back to, e.g. `/preview`.
    pub tab_base: &'a str,
    /// Section layout for the custom template; the default list when absent.
    pub sections: Option<&'a SectionList>,
}

impl<'a> RenderInput<'a> {
    pub fn new(resume: Option<&'a ParsedResume>, main_color: &'a str, background_color: &'a str) -> Self {
        Self {
            resume,
            main_color,
            background_color,
            tab_base: "",
            sections: None,
        }
    }

    pub fn with_tab_base(mut self, tab_base: &'a str) -> Self {
        self.tab_base = tab_base;
        self
    }

    pub fn with_sections(mut self, sections: &'a SectionList) -> Self {
        self.sections = Some(sections);
        self
    }
}

/// Renders `template` as an HTML fragment showing the `tab` section.
pub fn render_portfolio(template: TemplateId, input: &RenderInput<'_>, tab: Tab) -> String {
    match template {
        TemplateId::ModernMinimal => modern_minimal::render(input, tab),
        TemplateId::ClassicProfessional => classic_professional::render(input, tab),
        TemplateId::CreativeBold => creative_bold::render(input, tab),
        TemplateId::ElegantSophisticated => elegant_sophisticated::render(input, tab),
        TemplateId::Custom => custom::render(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInformation, Project};

    const ALL_TEMPLATES: [TemplateId; 5] = [
        TemplateId::ModernMinimal,
        TemplateId::ClassicProfessional,
        TemplateId::CreativeBold,
        TemplateId::ElegantSophisticated,
        TemplateId::Custom,
    ];

    fn sample() -> ParsedResume {
        ParsedResume {
            personal_information: PersonalInformation {
                full_name: "Ada Lovelace".into(),
                ..Default::default()
            },
            skills: vec!["Analysis".into()],
            experience: vec![Experience {
                company: "Analytical Engine".into(),
                description: "Wrote the first program".into(),
                employed_dates: "1842-1843".into(),
            }],
            projects: vec![Project {
                title: "Note G".into(),
                description: "Bernoulli numbers".into(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_template_id_round_trip_and_aliases() {
        for id in ALL_TEMPLATES {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
            assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(id.as_str()));
        }
        assert_eq!("2".parse::<TemplateId>().unwrap(), TemplateId::ClassicProfessional);
        let aliased: TemplateId = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(aliased, TemplateId::ElegantSophisticated);
        assert!("brutalist".parse::<TemplateId>().is_err());
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(Tab::from_query(Some("Skills")), Tab::Skills);
        assert_eq!(Tab::from_query(Some("nope")), Tab::Overview);
        assert_eq!(Tab::from_query(None), Tab::Overview);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let resume = sample();
        for id in ALL_TEMPLATES {
            for tab in Tab::ALL {
                let input = RenderInput::new(Some(&resume), "#7C3AED", "#F8FAFC");
                let first = render_portfolio(id, &input, tab);
                let second = render_portfolio(id, &input, tab);
                assert_eq!(first, second, "{id} {tab:?}");
            }
        }
    }

    #[test]
    fn test_exactly_one_section_per_render() {
        let resume = sample();
        let input = RenderInput::new(Some(&resume), "#7C3AED", "#F8FAFC");
        for id in TemplateId::CATALOG {
            let html = render_portfolio(id, &input, Tab::Skills);
            assert_eq!(html.matches("data-section=").count(), 1, "{id}");
            assert!(html.contains("data-section=\"skills\""));
            assert!(html.contains("Analysis"));
            assert!(!html.contains("Bernoulli numbers"));
        }
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let resume = ParsedResume {
            overview: crate::models::resume::Overview {
                career_name: "Engineer".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let input = RenderInput::new(Some(&resume), "#2563EB", "#FFFFFF");
        for id in TemplateId::CATALOG {
            let page = |tab| render_portfolio(id, &input, tab);
            assert!(page(Tab::Overview).contains(shared::NO_NAME), "{id}");
            assert!(page(Tab::Overview).contains(shared::NO_SUMMARY), "{id}");
            assert!(page(Tab::About).contains(shared::NO_EDUCATION), "{id}");
            assert!(page(Tab::About).contains(shared::NO_LOCATION), "{id}");
            assert!(page(Tab::Projects).contains(shared::NO_PROJECTS), "{id}");
            assert!(page(Tab::Skills).contains(shared::NO_SKILLS), "{id}");
            assert!(page(Tab::Experience).contains(shared::NO_EXPERIENCE), "{id}");
        }
    }

    #[test]
    fn test_absent_resume_renders_notice() {
        let input = RenderInput::new(None, "#2563EB", "#FFFFFF");
        for id in ALL_TEMPLATES {
            assert!(render_portfolio(id, &input, Tab::Overview).contains(shared::NO_DATA), "{id}");
        }
    }

    #[test]
    fn test_contrast_clamp_reaches_output() {
        let resume = sample();
        let input = RenderInput::new(Some(&resume), "#FEF9C3", "#FFFFFF");
        for id in TemplateId::CATALOG {
            let html = render_portfolio(id, &input, Tab::Overview);
            assert!(html.contains(color::CLAMPED_DARK), "{id}");
            assert!(!html.to_lowercase().contains("#fef9c3"), "{id}");
        }
        let input = RenderInput::new(Some(&resume), "#050505", "#0B1220");
        for id in TemplateId::CATALOG {
            let html = render_portfolio(id, &input, Tab::Overview);
            assert!(html.contains(color::CLAMPED_LIGHT), "{id}");
        }
    }

    #[test]
    fn test_text_is_not_interpreted() {
        let mut resume = sample();
        resume.projects[0].title = "<script>alert(1)</script> **bold**".into();
        let input = RenderInput::new(Some(&resume), "#2563EB", "#FFFFFF");
        for id in TemplateId::CATALOG {
            let html = render_portfolio(id, &input, Tab::Projects);
            assert!(!html.contains("<script>"), "{id}");
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; **bold**"), "{id}");
        }
    }
}
