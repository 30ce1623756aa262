//! Building blocks shared by the fixed templates: theme resolution,
//! placeholder text, tab navigation and the five section bodies.

use crate::models::resume::ParsedResume;
use crate::render::color::{self, DEFAULT_BACKGROUND};
use crate::render::html::{escape, external_href, initials};
use crate::render::{RenderInput, Tab};

pub const NO_DATA: &str = "No resume data found";
pub const NO_DATA_HINT: &str = "Please upload a resume to view the portfolio.";
pub const NO_NAME: &str = "Your Name";
pub const NO_TITLE: &str = "Your Title";
pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_EDUCATION: &str = "No education listed.";
pub const NO_LOCATION: &str = "No location listed.";
pub const NO_CONTACT: &str = "No contact information listed.";
pub const NO_PROJECTS: &str = "No projects listed.";
pub const NO_SKILLS: &str = "No skills listed.";
pub const NO_EXPERIENCE: &str = "No experience listed.";
pub const NO_COMPANY: &str = "Company";

/// Foreground colors picked for a light or dark background.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub card_bg: &'static str,
    pub border: &'static str,
    pub divider: &'static str,
    pub chip_bg: &'static str,
}

/// Resolved look of one render.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent after the contrast re-clamp.
    pub accent: String,
    pub background: String,
    pub is_light: bool,
    pub palette: Palette,
    pub font_family: &'static str,
    pub heading_font: &'static str,
    pub radius: u8,
    pub shadow: &'static str,
    pub projects_heading: &'static str,
    pub tab_base: String,
}

impl Theme {
    pub fn resolve(input: &RenderInput<'_>, palette: fn(bool) -> Palette) -> Theme {
        let background = color::normalize_or(input.background_color, DEFAULT_BACKGROUND);
        let is_light = color::is_light(&background);
        Theme {
            accent: color::effective_accent(input.main_color, &background),
            is_light,
            palette: palette(is_light),
            background,
            font_family: "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif",
            heading_font: "inherit",
            radius: 12,
            shadow: if is_light {
                "0 6px 18px rgba(15,23,42,0.06)"
            } else {
                "0 8px 24px rgba(0,0,0,0.6)"
            },
            projects_heading: "Projects",
            tab_base: input.tab_base.to_string(),
        }
    }

    pub fn card_style(&self) -> String {
        format!(
            "background:{};border-radius:{}px;padding:18px;box-shadow:{};",
            self.palette.card_bg, self.radius, self.shadow
        )
    }

    pub fn tab_href(&self, tab: Tab) -> String {
        let separator = if self.tab_base.contains('?') { '&' } else { '?' };
        escape(&format!("{}{}tab={}", self.tab_base, separator, tab.as_str()))
    }
}

/// Read-only accessors over a resume with placeholder fallbacks applied.
pub struct ResumeView<'a> {
    pub resume: &'a ParsedResume,
}

impl<'a> ResumeView<'a> {
    /// `None` when there is nothing to show at all.
    pub fn from_input(input: &RenderInput<'a>) -> Option<ResumeView<'a>> {
        input
            .resume
            .filter(|r| !r.is_blank())
            .map(|resume| ResumeView { resume })
    }

    pub fn name(&self) -> &str {
        non_empty(&self.resume.personal_information.full_name).unwrap_or(NO_NAME)
    }

    pub fn initials(&self) -> String {
        initials(&self.resume.personal_information.full_name)
    }

    pub fn title(&self) -> &str {
        non_empty(&self.resume.overview.career_name).unwrap_or(NO_TITLE)
    }

    pub fn summary(&self) -> &str {
        non_empty(&self.resume.overview.resume_summary).unwrap_or(NO_SUMMARY)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.resume.personal_information.contact_info.email)
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(&self.resume.personal_information.contact_info.phone)
    }

    pub fn address(&self) -> Option<&str> {
        non_empty(&self.resume.personal_information.contact_info.address)
    }

    pub fn linkedin_href(&self) -> Option<String> {
        external_href(&self.resume.personal_information.contact_info.linkedin)
    }
}

pub fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Full-page notice used when no resume content was supplied.
pub fn empty_notice(theme: &Theme) -> String {
    format!(
        r#"<div class="portfolio portfolio-empty" style="padding:32px;max-width:960px;margin:0 auto;text-align:center;background:{bg};"><h2 style="color:{primary};margin-bottom:8px;">{title}</h2><p style="color:{muted};">{hint}</p></div>"#,
        bg = theme.background,
        primary = theme.palette.text_primary,
        muted = theme.palette.text_muted,
        title = NO_DATA,
        hint = NO_DATA_HINT,
    )
}

/// How the tab links are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Column,
    Row,
    Pills,
}

pub fn tab_nav(theme: &Theme, active: Tab, style: NavStyle) -> String {
    let direction = match style {
        NavStyle::Column => "column",
        NavStyle::Row | NavStyle::Pills => "row",
    };
    let mut out = format!(
        r#"<nav aria-label="Sections" style="display:flex;flex-direction:{direction};flex-wrap:wrap;gap:8px;">"#
    );
    for tab in Tab::ALL {
        let is_active = tab == active;
        let (bg, fg) = if is_active {
            (theme.accent.as_str(), active_text(theme))
        } else {
            ("transparent", theme.palette.text_primary)
        };
        let radius = match style {
            NavStyle::Pills => "999px",
            NavStyle::Column | NavStyle::Row => "8px",
        };
        let underline = if style == NavStyle::Row && is_active {
            format!("border-bottom:2px solid {};", theme.accent)
        } else {
            String::new()
        };
        let current = if is_active { r#" aria-current="page""# } else { "" };
        out.push_str(&format!(
            r#"<a href="{href}"{current} style="padding:10px 12px;border-radius:{radius};background:{bg};color:{fg};font-weight:600;text-decoration:none;{underline}">{label}</a>"#,
            href = theme.tab_href(tab),
            label = tab.label(),
        ));
    }
    out.push_str("</nav>");
    out
}

/// Text color on top of an accent-filled control.
pub fn active_text(theme: &Theme) -> &'static str {
    let accent_is_light = color::Rgb::parse(&theme.accent)
        .map(|c| c.brightness() > color::LIGHT_THRESHOLD)
        .unwrap_or(false);
    if accent_is_light {
        "#0f172a"
    } else {
        "#FFFFFF"
    }
}

pub fn contact_block(theme: &Theme, view: &ResumeView<'_>) -> String {
    let lines: Vec<&str> = [view.address(), view.email(), view.phone()]
        .into_iter()
        .flatten()
        .collect();
    let body = if lines.is_empty() {
        format!(r#"<div style="color:{};">{}</div>"#, theme.palette.text_muted, NO_CONTACT)
    } else {
        lines
            .iter()
            .map(|line| format!("<div>{}</div>", escape(line)))
            .collect()
    };
    format!(
        r#"<div class="contact" style="font-size:13px;color:{};line-height:1.5;"><div style="font-weight:700;margin-bottom:6px;">Contact</div>{body}</div>"#,
        theme.palette.text_secondary
    )
}

/// The body of the active tab. This is the only element tagged `data-section`.
pub fn section_body(theme: &Theme, view: &ResumeView<'_>, tab: Tab) -> String {
    let inner = match tab {
        Tab::Overview => overview(theme, view),
        Tab::About => about(theme, view),
        Tab::Projects => projects(theme, view),
        Tab::Skills => skills(theme, view),
        Tab::Experience => experience(theme, view),
    };
    format!(
        r#"<section data-section="{}" style="margin-bottom:18px;">{inner}</section>"#,
        tab.as_str()
    )
}

fn heading(theme: &Theme, level: u8, text: &str) -> String {
    format!(
        r#"<h{level} style="margin:0 0 12px;color:{};font-family:{};">{}</h{level}>"#,
        theme.accent,
        theme.heading_font,
        escape(text)
    )
}

fn muted(theme: &Theme, text: &str) -> String {
    format!(r#"<div style="color:{};">{}</div>"#, theme.palette.text_muted, escape(text))
}

fn overview(theme: &Theme, view: &ResumeView<'_>) -> String {
    format!(
        r#"<div style="{card}">{heading}<p style="color:{text};white-space:pre-wrap;">{summary}</p></div>"#,
        card = theme.card_style(),
        heading = heading(theme, 2, "Overview"),
        text = theme.palette.text_secondary,
        summary = escape(view.summary()),
    )
}

fn about(theme: &Theme, view: &ResumeView<'_>) -> String {
    let education = &view.resume.personal_information.education;
    let education_body = match non_empty(&education.school) {
        None => muted(theme, NO_EDUCATION),
        Some(school) => {
            let mut body = format!("<div>{}</div>", escape(school));
            if !education.majors.is_empty() {
                body.push_str(&format!("<div>{}</div>", escape(&education.majors.join(", "))));
            }
            if !education.minors.is_empty() {
                body.push_str(&format!(
                    "<div>Minor: {}</div>",
                    escape(&education.minors.join(", "))
                ));
            }
            if let Some(grad) = non_empty(&education.expected_grad) {
                body.push_str(&format!("<div>Expected: {}</div>", escape(grad)));
            }
            body
        }
    };

    let mut location_body = match view.address() {
        Some(address) => format!("<div>{}</div>", escape(address)),
        None => muted(theme, NO_LOCATION),
    };
    if let Some(href) = view.linkedin_href() {
        location_body.push_str(&format!(
            r#"<a href="{href}" rel="noreferrer" style="color:{};">View LinkedIn</a>"#,
            theme.accent
        ));
    }

    format!(
        r#"<div style="{card}">{heading}<div style="color:{text};display:grid;grid-template-columns:1fr 1fr;gap:12px;"><div><div style="font-weight:700;">Education</div><div style="margin-top:6px;">{education_body}</div></div><div><div style="font-weight:700;">Location &amp; Links</div><div style="margin-top:6px;">{location_body}</div></div></div></div>"#,
        card = theme.card_style(),
        heading = heading(theme, 2, "About"),
        text = theme.palette.text_secondary,
    )
}

fn projects(theme: &Theme, view: &ResumeView<'_>) -> String {
    let mut out = heading(theme, 3, theme.projects_heading);
    if view.resume.projects.is_empty() {
        out.push_str(&muted(theme, NO_PROJECTS));
        return out;
    }
    out.push_str(r#"<div style="display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:16px;">"#);
    for project in &view.resume.projects {
        out.push_str(&format!(
            r#"<article style="{card}min-height:120px;"><div style="font-weight:800;color:{primary};font-size:15px;margin-bottom:6px;">{title}</div>"#,
            card = theme.card_style(),
            primary = theme.palette.text_primary,
            title = escape(non_empty(&project.title).unwrap_or("Untitled")),
        ));
        if let Some(description) = non_empty(&project.description) {
            out.push_str(&format!(
                r#"<div style="color:{};font-size:13px;">{}</div>"#,
                theme.palette.text_secondary,
                escape(description)
            ));
        }
        out.push_str("</article>");
    }
    out.push_str("</div>");
    out
}

fn skills(theme: &Theme, view: &ResumeView<'_>) -> String {
    let mut out = heading(theme, 3, "Skills");
    out.push_str(&format!(r#"<div style="{}">"#, theme.card_style()));
    if view.resume.skills.is_empty() {
        out.push_str(&muted(theme, NO_SKILLS));
    } else {
        out.push_str(r#"<div style="display:flex;gap:8px;flex-wrap:wrap;">"#);
        for skill in &view.resume.skills {
            out.push_str(&format!(
                r#"<span style="padding:6px 10px;background:{};color:{};border-radius:999px;font-size:13px;font-weight:600;">{}</span>"#,
                theme.palette.chip_bg,
                theme.palette.text_primary,
                escape(skill)
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn experience(theme: &Theme, view: &ResumeView<'_>) -> String {
    let mut out = heading(theme, 3, "Experience");
    if view.resume.experience.is_empty() {
        out.push_str(&muted(theme, NO_EXPERIENCE));
        return out;
    }
    out.push_str(r#"<div style="display:grid;gap:12px;">"#);
    for entry in &view.resume.experience {
        out.push_str(&format!(
            r#"<div style="{card}"><div style="display:flex;justify-content:space-between;align-items:baseline;gap:12px;"><div style="font-weight:800;color:{primary};">{company}</div><div style="color:{muted};font-size:13px;white-space:nowrap;">{dates}</div></div>"#,
            card = theme.card_style(),
            primary = theme.palette.text_primary,
            muted = theme.palette.text_muted,
            company = escape(non_empty(&entry.company).unwrap_or(NO_COMPANY)),
            dates = escape(&entry.employed_dates),
        ));
        if let Some(description) = non_empty(&entry.description) {
            out.push_str(&format!(
                r#"<p style="margin-top:10px;color:{};">{}</p>"#,
                theme.palette.text_secondary,
                escape(description)
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}
