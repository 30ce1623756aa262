//! The freeform template: the user's section list, top to bottom.

use crate::customize::sections::{FontSize, FontWeight, Section, SectionLayout, SectionList, SectionType, Spacing};
use crate::render::html::escape;
use crate::render::shared::{
    empty_notice, non_empty, Palette, ResumeView, Theme, NO_COMPANY, NO_CONTACT, NO_EDUCATION,
    NO_EXPERIENCE, NO_PROJECTS, NO_SKILLS,
};
use crate::render::RenderInput;

fn palette(is_light: bool) -> Palette {
    if is_light {
        Palette {
            text_primary: "#111827",
            text_secondary: "#374151",
            text_muted: "#6B7280",
            card_bg: "#FFFFFF",
            border: "#E5E7EB",
            divider: "#F3F4F6",
            chip_bg: "#F3F4F6",
        }
    } else {
        Palette {
            text_primary: "#F9FAFB",
            text_secondary: "#D1D5DB",
            text_muted: "#9CA3AF",
            card_bg: "#111827",
            border: "#374151",
            divider: "#1F2937",
            chip_bg: "#1F2937",
        }
    }
}

/// Resolved typography and spacing for one section.
struct Metrics {
    heading_px: u8,
    text_px: u8,
    weight: u16,
    padding_px: u8,
    gap_px: u8,
}

impl Metrics {
    fn of(section: &Section) -> Metrics {
        let style = section.style_or_default();
        let (heading_px, text_px) = match style.font_size.unwrap_or_default() {
            FontSize::Small => (20, 13),
            FontSize::Medium => (24, 15),
            FontSize::Large => (30, 17),
        };
        let weight = match style.font_weight.unwrap_or_default() {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        };
        let (padding_px, gap_px) = match style.spacing.unwrap_or_default() {
            Spacing::Compact => (12, 8),
            Spacing::Normal => (24, 12),
            Spacing::Spacious => (40, 20),
        };
        Metrics {
            heading_px,
            text_px,
            weight,
            padding_px,
            gap_px,
        }
    }
}

pub fn render(input: &RenderInput<'_>) -> String {
    let theme = Theme::resolve(input, palette);
    let Some(view) = ResumeView::from_input(input) else {
        return empty_notice(&theme);
    };
    let default_sections = SectionList::default();
    let sections = input.sections.unwrap_or(&default_sections);

    let mut out = format!(
        r#"<div class="portfolio custom" style="font-family:{};background:{};color:{};max-width:1000px;margin:0 auto;min-height:100vh;box-sizing:border-box;">"#,
        theme.font_family, theme.background, theme.palette.text_primary,
    );
    for section in sections.visible() {
        out.push_str(&render_section(&theme, &view, section));
    }
    out.push_str("</div>");
    out
}

fn render_section(theme: &Theme, view: &ResumeView<'_>, section: &Section) -> String {
    let m = Metrics::of(section);
    let inner = match section.kind {
        SectionType::Header => header(theme, view, section.layout, &m),
        SectionType::About => about(theme, view, section.layout, &m),
        SectionType::Experience => experience(theme, view, section.layout, &m),
        SectionType::Projects => projects(theme, view, section.layout, &m),
        SectionType::Skills => skills(theme, view, section.layout, &m),
        SectionType::Education => education(theme, view, section.layout, &m),
        SectionType::Contact => contact(theme, view, section.layout, &m),
    };
    let align = if section.layout == SectionLayout::Centered {
        "text-align:center;"
    } else {
        ""
    };
    format!(
        r#"<section data-block="{kind}" style="padding:{pad}px;font-size:{text}px;{align}border-bottom:1px solid {divider};">{inner}</section>"#,
        kind = section.kind.as_str(),
        pad = m.padding_px,
        text = m.text_px,
        divider = theme.palette.divider,
    )
}

fn heading(theme: &Theme, m: &Metrics, text: &str) -> String {
    format!(
        r#"<h2 style="margin:0 0 {gap}px;font-size:{size}px;font-weight:{weight};color:{accent};">{text}</h2>"#,
        gap = m.gap_px,
        size = m.heading_px,
        weight = m.weight.max(600),
        accent = theme.accent,
        text = escape(text),
    )
}

fn muted(theme: &Theme, text: &str) -> String {
    format!(r#"<p style="margin:0;color:{};">{}</p>"#, theme.palette.text_muted, escape(text))
}

fn card(theme: &Theme, m: &Metrics, body: &str) -> String {
    format!(
        r#"<div style="background:{};border:1px solid {};border-radius:10px;padding:{}px;">{body}</div>"#,
        theme.palette.card_bg, theme.palette.border, m.gap_px + 4,
    )
}

/// Grid or stack wrapper for a list of items under `layout`.
fn list_container(layout: SectionLayout, m: &Metrics, items: &str) -> String {
    let columns = match layout {
        SectionLayout::Cards | SectionLayout::Split => "display:grid;grid-template-columns:repeat(2,minmax(0,1fr));",
        SectionLayout::Default | SectionLayout::Centered => "display:grid;grid-template-columns:1fr;",
    };
    format!(r#"<div style="{columns}gap:{}px;">{items}</div>"#, m.gap_px)
}

fn header(theme: &Theme, view: &ResumeView<'_>, layout: SectionLayout, m: &Metrics) -> String {
    let title_block = format!(
        r#"<div><h1 style="margin:0;font-size:{}px;font-weight:{};color:{};">{}</h1><p style="margin:6px 0 0;color:{};">{}</p></div>"#,
        u16::from(m.heading_px) + 12,
        m.weight.max(700),
        theme.palette.text_primary,
        escape(view.name()),
        theme.accent,
        escape(view.title()),
    );
    match layout {
        SectionLayout::Split => {
            let contact: String = [view.email(), view.phone()]
                .into_iter()
                .flatten()
                .map(|line| format!("<div>{}</div>", escape(line)))
                .collect();
            format!(
                r#"<div style="display:flex;justify-content:space-between;align-items:center;gap:{}px;">{title_block}<div style="text-align:right;color:{};">{contact}</div></div>"#,
                m.gap_px, theme.palette.text_secondary,
            )
        }
        SectionLayout::Cards => card(theme, m, &title_block),
        SectionLayout::Default | SectionLayout::Centered => title_block,
    }
}

fn about(theme: &Theme, view: &ResumeView<'_>, layout: SectionLayout, m: &Metrics) -> String {
    let body = format!(
        r#"<p style="margin:0;color:{};font-weight:{};line-height:1.6;white-space:pre-wrap;">{}</p>"#,
        theme.palette.text_secondary,
        m.weight,
        escape(view.summary()),
    );
    match layout {
        SectionLayout::Split => format!(
            r#"<div style="display:grid;grid-template-columns:1fr 2fr;gap:{}px;">{}{body}</div>"#,
            m.gap_px,
            heading(theme, m, "About"),
        ),
        SectionLayout::Cards => format!("{}{}", heading(theme, m, "About"), card(theme, m, &body)),
        SectionLayout::Default | SectionLayout::Centered => {
            format!("{}{body}", heading(theme, m, "About"))
        }
    }
}

fn experience(theme: &Theme, view: &ResumeView<'_>, layout: SectionLayout, m: &Metrics) -> String {
    let mut out = heading(theme, m, "Experience");
    if view.resume.experience.is_empty() {
        out.push_str(&muted(theme, NO_EXPERIENCE));
        return out;
    }
    let mut items = String::new();
    for entry in &view.resume.experience {
        let mut item = format!(
            r#"<div style="font-weight:{};color:{};">{}</div>"#,
            m.weight.max(600),
            theme.palette.text_primary,
            escape(non_empty(&entry.company).unwrap_or(NO_COMPANY)),
        );
        if let Some(dates) = non_empty(&entry.employed_dates) {
            item.push_str(&format!(
                r#"<div style="color:{};font-size:0.85em;">{}</div>"#,
                theme.palette.text_muted,
                escape(dates)
            ));
        }
        if let Some(description) = non_empty(&entry.description) {
            item.push_str(&format!(
                r#"<p style="margin:6px 0 0;color:{};">{}</p>"#,
                theme.palette.text_secondary,
                escape(description)
            ));
        }
        items.push_str(&match layout {
            SectionLayout::Cards => card(theme, m, &item),
            SectionLayout::Default => format!(
                r#"<div style="border-left:3px solid {};padding-left:12px;">{item}</div>"#,
                theme.accent
            ),
            SectionLayout::Centered | SectionLayout::Split => format!("<div>{item}</div>"),
        });
    }
    out.push_str(&list_container(layout, m, &items));
    out
}

fn projects(theme: &Theme, view: &ResumeView<'_>, layout: SectionLayout, m: &Metrics) -> String {
    let mut out = heading(theme, m, "Projects");
    if view.resume.projects.is_empty() {
        out.push_str(&muted(theme, NO_PROJECTS));
        return out;
    }
    let mut items = String::new();
    for project in &view.resume.projects {
        let mut item = format!(
            r#"<div style="font-weight:{};color:{};">{}</div>"#,
            m.weight.max(600),
            theme.palette.text_primary,
            escape(non_empty(&project.title).unwrap_or("Untitled")),
        );
        if let Some(description) = non_empty(&project.description) {
            item.push_str(&format!(
                r#"<p style="margin:6px 0 0;color:{};">{}</p>"#,
                theme.palette.text_secondary,
                escape(description)
            ));
        }
        items.push_str(&match layout {
            SectionLayout::Cards => card(theme, m, &item),
            SectionLayout::Default | SectionLayout::Centered | SectionLayout::Split => {
                format!("<div>{item}</div>")
            }
        });
    }
    out.push_str(&list_container(layout, m, &items));
    out
}

fn skills(theme: &Theme, view: &ResumeView<'_>, layout: SectionLayout, m: &Metrics) -> String {
    let mut out = heading(theme, m, "Skills");
    if view.resume.skills.is_empty() {
        out.push_str(&muted(theme, NO_SKILLS));
        return out;
    }
    let container = match layout {
        SectionLayout::Cards => "display:grid;grid-template-columns:repeat(4,minmax(0,1fr));",
        SectionLayout::Split => "display:grid;grid-template-columns:repeat(2,minmax(0,1fr));",
        SectionLayout::Centered => "display:flex;flex-wrap:wrap;justify-content:center;",
        SectionLayout::Default => "display:flex;flex-wrap:wrap;",
    };
    out.push_str(&format!(r#"<div style="{container}gap:{}px;">"#, m.gap_px));
    for skill in &view.resume.skills {
        out.push_str(&format!(
            r#"<span style="padding:6px 12px;border-radius:999px;background:{};color:{};font-weight:{};">{}</span>"#,
            theme.palette.chip_bg,
            theme.palette.text_primary,
            m.weight,
            escape(skill)
        ));
    }
    out.push_str("</div>");
    out
}

fn education(theme: &Theme, view: &ResumeView<'_>, layout: SectionLayout, m: &Metrics) -> String {
    let mut out = heading(theme, m, "Education");
    let education = &view.resume.personal_information.education;
    let Some(school) = non_empty(&education.school) else {
        out.push_str(&muted(theme, NO_EDUCATION));
        return out;
    };
    let mut body = format!(
        r#"<div style="font-weight:{};color:{};">{}</div>"#,
        m.weight.max(600),
        theme.palette.text_primary,
        escape(school)
    );
    if !education.majors.is_empty() {
        body.push_str(&format!("<div>{}</div>", escape(&education.majors.join(", "))));
    }
    if !education.minors.is_empty() {
        body.push_str(&format!("<div>Minor: {}</div>", escape(&education.minors.join(", "))));
    }
    if let Some(grad) = non_empty(&education.expected_grad) {
        body.push_str(&format!(
            r#"<div style="color:{};">{}</div>"#,
            theme.palette.text_muted,
            escape(grad)
        ));
    }
    match layout {
        SectionLayout::Cards => out.push_str(&card(theme, m, &body)),
        SectionLayout::Default | SectionLayout::Centered | SectionLayout::Split => {
            out.push_str(&format!(r#"<div style="color:{};">{body}</div>"#, theme.palette.text_secondary))
        }
    }
    out
}

fn contact(theme: &Theme, view: &ResumeView<'_>, layout: SectionLayout, m: &Metrics) -> String {
    let mut out = heading(theme, m, "Contact");
    let mut items: Vec<String> = [view.email(), view.phone(), view.address()]
        .into_iter()
        .flatten()
        .map(escape)
        .collect();
    if let Some(href) = view.linkedin_href() {
        items.push(format!(
            r#"<a href="{href}" rel="noreferrer" style="color:{};">LinkedIn</a>"#,
            theme.accent
        ));
    }
    if items.is_empty() {
        out.push_str(&muted(theme, NO_CONTACT));
        return out;
    }
    let rendered: String = items
        .iter()
        .map(|item| match layout {
            SectionLayout::Cards => card(theme, m, item),
            SectionLayout::Default | SectionLayout::Centered | SectionLayout::Split => {
                format!("<div>{item}</div>")
            }
        })
        .collect();
    out.push_str(&list_container(layout, m, &rendered));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customize::sections::StyleChange;
    use crate::models::resume::ParsedResume;

    fn resume() -> ParsedResume {
        let mut resume = ParsedResume::default();
        resume.personal_information.full_name = "Grace Hopper".into();
        resume.overview.resume_summary = "Compiler pioneer".into();
        resume.skills = vec!["COBOL".into()];
        resume
    }

    fn block_order(html: &str) -> Vec<&str> {
        html.split("data-block=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_default_list_renders_all_sections_in_order() {
        let resume = resume();
        let html = render(&RenderInput::new(Some(&resume), "#2563EB", "#F8FAFC"));
        assert_eq!(
            block_order(&html),
            ["header", "about", "experience", "projects", "skills", "education", "contact"]
        );
        assert!(html.contains("Grace Hopper"));
        assert!(html.contains(NO_EXPERIENCE));
        assert!(!html.contains("data-section="));
    }

    #[test]
    fn test_hidden_and_reordered_sections() {
        let resume = resume();
        let mut sections = SectionList::default();
        sections.toggle_visible("2");
        sections.reorder("5", "1");
        let input = RenderInput::new(Some(&resume), "#2563EB", "#F8FAFC").with_sections(&sections);
        let html = render(&input);
        assert_eq!(
            block_order(&html),
            ["skills", "header", "experience", "projects", "education", "contact"]
        );
        assert!(!html.contains("Compiler pioneer"));
    }

    #[test]
    fn test_style_reaches_markup() {
        let resume = resume();
        let mut sections = SectionList::default();
        sections.set_style("5", StyleChange::FontSize(FontSize::Large));
        sections.set_style("5", StyleChange::Spacing(Spacing::Spacious));
        sections.set_layout("5", SectionLayout::Centered);
        let input = RenderInput::new(Some(&resume), "#2563EB", "#F8FAFC").with_sections(&sections);
        let html = render(&input);
        assert!(html.contains(
            r#"data-block="skills" style="padding:40px;font-size:17px;text-align:center;"#
        ));
        assert!(html.contains("justify-content:center;"));
    }
}
