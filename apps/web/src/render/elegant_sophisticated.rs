//! Elegant Sophisticated: centered monogram, serif type, a single reading
//! column with the contact details in the footer.

use crate::render::html::escape;
use crate::render::shared::{
    contact_block, empty_notice, section_body, tab_nav, NavStyle, Palette, ResumeView, Theme,
};
use crate::render::{RenderInput, Tab};

fn palette(is_light: bool) -> Palette {
    if is_light {
        Palette {
            text_primary: "#1f2937",
            text_secondary: "#374151",
            text_muted: "#6b7280",
            card_bg: "#ffffff",
            border: "#E5E7EB",
            divider: "#E5E7EB",
            chip_bg: "#f5f5f4",
        }
    } else {
        Palette {
            text_primary: "#e6e7e8",
            text_secondary: "#cfd6db",
            text_muted: "#9CA3AF",
            card_bg: "rgba(255,255,255,0.03)",
            border: "#374151",
            divider: "#374151",
            chip_bg: "rgba(255,255,255,0.06)",
        }
    }
}

pub fn render(input: &RenderInput<'_>, tab: Tab) -> String {
    let theme = Theme {
        font_family: "Georgia, 'Times New Roman', serif",
        heading_font: "Georgia, serif",
        radius: 2,
        projects_heading: "Selected Projects",
        ..Theme::resolve(input, palette)
    };
    let Some(view) = ResumeView::from_input(input) else {
        return empty_notice(&theme);
    };
    let p = &theme.palette;

    let mut out = format!(
        r#"<div class="portfolio elegant-sophisticated" style="font-family:{font};padding:48px 24px;max-width:860px;margin:0 auto;box-sizing:border-box;background:{bg};color:{primary};min-height:100vh;">"#,
        font = theme.font_family,
        bg = theme.background,
        primary = p.text_primary,
    );

    out.push_str(&format!(
        r#"<header style="text-align:center;margin-bottom:32px;"><div aria-hidden="true" style="width:84px;height:84px;margin:0 auto 16px;border-radius:50%;border:1px solid {accent};display:flex;align-items:center;justify-content:center;font-size:28px;letter-spacing:2px;color:{accent};">{initials}</div><h1 style="margin:0;font-weight:400;font-size:38px;letter-spacing:1px;color:{primary};">{name}</h1><div style="width:48px;height:1px;background:{accent};margin:14px auto;"></div><p style="margin:0;color:{muted};font-style:italic;">{title}</p></header>"#,
        accent = theme.accent,
        initials = escape(&view.initials()),
        primary = p.text_primary,
        name = escape(view.name()),
        muted = p.text_muted,
        title = escape(view.title()),
    ));

    out.push_str(&format!(
        r#"<div style="display:flex;justify-content:center;margin-bottom:28px;">{nav}</div><main>{body}</main><footer style="margin-top:32px;padding-top:16px;border-top:1px solid {divider};">{contact}</footer></div>"#,
        nav = tab_nav(&theme, tab, NavStyle::Row),
        body = section_body(&theme, &view, tab),
        divider = p.divider,
        contact = contact_block(&theme, &view),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ParsedResume, Project};

    #[test]
    fn test_projects_heading() {
        let mut resume = ParsedResume::default();
        resume.projects = vec![Project {
            title: "Orrery".into(),
            description: String::new(),
        }];
        let input = RenderInput::new(Some(&resume), "#7C3AED", "#FFFFFF");
        let html = render(&input, Tab::Projects);
        assert!(html.contains("Selected Projects"));
        assert!(html.contains("Orrery"));
    }
}
