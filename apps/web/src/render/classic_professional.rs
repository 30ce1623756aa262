//! Classic Professional: serif type, ruled header, tabs across the top and a
//! contact column on the right.

use crate::render::html::escape;
use crate::render::shared::{
    contact_block, empty_notice, section_body, tab_nav, NavStyle, Palette, ResumeView, Theme,
};
use crate::render::{RenderInput, Tab};

fn palette(is_light: bool) -> Palette {
    if is_light {
        Palette {
            text_primary: "#111827",
            text_secondary: "#374151",
            text_muted: "#6b7280",
            card_bg: "#ffffff",
            border: "#d1d5db",
            divider: "#e5e7eb",
            chip_bg: "#f3f4f6",
        }
    } else {
        Palette {
            text_primary: "#F3F4F6",
            text_secondary: "#D1D5DB",
            text_muted: "#9CA3AF",
            card_bg: "#111827",
            border: "#374151",
            divider: "#374151",
            chip_bg: "#1f2937",
        }
    }
}

pub fn render(input: &RenderInput<'_>, tab: Tab) -> String {
    let theme = Theme {
        font_family: "Georgia, 'Times New Roman', serif",
        heading_font: "Georgia, serif",
        radius: 4,
        shadow: "0 1px 3px rgba(0,0,0,0.08)",
        ..Theme::resolve(input, palette)
    };
    let Some(view) = ResumeView::from_input(input) else {
        return empty_notice(&theme);
    };
    let p = &theme.palette;

    let mut out = format!(
        r#"<div class="portfolio classic-professional" style="font-family:{font};padding:32px;max-width:1000px;margin:0 auto;box-sizing:border-box;background:{bg};color:{primary};min-height:100vh;">"#,
        font = theme.font_family,
        bg = theme.background,
        primary = p.text_primary,
    );

    out.push_str(&format!(
        r#"<header style="text-align:center;padding-bottom:20px;margin-bottom:20px;border-bottom:2px solid {accent};"><div aria-hidden="true" style="width:72px;height:72px;margin:0 auto 12px;border-radius:50%;border:2px solid {accent};display:flex;align-items:center;justify-content:center;font-family:Arial, sans-serif;font-size:26px;color:{primary};">{initials}</div><h1 style="margin:0;font-size:34px;color:{accent};letter-spacing:0.5px;">{name}</h1><p style="margin:6px 0 0;color:{secondary};font-size:15px;font-weight:500;">{title}</p></header>"#,
        accent = theme.accent,
        primary = p.text_primary,
        initials = escape(&view.initials()),
        name = escape(view.name()),
        secondary = p.text_secondary,
        title = escape(view.title()),
    ));

    out.push_str(&format!(
        r#"<div style="margin-bottom:20px;border-bottom:1px solid {border};padding-bottom:8px;">{nav}</div><div style="display:grid;grid-template-columns:1fr 240px;gap:28px;"><main>{body}</main><aside style="border-left:1px solid {border};padding-left:20px;">{contact}</aside></div></div>"#,
        border = p.border,
        nav = tab_nav(&theme, tab, NavStyle::Row),
        body = section_body(&theme, &view, tab),
        contact = contact_block(&theme, &view),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ParsedResume;

    #[test]
    fn test_uses_serif_headings() {
        let mut resume = ParsedResume::default();
        resume.skills = vec!["Latin".into()];
        let input = RenderInput::new(Some(&resume), "#1E3A8A", "#FFFFFF");
        let html = render(&input, Tab::Skills);
        assert!(html.contains("font-family:Georgia, serif"));
        assert!(html.contains("Latin"));
    }
}
