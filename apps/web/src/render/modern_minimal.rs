//! Modern Minimal: avatar header, left navigation rail, content cards.

use crate::render::html::escape;
use crate::render::shared::{
    contact_block, empty_notice, section_body, tab_nav, NavStyle, Palette, ResumeView, Theme,
};
use crate::render::{RenderInput, Tab};

fn palette(is_light: bool) -> Palette {
    if is_light {
        Palette {
            text_primary: "#0f172a",
            text_secondary: "#111827",
            text_muted: "#1f2937",
            card_bg: "#ffffff",
            border: "#E5E7EB",
            divider: "#f3f4f6",
            chip_bg: "#f3f4f6",
        }
    } else {
        Palette {
            text_primary: "#F9FAFB",
            text_secondary: "#D1D5DB",
            text_muted: "#9CA3AF",
            card_bg: "#1F2937",
            border: "#374151",
            divider: "#374151",
            chip_bg: "#374151",
        }
    }
}

pub fn render(input: &RenderInput<'_>, tab: Tab) -> String {
    let theme = Theme::resolve(input, palette);
    let Some(view) = ResumeView::from_input(input) else {
        return empty_notice(&theme);
    };
    let p = &theme.palette;

    let mut links = String::new();
    if let Some(href) = view.linkedin_href() {
        links.push_str(&format!(
            r#"<a href="{href}" rel="noreferrer" style="color:{};text-decoration:none;font-size:14px;">LinkedIn</a>"#,
            p.text_secondary
        ));
    }

    let mut out = format!(
        r#"<div class="portfolio modern-minimal" style="font-family:{font};padding:24px;max-width:1100px;margin:0 auto;box-sizing:border-box;background:{bg};color:{primary};min-height:100vh;">"#,
        font = theme.font_family,
        bg = theme.background,
        primary = p.text_primary,
    );

    out.push_str(&format!(
        r#"<header style="display:flex;gap:20px;align-items:center;margin-bottom:20px;"><div style="display:flex;align-items:center;gap:16px;flex:1;"><div aria-hidden="true" style="width:96px;height:96px;border-radius:12px;background:{chip};display:flex;align-items:center;justify-content:center;font-size:28px;font-weight:700;color:{primary};box-shadow:{shadow};">{initials}</div><div><h1 style="margin:0;font-size:28px;color:{accent};">{name}</h1><p style="margin:6px 0 0;color:{secondary};font-size:14px;">{title}</p><div style="margin-top:8px;display:flex;gap:8px;">{links}</div></div></div><div style="text-align:right;color:{secondary};font-size:13px;"><div style="margin-bottom:6px;">{email}</div><div>{phone}</div></div></header>"#,
        chip = p.chip_bg,
        primary = p.text_primary,
        shadow = theme.shadow,
        initials = escape(&view.initials()),
        accent = theme.accent,
        name = escape(view.name()),
        secondary = p.text_secondary,
        title = escape(view.title()),
        email = escape(view.email().unwrap_or_default()),
        phone = escape(view.phone().unwrap_or_default()),
    ));

    out.push_str(&format!(
        r#"<div style="display:grid;grid-template-columns:220px 1fr;gap:24px;"><aside style="border-radius:12px;padding:16px;background:{card};box-shadow:{shadow};">{nav}<div style="height:1px;background:{divider};margin:12px 0;"></div>{contact}</aside><main>{body}</main></div></div>"#,
        card = p.card_bg,
        shadow = theme.shadow,
        nav = tab_nav(&theme, tab, NavStyle::Column),
        divider = p.divider,
        contact = contact_block(&theme, &view),
        body = section_body(&theme, &view, tab),
    ));
    out
}
