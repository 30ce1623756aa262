//! Creative Bold: gradient hero, pill navigation and accent glows.

use crate::render::color::with_alpha;
use crate::render::html::escape;
use crate::render::shared::{
    active_text, contact_block, empty_notice, section_body, tab_nav, NavStyle, Palette, ResumeView,
    Theme,
};
use crate::render::{RenderInput, Tab};

fn palette(is_light: bool) -> Palette {
    if is_light {
        Palette {
            text_primary: "#0b1020",
            text_secondary: "#1e3a8a",
            text_muted: "#475569",
            card_bg: "#ffffff",
            border: "#e2e8f0",
            divider: "#e2e8f0",
            chip_bg: "#eef2ff",
        }
    } else {
        Palette {
            text_primary: "#E6EEF8",
            text_secondary: "#B9D7FF",
            text_muted: "#9FBEE8",
            card_bg: "rgba(255,255,255,0.04)",
            border: "rgba(255,255,255,0.08)",
            divider: "rgba(255,255,255,0.08)",
            chip_bg: "rgba(255,255,255,0.08)",
        }
    }
}

pub fn render(input: &RenderInput<'_>, tab: Tab) -> String {
    let base = Theme::resolve(input, palette);
    let theme = Theme {
        font_family: "Inter, ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, Arial",
        radius: 20,
        shadow: if base.is_light {
            "0 12px 30px rgba(15,23,42,0.10)"
        } else {
            "0 20px 50px rgba(2,6,23,0.6)"
        },
        ..base
    };
    let Some(view) = ResumeView::from_input(input) else {
        return empty_notice(&theme);
    };
    let p = &theme.palette;
    let gradient = format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        theme.accent,
        with_alpha(&theme.accent, 0.8)
    );

    let mut out = format!(
        r#"<div class="portfolio creative-bold" style="font-family:{font};padding:clamp(20px, 3.5vw, 40px);max-width:1200px;margin:0 auto;box-sizing:border-box;background:radial-gradient(1200px 400px at 10% 10%, {glow}, transparent), {bg};color:{primary};min-height:100vh;">"#,
        font = theme.font_family,
        glow = with_alpha(&theme.accent, 0.12),
        bg = theme.background,
        primary = p.text_primary,
    );

    out.push_str(&format!(
        r#"<header style="display:grid;grid-template-columns:1fr 320px;gap:24px;align-items:center;margin-bottom:28px;"><div style="padding:28px;border-radius:20px;box-shadow:{shadow};display:flex;align-items:center;gap:18px;"><div aria-hidden="true" style="width:110px;height:110px;border-radius:20px;background:{gradient};display:flex;align-items:center;justify-content:center;font-size:36px;font-weight:800;color:{on_accent};">{initials}</div><div><h1 style="margin:0;font-size:40px;line-height:1.02;font-weight:900;color:{accent};">{name}</h1><p style="margin:8px 0 0;color:{secondary};font-size:16px;font-weight:600;">{title}</p></div></div><div style="padding:20px;border-radius:20px;background:{card};">{contact}</div></header>"#,
        shadow = theme.shadow,
        gradient = gradient,
        on_accent = active_text(&theme),
        initials = escape(&view.initials()),
        accent = theme.accent,
        name = escape(view.name()),
        secondary = p.text_secondary,
        title = escape(view.title()),
        card = p.card_bg,
        contact = contact_block(&theme, &view),
    ));

    out.push_str(&format!(
        r#"<div style="margin-bottom:24px;">{nav}</div><main>{body}</main></div>"#,
        nav = tab_nav(&theme, tab, NavStyle::Pills),
        body = section_body(&theme, &view, tab),
    ));
    out
}
