//! Saved portfolios: list, reopen, delete and publish.

pub mod handlers;

use crate::models::portfolio::Portfolio;
use crate::pages::post_button;
use crate::render::color::{normalize_or, DEFAULT_ACCENT};
use crate::render::html::escape;
use crate::render::TemplateId;
use crate::session::Session;

/// Human label for a stored template id; unknown ids are shown as-is.
pub fn template_label(template_id: &str) -> String {
    template_id
        .parse::<TemplateId>()
        .map(|t| t.display_name().to_string())
        .unwrap_or_else(|_| template_id.to_string())
}

/// Loads a saved portfolio into the session for preview. Returns false when
/// the stored template id is unknown, leaving the template to be chosen.
pub fn open_into(session: &mut Session, portfolio: Portfolio) -> bool {
    let template = portfolio.template_id.parse::<TemplateId>().ok();
    session.resume_data = Some(portfolio.data);
    session.selected_template = template;
    session.selected_color = portfolio.color;
    session.selected_mode = portfolio.display_mode;
    session.current_portfolio_id = Some(portfolio.id);
    session.portfolio_name = Some(portfolio.name);
    template.is_some()
}

pub fn portfolio_card(portfolio: &Portfolio) -> String {
    let id = &portfolio.id;
    let status = if portfolio.is_published {
        r#"<span style="color:#166534;font-weight:600;">Published</span>"#
    } else {
        r#"<span class="muted">Draft</span>"#
    };
    let publish_label = if portfolio.is_published { "Unpublish" } else { "Publish" };
    format!(
        r#"<article class="card"><h3 style="margin:0 0 6px;">{name}</h3><p class="muted" style="margin:0;">{template} · {mode} · <span aria-hidden="true" style="display:inline-block;width:10px;height:10px;border-radius:999px;background:{swatch};"></span> {color}</p><p style="margin:8px 0;">{status} <span class="muted">Updated {updated}</span></p><div style="display:flex;gap:8px;flex-wrap:wrap;">{open}{publish}{delete}</div></article>"#,
        name = escape(&portfolio.name),
        template = escape(&template_label(&portfolio.template_id)),
        mode = portfolio.display_mode,
        swatch = normalize_or(&portfolio.color, DEFAULT_ACCENT),
        color = escape(&portfolio.color),
        updated = portfolio.updated_at.format("%b %d, %Y"),
        open = post_button(&format!("/portfolios/{id}/open"), "Open", "button-primary"),
        publish = post_button(&format!("/portfolios/{id}/publish"), publish_label, ""),
        delete = post_button(&format!("/portfolios/{id}/delete"), "Delete", "button-danger"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::DisplayMode;
    use crate::models::resume::ParsedResume;
    use chrono::{TimeZone, Utc};

    fn portfolio(template_id: &str) -> Portfolio {
        let stamp = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        Portfolio {
            id: "p-1".into(),
            name: "Main <site>".into(),
            template_id: template_id.into(),
            data: ParsedResume {
                skills: vec!["Rust".into()],
                ..Default::default()
            },
            color: "#0F766E".into(),
            display_mode: DisplayMode::Dark,
            is_published: true,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn test_open_into_session() {
        let mut session = Session::default();
        assert!(open_into(&mut session, portfolio("elegant-sophisticated")));
        assert_eq!(session.selected_template, Some(TemplateId::ElegantSophisticated));
        assert_eq!(session.selected_color, "#0F766E");
        assert_eq!(session.selected_mode, DisplayMode::Dark);
        assert_eq!(session.current_portfolio_id.as_deref(), Some("p-1"));
        assert_eq!(session.portfolio_name.as_deref(), Some("Main <site>"));
        assert_eq!(session.resume().unwrap().skills, ["Rust"]);

        let mut session = Session::default();
        assert!(!open_into(&mut session, portfolio("vaporwave")));
        assert!(session.selected_template.is_none());
    }

    #[test]
    fn test_card() {
        let html = portfolio_card(&portfolio("2"));
        assert!(html.contains("Main &lt;site&gt;"));
        assert!(html.contains("Classic Professional"));
        assert!(html.contains("Published"));
        assert!(html.contains("Unpublish"));
        assert!(html.contains("Updated Mar 01, 2025"));
        assert!(html.contains(r#"action="/portfolios/p-1/delete""#));
    }
}
