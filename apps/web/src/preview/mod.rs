//! Preview, save, download and start-over for the selected template.

pub mod handlers;

use crate::models::portfolio::PortfolioPayload;
use crate::render::TemplateId;
use crate::session::Session;

pub const DEFAULT_NAME: &str = "My Portfolio";
pub const SAVED: &str = "Saved!";

/// Create/update body for the session's current work. Saves are drafts;
/// publication is toggled from the dashboard.
pub fn payload(session: &Session, template: TemplateId, name: &str) -> PortfolioPayload {
    let name = name.trim();
    PortfolioPayload {
        name: if name.is_empty() { DEFAULT_NAME } else { name }.to_string(),
        template_id: template.as_str().to_string(),
        data: session.resume_data.clone().unwrap_or_default(),
        color: session.selected_color.clone(),
        display_mode: session.selected_mode,
        is_published: false,
    }
}
