use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::pages::{layout, Notice};
use crate::render::html::escape;
use crate::render::{render_portfolio, RenderInput, Tab, TemplateId};
use crate::session::extract::SignedIn;
use crate::session::Session;
use crate::state::AppState;
use crate::templates::{choose_color, color_picker, mode_picker, parse_mode};

pub const SELECT_TEMPLATE: &str = "Please select a template.";

#[derive(Debug, Default, Deserialize)]
pub struct TemplatesQuery {
    pub template: Option<String>,
    pub tab: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TemplateForm {
    pub template: Option<String>,
    pub color: Option<String>,
    pub custom_color: Option<String>,
    pub mode: Option<String>,
}

fn templates_page(session: &Session, preview: Option<TemplateId>, tab: Tab, notice: Option<&Notice>) -> Html<String> {
    let checked = preview.or(session.selected_template);
    let mut cards = String::new();
    for template in TemplateId::CATALOG {
        let is_checked = if checked == Some(template) { " checked" } else { "" };
        cards.push_str(&format!(
            r#"<label class="card" style="display:block;font-weight:400;"><input type="radio" name="template" value="{id}"{is_checked}> <strong>{name}</strong><p class="muted">{description}</p><a href="/templates?template={id}">Preview</a></label>"#,
            id = template.as_str(),
            name = template.display_name(),
            description = template.description(),
        ));
    }

    let preview_html = match preview {
        Some(template) => {
            let tab_base = format!("/templates?template={}", template.as_str());
            let input = RenderInput::new(
                session.resume(),
                &session.selected_color,
                session.selected_mode.background_hex(),
            )
            .with_tab_base(&tab_base);
            format!(
                r#"<section class="card" style="margin-top:24px;padding:0;overflow:hidden;"><h2 style="padding:0 18px;">Preview: {}</h2>{}</section>"#,
                escape(template.display_name()),
                render_portfolio(template, &input, tab)
            )
        }
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Choose a template</h1><form method="post" action="/templates"><div class="grid">{cards}</div>{colors}{modes}<p><button class="button button-primary" type="submit">Continue to preview</button> <a class="button" href="/customize">Build your own</a></p></form>{preview_html}"#,
        colors = color_picker(&session.selected_color),
        modes = mode_picker(session.selected_mode),
    );
    layout("Templates", true, notice, &body)
}

/// GET /templates
pub async fn handle_templates_page(user: SignedIn, Query(query): Query<TemplatesQuery>) -> Response {
    if user.session.resume().is_none() {
        return Redirect::to("/upload").into_response();
    }
    let preview = query.template.as_deref().and_then(|t| t.parse::<TemplateId>().ok());
    let tab = Tab::from_query(query.tab.as_deref());
    templates_page(&user.session, preview, tab, None).into_response()
}

/// POST /templates
pub async fn handle_select_template(
    State(state): State<AppState>,
    user: SignedIn,
    Form(form): Form<TemplateForm>,
) -> Result<Response, AppError> {
    if user.session.resume().is_none() {
        return Ok(Redirect::to("/upload").into_response());
    }
    let Some(template) = form
        .template
        .as_deref()
        .and_then(|t| t.parse::<TemplateId>().ok())
    else {
        let notice = Notice::error(SELECT_TEMPLATE);
        return Ok(templates_page(&user.session, None, Tab::Overview, Some(&notice)).into_response());
    };
    let color = match choose_color(form.color.as_deref(), form.custom_color.as_deref()) {
        Ok(color) => color,
        Err(message) => {
            let notice = Notice::error(message);
            return Ok(templates_page(&user.session, Some(template), Tab::Overview, Some(&notice)).into_response());
        }
    };
    let mode = parse_mode(form.mode.as_deref());

    state
        .sessions
        .update(&user.id.0, |session| {
            session.selected_template = Some(template);
            session.selected_color = color;
            session.selected_mode = mode;
        })
        .await;
    info!("Selected template {template} ({mode})");
    Ok(Redirect::to("/preview").into_response())
}
