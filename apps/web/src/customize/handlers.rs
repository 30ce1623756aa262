use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::customize::edits::{EditForm, ResumeEdit};
use crate::customize::sections::{FontSize, FontWeight, Section, SectionLayout, SectionList, Spacing};
use crate::customize::{apply_section_form, SectionForm};
use crate::errors::AppError;
use crate::models::resume::ParsedResume;
use crate::pages::{layout, Notice};
use crate::render::html::escape;
use crate::render::shared::NO_SKILLS;
use crate::render::{custom, RenderInput, TemplateId};
use crate::session::extract::SignedIn;
use crate::session::Session;
use crate::state::AppState;
use crate::templates::{choose_color, color_picker, mode_picker, parse_mode};

#[derive(Debug, Default, Deserialize)]
pub struct FinishForm {
    pub color: Option<String>,
    pub custom_color: Option<String>,
    pub mode: Option<String>,
}

fn section_button(action: &str, id: &str, extra: &str, label: &str) -> String {
    format!(
        r#"<form class="inline" method="post" action="/customize/sections"><input type="hidden" name="action" value="{action}"><input type="hidden" name="id" value="{}">{extra}<button class="button" type="submit" style="padding:4px 8px;">{label}</button></form>"#,
        escape(id)
    )
}

fn hidden(name: &str, value: &str) -> String {
    format!(r#"<input type="hidden" name="{name}" value="{}">"#, escape(value))
}

fn components_panel(list: &SectionList) -> String {
    let mut out = String::from(r#"<div class="card"><h3 style="margin-top:0;">Components</h3>"#);
    let available = list.available();
    if available.is_empty() {
        out.push_str(r#"<p class="muted">Every section is already on the page.</p>"#);
    }
    for kind in available {
        out.push_str(&format!(
            r#"<form method="post" action="/customize/sections" style="margin-bottom:8px;"><input type="hidden" name="action" value="add"><input type="hidden" name="kind" value="{}"><button class="button" type="submit">+ {}</button> <span class="muted">{}</span></form>"#,
            kind.as_str(),
            kind.label(),
            kind.description()
        ));
    }
    out.push_str("</div>");
    out
}

fn sections_panel(list: &SectionList) -> String {
    let selected = list.selected().map(|s| s.id.as_str());
    let sections = list.sections();
    let mut out = String::from(r#"<div class="card" style="margin-top:16px;"><h3 style="margin-top:0;">Sections</h3>"#);
    for (i, section) in sections.iter().enumerate() {
        let weight = if selected == Some(section.id.as_str()) { 800 } else { 500 };
        let visibility = if section.visible { "Hide" } else { "Show" };
        let mut controls = section_button("select", &section.id, "", "Edit");
        controls.push_str(&section_button("toggle", &section.id, "", visibility));
        if let Some(prev) = i.checked_sub(1).and_then(|p| sections.get(p)) {
            controls.push_str(&section_button("reorder", &section.id, &hidden("target", &prev.id), "Up"));
        }
        if let Some(next) = sections.get(i + 1) {
            controls.push_str(&section_button("reorder", &section.id, &hidden("target", &next.id), "Down"));
        }
        controls.push_str(&section_button("remove", &section.id, "", "Remove"));
        out.push_str(&format!(
            r#"<div style="padding:8px 0;border-bottom:1px solid #F1F5F9;"><div style="font-weight:{weight};">{label} <span class="muted">({layout}{hidden})</span></div><div style="display:flex;gap:4px;flex-wrap:wrap;margin-top:4px;">{controls}</div></div>"#,
            label = section.kind.label(),
            layout = section.layout.as_str(),
            hidden = if section.visible { "" } else { ", hidden" },
        ));
    }
    out.push_str("</div>");
    out
}

fn options<T: Copy + PartialEq>(values: &[(T, &str)], current: T) -> String {
    values
        .iter()
        .map(|(value, name)| {
            let selected = if *value == current { " selected" } else { "" };
            format!(r#"<option value="{name}"{selected}>{name}</option>"#)
        })
        .collect()
}

fn properties_panel(section: Option<&Section>) -> String {
    let Some(section) = section else {
        return r#"<div class="card"><h3 style="margin-top:0;">Properties</h3><p class="muted">Select a section to edit its layout and style.</p></div>"#.to_string();
    };
    let style = section.style_or_default();
    let layouts: Vec<(SectionLayout, &str)> = SectionLayout::ALL.iter().map(|l| (*l, l.as_str())).collect();
    let sizes = [(FontSize::Small, "small"), (FontSize::Medium, "medium"), (FontSize::Large, "large")];
    let weights = [(FontWeight::Normal, "normal"), (FontWeight::Medium, "medium"), (FontWeight::Bold, "bold")];
    let spacings = [(Spacing::Compact, "compact"), (Spacing::Normal, "normal"), (Spacing::Spacious, "spacious")];
    let id = hidden("id", &section.id);
    format!(
        r#"<div class="card"><h3 style="margin-top:0;">{label} properties</h3><form method="post" action="/customize/sections"><input type="hidden" name="action" value="layout">{id}<label for="layout">Layout</label><select id="layout" name="layout">{layout_options}</select><p><button class="button" type="submit">Apply layout</button></p></form><form method="post" action="/customize/sections"><input type="hidden" name="action" value="style">{id}<label for="font_size">Font size</label><select id="font_size" name="font_size">{size_options}</select><label for="font_weight">Font weight</label><select id="font_weight" name="font_weight">{weight_options}</select><label for="spacing">Spacing</label><select id="spacing" name="spacing">{spacing_options}</select><p><button class="button" type="submit">Apply style</button></p></form></div>"#,
        label = section.kind.label(),
        layout_options = options(&layouts, section.layout),
        size_options = options(&sizes, style.font_size.unwrap_or_default()),
        weight_options = options(&weights, style.font_weight.unwrap_or_default()),
        spacing_options = options(&spacings, style.spacing.unwrap_or_default()),
    )
}

/// A one-field form posting a `ResumeEdit`.
fn edit_field(field: &str, index: Option<usize>, label: &str, value: &str) -> String {
    let index = index.map(|i| hidden("index", &i.to_string())).unwrap_or_default();
    format!(
        r#"<form method="post" action="/customize/edit" style="display:flex;gap:8px;align-items:end;margin-bottom:6px;"><input type="hidden" name="field" value="{field}">{index}<div style="flex:1;"><label style="margin-top:0;">{label}</label><input type="text" name="value" value="{}"></div><button class="button" type="submit">Save</button></form>"#,
        escape(value)
    )
}

fn edit_action(field: &str, index: Option<usize>, label: &str) -> String {
    let index = index.map(|i| hidden("index", &i.to_string())).unwrap_or_default();
    format!(
        r#"<form class="inline" method="post" action="/customize/edit"><input type="hidden" name="field" value="{field}">{index}<button class="button" type="submit">{label}</button></form>"#
    )
}

fn content_panel(resume: &ParsedResume) -> String {
    let info = &resume.personal_information;
    let contact = &info.contact_info;
    let education = &info.education;
    let mut out = String::from(r#"<div class="card" style="margin-top:16px;"><h3 style="margin-top:0;">Content</h3>"#);
    out.push_str(&edit_field("name", None, "Name", &info.full_name));
    out.push_str(&edit_field("title", None, "Title", &resume.overview.career_name));
    out.push_str(&edit_field("summary", None, "Summary", &resume.overview.resume_summary));
    out.push_str(&edit_field("email", None, "Email", &contact.email));
    out.push_str(&edit_field("phone", None, "Phone", &contact.phone));
    out.push_str(&edit_field("linkedin", None, "LinkedIn", &contact.linkedin));
    out.push_str(&edit_field("address", None, "Address", &contact.address));
    out.push_str(&edit_field("school", None, "School", &education.school));
    out.push_str(&edit_field("majors", None, "Majors (comma separated)", &education.majors.join(", ")));
    out.push_str(&edit_field("expected_grad", None, "Expected graduation", &education.expected_grad));

    out.push_str("<h4>Experience</h4>");
    for (i, entry) in resume.experience.iter().enumerate() {
        out.push_str(&edit_field("experience_company", Some(i), "Company", &entry.company));
        out.push_str(&edit_field("experience_dates", Some(i), "Dates", &entry.employed_dates));
        out.push_str(&edit_field("experience_description", Some(i), "Description", &entry.description));
    }

    out.push_str("<h4>Projects</h4>");
    for (i, project) in resume.projects.iter().enumerate() {
        out.push_str(&edit_field("project_title", Some(i), "Title", &project.title));
        out.push_str(&edit_field("project_description", Some(i), "Description", &project.description));
    }

    out.push_str("<h4>Skills</h4>");
    if resume.skills.is_empty() {
        out.push_str(&format!(r#"<p class="muted">{}</p>"#, NO_SKILLS.trim_end_matches('.')));
    }
    for (i, skill) in resume.skills.iter().enumerate() {
        out.push_str(&edit_field("skill", Some(i), &format!("Skill {}", i + 1), skill));
        out.push_str(&edit_action("remove_skill", Some(i), "Remove"));
    }
    out.push_str(&format!("<p>{}</p>", edit_action("add_skill", None, "Add Skill")));
    out.push_str("</div>");
    out
}

fn customize_page(session: &Session, notice: Option<&Notice>) -> Html<String> {
    let default_sections = SectionList::default();
    let sections = session.custom_sections.as_ref().unwrap_or(&default_sections);
    let input = RenderInput::new(
        session.resume(),
        &session.selected_color,
        session.selected_mode.background_hex(),
    )
    .with_sections(sections);
    let canvas = custom::render(&input);
    let empty = ParsedResume::default();
    let resume = session.resume_data.as_ref().unwrap_or(&empty);

    let body = format!(
        r#"<h1>Customize</h1><div style="display:grid;grid-template-columns:280px 1fr 300px;gap:20px;align-items:start;"><aside>{components}{sections}</aside><section style="border:1px solid #E5E7EB;border-radius:12px;overflow:hidden;">{canvas}</section><aside>{properties}{content}<form class="card" method="post" action="/customize/finish" style="margin-top:16px;">{colors}{modes}<p><button class="button button-primary" type="submit">Save &amp; Preview</button></p></form></aside></div>"#,
        components = components_panel(sections),
        sections = sections_panel(sections),
        properties = properties_panel(sections.selected()),
        content = content_panel(resume),
        colors = color_picker(&session.selected_color),
        modes = mode_picker(session.selected_mode),
    );
    layout("Customize", true, notice, &body)
}

/// GET /customize
pub async fn handle_customize_page(user: SignedIn) -> Html<String> {
    customize_page(&user.session, None)
}

/// POST /customize/sections
pub async fn handle_sections(
    State(state): State<AppState>,
    user: SignedIn,
    Form(form): Form<SectionForm>,
) -> Redirect {
    let action = form.action;
    let changed = state
        .sessions
        .update(&user.id.0, |session| {
            let list = session.custom_sections.get_or_insert_with(SectionList::default);
            apply_section_form(list, form)
        })
        .await;
    debug!("Section action {action:?} changed={changed}");
    Redirect::to("/customize")
}

/// POST /customize/edit
pub async fn handle_edit(
    State(state): State<AppState>,
    user: SignedIn,
    Form(form): Form<EditForm>,
) -> Result<Response, AppError> {
    let outcome = match ResumeEdit::try_from(form) {
        Ok(edit) => {
            state
                .sessions
                .update(&user.id.0, |session| {
                    edit.apply(session.resume_data.get_or_insert_with(ParsedResume::default))
                })
                .await
        }
        Err(e) => Err(e),
    };
    match outcome {
        Ok(()) => Ok(Redirect::to("/customize").into_response()),
        Err(e) => {
            info!("Rejected resume edit: {e}");
            let session = state.sessions.load(&user.id.0).await;
            Ok(customize_page(&session, Some(&Notice::error(e.to_string()))).into_response())
        }
    }
}

/// POST /customize/finish
pub async fn handle_finish(
    State(state): State<AppState>,
    user: SignedIn,
    Form(form): Form<FinishForm>,
) -> Result<Response, AppError> {
    let color = match choose_color(form.color.as_deref(), form.custom_color.as_deref()) {
        Ok(color) => color,
        Err(message) => {
            return Ok(customize_page(&user.session, Some(&Notice::error(message))).into_response());
        }
    };
    let mode = parse_mode(form.mode.as_deref());
    state
        .sessions
        .update(&user.id.0, |session| {
            session.selected_color = color;
            session.selected_mode = mode;
            session.selected_template = Some(TemplateId::Custom);
            session.custom_sections.get_or_insert_with(SectionList::default);
        })
        .await;
    info!("Finished custom layout");
    Ok(Redirect::to("/preview").into_response())
}
