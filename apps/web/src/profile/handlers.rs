use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use tracing::{info, warn};

use crate::backend_client::BackendError;
use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileUpdate};
use crate::pages::{layout, Notice};
use crate::render::html::escape;
use crate::session::extract::SignedIn;
use crate::state::AppState;

pub const PROFILE_SAVED: &str = "Profile saved";

fn profile_page(profile: &Profile, notice: Option<&Notice>) -> Html<String> {
    let d = &profile.details;
    let fields: [(&str, &str, &Option<String>); 8] = [
        ("full_name", "Full name", &d.full_name),
        ("title", "Job title", &d.title),
        ("company", "Company", &d.company),
        ("phone", "Phone", &d.phone),
        ("location", "Location", &d.location),
        ("linkedin", "LinkedIn", &d.linkedin),
        ("github", "GitHub", &d.github),
        ("website", "Website", &d.website),
    ];
    let mut inputs = String::new();
    if let Some(email) = &profile.email {
        inputs.push_str(&format!(
            r#"<label>Email</label><p class="muted" style="margin:0;">{}</p>"#,
            escape(email)
        ));
    }
    for (name, label, value) in fields {
        inputs.push_str(&format!(
            r#"<label for="{name}">{label}</label><input id="{name}" type="text" name="{name}" value="{}">"#,
            escape(value.as_deref().unwrap_or_default())
        ));
    }
    inputs.push_str(&format!(
        r#"<label for="bio">Bio</label><textarea id="bio" name="bio" rows="4">{}</textarea>"#,
        escape(d.bio.as_deref().unwrap_or_default())
    ));

    let body = format!(
        r#"<h1>Profile</h1><p class="muted">Update your personal details that will be used in your portfolio.</p><form class="card" method="post" action="/profile" style="max-width:640px;">{inputs}<p><button class="button button-primary" type="submit">Save profile</button></p></form>"#
    );
    layout("Profile", true, notice, &body)
}

/// GET /profile
pub async fn handle_profile_page(State(state): State<AppState>, user: SignedIn) -> Result<Response, AppError> {
    match state.backend.get_profile(&user.token).await {
        Ok(profile) => Ok(profile_page(&profile.unwrap_or_default(), None).into_response()),
        Err(BackendError::Unauthorized) => Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Loading profile failed: {e}");
            Ok(profile_page(&Profile::default(), Some(&Notice::error(e.to_string()))).into_response())
        }
    }
}

/// POST /profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    user: SignedIn,
    Form(form): Form<ProfileUpdate>,
) -> Result<Response, AppError> {
    let update = form.without_blanks();
    match state.backend.update_profile(&user.token, &update).await {
        Ok(profile) => {
            info!("Profile saved");
            Ok(profile_page(&profile, Some(&Notice::success(PROFILE_SAVED))).into_response())
        }
        Err(BackendError::Unauthorized) => Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Saving profile failed: {e}");
            let unsaved = Profile {
                details: update,
                ..Default::default()
            };
            Ok(profile_page(&unsaved, Some(&Notice::error(e.to_string()))).into_response())
        }
    }
}
