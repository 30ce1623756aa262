pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::session::extract::assign_session;
use crate::state::AppState;
use crate::{auth, customize, dashboard, preview, profile, session, templates, upload};

/// Room for multipart framing on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Sign-in
        .route("/", get(auth::handlers::handle_home))
        .route(
            "/signin",
            get(auth::handlers::handle_signin_page).post(auth::handlers::handle_signin),
        )
        .route("/signout", post(auth::handlers::handle_signout))
        // Session JSON boundary
        .route("/api/session", get(session::handlers::handle_get_session))
        .route("/api/session/resume", put(session::handlers::handle_put_resume))
        // Upload -> templates -> preview
        .route(
            "/upload",
            get(upload::handlers::handle_upload_page)
                .post(upload::handlers::handle_upload)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/templates",
            get(templates::handlers::handle_templates_page)
                .post(templates::handlers::handle_select_template),
        )
        .route("/preview", get(preview::handlers::handle_preview))
        .route("/preview/save", post(preview::handlers::handle_save))
        .route("/preview/download", get(preview::handlers::handle_download))
        .route("/preview/start-over", post(preview::handlers::handle_start_over))
        // Freeform builder
        .route("/customize", get(customize::handlers::handle_customize_page))
        .route("/customize/sections", post(customize::handlers::handle_sections))
        .route("/customize/edit", post(customize::handlers::handle_edit))
        .route("/customize/finish", post(customize::handlers::handle_finish))
        // Saved portfolios
        .route("/dashboard", get(dashboard::handlers::handle_dashboard))
        .route("/portfolios/:id/open", post(dashboard::handlers::handle_open))
        .route("/portfolios/:id/delete", post(dashboard::handlers::handle_delete))
        .route(
            "/portfolios/:id/publish",
            post(dashboard::handlers::handle_toggle_publish),
        )
        .route(
            "/profile",
            get(profile::handlers::handle_profile_page).post(profile::handlers::handle_save_profile),
        )
        .layer(middleware::from_fn(assign_session))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{
            header::{CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
            Request, StatusCode,
        },
        response::Response,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::backend_client::{BackendError, PortfolioBackend, ResumeFile};
    use crate::config::Config;
    use crate::models::portfolio::{DisplayMode, Portfolio, PortfolioPayload, PublishState};
    use crate::models::profile::{Profile, ProfileUpdate};
    use crate::models::resume::ParsedResume;
    use crate::render::TemplateId;
    use crate::session::extract::COOKIE_NAME;
    use crate::session::store::SessionStore;

    /// In-memory backend recording every call it receives.
    #[derive(Default)]
    struct FakeBackend {
        portfolios: Mutex<Vec<Portfolio>>,
        calls: Mutex<Vec<String>>,
        next_id: Mutex<u32>,
    }

    impl FakeBackend {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn build(&self, id: String, payload: &PortfolioPayload) -> Portfolio {
            let stamp = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
            Portfolio {
                id,
                name: payload.name.clone(),
                template_id: payload.template_id.clone(),
                data: payload.data.clone(),
                color: payload.color.clone(),
                display_mode: payload.display_mode,
                is_published: payload.is_published,
                created_at: stamp,
                updated_at: stamp,
            }
        }
    }

    #[async_trait]
    impl PortfolioBackend for FakeBackend {
        async fn upload_resume(&self, _token: &str, file: ResumeFile) -> Result<ParsedResume, BackendError> {
            self.record(format!("upload {}", file.file_name));
            let mut resume = ParsedResume::default();
            resume.personal_information.full_name = "Ada Lovelace".into();
            resume.skills = vec!["Mathematics".into()];
            Ok(resume)
        }

        async fn list_portfolios(&self, _token: &str) -> Result<Vec<Portfolio>, BackendError> {
            self.record("list".into());
            Ok(self.portfolios.lock().unwrap().clone())
        }

        async fn get_portfolio(&self, _token: &str, id: &str) -> Result<Portfolio, BackendError> {
            self.record(format!("get {id}"));
            self.portfolios
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(BackendError::NotFound)
        }

        async fn create_portfolio(
            &self,
            _token: &str,
            payload: &PortfolioPayload,
        ) -> Result<Portfolio, BackendError> {
            self.record("create".into());
            let id = {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                format!("p-{next}")
            };
            let portfolio = self.build(id, payload);
            self.portfolios.lock().unwrap().insert(0, portfolio.clone());
            Ok(portfolio)
        }

        async fn update_portfolio(
            &self,
            _token: &str,
            id: &str,
            payload: &PortfolioPayload,
        ) -> Result<Portfolio, BackendError> {
            self.record(format!("update {id}"));
            let updated = self.build(id.to_string(), payload);
            let mut portfolios = self.portfolios.lock().unwrap();
            let slot = portfolios
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(BackendError::NotFound)?;
            *slot = updated.clone();
            Ok(updated)
        }

        async fn delete_portfolio(&self, _token: &str, id: &str) -> Result<(), BackendError> {
            self.record(format!("delete {id}"));
            self.portfolios.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }

        async fn toggle_publish(&self, _token: &str, id: &str) -> Result<PublishState, BackendError> {
            self.record(format!("publish {id}"));
            let mut portfolios = self.portfolios.lock().unwrap();
            let portfolio = portfolios
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(BackendError::NotFound)?;
            portfolio.is_published = !portfolio.is_published;
            Ok(PublishState {
                success: true,
                is_published: portfolio.is_published,
            })
        }

        async fn get_profile(&self, _token: &str) -> Result<Option<Profile>, BackendError> {
            self.record("profile".into());
            Ok(None)
        }

        async fn update_profile(&self, _token: &str, update: &ProfileUpdate) -> Result<Profile, BackendError> {
            self.record("update profile".into());
            Ok(Profile {
                details: update.clone(),
                ..Default::default()
            })
        }
    }

    struct Harness {
        app: Router,
        backend: Arc<FakeBackend>,
        sessions: SessionStore,
        sid: String,
    }

    impl Harness {
        fn new() -> Self {
            let backend = Arc::new(FakeBackend::default());
            let config = Config::for_tests();
            let sessions = SessionStore::new(config.session_ttl);
            let state = AppState {
                config,
                backend: backend.clone(),
                sessions: sessions.clone(),
            };
            Harness {
                app: build_router(state),
                backend,
                sessions,
                sid: Uuid::new_v4().to_string(),
            }
        }

        /// A signed-in visitor holding a parsed resume.
        async fn signed_in() -> Self {
            let harness = Harness::new();
            harness
                .sessions
                .update(&harness.sid, |s| {
                    s.access_token = Some("tok".into());
                    let mut resume = ParsedResume::default();
                    resume.personal_information.full_name = "Grace Hopper".into();
                    resume.overview.career_name = "Rear Admiral".into();
                    s.resume_data = Some(resume);
                })
                .await;
            harness
        }

        async fn send(&self, request: Request<Body>) -> Response {
            self.app.clone().oneshot(request).await.unwrap()
        }

        async fn get(&self, uri: &str) -> Response {
            self.send(
                Request::get(uri)
                    .header(COOKIE, format!("{COOKIE_NAME}={}", self.sid))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
        }

        async fn post_form(&self, uri: &str, form: &str) -> Response {
            self.send(
                Request::post(uri)
                    .header(COOKIE, format!("{COOKIE_NAME}={}", self.sid))
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
        }

        async fn upload(&self, file_name: &str, content_type: &str, contents: &str) -> Response {
            let body = format!(
                "--XBOUNDARY\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n{contents}\r\n--XBOUNDARY--\r\n"
            );
            self.send(
                Request::post("/upload")
                    .header(COOKIE, format!("{COOKIE_NAME}={}", self.sid))
                    .header(CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
        }

        async fn session(&self) -> crate::session::Session {
            self.sessions.load(&self.sid).await
        }
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let harness = Harness::new();
        let response = harness.get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "foliage-web");
    }

    #[tokio::test]
    async fn test_protected_pages_redirect_to_signin_and_issue_cookie() {
        let harness = Harness::new();
        let response = harness
            .send(Request::get("/dashboard").body(Body::empty()).unwrap())
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/signin");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with(&format!("{COOKIE_NAME}=")));
        assert!(cookie.contains("HttpOnly"));
        assert!(harness.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_signin_stores_token_and_signout_clears_session() {
        let harness = Harness::new();
        let response = harness.post_form("/signin", "access_token=%20tok-1%20").await;
        assert_eq!(location(&response), "/dashboard");
        assert_eq!(harness.session().await.access_token.as_deref(), Some("tok-1"));

        let response = harness.post_form("/signin", "access_token=").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Please enter your access token."));

        harness.post_form("/signout", "").await;
        assert!(harness.session().await.access_token.is_none());
    }

    #[tokio::test]
    async fn test_text_upload_is_rejected_without_backend_call() {
        let harness = Harness::signed_in().await;
        let response = harness.upload("notes.txt", "text/plain", "hello").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Please upload a PDF or DOCX file only."));
        assert!(harness.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_pdf_upload_stores_resume_and_continues() {
        let harness = Harness::signed_in().await;
        let response = harness.upload("cv.pdf", "application/pdf", "%PDF-1.4").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/templates");
        assert_eq!(harness.backend.calls(), ["upload cv.pdf"]);

        let response = harness.get("/api/session").await;
        let session: Value = serde_json::from_str(&text(response).await).unwrap();
        assert_eq!(
            session["resumeData"]["personal_information"]["full_name"],
            "Ada Lovelace"
        );
        assert!(session.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn test_template_selection_requires_a_template() {
        let harness = Harness::signed_in().await;
        let response = harness.post_form("/templates", "color=%230F766E&mode=dark").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Please select a template."));

        let response = harness
            .post_form("/templates", "template=creative-bold&color=%230F766E&mode=dark")
            .await;
        assert_eq!(location(&response), "/preview");
        let session = harness.session().await;
        assert_eq!(session.selected_template, Some(TemplateId::CreativeBold));
        assert_eq!(session.selected_color, "#0F766E");
        assert_eq!(session.selected_mode, DisplayMode::Dark);

        let page = text(harness.get("/preview?tab=about").await).await;
        assert!(page.contains(r#"data-section="about""#));
        assert!(page.contains("Grace Hopper"));
    }

    #[tokio::test]
    async fn test_save_falls_back_to_create_for_unknown_id() {
        let harness = Harness::signed_in().await;
        harness
            .sessions
            .update(&harness.sid, |s| {
                s.selected_template = Some(TemplateId::ModernMinimal);
                s.current_portfolio_id = Some("stale-1".into());
            })
            .await;

        let response = harness.post_form("/preview/save", "name=").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Saved!"));
        assert_eq!(harness.backend.calls(), ["update stale-1", "create"]);
        assert_eq!(harness.session().await.current_portfolio_id.as_deref(), Some("p-1"));
        assert_eq!(harness.backend.portfolios.lock().unwrap()[0].name, "My Portfolio");
    }

    #[tokio::test]
    async fn test_save_then_reopen_round_trip() {
        let harness = Harness::signed_in().await;
        harness
            .sessions
            .update(&harness.sid, |s| {
                s.selected_template = Some(TemplateId::ElegantSophisticated);
                s.selected_color = "#7C3AED".into();
                s.selected_mode = DisplayMode::Dark;
            })
            .await;
        let saved_resume = harness.session().await.resume_data;

        harness.post_form("/preview/save", "name=Main").await;
        harness.post_form("/preview/save", "name=Main+v2").await;
        assert_eq!(harness.backend.calls(), ["create", "update p-1"]);

        harness.post_form("/preview/start-over", "").await;
        let cleared = harness.session().await;
        assert!(cleared.resume_data.is_none());
        assert_eq!(cleared.access_token.as_deref(), Some("tok"));

        let dashboard = text(harness.get("/dashboard").await).await;
        assert!(dashboard.contains("Main v2"));
        assert!(dashboard.contains("Elegant Sophisticated"));

        let response = harness.post_form("/portfolios/p-1/open", "").await;
        assert_eq!(location(&response), "/preview");
        let reopened = harness.session().await;
        assert_eq!(reopened.resume_data, saved_resume);
        assert_eq!(reopened.selected_template, Some(TemplateId::ElegantSophisticated));
        assert_eq!(reopened.selected_color, "#7C3AED");
        assert_eq!(reopened.selected_mode, DisplayMode::Dark);
        assert_eq!(reopened.current_portfolio_id.as_deref(), Some("p-1"));
        assert_eq!(reopened.portfolio_name.as_deref(), Some("Main v2"));

        // saving the reopened portfolio keeps its name
        let preview = text(harness.get("/preview").await).await;
        assert!(preview.contains(r#"name="name" value="Main v2""#));
        harness.post_form("/preview/save", "name=Main+v2").await;
        assert_eq!(harness.backend.calls().last().map(String::as_str), Some("update p-1"));
        assert_eq!(harness.backend.portfolios.lock().unwrap()[0].name, "Main v2");

        harness.upload("cv.pdf", "application/pdf", "%PDF-1.4").await;
        let fresh = harness.session().await;
        assert!(fresh.current_portfolio_id.is_none());
        assert!(fresh.portfolio_name.is_none());
    }

    #[tokio::test]
    async fn test_publish_and_delete() {
        let harness = Harness::signed_in().await;
        harness
            .sessions
            .update(&harness.sid, |s| s.selected_template = Some(TemplateId::ModernMinimal))
            .await;
        harness.post_form("/preview/save", "name=Site").await;

        let response = harness.post_form("/portfolios/p-1/publish", "").await;
        assert_eq!(location(&response), "/dashboard");
        assert!(harness.backend.portfolios.lock().unwrap()[0].is_published);

        let response = harness.post_form("/portfolios/p-1/delete", "").await;
        assert_eq!(location(&response), "/dashboard");
        assert!(harness.backend.portfolios.lock().unwrap().is_empty());
        assert!(harness.session().await.current_portfolio_id.is_none());

        let response = harness.post_form("/portfolios/p-1/open", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("Not found"));
    }

    #[tokio::test]
    async fn test_download_is_a_standalone_attachment() {
        let harness = Harness::signed_in().await;
        let response = harness.get("/preview/download").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_DISPOSITION],
            "attachment; filename=\"grace-hopper-portfolio.html\""
        );
        let document = text(response).await;
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(!document.contains("<script"));
    }

    #[tokio::test]
    async fn test_customize_edits_and_sections() {
        let harness = Harness::signed_in().await;
        let page = text(harness.get("/customize").await).await;
        assert!(page.contains("No skills listed"));
        assert!(page.contains("Add Skill"));

        let response = harness.post_form("/customize/edit", "field=add_skill").await;
        assert_eq!(location(&response), "/customize");
        assert_eq!(harness.session().await.resume().unwrap().skills, ["New Skill"]);

        let response = harness
            .post_form("/customize/edit", "field=skill&index=4&value=Rust")
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(text(response).await.contains("no skill entry at position 4"));

        harness
            .post_form("/customize/sections", "action=remove&id=5")
            .await;
        harness
            .post_form("/customize/sections", "action=add&kind=skills")
            .await;
        let sections = harness.session().await.custom_sections.unwrap();
        assert_eq!(sections.sections().last().unwrap().id, "8");

        let response = harness
            .post_form("/customize/finish", "color=%23EF4444&mode=light")
            .await;
        assert_eq!(location(&response), "/preview");
        let session = harness.session().await;
        assert_eq!(session.selected_template, Some(TemplateId::Custom));
        assert_eq!(session.selected_color, "#EF4444");

        let preview = text(harness.get("/preview").await).await;
        assert!(preview.contains(r#"data-block="skills""#));
        assert!(preview.contains("New Skill"));
    }

    #[tokio::test]
    async fn test_profile_save_shows_confirmation() {
        let harness = Harness::signed_in().await;
        let page = text(harness.get("/profile").await).await;
        assert!(page.contains(r#"name="full_name" value="""#));

        let response = harness
            .post_form("/profile", "full_name=Grace+Hopper&bio=+&github=ghopper")
            .await;
        let page = text(response).await;
        assert!(page.contains("Profile saved"));
        assert!(page.contains(r#"value="ghopper""#));
        assert_eq!(harness.backend.calls(), ["profile", "update profile"]);
    }
}
