//! The HTML shell every screen is rendered into.

use axum::response::Html;

use crate::render::html::escape;

/// A one-line message shown above the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Success(String),
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice::Success(message.into())
    }

    pub fn to_html(&self) -> String {
        let (class, role, text) = match self {
            Notice::Error(text) => ("notice notice-error", "alert", text),
            Notice::Success(text) => ("notice notice-success", "status", text),
        };
        format!(r#"<div class="{class}" role="{role}">{}</div>"#, escape(text))
    }
}

const STYLE: &str = "\
body{margin:0;font-family:system-ui,-apple-system,'Segoe UI',Roboto,sans-serif;background:#F8FAFC;color:#0f172a;}\
.topbar{display:flex;align-items:center;justify-content:space-between;padding:14px 28px;background:#fff;border-bottom:1px solid #E5E7EB;}\
.topbar a{color:#0f172a;text-decoration:none;margin-right:16px;font-weight:600;}\
.brand{font-size:18px;font-weight:800;}\
.content{max-width:1200px;margin:0 auto;padding:28px;}\
.notice{padding:12px 16px;border-radius:8px;margin-bottom:16px;}\
.notice-error{background:#FEE2E2;color:#991B1B;}\
.notice-success{background:#DCFCE7;color:#166534;}\
.card{background:#fff;border:1px solid #E5E7EB;border-radius:12px;padding:18px;}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:16px;}\
.button{display:inline-block;padding:10px 16px;border-radius:8px;border:1px solid #CBD5E1;background:#fff;color:#0f172a;font-weight:600;cursor:pointer;text-decoration:none;}\
.button-primary{background:#2563EB;border-color:#2563EB;color:#fff;}\
.button-danger{border-color:#FCA5A5;color:#B91C1C;}\
.inline{display:inline;}\
label{display:block;font-weight:600;margin:12px 0 4px;}\
input[type=text],input[type=email],input[type=password],input[type=url],textarea,select{width:100%;box-sizing:border-box;padding:8px 10px;border:1px solid #CBD5E1;border-radius:8px;font:inherit;}\
.muted{color:#64748B;}";

/// Wraps `body` in the site chrome. `signed_in` decides which links show.
pub fn layout(title: &str, signed_in: bool, notice: Option<&Notice>, body: &str) -> Html<String> {
    let nav = if signed_in {
        r#"<nav><a href="/upload">Upload</a><a href="/templates">Templates</a><a href="/customize">Customize</a><a href="/dashboard">Dashboard</a><a href="/profile">Profile</a><form class="inline" method="post" action="/signout"><button class="button" type="submit">Sign out</button></form></nav>"#
    } else {
        r#"<nav><a href="/signin">Sign in</a></nav>"#
    };
    let notice = notice.map(Notice::to_html).unwrap_or_default();
    Html(format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title} | Foliage</title><style>{STYLE}</style></head><body><header class="topbar"><a class="brand" href="/">Foliage</a>{nav}</header><main class="content">{notice}{body}</main></body></html>"#,
        title = escape(title),
    ))
}

/// A POST-only control rendered as a single button.
pub fn post_button(action: &str, label: &str, class: &str) -> String {
    format!(
        r#"<form class="inline" method="post" action="{}"><button class="button {}" type="submit">{}</button></form>"#,
        escape(action),
        class,
        escape(label)
    )
}
