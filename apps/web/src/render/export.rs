//! The downloadable single-file portfolio.

use crate::models::portfolio::DisplayMode;
use crate::models::resume::ParsedResume;
use crate::render::color;
use crate::render::html::{escape, external_href, slug};
use crate::render::shared::{non_empty, NO_COMPANY};

/// File name offered for the download, e.g. `ada-lovelace-portfolio.html`.
pub fn file_name(resume: &ParsedResume) -> String {
    format!("{}-portfolio.html", slug(&resume.personal_information.full_name))
}

/// A self-contained HTML5 document: inline style, no scripts, no remote assets.
pub fn render_standalone(resume: &ParsedResume, accent: &str, mode: DisplayMode) -> String {
    let background = mode.background_hex();
    let accent = color::effective_accent(accent, background);
    let text = if color::is_light(background) {
        "#0f172a"
    } else {
        "#F9FAFB"
    };
    let info = &resume.personal_information;
    let name = non_empty(&info.full_name);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!(
        "<title>{}</title>\n",
        escape(&name.map(|n| format!("{n} - Portfolio")).unwrap_or_else(|| "Portfolio".into()))
    ));
    out.push_str(&format!(
        r#"<style>
:root {{ --accent: {accent}; --background: {background}; --text: {text}; }}
* {{ box-sizing: border-box; }}
body {{ margin: 0; background: var(--background); color: var(--text); font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; }}
main {{ max-width: 880px; margin: 0 auto; padding: 48px 24px; }}
h1 {{ margin: 0; font-size: 2.4rem; }}
h2 {{ color: var(--accent); border-bottom: 2px solid var(--accent); padding-bottom: 4px; margin-top: 40px; }}
.title {{ color: var(--accent); font-weight: 600; margin: 4px 0 0; }}
.contact {{ display: flex; flex-wrap: wrap; gap: 16px; margin-top: 12px; }}
.contact a {{ color: var(--accent); }}
.entry {{ margin-bottom: 20px; }}
.entry-head {{ display: flex; justify-content: space-between; gap: 12px; font-weight: 700; }}
.dates {{ opacity: 0.7; font-weight: 400; white-space: nowrap; }}
.skills {{ display: flex; flex-wrap: wrap; gap: 8px; list-style: none; padding: 0; }}
.skills li {{ border: 1px solid var(--accent); border-radius: 999px; padding: 4px 12px; }}
</style>
</head>
<body>
<main>
"#
    ));

    out.push_str("<header>\n");
    if let Some(name) = name {
        out.push_str(&format!("<h1>{}</h1>\n", escape(name)));
    }
    if let Some(title) = non_empty(&resume.overview.career_name) {
        out.push_str(&format!("<p class=\"title\">{}</p>\n", escape(title)));
    }
    let contact = &info.contact_info;
    let mut items: Vec<String> = [&contact.email, &contact.phone, &contact.address]
        .into_iter()
        .filter_map(|value| non_empty(value))
        .map(|value| format!("<span>{}</span>", escape(value)))
        .collect();
    if let Some(href) = external_href(&contact.linkedin) {
        items.push(format!("<a href=\"{href}\" rel=\"noreferrer\">LinkedIn</a>"));
    }
    if !items.is_empty() {
        out.push_str(&format!("<div class=\"contact\">{}</div>\n", items.join("")));
    }
    out.push_str("</header>\n");

    if let Some(summary) = non_empty(&resume.overview.resume_summary) {
        out.push_str(&format!("<section>\n<h2>About</h2>\n<p>{}</p>\n</section>\n", escape(summary)));
    }

    if !resume.experience.is_empty() {
        out.push_str("<section>\n<h2>Experience</h2>\n");
        for entry in &resume.experience {
            out.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><span>{}</span><span class=\"dates\">{}</span></div>",
                escape(non_empty(&entry.company).unwrap_or(NO_COMPANY)),
                escape(&entry.employed_dates),
            ));
            if let Some(description) = non_empty(&entry.description) {
                out.push_str(&format!("<p>{}</p>", escape(description)));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</section>\n");
    }

    if !resume.projects.is_empty() {
        out.push_str("<section>\n<h2>Projects</h2>\n");
        for project in &resume.projects {
            out.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><span>{}</span></div>",
                escape(non_empty(&project.title).unwrap_or("Untitled"))
            ));
            if let Some(description) = non_empty(&project.description) {
                out.push_str(&format!("<p>{}</p>", escape(description)));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</section>\n");
    }

    if !resume.skills.is_empty() {
        out.push_str("<section>\n<h2>Skills</h2>\n<ul class=\"skills\">");
        for skill in &resume.skills {
            out.push_str(&format!("<li>{}</li>", escape(skill)));
        }
        out.push_str("</ul>\n</section>\n");
    }

    let education = &info.education;
    if let Some(school) = non_empty(&education.school) {
        out.push_str(&format!("<section>\n<h2>Education</h2>\n<p><strong>{}</strong>", escape(school)));
        if !education.majors.is_empty() {
            out.push_str(&format!("<br>{}", escape(&education.majors.join(", "))));
        }
        if !education.minors.is_empty() {
            out.push_str(&format!("<br>Minor: {}", escape(&education.minors.join(", "))));
        }
        if let Some(grad) = non_empty(&education.expected_grad) {
            out.push_str(&format!("<br>{}", escape(grad)));
        }
        out.push_str("</p>\n</section>\n");
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}
