//! Legacy free-text `experience` / `projects` entries.
//!
//! Older parses emitted each entry as one string such as
//! `"Engineer at Initech (2018-2020)"`. Both shapes are accepted on the wire
//! and resolved here into the structured variants.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::models::resume::{Experience, Project};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExperienceRecord {
    Structured(Experience),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProjectRecord {
    Structured(Project),
    Text(String),
}

pub(crate) fn experience_list<'de, D>(deserializer: D) -> Result<Vec<Experience>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Option::<Vec<Option<ExperienceRecord>>>::deserialize(deserializer)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(|record| match record {
            Some(ExperienceRecord::Structured(e)) => e,
            Some(ExperienceRecord::Text(text)) => parse_experience_text(&text),
            None => Experience::default(),
        })
        .collect())
}

pub(crate) fn project_list<'de, D>(deserializer: D) -> Result<Vec<Project>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Option::<Vec<Option<ProjectRecord>>>::deserialize(deserializer)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(|record| match record {
            Some(ProjectRecord::Structured(p)) => p,
            Some(ProjectRecord::Text(text)) => Project {
                title: text,
                description: String::new(),
            },
            None => Project {
                title: "Untitled".to_string(),
                description: String::new(),
            },
        })
        .collect())
}

fn dates_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\(([^)]+)\)").expect("valid dates pattern"))
}

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\s+(?:at|@)\s+").expect("valid separator pattern"))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a legacy `"<company> (<dates>) <description>"` string.
///
/// The first parenthesized group becomes `employed_dates`. The remaining text
/// is split on a whitespace-delimited `at` / `@`; when that yields two or more
/// parts the second is the company and anything after it the description.
/// Without a separator, text before the group is the company and text after
/// it the description. Anything else is all company.
pub fn parse_experience_text(text: &str) -> Experience {
    let group = dates_pattern()
        .captures(text)
        .and_then(|caps| Some((caps.get(0)?, caps.get(1)?)));

    let (employed_dates, head, tail) = match group {
        Some((whole, inner)) => (
            inner.as_str().trim().to_string(),
            &text[..whole.start()],
            &text[whole.end()..],
        ),
        None => (String::new(), text, ""),
    };

    let remainder = collapse_whitespace(&format!("{head} {tail}"));
    let parts: Vec<&str> = separator_pattern().split(&remainder).collect();

    if parts.len() >= 2 {
        return Experience {
            company: parts[1].trim().to_string(),
            description: parts[2..].join(" ").trim().to_string(),
            employed_dates,
        };
    }

    let head = collapse_whitespace(head);
    let tail = collapse_whitespace(tail);
    if group.is_some() && !head.is_empty() && !tail.is_empty() {
        return Experience {
            company: head,
            description: tail,
            employed_dates,
        };
    }

    Experience {
        company: remainder,
        description: String::new(),
        employed_dates,
    }
}
