//! Upload intake: the checks a file has to pass before it is sent for parsing.

pub mod handlers;

use bytes::Bytes;
use thiserror::Error;

use crate::backend_client::ResumeFile;

pub const PDF: &str = "application/pdf";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const ACCEPTED_TYPES: [&str; 2] = [PDF, DOCX];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Please select a file to upload.")]
    Missing,

    #[error("Please upload a PDF or DOCX file only.")]
    WrongType,

    #[error("The file is too large. The maximum size is {}.", human_size(.limit))]
    TooLarge { limit: usize },
}

/// Byte count in the largest unit that keeps it at or above one.
fn human_size(bytes: &usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    match *bytes {
        b if b >= MB && b % MB == 0 => format!("{} MB", b / MB),
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{} KB", b / KB),
        b => format!("{b} bytes"),
    }
}

/// A file as it arrived in the form, before validation.
#[derive(Debug, Clone, Default)]
pub struct Candidate {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Accepts `candidate` when it is a non-empty PDF or DOCX within `max_bytes`.
pub fn validate(candidate: Option<Candidate>, max_bytes: usize) -> Result<ResumeFile, IntakeError> {
    let candidate = candidate.ok_or(IntakeError::Missing)?;
    let file_name = candidate
        .file_name
        .filter(|name| !name.trim().is_empty())
        .ok_or(IntakeError::Missing)?;

    let content_type = candidate
        .content_type
        .map(|ct| essence(&ct))
        .filter(|ct| ACCEPTED_TYPES.contains(&ct.as_str()))
        .ok_or(IntakeError::WrongType)?;

    if candidate.bytes.len() > max_bytes {
        return Err(IntakeError::TooLarge { limit: max_bytes });
    }
    if candidate.bytes.is_empty() {
        return Err(IntakeError::Missing);
    }

    Ok(ResumeFile {
        file_name,
        content_type,
        bytes: candidate.bytes,
    })
}

/// The media type without parameters, lowercased.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
