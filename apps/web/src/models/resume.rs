//! The `ParsedResume` interchange format produced by the external parser.
//!
//! Every field is defaultable: absent keys and explicit `null`s decode to
//! empty strings and empty lists. Legacy free-text `experience` / `projects`
//! entries are normalized here, at the decode boundary, so the rest of the
//! crate only ever sees the structured shapes.

use serde::{Deserialize, Serialize};

use crate::models::legacy;
use crate::models::nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default, deserialize_with = "nullable")]
    pub resume_pdf: String,
    /// Opaque token correlating the parse to a saved portfolio. Never interpreted.
    #[serde(default, deserialize_with = "nullable")]
    pub portfolio_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub personal_information: PersonalInformation,
    #[serde(default, deserialize_with = "nullable")]
    pub overview: Overview,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "legacy::experience_list")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "legacy::project_list")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInformation {
    #[serde(default, deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub contact_info: ContactInfo,
    #[serde(default, deserialize_with = "nullable")]
    pub education: Education,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "nullable")]
    pub school: String,
    #[serde(default, deserialize_with = "nullable")]
    pub majors: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub minors: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub expected_grad: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    #[serde(default, deserialize_with = "nullable")]
    pub career_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub resume_summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub employed_dates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

impl ParsedResume {
    /// True when the parse carried nothing a template could show.
    pub fn is_blank(&self) -> bool {
        let info = &self.personal_information;
        let contact = &info.contact_info;
        info.full_name.trim().is_empty()
            && contact.email.is_empty()
            && contact.phone.is_empty()
            && contact.linkedin.is_empty()
            && contact.address.is_empty()
            && info.education.school.is_empty()
            && self.overview.career_name.is_empty()
            && self.overview.resume_summary.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_decodes_to_defaults() {
        let resume: ParsedResume = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resume, ParsedResume::default());
        assert!(resume.is_blank());
    }

    #[test]
    fn test_nulls_are_treated_as_absent() {
        let resume: ParsedResume = serde_json::from_value(json!({
            "resume_pdf": null,
            "personal_information": {
                "full_name": "Ada Lovelace",
                "contact_info": null,
                "education": { "school": "UCL", "majors": null }
            },
            "overview": null,
            "skills": null,
            "experience": null,
            "projects": null
        }))
        .unwrap();

        assert_eq!(resume.personal_information.full_name, "Ada Lovelace");
        assert_eq!(resume.personal_information.contact_info, ContactInfo::default());
        assert_eq!(resume.personal_information.education.school, "UCL");
        assert!(resume.personal_information.education.majors.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.experience.is_empty());
        assert!(!resume.is_blank());
    }

    #[test]
    fn test_full_document_decodes() {
        let resume: ParsedResume = serde_json::from_value(json!({
            "resume_pdf": "resume.pdf",
            "portfolio_id": "0b8f6c1e",
            "personal_information": {
                "full_name": "Grace Hopper",
                "contact_info": {
                    "email": "grace@navy.mil",
                    "linkedin": "https://linkedin.com/in/grace",
                    "phone": "555-0100",
                    "address": "Arlington, VA"
                },
                "education": {
                    "school": "Yale",
                    "majors": ["Mathematics"],
                    "minors": ["Physics"],
                    "expected_grad": "1934"
                }
            },
            "overview": { "career_name": "Computer Scientist", "resume_summary": "Compilers." },
            "skills": ["COBOL", "FLOW-MATIC"],
            "experience": [
                { "company": "Eckert-Mauchly", "description": "UNIVAC I", "employed_dates": "1949-1950" }
            ],
            "projects": [{ "title": "A-0", "description": "First compiler" }]
        }))
        .unwrap();

        assert_eq!(resume.portfolio_id, "0b8f6c1e");
        assert_eq!(resume.skills, vec!["COBOL", "FLOW-MATIC"]);
        assert_eq!(resume.experience[0].employed_dates, "1949-1950");
        assert_eq!(resume.projects[0].title, "A-0");
    }
}
