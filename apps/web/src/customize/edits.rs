//! Inline edits applied to the session resume from the customize screen.

use serde::Deserialize;
use thiserror::Error;

use crate::models::resume::ParsedResume;

/// Value given to a freshly added skill.
pub const NEW_SKILL: &str = "New Skill";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("There is no {list} entry at position {index} (have {len})")]
    OutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Editing {0} requires an entry index")]
    MissingIndex(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeEdit {
    Name(String),
    Title(String),
    Summary(String),
    Email(String),
    Phone(String),
    Linkedin(String),
    Address(String),
    School(String),
    /// Comma separated.
    Majors(String),
    ExpectedGrad(String),
    ExperienceCompany { index: usize, value: String },
    ExperienceDates { index: usize, value: String },
    ExperienceDescription { index: usize, value: String },
    ProjectTitle { index: usize, value: String },
    ProjectDescription { index: usize, value: String },
    Skill { index: usize, value: String },
    AddSkill,
    RemoveSkill { index: usize },
}

impl ResumeEdit {
    /// Applies the edit in place. Last write wins.
    pub fn apply(self, resume: &mut ParsedResume) -> Result<(), EditError> {
        let info = &mut resume.personal_information;
        match self {
            ResumeEdit::Name(value) => info.full_name = value,
            ResumeEdit::Title(value) => resume.overview.career_name = value,
            ResumeEdit::Summary(value) => resume.overview.resume_summary = value,
            ResumeEdit::Email(value) => info.contact_info.email = value,
            ResumeEdit::Phone(value) => info.contact_info.phone = value,
            ResumeEdit::Linkedin(value) => info.contact_info.linkedin = value,
            ResumeEdit::Address(value) => info.contact_info.address = value,
            ResumeEdit::School(value) => info.education.school = value,
            ResumeEdit::Majors(value) => {
                info.education.majors = value
                    .split(',')
                    .map(str::trim)
                    .filter(|major| !major.is_empty())
                    .map(String::from)
                    .collect();
            }
            ResumeEdit::ExpectedGrad(value) => info.education.expected_grad = value,
            ResumeEdit::ExperienceCompany { index, value } => {
                entry(&mut resume.experience, "experience", index)?.company = value
            }
            ResumeEdit::ExperienceDates { index, value } => {
                entry(&mut resume.experience, "experience", index)?.employed_dates = value
            }
            ResumeEdit::ExperienceDescription { index, value } => {
                entry(&mut resume.experience, "experience", index)?.description = value
            }
            ResumeEdit::ProjectTitle { index, value } => {
                entry(&mut resume.projects, "project", index)?.title = value
            }
            ResumeEdit::ProjectDescription { index, value } => {
                entry(&mut resume.projects, "project", index)?.description = value
            }
            ResumeEdit::Skill { index, value } => {
                *entry(&mut resume.skills, "skill", index)? = value
            }
            ResumeEdit::AddSkill => resume.skills.push(NEW_SKILL.to_string()),
            ResumeEdit::RemoveSkill { index } => {
                entry(&mut resume.skills, "skill", index)?;
                resume.skills.remove(index);
            }
        }
        Ok(())
    }
}

fn entry<'a, T>(list: &'a mut [T], name: &'static str, index: usize) -> Result<&'a mut T, EditError> {
    let len = list.len();
    list.get_mut(index).ok_or(EditError::OutOfRange {
        list: name,
        index,
        len,
    })
}

/// Which field an edit form targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditField {
    Name,
    Title,
    Summary,
    Email,
    Phone,
    Linkedin,
    Address,
    School,
    Majors,
    ExpectedGrad,
    ExperienceCompany,
    ExperienceDates,
    ExperienceDescription,
    ProjectTitle,
    ProjectDescription,
    Skill,
    AddSkill,
    RemoveSkill,
}

/// The flat form posted by the inline editors.
#[derive(Debug, Clone, Deserialize)]
pub struct EditForm {
    pub field: EditField,
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub value: String,
}

impl TryFrom<EditForm> for ResumeEdit {
    type Error = EditError;

    fn try_from(form: EditForm) -> Result<Self, Self::Error> {
        let EditForm { field, index, value } = form;
        let index_for = |name| index.ok_or(EditError::MissingIndex(name));
        Ok(match field {
            EditField::Name => ResumeEdit::Name(value),
            EditField::Title => ResumeEdit::Title(value),
            EditField::Summary => ResumeEdit::Summary(value),
            EditField::Email => ResumeEdit::Email(value),
            EditField::Phone => ResumeEdit::Phone(value),
            EditField::Linkedin => ResumeEdit::Linkedin(value),
            EditField::Address => ResumeEdit::Address(value),
            EditField::School => ResumeEdit::School(value),
            EditField::Majors => ResumeEdit::Majors(value),
            EditField::ExpectedGrad => ResumeEdit::ExpectedGrad(value),
            EditField::ExperienceCompany => ResumeEdit::ExperienceCompany {
                index: index_for("experience company")?,
                value,
            },
            EditField::ExperienceDates => ResumeEdit::ExperienceDates {
                index: index_for("experience dates")?,
                value,
            },
            EditField::ExperienceDescription => ResumeEdit::ExperienceDescription {
                index: index_for("experience description")?,
                value,
            },
            EditField::ProjectTitle => ResumeEdit::ProjectTitle {
                index: index_for("project title")?,
                value,
            },
            EditField::ProjectDescription => ResumeEdit::ProjectDescription {
                index: index_for("project description")?,
                value,
            },
            EditField::Skill => ResumeEdit::Skill {
                index: index_for("skill")?,
                value,
            },
            EditField::AddSkill => ResumeEdit::AddSkill,
            EditField::RemoveSkill => ResumeEdit::RemoveSkill {
                index: index_for("skill")?,
            },
        })
    }
}
