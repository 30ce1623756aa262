//! The freeform builder: section list editing plus inline resume edits.

pub mod edits;
pub mod handlers;
pub mod sections;

use serde::Deserialize;

use crate::customize::sections::{
    FontSize, FontWeight, SectionLayout, SectionList, SectionType, Spacing, StyleChange,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionAction {
    Add,
    Remove,
    Reorder,
    Select,
    Layout,
    Style,
    Toggle,
}

/// One submission from the section panel.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionForm {
    pub action: SectionAction,
    pub id: Option<String>,
    pub target: Option<String>,
    pub kind: Option<SectionType>,
    pub layout: Option<SectionLayout>,
    pub font_size: Option<FontSize>,
    pub font_weight: Option<FontWeight>,
    pub spacing: Option<Spacing>,
}

/// Applies `form` to `list`. Returns false when nothing changed.
pub fn apply_section_form(list: &mut SectionList, form: SectionForm) -> bool {
    let id = form.id.as_deref().unwrap_or_default();
    match form.action {
        SectionAction::Add => form.kind.and_then(|kind| list.add(kind)).is_some(),
        SectionAction::Remove => list.remove(id),
        SectionAction::Reorder => form
            .target
            .as_deref()
            .is_some_and(|target| list.reorder(id, target)),
        SectionAction::Select => list.select(id),
        SectionAction::Layout => form.layout.is_some_and(|layout| list.set_layout(id, layout)),
        SectionAction::Style => {
            let changes = [
                form.font_size.map(StyleChange::FontSize),
                form.font_weight.map(StyleChange::FontWeight),
                form.spacing.map(StyleChange::Spacing),
            ];
            changes
                .into_iter()
                .flatten()
                .fold(false, |changed, change| list.set_style(id, change) || changed)
        }
        SectionAction::Toggle => list.toggle_visible(id),
    }
}
