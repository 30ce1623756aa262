//! The freeform section list behind the custom template.
//!
//! The list serializes as a plain JSON array (the `customSections` value);
//! the current selection is editor state and is not part of the wire format.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl SectionType {
    pub const ALL: [SectionType; 7] = [
        SectionType::Header,
        SectionType::About,
        SectionType::Experience,
        SectionType::Projects,
        SectionType::Skills,
        SectionType::Education,
        SectionType::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::About => "about",
            SectionType::Experience => "experience",
            SectionType::Projects => "projects",
            SectionType::Skills => "skills",
            SectionType::Education => "education",
            SectionType::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Header => "Header",
            SectionType::About => "About",
            SectionType::Experience => "Experience",
            SectionType::Projects => "Projects",
            SectionType::Skills => "Skills",
            SectionType::Education => "Education",
            SectionType::Contact => "Contact",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SectionType::Header => "Name and title section",
            SectionType::About => "Professional summary",
            SectionType::Experience => "Work history",
            SectionType::Projects => "Portfolio projects",
            SectionType::Skills => "Technical skills",
            SectionType::Education => "Academic background",
            SectionType::Contact => "Contact information",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLayout {
    #[default]
    Default,
    Centered,
    Split,
    Cards,
}

impl SectionLayout {
    pub const ALL: [SectionLayout; 4] = [
        SectionLayout::Default,
        SectionLayout::Centered,
        SectionLayout::Split,
        SectionLayout::Cards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLayout::Default => "default",
            SectionLayout::Centered => "centered",
            SectionLayout::Split => "split",
            SectionLayout::Cards => "cards",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Spacious,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
}

/// One style property change from the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    FontSize(FontSize),
    FontWeight(FontWeight),
    Spacing(Spacing),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    #[serde(default)]
    pub layout: SectionLayout,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<SectionStyle>,
}

fn visible_by_default() -> bool {
    true
}

impl Section {
    fn new(id: impl Into<String>, kind: SectionType, layout: SectionLayout) -> Self {
        Self {
            id: id.into(),
            kind,
            layout,
            visible: true,
            style: None,
        }
    }

    pub fn style_or_default(&self) -> SectionStyle {
        self.style.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Section>", into = "Vec<Section>")]
pub struct SectionList {
    sections: Vec<Section>,
    selected: Option<String>,
    /// Highest numeric id ever handed out, removed sections included.
    last_id: u64,
}

impl Default for SectionList {
    /// The seven-section starting layout.
    fn default() -> Self {
        use SectionLayout as L;
        use SectionType as T;
        let sections = [
            (T::Header, L::Centered),
            (T::About, L::Default),
            (T::Experience, L::Default),
            (T::Projects, L::Cards),
            (T::Skills, L::Default),
            (T::Education, L::Default),
            (T::Contact, L::Split),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (kind, layout))| Section::new((i + 1).to_string(), kind, layout))
        .collect();
        Self {
            sections,
            selected: None,
            last_id: 7,
        }
    }
}

impl From<Vec<Section>> for SectionList {
    fn from(sections: Vec<Section>) -> Self {
        let last_id = sections
            .iter()
            .filter_map(|s| s.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            sections,
            selected: None,
            last_id,
        }
    }
}

impl From<SectionList> for Vec<Section> {
    fn from(list: SectionList) -> Self {
        list.sections
    }
}

impl SectionList {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn visible(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.visible)
    }

    pub fn contains(&self, kind: SectionType) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    /// Section types that can still be added.
    pub fn available(&self) -> Vec<SectionType> {
        SectionType::ALL
            .into_iter()
            .filter(|kind| !self.contains(*kind))
            .collect()
    }

    pub fn selected(&self) -> Option<&Section> {
        let id = self.selected.as_deref()?;
        self.sections.iter().find(|s| s.id == id)
    }

    /// Appends a section of `kind` unless one is already present.
    /// Returns the new section's id.
    pub fn add(&mut self, kind: SectionType) -> Option<String> {
        if self.contains(kind) {
            return None;
        }
        let id = self.next_id();
        self.sections
            .push(Section::new(id.clone(), kind, SectionLayout::Default));
        Some(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        let removed = self.sections.len() != before;
        if removed && self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Moves `source` to the position currently held by `target`.
    pub fn reorder(&mut self, source: &str, target: &str) -> bool {
        if source == target {
            return false;
        }
        let from = self.position(source);
        let to = self.position(target);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        let moved = self.sections.remove(from);
        self.sections.insert(to, moved);
        true
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    pub fn set_layout(&mut self, id: &str, layout: SectionLayout) -> bool {
        self.with_section(id, |s| s.layout = layout)
    }

    pub fn set_style(&mut self, id: &str, change: StyleChange) -> bool {
        self.with_section(id, |s| {
            let mut style = s.style_or_default();
            match change {
                StyleChange::FontSize(v) => style.font_size = Some(v),
                StyleChange::FontWeight(v) => style.font_weight = Some(v),
                StyleChange::Spacing(v) => style.spacing = Some(v),
            }
            s.style = Some(style);
        })
    }

    pub fn toggle_visible(&mut self, id: &str) -> bool {
        self.with_section(id, |s| s.visible = !s.visible)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    fn with_section(&mut self, id: &str, f: impl FnOnce(&mut Section)) -> bool {
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                f(section);
                true
            }
            None => false,
        }
    }

    fn next_id(&mut self) -> String {
        self.last_id += 1;
        self.last_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(list: &SectionList) -> Vec<SectionType> {
        list.sections().iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_default_layout() {
        let list = SectionList::default();
        assert_eq!(kinds(&list), SectionType::ALL.to_vec());
        let ids: Vec<&str> = list.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7"]);
        assert_eq!(list.sections()[0].layout, SectionLayout::Centered);
        assert_eq!(list.sections()[3].layout, SectionLayout::Cards);
        assert_eq!(list.sections()[6].layout, SectionLayout::Split);
        assert!(list.available().is_empty());
    }

    #[test]
    fn test_add_only_missing_types() {
        let mut list = SectionList::default();
        assert_eq!(list.add(SectionType::Skills), None);
        assert!(list.remove("5"));
        assert_eq!(list.available(), vec![SectionType::Skills]);

        let id = list.add(SectionType::Skills).unwrap();
        assert_eq!(id, "8");
        assert_eq!(list.sections().last().unwrap().kind, SectionType::Skills);
        assert_eq!(list.sections().last().unwrap().layout, SectionLayout::Default);
        assert_eq!(list.sections().len(), 7);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut list = SectionList::default();
        assert!(list.remove("7"));
        assert_eq!(list.add(SectionType::Contact).as_deref(), Some("8"));
        assert!(list.remove("8"));
        assert_eq!(list.add(SectionType::Contact).as_deref(), Some("9"));

        let mut restored: SectionList =
            serde_json::from_value(serde_json::to_value(&list).unwrap()).unwrap();
        assert!(restored.remove("2"));
        assert_eq!(restored.add(SectionType::About).as_deref(), Some("10"));
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut list = SectionList::default();
        assert!(list.select("3"));
        assert!(list.remove("2"));
        assert_eq!(list.selected().map(|s| s.id.as_str()), Some("3"));
        assert!(list.remove("3"));
        assert!(list.selected().is_none());
        assert!(!list.remove("3"));
    }

    #[test]
    fn test_reorder_moves_source_to_target_slot() {
        let mut list = SectionList::default();
        assert!(list.reorder("6", "2"));
        let ids: Vec<&str> = list.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "6", "2", "3", "4", "5", "7"]);

        assert!(list.reorder("1", "7"));
        let ids: Vec<&str> = list.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["6", "2", "3", "4", "5", "7", "1"]);
    }

    #[test]
    fn test_reorder_ignores_unknown_and_self() {
        let mut list = SectionList::default();
        let before = list.clone();
        assert!(!list.reorder("1", "1"));
        assert!(!list.reorder("1", "99"));
        assert!(!list.reorder("99", "1"));
        assert_eq!(list, before);
    }

    #[test]
    fn test_layout_style_visibility() {
        let mut list = SectionList::default();
        assert!(list.set_layout("2", SectionLayout::Cards));
        assert!(list.set_style("2", StyleChange::FontSize(FontSize::Large)));
        assert!(list.set_style("2", StyleChange::Spacing(Spacing::Compact)));
        assert!(list.toggle_visible("7"));
        assert!(!list.set_layout("42", SectionLayout::Split));

        let about = &list.sections()[1];
        assert_eq!(about.layout, SectionLayout::Cards);
        let style = about.style.unwrap();
        assert_eq!(style.font_size, Some(FontSize::Large));
        assert_eq!(style.spacing, Some(Spacing::Compact));
        assert_eq!(style.font_weight, None);
        assert_eq!(list.visible().count(), 6);
    }

    #[test]
    fn test_wire_format_is_a_plain_array() {
        let mut list = SectionList::default();
        list.set_style("1", StyleChange::FontWeight(FontWeight::Bold));
        list.select("1");
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value[0]["type"], "header");
        assert_eq!(value[0]["layout"], "centered");
        assert_eq!(value[0]["style"]["fontWeight"], "bold");
        assert!(value[1].get("style").is_none());

        let back: SectionList = serde_json::from_value(value).unwrap();
        assert_eq!(back.sections(), list.sections());
        assert!(back.selected().is_none());
    }
}
