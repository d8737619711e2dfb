//! Section Visibility Gate — decides whether a section renders at all.
//!
//! A section renders iff the user enabled it AND it has something to show.
//! Total over every known section; unknown identifiers never render.

use crate::models::layout::{LayoutConfig, SectionType};
use crate::models::resume::{any_set, is_set, ResumeContent};

/// Content-presence predicate, independent of user visibility.
pub fn has_content(section: SectionType, content: &ResumeContent) -> bool {
    match section {
        SectionType::Summary => is_set(&content.summary),
        SectionType::Experience => content.experience.iter().any(|e| e.has_content()),
        SectionType::Education => content.education.iter().any(|e| e.has_content()),
        SectionType::Skills => any_set(&content.skills.technical) || any_set(&content.skills.soft),
        SectionType::Projects => content.projects.iter().any(|p| p.has_content()),
        SectionType::Certifications => content.certifications.iter().any(|c| !c.label().is_empty()),
        SectionType::Languages => content.languages.iter().any(|l| !l.label().is_empty()),
        SectionType::Awards => content.awards.iter().any(|a| !a.label().is_empty()),
    }
}

/// Returns true when `section` is both enabled in `layout` and populated in `content`.
pub fn should_render(section: SectionType, content: &ResumeContent, layout: &LayoutConfig) -> bool {
    layout.is_enabled(section) && has_content(section, content)
}

/// String-keyed form of [`should_render`]. Unrecognized identifiers return false.
#[allow(dead_code)]
pub fn should_render_id(id: &str, content: &ResumeContent, layout: &LayoutConfig) -> bool {
    SectionType::from_id(id)
        .map(|section| should_render(section, content, layout))
        .unwrap_or(false)
}

/// Sections to render, in the layout's resolved order, filtered through the gate.
pub fn visible_sections(content: &ResumeContent, layout: &LayoutConfig) -> Vec<SectionType> {
    layout
        .resolved_order()
        .into_iter()
        .filter(|section| {
            let visible = should_render(*section, content, layout);
            if !visible {
                tracing::trace!(section = section.as_str(), "section gated out");
            }
            visible
        })
        .collect()
}
