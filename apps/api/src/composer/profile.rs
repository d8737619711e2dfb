//! Per-style formatting conventions, one static row per style variant.

use serde::Serialize;

use crate::composer::tree::TagTreatment;
use crate::models::layout::StyleVariant;

/// How section titles are decorated. Decoration follows the style family, never the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleFamily {
    /// Filled accent pill.
    Badge,
    /// Accent heading with an accent underline.
    Ruled { centered: bool },
    /// Terminal prompt glyph before the title.
    Bracket,
    /// Small tracked uppercase, no border.
    Quiet,
    /// Bold uppercase accent, no border.
    Bold,
}

/// How an entry's title, organization and dates are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout {
    /// Title left, dates right; organization on its own line.
    Split,
    /// Title, then organization and dates joined on one line.
    Stacked,
    /// "Title @ Organization", then dates and location.
    Inline,
}

pub const PROMPT_GLYPH: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleProfile {
    pub style: StyleVariant,
    pub title_family: TitleFamily,
    pub entry_layout: EntryLayout,
    pub bullet_marker: &'static str,
    pub accent_markers: bool,
    pub org_in_accent: bool,
    pub org_italic: bool,
    pub org_weight: u16,
    pub skill_tags: TagTreatment,
    pub language_tags: TagTreatment,
    /// Treatment for certifications and awards.
    pub list_tags: TagTreatment,
    pub two_column: bool,
}

static MODERN_PRO: StyleProfile = StyleProfile {
    style: StyleVariant::ModernPro,
    title_family: TitleFamily::Bold,
    entry_layout: EntryLayout::Split,
    bullet_marker: "•",
    accent_markers: false,
    org_in_accent: true,
    org_italic: false,
    org_weight: 500,
    skill_tags: TagTreatment::Pill,
    language_tags: TagTreatment::Pill,
    list_tags: TagTreatment::ListItem,
    two_column: false,
};

static CLASSIC: StyleProfile = StyleProfile {
    style: StyleVariant::Classic,
    title_family: TitleFamily::Ruled { centered: false },
    entry_layout: EntryLayout::Split,
    bullet_marker: "•",
    accent_markers: false,
    org_in_accent: false,
    org_italic: true,
    org_weight: 400,
    skill_tags: TagTreatment::ListItem,
    language_tags: TagTreatment::ListItem,
    list_tags: TagTreatment::ListItem,
    two_column: false,
};

static CREATIVE: StyleProfile = StyleProfile {
    style: StyleVariant::Creative,
    title_family: TitleFamily::Badge,
    entry_layout: EntryLayout::Stacked,
    bullet_marker: "●",
    accent_markers: true,
    org_in_accent: true,
    org_italic: false,
    org_weight: 600,
    skill_tags: TagTreatment::Pill,
    language_tags: TagTreatment::Pill,
    list_tags: TagTreatment::Pill,
    two_column: true,
};

static TECHNICAL: StyleProfile = StyleProfile {
    style: StyleVariant::Technical,
    title_family: TitleFamily::Bracket,
    entry_layout: EntryLayout::Inline,
    bullet_marker: "▸",
    accent_markers: true,
    org_in_accent: false,
    org_italic: false,
    org_weight: 400,
    skill_tags: TagTreatment::Bordered,
    language_tags: TagTreatment::Bordered,
    list_tags: TagTreatment::Bordered,
    two_column: false,
};

static MINIMAL: StyleProfile = StyleProfile {
    style: StyleVariant::Minimal,
    title_family: TitleFamily::Quiet,
    entry_layout: EntryLayout::Stacked,
    bullet_marker: "–",
    accent_markers: false,
    org_in_accent: false,
    org_italic: false,
    org_weight: 400,
    skill_tags: TagTreatment::Bordered,
    language_tags: TagTreatment::Bordered,
    list_tags: TagTreatment::Bordered,
    two_column: false,
};

static MODERN_TWO: StyleProfile = StyleProfile {
    style: StyleVariant::ModernTwo,
    title_family: TitleFamily::Bold,
    entry_layout: EntryLayout::Stacked,
    bullet_marker: "•",
    accent_markers: true,
    org_in_accent: true,
    org_italic: false,
    org_weight: 500,
    skill_tags: TagTreatment::Pill,
    language_tags: TagTreatment::Pill,
    list_tags: TagTreatment::ListItem,
    two_column: true,
};

static ACADEMIC: StyleProfile = StyleProfile {
    style: StyleVariant::Academic,
    title_family: TitleFamily::Ruled { centered: true },
    entry_layout: EntryLayout::Split,
    bullet_marker: "•",
    accent_markers: false,
    org_in_accent: false,
    org_italic: true,
    org_weight: 400,
    skill_tags: TagTreatment::ListItem,
    language_tags: TagTreatment::ListItem,
    list_tags: TagTreatment::ListItem,
    two_column: false,
};

static EXECUTIVE: StyleProfile = StyleProfile {
    style: StyleVariant::Executive,
    title_family: TitleFamily::Ruled { centered: true },
    entry_layout: EntryLayout::Split,
    bullet_marker: "■",
    accent_markers: true,
    org_in_accent: false,
    org_italic: false,
    org_weight: 600,
    skill_tags: TagTreatment::ListItem,
    language_tags: TagTreatment::ListItem,
    list_tags: TagTreatment::ListItem,
    two_column: false,
};

/// Returns the static profile for a style variant.
pub fn profile(style: StyleVariant) -> &'static StyleProfile {
    match style {
        StyleVariant::ModernPro => &MODERN_PRO,
        StyleVariant::Classic => &CLASSIC,
        StyleVariant::Creative => &CREATIVE,
        StyleVariant::Technical => &TECHNICAL,
        StyleVariant::Minimal => &MINIMAL,
        StyleVariant::ModernTwo => &MODERN_TWO,
        StyleVariant::Academic => &ACADEMIC,
        StyleVariant::Executive => &EXECUTIVE,
    }
}
