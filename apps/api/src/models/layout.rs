//! Layout configuration — presentation intent, decoupled from resume content.
//!
//! Every enumerated field deserializes leniently: an unrecognized wire value
//! falls back to the middle/default variant instead of rejecting the payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Closed vocabularies
// ────────────────────────────────────────────────────────────────────────────

/// The eight content categories a resume document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    Awards,
}

impl SectionType {
    /// All section types in default document order.
    pub const ALL: [SectionType; 8] = [
        SectionType::Summary,
        SectionType::Experience,
        SectionType::Education,
        SectionType::Skills,
        SectionType::Projects,
        SectionType::Certifications,
        SectionType::Languages,
        SectionType::Awards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Summary => "summary",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Skills => "skills",
            SectionType::Projects => "projects",
            SectionType::Certifications => "certifications",
            SectionType::Languages => "languages",
            SectionType::Awards => "awards",
        }
    }

    /// Parses a wire identifier. Unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id.trim())
    }

    /// Human-readable section title used as the heading text.
    pub fn title(&self) -> &'static str {
        match self {
            SectionType::Summary => "Professional Summary",
            SectionType::Experience => "Experience",
            SectionType::Education => "Education",
            SectionType::Skills => "Skills",
            SectionType::Projects => "Projects",
            SectionType::Certifications => "Certifications",
            SectionType::Languages => "Languages",
            SectionType::Awards => "Awards",
        }
    }

    /// Sections that belong in the narrow column of a two-column canvas.
    pub fn is_narrow(&self) -> bool {
        matches!(
            self,
            SectionType::Skills | SectionType::Languages | SectionType::Certifications
        )
    }
}

/// The eight complete visual treatments a document can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleVariant {
    ModernPro,
    Classic,
    Creative,
    Technical,
    Minimal,
    ModernTwo,
    Academic,
    Executive,
}

impl StyleVariant {
    /// All style variants. The first entry is the fallback for unknown ids.
    pub const ALL: [StyleVariant; 8] = [
        StyleVariant::ModernPro,
        StyleVariant::Classic,
        StyleVariant::Creative,
        StyleVariant::Technical,
        StyleVariant::Minimal,
        StyleVariant::ModernTwo,
        StyleVariant::Academic,
        StyleVariant::Executive,
    ];

    pub const DEFAULT: StyleVariant = StyleVariant::ModernPro;

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleVariant::ModernPro => "modern-pro",
            StyleVariant::Classic => "classic",
            StyleVariant::Creative => "creative",
            StyleVariant::Technical => "technical",
            StyleVariant::Minimal => "minimal",
            StyleVariant::ModernTwo => "modern-two",
            StyleVariant::Academic => "academic",
            StyleVariant::Executive => "executive",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(id))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StyleVariant::ModernPro => "Modern Professional",
            StyleVariant::Classic => "Classic",
            StyleVariant::Creative => "Creative",
            StyleVariant::Technical => "Technical",
            StyleVariant::Minimal => "Minimal",
            StyleVariant::ModernTwo => "Modern Two-Column",
            StyleVariant::Academic => "Academic",
            StyleVariant::Executive => "Executive",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Enumerated layout choices
// ────────────────────────────────────────────────────────────────────────────

/// Inter-section spacing density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SpacingDensity {
    Compact,
    #[default]
    Balanced,
    Spacious,
}

impl From<String> for SpacingDensity {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => SpacingDensity::Compact,
            "spacious" => SpacingDensity::Spacious,
            _ => SpacingDensity::Balanced,
        }
    }
}

/// Font-size tier feeding the type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FontSizeTier {
    Small,
    #[default]
    Medium,
    Large,
}

impl From<String> for FontSizeTier {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "small" => FontSizeTier::Small,
            "large" => FontSizeTier::Large,
            _ => FontSizeTier::Medium,
        }
    }
}

/// Generic header arrangement, used when the active style has no header of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum HeaderAlignment {
    #[default]
    Centered,
    Left,
    TwoColumn,
}

impl From<String> for HeaderAlignment {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "left-aligned" => HeaderAlignment::Left,
            "two-column" | "split" => HeaderAlignment::TwoColumn,
            _ => HeaderAlignment::Centered,
        }
    }
}

/// Font family token chosen in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    Lato,
    Georgia,
    Garamond,
    Merriweather,
    Mono,
}

impl From<String> for FontFamily {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "roboto" => FontFamily::Roboto,
            "lato" => FontFamily::Lato,
            "georgia" => FontFamily::Georgia,
            "garamond" | "eb-garamond" => FontFamily::Garamond,
            "merriweather" => FontFamily::Merriweather,
            "mono" | "monospace" | "jetbrains-mono" => FontFamily::Mono,
            _ => FontFamily::Inter,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LayoutConfig
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_ACCENT: &str = "#2563eb";

/// Presentation settings owned by the editing flow and read by the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub accent_color: String,
    pub font_family: FontFamily,
    pub spacing: SpacingDensity,
    pub header_alignment: HeaderAlignment,
    /// 2 for a two-column canvas; anything else reads as 1.
    #[serde(deserialize_with = "lenient_columns")]
    pub columns: u8,
    pub font_size: FontSizeTier,
    pub section_visibility: BTreeMap<String, bool>,
    pub section_order: Vec<String>,
}

fn lenient_columns<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let requested = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(if requested == Some(2.0) { 2 } else { 1 })
}

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, or a bare color keyword.
pub fn is_color_token(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => (1..=32).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT.to_string(),
            font_family: FontFamily::default(),
            spacing: SpacingDensity::default(),
            header_alignment: HeaderAlignment::default(),
            columns: 1,
            font_size: FontSizeTier::default(),
            section_visibility: SectionType::ALL
                .iter()
                .map(|s| (s.as_str().to_string(), true))
                .collect(),
            section_order: SectionType::ALL
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }
}

impl LayoutConfig {
    /// Accent token. Blank or malformed values are replaced by the default accent,
    /// so only a plain color ever reaches inline CSS.
    pub fn accent(&self) -> &str {
        let accent = self.accent_color.trim();
        if is_color_token(accent) {
            accent
        } else {
            if !accent.is_empty() {
                tracing::debug!(accent, "accent is not a color token; using default");
            }
            DEFAULT_ACCENT
        }
    }

    /// Whether the user has enabled a section. Sections absent from the map count as enabled.
    pub fn is_enabled(&self, section: SectionType) -> bool {
        self.section_visibility
            .get(section.as_str())
            .copied()
            .unwrap_or(true)
    }

    pub fn wants_two_columns(&self) -> bool {
        self.columns == 2
    }

    /// Resolves the stored order into known section types.
    ///
    /// Unknown ids are skipped, a repeated id keeps only its first position, and
    /// known sections missing from the list are appended in default order.
    pub fn resolved_order(&self) -> Vec<SectionType> {
        let mut order: Vec<SectionType> = Vec::with_capacity(SectionType::ALL.len());
        for id in &self.section_order {
            if let Some(section) = SectionType::from_id(id) {
                if !order.contains(&section) {
                    order.push(section);
                }
            }
        }
        for section in SectionType::ALL {
            if !order.contains(&section) {
                order.push(section);
            }
        }
        order
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_enum_values_fall_back_to_middle() {
        let layout: LayoutConfig = serde_json::from_value(json!({
            "spacing": "cramped",
            "fontSize": "huge",
            "headerAlignment": "diagonal",
            "fontFamily": "comic-sans"
        }))
        .expect("lenient layout must deserialize");

        assert_eq!(layout.spacing, SpacingDensity::Balanced);
        assert_eq!(layout.font_size, FontSizeTier::Medium);
        assert_eq!(layout.header_alignment, HeaderAlignment::Centered);
        assert_eq!(layout.font_family, FontFamily::Inter);
    }

    #[test]
    fn test_known_enum_values_parse() {
        let layout: LayoutConfig = serde_json::from_value(json!({
            "spacing": "compact",
            "fontSize": "large",
            "headerAlignment": "two-column",
            "columns": 2
        }))
        .unwrap();

        assert_eq!(layout.spacing, SpacingDensity::Compact);
        assert_eq!(layout.font_size, FontSizeTier::Large);
        assert_eq!(layout.header_alignment, HeaderAlignment::TwoColumn);
        assert!(layout.wants_two_columns());
    }

    #[test]
    fn test_resolved_order_skips_unknown_and_duplicates() {
        let layout = LayoutConfig {
            section_order: vec![
                "skills".into(),
                "photos".into(),
                "summary".into(),
                "skills".into(),
            ],
            ..LayoutConfig::default()
        };
        let order = layout.resolved_order();

        assert_eq!(order.len(), 8);
        assert_eq!(order[0], SectionType::Skills);
        assert_eq!(order[1], SectionType::Summary);
        assert_eq!(order[2], SectionType::Experience);
    }

    #[test]
    fn test_missing_visibility_entry_counts_as_enabled() {
        let layout = LayoutConfig {
            section_visibility: BTreeMap::from([("awards".to_string(), false)]),
            ..LayoutConfig::default()
        };
        assert!(layout.is_enabled(SectionType::Summary));
        assert!(!layout.is_enabled(SectionType::Awards));
    }

    #[test]
    fn test_blank_accent_uses_default() {
        let layout = LayoutConfig {
            accent_color: "  ".into(),
            ..LayoutConfig::default()
        };
        assert_eq!(layout.accent(), DEFAULT_ACCENT);
    }

    #[test]
    fn test_malformed_accent_uses_default() {
        for bad in [
            "red;background-image:url(http://169.254.169.254/x)",
            "#12345",
            "#ggg",
            "rgb(1,2,3)",
            "blue }",
        ] {
            let layout = LayoutConfig {
                accent_color: bad.into(),
                ..LayoutConfig::default()
            };
            assert_eq!(layout.accent(), DEFAULT_ACCENT, "{bad}");
        }
        for good in ["#0f766e", "#ABC", " teal "] {
            let layout = LayoutConfig {
                accent_color: good.into(),
                ..LayoutConfig::default()
            };
            assert_eq!(layout.accent(), good.trim());
        }
    }

    #[test]
    fn test_columns_deserialize_leniently() {
        let columns = |raw: Value| {
            serde_json::from_value::<LayoutConfig>(json!({ "columns": raw }))
                .expect("columns never rejects the payload")
                .columns
        };
        assert_eq!(columns(json!(2)), 2);
        assert_eq!(columns(json!("2")), 2);
        assert_eq!(columns(json!(2.0)), 2);
        assert_eq!(columns(json!(300)), 1);
        assert_eq!(columns(json!(-1)), 1);
        assert_eq!(columns(json!("three")), 1);
        assert_eq!(columns(Value::Null), 1);

        let missing: LayoutConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.columns, 1);
    }

    #[test]
    fn test_style_ids_round_trip_through_from_id() {
        for style in StyleVariant::ALL {
            assert_eq!(StyleVariant::from_id(style.as_str()), Some(style));
        }
        assert_eq!(StyleVariant::from_id("brutalist"), None);
    }
}
