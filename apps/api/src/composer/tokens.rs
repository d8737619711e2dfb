//! Layout Resolver — static style-token tables for spacing, type scale and fonts.
//!
//! All sizes are in points. The tables are process-wide constants; nothing here
//! allocates or reads configuration at runtime.

use serde::{Deserialize, Serialize};

use crate::models::layout::{FontFamily, FontSizeTier, SpacingDensity};

// ────────────────────────────────────────────────────────────────────────────
// Spacing
// ────────────────────────────────────────────────────────────────────────────

/// Inter-section gap for a spacing density. compact < balanced < spacious.
pub fn spacing_token(density: SpacingDensity) -> f32 {
    match density {
        SpacingDensity::Compact => 12.0,
        SpacingDensity::Balanced => 18.0,
        SpacingDensity::Spacious => 26.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Type scale
// ────────────────────────────────────────────────────────────────────────────

/// Concrete font sizes for one font-size tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    /// Name in the header.
    pub heading1: f32,
    /// Section titles.
    pub heading2: f32,
    /// Entry titles (job title, degree, project name).
    pub heading3: f32,
    pub body: f32,
    /// Dates, locations, tags.
    pub small: f32,
}

static SMALL_SCALE: TypeScale = TypeScale {
    heading1: 22.0,
    heading2: 12.5,
    heading3: 10.5,
    body: 9.5,
    small: 8.5,
};

static MEDIUM_SCALE: TypeScale = TypeScale {
    heading1: 26.0,
    heading2: 14.0,
    heading3: 11.5,
    body: 10.5,
    small: 9.0,
};

static LARGE_SCALE: TypeScale = TypeScale {
    heading1: 30.0,
    heading2: 16.0,
    heading3: 13.0,
    body: 11.5,
    small: 10.0,
};

/// Returns the type scale for a font-size tier.
pub fn type_scale(tier: FontSizeTier) -> TypeScale {
    match tier {
        FontSizeTier::Small => SMALL_SCALE,
        FontSizeTier::Medium => MEDIUM_SCALE,
        FontSizeTier::Large => LARGE_SCALE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fonts and neutral palette
// ────────────────────────────────────────────────────────────────────────────

/// CSS font stack for a font family token.
pub fn font_stack(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Inter => "Inter, 'Helvetica Neue', Arial, sans-serif",
        FontFamily::Roboto => "Roboto, 'Helvetica Neue', Arial, sans-serif",
        FontFamily::Lato => "Lato, 'Helvetica Neue', Arial, sans-serif",
        FontFamily::Georgia => "Georgia, 'Times New Roman', serif",
        FontFamily::Garamond => "'EB Garamond', Garamond, 'Times New Roman', serif",
        FontFamily::Merriweather => "Merriweather, Georgia, serif",
        FontFamily::Mono => "'JetBrains Mono', 'Fira Code', Menlo, monospace",
    }
}

/// Neutral colors shared by every style. Accent-dependent marks never use these.
pub mod palette {
    pub const TEXT: &str = "#1f2937";
    pub const MUTED: &str = "#6b7280";
    pub const ON_ACCENT: &str = "#ffffff";
    pub const PAGE: &str = "#ffffff";
}

/// The three layout-derived primitives threaded through every rendering cell.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTokens {
    pub accent: String,
    pub scale: TypeScale,
    pub gap: f32,
    pub font_stack: &'static str,
}

impl StyleTokens {
    pub fn new(
        accent: &str,
        tier: FontSizeTier,
        density: SpacingDensity,
        family: FontFamily,
    ) -> Self {
        Self {
            accent: accent.to_string(),
            scale: type_scale(tier),
            gap: spacing_token(density),
            font_stack: font_stack(family),
        }
    }

    /// Half the section gap, used between entries inside a section.
    pub fn entry_gap(&self) -> f32 {
        (self.gap / 2.0).round()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_is_strictly_increasing() {
        let compact = spacing_token(SpacingDensity::Compact);
        let balanced = spacing_token(SpacingDensity::Balanced);
        let spacious = spacing_token(SpacingDensity::Spacious);
        assert!(compact < balanced && balanced < spacious);
    }

    #[test]
    fn test_type_scale_monotonic_across_tiers() {
        let tiers = [FontSizeTier::Small, FontSizeTier::Medium, FontSizeTier::Large];
        for pair in tiers.windows(2) {
            let (lo, hi) = (type_scale(pair[0]), type_scale(pair[1]));
            assert!(lo.heading1 < hi.heading1);
            assert!(lo.heading2 < hi.heading2);
            assert!(lo.heading3 < hi.heading3);
            assert!(lo.body < hi.body);
            assert!(lo.small < hi.small);
        }
    }

    #[test]
    fn test_type_scale_internal_hierarchy() {
        for tier in [FontSizeTier::Small, FontSizeTier::Medium, FontSizeTier::Large] {
            let s = type_scale(tier);
            assert!(s.heading1 > s.heading2);
            assert!(s.heading2 > s.heading3);
            assert!(s.heading3 > s.body);
            assert!(s.body > s.small);
        }
    }

    #[test]
    fn test_default_enum_values_resolve_to_middle_tier() {
        assert_eq!(spacing_token(SpacingDensity::default()), 18.0);
        assert_eq!(type_scale(FontSizeTier::default()), MEDIUM_SCALE);
    }

    #[test]
    fn test_mono_stack_is_monospace() {
        assert!(font_stack(FontFamily::Mono).ends_with("monospace"));
    }
}
