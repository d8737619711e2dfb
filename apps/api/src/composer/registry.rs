//! Style Variant Registry — the single seam where style variants are plugged in.

use std::sync::OnceLock;

use serde::Serialize;

use crate::composer::header::style_treatment;
use crate::composer::profile::{profile, StyleProfile, TitleFamily};
use crate::composer::sections::RenderMatrix;
use crate::composer::tokens::StyleTokens;
use crate::composer::tree::DocNode;
use crate::composer::variants::{routine_for, CompositionInput, CompositionRoutine};
use crate::models::layout::{LayoutConfig, StyleVariant};
use crate::models::resume::ResumeContent;

pub struct StyleEntry {
    pub variant: StyleVariant,
    pub profile: &'static StyleProfile,
    pub routine: CompositionRoutine,
}

/// Public description of a style, served by the style catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub two_column: bool,
    pub own_header: bool,
    pub title_family: TitleFamily,
}

impl StyleEntry {
    pub fn descriptor(&self) -> StyleDescriptor {
        StyleDescriptor {
            id: self.variant.as_str(),
            name: self.variant.display_name(),
            two_column: self.profile.two_column,
            own_header: style_treatment(self.variant).is_some(),
            title_family: self.profile.title_family,
        }
    }
}

pub struct StyleRegistry {
    entries: Vec<StyleEntry>,
    matrix: RenderMatrix,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<StyleRegistry> = OnceLock::new();

impl StyleRegistry {
    pub fn new() -> Self {
        let entries = StyleVariant::ALL
            .into_iter()
            .map(|variant| StyleEntry {
                variant,
                profile: profile(variant),
                routine: routine_for(variant),
            })
            .collect();
        Self {
            entries,
            matrix: RenderMatrix::new(),
        }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static StyleRegistry {
        GLOBAL.get_or_init(StyleRegistry::new)
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn matrix(&self) -> &RenderMatrix {
        &self.matrix
    }

    /// Entry for a known variant.
    pub fn get(&self, variant: StyleVariant) -> &StyleEntry {
        self.entries
            .iter()
            .find(|e| e.variant == variant)
            .unwrap_or(&self.entries[0])
    }

    /// Looks up a style id without falling back.
    pub fn lookup(&self, id: &str) -> Option<&StyleEntry> {
        StyleVariant::from_id(id).map(|variant| self.get(variant))
    }

    /// Resolves a style id. Unknown ids resolve to the default variant.
    pub fn resolve(&self, id: &str) -> &StyleEntry {
        self.lookup(id).unwrap_or_else(|| {
            tracing::debug!(style_id = id, fallback = StyleVariant::DEFAULT.as_str(), "unknown style id");
            self.get(StyleVariant::DEFAULT)
        })
    }

    /// Runs a resolved style's composition routine.
    pub fn compose_variant(
        &self,
        variant: StyleVariant,
        content: &ResumeContent,
        layout: &LayoutConfig,
    ) -> DocNode {
        let entry = self.get(variant);
        let tokens = StyleTokens::new(
            layout.accent(),
            layout.font_size,
            layout.spacing,
            layout.font_family,
        );
        (entry.routine)(&CompositionInput {
            style: entry.variant,
            content,
            layout,
            tokens: &tokens,
            matrix: &self.matrix,
        })
    }

    pub fn compose(&self, content: &ResumeContent, layout: &LayoutConfig, style_id: &str) -> DocNode {
        self.compose_variant(self.resolve(style_id).variant, content, layout)
    }
}
