//! Document Composer — entry point shared by live preview and export.

use serde::Serialize;

use crate::composer::columns::{split_columns, ColumnSplit};
use crate::composer::gate::visible_sections;
use crate::composer::registry::StyleRegistry;
use crate::composer::tree::{rendered_sections, DocNode};
use crate::composer::variants::uses_two_columns;
use crate::models::layout::{LayoutConfig, SectionType, StyleVariant};
use crate::models::resume::ResumeContent;

/// Composes a full document with the process-wide registry.
///
/// Pure: identical inputs always yield identical trees, and the inputs are only borrowed.
pub fn compose(content: &ResumeContent, layout: &LayoutConfig, style_id: &str) -> DocNode {
    StyleRegistry::global().compose(content, layout, style_id)
}

/// A composed document plus the facts a preview pane shows alongside it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// The style actually used, after fallback.
    pub style: StyleVariant,
    pub fell_back: bool,
    /// Rendered sections in visual order.
    pub sections: Vec<SectionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<ColumnSplit>,
    pub document: DocNode,
}

pub fn compose_detailed(
    registry: &StyleRegistry,
    content: &ResumeContent,
    layout: &LayoutConfig,
    style_id: &str,
) -> Composition {
    let entry = registry.resolve(style_id);
    let style = entry.variant;
    let document = registry.compose_variant(style, content, layout);
    let columns = uses_two_columns(style, layout)
        .then(|| split_columns(&visible_sections(content, layout)));

    Composition {
        style,
        fell_back: StyleVariant::from_id(style_id).is_none(),
        sections: rendered_sections(&document),
        columns,
        document,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use super::*;
    use crate::composer::gate::should_render;
    use crate::composer::profile::profile;
    use crate::composer::sample::sample_resume;
    use crate::composer::tree::find_section;
    use crate::models::resume::{ExperienceEntry, LanguageEntry, Skills};

    fn count_blocks(doc: &DocNode, wanted: SectionType) -> usize {
        rendered_sections(doc).iter().filter(|s| **s == wanted).count()
    }

    fn two_columns() -> LayoutConfig {
        LayoutConfig {
            columns: 2,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_determinism_across_all_styles() {
        let content = sample_resume();
        let layout = two_columns();
        for style in StyleVariant::ALL {
            let a = compose(&content, &layout, style.as_str());
            let b = compose(&content, &layout, style.as_str());
            assert_eq!(a, b, "{style:?} is not deterministic");
        }
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let content = sample_resume();
        let layout = two_columns();
        let (content_before, layout_before) = (content.clone(), layout.clone());
        let _ = compose(&content, &layout, "creative");
        assert_eq!(content, content_before);
        assert_eq!(layout, layout_before);
    }

    #[test]
    fn test_gate_coverage_for_every_style_and_section() {
        let full = sample_resume();
        for style in StyleVariant::ALL {
            for hidden in SectionType::ALL {
                let layout = LayoutConfig {
                    section_visibility: BTreeMap::from([(hidden.as_str().to_string(), false)]),
                    ..two_columns()
                };
                let doc = compose(&full, &layout, style.as_str());
                for section in SectionType::ALL {
                    let expected = usize::from(should_render(section, &full, &layout));
                    assert_eq!(
                        count_blocks(&doc, section),
                        expected,
                        "{style:?} × {section:?} with {hidden:?} hidden"
                    );
                }
            }
        }
    }

    #[test]
    fn test_order_preserved_in_single_column() {
        let content = sample_resume();
        let order = [
            "awards",
            "skills",
            "education",
            "summary",
            "projects",
            "languages",
            "experience",
            "certifications",
        ];
        let layout = LayoutConfig {
            section_order: order.iter().map(|s| s.to_string()).collect(),
            ..LayoutConfig::default()
        };
        let expected: Vec<_> = order.iter().filter_map(|s| SectionType::from_id(s)).collect();
        for style in StyleVariant::ALL {
            let doc = compose(&content, &layout, style.as_str());
            assert_eq!(rendered_sections(&doc), expected, "{style:?}");
        }
    }

    #[test]
    fn test_column_split_neither_drops_nor_duplicates() {
        let content = sample_resume();
        for style in StyleVariant::ALL.into_iter().filter(|s| profile(*s).two_column) {
            let single = compose(&content, &LayoutConfig::default(), style.as_str());
            let split = compose(&content, &two_columns(), style.as_str());

            let mut a = rendered_sections(&single);
            let mut b = rendered_sections(&split);
            a.sort();
            b.sort();
            assert_eq!(a, b, "{style:?}");
        }
    }

    #[test]
    fn test_unknown_style_matches_default() {
        let content = sample_resume();
        let layout = LayoutConfig::default();
        assert_eq!(
            compose(&content, &layout, "holographic"),
            compose(&content, &layout, "modern-pro")
        );
    }

    #[test]
    fn test_compose_detailed_reports_fallback() {
        let registry = StyleRegistry::new();
        let result = compose_detailed(&registry, &sample_resume(), &LayoutConfig::default(), "nope");
        assert!(result.fell_back);
        assert_eq!(result.style, StyleVariant::ModernPro);
        assert!(result.columns.is_none());
    }

    // Scenario: only the summary is filled.
    #[test]
    fn test_summary_only_content() {
        let content = ResumeContent {
            summary: "Generalist engineer.".into(),
            ..Default::default()
        };
        for style in StyleVariant::ALL {
            let doc = compose(&content, &LayoutConfig::default(), style.as_str());
            assert_eq!(rendered_sections(&doc), vec![SectionType::Summary], "{style:?}");
        }
    }

    // Scenario: technical style, one entry without bullets, one with three.
    #[test]
    fn test_technical_bullets() {
        let content = ResumeContent {
            experience: vec![
                ExperienceEntry {
                    company: "Initech".into(),
                    title: "Developer".into(),
                    start_date: "2018".into(),
                    end_date: "2019".into(),
                    bullets: vec![],
                    ..Default::default()
                },
                ExperienceEntry {
                    company: "Globex".into(),
                    title: "Lead".into(),
                    start_date: "2019".into(),
                    current: true,
                    bullets: vec!["One".into(), "Two".into(), "Three".into()],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let layout = LayoutConfig {
            accent_color: "#16a34a".into(),
            ..LayoutConfig::default()
        };
        let doc = compose(&content, &layout, "technical");
        let section = find_section(&doc, SectionType::Experience).unwrap();

        let entries: Vec<&DocNode> = section
            .children()
            .into_iter()
            .filter(|n| matches!(n, DocNode::Block { .. }))
            .collect();
        assert_eq!(entries.len(), 2);

        let lists_in = |entry: &DocNode| {
            let mut lists = Vec::new();
            entry.walk(&mut |n| {
                if let DocNode::Bullets {
                    marker,
                    marker_style,
                    items,
                    ..
                } = n
                {
                    lists.push((marker.clone(), marker_style.color.clone(), items.len()));
                }
            });
            lists
        };

        assert!(lists_in(entries[0]).is_empty());
        assert_eq!(entries[0].plain_text(), vec!["Developer @ Initech", "2018 – 2019"]);

        let lists = lists_in(entries[1]);
        assert_eq!(lists.len(), 1);
        let (marker, color, count) = &lists[0];
        assert_eq!(marker, profile(StyleVariant::Technical).bullet_marker);
        assert_eq!(color.as_deref(), Some("#16a34a"));
        assert_eq!(*count, 3);
    }

    // Scenario: skills first in order but hidden.
    #[test]
    fn test_hidden_first_section_is_skipped() {
        let content = sample_resume();
        let mut order: Vec<String> = vec!["skills".into(), "summary".into(), "experience".into()];
        order.extend(
            ["education", "projects", "certifications", "languages", "awards"]
                .iter()
                .map(|s| s.to_string()),
        );
        let layout = LayoutConfig {
            section_order: order,
            section_visibility: BTreeMap::from([("skills".to_string(), false)]),
            ..LayoutConfig::default()
        };
        let doc = compose(&content, &layout, "classic");
        let sections = rendered_sections(&doc);
        assert_eq!(sections.first(), Some(&SectionType::Summary));
        assert!(!sections.contains(&SectionType::Skills));
    }

    // Scenario: modern-two with two columns.
    #[test]
    fn test_modern_two_split() {
        let content = ResumeContent {
            summary: "Summary".into(),
            experience: vec![ExperienceEntry {
                company: "Acme".into(),
                ..Default::default()
            }],
            skills: Skills {
                technical: vec!["Rust".into()],
                soft: vec![],
            },
            languages: vec![LanguageEntry {
                language: "German".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let registry = StyleRegistry::new();
        let result = compose_detailed(&registry, &content, &two_columns(), "modern-two");
        let columns = result.columns.expect("modern-two with 2 columns must split");
        assert_eq!(columns.narrow, vec![SectionType::Skills, SectionType::Languages]);
        assert_eq!(columns.main, vec![SectionType::Summary, SectionType::Experience]);

        match result.document.children().get(1) {
            Some(DocNode::Columns { narrow, main, .. }) => {
                let narrow_ids: Vec<_> = narrow
                    .children
                    .iter()
                    .flat_map(rendered_sections)
                    .collect();
                let main_ids: Vec<_> = main.children.iter().flat_map(rendered_sections).collect();
                assert_eq!(narrow_ids, columns.narrow);
                assert_eq!(main_ids, columns.main);
            }
            other => panic!("expected columns after the header, got {other:?}"),
        }
    }

    // Scenario: changing the accent rebinds every accent-bearing attribute.
    #[test]
    fn test_accent_change_rebinds_everything() {
        let content = sample_resume();
        let old = "#ff0000";
        let new = "#00aa88";
        for style in StyleVariant::ALL {
            let with = |accent: &str| LayoutConfig {
                accent_color: accent.to_string(),
                ..two_columns()
            };
            let before = compose(&content, &with(old), style.as_str());
            let after = compose(&content, &with(new), style.as_str());

            assert!(before.colors().contains(&old), "{style:?} never used the accent");
            assert!(!after.colors().contains(&old), "{style:?} kept the old accent");
            assert_eq!(
                before.colors().iter().filter(|c| **c == old).count(),
                after.colors().iter().filter(|c| **c == new).count(),
                "{style:?} accent usage changed shape"
            );
        }
    }

    fn section_id() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(SectionType::ALL.iter().map(|s| s.as_str().to_string()).collect::<Vec<_>>()),
            "[a-z]{3,8}",
        ]
    }

    fn content_strategy() -> impl Strategy<Value = ResumeContent> {
        (
            "[A-Za-z ]{0,20}",
            prop::collection::vec(("[A-Za-z ]{0,10}", "[A-Za-z ]{0,10}"), 0..3),
            prop::collection::vec("[A-Za-z]{0,8}", 0..4),
            prop::collection::vec("[A-Za-z]{0,8}", 0..3),
        )
            .prop_map(|(summary, jobs, technical, langs)| ResumeContent {
                summary,
                experience: jobs
                    .into_iter()
                    .map(|(company, title)| ExperienceEntry {
                        company,
                        title,
                        bullets: vec!["Did a thing".into(), String::new()],
                        ..Default::default()
                    })
                    .collect(),
                skills: Skills {
                    technical,
                    soft: vec![],
                },
                languages: langs
                    .into_iter()
                    .map(|language| LanguageEntry {
                        language,
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            })
    }

    proptest! {
        #[test]
        fn prop_compose_is_deterministic(
            content in content_strategy(),
            style in prop::sample::select(StyleVariant::ALL.to_vec()),
            columns in 1u8..=2,
        ) {
            let layout = LayoutConfig { columns, ..LayoutConfig::default() };
            prop_assert_eq!(
                compose(&content, &layout, style.as_str()),
                compose(&content, &layout, style.as_str())
            );
        }

        #[test]
        fn prop_rendered_order_matches_gated_order(
            content in content_strategy(),
            order in prop::collection::vec(section_id(), 0..12),
            style in prop::sample::select(StyleVariant::ALL.to_vec()),
        ) {
            let layout = LayoutConfig { section_order: order, ..LayoutConfig::default() };
            let expected: Vec<SectionType> = layout
                .resolved_order()
                .into_iter()
                .filter(|s| should_render(*s, &content, &layout))
                .collect();
            let doc = compose(&content, &layout, style.as_str());
            prop_assert_eq!(rendered_sections(&doc), expected);
        }
    }
}
