//! Composition routines — one per style variant.
//!
//! Each routine sequences the header, then the gated sections in resolved order,
//! and decides the page arrangement (single column or narrow/main split).

use crate::composer::columns::split_columns;
use crate::composer::gate::visible_sections;
use crate::composer::header::render_header;
use crate::composer::profile::profile;
use crate::composer::sections::RenderMatrix;
use crate::composer::tokens::{palette, StyleTokens};
use crate::composer::tree::{BorderSide, Column, ColumnSide, DocNode, Style};
use crate::models::layout::{LayoutConfig, SectionType, StyleVariant};
use crate::models::resume::ResumeContent;

/// Everything a composition routine reads. Borrowed, never mutated.
pub struct CompositionInput<'a> {
    pub style: StyleVariant,
    pub content: &'a ResumeContent,
    pub layout: &'a LayoutConfig,
    pub tokens: &'a StyleTokens,
    pub matrix: &'a RenderMatrix,
}

pub type CompositionRoutine = fn(&CompositionInput) -> DocNode;

pub fn routine_for(style: StyleVariant) -> CompositionRoutine {
    match style {
        StyleVariant::ModernPro => compose_modern_pro,
        StyleVariant::Classic => compose_classic,
        StyleVariant::Creative => compose_creative,
        StyleVariant::Technical => compose_technical,
        StyleVariant::Minimal => compose_minimal,
        StyleVariant::ModernTwo => compose_modern_two,
        StyleVariant::Academic => compose_academic,
        StyleVariant::Executive => compose_executive,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared building blocks
// ────────────────────────────────────────────────────────────────────────────

fn page_style(input: &CompositionInput, padding: f32) -> Style {
    Style::new()
        .font(input.tokens.font_stack)
        .size(input.tokens.scale.body)
        .color(palette::TEXT)
        .background(palette::PAGE)
        .padding(padding, padding)
}

fn header(input: &CompositionInput) -> DocNode {
    render_header(
        &input.content.personal_info,
        input.tokens,
        input.layout.header_alignment,
        input.style,
    )
}

fn render_all(input: &CompositionInput, sections: &[SectionType]) -> Vec<DocNode> {
    sections
        .iter()
        .filter_map(|section| {
            input
                .matrix
                .render(input.style, *section, input.tokens, input.content)
        })
        .collect()
}

/// Whether this call should use the narrow/main canvas.
pub fn uses_two_columns(style: StyleVariant, layout: &LayoutConfig) -> bool {
    profile(style).two_column && layout.wants_two_columns()
}

/// Sections stacked vertically, or split into columns when the style and the
/// layout both ask for it.
fn body(
    input: &CompositionInput,
    narrow_side: ColumnSide,
    narrow_width: f32,
    narrow_style: Style,
) -> Vec<DocNode> {
    let visible = visible_sections(input.content, input.layout);
    if !uses_two_columns(input.style, input.layout) {
        return render_all(input, &visible);
    }

    let split = split_columns(&visible);
    tracing::trace!(
        style = input.style.as_str(),
        narrow = split.narrow.len(),
        main = split.main.len(),
        "two-column split"
    );
    vec![DocNode::Columns {
        style: Style::new(),
        narrow_side,
        narrow: Column {
            style: narrow_style.width(narrow_width),
            children: render_all(input, &split.narrow),
        },
        main: Column {
            style: Style::new().width(100.0 - narrow_width),
            children: render_all(input, &split.main),
        },
    }]
}

fn single_column(input: &CompositionInput) -> Vec<DocNode> {
    body(input, ColumnSide::Left, 0.0, Style::new())
}

fn document(page: Style, header: DocNode, body: Vec<DocNode>) -> DocNode {
    let mut children = Vec::with_capacity(body.len() + 1);
    children.push(header);
    children.extend(body);
    DocNode::Document {
        style: page,
        children,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Routines
// ────────────────────────────────────────────────────────────────────────────

fn compose_modern_pro(input: &CompositionInput) -> DocNode {
    document(page_style(input, 32.0), header(input), single_column(input))
}

fn compose_classic(input: &CompositionInput) -> DocNode {
    document(page_style(input, 40.0), header(input), single_column(input))
}

/// Full-bleed header band; the body is padded separately and may split with
/// an accent-edged narrow column on the right.
fn compose_creative(input: &CompositionInput) -> DocNode {
    let narrow_style = Style::new()
        .border(BorderSide::Left, 2.0, &input.tokens.accent)
        .padding(0.0, 14.0);
    let body = body(input, ColumnSide::Right, 36.0, narrow_style);
    document(
        page_style(input, 0.0),
        header(input),
        vec![DocNode::block(Style::new().padding(24.0, 28.0), body)],
    )
}

fn compose_technical(input: &CompositionInput) -> DocNode {
    document(page_style(input, 30.0), header(input), single_column(input))
}

fn compose_minimal(input: &CompositionInput) -> DocNode {
    document(page_style(input, 48.0), header(input), single_column(input))
}

fn compose_modern_two(input: &CompositionInput) -> DocNode {
    let narrow_style = Style::new().padding(0.0, 12.0);
    let body = body(input, ColumnSide::Left, 34.0, narrow_style);
    document(page_style(input, 32.0), header(input), body)
}

fn compose_academic(input: &CompositionInput) -> DocNode {
    document(page_style(input, 44.0), header(input), single_column(input))
}

/// Accent bar across the top edge of the page.
fn compose_executive(input: &CompositionInput) -> DocNode {
    let page = page_style(input, 40.0).border(BorderSide::Top, 6.0, &input.tokens.accent);
    document(page, header(input), single_column(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::sample::sample_resume;
    use crate::composer::tree::rendered_sections;
    use crate::models::layout::{FontFamily, FontSizeTier, SpacingDensity};

    fn run(style: StyleVariant, layout: &LayoutConfig) -> DocNode {
        let content = sample_resume();
        let tokens = StyleTokens::new(
            layout.accent(),
            FontSizeTier::Medium,
            SpacingDensity::Balanced,
            FontFamily::Inter,
        );
        let matrix = RenderMatrix::new();
        routine_for(style)(&CompositionInput {
            style,
            content: &content,
            layout,
            tokens: &tokens,
            matrix: &matrix,
        })
    }

    fn has_columns(node: &DocNode) -> bool {
        let mut found = false;
        node.walk(&mut |n| found |= matches!(n, DocNode::Columns { .. }));
        found
    }

    #[test]
    fn test_every_routine_opens_with_header() {
        for style in StyleVariant::ALL {
            let doc = run(style, &LayoutConfig::default());
            match doc.children().first() {
                Some(DocNode::Header { .. }) => {}
                other => panic!("{style:?} must start with a header, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_single_column_styles_ignore_column_count() {
        let layout = LayoutConfig {
            columns: 2,
            ..LayoutConfig::default()
        };
        for style in [StyleVariant::Classic, StyleVariant::Technical, StyleVariant::Executive] {
            assert!(!has_columns(&run(style, &layout)), "{style:?}");
        }
    }

    #[test]
    fn test_two_column_styles_split_only_when_asked() {
        let one = LayoutConfig::default();
        let two = LayoutConfig {
            columns: 2,
            ..LayoutConfig::default()
        };
        for style in [StyleVariant::ModernTwo, StyleVariant::Creative] {
            assert!(!has_columns(&run(style, &one)), "{style:?} split with one column");
            assert!(has_columns(&run(style, &two)), "{style:?} did not split");
        }
    }

    #[test]
    fn test_single_column_follows_resolved_order() {
        let doc = run(StyleVariant::Academic, &LayoutConfig::default());
        assert_eq!(rendered_sections(&doc), SectionType::ALL.to_vec());
    }
}
