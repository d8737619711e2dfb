//! Header Composer — the identity block (name, headline, contact line).
//!
//! Dispatch is two-keyed: a style with its own header treatment wins, otherwise
//! the layout's header alignment picks one of the generic treatments. Every
//! treatment is a row in a declarative table consumed by a single renderer.

use crate::composer::tokens::{palette, StyleTokens};
use crate::composer::tree::{BorderSide, DocNode, Style, TextAlign};
use crate::models::layout::{HeaderAlignment, StyleVariant};
use crate::models::resume::{is_set, PersonalInfo};

pub const NAME_PLACEHOLDER: &str = "Your Name";

// ────────────────────────────────────────────────────────────────────────────
// Treatment table
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderFrame {
    Plain,
    /// Accent rule under the block.
    Rule { width: f32 },
    /// Accent bar along the left edge.
    Bar { width: f32 },
    /// Block filled with the accent color, text in the on-accent neutral.
    Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    Centered,
    Left,
    /// Name and headline on the left, contact fields stacked on the right.
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderTreatment {
    pub frame: HeaderFrame,
    pub layout: HeaderLayout,
    pub name_weight: u16,
    pub name_uppercase: bool,
    pub name_tracking: Option<f32>,
    pub name_in_accent: bool,
    pub headline_in_accent: bool,
    pub separator: &'static str,
}

const GENERIC_CENTERED: HeaderTreatment = HeaderTreatment {
    frame: HeaderFrame::Plain,
    layout: HeaderLayout::Centered,
    name_weight: 700,
    name_uppercase: false,
    name_tracking: None,
    name_in_accent: true,
    headline_in_accent: false,
    separator: " • ",
};

const GENERIC_LEFT: HeaderTreatment = HeaderTreatment {
    layout: HeaderLayout::Left,
    ..GENERIC_CENTERED
};

const GENERIC_SPLIT: HeaderTreatment = HeaderTreatment {
    layout: HeaderLayout::Split,
    ..GENERIC_CENTERED
};

/// Header treatment owned by a style, if it defines one.
pub fn style_treatment(style: StyleVariant) -> Option<HeaderTreatment> {
    match style {
        StyleVariant::Classic => Some(HeaderTreatment {
            frame: HeaderFrame::Rule { width: 2.0 },
            layout: HeaderLayout::Centered,
            name_weight: 700,
            name_uppercase: true,
            name_tracking: Some(0.06),
            name_in_accent: false,
            headline_in_accent: true,
            separator: " | ",
        }),
        StyleVariant::Creative => Some(HeaderTreatment {
            frame: HeaderFrame::Band,
            layout: HeaderLayout::Left,
            name_weight: 800,
            name_uppercase: false,
            name_tracking: None,
            name_in_accent: false,
            headline_in_accent: false,
            separator: " • ",
        }),
        StyleVariant::Technical => Some(HeaderTreatment {
            frame: HeaderFrame::Bar { width: 4.0 },
            layout: HeaderLayout::Left,
            name_weight: 700,
            name_uppercase: false,
            name_tracking: None,
            name_in_accent: false,
            headline_in_accent: true,
            separator: " // ",
        }),
        StyleVariant::Academic => Some(HeaderTreatment {
            frame: HeaderFrame::Rule { width: 1.0 },
            layout: HeaderLayout::Centered,
            name_weight: 600,
            name_uppercase: false,
            name_tracking: None,
            name_in_accent: false,
            headline_in_accent: false,
            separator: " · ",
        }),
        StyleVariant::Executive => Some(HeaderTreatment {
            frame: HeaderFrame::Rule { width: 3.0 },
            layout: HeaderLayout::Centered,
            name_weight: 700,
            name_uppercase: true,
            name_tracking: Some(0.12),
            name_in_accent: true,
            headline_in_accent: false,
            separator: " | ",
        }),
        StyleVariant::ModernPro | StyleVariant::ModernTwo | StyleVariant::Minimal => None,
    }
}

/// Generic treatment selected by the layout's header alignment.
pub fn generic_treatment(alignment: HeaderAlignment) -> HeaderTreatment {
    match alignment {
        HeaderAlignment::Centered => GENERIC_CENTERED,
        HeaderAlignment::Left => GENERIC_LEFT,
        HeaderAlignment::TwoColumn => GENERIC_SPLIT,
    }
}

pub fn resolve_treatment(style: StyleVariant, alignment: HeaderAlignment) -> HeaderTreatment {
    style_treatment(style).unwrap_or_else(|| generic_treatment(alignment))
}

// ────────────────────────────────────────────────────────────────────────────
// Contact line
// ────────────────────────────────────────────────────────────────────────────

/// Cleans a contact field: trims whitespace and whole separator tokens left at
/// the edges. Separator characters inside a value (URL slashes) are kept.
fn clean_field<'a>(field: &'a str, separator: &str) -> &'a str {
    let token = separator.trim();
    let mut field = field.trim();
    if token.is_empty() {
        return field;
    }
    while let Some(rest) = field
        .strip_prefix(token)
        .or_else(|| field.strip_suffix(token))
    {
        field = rest.trim();
    }
    field
}

/// Present contact fields, cleaned, in display order.
pub fn contact_parts<'a>(info: &'a PersonalInfo, separator: &str) -> Vec<&'a str> {
    info.contact_fields()
        .into_iter()
        .map(|f| clean_field(f, separator))
        .filter(|f| !f.is_empty())
        .collect()
}

/// Joins the present contact fields. A separator only ever sits between two fields.
pub fn contact_line(info: &PersonalInfo, separator: &str) -> Option<String> {
    let parts = contact_parts(info, separator);
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(separator))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

/// Renders the identity block for `style`, falling back to `alignment` when the
/// style has no header of its own.
pub fn render_header(
    info: &PersonalInfo,
    tokens: &StyleTokens,
    alignment: HeaderAlignment,
    style: StyleVariant,
) -> DocNode {
    let treatment = resolve_treatment(style, alignment);
    render_with(info, tokens, &treatment)
}

pub fn render_with(info: &PersonalInfo, tokens: &StyleTokens, treatment: &HeaderTreatment) -> DocNode {
    let accent = tokens.accent.as_str();
    let on_band = matches!(treatment.frame, HeaderFrame::Band);
    let text_color = if on_band { palette::ON_ACCENT } else { palette::TEXT };
    let muted_color = if on_band { palette::ON_ACCENT } else { palette::MUTED };

    let align = match treatment.layout {
        HeaderLayout::Centered => TextAlign::Center,
        HeaderLayout::Left | HeaderLayout::Split => TextAlign::Left,
    };

    let name = if is_set(&info.full_name) {
        info.full_name.trim()
    } else {
        NAME_PLACEHOLDER
    };
    let mut name_style = Style::new()
        .size(tokens.scale.heading1)
        .weight(treatment.name_weight)
        .color(if treatment.name_in_accent && !on_band {
            accent
        } else {
            text_color
        })
        .align(align);
    if treatment.name_uppercase {
        name_style = name_style.uppercase();
    }
    if let Some(em) = treatment.name_tracking {
        name_style = name_style.tracking(em);
    }

    let mut identity = vec![DocNode::heading(1, name, name_style)];
    if is_set(&info.title) {
        let color = if treatment.headline_in_accent && !on_band {
            accent
        } else {
            muted_color
        };
        identity.push(DocNode::text(
            info.title.trim(),
            Style::new()
                .size(tokens.scale.heading3)
                .weight(500)
                .color(color)
                .align(align),
        ));
    }

    let contact_style = Style::new()
        .size(tokens.scale.small)
        .color(muted_color)
        .margin_top(4.0);

    let children = match treatment.layout {
        HeaderLayout::Split => {
            let contacts: Vec<DocNode> = contact_parts(info, treatment.separator)
                .into_iter()
                .map(|part| DocNode::text(part, contact_style.clone().align(TextAlign::Right)))
                .collect();
            let mut row = vec![DocNode::block(Style::new().width(60.0), identity)];
            if !contacts.is_empty() {
                row.push(DocNode::block(Style::new().width(40.0), contacts));
            }
            vec![DocNode::row(Style::new(), row)]
        }
        HeaderLayout::Centered | HeaderLayout::Left => {
            if let Some(line) = contact_line(info, treatment.separator) {
                identity.push(DocNode::text(line, contact_style.align(align)));
            }
            identity
        }
    };

    let frame_style = match treatment.frame {
        HeaderFrame::Plain => Style::new(),
        HeaderFrame::Rule { width } => Style::new().border(BorderSide::Bottom, width, accent),
        HeaderFrame::Bar { width } => Style::new()
            .border(BorderSide::Left, width, accent)
            .padding(2.0, 10.0),
        HeaderFrame::Band => Style::new().background(accent).padding(18.0, 20.0),
    };

    DocNode::Header {
        style: frame_style.margin_bottom(tokens.gap),
        children,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
