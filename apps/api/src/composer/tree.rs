//! Document tree — the value the composer hands to preview and export consumers.
//!
//! The tree is presentation-complete: every node carries the resolved style it
//! should be drawn with, so consumers never consult the layout config again.

use serde::Serialize;

use crate::models::layout::SectionType;

// ────────────────────────────────────────────────────────────────────────────
// Style primitives
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderSide {
    All,
    Top,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Border {
    pub side: BorderSide,
    pub width: f32,
    pub color: String,
}

/// Resolved visual attributes for one node. Unset fields inherit from the parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub uppercase: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    /// Vertical and horizontal padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    /// Width as a percentage of the parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn background(mut self, color: &str) -> Self {
        self.background = Some(color.to_string());
        self
    }

    pub fn font(mut self, stack: &str) -> Self {
        self.font_family = Some(stack.to_string());
        self
    }

    pub fn size(mut self, pt: f32) -> Self {
        self.font_size = Some(pt);
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn bold(self) -> Self {
        self.weight(700)
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn tracking(mut self, em: f32) -> Self {
        self.letter_spacing = Some(em);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn border(mut self, side: BorderSide, width: f32, color: &str) -> Self {
        self.border = Some(Border {
            side,
            width,
            color: color.to_string(),
        });
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn padding(mut self, vertical: f32, horizontal: f32) -> Self {
        self.padding = Some([vertical, horizontal]);
        self
    }

    pub fn margin_top(mut self, pt: f32) -> Self {
        self.margin_top = Some(pt);
        self
    }

    pub fn margin_bottom(mut self, pt: f32) -> Self {
        self.margin_bottom = Some(pt);
        self
    }

    pub fn width(mut self, percent: f32) -> Self {
        self.width = Some(percent);
        self
    }

    /// Every color value this style references.
    #[cfg(test)]
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.color
            .as_deref()
            .into_iter()
            .chain(self.background.as_deref())
            .chain(self.border.as_ref().map(|b| b.color.as_str()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Nodes
// ────────────────────────────────────────────────────────────────────────────

/// How flat-list items are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagTreatment {
    /// Filled rounded badge.
    Pill,
    /// Outlined rectangular tag.
    Bordered,
    /// One item per line with a marker.
    ListItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub style: Style,
    pub children: Vec<DocNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocNode {
    Document {
        style: Style,
        children: Vec<DocNode>,
    },
    Header {
        style: Style,
        children: Vec<DocNode>,
    },
    Section {
        section: SectionType,
        style: Style,
        children: Vec<DocNode>,
    },
    Columns {
        style: Style,
        narrow_side: ColumnSide,
        narrow: Column,
        main: Column,
    },
    Block {
        style: Style,
        children: Vec<DocNode>,
    },
    /// Horizontal row; first child hugs the start edge, the last the end edge.
    Row {
        style: Style,
        children: Vec<DocNode>,
    },
    Heading {
        level: u8,
        text: String,
        style: Style,
    },
    Text {
        text: String,
        style: Style,
    },
    Bullets {
        marker: String,
        marker_style: Style,
        style: Style,
        items: Vec<String>,
    },
    Tags {
        treatment: TagTreatment,
        item_style: Style,
        style: Style,
        items: Vec<String>,
    },
}

impl DocNode {
    pub fn text(text: impl Into<String>, style: Style) -> Self {
        DocNode::Text {
            text: text.into(),
            style,
        }
    }

    pub fn heading(level: u8, text: impl Into<String>, style: Style) -> Self {
        DocNode::Heading {
            level,
            text: text.into(),
            style,
        }
    }

    pub fn block(style: Style, children: Vec<DocNode>) -> Self {
        DocNode::Block { style, children }
    }

    pub fn row(style: Style, children: Vec<DocNode>) -> Self {
        DocNode::Row { style, children }
    }

    pub fn style(&self) -> &Style {
        match self {
            DocNode::Document { style, .. }
            | DocNode::Header { style, .. }
            | DocNode::Section { style, .. }
            | DocNode::Columns { style, .. }
            | DocNode::Block { style, .. }
            | DocNode::Row { style, .. }
            | DocNode::Heading { style, .. }
            | DocNode::Text { style, .. }
            | DocNode::Bullets { style, .. }
            | DocNode::Tags { style, .. } => style,
        }
    }

    /// Child nodes in visual order. Column children are yielded narrow-side first
    /// when the narrow column sits on the left.
    pub fn children(&self) -> Vec<&DocNode> {
        match self {
            DocNode::Document { children, .. }
            | DocNode::Header { children, .. }
            | DocNode::Section { children, .. }
            | DocNode::Block { children, .. }
            | DocNode::Row { children, .. } => children.iter().collect(),
            DocNode::Columns {
                narrow_side,
                narrow,
                main,
                ..
            } => {
                let (first, second) = match narrow_side {
                    ColumnSide::Left => (narrow, main),
                    ColumnSide::Right => (main, narrow),
                };
                first.children.iter().chain(second.children.iter()).collect()
            }
            DocNode::Heading { .. }
            | DocNode::Text { .. }
            | DocNode::Bullets { .. }
            | DocNode::Tags { .. } => Vec::new(),
        }
    }

    /// Depth-first pre-order traversal.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DocNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Every color value referenced anywhere in this subtree, including column
    /// and marker styles.
    #[cfg(test)]
    pub fn colors(&self) -> Vec<&str> {
        let mut colors = Vec::new();
        self.walk(&mut |node| {
            colors.extend(node.style().colors());
            match node {
                DocNode::Columns { narrow, main, .. } => {
                    colors.extend(narrow.style.colors());
                    colors.extend(main.style.colors());
                }
                DocNode::Bullets { marker_style, .. } => colors.extend(marker_style.colors()),
                DocNode::Tags { item_style, .. } => colors.extend(item_style.colors()),
                _ => {}
            }
        });
        colors
    }

    /// All text carried by this subtree, in document order.
    #[cfg(test)]
    pub fn plain_text(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            DocNode::Heading { text, .. } | DocNode::Text { text, .. } => out.push(text.as_str()),
            DocNode::Bullets { items, .. } | DocNode::Tags { items, .. } => {
                out.extend(items.iter().map(String::as_str))
            }
            _ => {}
        });
        out
    }
}

/// Section types in the order they appear in the rendered tree.
pub fn rendered_sections(root: &DocNode) -> Vec<SectionType> {
    let mut sections = Vec::new();
    root.walk(&mut |node| {
        if let DocNode::Section { section, .. } = node {
            sections.push(*section);
        }
    });
    sections
}

/// Finds the first section block of a given type.
#[cfg(test)]
pub fn find_section(root: &DocNode, wanted: SectionType) -> Option<&DocNode> {
    let mut found = None;
    root.walk(&mut |node| {
        if found.is_none() {
            if let DocNode::Section { section, .. } = node {
                if *section == wanted {
                    found = Some(node);
                }
            }
        }
    });
    found
}
