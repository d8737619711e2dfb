//! Markup writer — serializes a document tree to self-contained HTML.
//!
//! The export collaborator rasterizes this markup, so it must mirror the
//! preview tree exactly: no node is dropped and all text is escaped.

use std::fmt::Write;

use crate::composer::tree::{BorderSide, Column, ColumnSide, DocNode, Style, TagTreatment, TextAlign};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inline CSS declarations for a style, in a fixed property order.
pub fn css(style: &Style) -> String {
    let mut decls: Vec<String> = Vec::new();
    if let Some(color) = &style.color {
        decls.push(format!("color:{color}"));
    }
    if let Some(bg) = &style.background {
        decls.push(format!("background-color:{bg}"));
    }
    if let Some(font) = &style.font_family {
        decls.push(format!("font-family:{font}"));
    }
    if let Some(size) = style.font_size {
        decls.push(format!("font-size:{size}pt"));
    }
    if let Some(weight) = style.font_weight {
        decls.push(format!("font-weight:{weight}"));
    }
    if style.italic {
        decls.push("font-style:italic".to_string());
    }
    if style.uppercase {
        decls.push("text-transform:uppercase".to_string());
    }
    if let Some(em) = style.letter_spacing {
        decls.push(format!("letter-spacing:{em}em"));
    }
    if let Some(align) = style.align {
        let value = match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        };
        decls.push(format!("text-align:{value}"));
    }
    if let Some(border) = &style.border {
        let property = match border.side {
            BorderSide::All => "border",
            BorderSide::Top => "border-top",
            BorderSide::Bottom => "border-bottom",
            BorderSide::Left => "border-left",
        };
        decls.push(format!("{property}:{}pt solid {}", border.width, border.color));
    }
    if let Some(radius) = style.radius {
        decls.push(format!("border-radius:{radius}pt"));
    }
    if let Some([v, h]) = style.padding {
        decls.push(format!("padding:{v}pt {h}pt"));
    }
    if let Some(top) = style.margin_top {
        decls.push(format!("margin-top:{top}pt"));
    }
    if let Some(bottom) = style.margin_bottom {
        decls.push(format!("margin-bottom:{bottom}pt"));
    }
    if let Some(width) = style.width {
        decls.push(format!("width:{width}%"));
    }
    decls.join(";")
}

fn open(out: &mut String, tag: &str, class: &str, style: &Style) {
    let css = css(style);
    let _ = write!(out, "<{tag} class=\"{class}\"");
    if !css.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape(&css));
    }
    out.push('>');
}

fn write_column(out: &mut String, class: &str, column: &Column) {
    open(out, "div", class, &column.style);
    for child in &column.children {
        write_node(out, child);
    }
    out.push_str("</div>");
}

fn write_node(out: &mut String, node: &DocNode) {
    match node {
        DocNode::Document { style, children } => {
            open(out, "article", "resume", style);
            children.iter().for_each(|c| write_node(out, c));
            out.push_str("</article>");
        }
        DocNode::Header { style, children } => {
            open(out, "header", "resume-header", style);
            children.iter().for_each(|c| write_node(out, c));
            out.push_str("</header>");
        }
        DocNode::Section {
            section,
            style,
            children,
        } => {
            open(out, "section", &format!("section section-{}", section.as_str()), style);
            children.iter().for_each(|c| write_node(out, c));
            out.push_str("</section>");
        }
        DocNode::Columns {
            style,
            narrow_side,
            narrow,
            main,
        } => {
            open(out, "div", "columns", style);
            match narrow_side {
                ColumnSide::Left => {
                    write_column(out, "column-narrow", narrow);
                    write_column(out, "column-main", main);
                }
                ColumnSide::Right => {
                    write_column(out, "column-main", main);
                    write_column(out, "column-narrow", narrow);
                }
            }
            out.push_str("</div>");
        }
        DocNode::Block { style, children } => {
            open(out, "div", "block", style);
            children.iter().for_each(|c| write_node(out, c));
            out.push_str("</div>");
        }
        DocNode::Row { style, children } => {
            open(out, "div", "row", style);
            children.iter().for_each(|c| write_node(out, c));
            out.push_str("</div>");
        }
        DocNode::Heading { level, text, style } => {
            let tag = format!("h{}", (*level).clamp(1, 6));
            open(out, &tag, "heading", style);
            out.push_str(&escape(text));
            let _ = write!(out, "</{tag}>");
        }
        DocNode::Text { text, style } => {
            open(out, "p", "text", style);
            out.push_str(&escape(text));
            out.push_str("</p>");
        }
        DocNode::Bullets {
            marker,
            marker_style,
            style,
            items,
        } => {
            open(out, "ul", "bullets", style);
            for item in items {
                out.push_str("<li>");
                open(out, "span", "marker", marker_style);
                out.push_str(&escape(marker));
                out.push_str("</span> ");
                out.push_str(&escape(item));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        DocNode::Tags {
            treatment,
            item_style,
            style,
            items,
        } => {
            let (list_class, item_tag) = match treatment {
                TagTreatment::Pill => ("tags tags-pill", "span"),
                TagTreatment::Bordered => ("tags tags-bordered", "span"),
                TagTreatment::ListItem => ("tags tags-list", "li"),
            };
            let list_tag = if *treatment == TagTreatment::ListItem { "ul" } else { "div" };
            open(out, list_tag, list_class, style);
            for item in items {
                open(out, item_tag, "tag", item_style);
                out.push_str(&escape(item));
                let _ = write!(out, "</{item_tag}>");
            }
            let _ = write!(out, "</{list_tag}>");
        }
    }
}

const BASE_CSS: &str = "*{box-sizing:border-box;margin:0;padding:0}\
.columns{display:flex;gap:18pt}\
.row{display:flex;justify-content:space-between;align-items:baseline;gap:8pt}\
.tags{display:flex;flex-wrap:wrap;gap:4pt}\
.tags-list{display:block;padding-left:12pt}\
.bullets{list-style:none}\
.heading{line-height:1.25}";

/// Serializes a document tree to a standalone HTML page.
pub fn to_html(root: &DocNode) -> String {
    let mut body = String::new();
    write_node(&mut body, root);
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{BASE_CSS}</style></head><body>{body}</body></html>"
    )
}
