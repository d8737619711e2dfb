//! Section Renderer Matrix — one rendering rule per (style variant, section type).
//!
//! The matrix is an explicit two-dimensional table built once. Each cell pairs a
//! section renderer with the style's static profile, so coverage of all 64
//! combinations is checked by iterating the table's keys.

use std::collections::BTreeMap;

use crate::composer::profile::{profile, EntryLayout, StyleProfile, TitleFamily, PROMPT_GLYPH};
use crate::composer::tokens::{palette, StyleTokens};
use crate::composer::tree::{BorderSide, DocNode, Style, TagTreatment, TextAlign};
use crate::models::layout::{SectionType, StyleVariant};
use crate::models::resume::{is_set, ResumeContent};

pub type CellRenderer = fn(&Cell, &StyleTokens, &ResumeContent) -> Vec<DocNode>;

/// One rendering rule of the matrix.
pub struct Cell {
    pub style: StyleVariant,
    pub section: SectionType,
    pub profile: &'static StyleProfile,
    body: CellRenderer,
}

impl Cell {
    /// Renders the section block: decorated title followed by the body.
    pub fn render(&self, tokens: &StyleTokens, content: &ResumeContent) -> DocNode {
        let mut children = vec![section_title(self.profile, self.section, tokens)];
        children.extend((self.body)(self, tokens, content));
        DocNode::Section {
            section: self.section,
            style: Style::new().margin_bottom(tokens.gap),
            children,
        }
    }
}

pub struct RenderMatrix {
    cells: BTreeMap<(StyleVariant, SectionType), Cell>,
}

impl Default for RenderMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderMatrix {
    pub fn new() -> Self {
        let mut cells = BTreeMap::new();
        for style in StyleVariant::ALL {
            for section in SectionType::ALL {
                cells.insert(
                    (style, section),
                    Cell {
                        style,
                        section,
                        profile: profile(style),
                        body: body_renderer(section),
                    },
                );
            }
        }
        Self { cells }
    }

    pub fn keys(&self) -> impl Iterator<Item = &(StyleVariant, SectionType)> {
        self.cells.keys()
    }

    pub fn cell(&self, style: StyleVariant, section: SectionType) -> Option<&Cell> {
        self.cells.get(&(style, section))
    }

    /// Renders one section under one style.
    pub fn render(
        &self,
        style: StyleVariant,
        section: SectionType,
        tokens: &StyleTokens,
        content: &ResumeContent,
    ) -> Option<DocNode> {
        self.cell(style, section)
            .map(|cell| cell.render(tokens, content))
    }

    /// String-keyed form of [`RenderMatrix::render`]. Unknown section ids produce no block.
    #[allow(dead_code)]
    pub fn render_id(
        &self,
        style: StyleVariant,
        section_id: &str,
        tokens: &StyleTokens,
        content: &ResumeContent,
    ) -> Option<DocNode> {
        let section = SectionType::from_id(section_id)?;
        self.render(style, section, tokens, content)
    }
}

fn body_renderer(section: SectionType) -> CellRenderer {
    match section {
        SectionType::Summary => render_summary,
        SectionType::Experience => render_experience,
        SectionType::Education => render_education,
        SectionType::Skills => render_skills,
        SectionType::Projects => render_projects,
        SectionType::Certifications => render_certifications,
        SectionType::Languages => render_languages,
        SectionType::Awards => render_awards,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Titles
// ────────────────────────────────────────────────────────────────────────────

fn section_title(profile: &StyleProfile, section: SectionType, tokens: &StyleTokens) -> DocNode {
    let accent = tokens.accent.as_str();
    let scale = &tokens.scale;
    let gap = tokens.entry_gap();

    let (text, style) = match profile.title_family {
        TitleFamily::Badge => (
            section.title().to_string(),
            Style::new()
                .size(scale.heading2)
                .bold()
                .uppercase()
                .tracking(0.04)
                .color(palette::ON_ACCENT)
                .background(accent)
                .radius(999.0)
                .padding(3.0, 12.0),
        ),
        TitleFamily::Ruled { centered } => {
            let mut style = Style::new()
                .size(scale.heading2)
                .bold()
                .color(accent)
                .border(BorderSide::Bottom, 1.5, accent)
                .align(if centered { TextAlign::Center } else { TextAlign::Left });
            if centered {
                style = style.uppercase().tracking(0.08);
            }
            (section.title().to_string(), style)
        }
        TitleFamily::Bracket => (
            format!("{PROMPT_GLYPH}{}", section.title()),
            Style::new().size(scale.heading2).bold().color(accent),
        ),
        TitleFamily::Quiet => (
            section.title().to_string(),
            Style::new()
                .size(scale.small)
                .weight(600)
                .uppercase()
                .tracking(0.2)
                .color(accent),
        ),
        TitleFamily::Bold => (
            section.title().to_string(),
            Style::new()
                .size(scale.heading2)
                .bold()
                .uppercase()
                .tracking(0.05)
                .color(accent),
        ),
    };

    DocNode::heading(2, text, style.margin_bottom(gap))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared entry layout
// ────────────────────────────────────────────────────────────────────────────

/// Non-blank, trimmed strings in their stored order.
fn present<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    items
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// "start – end", with "Present" for ongoing entries and blank parts dropped.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current { "Present" } else { end.trim() };
    match (start.trim(), end) {
        ("", "") => String::new(),
        (s, "") => s.to_string(),
        ("", e) => e.to_string(),
        (s, e) => format!("{s} – {e}"),
    }
}

/// The pieces every list-bearing entry is made of.
struct EntryParts {
    title: String,
    organization: String,
    location: String,
    dates: String,
    details: Vec<DocNode>,
}

fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn entry_block(profile: &StyleProfile, tokens: &StyleTokens, parts: EntryParts) -> DocNode {
    let scale = &tokens.scale;
    let title_style = Style::new().size(scale.heading3).bold().color(palette::TEXT);
    let date_style = Style::new().size(scale.small).color(palette::MUTED);
    let mut org_style = Style::new()
        .size(scale.body)
        .weight(profile.org_weight)
        .color(if profile.org_in_accent {
            tokens.accent.as_str()
        } else {
            palette::MUTED
        });
    if profile.org_italic {
        org_style = org_style.italic();
    }

    let mut children = Vec::new();
    match profile.entry_layout {
        EntryLayout::Split => {
            let mut row = Vec::new();
            if is_set(&parts.title) {
                row.push(DocNode::heading(3, parts.title.as_str(), title_style));
            }
            if is_set(&parts.dates) {
                row.push(DocNode::text(parts.dates.as_str(), date_style.align(TextAlign::Right)));
            }
            if !row.is_empty() {
                children.push(DocNode::row(Style::new(), row));
            }
            let org = join_present(&[parts.organization.as_str(), parts.location.as_str()], ", ");
            if !org.is_empty() {
                children.push(DocNode::text(org, org_style));
            }
        }
        EntryLayout::Stacked => {
            if is_set(&parts.title) {
                children.push(DocNode::heading(3, parts.title.as_str(), title_style));
            }
            let org = join_present(&[parts.organization.as_str(), parts.location.as_str()], " · ");
            if !org.is_empty() {
                children.push(DocNode::text(org, org_style));
            }
            if is_set(&parts.dates) {
                children.push(DocNode::text(parts.dates.as_str(), date_style));
            }
        }
        EntryLayout::Inline => {
            let headline = join_present(&[parts.title.as_str(), parts.organization.as_str()], " @ ");
            if !headline.is_empty() {
                children.push(DocNode::heading(3, headline, title_style));
            }
            let meta = join_present(&[parts.dates.as_str(), parts.location.as_str()], " | ");
            if !meta.is_empty() {
                children.push(DocNode::text(meta, date_style));
            }
        }
    }
    children.extend(parts.details);

    DocNode::block(Style::new().margin_bottom(tokens.entry_gap()), children)
}

/// Bullet list node, or nothing when every bullet is blank.
fn bullets(profile: &StyleProfile, tokens: &StyleTokens, items: &[String]) -> Option<DocNode> {
    let items = present(items);
    if items.is_empty() {
        return None;
    }
    let marker_color = if profile.accent_markers {
        tokens.accent.as_str()
    } else {
        palette::MUTED
    };
    Some(DocNode::Bullets {
        marker: profile.bullet_marker.to_string(),
        marker_style: Style::new().color(marker_color),
        style: Style::new()
            .size(tokens.scale.body)
            .color(palette::TEXT)
            .margin_top(2.0),
        items,
    })
}

fn paragraph(tokens: &StyleTokens, text: &str) -> DocNode {
    DocNode::text(
        text.trim(),
        Style::new()
            .size(tokens.scale.body)
            .color(palette::TEXT)
            .margin_top(2.0),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Flat-tag sections
// ────────────────────────────────────────────────────────────────────────────

fn tag_list(treatment: TagTreatment, tokens: &StyleTokens, items: Vec<String>) -> Option<DocNode> {
    if items.is_empty() {
        return None;
    }
    let accent = tokens.accent.as_str();
    let item_style = match treatment {
        TagTreatment::Pill => Style::new()
            .size(tokens.scale.small)
            .weight(500)
            .color(palette::ON_ACCENT)
            .background(accent)
            .radius(999.0)
            .padding(2.0, 8.0),
        TagTreatment::Bordered => Style::new()
            .size(tokens.scale.small)
            .color(palette::TEXT)
            .border(BorderSide::All, 1.0, accent)
            .radius(2.0)
            .padding(1.0, 6.0),
        TagTreatment::ListItem => Style::new().size(tokens.scale.body).color(palette::TEXT),
    };
    Some(DocNode::Tags {
        treatment,
        item_style,
        style: Style::new().margin_bottom(4.0),
        items,
    })
}

fn tag_group(
    label: &str,
    treatment: TagTreatment,
    tokens: &StyleTokens,
    items: Vec<String>,
) -> Option<DocNode> {
    let tags = tag_list(treatment, tokens, items)?;
    Some(DocNode::block(
        Style::new().margin_bottom(tokens.entry_gap()),
        vec![
            DocNode::text(
                label,
                Style::new()
                    .size(tokens.scale.small)
                    .weight(600)
                    .color(palette::MUTED)
                    .margin_bottom(2.0),
            ),
            tags,
        ],
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Body renderers, one per section type
// ────────────────────────────────────────────────────────────────────────────

fn render_summary(_cell: &Cell, tokens: &StyleTokens, content: &ResumeContent) -> Vec<DocNode> {
    if !is_set(&content.summary) {
        return Vec::new();
    }
    vec![paragraph(tokens, &content.summary)]
}

fn render_experience(cell: &Cell, tokens: &StyleTokens, content: &ResumeContent) -> Vec<DocNode> {
    content
        .experience
        .iter()
        .filter(|e| !e.is_blank())
        .map(|e| {
            let (title, organization) = if is_set(&e.title) {
                (e.title.trim().to_string(), e.company.trim().to_string())
            } else {
                (e.company.trim().to_string(), String::new())
            };
            let details = bullets(cell.profile, tokens, &e.bullets).into_iter().collect();
            entry_block(
                cell.profile,
                tokens,
                EntryParts {
                    title,
                    organization,
                    location: e.location.trim().to_string(),
                    dates: date_range(&e.start_date, &e.end_date, e.current),
                    details,
                },
            )
        })
        .collect()
}

fn render_education(cell: &Cell, tokens: &StyleTokens, content: &ResumeContent) -> Vec<DocNode> {
    content
        .education
        .iter()
        .filter(|e| !e.is_blank())
        .map(|e| {
            let degree = match (is_set(&e.degree), is_set(&e.field)) {
                (true, true) => format!("{} in {}", e.degree.trim(), e.field.trim()),
                (true, false) => e.degree.trim().to_string(),
                (false, true) => e.field.trim().to_string(),
                (false, false) => String::new(),
            };
            let (title, organization) = if degree.is_empty() {
                (e.institution.trim().to_string(), String::new())
            } else {
                (degree, e.institution.trim().to_string())
            };

            let mut details = Vec::new();
            if is_set(&e.gpa) {
                details.push(DocNode::text(
                    format!("GPA: {}", e.gpa.trim()),
                    Style::new().size(tokens.scale.small).color(palette::MUTED),
                ));
            }
            if is_set(&e.honors) {
                details.push(paragraph(tokens, &e.honors));
            }

            entry_block(
                cell.profile,
                tokens,
                EntryParts {
                    title,
                    organization,
                    location: e.location.trim().to_string(),
                    dates: date_range(&e.start_date, &e.end_date, false),
                    details,
                },
            )
        })
        .collect()
}

fn render_projects(cell: &Cell, tokens: &StyleTokens, content: &ResumeContent) -> Vec<DocNode> {
    content
        .projects
        .iter()
        .filter(|p| !p.is_blank())
        .map(|p| {
            let stack = present(&p.technologies).join(", ");
            let mut details = Vec::new();
            if is_set(&p.description) {
                details.push(paragraph(tokens, &p.description));
            }
            details.extend(bullets(cell.profile, tokens, &p.highlights));

            entry_block(
                cell.profile,
                tokens,
                EntryParts {
                    title: p.name.trim().to_string(),
                    organization: stack,
                    location: p.link.trim().to_string(),
                    dates: date_range(&p.start_date, &p.end_date, false),
                    details,
                },
            )
        })
        .collect()
}

fn render_skills(cell: &Cell, tokens: &StyleTokens, content: &ResumeContent) -> Vec<DocNode> {
    let treatment = cell.profile.skill_tags;
    [
        tag_group("Technical", treatment, tokens, present(&content.skills.technical)),
        tag_group("Soft Skills", treatment, tokens, present(&content.skills.soft)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn render_certifications(cell: &Cell, tokens: &StyleTokens, content: &ResumeContent) -> Vec<DocNode> {
    let labels = content
        .certifications
        .iter()
        .map(|c| c.label())
        .filter(|l| !l.is_empty())
        .collect();
    tag_list(cell.profile.list_tags, tokens, labels).into_iter().collect()
}

fn render_languages(cell: &Cell, tokens: &StyleTokens, content: &ResumeContent) -> Vec<DocNode> {
    let labels = content
        .languages
        .iter()
        .map(|l| l.label())
        .filter(|l| !l.is_empty())
        .collect();
    tag_list(cell.profile.language_tags, tokens, labels).into_iter().collect()
}

fn render_awards(cell: &Cell, tokens: &StyleTokens, content: &ResumeContent) -> Vec<DocNode> {
    let treatment = cell.profile.list_tags;
    let labels = content
        .awards
        .iter()
        .map(|a| {
            let label = a.label();
            // Only list items have room for the description.
            if treatment == TagTreatment::ListItem && is_set(&a.description) && !label.is_empty() {
                format!("{label}: {}", a.description.trim())
            } else {
                label
            }
        })
        .filter(|l| !l.is_empty())
        .collect();
    tag_list(treatment, tokens, labels).into_iter().collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
