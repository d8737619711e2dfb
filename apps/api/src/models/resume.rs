use serde::{Deserialize, Serialize};

/// Returns true when a free-text field carries something worth rendering.
pub fn is_set(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when at least one item is non-blank.
pub fn any_set(values: &[String]) -> bool {
    values.iter().any(|v| is_set(v))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    /// Professional headline shown under the name.
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub github: String,
}

impl PersonalInfo {
    /// Contact fields in display order.
    pub fn contact_fields(&self) -> [&str; 6] {
        [
            &self.email,
            &self.phone,
            &self.location,
            &self.linkedin,
            &self.website,
            &self.github,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub title: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub honors: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageEntry {
    pub id: String,
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwardEntry {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

/// The semantic resume document, owned by the editing flow and read-only here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
    pub awards: Vec<AwardEntry>,
}

impl ExperienceEntry {
    /// Whether the entry can carry an experience section on its own.
    pub fn has_content(&self) -> bool {
        is_set(&self.company) || is_set(&self.title)
    }

    /// No field holds anything worth showing.
    pub fn is_blank(&self) -> bool {
        [&self.company, &self.title, &self.location, &self.start_date, &self.end_date]
            .iter()
            .all(|f| !is_set(f))
            && !self.current
            && !any_set(&self.bullets)
    }
}

impl EducationEntry {
    pub fn has_content(&self) -> bool {
        is_set(&self.institution) || is_set(&self.degree)
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.institution,
            &self.degree,
            &self.field,
            &self.location,
            &self.start_date,
            &self.end_date,
            &self.gpa,
            &self.honors,
        ]
        .iter()
        .all(|f| !is_set(f))
    }
}

impl ProjectEntry {
    pub fn has_content(&self) -> bool {
        is_set(&self.name) || is_set(&self.description)
    }

    pub fn is_blank(&self) -> bool {
        [&self.name, &self.description, &self.link, &self.start_date, &self.end_date]
            .iter()
            .all(|f| !is_set(f))
            && !any_set(&self.technologies)
            && !any_set(&self.highlights)
    }
}

impl CertificationEntry {
    /// One-line label: "Name — Issuer (Date)", skipping blank parts.
    pub fn label(&self) -> String {
        labelled(&self.name, &self.issuer, &self.date)
    }
}

impl LanguageEntry {
    pub fn label(&self) -> String {
        match (is_set(&self.language), is_set(&self.proficiency)) {
            (true, true) => format!("{} ({})", self.language.trim(), self.proficiency.trim()),
            (true, false) => self.language.trim().to_string(),
            (false, true) => self.proficiency.trim().to_string(),
            (false, false) => String::new(),
        }
    }
}

impl AwardEntry {
    pub fn label(&self) -> String {
        labelled(&self.title, &self.issuer, &self.date)
    }
}

fn labelled(name: &str, issuer: &str, date: &str) -> String {
    let mut label = [name, issuer]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" — ");
    if is_set(date) {
        if label.is_empty() {
            label = date.trim().to_string();
        } else {
            label.push_str(&format!(" ({})", date.trim()));
        }
    }
    label
}
