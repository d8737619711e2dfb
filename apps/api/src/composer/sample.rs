//! Built-in demo resume used for style-gallery thumbnails and tests.
//! Every section is populated so each style shows its full treatment.

use crate::models::resume::{
    AwardEntry, CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo,
    ProjectEntry, ResumeContent, Skills,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_resume() -> ResumeContent {
    ResumeContent {
        personal_info: PersonalInfo {
            full_name: "Jordan Rivera".into(),
            title: "Senior Software Engineer".into(),
            email: "jordan.rivera@example.com".into(),
            phone: "+1 (555) 010-2030".into(),
            location: "Austin, TX".into(),
            linkedin: "linkedin.com/in/jordanrivera".into(),
            website: "jordanrivera.dev".into(),
            github: "".into(),
        },
        summary: "Backend engineer with eight years of experience building payment and \
                  data platforms. Focused on reliability, observability and mentoring."
            .into(),
        experience: vec![
            ExperienceEntry {
                id: "exp-1".into(),
                company: "Northwind Payments".into(),
                title: "Senior Software Engineer".into(),
                location: "Austin, TX".into(),
                start_date: "Mar 2021".into(),
                end_date: "".into(),
                current: true,
                bullets: strings(&[
                    "Led migration of the settlement pipeline to an event-driven design, cutting batch latency by 65%",
                    "Introduced SLO dashboards adopted by 9 product teams",
                    "Mentored 4 engineers through promotion to mid-level",
                ]),
            },
            ExperienceEntry {
                id: "exp-2".into(),
                company: "Contoso Analytics".into(),
                title: "Software Engineer".into(),
                location: "Remote".into(),
                start_date: "Jun 2017".into(),
                end_date: "Feb 2021".into(),
                current: false,
                bullets: strings(&[
                    "Built ingestion services processing 2B events per day",
                    "Reduced cloud spend by $180k/year through storage tiering",
                ]),
            },
        ],
        education: vec![EducationEntry {
            id: "edu-1".into(),
            institution: "University of Texas at Austin".into(),
            degree: "B.S.".into(),
            field: "Computer Science".into(),
            location: "Austin, TX".into(),
            start_date: "2013".into(),
            end_date: "2017".into(),
            gpa: "3.8".into(),
            honors: "Dean's List, Senior Design Award".into(),
        }],
        projects: vec![ProjectEntry {
            id: "proj-1".into(),
            name: "ledgerlite".into(),
            description: "Open-source double-entry ledger library with audit trails.".into(),
            technologies: strings(&["Rust", "PostgreSQL", "gRPC"]),
            link: "github.com/jrivera/ledgerlite".into(),
            start_date: "2022".into(),
            end_date: "".into(),
            highlights: strings(&["1.2k GitHub stars", "Used in production by 3 fintech startups"]),
        }],
        skills: Skills {
            technical: strings(&["Rust", "Go", "PostgreSQL", "Kafka", "Kubernetes", "Terraform"]),
            soft: strings(&["Mentoring", "Technical writing", "Incident command"]),
        },
        certifications: vec![CertificationEntry {
            id: "cert-1".into(),
            name: "AWS Certified Solutions Architect".into(),
            issuer: "Amazon Web Services".into(),
            date: "2022".into(),
        }],
        languages: vec![
            LanguageEntry {
                id: "lang-1".into(),
                language: "English".into(),
                proficiency: "Native".into(),
            },
            LanguageEntry {
                id: "lang-2".into(),
                language: "Spanish".into(),
                proficiency: "Professional".into(),
            },
        ],
        awards: vec![AwardEntry {
            id: "award-1".into(),
            title: "Engineering Excellence Award".into(),
            issuer: "Northwind Payments".into(),
            date: "2023".into(),
            description: "Recognized for the settlement pipeline redesign.".into(),
        }],
    }
}
