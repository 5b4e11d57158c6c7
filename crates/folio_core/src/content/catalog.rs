//! Portfolio content catalog.
//!
//! # Responsibility
//! - Hold every static piece of page content in one typed value.
//! - Validate declarations once, before any state machine reads them.
//!
//! # Invariants
//! - At least one section is declared; section ids are unique.
//! - Every record passes `ContentRecord::validate`.
//! - A catalog is never mutated after load.

use crate::model::record::{
    ContentRecord, ExperienceRecord, ProjectRecord, RecordHeader, RecordKind, RecordLinks,
    RecordRef, RecordValidationError,
};
use crate::model::section::{Section, SectionValidationError};
use log::info;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(build_builtin_catalog);

/// Owner identity and social links shown in hero/about/footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

/// One titled group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

/// One earned certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

/// Document-level metadata for the hosting page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub author: String,
}

/// Complete static content for one portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub metadata: SiteMetadata,
    pub profile: Profile,
    /// Navigation order equals declaration order.
    pub sections: Vec<Section>,
    #[serde(default)]
    pub experiences: Vec<ContentRecord>,
    #[serde(default)]
    pub projects: Vec<ContentRecord>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

impl Catalog {
    /// Returns the built-in catalog, built once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Parses and validates a host-supplied JSON catalog.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        catalog.validate()?;
        info!(
            "event=catalog_load module=content status=ok source=json sections={} experiences={} projects={}",
            catalog.sections.len(),
            catalog.experiences.len(),
            catalog.projects.len()
        );
        Ok(catalog)
    }

    /// Validates structural invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sections.is_empty() {
            return Err(CatalogError::NoSections);
        }
        let mut seen = BTreeSet::new();
        for section in &self.sections {
            section.validate().map_err(CatalogError::InvalidSection)?;
            if !seen.insert(section.id.as_str()) {
                return Err(CatalogError::DuplicateSectionId(section.id.clone()));
            }
        }

        validate_list(&self.experiences, RecordKind::Experience)?;
        validate_list(&self.projects, RecordKind::Project)?;

        for (index, category) in self.skills.iter().enumerate() {
            if category.title.trim().is_empty() {
                return Err(CatalogError::EmptySkillCategoryTitle(index));
            }
            if category.skills.iter().any(|skill| skill.trim().is_empty()) {
                return Err(CatalogError::EmptySkill(category.title.clone()));
            }
        }
        for (index, certification) in self.certifications.iter().enumerate() {
            if certification.title.trim().is_empty() || certification.issuer.trim().is_empty() {
                return Err(CatalogError::IncompleteCertification(index));
            }
        }
        Ok(())
    }

    /// Returns the owning list for one record kind.
    pub fn records(&self, kind: RecordKind) -> &[ContentRecord] {
        match kind {
            RecordKind::Experience => self.experiences.as_slice(),
            RecordKind::Project => self.projects.as_slice(),
        }
    }

    /// Resolves one record reference.
    pub fn record(&self, target: RecordRef) -> Option<&ContentRecord> {
        self.records(target.kind).get(target.index)
    }

    pub fn record_count(&self, kind: RecordKind) -> usize {
        self.records(kind).len()
    }
}

/// Catalog load/validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// JSON could not be decoded into the catalog shape.
    Parse(String),
    NoSections,
    InvalidSection(SectionValidationError),
    DuplicateSectionId(String),
    InvalidRecord {
        target: RecordRef,
        source: RecordValidationError,
    },
    /// A record sits in the list of the other kind.
    MisplacedRecord(RecordRef),
    EmptySkillCategoryTitle(usize),
    /// A skill category lists a blank skill.
    EmptySkill(String),
    /// Certification at this position lacks a title or issuer.
    IncompleteCertification(usize),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(details) => write!(f, "catalog parse failed: {details}"),
            Self::NoSections => write!(f, "catalog must declare at least one section"),
            Self::InvalidSection(err) => write!(f, "{err}"),
            Self::DuplicateSectionId(id) => write!(f, "duplicate section id: `{id}`"),
            Self::InvalidRecord { target, source } => write!(f, "{target}: {source}"),
            Self::MisplacedRecord(target) => {
                write!(f, "record kind does not match its list: {target}")
            }
            Self::EmptySkillCategoryTitle(index) => {
                write!(f, "skill category #{index} must have a title")
            }
            Self::EmptySkill(title) => write!(f, "skill category `{title}` has an empty skill"),
            Self::IncompleteCertification(index) => {
                write!(f, "certification #{index} must have a title and issuer")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSection(err) => Some(err),
            Self::InvalidRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn validate_list(records: &[ContentRecord], kind: RecordKind) -> Result<(), CatalogError> {
    for (index, record) in records.iter().enumerate() {
        let target = RecordRef { kind, index };
        if record.kind() != kind {
            return Err(CatalogError::MisplacedRecord(target));
        }
        record
            .validate()
            .map_err(|source| CatalogError::InvalidRecord { target, source })?;
    }
    Ok(())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn experience(
    title: &str,
    organization: &str,
    period: &str,
    description: &str,
    technologies: &[&str],
) -> ContentRecord {
    let mut header = RecordHeader::new(title, description);
    header.period = Some(period.to_string());
    header.technologies = strings(technologies);
    ContentRecord::Experience(ExperienceRecord {
        header,
        organization: organization.to_string(),
        achievements: Vec::new(),
    })
}

fn project(
    title: &str,
    description: &str,
    technologies: &[&str],
    source: &str,
    demo: &str,
) -> ContentRecord {
    let mut header = RecordHeader::new(title, description);
    header.technologies = strings(technologies);
    header.links = RecordLinks::new(Some(source), Some(demo), None);
    ContentRecord::Project(ProjectRecord {
        header,
        features: Vec::new(),
        challenges: Vec::new(),
    })
}

fn build_builtin_catalog() -> Catalog {
    Catalog {
        metadata: SiteMetadata {
            title: "Srishti Jaiswal - Software Engineer & AI Developer".to_string(),
            description: "Aspiring Software Engineer | Full-Stack Developer | Building Intelligent Systems with AI. Recent B.Tech Computer Science graduate with experience in React, TypeScript, AI/ML, and scalable system design.".to_string(),
            keywords: strings(&[
                "Srishti Jaiswal",
                "Software Engineer",
                "Full-Stack Developer",
                "AI Developer",
                "React",
                "TypeScript",
                "Next.js",
                "Machine Learning",
                "Portfolio",
            ]),
            author: "Srishti Jaiswal".to_string(),
        },
        profile: Profile {
            name: "Srishti Jaiswal".to_string(),
            headline: "Software Engineer | Full-Stack Developer | Building Intelligent Systems with AI".to_string(),
            tagline: "I design and build scalable, intelligent systems by combining modern web development with AI/ML capabilities.".to_string(),
            about: "I'm a recent B.Tech Computer Science graduate from SRM IST, Chennai (2021–2025) with experience in full-stack development, AI Integration, and scalable system design. Passionate about building impactful, team-driven solutions.".to_string(),
            email: "srishtijaiswal3016@gmail.com".to_string(),
            linkedin: Some("https://linkedin.com/in/srishti-jaiswal24/".to_string()),
            github: Some("https://github.com/srishti24jais".to_string()),
        },
        sections: vec![
            Section::new("home", "Home"),
            Section::new("about", "About"),
            Section::new("experience", "Experience"),
            Section::new("projects", "Projects"),
            Section::new("skills", "Skills"),
            Section::new("certifications", "Certifications"),
            Section::new("contact", "Contact"),
        ],
        experiences: vec![
            experience(
                "Software Engineering Intern",
                "Cognibiz",
                "2025 – Present",
                "Working on full-stack development projects with modern React ecosystem and AI integrations.",
                &[
                    "React",
                    "TypeScript",
                    "Supabase",
                    "PostgreSQL",
                    "Redux Toolkit",
                    "AI integrations",
                ],
            ),
            experience(
                "Data Analytics Intern",
                "AICTE OIB-SIP",
                "2024",
                "Developed fraud detection models, wine quality prediction systems, and analyzed Google Play Store data.",
                &[
                    "Python",
                    "Machine Learning",
                    "Data Analysis",
                    "Pandas",
                    "Scikit-learn",
                ],
            ),
        ],
        projects: vec![
            project(
                "ISpent",
                "Real-time budget tracking application with intuitive expense management and financial insights.",
                &["React", "Redux", "Next.js", "Firebase"],
                "https://github.com/srishti24jais/ispent",
                "#",
            ),
            project(
                "Events Portal",
                "Full-stack event management system with REST APIs, authentication, and responsive frontend.",
                &["React", "TypeScript", "Spring Boot", "Java"],
                "https://github.com/srishti24jais/events-portal",
                "#",
            ),
        ],
        skills: vec![
            SkillCategory {
                title: "Languages".to_string(),
                skills: strings(&["Java", "C", "C++", "Python", "JavaScript", "TypeScript", "SQL"]),
            },
            SkillCategory {
                title: "Frameworks & Tools".to_string(),
                skills: strings(&[
                    "React",
                    "Redux Toolkit",
                    "Next.js",
                    "Spring Boot",
                    "Firebase",
                    "Docker",
                    "Git",
                    "PostgreSQL",
                    "MySQL",
                ]),
            },
            SkillCategory {
                title: "AI/ML & Cloud".to_string(),
                skills: strings(&[
                    "Python ML libraries",
                    "scikit-learn",
                    "PyTorch",
                    "TensorFlow",
                    "LLM APIs",
                    "LangChain",
                    "RAG",
                    "Azure",
                    "AWS",
                ]),
            },
            SkillCategory {
                title: "Practices".to_string(),
                skills: strings(&["Agile", "TDD", "CI/CD"]),
            },
        ],
        certifications: vec![
            Certification {
                title: "Microsoft Certified: Azure AI Fundamentals".to_string(),
                issuer: "Microsoft".to_string(),
                year: "2025".to_string(),
            },
            Certification {
                title: "Oracle Certified Java SE 11 Developer".to_string(),
                issuer: "Oracle".to_string(),
                year: "2025".to_string(),
            },
            Certification {
                title: "AWS Academy Machine Learning Foundations".to_string(),
                issuer: "Amazon Web Services".to_string(),
                year: "2023".to_string(),
            },
        ],
    }
}
