//! Profile data model -- the static records the built-in commands render.
//!
//! A profile is four ordered collections: skills grouped by category,
//! work experience, projects, and education. Each collection is stored in
//! its own JSON document whose top-level object wraps the collection under
//! a single key (`{"skills": {...}}`, `{"experiences": [...]}`, ...).
//! The profile is read once and never mutated afterwards.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Skill names grouped by category. Category order follows the source document.
pub type Skills = IndexMap<String, Vec<String>>;

/// A single position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// A single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// A single degree or course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub cgpa: String,
}

/// The complete read-only profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub skills: Skills,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
}

// -- On-disk document shapes --

#[derive(Deserialize)]
struct SkillsDoc {
    skills: Skills,
}

#[derive(Deserialize)]
struct ExperiencesDoc {
    experiences: Vec<Experience>,
}

#[derive(Deserialize)]
struct ProjectsDoc {
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct EducationDoc {
    education: Vec<Education>,
}

/// File names read by [`Profile::load_dir`].
pub const SKILLS_FILE: &str = "skills.json";
pub const EXPERIENCES_FILE: &str = "experiences.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const EDUCATION_FILE: &str = "education.json";

const SAMPLE_SKILLS: &str = include_str!("../data/skills.json");
const SAMPLE_EXPERIENCES: &str = include_str!("../data/experiences.json");
const SAMPLE_PROJECTS: &str = include_str!("../data/projects.json");
const SAMPLE_EDUCATION: &str = include_str!("../data/education.json");

impl Profile {
    /// Build a profile from the four JSON documents.
    pub fn from_json_docs(
        skills: &str,
        experiences: &str,
        projects: &str,
        education: &str,
    ) -> Result<Self> {
        Ok(Self {
            skills: parse_doc::<SkillsDoc>(SKILLS_FILE, skills)?.skills,
            experiences: parse_doc::<ExperiencesDoc>(EXPERIENCES_FILE, experiences)?.experiences,
            projects: parse_doc::<ProjectsDoc>(PROJECTS_FILE, projects)?.projects,
            education: parse_doc::<EducationDoc>(EDUCATION_FILE, education)?.education,
        })
    }

    /// Load the four profile documents from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let read = |name: &str| -> Result<String> {
            let path = dir.join(name);
            std::fs::read_to_string(&path)
                .map_err(|e| FolioError::Profile(format!("{}: {e}", path.display())))
        };
        let profile = Self::from_json_docs(
            &read(SKILLS_FILE)?,
            &read(EXPERIENCES_FILE)?,
            &read(PROJECTS_FILE)?,
            &read(EDUCATION_FILE)?,
        )?;
        log::info!(
            "loaded profile from {} ({} skill categories, {} experiences, {} projects, {} education)",
            dir.display(),
            profile.skills.len(),
            profile.experiences.len(),
            profile.projects.len(),
            profile.education.len(),
        );
        Ok(profile)
    }

    /// The demo profile compiled into the crate.
    pub fn sample() -> Result<Self> {
        Self::from_json_docs(
            SAMPLE_SKILLS,
            SAMPLE_EXPERIENCES,
            SAMPLE_PROJECTS,
            SAMPLE_EDUCATION,
        )
    }
}

fn parse_doc<T: serde::de::DeserializeOwned>(name: &str, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| FolioError::Profile(format!("{name}: {e}")))
}
