//! Profile commands: experience, skills, projects.
//!
//! Each record renders as a bordered key/value table, one `| Label | value`
//! row per field, framed above and below by a rule of dashes.

use folio_types::error::Result;

use crate::commands::CommandId;
use crate::interpreter::{Command, Environment};

/// Width of the rule framing each record.
const RULE_WIDTH: usize = 50;

/// Labels are left-justified to this many characters.
const LABEL_WIDTH: usize = 12;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// `| Label        | value`
fn field_row(label: &str, value: &str) -> String {
    format!("| {label:<LABEL_WIDTH$} | {value}")
}

/// Upper-case the first character: `languages` -> `Languages`.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render framed records, separated by a blank line.
fn render_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = Vec<(&'a str, String)>>,
{
    let rule = rule();
    records
        .into_iter()
        .map(|fields| {
            let rows: Vec<String> = fields
                .iter()
                .map(|(label, value)| field_row(label, value))
                .collect();
            format!("{rule}\n{}\n{rule}", rows.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn no_entries(id: CommandId) -> String {
    format!("{}: no entries", id.name())
}

// ---------------------------------------------------------------------------
// experience
// ---------------------------------------------------------------------------

pub(crate) struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        CommandId::Experience.name()
    }
    fn description(&self) -> &str {
        CommandId::Experience.description()
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<String> {
        let experiences = &env.profile.experiences;
        if experiences.is_empty() {
            return Ok(no_entries(CommandId::Experience));
        }
        Ok(render_records(experiences.iter().map(|exp| {
            vec![
                ("Title", exp.title.clone()),
                ("Company", exp.company.clone()),
                ("Duration", exp.duration.clone()),
                ("Description", exp.description.clone()),
            ]
        })))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

pub(crate) struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        CommandId::Skills.name()
    }
    fn description(&self) -> &str {
        CommandId::Skills.description()
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<String> {
        let skills = &env.profile.skills;
        if skills.is_empty() {
            return Ok(no_entries(CommandId::Skills));
        }
        // One row per category, no rule framing.
        let rows: Vec<String> = skills
            .iter()
            .map(|(category, names)| field_row(&capitalize(category), &names.join(", ")))
            .collect();
        Ok(rows.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

pub(crate) struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        CommandId::Projects.name()
    }
    fn description(&self) -> &str {
        CommandId::Projects.description()
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<String> {
        let projects = &env.profile.projects;
        if projects.is_empty() {
            return Ok(no_entries(CommandId::Projects));
        }
        Ok(render_records(projects.iter().map(|project| {
            vec![
                ("Name", project.name.clone()),
                ("Description", project.description.clone()),
                ("Technologies", project.technologies.join(", ")),
            ]
        })))
    }
}
