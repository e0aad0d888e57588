//! Portfolio content loading.
//!
//! All presentable data (profile, projects, résumé timeline, skills,
//! social links) lives in a single JSON file on disk. The module is
//! intentionally small: deserialize, sanity-check, report counts.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Everything the deferred sections render. Loaded once per session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, clamped to 0..=100 on load.
    #[serde(default)]
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Load and validate the content file.
pub fn load_content(path: &Path) -> Result<PortfolioContent> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file at {}", path.display()))?;
    let mut content: PortfolioContent = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse content file at {}", path.display()))?;

    if content.profile.name.trim().is_empty() {
        bail!("Content file {} has an empty profile name", path.display());
    }
    for group in &mut content.skill_groups {
        for skill in &mut group.skills {
            skill.level = skill.level.min(100);
        }
    }

    info!(
        path = %path.display(),
        projects = content.projects.len(),
        experience = content.experience.len(),
        skill_groups = content.skill_groups.len(),
        "Loaded portfolio content"
    );
    Ok(content)
}
