use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

use super::record::{Category, ProjectRecord};

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawProject {
    pub(super) name: String,
    pub(super) url: String,
    #[serde(default)]
    pub(super) description: Option<String>,
    #[serde(default)]
    pub(super) category: Option<String>,
}

/// Accepts either a bare array of projects or an object with a `projects` array.
pub(super) fn parse_catalog_json(raw: &str) -> Result<Vec<ProjectRecord>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid catalog JSON")?;

    let entries = match parsed {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("projects") {
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(anyhow!("`projects` must be an array")),
            None => return Err(anyhow!("catalog object has no `projects` array")),
        },
        _ => return Err(anyhow!("unexpected JSON type for project catalog")),
    };

    let mut projects = Vec::with_capacity(entries.len());
    for (index, value) in entries.into_iter().enumerate() {
        let raw = RawProject::deserialize(value)
            .with_context(|| format!("invalid project entry at index {index}"))?;
        if let Some(record) = normalize_project(raw, index) {
            projects.push(record);
        }
    }

    Ok(projects)
}

pub(super) fn normalize_project(raw: RawProject, index: usize) -> Option<ProjectRecord> {
    let name = raw.name.trim();
    if name.is_empty() {
        warn!("skipping catalog entry {index}: blank project name");
        return None;
    }

    let category = raw.category.as_deref().and_then(|label| {
        let category = Category::from_label(label);
        if category.is_none() {
            warn!("project {name:?} has unknown category {label:?}; treating as uncategorized");
        }
        category
    });

    let description = raw
        .description
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty());

    let mut record = ProjectRecord::new(name, raw.url.trim());
    record.description = description;
    record.category = category;
    Some(record)
}
