use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use super::parse::parse_catalog_json;
use super::Catalog;

const BUILTIN_CATALOG: &str = include_str!("../../assets/projects.json");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Builtin => "built-in catalog".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

pub fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    let projects = match source {
        CatalogSource::Builtin => {
            parse_catalog_json(BUILTIN_CATALOG).context("failed to parse built-in catalog")?
        }
        CatalogSource::File(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            parse_catalog_json(&raw)
                .with_context(|| format!("failed to parse catalog {}", path.display()))?
        }
    };

    let catalog = Catalog {
        source: source.clone(),
        projects,
    };
    if catalog.is_empty() {
        warn!("{} contains no projects", source.describe());
    } else {
        info!("loaded {} projects from {}", catalog.len(), source.describe());
    }

    Ok(catalog)
}
