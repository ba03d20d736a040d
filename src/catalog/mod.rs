mod load;
mod parse;
mod record;

pub use load::{CatalogSource, load_catalog};
pub use record::{Category, CategoryFilter, ProjectRecord};

#[derive(Clone, Debug)]
pub struct Catalog {
    source: CatalogSource,
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    #[cfg(test)]
    pub fn from_projects(projects: Vec<ProjectRecord>) -> Self {
        Self {
            source: CatalogSource::Builtin,
            projects,
        }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Project featured in the footer suggestion: the first Social project,
    /// falling back to the first entry.
    pub fn spotlight(&self) -> Option<&ProjectRecord> {
        self.projects
            .iter()
            .find(|project| project.category == Some(Category::Social))
            .or_else(|| self.projects.first())
    }
}
