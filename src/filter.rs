use crate::catalog::{Catalog, CategoryFilter, ProjectRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    category: CategoryFilter,
    search: String,
}

impl FilterState {
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }

    pub fn set_search_term(&mut self, text: &str) -> bool {
        if self.search == text {
            return false;
        }
        self.search = text.to_owned();
        true
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.category.accepts(record.category)
            && record
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    pub fn visible_projects(&self, catalog: &Catalog) -> Vec<ProjectRecord> {
        catalog
            .projects()
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
