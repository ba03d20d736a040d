use log::debug;

use crate::catalog::ProjectRecord;

#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected: Option<ProjectRecord>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<&ProjectRecord> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, record: &ProjectRecord) -> bool {
        self.selected.as_ref() == Some(record)
    }

    pub fn select(&mut self, record: ProjectRecord) {
        if self.is_selected(&record) {
            return;
        }
        debug!("selected project {:?}", record.name);
        self.selected = Some(record);
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.selected.take() {
            debug!("cleared selection of {:?}", previous.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_replaces_previous_selection() {
        let kuru = ProjectRecord::new("Kuru", "https://kuru.io");
        let pyth = ProjectRecord::new("Pyth Network", "https://pyth.network");
        let mut selection = SelectionState::default();

        selection.select(kuru.clone());
        selection.select(pyth.clone());

        assert_eq!(selection.selected(), Some(&pyth));
        assert!(!selection.is_selected(&kuru));
    }

    #[test]
    fn clear_empties_the_selection() {
        let mut selection = SelectionState::default();
        selection.select(ProjectRecord::new("Kuru", "https://kuru.io"));

        selection.clear();

        assert!(selection.selected().is_none());
        selection.clear();
        assert!(selection.selected().is_none());
    }
}
