//! Auswahlbezogener Anwendungszustand.

use indexmap::IndexSet;

/// Menge der aktuell selektierten Volume-IDs.
///
/// IndexSet für deterministische Reihenfolge in Report und Snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_ids: IndexSet<u64>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_ids: IndexSet::new(),
        }
    }

    /// Prüft ob die ID selektiert ist.
    pub fn contains(&self, id: u64) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Gibt `true` zurück wenn genau diese ID die gesamte Selektion ist.
    pub fn is_sole_selection(&self, id: u64) -> bool {
        self.selected_ids.len() == 1 && self.contains(id)
    }

    /// IDs als Vec (für Command-Snapshots).
    pub fn ids(&self) -> Vec<u64> {
        self.selected_ids.iter().copied().collect()
    }

    /// Ersetzt die Selektion durch die übergebenen IDs.
    pub fn set_ids(&mut self, ids: &[u64]) {
        self.selected_ids = ids.iter().copied().collect();
    }

    /// Entfernt eine ID (beim Löschen des Volumes).
    pub fn prune(&mut self, id: u64) {
        self.selected_ids.shift_remove(&id);
    }
}
