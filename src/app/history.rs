//! Snapshot-basiertes Undo/Redo über Volume-Commands.
//!
//! Jedes Command hält pro betroffenem Volume ein vollständiges
//! Vorher/Nachher-Snapshot-Paar (reine Daten, keine Closures) sowie die
//! Selektion vor und nach der Mutation. Undo wendet die Vorher-Seite an,
//! Redo die Nachher-Seite — `None` auf einer Seite heißt: das Volume
//! existierte dort nicht (Anlage bzw. Löschung).

use crate::app::state::SelectionState;
use crate::core::{Volume, VolumeRegistry};

/// Vorher/Nachher-Snapshot eines einzelnen Volumes.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotPair {
    pub id: u64,
    /// Zustand vor der Mutation (`None` = existierte nicht)
    pub before: Option<Volume>,
    /// Zustand nach der Mutation (`None` = wurde entfernt)
    pub after: Option<Volume>,
}

impl SnapshotPair {
    /// Paar für eine Neuanlage.
    pub fn created(after: Volume) -> Self {
        Self {
            id: after.id,
            before: None,
            after: Some(after),
        }
    }

    /// Paar für eine Mutation.
    pub fn updated(before: Volume, after: Volume) -> Self {
        debug_assert_eq!(before.id, after.id);
        Self {
            id: before.id,
            before: Some(before),
            after: Some(after),
        }
    }

    /// Paar für eine Löschung.
    pub fn removed(before: Volume) -> Self {
        Self {
            id: before.id,
            before: Some(before),
            after: None,
        }
    }
}

/// Ein vollständig umkehrbares Command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRecord {
    pub volumes: Vec<SnapshotPair>,
    pub selection_before: Vec<u64>,
    pub selection_after: Vec<u64>,
}

/// Seite eines Commands, die angewendet werden soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// Wendet eine Command-Seite auf Registry und Selektion an.
///
/// Reine Wiederherstellungsfunktion über Snapshot-Daten; hält keinerlei
/// Referenzen auf lebende Objekte.
pub fn apply_side(
    registry: &mut VolumeRegistry,
    selection: &mut SelectionState,
    record: &CommandRecord,
    side: Side,
) {
    for pair in &record.volumes {
        let snapshot = match side {
            Side::Before => &pair.before,
            Side::After => &pair.after,
        };
        match snapshot {
            Some(volume) => registry.restore(volume.clone()),
            None => {
                registry.remove(pair.id);
            }
        }
    }

    let ids = match side {
        Side::Before => &record.selection_before,
        Side::After => &record.selection_after,
    };
    selection.set_ids(ids);
}

/// Undo/Redo-Stack mit Tiefenbegrenzung und Replay-Schutz.
#[derive(Debug)]
pub struct CommandStack {
    undo_stack: Vec<CommandRecord>,
    redo_stack: Vec<CommandRecord>,
    max_depth: usize,
    /// Modus-Flag: während ein Command angewendet wird, ist das Aufzeichnen
    /// neuer Commands unterdrückt. Teil des Stack-Vertrags, kein globaler
    /// Zustand.
    replaying: bool,
}

impl CommandStack {
    /// Erstellt einen neuen Stack mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
            replaying: false,
        }
    }

    /// Zeichnet ein Command auf. Leert den Redo-Stack; No-op während Replay.
    pub fn record(&mut self, record: CommandRecord) {
        if self.replaying {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(record);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Nimmt das oberste Undo-Command; der Aufrufer wendet es an und legt es
    /// über `stash_undone` auf den Redo-Stack zurück.
    pub fn pop_undo(&mut self) -> Option<CommandRecord> {
        self.undo_stack.pop()
    }

    /// Nimmt das oberste Redo-Command.
    pub fn pop_redo(&mut self) -> Option<CommandRecord> {
        self.redo_stack.pop()
    }

    /// Legt ein rückgängig gemachtes Command auf den Redo-Stack.
    pub fn stash_undone(&mut self, record: CommandRecord) {
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(record);
    }

    /// Legt ein wiederholtes Command zurück auf den Undo-Stack
    /// (ohne den Redo-Stack zu leeren).
    pub fn stash_redone(&mut self, record: CommandRecord) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(record);
    }

    /// Betritt den Replay-Modus (Aufzeichnung unterdrückt).
    pub fn begin_replay(&mut self) {
        self.replaying = true;
    }

    /// Verlässt den Replay-Modus.
    pub fn end_replay(&mut self) {
        self.replaying = false;
    }

    /// `true` während ein Command angewendet wird.
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(id: u64, x: f32) -> Volume {
        Volume::new(id, 100.0, 100.0, 100.0, 0.0, x, 0.0)
    }

    fn create_record(id: u64, x: f32) -> CommandRecord {
        CommandRecord {
            volumes: vec![SnapshotPair::created(volume(id, x))],
            selection_before: vec![],
            selection_after: vec![id],
        }
    }

    #[test]
    fn empty_stack_cannot_undo_or_redo() {
        let stack = CommandStack::new_with_capacity(10);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
    }

    #[test]
    fn record_enables_undo_and_clears_redo() {
        let mut stack = CommandStack::new_with_capacity(10);
        stack.record(create_record(1, 0.0));
        let undone = stack.pop_undo().expect("Undo vorhanden");
        stack.stash_undone(undone);
        assert!(stack.can_redo());

        stack.record(create_record(2, 10.0));
        assert!(!stack.can_redo());
    }

    #[test]
    fn record_is_suppressed_during_replay() {
        let mut stack = CommandStack::new_with_capacity(10);
        stack.begin_replay();
        stack.record(create_record(1, 0.0));
        stack.end_replay();
        assert!(!stack.can_undo());
    }

    #[test]
    fn respects_max_depth() {
        let mut stack = CommandStack::new_with_capacity(3);
        for i in 1..=5 {
            stack.record(create_record(i, i as f32));
        }
        let mut undo_count = 0;
        while let Some(record) = stack.pop_undo() {
            stash_and_count(&mut stack, record, &mut undo_count);
        }
        assert_eq!(undo_count, 3);
    }

    fn stash_and_count(stack: &mut CommandStack, record: CommandRecord, count: &mut usize) {
        stack.stash_undone(record);
        *count += 1;
    }

    #[test]
    fn apply_side_restores_creation_and_removal() {
        let mut registry = VolumeRegistry::new();
        let mut selection = SelectionState::new();
        let record = create_record(1, 5.0);

        apply_side(&mut registry, &mut selection, &record, Side::After);
        assert!(registry.contains(1));
        assert_eq!(selection.ids(), vec![1]);

        apply_side(&mut registry, &mut selection, &record, Side::Before);
        assert!(!registry.contains(1));
        assert!(selection.ids().is_empty());
    }

    #[test]
    fn apply_side_restores_update() {
        let mut registry = VolumeRegistry::new();
        let mut selection = SelectionState::new();
        let before = volume(1, 0.0);
        let mut after = before.clone();
        after.center.x = 500.0;
        registry.restore(after.clone());

        let record = CommandRecord {
            volumes: vec![SnapshotPair::updated(before.clone(), after)],
            selection_before: vec![1],
            selection_after: vec![1],
        };

        apply_side(&mut registry, &mut selection, &record, Side::Before);
        assert_eq!(registry.get(1).expect("vorhanden").center.x, 0.0);
    }
}
