//! Die zentrale Volume-Registry mit ID-Vergabe und Wiederherstellung.

use indexmap::IndexMap;

use super::Volume;

/// Container für alle Volumes der Szene.
///
/// Die Einfügereihenfolge ist tragend: der Feature-Snap bricht Gleichstände
/// über die Registry-Reihenfolge, daher IndexMap statt HashMap.
#[derive(Debug, Clone)]
pub struct VolumeRegistry {
    volumes: IndexMap<u64, Volume>,
    next_id: u64,
}

impl Default for VolumeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeRegistry {
    /// Erstellt eine neue leere Registry.
    pub fn new() -> Self {
        Self {
            volumes: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Vergibt die nächste freie ID. IDs werden nie wiederverwendet,
    /// außer durch Undo-getriebene Wiederherstellung.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fügt ein neues Volume hinzu (ID muss über `allocate_id` vergeben sein).
    pub fn add(&mut self, volume: Volume) {
        debug_assert!(!self.volumes.contains_key(&volume.id));
        self.volumes.insert(volume.id, volume);
    }

    /// Stellt ein Volume aus einem Snapshot wieder her (Upsert unter alter ID).
    ///
    /// Hält `next_id` vor wiederhergestellten IDs, damit spätere Neuanlagen
    /// keine Kollision erzeugen.
    pub fn restore(&mut self, volume: Volume) {
        self.next_id = self.next_id.max(volume.id + 1);
        self.volumes.insert(volume.id, volume);
    }

    /// Gibt ein Volume per ID zurück.
    pub fn get(&self, id: u64) -> Option<&Volume> {
        self.volumes.get(&id)
    }

    /// Prüft ob die ID existiert.
    pub fn contains(&self, id: u64) -> bool {
        self.volumes.contains_key(&id)
    }

    /// Mutiert ein Volume über einen Mutator. Gibt `false` zurück wenn die
    /// ID nicht existiert.
    pub fn update(&mut self, id: u64, mutate: impl FnOnce(&mut Volume)) -> bool {
        let Some(volume) = self.volumes.get_mut(&id) else {
            return false;
        };
        mutate(volume);
        true
    }

    /// Entfernt ein Volume. `shift_remove` erhält die Einfügereihenfolge
    /// der verbleibenden Volumes (Snap-Gleichstandsregel).
    pub fn remove(&mut self, id: u64) -> Option<Volume> {
        self.volumes.shift_remove(&id)
    }

    /// Iterator über alle Volumes in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Volume> {
        self.volumes.values()
    }

    /// Gibt die Anzahl der Volumes zurück.
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Gibt `true` zurück, wenn die Registry leer ist.
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}
