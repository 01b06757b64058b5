//! In-memory slot store for tests and headless (demo) composition.

use std::collections::HashMap;
use std::sync::Mutex;

use super::SlotStore;

/// `HashMap`-backed slot store. Same never-fail contract as the file store;
/// here nothing can actually fail.
#[derive(Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn load(&self, slot: &str) -> Option<String> {
        self.slots.lock().unwrap().get(slot).cloned()
    }

    fn save(&self, slot: &str, value: &str) {
        self.slots
            .lock()
            .unwrap()
            .insert(slot.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slot_is_none() {
        let store = MemorySlotStore::new();
        assert_eq!(store.load("prepnova_user"), None);
    }

    #[test]
    fn test_save_load_overwrite() {
        let store = MemorySlotStore::new();
        store.save("prepnova_user", "a");
        store.save("prepnova_user", "b");
        assert_eq!(store.load("prepnova_user"), Some("b".to_string()));
    }
}
