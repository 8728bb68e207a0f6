use std::collections::HashMap;
use std::sync::Mutex;

use super::{Collection, StorageBackend, StoreError};

/// Keeps each collection's serialized bytes in memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: Mutex<HashMap<Collection, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn insert(&self, collection: Collection, contents: Vec<u8>) {
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(collection, contents);
    }

    pub fn contents(&self, collection: Collection) -> Option<Vec<u8>> {
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&collection)
            .cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.contents(collection))
    }

    fn write(&self, collection: Collection, contents: &[u8]) -> Result<(), StoreError> {
        self.insert(collection, contents.to_vec());
        Ok(())
    }
}
