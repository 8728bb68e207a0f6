pub mod file;
pub mod memory;

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Booking, ResortInfo, Room};

pub use file::FileBackend;
pub use memory::MemoryBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Rooms,
    Bookings,
    ResortInfo,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Rooms => "rooms",
            Collection::Bookings => "bookings",
            Collection::ResortInfo => "resort_info",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} data is missing")]
    Missing(Collection),

    #[error("failed to access {collection} data: {source}")]
    Io {
        collection: Collection,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {collection} data: {source}")]
    Malformed {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw byte storage for whole collections.
pub trait StorageBackend: Send + Sync {
    /// `Ok(None)` when the collection has never been written.
    fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>, StoreError>;
    fn write(&self, collection: Collection, contents: &[u8]) -> Result<(), StoreError>;
}

/// Whole-collection JSON persistence over a [`StorageBackend`].
///
/// Every load materializes a fresh `Vec`; nothing is cached between calls.
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    write_lock: Mutex<()>,
}

impl Store {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// Load a collection, treating a missing one as empty.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        match self.backend.read(collection)? {
            Some(bytes) => decode(collection, &bytes),
            None => Ok(Vec::new()),
        }
    }

    /// Load a collection that must already exist.
    pub fn load_existing<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, StoreError> {
        match self.backend.read(collection)? {
            Some(bytes) => decode(collection, &bytes),
            None => Err(StoreError::Missing(collection)),
        }
    }

    /// Overwrite a collection with `records`, pretty-printed with a 4-space indent.
    pub fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut ser)
            .map_err(|source| StoreError::Malformed { collection, source })?;
        self.backend.write(collection, &buf)
    }

    /// Run `f` while holding the store-wide write lock, so a
    /// load/check/save cycle cannot interleave with another one.
    pub fn transaction<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(self)
    }

    pub fn rooms(&self) -> Result<Vec<Room>, StoreError> {
        self.load(Collection::Rooms)
    }

    pub fn bookings(&self) -> Result<Vec<Booking>, StoreError> {
        self.load(Collection::Bookings)
    }

    pub fn save_bookings(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        self.save(Collection::Bookings, bookings)
    }

    pub fn resort_info(&self) -> Result<Vec<ResortInfo>, StoreError> {
        self.load_existing(Collection::ResortInfo)
    }
}

fn decode<T: DeserializeOwned>(collection: Collection, bytes: &[u8]) -> Result<Vec<T>, StoreError> {
    serde_json::from_slice(bytes).map_err(|source| StoreError::Malformed { collection, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(name: &str, room_no: u32, ci: (i32, u32, u32), co: (i32, u32, u32)) -> Booking {
        Booking {
            name: name.to_string(),
            room_no,
            room_type: "Deluxe".to_string(),
            check_in: NaiveDate::from_ymd_opt(ci.0, ci.1, ci.2).unwrap(),
            check_out: NaiveDate::from_ymd_opt(co.0, co.1, co.2).unwrap(),
        }
    }

    #[test]
    fn test_missing_collection_loads_empty() {
        let store = Store::in_memory();
        assert!(store.rooms().unwrap().is_empty());
        assert!(store.bookings().unwrap().is_empty());
    }

    #[test]
    fn test_missing_resort_info_is_an_error() {
        let store = Store::in_memory();
        assert!(matches!(
            store.resort_info(),
            Err(StoreError::Missing(Collection::ResortInfo))
        ));
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = Store::in_memory();
        let bookings = vec![
            booking("Zed", 102, (2025, 3, 1), (2025, 3, 2)),
            booking("Asha", 101, (2025, 1, 1), (2025, 1, 3)),
        ];
        store.save_bookings(&bookings).unwrap();
        assert_eq!(store.bookings().unwrap(), bookings);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let backend = Arc::new(MemoryBackend::default());
        let store = Store::new(backend.clone());
        store
            .save_bookings(&[booking("Asha", 101, (2025, 1, 1), (2025, 1, 3))])
            .unwrap();

        let raw = backend.contents(Collection::Bookings).unwrap();
        let text = String::from_utf8(raw).unwrap();
        assert!(text.starts_with("[\n    {\n        \"name\": \"Asha\""));
        assert!(text.contains("\"check_in\": \"2025-01-01\""));
    }

    #[test]
    fn test_malformed_data_is_reported() {
        let backend = Arc::new(MemoryBackend::default());
        backend.insert(Collection::Rooms, b"{not json".to_vec());
        let store = Store::new(backend);
        assert!(matches!(
            store.rooms(),
            Err(StoreError::Malformed { collection: Collection::Rooms, .. })
        ));
    }

    #[test]
    fn test_transaction_returns_closure_value() {
        let store = Store::in_memory();
        let count = store.transaction(|s| s.bookings().map(|b| b.len()));
        assert_eq!(count.unwrap(), 0);
    }
}
