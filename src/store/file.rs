use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Collection, StorageBackend, StoreError};

/// One JSON file per collection.
#[derive(Debug, Clone)]
pub struct FileBackend {
    rooms: PathBuf,
    bookings: PathBuf,
    resort_info: PathBuf,
}

impl FileBackend {
    pub fn new(
        rooms: impl Into<PathBuf>,
        bookings: impl Into<PathBuf>,
        resort_info: impl Into<PathBuf>,
    ) -> Self {
        Self {
            rooms: rooms.into(),
            bookings: bookings.into(),
            resort_info: resort_info.into(),
        }
    }

    pub fn path(&self, collection: Collection) -> &Path {
        match collection {
            Collection::Rooms => &self.rooms,
            Collection::Bookings => &self.bookings,
            Collection::ResortInfo => &self.resort_info,
        }
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path(collection)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { collection, source }),
        }
    }

    // Written to a sibling temp file and renamed over the target, so readers
    // see either the old or the new collection.
    fn write(&self, collection: Collection, contents: &[u8]) -> Result<(), StoreError> {
        let path = self.path(collection);
        let io_err = |source: std::io::Error| StoreError::Io { collection, source };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, contents).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;

        tracing::debug!(collection = %collection, path = %path.display(), "collection written");
        Ok(())
    }
}
