use std::{
    fs::{File, OpenOptions},
    io::{Error, ErrorKind, Read, Seek, Write},
};

use crate::ads::prelude::Snapshot;

pub trait SnapshotStorage {
    fn load(&mut self) -> Result<Option<Snapshot>, Error>;
    fn store(&mut self, snapshot: &Snapshot) -> Result<(), Error>;
    fn from_fs(file: File) -> Self;
}

/// File-backed snapshot storage. The file holds one snapshot: a JSON array
/// of ad objects with the six stable field names (`title`, `price`,
/// `new_price`, `text`, `contact_number`, `date`), order-preserving.
pub struct Storage {
    file: File,
}

impl Storage {
    /// Open the snapshot file, creating it when missing.
    pub fn open(path: &str) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        Ok(Self { file })
    }
}

impl SnapshotStorage for Storage {
    fn from_fs(file: File) -> Self
    where
        Self: Sized,
    {
        Self { file }
    }

    /// Read back the previously persisted snapshot. An empty file means no
    /// snapshot has been stored yet (first run) and loads as `None`.
    fn load(&mut self) -> Result<Option<Snapshot>, Error> {
        self.file.seek(std::io::SeekFrom::Start(0))?;
        let mut contents = String::new();
        self.file.read_to_string(&mut contents)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

        Ok(Some(snapshot))
    }

    /// Overwrite the file with the given snapshot. Written once per cycle,
    /// never appended to.
    fn store(&mut self, snapshot: &Snapshot) -> Result<(), Error> {
        let contents = serde_json::to_string_pretty(snapshot)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

        self.file.seek(std::io::SeekFrom::Start(0))?;
        self.file.set_len(0)?;
        self.file.write_all(contents.as_bytes())?;
        self.file.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{SnapshotStorage, Storage};
    use crate::ads::prelude::AdRecord;

    fn ad(title: &str) -> AdRecord {
        AdRecord {
            title: title.to_string(),
            price: String::from("100"),
            new_price: String::new(),
            text: String::from("Good"),
            contact_number: String::from("061111"),
            date: String::from("2023-01-01"),
        }
    }

    #[test]
    fn test_empty_file_loads_as_first_run() {
        let mut storage = Storage::from_fs(tempfile::tempfile().unwrap());

        assert!(storage.load().unwrap().is_none(), "Empty file is not None");
    }

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let mut storage = Storage::from_fs(tempfile::tempfile().unwrap());
        let snapshot = vec![ad("Phone C"), ad("Phone A"), ad("Phone B")];

        storage.store(&snapshot).unwrap();
        let loaded = storage.load().unwrap().unwrap();

        assert_eq!(loaded, snapshot, "Round trip changed the snapshot");
    }

    #[test]
    fn test_store_overwrites_previous_snapshot() {
        let mut storage = Storage::from_fs(tempfile::tempfile().unwrap());

        let long = vec![ad("Phone A"), ad("Phone B"), ad("Phone C")];
        storage.store(&long).unwrap();
        let short = vec![ad("Phone Z")];
        storage.store(&short).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, short, "Old snapshot content not truncated");
    }

    #[test]
    fn test_persisted_field_names_are_stable() {
        use std::io::{Read, Seek};

        let mut storage = Storage::from_fs(tempfile::tempfile().unwrap());
        storage.store(&vec![ad("Phone X")]).unwrap();

        storage.file.seek(std::io::SeekFrom::Start(0)).unwrap();
        let mut contents = String::new();
        storage.file.read_to_string(&mut contents).unwrap();

        for field in ["title", "price", "new_price", "text", "contact_number", "date"] {
            assert!(
                contents.contains(&format!("\"{field}\"")),
                "Field {field} missing from the persisted snapshot",
            );
        }
    }

    #[test]
    fn test_garbage_content_is_an_error() {
        use std::io::Write;

        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"not json at all").unwrap();
        let mut storage = Storage::from_fs(file);

        assert!(storage.load().is_err(), "Garbage content did not error");
    }
}
