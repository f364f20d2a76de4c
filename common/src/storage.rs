//! Persistent key-value storage and the two encoded slots kept in it.
//!
//! `KeyValueStorage` mirrors the browser Storage API so the same `Store`
//! runs against `window.localStorage` in the app and against
//! [`MemoryStorage`] in tests.
//!
//! A slot that is missing, fails to decode, or does not hold an array of the
//! expected record type loads as an empty collection. Only failures of the
//! backend itself are returned as errors.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};

use crate::codec;
use crate::config::SessionConfig;
use crate::error::{Error, Result};

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removes every key in the storage area, not only the slots.
    fn clear(&mut self) -> Result<()>;
}

/// Storage held in process memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }
}

/// The two independent collections persisted by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Files,
    Logins,
}

pub struct Store<S> {
    backend: S,
    files_key: String,
    logins_key: String,
}

impl<S: KeyValueStorage> Store<S> {
    pub fn new(backend: S, config: &SessionConfig) -> Self {
        Self {
            backend,
            files_key: config.files_key.clone(),
            logins_key: config.logins_key.clone(),
        }
    }

    pub fn key(&self, slot: Slot) -> &str {
        match slot {
            Slot::Files => &self.files_key,
            Slot::Logins => &self.logins_key,
        }
    }

    /// Reads the collection in `slot`, falling back to empty for anything
    /// that is not a valid encoded array of `T`.
    pub fn load<T: DeserializeOwned>(&self, slot: Slot) -> Result<Vec<T>> {
        let key = self.key(slot);
        let Some(text) = self.backend.get_item(key)? else {
            debug!("slot '{}' is empty", key);
            return Ok(Vec::new());
        };

        let Some(value) = codec::decode_value(&text) else {
            if !text.is_empty() {
                warn!("slot '{}' holds an invalid encoding, ignoring it", key);
            }
            return Ok(Vec::new());
        };
        if !value.is_array() {
            warn!("slot '{}' does not hold a collection, ignoring it", key);
            return Ok(Vec::new());
        }

        match serde_json::from_value::<Vec<T>>(value) {
            Ok(records) => {
                debug!("loaded {} record(s) from '{}'", records.len(), key);
                Ok(records)
            }
            Err(err) => {
                warn!("slot '{}' holds unexpected records, ignoring it: {}", key, err);
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites `slot` with the encoding of `records`.
    ///
    /// If encoding fails the slot is still overwritten, with the empty
    /// sentinel, and `Error::Encode` is returned.
    pub fn save<T: Serialize>(&mut self, slot: Slot, records: &[T]) -> Result<()> {
        let key = self.key(slot).to_string();
        match codec::try_encode(records) {
            Ok(text) => {
                self.backend.set_item(&key, &text)?;
                debug!("saved {} record(s) to '{}'", records.len(), key);
                Ok(())
            }
            Err(source) => {
                warn!("could not encode '{}', writing empty sentinel: {}", key, source);
                self.backend.set_item(&key, "")?;
                Err(Error::Encode { key, source })
            }
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.backend.clear()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, LoginRecord, StudyFile, Subject};
    use serde::ser::{self, Serializer};

    fn store() -> Store<MemoryStorage> {
        Store::new(MemoryStorage::new(), &SessionConfig::default())
    }

    fn file(id: &str, name: &str) -> StudyFile {
        StudyFile {
            id: id.to_string(),
            name: name.to_string(),
            subject: Subject::Beee,
            category: Category::Notes,
            unit: 3,
            url: format!("https://example.org/{}.pdf", id),
            upload_date: "1/1/2025, 12:00:00 PM".to_string(),
        }
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(ser::Error::custom("cannot serialise this"))
        }
    }

    #[test]
    fn test_untouched_slot_loads_empty() {
        let store = store();
        assert!(store.load::<StudyFile>(Slot::Files).unwrap().is_empty());
        assert!(store.load::<LoginRecord>(Slot::Logins).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let mut store = store();
        let files = vec![file("2", "second"), file("1", "first")];
        store.save(Slot::Files, &files).unwrap();

        assert_eq!(store.load::<StudyFile>(Slot::Files).unwrap(), files);
        assert!(store.load::<LoginRecord>(Slot::Logins).unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let mut store = store();
        store.save(Slot::Files, &[file("1", "a"), file("2", "b")]).unwrap();
        store.save::<StudyFile>(Slot::Files, &[]).unwrap();
        assert!(store.load::<StudyFile>(Slot::Files).unwrap().is_empty());
    }

    #[test]
    fn test_units_outside_suggested_range_still_load() {
        let mut store = store();
        let mut negative = file("1", "negative unit");
        negative.unit = -1;
        let mut large = file("2", "large unit");
        large.unit = 4_000_000_000;
        let files = vec![file("0", "regular"), negative, large];

        let key = store.key(Slot::Files).to_string();
        store.backend_mut().set_item(&key, &codec::encode(&files)).unwrap();

        let loaded: Vec<StudyFile> = store.load(Slot::Files).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].unit, -1);
        assert_eq!(loaded, files);
    }

    #[test]
    fn test_hand_written_blob_with_negative_unit_loads() {
        let records = serde_json::json!([
            {"id": "a", "name": "A", "subject": "Physics", "category": "Notes",
             "unit": 2, "url": "u", "uploadDate": "d"},
            {"id": "b", "name": "B", "subject": "M-I", "category": "Solved PYQs",
             "unit": -1, "url": "u", "uploadDate": "d"}
        ]);
        let mut store = store();
        let key = store.key(Slot::Files).to_string();
        store.backend_mut().set_item(&key, &codec::encode(&records)).unwrap();

        let loaded: Vec<StudyFile> = store.load(Slot::Files).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].subject, Subject::MathsOne);
    }

    #[test]
    fn test_corrupt_slots_load_empty() {
        let mut store = store();
        let key = store.key(Slot::Files).to_string();

        for blob in [
            "garbage!".to_string(),
            String::new(),
            codec::encode(&serde_json::json!({"id": "not an array"})),
            codec::encode(&serde_json::json!([{"unexpected": true}])),
        ] {
            store.backend_mut().set_item(&key, &blob).unwrap();
            assert!(store.load::<StudyFile>(Slot::Files).unwrap().is_empty());
        }
    }

    #[test]
    fn test_encode_failure_writes_sentinel_and_reports() {
        let mut store = store();
        store.save(Slot::Files, &[file("1", "a")]).unwrap();

        let err = store.save(Slot::Files, &[Unserializable]).unwrap_err();
        assert!(err.is_data_loss());

        let key = store.key(Slot::Files).to_string();
        assert_eq!(store.backend().get_item(&key).unwrap(), Some(String::new()));
        assert!(store.load::<StudyFile>(Slot::Files).unwrap().is_empty());
    }

    #[test]
    fn test_slots_use_configured_keys() {
        let config = SessionConfig::default().with_keys("files", "logins");
        let mut store = Store::new(MemoryStorage::new(), &config);
        store.save(Slot::Logins, &Vec::<LoginRecord>::new()).unwrap();

        assert!(store.backend().get_item("logins").unwrap().is_some());
        assert!(store.backend().get_item("files").unwrap().is_none());
    }

    #[test]
    fn test_clear_wipes_everything() {
        let mut store = store();
        store.backend_mut().set_item("unrelated", "x").unwrap();
        store.save(Slot::Files, &[file("1", "a")]).unwrap();
        store.clear().unwrap();
        assert!(store.backend().is_empty());
    }
}
