use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use log::{debug, warn};

use crate::error::Result;

/// In-memory directory mapping username -> email, with optional
/// mirroring to a flat JSON file.
///
/// The in-memory map and the file are independent until an explicit
/// `save` or `load` call; there is no automatic sync.
#[derive(Default)]
pub struct DirStore {
    entries: HashMap<String, String>,
}

impl DirStore {
    pub fn new() -> DirStore {
        DirStore {
            entries: HashMap::new(),
        }
    }

    /// add a new entry
    ///
    /// return false without overwriting if the username is already present
    pub fn add(&mut self, username: String, email: String) -> bool {
        if self.entries.contains_key(&username) {
            debug!("add rejected, duplicate key {}", username);
            return false;
        }
        self.entries.insert(username, email);
        true
    }

    /// remove an entry by username
    ///
    /// return false if the username is absent
    pub fn remove(&mut self, username: &str) -> bool {
        self.entries.remove(username).is_some()
    }

    /// get email by username
    ///
    /// return None if the username is absent
    pub fn get(&self, username: &str) -> Option<String> {
        self.entries.get(username).cloned()
    }

    /// all usernames, in no particular order
    pub fn list_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// serialize the full mapping to `path` as one flat JSON object,
    /// truncating whatever was there before
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer(&mut writer, &self.entries)?;
        writer.flush()?;
        Ok(())
    }

    /// replace in-memory contents with the mapping parsed from `path`
    ///
    /// a missing file leaves the store untouched; any other failure
    /// (permissions, malformed JSON) is reported
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = match File::open(path.as_ref()) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("nothing to load from {:?}, keeping current entries", path.as_ref());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        self.entries = serde_json::from_reader(BufReader::new(file))?;
        Ok(())
    }
}
