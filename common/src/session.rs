//! Session controller for the dashboard.
//!
//! A `Session` owns the current role, the in-memory file and login
//! collections, and the `Store` they are mirrored into. It is created by the
//! top-level component and handed to whichever surface is active; nothing
//! here is global.
//!
//! Lifecycle
//! - `new` builds an unready session in the configured initial role.
//! - `initialize` hydrates both collections once. An unexpected storage
//!   failure wipes the whole storage area and starts from empty.
//! - `login`, `logout` and `sync_files` then run one at a time, each writing
//!   through to storage immediately when it changes a collection.

use log::{error, info, warn};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::model::{display_timestamp, Credentials, LoginRecord, Role, StudyFile};
use crate::routing::{surface_for, Surface};
use crate::sanitize::sanitize;
use crate::storage::{KeyValueStorage, Slot, Store};

pub struct Session<S> {
    store: Store<S>,
    role: Role,
    files: Vec<StudyFile>,
    logins: Vec<LoginRecord>,
    max_login_records: usize,
    ready: bool,
}

impl<S: KeyValueStorage> Session<S> {
    pub fn new(backend: S, config: SessionConfig) -> Self {
        Self {
            store: Store::new(backend, &config),
            role: config.initial_role,
            files: Vec::new(),
            logins: Vec::new(),
            max_login_records: config.max_login_records,
            ready: false,
        }
    }

    /// Loads both collections from storage and marks the session ready.
    ///
    /// Corrupt slots come back empty from the store. Any error the store does
    /// return is treated as a broken storage area: everything is cleared and
    /// both collections start empty.
    pub fn initialize(&mut self) {
        if self.ready {
            warn!("session already initialized, ignoring");
            return;
        }

        match self.hydrate() {
            Ok((files, logins)) => {
                self.files = files;
                self.logins = logins;
            }
            Err(err) => {
                error!("storage is unreadable, resetting it: {}", err);
                if let Err(err) = self.store.clear() {
                    error!("could not clear storage: {}", err);
                }
                self.files = Vec::new();
                self.logins = Vec::new();
            }
        }

        self.ready = true;
        info!(
            "session ready with {} file(s) and {} login record(s)",
            self.files.len(),
            self.logins.len()
        );
    }

    fn hydrate(&self) -> Result<(Vec<StudyFile>, Vec<LoginRecord>)> {
        let files = self.store.load(Slot::Files)?;
        let logins = self.store.load(Slot::Logins)?;
        Ok((files, logins))
    }

    /// Switches to `role`.
    ///
    /// A student login with credentials is recorded first: the email is
    /// sanitized, the record goes to the front of the history, the history is
    /// capped and written to storage. The role changes even when that write
    /// fails; the error is returned afterwards.
    pub fn login(&mut self, role: Role, credentials: Option<Credentials>) -> Result<()> {
        let mut persisted = Ok(());

        if let (Role::Student, Some(credentials)) = (role, credentials) {
            let record = LoginRecord {
                email: sanitize(&credentials.email),
                password: credentials.password,
                login_time: display_timestamp(),
            };
            self.logins.insert(0, record);
            self.logins.truncate(self.max_login_records);
            persisted = self.store.save(Slot::Logins, &self.logins);
        }

        self.role = role;
        info!("signed in as {}", role.label());
        persisted
    }

    /// Returns to the anonymous role. Collections stay loaded.
    pub fn logout(&mut self) {
        info!("signed out from {}", self.role.label());
        self.role = Role::Anonymous;
    }

    /// Replaces the whole file collection and persists it.
    pub fn sync_files(&mut self, files: Vec<StudyFile>) -> Result<()> {
        self.files = files;
        self.store.save(Slot::Files, &self.files)
    }

    /// Appends `file` and persists the result.
    pub fn add_file(&mut self, file: StudyFile) -> Result<()> {
        let mut next = self.files.clone();
        next.push(file);
        self.sync_files(next)
    }

    /// Removes the file with `id`. Returns `Ok(false)` without writing when
    /// no such file exists.
    pub fn remove_file(&mut self, id: &str) -> Result<bool> {
        if !self.files.iter().any(|f| f.id == id) {
            return Ok(false);
        }
        let next = self.files.iter().filter(|f| f.id != id).cloned().collect();
        self.sync_files(next)?;
        Ok(true)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn surface(&self) -> Surface {
        surface_for(self.role)
    }

    pub fn files(&self) -> &[StudyFile] {
        &self.files
    }

    pub fn logins(&self) -> &[LoginRecord] {
        &self.logins
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store<S> {
        &mut self.store
    }
}
