//! CRUD and membership store for user-curated exhibitions.

use chrono::Utc;
use model::{Artwork, Exhibition};
use parking_lot::Mutex;
use rand::Rng;

use crate::error::StoreError;
use crate::storage::StorageBackend;

/// Exhibition store over an injected storage slot.
///
/// Every operation reloads the collection from the backend; every mutation
/// persists the full updated collection before returning, so no
/// partial-write state is ever observable. The mutex serializes
/// read-modify-persist cycles across concurrent callers.
pub struct ExhibitionStore {
    backend: Box<dyn StorageBackend>,
    lock: Mutex<()>,
}

impl ExhibitionStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            lock: Mutex::new(()),
        }
    }

    /// All exhibitions in stored order. A missing or unreadable payload is
    /// treated as an empty collection, never an error.
    pub fn list(&self) -> Vec<Exhibition> {
        let _guard = self.lock.lock();
        self.load()
    }

    /// Lookup by exact id.
    pub fn get(&self, id: &str) -> Option<Exhibition> {
        let _guard = self.lock.lock();
        self.load().into_iter().find(|exhibition| exhibition.id == id)
    }

    /// Create and persist a new, empty exhibition.
    ///
    /// Name validity (non-blank, length bounds) is the caller's contract;
    /// the store does not re-validate it.
    pub fn create(&self, name: &str, description: &str) -> Result<Exhibition, StoreError> {
        let _guard = self.lock.lock();
        let now = Utc::now();
        let exhibition = Exhibition {
            id: generate_id(),
            name: name.to_string(),
            description: description.to_string(),
            artworks: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        let mut exhibitions = self.load();
        exhibitions.push(exhibition.clone());
        self.persist(&exhibitions)?;
        Ok(exhibition)
    }

    /// Merge the provided fields and refresh `updated_at`. `None` fields are
    /// left unchanged. Returns `Ok(None)` without side effects when the id
    /// is unknown.
    pub fn update(
        &self,
        id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Exhibition>, StoreError> {
        let _guard = self.lock.lock();
        let mut exhibitions = self.load();
        let Some(exhibition) = exhibitions.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            exhibition.name = name.to_string();
        }
        if let Some(description) = description {
            exhibition.description = description.to_string();
        }
        exhibition.updated_at = Utc::now();
        let updated = exhibition.clone();
        self.persist(&exhibitions)?;
        Ok(Some(updated))
    }

    /// Remove the exhibition. `Ok(false)` when the id is unknown; nothing is
    /// persisted in that case.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.lock.lock();
        let mut exhibitions = self.load();
        let before = exhibitions.len();
        exhibitions.retain(|exhibition| exhibition.id != id);
        if exhibitions.len() == before {
            return Ok(false);
        }
        self.persist(&exhibitions)?;
        Ok(true)
    }

    /// Append the artwork to the exhibition. Adding an artwork that is
    /// already present is an idempotent no-op: the exhibition is returned
    /// unchanged and `updated_at` keeps its old value.
    pub fn add_artwork(
        &self,
        exhibition_id: &str,
        artwork: Artwork,
    ) -> Result<Option<Exhibition>, StoreError> {
        let _guard = self.lock.lock();
        let mut exhibitions = self.load();
        let Some(exhibition) = exhibitions.iter_mut().find(|e| e.id == exhibition_id) else {
            return Ok(None);
        };
        if exhibition.contains_artwork(&artwork.id) {
            return Ok(Some(exhibition.clone()));
        }
        exhibition.artworks.push(artwork);
        exhibition.updated_at = Utc::now();
        let updated = exhibition.clone();
        self.persist(&exhibitions)?;
        Ok(Some(updated))
    }

    /// Remove any artwork with the given id. Always refreshes `updated_at`
    /// and persists, whether or not something was removed.
    pub fn remove_artwork(
        &self,
        exhibition_id: &str,
        artwork_id: &str,
    ) -> Result<Option<Exhibition>, StoreError> {
        let _guard = self.lock.lock();
        let mut exhibitions = self.load();
        let Some(exhibition) = exhibitions.iter_mut().find(|e| e.id == exhibition_id) else {
            return Ok(None);
        };
        exhibition.artworks.retain(|artwork| artwork.id != artwork_id);
        exhibition.updated_at = Utc::now();
        let updated = exhibition.clone();
        self.persist(&exhibitions)?;
        Ok(Some(updated))
    }

    /// Membership check: within one exhibition when `exhibition_id` is given
    /// (false for an unknown exhibition), across the whole collection
    /// otherwise.
    pub fn is_in_exhibition(&self, artwork_id: &str, exhibition_id: Option<&str>) -> bool {
        let _guard = self.lock.lock();
        let exhibitions = self.load();
        match exhibition_id {
            Some(id) => exhibitions
                .iter()
                .find(|exhibition| exhibition.id == id)
                .map(|exhibition| exhibition.contains_artwork(artwork_id))
                .unwrap_or(false),
            None => exhibitions
                .iter()
                .any(|exhibition| exhibition.contains_artwork(artwork_id)),
        }
    }

    /// All exhibitions containing the artwork, in stored order.
    pub fn exhibitions_containing(&self, artwork_id: &str) -> Vec<Exhibition> {
        let _guard = self.lock.lock();
        self.load()
            .into_iter()
            .filter(|exhibition| exhibition.contains_artwork(artwork_id))
            .collect()
    }

    /// Serialize the whole collection, pretty-printed.
    pub fn export(&self) -> Result<String, StoreError> {
        let _guard = self.lock.lock();
        Ok(serde_json::to_string_pretty(&self.load())?)
    }

    /// Replace the whole collection with a previously exported payload.
    ///
    /// The payload is validated structurally before anything is written; any
    /// parse failure or shape violation leaves the stored collection
    /// untouched and returns false.
    pub fn import(&self, payload: &str) -> bool {
        let _guard = self.lock.lock();
        let exhibitions: Vec<Exhibition> = match serde_json::from_str(payload) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("import rejected, payload is not an exhibition list: {}", e);
                return false;
            }
        };
        let violations = validate_import(&exhibitions);
        if !violations.is_empty() {
            for violation in &violations {
                tracing::warn!("import rejected: {}", violation);
            }
            return false;
        }
        match self.persist(&exhibitions) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("import failed to persist: {}", e);
                false
            }
        }
    }

    fn load(&self) -> Vec<Exhibition> {
        let payload = match self.backend.load() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read exhibitions, treating as empty: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&payload) {
            Ok(exhibitions) => exhibitions,
            Err(e) => {
                tracing::warn!("stored exhibitions failed to parse, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&self, exhibitions: &[Exhibition]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(exhibitions)?;
        self.backend.save(&payload)?;
        Ok(())
    }
}

/// Structural check applied before an import replaces the collection: every
/// entry needs a non-empty id and a non-empty name. One violation per
/// offending field.
fn validate_import(exhibitions: &[Exhibition]) -> Vec<String> {
    let mut violations = Vec::new();
    for (index, exhibition) in exhibitions.iter().enumerate() {
        if exhibition.id.is_empty() {
            violations.push(format!("exhibition #{}: empty id", index));
        }
        if exhibition.name.is_empty() {
            violations.push(format!("exhibition #{}: empty name", index));
        }
    }
    violations
}

/// Time-plus-randomness id in the `exhibition-<millis>-<suffix>` shape.
/// Unique enough for a single-process store; makes no collision-resistance
/// claims beyond that.
fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .map(|_| char::from_digit(rng.random_range(0..36), 36).unwrap())
        .collect();
    format!("exhibition-{}-{}", millis, suffix)
}
