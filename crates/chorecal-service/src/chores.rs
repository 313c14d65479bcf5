//! Chore lifecycle: create, update, delete, and per-date completion.
//!
//! The service owns the in-memory chore list and writes it back through
//! the store after every mutation, mirroring the original app's
//! save-on-every-change behavior. The recurrence engine never goes
//! through this type; it reads plain chore slices.

use chorecal_core::util::date::parse_date;
use chorecal_store::model::{Chore, ChoreUpdate, NewChore};
use chorecal_store::store::JsonStore;

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug)]
pub struct ChoreService {
    store: JsonStore,
    chores: Vec<Chore>,
}

impl ChoreService {
    /// ## Summary
    /// Opens the service over `store`, loading the persisted chore list.
    ///
    /// ## Errors
    /// Returns an error when the store exists but cannot be read.
    pub fn open(store: JsonStore) -> ServiceResult<Self> {
        let chores = store.load()?;
        tracing::debug!(count = chores.len(), "Chore service opened");
        Ok(Self { store, chores })
    }

    #[must_use]
    pub fn chores(&self) -> &[Chore] {
        &self.chores
    }

    #[must_use]
    pub fn get(&self, id: uuid::Uuid) -> Option<&Chore> {
        self.chores.iter().find(|chore| chore.id == id)
    }

    /// ## Summary
    /// Creates a chore with a fresh id and an empty completion map, and
    /// persists the updated list.
    ///
    /// ## Errors
    /// Returns an error when the anchor or end date is not a valid
    /// `YYYY-MM-DD` string, or when persisting fails.
    pub fn add(&mut self, new: NewChore) -> ServiceResult<&Chore> {
        parse_date(&new.date)?;
        if let Some(end) = new.recurrence.as_ref().and_then(|r| r.end_date.as_deref()) {
            parse_date(end)?;
        }

        let chore = Chore {
            id: uuid::Uuid::new_v4(),
            title: new.title,
            description: new.description,
            date: new.date,
            color: new.color,
            recurrence: new.recurrence,
            completed: std::collections::HashMap::new(),
        };
        tracing::info!(chore_id = %chore.id, title = %chore.title, "Chore created");

        self.chores.push(chore);
        self.store.save(&self.chores)?;
        self.chores
            .last()
            .ok_or(ServiceError::InvariantViolation("chore vanished after push"))
    }

    /// ## Summary
    /// Applies a partial field update and persists. Changing `date` or
    /// `recurrence` reinterprets the series from the new anchor; stale
    /// completion entries are left alone.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id, a date error for malformed
    /// updated dates, or a store error when persisting fails.
    pub fn update(&mut self, id: uuid::Uuid, update: ChoreUpdate) -> ServiceResult<&Chore> {
        if let Some(date) = update.date.as_deref() {
            parse_date(date)?;
        }
        if let Some(end) = update
            .recurrence
            .as_ref()
            .and_then(|r| r.as_ref())
            .and_then(|r| r.end_date.as_deref())
        {
            parse_date(end)?;
        }

        let chore = self
            .chores
            .iter_mut()
            .find(|chore| chore.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        update.apply(chore);
        tracing::info!(chore_id = %id, "Chore updated");

        self.store.save(&self.chores)?;
        self.get(id)
            .ok_or(ServiceError::InvariantViolation("chore vanished after update"))
    }

    /// ## Summary
    /// Removes a chore and persists.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id, or a store error when
    /// persisting fails.
    pub fn delete(&mut self, id: uuid::Uuid) -> ServiceResult<()> {
        let before = self.chores.len();
        self.chores.retain(|chore| chore.id != id);
        if self.chores.len() == before {
            return Err(ServiceError::NotFound(id));
        }
        tracing::info!(chore_id = %id, "Chore deleted");

        self.store.save(&self.chores)?;
        Ok(())
    }

    /// ## Summary
    /// Flips the completion flag for one occurrence key and persists.
    /// A key absent from the map toggles to `true`; toggling off leaves a
    /// `false` entry in place rather than removing it. The key is not
    /// checked against the chore's actual series.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id, a date error for a malformed
    /// key, or a store error when persisting fails.
    pub fn toggle_complete(&mut self, id: uuid::Uuid, key: &str) -> ServiceResult<bool> {
        parse_date(key)?;

        let chore = self
            .chores
            .iter_mut()
            .find(|chore| chore.id == id)
            .ok_or(ServiceError::NotFound(id))?;

        let flag = chore.completed.entry(key.to_string()).or_insert(false);
        *flag = !*flag;
        let now = *flag;
        tracing::debug!(chore_id = %id, key, completed = now, "Completion toggled");

        self.store.save(&self.chores)?;
        Ok(now)
    }
}
