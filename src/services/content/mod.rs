//! Content item service.
//! CRUD over a borrowed content store: id assignment, timestamp stamping,
//! and the day-to-day move that backs rescheduling.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};

use crate::models::content_item::ContentItem;
use crate::services::store::ContentStore;
use crate::utils::date::date_key;

/// Service for managing content items kept in a [`ContentStore`]
pub struct ContentService<'a, S: ContentStore> {
    store: &'a mut S,
    next_id: i64,
}

impl<'a, S: ContentStore> ContentService<'a, S> {
    /// Create a new ContentService over a store.
    /// Id assignment continues from the highest id already present.
    pub fn new(store: &'a mut S) -> Self {
        let max_id = store
            .keys()
            .iter()
            .flat_map(|key| store.get(key))
            .filter_map(|item| item.id)
            .max()
            .unwrap_or(0);
        Self {
            store,
            next_id: max_id + 1,
        }
    }

    /// Add an item to a day, appending it to that day's sequence
    pub fn add(&mut self, date: NaiveDate, mut item: ContentItem) -> Result<ContentItem> {
        item.validate().map_err(|e| anyhow!(e))?;

        let now = Local::now();
        item.id = Some(self.next_id);
        item.created_at = Some(now);
        item.updated_at = Some(now);
        self.next_id += 1;

        let key = date_key(date);
        let mut items = self.store.get(&key);
        items.push(item.clone());
        self.store.set(&key, items);

        log::debug!("Added '{}' to {}", item.title, key);
        Ok(item)
    }

    /// The day's items, in insertion (display) order
    pub fn items_for(&self, date: NaiveDate) -> Vec<ContentItem> {
        self.store.get(&date_key(date))
    }

    /// Retrieve one item of a day by id
    pub fn get(&self, date: NaiveDate, id: i64) -> Option<ContentItem> {
        self.items_for(date)
            .into_iter()
            .find(|item| item.id == Some(id))
    }

    /// Update an existing item in place; its position within the day's
    /// sequence is preserved.
    pub fn update(&mut self, date: NaiveDate, item: &ContentItem) -> Result<()> {
        let id = item
            .id
            .ok_or_else(|| anyhow!("Content item ID is required for update"))?;
        item.validate().map_err(|e| anyhow!(e))?;

        let key = date_key(date);
        let mut items = self.store.get(&key);
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == Some(id))
            .ok_or_else(|| anyhow!("Content item with id {} not found on {}", id, key))?;

        let mut updated = item.clone();
        updated.created_at = slot.created_at;
        updated.updated_at = Some(Local::now());
        *slot = updated;
        self.store.set(&key, items);

        Ok(())
    }

    /// Delete an item from a day
    pub fn remove(&mut self, date: NaiveDate, id: i64) -> Result<()> {
        let key = date_key(date);
        let mut items = self.store.get(&key);
        let before = items.len();
        items.retain(|item| item.id != Some(id));
        if items.len() == before {
            return Err(anyhow!("Content item with id {} not found on {}", id, key));
        }
        self.store.set(&key, items);

        log::debug!("Removed content item {} from {}", id, key);
        Ok(())
    }

    /// Move an item to another day, appending it to the target day's
    /// sequence. Moving to the same day is a no-op.
    pub fn move_item(&mut self, from: NaiveDate, to: NaiveDate, id: i64) -> Result<()> {
        if from == to {
            return Ok(());
        }

        let from_key = date_key(from);
        let mut source = self.store.get(&from_key);
        let position = source
            .iter()
            .position(|item| item.id == Some(id))
            .ok_or_else(|| anyhow!("Content item with id {} not found on {}", id, from_key))?;
        let mut item = source.remove(position);
        item.updated_at = Some(Local::now());

        let to_key = date_key(to);
        let mut target = self.store.get(&to_key);
        target.push(item);

        self.store.set(&from_key, source);
        self.store.set(&to_key, target);

        log::debug!("Moved content item {} from {} to {}", id, from_key, to_key);
        Ok(())
    }
}
