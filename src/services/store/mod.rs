//! Content storage.
//! The grid builder reads day sequences and the content service writes them
//! through one trait; the in-memory implementation backs the demo app, and a
//! deployment would swap in a persistent one.

use std::collections::BTreeMap;

use crate::models::content_item::ContentItem;

/// Mapping from date key ("YYYY-MM-DD") to that day's ordered content items.
///
/// Keys must come from [`crate::utils::date::date_key`]; a key written any
/// other way is simply never found, and the day renders empty.
#[cfg_attr(test, mockall::automock)]
pub trait ContentStore {
    /// Items for a day, in insertion (display) order.
    /// A missing key yields an empty vec, never an error.
    fn get(&self, key: &str) -> Vec<ContentItem>;

    /// Replace a day's items. An empty vec clears the day.
    fn set(&mut self, key: &str, items: Vec<ContentItem>);

    /// Keys of days that currently have content, in ascending order
    fn keys(&self) -> Vec<String>;
}

/// In-memory content store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    days: BTreeMap<String, Vec<ContentItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days that have at least one item
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total item count across all days
    pub fn total_items(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, key: &str) -> Vec<ContentItem> {
        self.days.get(key).cloned().unwrap_or_default()
    }

    fn set(&mut self, key: &str, items: Vec<ContentItem>) {
        if items.is_empty() {
            self.days.remove(key);
        } else {
            self.days.insert(key.to_string(), items);
        }
    }

    fn keys(&self) -> Vec<String> {
        self.days.keys().cloned().collect()
    }
}
