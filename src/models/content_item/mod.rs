// Content item module
// Content card model for the calendar: one planned piece of content on one day

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a planned piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentStatus {
    /// Captured but not yet worked on
    Idea,
    /// Being written or produced
    Draft,
    /// Finished and waiting for its publish day
    Scheduled,
    /// Live
    Published,
}

impl Default for ContentStatus {
    fn default() -> Self {
        Self::Idea
    }
}

/// One piece of planned content, owned by exactly one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub channel: Option<String>,
    pub status: ContentStatus,
    pub color: Option<String>,
    pub created_at: Option<DateTime<Local>>,
    pub updated_at: Option<DateTime<Local>>,
}

impl ContentItem {
    /// Create a new content item with required fields
    ///
    /// # Arguments
    /// * `title` - Item title (required, non-empty)
    ///
    /// # Examples
    /// ```
    /// use content_calendar::models::content_item::ContentItem;
    ///
    /// let item = ContentItem::new("Launch announcement").unwrap();
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, String> {
        let title = title.into();

        // Validate title
        if title.trim().is_empty() {
            return Err("Content item title cannot be empty".to_string());
        }

        Ok(Self {
            id: None,
            title,
            description: None,
            channel: None,
            status: ContentStatus::default(),
            color: None,
            created_at: None,
            updated_at: None,
        })
    }

    /// Create a builder for constructing items with optional fields
    pub fn builder() -> ContentItemBuilder {
        ContentItemBuilder::new()
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Content item title cannot be empty".to_string());
        }

        // Validate color format if present (should be hex color)
        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// Check if the item still needs work before it can go out
    pub fn is_pending(&self) -> bool {
        matches!(self.status, ContentStatus::Idea | ContentStatus::Draft)
    }
}

/// Builder for creating content items with optional fields
pub struct ContentItemBuilder {
    title: Option<String>,
    description: Option<String>,
    channel: Option<String>,
    status: ContentStatus,
    color: Option<String>,
}

impl ContentItemBuilder {
    /// Create a new content item builder
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            channel: None,
            status: ContentStatus::default(),
            color: None,
        }
    }

    /// Set the item title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the item description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the publishing channel (e.g. "blog", "social")
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set the lifecycle status
    pub fn status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the item color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the item
    pub fn build(self) -> Result<ContentItem, String> {
        let title = self.title.ok_or("Content item title is required")?;

        let item = ContentItem {
            id: None,
            title,
            description: self.description,
            channel: self.channel,
            status: self.status,
            color: self.color,
            created_at: None,
            updated_at: None,
        };

        item.validate()?;
        Ok(item)
    }
}

impl Default for ContentItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
