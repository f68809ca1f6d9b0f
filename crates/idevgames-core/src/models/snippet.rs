use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

use crate::models::icon::Icon;
use crate::wire_date;

/// A shared link or news item, one of the little tidbits left on the site
/// so it looks like people still live here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: i32,
    pub creator_id: i32,
    /// The collection this snippet belongs to, e.g. `links` or `udevgames`.
    pub taxonomy: String,
    pub hidden: bool,
    pub title: String,
    pub icon: Icon,
    pub shared_by: String,
    /// The day the link was shared with the community, which is usually
    /// earlier than the day it was entered on the site.
    #[serde(with = "wire_date::date")]
    pub shared_on: Date,
    pub summary: String,
    /// Longform description. Mostly empty.
    #[serde(default)]
    pub description: String,
    pub href: String,
    #[serde(with = "wire_date::datetime")]
    pub created_at: DateTime,
    #[serde(with = "wire_date::datetime")]
    pub updated_at: DateTime,
}

impl Snippet {
    /// The writable subset of this snippet.
    pub fn fields(&self) -> SnippetFields {
        SnippetFields {
            taxonomy: self.taxonomy.clone(),
            hidden: self.hidden,
            title: self.title.clone(),
            icon: self.icon,
            shared_by: self.shared_by.clone(),
            shared_on: self.shared_on,
            summary: self.summary.clone(),
            description: self.description.clone(),
            href: self.href.clone(),
        }
    }

    /// Copy writable fields over this snippet, leaving id, creator, and
    /// timestamps alone.
    pub fn apply(&mut self, fields: SnippetFields) {
        self.taxonomy = fields.taxonomy;
        self.hidden = fields.hidden;
        self.title = fields.title;
        self.icon = fields.icon;
        self.shared_by = fields.shared_by;
        self.shared_on = fields.shared_on;
        self.summary = fields.summary;
        self.description = fields.description;
        self.href = fields.href;
    }

    /// Whether `shared_on` falls on or before the creation date. Expected,
    /// never enforced.
    pub fn shared_before_created(&self) -> bool {
        self.shared_on <= self.created_at.date()
    }
}

/// Fields a client may set when creating or updating a snippet. Id,
/// creator, and timestamps are assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetFields {
    pub taxonomy: String,
    pub hidden: bool,
    pub title: String,
    pub icon: Icon,
    pub shared_by: String,
    #[serde(with = "wire_date::date")]
    pub shared_on: Date,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    pub href: String,
}

impl SnippetFields {
    /// A fresh, hidden snippet for `taxonomy` shared on `today`.
    pub fn blank(taxonomy: &str, today: Date) -> Self {
        Self {
            taxonomy: taxonomy.to_string(),
            hidden: true,
            title: String::new(),
            icon: Icon::default(),
            shared_by: String::new(),
            shared_on: today,
            summary: String::new(),
            description: String::new(),
            href: String::new(),
        }
    }
}
