//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use crate::bridge::{Command, HostBridge};
use crate::core::item::{Item, RssEntry};
use crate::core::open::{Dispatcher, HostOpen};

/// A bridge that records every command instead of delivering it.
/// Lets tests assert "exactly one `next` went out" and the like.
pub struct RecordingBridge {
    sent: Mutex<Vec<Command>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Command> {
        self.sent.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl HostBridge for RecordingBridge {
    fn name(&self) -> &str {
        "recording"
    }

    fn send(&self, command: Command) {
        self.sent.lock().unwrap().push(command);
    }
}

/// Builds an item without going through JSON.
pub fn test_item(title: &str, html_url: &str, content: &str) -> Item {
    Item {
        title: title.to_string(),
        html_url: html_url.to_string(),
        rss_entry: RssEntry {
            content: content.to_string(),
        },
    }
}

/// A host-mediated dispatcher wired to the given bridge.
pub fn host_dispatcher(bridge: Arc<RecordingBridge>) -> Dispatcher {
    Dispatcher::new(Arc::new(HostOpen::new(bridge)))
}
