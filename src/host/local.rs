//! # Local Host
//!
//! Serves a queue of items in response to bridge commands, the way the
//! original viewer's host popped its unread list: `init` and `next` both
//! mean "serve one more", an exhausted queue answers `displayDone`, and
//! `openCurrentUrl` launches the browser on the last-served item and
//! reports the verdict back.
//!
//! Callbacks go out in the name-addressed wire form ([`RawCallback`]),
//! exactly as a webview host would invoke them.

use std::collections::VecDeque;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use serde_json::Value;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::bridge::{Command, RawCallback};
use crate::core::item::{Item, ItemError};

#[derive(Debug)]
pub enum HostError {
    Io(io::Error),
    Parse(serde_json::Error),
    /// An entry in the items file failed item validation.
    BadItem(usize, ItemError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Io(e) => write!(f, "items I/O error: {e}"),
            HostError::Parse(e) => write!(f, "items parse error: {e}"),
            HostError::BadItem(index, e) => write!(f, "items[{index}]: {e}"),
        }
    }
}

impl std::error::Error for HostError {}

/// Loads pre-fetched items from a JSON array file, validating each entry
/// so a broken file fails at startup and not mid-session.
pub fn load_items(path: &Path) -> Result<Vec<Item>, HostError> {
    let contents = fs::read_to_string(path).map_err(HostError::Io)?;
    let values: Vec<Value> = serde_json::from_str(&contents).map_err(HostError::Parse)?;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Item::from_value(v).map_err(|e| HostError::BadItem(i, e)))
        .collect()
}

type Launcher = Box<dyn Fn(&str) -> io::Result<()> + Send + Sync>;

/// In-process host task. Owns the item queue and the browser side effect.
pub struct LocalHost {
    queue: VecDeque<Item>,
    /// Last item served; what `openCurrentUrl` acts on.
    current: Option<Item>,
    callbacks: UnboundedSender<RawCallback>,
    launcher: Launcher,
}

impl LocalHost {
    pub fn new(items: Vec<Item>, callbacks: UnboundedSender<RawCallback>) -> Self {
        Self::with_launcher(items, callbacks, Box::new(|url| webbrowser::open(url)))
    }

    /// Constructor with an injectable launcher, so tests can observe the
    /// URL without spawning a real browser.
    pub fn with_launcher(
        items: Vec<Item>,
        callbacks: UnboundedSender<RawCallback>,
        launcher: Launcher,
    ) -> Self {
        Self {
            queue: items.into(),
            current: None,
            callbacks,
            launcher,
        }
    }

    /// Serves commands until the client side hangs up.
    pub async fn run(mut self, mut commands: UnboundedReceiver<Command>) {
        info!("local host up, {} item(s) queued", self.queue.len());
        while let Some(command) = commands.recv().await {
            debug!("host got: {command}");
            match command {
                Command::Init | Command::Next => self.serve_next(),
                Command::OpenCurrentUrl => self.open_current(),
            }
        }
        debug!("local host: client hung up");
    }

    fn serve_next(&mut self) {
        match self.queue.pop_front() {
            Some(item) => {
                let payload = match serde_json::to_value(&item) {
                    Ok(v) => v,
                    Err(e) => {
                        warn!("could not serialize item '{}': {e}", item.title);
                        return;
                    }
                };
                self.current = Some(item);
                self.invoke(RawCallback::new("render", Some(payload)));
            }
            None => self.invoke(RawCallback::new("displayDone", None)),
        }
    }

    fn open_current(&mut self) {
        let Some(item) = self.current.as_ref() else {
            // Client asked before anything was served. Report failure so
            // it at least lands in the client's log.
            warn!("openCurrentUrl with nothing served yet");
            self.invoke(RawCallback::new("openFailed", None));
            return;
        };
        match (self.launcher)(&item.html_url) {
            Ok(()) => {
                info!("opened {}", item.html_url);
                self.invoke(RawCallback::new("openSuccessful", None));
            }
            Err(e) => {
                warn!("failed to open {}: {e}", item.html_url);
                self.invoke(RawCallback::new("openFailed", None));
            }
        }
    }

    fn invoke(&self, callback: RawCallback) {
        if self.callbacks.send(callback).is_err() {
            debug!("client gone, dropping callback");
        }
    }
}
