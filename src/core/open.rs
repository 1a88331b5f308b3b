//! # Open Strategies and Action Dispatcher
//!
//! "Open the current item" resolves through one of two interchangeable
//! strategies, fixed at construction time:
//!
//! - **host-mediated**: one `openCurrentUrl` command over the bridge; the
//!   host does the opening and reports back via `openSuccessful` /
//!   `openFailed`.
//! - **direct**: launch the browser ourselves on `html_url`. No bridge
//!   traffic and no result callback — unlike the host-mediated path there
//!   is no success/failure report after launch, only the local launch
//!   error. The two strategies are not symmetric and don't pretend to be.
//!
//! Opening with nothing rendered yet is a defined no-op
//! ([`OpenOutcome::NothingToOpen`]), not a fault.

use std::fmt;
use std::io;
use std::sync::Arc;

use log::{debug, info};

use crate::bridge::{Command, HostBridge};
use crate::core::item::Item;
use crate::core::state::SessionState;

/// Failure to carry out an open action. Terminal for that action; the
/// session state is untouched and nothing retries.
#[derive(Debug)]
pub enum OpenError {
    /// The local browser launch failed (direct strategy only).
    Launch(io::Error),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Launch(e) => write!(f, "browser launch failed: {e}"),
        }
    }
}

impl std::error::Error for OpenError {}

/// What an `open_current` call resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The strategy ran (command sent, or browser launched).
    Dispatched,
    /// No item has been rendered yet; nothing happened.
    NothingToOpen,
}

/// The policy for opening an item's URL.
pub trait OpenStrategy: Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Opens the given item's URL.
    fn open(&self, item: &Item) -> Result<(), OpenError>;
}

/// Host-mediated opening: delegate over the bridge and wait for the
/// host's openSuccessful/openFailed verdict (handled by the controller).
pub struct HostOpen {
    bridge: Arc<dyn HostBridge>,
}

impl HostOpen {
    pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
        Self { bridge }
    }
}

impl OpenStrategy for HostOpen {
    fn name(&self) -> &str {
        "host-mediated"
    }

    fn open(&self, item: &Item) -> Result<(), OpenError> {
        debug!("asking host to open: {}", item.title);
        self.bridge.send(Command::OpenCurrentUrl);
        Ok(())
    }
}

type Launcher = Box<dyn Fn(&str) -> io::Result<()> + Send + Sync>;

/// Direct opening: launch the browser in-process, no host round-trip.
pub struct DirectOpen {
    launcher: Launcher,
}

impl DirectOpen {
    pub fn new() -> Self {
        Self::with_launcher(Box::new(|url| webbrowser::open(url)))
    }

    /// Constructor with an injectable launcher, so tests can observe the
    /// URL without spawning a real browser.
    pub fn with_launcher(launcher: Launcher) -> Self {
        Self { launcher }
    }
}

impl Default for DirectOpen {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenStrategy for DirectOpen {
    fn name(&self) -> &str {
        "direct"
    }

    fn open(&self, item: &Item) -> Result<(), OpenError> {
        debug!("opening directly: {}", item.html_url);
        (self.launcher)(&item.html_url).map_err(OpenError::Launch)
    }
}

/// Resolves "open the current item" against the session state through
/// the configured strategy.
pub struct Dispatcher {
    strategy: Arc<dyn OpenStrategy>,
}

impl Dispatcher {
    pub fn new(strategy: Arc<dyn OpenStrategy>) -> Self {
        Self { strategy }
    }

    /// Opens whatever is current at this instant.
    ///
    /// Reads the slot once; both this read and the renderer's writes
    /// happen on the same turn of the event loop, so the captured item is
    /// exactly what is on screen.
    pub fn open_current(&self, session: &SessionState) -> Result<OpenOutcome, OpenError> {
        match session.get() {
            Some(item) => {
                info!("open ({}): {}", self.strategy.name(), item.title);
                self.strategy.open(item)?;
                Ok(OpenOutcome::Dispatched)
            }
            None => {
                debug!("open: nothing to open yet");
                Ok(OpenOutcome::NothingToOpen)
            }
        }
    }
}
