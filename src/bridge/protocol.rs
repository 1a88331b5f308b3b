//! # Bridge Protocol
//!
//! The wire vocabulary between the view and the host: three outbound
//! command names, four inbound callback names. Commands carry no payload;
//! only the `render` callback does.
//!
//! Inbound traffic arrives name-addressed (the host invokes callbacks by
//! string name), so [`RawCallback`] models that form and
//! [`Callback::parse`] is the one place it becomes typed. Render payloads
//! go through [`Item::from_value`] here, before the controller ever sees
//! them.

use std::fmt;

use serde_json::Value;

use crate::core::item::{Item, ItemError};

/// Outbound commands. Fire-and-forget, no payload, no reply promised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Startup handshake; the host eventually pushes the first item.
    Init,
    /// Request the next item in the feed.
    Next,
    /// Ask the host to open the current item's URL.
    OpenCurrentUrl,
}

impl Command {
    /// The name the host sees on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Next => "next",
            Command::OpenCurrentUrl => "openCurrentUrl",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// An inbound callback as the host delivers it: a name and an optional
/// JSON payload, nothing typed yet.
#[derive(Clone, Debug)]
pub struct RawCallback {
    pub name: String,
    pub payload: Option<Value>,
}

impl RawCallback {
    pub fn new(name: &str, payload: Option<Value>) -> Self {
        Self {
            name: name.to_string(),
            payload,
        }
    }
}

/// A validated inbound callback, ready for the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum Callback {
    /// Display this item and make it current.
    Render(Item),
    /// The feed is exhausted.
    DisplayDone,
    /// The host opened the current item's URL.
    OpenSuccessful,
    /// The host failed to open the current item's URL.
    OpenFailed,
}

/// Why an inbound callback could not be turned into a [`Callback`].
#[derive(Debug, PartialEq)]
pub enum CallbackError {
    /// The host invoked a name this client does not register.
    UnknownName(String),
    /// `render` arrived without a payload.
    MissingPayload,
    /// `render` arrived with a payload that failed item validation.
    BadItem(ItemError),
}

impl fmt::Display for CallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackError::UnknownName(name) => write!(f, "unknown callback: {name}"),
            CallbackError::MissingPayload => write!(f, "render callback without payload"),
            CallbackError::BadItem(e) => write!(f, "bad render payload: {e}"),
        }
    }
}

impl std::error::Error for CallbackError {}

impl Callback {
    /// Resolves a name-addressed callback into its typed form.
    pub fn parse(raw: &RawCallback) -> Result<Callback, CallbackError> {
        match raw.name.as_str() {
            "render" => {
                let payload = raw.payload.as_ref().ok_or(CallbackError::MissingPayload)?;
                let item = Item::from_value(payload).map_err(CallbackError::BadItem)?;
                Ok(Callback::Render(item))
            }
            "displayDone" => Ok(Callback::DisplayDone),
            "openSuccessful" => Ok(Callback::OpenSuccessful),
            "openFailed" => Ok(Callback::OpenFailed),
            other => Err(CallbackError::UnknownName(other.to_string())),
        }
    }
}
