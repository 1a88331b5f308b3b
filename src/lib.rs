//! Skimmer library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod bridge;
pub mod core;
pub mod host;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// What the controller sends as its single startup action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartupMode {
    /// Send an `init` handshake and let the host push the first item.
    #[default]
    ExplicitInit,
    /// Skip the handshake and request the first item directly.
    ImmediateRequest,
}

/// How "open the current item" is carried out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenMode {
    /// Ask the host to open the URL; it reports back via openSuccessful/openFailed.
    #[default]
    HostMediated,
    /// Open the URL in the browser ourselves. No host round-trip, no result callback.
    Direct,
}
