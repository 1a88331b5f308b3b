//! # Host Side
//!
//! The client half of this crate only ever talks to "the host" — whatever
//! owns the feed data and the URL-opening side effect. This module holds
//! the one implementation that ships with the binary: [`LocalHost`], an
//! in-process task serving a queue of pre-fetched items over the channel
//! bridge.
//!
//! Fetching, feed parsing and read-state persistence stay out; items
//! arrive as a JSON file.

pub mod local;

pub use local::{HostError, LocalHost, load_items};
