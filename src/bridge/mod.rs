pub mod client;
pub mod protocol;

pub use client::{ChannelBridge, HostBridge};
pub use protocol::{Callback, CallbackError, Command, RawCallback};
