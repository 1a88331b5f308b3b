//! # Bridge Client
//!
//! The only channel between the view and the host process. Outbound is a
//! single `send`; inbound callbacks arrive on a separate receiver the
//! event loop drains (see `tui::run`).
//!
//! `send` is fire-and-forget by contract: it never blocks and never
//! surfaces an error to the caller. The host is trusted to respond via a
//! callback, or not at all — there is no delivery guarantee, no
//! correlation ID, and no timeout. If the host side has gone away the
//! command is logged and dropped.

use log::{debug, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::protocol::{Command, RawCallback};

/// Outbound half of the bridge, as the controller sees it.
pub trait HostBridge: Send + Sync {
    /// Returns the name of the bridge transport.
    fn name(&self) -> &str;

    /// Dispatches one command to the host. Never blocks, never fails.
    fn send(&self, command: Command);
}

/// Channel-backed bridge: each `send` is exactly one discrete event on
/// the host's command receiver.
pub struct ChannelBridge {
    commands: UnboundedSender<Command>,
}

impl ChannelBridge {
    pub fn new(commands: UnboundedSender<Command>) -> Self {
        Self { commands }
    }
}

impl HostBridge for ChannelBridge {
    fn name(&self) -> &str {
        "channel"
    }

    fn send(&self, command: Command) {
        debug!("bridge send: {command}");
        if self.commands.send(command).is_err() {
            // Host receiver dropped. Fire-and-forget means the caller
            // never hears about it.
            warn!("bridge send: host is gone, dropping '{command}'");
        }
    }
}

/// Both directions of a fresh bridge: the client-side handle plus the
/// host-side command receiver and callback sender.
pub fn channel_pair() -> (
    ChannelBridge,
    UnboundedReceiver<Command>,
    UnboundedSender<RawCallback>,
    UnboundedReceiver<RawCallback>,
) {
    let (cmd_tx, cmd_rx) = unbounded_channel();
    let (cb_tx, cb_rx) = unbounded_channel();
    (ChannelBridge::new(cmd_tx), cmd_rx, cb_tx, cb_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_send_is_one_event() {
        let (bridge, mut cmd_rx, _cb_tx, _cb_rx) = channel_pair();

        bridge.send(Command::Next);

        assert_eq!(cmd_rx.try_recv(), Ok(Command::Next));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn test_send_after_host_gone_does_not_panic() {
        let (bridge, cmd_rx, _cb_tx, _cb_rx) = channel_pair();
        drop(cmd_rx);

        bridge.send(Command::OpenCurrentUrl);
    }
}
