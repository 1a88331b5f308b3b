//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the two
//! display regions, and translates key presses into controller calls.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! controller underneath would drive a webview pane the same way.
//!
//! ## Event loop
//!
//! Single-threaded and cooperative: each turn drains any host callbacks
//! that arrived on the bridge, then polls the keyboard with a short
//! timeout. Render and session-state writes therefore never interleave
//! with an open action — both happen inside one turn.

mod event;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use crate::OpenMode;
use crate::bridge::{Callback, HostBridge};
use crate::core::config::ResolvedConfig;
use crate::core::controller::Controller;
use crate::core::open::{DirectOpen, Dispatcher, HostOpen, OpenOutcome, OpenStrategy};
use crate::core::render::Pane;
use crate::host::{LocalHost, load_items};
use crate::tui::event::{TuiEvent, poll_event};

/// Build the open strategy the config asks for, wired to the given bridge.
pub fn build_strategy(mode: OpenMode, bridge: Arc<dyn HostBridge>) -> Arc<dyn OpenStrategy> {
    match mode {
        OpenMode::HostMediated => Arc::new(HostOpen::new(bridge)),
        OpenMode::Direct => Arc::new(DirectOpen::new()),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    // Items for the local host; an unreadable file degrades to an empty
    // feed rather than aborting the viewer.
    let items = match &config.items_path {
        Some(path) => match load_items(path) {
            Ok(items) => items,
            Err(e) => {
                warn!("could not load items from {}: {e}", path.display());
                Vec::new()
            }
        },
        None => {
            info!("no items file configured, feed starts empty");
            Vec::new()
        }
    };

    // Wire the bridge and put the host on its own task.
    let (bridge, cmd_rx, cb_tx, mut cb_rx) = crate::bridge::client::channel_pair();
    let bridge: Arc<dyn HostBridge> = Arc::new(bridge);
    tokio::spawn(LocalHost::new(items, cb_tx).run(cmd_rx));

    let dispatcher = Dispatcher::new(build_strategy(config.open_strategy, bridge.clone()));
    let mut controller = Controller::new(bridge, dispatcher, config.startup_mode);
    let mut pane = Pane::new();

    let mut terminal = ratatui::init();

    controller.start();

    let mut needs_redraw = true;
    let result = loop {
        // Host callbacks first, so a render and the key that follows it
        // land in the right order.
        while let Ok(raw) = cb_rx.try_recv() {
            match Callback::parse(&raw) {
                Ok(callback) => controller.handle_callback(callback, &mut pane),
                // Malformed payloads stop at the parse boundary; the
                // regions keep whatever they had.
                Err(e) => warn!("dropping callback: {e}"),
            }
            needs_redraw = true;
        }

        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &pane, controller.phase())) {
                break Err(e);
            }
            needs_redraw = false;
        }

        match poll_event(Duration::from_millis(100)) {
            Some(TuiEvent::Quit) => break Ok(()),
            Some(TuiEvent::Next) => {
                controller.request_next();
                needs_redraw = true;
            }
            Some(TuiEvent::Open) => match controller.open_current() {
                Ok(OpenOutcome::Dispatched) => {}
                Ok(OpenOutcome::NothingToOpen) => info!("open pressed with nothing to open"),
                // Terminal for this press; a re-press is the only retry.
                Err(e) => warn!("open failed: {e}"),
            },
            Some(TuiEvent::Resize) => needs_redraw = true,
            None => {}
        }
    };

    ratatui::restore();
    result
}
