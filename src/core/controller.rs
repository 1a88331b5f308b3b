//! # Navigation Controller
//!
//! Top-level sequencing: one startup action, one `next` per user request,
//! and the dispatch of inbound host callbacks to the renderer.
//!
//! ```text
//!          start()                 onRender
//!  Empty ──────────▶ Pending ───────────────▶ Showing ──┐
//!                       ▲                       │        │ openCurrent()
//!                       │     requestNext()     │        │ (no phase change)
//!                       └───────────────────────┘        ▼
//!                       │                              (same)
//!                       │ onDone
//!                       ▼
//!                     Done   (terminal)
//! ```
//!
//! The protocol assumes at most one outstanding request and a host that
//! answers in order. Nothing here enforces that: there are no correlation
//! IDs and no timeout, so a silent host parks us in `Pending` for good.
//! Preserved as-is; see DESIGN.md before "fixing" it.

use std::sync::Arc;

use log::{info, warn};

use crate::StartupMode;
use crate::bridge::{Callback, Command, HostBridge};
use crate::core::open::{Dispatcher, OpenError, OpenOutcome};
use crate::core::render::{self, Pane};
use crate::core::state::{Phase, SessionState};

pub struct Controller {
    bridge: Arc<dyn HostBridge>,
    dispatcher: Dispatcher,
    session: SessionState,
    phase: Phase,
    startup_mode: StartupMode,
}

impl Controller {
    pub fn new(
        bridge: Arc<dyn HostBridge>,
        dispatcher: Dispatcher,
        startup_mode: StartupMode,
    ) -> Self {
        Self {
            bridge,
            dispatcher,
            session: SessionState::new(),
            phase: Phase::Empty,
            startup_mode,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Performs exactly one startup action, per the configured mode.
    pub fn start(&mut self) {
        let command = match self.startup_mode {
            StartupMode::ExplicitInit => Command::Init,
            StartupMode::ImmediateRequest => Command::Next,
        };
        info!("startup ({:?}): sending '{command}'", self.startup_mode);
        self.bridge.send(command);
        self.phase = Phase::Pending;
    }

    /// Requests the next item: one `next` command per call.
    ///
    /// No in-flight bookkeeping — a re-press while `Pending` sends again,
    /// which doubles as the only retry mechanism the protocol has. Only
    /// `Done` is respected as terminal.
    pub fn request_next(&mut self) {
        if self.phase == Phase::Done {
            info!("requestNext after end of feed, ignoring");
            return;
        }
        self.bridge.send(Command::Next);
        self.phase = Phase::Pending;
    }

    /// Opens the current item through the configured strategy. A side
    /// action: the phase does not change, whatever the outcome.
    pub fn open_current(&self) -> Result<OpenOutcome, OpenError> {
        self.dispatcher.open_current(&self.session)
    }

    /// Routes one validated host callback to its effect on the pane and
    /// the session state.
    pub fn handle_callback(&mut self, callback: Callback, pane: &mut Pane) {
        match callback {
            Callback::Render(item) => {
                if self.phase != Phase::Pending {
                    // Host pushed without being asked. It owns the feed,
                    // so display it anyway.
                    warn!("render while {:?}, honoring it", self.phase);
                }
                render::render(pane, &mut self.session, item);
                self.phase = Phase::Showing;
            }
            Callback::DisplayDone => {
                render::show_done(pane);
                self.phase = Phase::Done;
            }
            Callback::OpenSuccessful => {
                info!("host opened: {}", self.current_title());
            }
            Callback::OpenFailed => {
                // Log-level only. The source has no error surface for
                // this, and neither do we.
                warn!("host failed to open: {}", self.current_title());
            }
        }
    }

    fn current_title(&self) -> &str {
        self.session.get().map(|i| i.title.as_str()).unwrap_or("<no item>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingBridge, host_dispatcher, test_item};

    fn controller(mode: StartupMode) -> (Controller, Arc<RecordingBridge>) {
        let bridge = Arc::new(RecordingBridge::new());
        let dispatcher = host_dispatcher(bridge.clone());
        (Controller::new(bridge.clone(), dispatcher, mode), bridge)
    }

    #[test]
    fn test_explicit_init_sends_init_once() {
        let (mut c, bridge) = controller(StartupMode::ExplicitInit);
        c.start();
        assert_eq!(bridge.sent(), vec![Command::Init]);
        assert_eq!(c.phase(), Phase::Pending);
    }

    #[test]
    fn test_immediate_request_sends_next_once() {
        let (mut c, bridge) = controller(StartupMode::ImmediateRequest);
        c.start();
        assert_eq!(bridge.sent(), vec![Command::Next]);
        assert_eq!(c.phase(), Phase::Pending);
    }

    #[test]
    fn test_request_next_sends_exactly_one_command() {
        let (mut c, bridge) = controller(StartupMode::ExplicitInit);
        c.start();
        bridge.clear();

        c.request_next();

        assert_eq!(bridge.sent(), vec![Command::Next]);
    }

    #[test]
    fn test_render_moves_to_showing_and_sets_state() {
        let (mut c, _bridge) = controller(StartupMode::ExplicitInit);
        let mut pane = Pane::new();
        c.start();

        c.handle_callback(
            Callback::Render(test_item("Post A", "http://x/a", "<p>A</p>")),
            &mut pane,
        );

        assert_eq!(c.phase(), Phase::Showing);
        assert_eq!(pane.headline(), "Post A");
        assert_eq!(c.session().get().unwrap().title, "Post A");
    }

    #[test]
    fn test_two_requests_end_on_second_item() {
        let (mut c, bridge) = controller(StartupMode::ExplicitInit);
        let mut pane = Pane::new();
        c.start();
        c.handle_callback(
            Callback::Render(test_item("Post A", "http://x/a", "<p>A</p>")),
            &mut pane,
        );
        c.request_next();
        c.handle_callback(
            Callback::Render(test_item("Post B", "http://x/b", "<p>B</p>")),
            &mut pane,
        );

        assert_eq!(bridge.sent(), vec![Command::Init, Command::Next]);
        assert_eq!(c.session().get().unwrap().title, "Post B");
        assert_eq!(pane.headline(), "Post B");
    }

    #[test]
    fn test_done_is_terminal_for_next_requests() {
        let (mut c, bridge) = controller(StartupMode::ExplicitInit);
        let mut pane = Pane::new();
        c.start();
        c.handle_callback(Callback::DisplayDone, &mut pane);
        bridge.clear();

        c.request_next();

        assert!(bridge.sent().is_empty());
        assert_eq!(c.phase(), Phase::Done);
    }

    #[test]
    fn test_done_without_prior_render_leaves_session_empty() {
        let (mut c, _bridge) = controller(StartupMode::ExplicitInit);
        let mut pane = Pane::new();
        c.start();

        c.handle_callback(Callback::DisplayDone, &mut pane);

        assert_eq!(pane.headline(), render::DONE_HEADLINE);
        assert_eq!(pane.body(), "");
        assert!(c.session().get().is_none());
        assert_eq!(c.open_current().unwrap(), OpenOutcome::NothingToOpen);
    }

    #[test]
    fn test_open_results_do_not_change_phase_or_state() {
        let (mut c, _bridge) = controller(StartupMode::ExplicitInit);
        let mut pane = Pane::new();
        c.start();
        c.handle_callback(
            Callback::Render(test_item("Post A", "http://x/a", "<p>A</p>")),
            &mut pane,
        );

        c.handle_callback(Callback::OpenSuccessful, &mut pane);
        c.handle_callback(Callback::OpenFailed, &mut pane);

        assert_eq!(c.phase(), Phase::Showing);
        assert_eq!(c.session().get().unwrap().title, "Post A");
        assert_eq!(pane.headline(), "Post A");
    }

    #[test]
    fn test_open_current_does_not_change_phase() {
        let (mut c, bridge) = controller(StartupMode::ExplicitInit);
        let mut pane = Pane::new();
        c.start();
        c.handle_callback(
            Callback::Render(test_item("Post A", "http://x/a", "<p>A</p>")),
            &mut pane,
        );
        bridge.clear();

        let outcome = c.open_current().unwrap();

        assert_eq!(outcome, OpenOutcome::Dispatched);
        assert_eq!(bridge.sent(), vec![Command::OpenCurrentUrl]);
        assert_eq!(c.phase(), Phase::Showing);
    }
}
