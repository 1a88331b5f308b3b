//! # Core Controller Logic
//!
//! This module contains Skimmer's business logic.
//! It knows nothing about any specific UI technology or host transport.
//!
//! ```text
//!                ┌──────────────────────────────┐
//!                │           CORE               │
//!                │  (this module)               │
//!                │                              │
//!                │  • Item (feed payload)       │
//!                │  • SessionState (one slot)   │
//!                │  • Pane + render()           │
//!                │  • Dispatcher (open)         │
//!                │  • Controller (sequencing)   │
//!                │                              │
//!                │  No terminal. No host.       │
//!                └──────────────┬───────────────┘
//!                               │
//!              ┌────────────────┼────────────────┐
//!              ▼                ▼                ▼
//!       ┌────────────┐   ┌────────────┐   ┌────────────┐
//!       │    TUI     │   │   bridge   │   │    host    │
//!       │  Adapter   │   │  (channel) │   │  (local)   │
//!       └────────────┘   └────────────┘   └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: the `Item` payload type and its validation
//! - [`state`]: `SessionState` — the single current-item slot — and `Phase`
//! - [`render`]: the two display regions and the entry renderer
//! - [`open`]: the open-strategy seam and the action dispatcher
//! - [`controller`]: top-level sequencing of requests and callbacks
//! - [`config`]: settings with the defaults → file → env → CLI hierarchy

pub mod config;
pub mod controller;
pub mod item;
pub mod open;
pub mod render;
pub mod state;
