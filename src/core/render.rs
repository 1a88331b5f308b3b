//! # Display Regions and Entry Renderer
//!
//! The view is two named regions — `headline` and `body` — and nothing
//! else. [`Pane`] holds their current text; the TUI adapter draws from it
//! and tests read it back directly.
//!
//! `render` is a pure projection of an item onto the pane plus the one
//! session-state write. The body markup is inserted verbatim: the host is
//! inside the trust boundary and the client does no sanitization. That is
//! inherited behavior, kept on purpose.

use log::debug;

use crate::core::item::Item;
use crate::core::state::SessionState;

/// Fixed headline shown when the host reports the feed exhausted.
pub const DONE_HEADLINE: &str = "And done!";

/// Stable identifiers for the two display regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Headline,
    Body,
}

/// The text currently occupying each region.
#[derive(Debug, Default)]
pub struct Pane {
    headline: String,
    body: String,
}

impl Pane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, region: Region, text: &str) {
        match region {
            Region::Headline => self.headline = text.to_string(),
            Region::Body => self.body = text.to_string(),
        }
    }

    pub fn clear(&mut self, region: Region) {
        self.write(region, "");
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Projects an item onto the pane and records it as current.
///
/// Session state is written first, then the regions, so a reader within
/// this turn never sees the pane ahead of the state (or the reverse —
/// both writes happen before control returns to the event loop).
pub fn render(pane: &mut Pane, session: &mut SessionState, item: Item) {
    debug!("render: {}", item.title);
    pane.write(Region::Headline, &item.title);
    pane.write(Region::Body, item.content());
    session.set(item);
}

/// End-of-feed display: fixed headline, empty body.
///
/// Session state is left alone so the last item stays addressable for a
/// residual open action.
pub fn show_done(pane: &mut Pane) {
    debug!("render: end of feed");
    pane.write(Region::Headline, DONE_HEADLINE);
    pane.clear(Region::Body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_item;

    #[test]
    fn test_render_projects_item_and_sets_state() {
        let mut pane = Pane::new();
        let mut session = SessionState::new();
        let item = test_item("Post A", "http://x/a", "<p>A</p>");

        render(&mut pane, &mut session, item.clone());

        assert_eq!(pane.headline(), "Post A");
        assert_eq!(pane.body(), "<p>A</p>");
        assert_eq!(session.get(), Some(&item));
    }

    #[test]
    fn test_render_overwrites_previous_item() {
        let mut pane = Pane::new();
        let mut session = SessionState::new();

        render(&mut pane, &mut session, test_item("Post A", "http://x/a", "<p>A</p>"));
        render(&mut pane, &mut session, test_item("Post B", "http://x/b", "<p>B</p>"));

        assert_eq!(pane.headline(), "Post B");
        assert_eq!(pane.body(), "<p>B</p>");
        assert_eq!(session.get().unwrap().html_url, "http://x/b");
    }

    #[test]
    fn test_show_done_fixed_headline_empty_body() {
        let mut pane = Pane::new();
        let mut session = SessionState::new();
        render(&mut pane, &mut session, test_item("Post A", "http://x/a", "<p>A</p>"));

        show_done(&mut pane);

        assert_eq!(pane.headline(), DONE_HEADLINE);
        assert_eq!(pane.body(), "");
        // Last item survives for a residual open action.
        assert_eq!(session.get().unwrap().title, "Post A");
    }

    #[test]
    fn test_show_done_from_empty_pane() {
        let mut pane = Pane::new();
        show_done(&mut pane);
        assert_eq!(pane.headline(), DONE_HEADLINE);
        assert_eq!(pane.body(), "");
    }

    #[test]
    fn test_body_markup_inserted_verbatim() {
        let mut pane = Pane::new();
        let mut session = SessionState::new();
        let markup = r#"<script>alert("hi")</script>"#;
        render(&mut pane, &mut session, test_item("T", "http://x/t", markup));
        assert_eq!(pane.body(), markup);
    }
}
