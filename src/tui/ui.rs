//! Layout and drawing: the headline region, the body region, and a
//! one-line key hint. Body markup is shown verbatim — the pane is trusted
//! input by design and nothing here re-formats it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::render::Pane;
use crate::core::state::Phase;

pub fn draw_ui(frame: &mut Frame, pane: &Pane, phase: Phase) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let headline = Paragraph::new(pane.headline())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(headline, chunks[0]);

    let body = Paragraph::new(pane.body()).wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[1]);

    let hint = match phase {
        Phase::Pending => "waiting for host…  [q] quit",
        Phase::Done => "[o] open last  [q] quit",
        _ => "[n] next  [o] open in browser  [q] quit",
    };
    frame.render_widget(Line::from(hint), chunks[2]);
}
