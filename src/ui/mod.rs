//! UI rendering.
//!
//! One screen: tab bar on top, the current tab's content in the middle and
//! a status line at the bottom. The command modal and the help overlay are
//! drawn over it when open.

mod chrome;
mod helpers;
mod overlays;
pub mod theme;
mod views;

pub use helpers::{centered_rect, estimate_wrapped_line_count, truncate_to_width};
pub use theme::Palette;
pub use views::content_lines;

use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Modal};

pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.state.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let [tab_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    chrome::render_tab_bar(frame, tab_area, &app.state, palette);

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(palette.border_style())
        .padding(Padding::horizontal(1));
    let inner = block.inner(content_area);
    let lines = content_lines(app.content.status(app.state.current_tab), palette);

    let total = estimate_wrapped_line_count(&lines, inner.width as usize);
    let max_scroll = total.saturating_sub(inner.height as usize);
    app.clamp_scroll(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.state.scroll, 0)),
        content_area,
    );

    chrome::render_status_line(frame, status_area, &app.state, palette);

    match app.state.modal {
        Modal::Command => overlays::render_command_modal(frame, &app.state, palette),
        Modal::Help => overlays::render_help(frame, palette),
        Modal::None => {}
    }
}
