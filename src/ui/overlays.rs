//! Command modal and help overlay.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::helpers::centered_rect;
use super::theme::Palette;
use crate::app::NavigationState;

const MODAL_WIDTH: u16 = 60;

const HELP: &[(&str, &str)] = &[
    ("h / l", "previous / next tab"),
    ("j / k, ↑ / ↓", "scroll"),
    (":", "open the command prompt"),
    ("esc", "toggle command mode"),
    ("ctrl+c", "quit"),
    ("", ""),
    (":about :projects", "jump to a tab"),
    (":experiences :blog", ""),
    (":contact :stats", ""),
    (":messages", "admin inbox"),
    (":theme", "switch light / dark"),
    (":login :logout", "admin session"),
    (":clear", "clear command history"),
    (":help", "this screen"),
    (":quit", "exit"),
];

/// What the command modal shows under its title.
pub(crate) fn command_line(state: &NavigationState, palette: &Palette) -> Line<'static> {
    if state.confirm_cancel_login {
        return Line::styled(
            "Cancel login? (y/n)",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    }
    if state.auth_in_flight {
        return Line::styled("authenticating…", palette.dim_style());
    }

    let shown = if state.login.is_password() {
        "*".repeat(state.input.chars().count())
    } else {
        state.input.clone()
    };
    Line::from(vec![
        Span::styled(state.login.prompt(), Style::default().fg(palette.accent)),
        Span::styled(shown, Style::default().fg(palette.text)),
        Span::styled("█", palette.dim_style()),
    ])
}

pub fn render_command_modal(frame: &mut Frame, state: &NavigationState, palette: &Palette) {
    let area = frame.area();
    let modal = centered_rect(MODAL_WIDTH, 3, Rect { height: area.height / 2, ..area });
    let title = if state.login.is_capturing() {
        " login "
    } else {
        " command "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.highlight_bg));

    frame.render_widget(Clear, modal);
    frame.render_widget(
        Paragraph::new(command_line(state, palette)).block(block),
        modal,
    );
}

pub fn render_help(frame: &mut Frame, palette: &Palette) {
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<20}"), Style::default().fg(palette.accent)),
                Span::styled(*what, Style::default().fg(palette.text)),
            ])
        })
        .chain([
            Line::default(),
            Line::styled(" esc or q to close", palette.dim_style()),
        ])
        .collect();

    let area = centered_rect(MODAL_WIDTH, lines.len() as u16 + 2, frame.area());
    let block = Block::default()
        .title(" help ")
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .style(Style::default().bg(palette.highlight_bg));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
