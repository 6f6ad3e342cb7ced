//! Tab bar and status line.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::helpers::truncate_to_width;
use super::theme::Palette;
use crate::app::{NavigationState, NoticeKind, Tab};

pub fn render_tab_bar(frame: &mut Frame, area: Rect, state: &NavigationState, palette: &Palette) {
    frame.render_widget(Paragraph::new(tab_bar_line(state, palette)), area);
}

pub(crate) fn tab_bar_line(state: &NavigationState, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " termfolio ",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    for tab in Tab::visible(state.is_authenticated()) {
        let label = format!(" {} ", tab.title());
        let style = if *tab == state.current_tab {
            Style::default()
                .fg(palette.heading)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.dim_style()
        };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans)
}

pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    state: &NavigationState,
    palette: &Palette,
) {
    frame.render_widget(
        Paragraph::new(status_line(state, palette, area.width as usize)),
        area,
    );
}

pub(crate) fn status_line(state: &NavigationState, palette: &Palette, width: usize) -> Line<'static> {
    let mode = if state.command_mode { " CMD " } else { " BROWSE " };
    let mut spans = vec![Span::styled(
        mode,
        Style::default()
            .fg(palette.background)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];

    let who = match &state.user {
        Some(user) if state.is_authenticated() => format!(" {} ", user.label()),
        _ if state.is_authenticated() => " admin ".to_string(),
        _ => " visitor ".to_string(),
    };
    spans.push(Span::styled(who, palette.dim_style()));

    let used: usize = spans.iter().map(|s| s.width()).sum();
    let room = width.saturating_sub(used + 1);

    match &state.notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => palette.success,
                NoticeKind::Error => palette.error,
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                truncate_to_width(&notice.text, room),
                Style::default().fg(color),
            ));
        }
        None => {
            let hints = if state.command_mode {
                "h/l tabs  j/k scroll  : command  esc browse"
            } else {
                "↑/↓ scroll  esc commands"
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(truncate_to_width(hints, room), palette.dim_style()));
        }
    }
    Line::from(spans)
}
