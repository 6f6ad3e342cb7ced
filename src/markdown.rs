//! Markdown to styled terminal lines, for blog post bodies.
//!
//! Handles headings, paragraphs, emphasis, inline and fenced code, lists,
//! links and block quotes. Anything else is flattened to plain text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::Palette;

pub fn render_markdown(text: &str, palette: &Palette) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let base = Style::default().fg(palette.text);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut styles: Vec<Style> = vec![base];
    let mut in_code_block = false;
    // Depth and next number (None for bullets) of each open list.
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut quote_depth = 0usize;

    let current = |styles: &[Style]| *styles.last().unwrap_or(&base);

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    flush(&mut lines, &mut spans);
                    let marker = "#".repeat(heading_depth(level));
                    spans.push(Span::styled(
                        format!("{marker} "),
                        Style::default().fg(palette.dim),
                    ));
                    styles.push(palette.heading_style());
                }
                Tag::Paragraph => {
                    flush(&mut lines, &mut spans);
                    if quote_depth > 0 {
                        spans.push(Span::styled(
                            "│ ".repeat(quote_depth),
                            Style::default().fg(palette.dim),
                        ));
                    }
                }
                Tag::BlockQuote { .. } => {
                    flush(&mut lines, &mut spans);
                    quote_depth += 1;
                    styles.push(current(&styles).add_modifier(Modifier::ITALIC));
                }
                Tag::CodeBlock(_) => {
                    flush(&mut lines, &mut spans);
                    in_code_block = true;
                    styles.push(Style::default().fg(palette.code));
                }
                Tag::List(start) => {
                    flush(&mut lines, &mut spans);
                    lists.push(start);
                }
                Tag::Item => {
                    flush(&mut lines, &mut spans);
                    let indent = "  ".repeat(lists.len().saturating_sub(1));
                    let bullet = match lists.last_mut() {
                        Some(Some(n)) => {
                            let label = format!("{indent}{n}. ");
                            *n += 1;
                            label
                        }
                        _ => format!("{indent}• "),
                    };
                    spans.push(Span::styled(bullet, Style::default().fg(palette.accent)));
                }
                Tag::Emphasis => styles.push(current(&styles).add_modifier(Modifier::ITALIC)),
                Tag::Strong => styles.push(current(&styles).add_modifier(Modifier::BOLD)),
                Tag::Strikethrough => {
                    styles.push(current(&styles).add_modifier(Modifier::CROSSED_OUT))
                }
                Tag::Link { .. } => styles.push(
                    current(&styles)
                        .fg(palette.link)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    styles.pop();
                    flush(&mut lines, &mut spans);
                    lines.push(Line::default());
                }
                TagEnd::Paragraph => {
                    flush(&mut lines, &mut spans);
                    if lists.is_empty() {
                        lines.push(Line::default());
                    }
                }
                TagEnd::BlockQuote { .. } => {
                    quote_depth = quote_depth.saturating_sub(1);
                    styles.pop();
                }
                TagEnd::CodeBlock => {
                    flush(&mut lines, &mut spans);
                    in_code_block = false;
                    styles.pop();
                    lines.push(Line::default());
                }
                TagEnd::List(_) => {
                    flush(&mut lines, &mut spans);
                    lists.pop();
                    if lists.is_empty() {
                        lines.push(Line::default());
                    }
                }
                TagEnd::Item => flush(&mut lines, &mut spans),
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                    styles.pop();
                }
                _ => {}
            },
            Event::Text(text) => {
                let style = current(&styles);
                if in_code_block {
                    // Each source line is its own terminal line.
                    for code_line in text.lines() {
                        lines.push(Line::from(vec![
                            Span::styled("    ", style),
                            Span::styled(code_line.to_string(), style),
                        ]));
                    }
                } else {
                    spans.push(Span::styled(text.to_string(), style));
                }
            }
            Event::Code(code) => spans.push(Span::styled(
                code.to_string(),
                Style::default().fg(palette.heading),
            )),
            Event::SoftBreak => spans.push(Span::styled(" ", current(&styles))),
            Event::HardBreak => flush(&mut lines, &mut spans),
            Event::Rule => {
                flush(&mut lines, &mut spans);
                lines.push(Line::styled("────────", Style::default().fg(palette.dim)));
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut spans);
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
    lines
}

fn flush(lines: &mut Vec<Line<'static>>, spans: &mut Vec<Span<'static>>) {
    if !spans.is_empty() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
