//! Content pane: one builder per tab turning loaded data into lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::Palette;
use crate::api::PortfolioStats;
use crate::app::{LoadStatus, TabContent};
use crate::markdown::render_markdown;
use crate::models::{ContactMessage, Experience, Post, Profile, Project, Skill};

pub fn content_lines(status: &LoadStatus, palette: &Palette) -> Vec<Line<'static>> {
    match status {
        LoadStatus::Idle => vec![],
        LoadStatus::Loading => vec![Line::styled("loading…", palette.dim_style())],
        LoadStatus::Failed {
            message,
            hint,
            retryable,
        } => {
            let mut lines = vec![
                Line::styled(
                    format!("error: {message}"),
                    Style::default().fg(palette.error),
                ),
                Line::styled(*hint, palette.dim_style()),
            ];
            if *retryable {
                lines.push(Line::styled("switch tabs to retry", palette.dim_style()));
            }
            lines
        }
        LoadStatus::Ready(content) => match content {
            TabContent::About { profile, skills } => about(profile, skills, palette),
            TabContent::Projects(projects) => projects_view(projects, palette),
            TabContent::Experiences(experiences) => experiences_view(experiences, palette),
            TabContent::Blog(posts) => blog(posts, palette),
            TabContent::Contact(profile) => contact(profile, palette),
            TabContent::Stats(stats) => stats_view(stats, palette),
            TabContent::Messages(messages) => messages_view(messages, palette),
        },
    }
}

fn empty(what: &str, palette: &Palette) -> Vec<Line<'static>> {
    vec![Line::styled(format!("no {what} yet"), palette.dim_style())]
}

fn label_value(label: &str, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), palette.dim_style()),
        Span::styled(value, Style::default().fg(palette.text)),
    ])
}

fn about(profile: &Profile, skills: &[Skill], palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(profile.name.clone(), palette.heading_style())];
    if !profile.title.is_empty() {
        lines.push(Line::styled(
            profile.title.clone(),
            Style::default().fg(palette.accent),
        ));
    }
    if let Some(location) = &profile.location {
        lines.push(Line::styled(location.clone(), palette.dim_style()));
    }
    lines.push(Line::default());
    for paragraph in profile.bio.lines() {
        lines.push(Line::raw(paragraph.to_string()));
    }

    if !skills.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled("skills", palette.heading_style()));

        let mut categories: Vec<&str> = Vec::new();
        for skill in skills {
            let category = skill.category.as_deref().unwrap_or("other");
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        for category in categories {
            let names: Vec<String> = skills
                .iter()
                .filter(|s| s.category.as_deref().unwrap_or("other") == category)
                .map(|s| match s.level {
                    Some(level) => format!("{} {}", s.name, level_dots(level)),
                    None => s.name.clone(),
                })
                .collect();
            lines.push(label_value(category, names.join(", "), palette));
        }
    }
    lines
}

fn level_dots(level: u8) -> String {
    let filled = level.min(5) as usize;
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}

fn projects_view(projects: &[Project], palette: &Palette) -> Vec<Line<'static>> {
    if projects.is_empty() {
        return empty("projects", palette);
    }
    let mut lines = Vec::new();
    for project in projects {
        let mut title = vec![Span::styled(project.title.clone(), palette.heading_style())];
        if project.featured {
            title.push(Span::styled(" ★", Style::default().fg(palette.accent)));
        }
        lines.push(Line::from(title));
        if !project.description.is_empty() {
            lines.push(Line::raw(project.description.clone()));
        }
        if !project.tech_stack.is_empty() {
            lines.push(label_value("stack", project.tech_stack.join(" · "), palette));
        }
        if let Some(url) = &project.repo_url {
            lines.push(link_line("repo", url, palette));
        }
        if let Some(url) = &project.live_url {
            lines.push(link_line("live", url, palette));
        }
        lines.push(Line::default());
    }
    lines.pop();
    lines
}

fn link_line(label: &str, url: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), palette.dim_style()),
        Span::styled(
            url.to_string(),
            Style::default()
                .fg(palette.link)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

fn experiences_view(experiences: &[Experience], palette: &Palette) -> Vec<Line<'static>> {
    if experiences.is_empty() {
        return empty("experience", palette);
    }
    let mut lines = Vec::new();
    for exp in experiences {
        lines.push(Line::from(vec![
            Span::styled(exp.role.clone(), palette.heading_style()),
            Span::styled(" @ ", palette.dim_style()),
            Span::styled(exp.company.clone(), Style::default().fg(palette.accent)),
        ]));
        let mut meta = exp.period();
        if let Some(location) = &exp.location {
            meta.push_str(" · ");
            meta.push_str(location);
        }
        lines.push(Line::styled(meta, palette.dim_style()));
        if !exp.description.is_empty() {
            lines.push(Line::raw(exp.description.clone()));
        }
        for highlight in &exp.highlights {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(palette.accent)),
                Span::raw(highlight.clone()),
            ]));
        }
        lines.push(Line::default());
    }
    lines.pop();
    lines
}

fn blog(posts: &[Post], palette: &Palette) -> Vec<Line<'static>> {
    if posts.is_empty() {
        return empty("posts", palette);
    }
    let mut lines = Vec::new();
    for post in posts {
        let mut title = vec![Span::styled(post.title.clone(), palette.heading_style())];
        if !post.published {
            title.push(Span::styled(" (draft)", Style::default().fg(palette.error)));
        }
        lines.push(Line::from(title));

        let mut meta = Vec::new();
        if let Some(at) = post.published_at {
            meta.push(at.format("%Y-%m-%d").to_string());
        }
        if !post.tags.is_empty() {
            meta.push(post.tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "));
        }
        if !meta.is_empty() {
            lines.push(Line::styled(meta.join("  "), palette.dim_style()));
        }
        if let Some(summary) = &post.summary {
            lines.push(Line::styled(
                summary.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(Line::default());
        lines.extend(render_markdown(&post.content, palette));
        lines.push(Line::default());
        lines.push(Line::styled("─".repeat(24), palette.border_style()));
        lines.push(Line::default());
    }
    lines.truncate(lines.len().saturating_sub(3));
    lines
}

fn contact(profile: &Profile, palette: &Palette) -> Vec<Line<'static>> {
    let links = profile.contact_links();
    if links.is_empty() {
        return empty("contact details", palette);
    }
    let mut lines = vec![
        Line::styled(format!("get in touch with {}", profile.name), palette.heading_style()),
        Line::default(),
    ];
    for (label, value) in links {
        lines.push(link_line(label, value, palette));
    }
    lines
}

fn stats_view(stats: &PortfolioStats, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        label_value(
            "projects",
            format!("{} ({} featured)", stats.projects, stats.featured_projects),
            palette,
        ),
        label_value("experience", stats.experiences.to_string(), palette),
        label_value(
            "posts",
            format!("{} ({} published)", stats.posts, stats.published_posts),
            palette,
        ),
        label_value("skills", stats.skills.to_string(), palette),
    ];
    if let Some(unread) = stats.unread_messages {
        lines.push(label_value("unread", unread.to_string(), palette));
    }
    lines
}

fn messages_view(messages: &[ContactMessage], palette: &Palette) -> Vec<Line<'static>> {
    if messages.is_empty() {
        return empty("messages", palette);
    }
    let mut lines = Vec::new();
    for msg in messages {
        let marker = if msg.read { "  " } else { "● " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(msg.name.clone(), palette.heading_style()),
            Span::styled(format!(" <{}>", msg.email), palette.dim_style()),
        ]));
        let mut meta = Vec::new();
        if let Some(subject) = &msg.subject {
            meta.push(subject.clone());
        }
        if let Some(at) = msg.created_at {
            meta.push(at.format("%Y-%m-%d %H:%M").to_string());
        }
        if !meta.is_empty() {
            lines.push(Line::styled(format!("  {}", meta.join(" · ")), palette.dim_style()));
        }
        for body_line in msg.message.lines() {
            lines.push(Line::raw(format!("  {body_line}")));
        }
        lines.push(Line::default());
    }
    lines.pop();
    lines
}
