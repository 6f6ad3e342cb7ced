//! Key-driven navigation through the full app: registry, state machine,
//! loader and service against a scripted backend.

mod common;

use common::*;
use crossterm::event::KeyCode;
use termfolio::app::{LoadStatus, Modal, NoticeKind, Tab, TabContent, Theme};
use termfolio::traits::Method;

fn ready(t: &TestApp, tab: Tab) -> TabContent {
    match t.app.content.status(tab) {
        LoadStatus::Ready(content) => content.clone(),
        other => panic!("{tab} not ready: {other:?}"),
    }
}

#[tokio::test]
async fn test_start_loads_about() {
    let mut t = TestApp::new();
    script_public_content(&t.http);

    t.app.start();
    t.settle().await;

    let TabContent::About { profile, skills } = ready(&t, Tab::About) else {
        panic!("expected about content");
    };
    assert_eq!(profile.name, "Ada Lovelace");
    assert_eq!(profile.github_url.as_deref(), Some("https://github.com/ada"));
    assert_eq!(skills.len(), 2);
}

#[tokio::test]
async fn test_h_and_l_walk_tabs_without_wrapping() {
    let mut t = TestApp::new();
    script_public_content(&t.http);

    t.press(KeyCode::Char('h'));
    assert_eq!(t.app.state.current_tab, Tab::About);

    t.press(KeyCode::Char('l'));
    assert_eq!(t.app.state.current_tab, Tab::Projects);
    t.settle().await;
    let TabContent::Projects(projects) = ready(&t, Tab::Projects) else {
        panic!("expected projects");
    };
    assert_eq!(projects[0].tech_stack, vec!["brass", "steam"]);
    assert_eq!(projects[0].id.as_deref(), Some("1"));

    for _ in 0..10 {
        t.press(KeyCode::Char('l'));
    }
    assert_eq!(t.app.state.current_tab, Tab::Stats);
}

#[tokio::test]
async fn test_escape_leaves_command_mode() {
    let mut t = TestApp::new();
    assert!(t.app.state.command_mode);

    t.press(KeyCode::Esc);
    assert!(!t.app.state.command_mode);

    t.press(KeyCode::Char('l'));
    t.press(KeyCode::Char(':'));
    assert_eq!(t.app.state.current_tab, Tab::About);
    assert_eq!(t.app.state.modal, Modal::None);

    t.press(KeyCode::Down);
    assert_eq!(t.app.state.scroll, t.app.state.scroll_step);

    t.press(KeyCode::Esc);
    assert!(t.app.state.command_mode);
}

#[tokio::test]
async fn test_scroll_resets_on_tab_change() {
    let mut t = TestApp::new();
    script_public_content(&t.http);

    t.press(KeyCode::Char('j'));
    t.press(KeyCode::Char('j'));
    assert_eq!(t.app.state.scroll, 6);
    t.press(KeyCode::Char('k'));
    assert_eq!(t.app.state.scroll, 3);

    t.press(KeyCode::Char('l'));
    assert_eq!(t.app.state.scroll, 0);
}

#[tokio::test]
async fn test_blog_command_hides_drafts_from_visitors() {
    let mut t = TestApp::new();
    script_public_content(&t.http);

    t.run_command("blog");
    assert_eq!(t.app.state.current_tab, Tab::Blog);
    assert_eq!(t.app.state.modal, Modal::None);
    t.settle().await;

    let TabContent::Blog(posts) = ready(&t, Tab::Blog) else {
        panic!("expected posts");
    };
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Published");
}

#[tokio::test]
async fn test_experiences_are_newest_first() {
    let mut t = TestApp::new();
    script_public_content(&t.http);

    t.run_command(":experiences");
    t.settle().await;

    let TabContent::Experiences(experiences) = ready(&t, Tab::Experiences) else {
        panic!("expected experiences");
    };
    assert_eq!(experiences[0].company, "Engines Ltd");
    assert_eq!(experiences[1].company, "Analytical Co");
}

#[tokio::test]
async fn test_rapid_switching_keeps_only_latest_load() {
    let mut t = TestApp::new();
    script_public_content(&t.http);

    t.press(KeyCode::Char('l'));
    t.press(KeyCode::Char('l'));
    assert_eq!(t.app.state.current_tab, Tab::Experiences);

    t.settle().await;
    t.settle().await;

    assert!(t.app.content.status(Tab::Projects).is_loading());
    assert!(matches!(
        t.app.content.status(Tab::Experiences),
        LoadStatus::Ready(TabContent::Experiences(_))
    ));
}

#[tokio::test]
async fn test_failed_load_shows_error_in_view() {
    let mut t = TestApp::new();
    t.http.on(
        Method::Get,
        url("projects"),
        termfolio::adapters::MockResponse::status(500),
    );

    t.run_command("projects");
    t.settle().await;

    let status = t.app.content.status(Tab::Projects);
    assert_eq!(status.failure(), Some("The server ran into a problem."));
    assert!(matches!(
        status,
        LoadStatus::Failed {
            retryable: true,
            ..
        }
    ));
}

#[tokio::test]
async fn test_unknown_command_notice_expires() {
    let mut t = TestApp::new();

    t.run_command("frobnicate");
    let notice = t.app.state.notice.clone().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("frobnicate"));
    assert_eq!(t.app.state.modal, Modal::Command);

    t.pump().await;
    assert!(t.app.state.notice.is_none());
}

#[tokio::test]
async fn test_messages_tab_needs_login() {
    let mut t = TestApp::new();

    t.run_command("messages");
    assert_eq!(t.app.state.current_tab, Tab::About);
    assert_eq!(
        t.app.state.notice.as_ref().map(|n| n.text.as_str()),
        Some("You must be logged in to do that.")
    );
}

#[tokio::test]
async fn test_history_recall_with_arrows() {
    let mut t = TestApp::new();
    script_public_content(&t.http);

    t.run_command("projects");
    t.run_command("theme");
    assert_eq!(t.app.state.theme, Theme::Light);
    assert_eq!(t.app.state.history.entries(), ["projects", "theme"]);

    t.press(KeyCode::Char(':'));
    t.press(KeyCode::Up);
    assert_eq!(t.app.state.input, "theme");
    t.press(KeyCode::Up);
    assert_eq!(t.app.state.input, "projects");
    t.press(KeyCode::Up);
    assert_eq!(t.app.state.input, "projects");
    t.press(KeyCode::Down);
    assert_eq!(t.app.state.input, "theme");
    t.press(KeyCode::Down);
    assert_eq!(t.app.state.input, "");
}

#[tokio::test]
async fn test_help_overlay_blocks_commands() {
    let mut t = TestApp::new();

    t.run_command("help");
    assert_eq!(t.app.state.modal, Modal::Help);

    t.press(KeyCode::Char(':'));
    assert_eq!(t.app.state.modal, Modal::Help);
    assert!(t.app.state.notice.as_ref().is_some_and(|n| n.is_error()));

    t.press(KeyCode::Char('q'));
    assert_eq!(t.app.state.modal, Modal::None);
    assert!(!t.app.should_quit());
}

#[tokio::test]
async fn test_quit_paths() {
    let mut t = TestApp::new();
    t.app.handle_key(ctrl('c'));
    assert!(t.app.should_quit());

    let mut t = TestApp::new();
    t.run_command("q");
    assert!(t.app.should_quit());
}
