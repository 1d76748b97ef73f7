use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use sessiondesk::backend::snapshot::Snapshot;
use sessiondesk::backend::{SessionBackend, SnapshotBackend};
use sessiondesk::config::Config;
use sessiondesk::entities::{Session, SessionStatus};
use sessiondesk::logger::Logger;
use sessiondesk::ui::core::{Action, Component, DialogType, EventType};
use sessiondesk::ui::AppComponent;
use std::sync::Arc;
use std::time::Duration;

fn key(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn code(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn sessions() -> Vec<Session> {
    vec![
        Session::new("Completed run", Some(SessionStatus::Completed)),
        Session::new("Busy run", Some(SessionStatus::Processing)),
        Session::new("Failed run", Some(SessionStatus::Failed)),
    ]
}

fn app_with(sessions: Vec<Session>) -> (AppComponent, Arc<dyn SessionBackend>) {
    let dir = std::env::temp_dir().join(format!("sessiondesk-ui-{}", uuid::Uuid::new_v4()));
    let backend: Arc<dyn SessionBackend> = Arc::new(SnapshotBackend::with_snapshot(
        Snapshot {
            sessions,
            ..Snapshot::default()
        },
        &dir.join("sessions.json"),
        &dir,
        false,
    ));
    let app = AppComponent::new(Arc::clone(&backend), &Config::default(), Logger::new());
    (app, backend)
}

/// Wait for background tasks and feed their results back into the app
async fn settle(app: &mut AppComponent) {
    for _ in 0..100 {
        let actions = app.process_background_actions();
        let done = actions.is_empty() && app.active_task_count() == 0;
        for action in actions {
            let action = app.update(action);
            app.handle_app_action(action);
        }
        if done {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_initial_load_renders_sessions() {
    let (mut app, _backend) = app_with(sessions());
    app.trigger_initial_load();
    settle(&mut app).await;

    assert_eq!(app.state().sessions.len(), 3);
    let text = screen(&mut app);
    assert!(text.contains("Completed run"));
    assert!(text.contains("0 of 3 selected"));
}

#[tokio::test]
async fn test_select_all_counts_eligibility() {
    let (mut app, _backend) = app_with(sessions());
    app.trigger_initial_load();
    settle(&mut app).await;

    app.handle_event(key('A'));
    let stats = app.state().selection_stats();
    assert_eq!(stats.selected, 3);
    assert_eq!(stats.eligible, 2);
    assert_eq!(stats.ineligible, 1);
    assert_eq!(stats.pages, 1);

    app.handle_event(key('U'));
    assert_eq!(app.state().selection_stats().selected, 0);
}

#[tokio::test]
async fn test_bulk_delete_skips_active_sessions() {
    let (mut app, backend) = app_with(sessions());
    app.trigger_initial_load();
    settle(&mut app).await;

    app.handle_event(key('A'));
    app.handle_event(key('D'));
    match app.dialog().top() {
        Some(DialogType::BulkDeleteConfirmation(targets)) => assert_eq!(targets.len(), 2),
        other => panic!("expected bulk delete confirmation, got {other:?}"),
    }

    app.handle_event(code(KeyCode::Enter));
    settle(&mut app).await;

    let remaining = backend.list_sessions().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Busy run");
    assert_eq!(app.state().sessions.len(), 1);
}

#[tokio::test]
async fn test_delete_dialog_flow_for_highlighted_row() {
    let (mut app, backend) = app_with(sessions());
    app.trigger_initial_load();
    settle(&mut app).await;

    app.handle_event(key('d'));
    assert!(matches!(app.dialog().top(), Some(DialogType::DeleteSession(_))));

    // Unconfirmed Enter does nothing
    app.handle_event(code(KeyCode::Enter));
    assert_eq!(app.active_task_count(), 0);

    app.handle_event(key(' '));
    app.handle_event(code(KeyCode::Enter));
    settle(&mut app).await;

    assert!(!app.dialog().is_visible());
    assert_eq!(backend.list_sessions().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_close_selected_closes_eligible_sessions() {
    let (mut app, backend) = app_with(sessions());
    app.trigger_initial_load();
    settle(&mut app).await;

    app.handle_event(key(' '));
    app.handle_event(key('C'));
    assert!(matches!(app.dialog().top(), Some(DialogType::CloseAllSessions(_))));

    app.handle_event(code(KeyCode::Tab));
    app.handle_event(code(KeyCode::Enter));
    settle(&mut app).await;

    let closed: Vec<Session> = backend
        .list_sessions()
        .await
        .unwrap()
        .into_iter()
        .filter(|s| s.is_closed)
        .collect();
    assert_eq!(closed.len(), 1);
    assert!(!app.dialog().is_visible());
    assert!(app.state().selected_ids.is_empty());
}

#[tokio::test]
async fn test_line_items_open_and_close() {
    let (mut app, _backend) = app_with(sessions());
    app.trigger_initial_load();
    settle(&mut app).await;

    app.handle_event(key('l'));
    settle(&mut app).await;
    assert!(app.line_items().is_visible());
    assert!(screen(&mut app).contains("No line items for this session"));

    app.handle_event(code(KeyCode::Esc));
    assert!(!app.line_items().is_visible());
}

#[tokio::test]
async fn test_quit_keys() {
    let (mut app, _backend) = app_with(Vec::new());
    app.handle_event(key('q'));
    assert!(app.should_quit());

    let (mut app, _backend) = app_with(Vec::new());
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_help_dialog_toggles() {
    let (mut app, _backend) = app_with(Vec::new());
    app.handle_event(key('?'));
    assert!(matches!(app.dialog().top(), Some(DialogType::Help)));
    assert!(screen(&mut app).contains("SESSIONDESK"));

    app.handle_event(key('?'));
    assert!(!app.dialog().is_visible());
}

#[tokio::test]
async fn test_pagination() {
    let many: Vec<Session> = (0..30)
        .map(|i| Session::new(format!("Run {i:02}"), Some(SessionStatus::Completed)))
        .collect();
    let (mut app, _backend) = app_with(many);
    app.trigger_initial_load();
    settle(&mut app).await;

    assert_eq!(app.state().page_count(), 2);
    app.handle_event(key('a'));
    assert_eq!(app.state().selection_stats().selected, 25);

    app.handle_event(key('n'));
    assert_eq!(app.state().page, 1);
    assert_eq!(app.state().page_sessions().len(), 5);
    app.handle_event(key('n'));
    assert_eq!(app.state().page, 1);
    app.handle_event(key('p'));
    assert_eq!(app.state().page, 0);

    // Actions no component owns come back out of update unchanged
    assert!(matches!(app.update(Action::ReloadSessions), Action::ReloadSessions));
}

#[tokio::test]
async fn test_failed_delete_can_be_retried_from_the_dialog() {
    let dir = std::env::temp_dir().join(format!("sessiondesk-ui-{}", uuid::Uuid::new_v4()));
    let snapshot_dir = dir.join("snapshots");
    let backend: Arc<dyn SessionBackend> = Arc::new(SnapshotBackend::with_snapshot(
        Snapshot {
            sessions: sessions(),
            ..Snapshot::default()
        },
        &snapshot_dir.join("sessions.json"),
        &dir,
        true,
    ));
    let mut app = AppComponent::new(Arc::clone(&backend), &Config::default(), Logger::new());
    app.trigger_initial_load();
    settle(&mut app).await;

    app.handle_event(key('d'));
    app.handle_event(key(' '));
    app.handle_event(code(KeyCode::Enter));
    settle(&mut app).await;

    // The write fails, so the error stacks over the still-confirmed delete dialog
    assert!(matches!(app.dialog().top(), Some(DialogType::Error(_))));
    assert_eq!(backend.list_sessions().await.unwrap().len(), 3);

    app.handle_event(code(KeyCode::Esc));
    assert!(matches!(app.dialog().top(), Some(DialogType::DeleteSession(_))));
    assert!(app.dialog().delete_dialog.confirmed());

    std::fs::create_dir_all(&snapshot_dir).unwrap();
    app.handle_event(code(KeyCode::Enter));
    settle(&mut app).await;

    assert!(!app.dialog().is_visible());
    let remaining = backend.list_sessions().await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|s| s.name != "Completed run"));

    std::fs::remove_dir_all(&dir).unwrap();
}
