mod common;

use common::*;
use counter_variants::config::CommitMode;
use counter_variants::counters::RootComposer;
use counter_variants::ui::app::App;
use counter_variants::ui::input::handle_key;
use counter_variants::ui::render::draw;
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    buffer_lines(terminal.backend().buffer())
}

#[test]
fn labels_render_in_order() {
    let app = App::new(RootComposer::new(), CommitMode::PerEvent);
    let lines = render(&app);
    let positions: Vec<usize> = RootComposer::LABELS
        .iter()
        .map(|label| {
            lines
                .iter()
                .position(|line| line.contains(label))
                .unwrap_or_else(|| panic!("{label} not rendered"))
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn each_panel_shows_its_count() {
    let mut app = App::new(RootComposer::new(), CommitMode::PerEvent);
    handle_key(&mut app, press_key(KeyCode::Tab));
    handle_key(&mut app, press_key(KeyCode::Char('+')));
    handle_key(&mut app, press_key(KeyCode::Char('+')));
    handle_key(&mut app, press_key(KeyCode::Tab));
    handle_key(&mut app, press_key(KeyCode::Char('-')));

    let screen = render(&app).join("\n");
    assert!(screen.contains("Count: 2"));
    assert!(screen.contains("Count: -1"));
    assert_eq!(screen.matches("Count: 0").count(), 3);
}

#[test]
fn header_shows_commit_mode_and_queue() {
    let mut app = App::new(RootComposer::new(), CommitMode::PerTick);
    handle_key(&mut app, press_key(KeyCode::Char('+')));
    let screen = render(&app).join("\n");
    assert!(screen.contains("commit: per-tick"));
    assert!(screen.contains("queued: 1"));
    assert!(screen.contains("(1 queued)"));
}

#[test]
fn short_terminal_keeps_whole_panels() {
    let app = App::new(RootComposer::new(), CommitMode::PerEvent);
    let mut terminal = Terminal::new(TestBackend::new(100, 13)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let screen = buffer_lines(terminal.backend().buffer()).join("\n");

    // 13 rows leave 7 for the body: room for two panels.
    assert_eq!(screen.matches("Count: 0").count(), 2);
    assert!(screen.contains("Basic"));
    assert!(screen.contains("Functional"));
    assert!(!screen.contains("Reducer"));
}

#[test]
fn footer_offers_unknown_action_only_on_reducer() {
    let mut app = App::new(RootComposer::new(), CommitMode::PerEvent);
    assert!(!render(&app).join("\n").contains("r: Unknown action"));

    handle_key(&mut app, press_key(KeyCode::BackTab));
    assert!(render(&app).join("\n").contains("r: Unknown action"));
}
