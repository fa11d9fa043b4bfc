use super::*;
use crate::interactive_ratatui::ui::app_state::LINK_COPIED_MESSAGE;
use crate::query::{SearchParams, StatusFilter};
use crate::schemas::{SearchOutcome, TrademarkHit};
use crate::search::SearchError;
use std::sync::Mutex;
use url::Url;

struct FixedBackend;

impl SearchBackend for FixedBackend {
    fn search(&self, params: &SearchParams) -> Result<SearchOutcome, SearchError> {
        Ok(SearchOutcome {
            hits: vec![TrademarkHit {
                id: "97000001".to_string(),
                mark_identification: params.query.to_uppercase(),
                status_type: "registered".to_string(),
                image_url: "https://img.example.com/1.png".to_string(),
                ..TrademarkHit::default()
            }],
            ..SearchOutcome::default()
        })
    }
}

#[derive(Clone, Default)]
struct RecordingClipboard {
    copied: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("no display");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn key(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::empty())
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

fn create_app(clipboard: RecordingClipboard) -> InteractiveSearch {
    let state = AppState::new(
        Url::parse("http://localhost:3000").unwrap(),
        UiConfig::default(),
    );
    InteractiveSearch::new(state, Arc::new(FixedBackend), Box::new(clipboard))
}

fn type_text(app: &mut InteractiveSearch, text: &str) {
    for c in text.chars() {
        app.handle_input(key(KeyCode::Char(c)));
    }
}

fn wait_for_results(app: &mut InteractiveSearch) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.state.search.is_searching && Instant::now() < deadline {
        app.poll_responses();
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(!app.state.search.is_searching, "search did not finish");
}

#[test]
fn test_typed_query_runs_search() {
    let mut app = create_app(RecordingClipboard::default());

    type_text(&mut app, "nike");
    assert_eq!(app.state.search.query, "");

    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.state.search.query, "nike");
    assert!(app.state.search.is_searching);

    wait_for_results(&mut app);
    assert_eq!(app.state.search.results.len(), 1);
    assert_eq!(app.state.search.results[0].mark_identification, "NIKE");
}

#[test]
fn test_start_location_drives_first_search() {
    let mut app = create_app(RecordingClipboard::default());
    let location =
        PageLocation::parse("http://localhost:3000/search?query=mickey&status=pending").unwrap();

    let command = app.state.start(location);
    app.execute_command(command);

    assert_eq!(app.state.search.status, StatusFilter::Pending);
    wait_for_results(&mut app);
    assert_eq!(app.state.search.results[0].mark_identification, "MICKEY");
}

#[test]
fn test_question_mark_is_text_in_search_box() {
    let mut app = create_app(RecordingClipboard::default());

    app.handle_input(key(KeyCode::Char('?')));
    assert_eq!(app.state.mode, Mode::Search);
    assert_eq!(app.renderer.get_search_bar_mut().query(), "?");

    app.handle_input(key(KeyCode::F(1)));
    assert_eq!(app.state.mode, Mode::Help);

    app.handle_input(key(KeyCode::Char('x')));
    assert_eq!(app.state.mode, Mode::Search);
}

#[test]
fn test_question_mark_opens_help_outside_inputs() {
    let mut app = create_app(RecordingClipboard::default());
    app.handle_input(key(KeyCode::Tab));
    assert_eq!(app.state.focus, Focus::Results);

    app.handle_input(key(KeyCode::Char('?')));
    assert_eq!(app.state.mode, Mode::Help);
}

#[test]
fn test_share_copies_link_and_blocks_until_acknowledged() {
    let clipboard = RecordingClipboard::default();
    let copied = Arc::clone(&clipboard.copied);
    let mut app = create_app(clipboard);

    type_text(&mut app, "a&b");
    app.handle_input(key(KeyCode::Enter));
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Char('y')));

    assert_eq!(
        copied.lock().unwrap().as_slice(),
        ["http://localhost:3000/search?query=a%26b&status=".to_string()]
    );
    assert_eq!(app.state.mode, Mode::Acknowledge);
    assert_eq!(app.state.ui.dialog.as_deref(), Some(LINK_COPIED_MESSAGE));

    // Other keys are swallowed by the dialog
    app.handle_input(key(KeyCode::Char('v')));
    app.handle_input(key(KeyCode::Esc));
    assert_eq!(app.state.search.display_mode, DisplayMode::List);
    assert_eq!(app.state.mode, Mode::Search);
    assert!(!app.should_quit);
}

#[test]
fn test_share_failure_is_silent() {
    let mut app = create_app(RecordingClipboard {
        fail: true,
        ..RecordingClipboard::default()
    });
    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Char('y')));

    assert_eq!(app.state.mode, Mode::Search);
    assert!(app.state.ui.dialog.is_none());
    assert!(app.state.ui.message.is_none());
}

#[test]
fn test_copy_from_detail_view() {
    let clipboard = RecordingClipboard::default();
    let copied = Arc::clone(&clipboard.copied);
    let mut app = create_app(clipboard);

    type_text(&mut app, "mickey");
    app.handle_input(key(KeyCode::Enter));
    wait_for_results(&mut app);

    app.handle_input(key(KeyCode::Tab));
    app.handle_input(key(KeyCode::Enter));
    assert_eq!(app.state.mode, Mode::ResultDetail);

    // The detail component learns its hit when drawn
    if let Some(hit) = app.state.ui.selected_result.clone() {
        app.renderer.get_result_detail_mut().set_hit(hit);
    }

    app.handle_input(key(KeyCode::Char('c')));
    app.handle_input(key(KeyCode::Char('u')));
    assert_eq!(
        copied.lock().unwrap().as_slice(),
        [
            "MICKEY".to_string(),
            "https://img.example.com/1.png".to_string()
        ]
    );
    assert_eq!(app.state.ui.message.as_deref(), Some("✓ Copied image URL"));

    app.handle_input(key(KeyCode::Backspace));
    assert_eq!(app.state.mode, Mode::Search);
}

#[test]
fn test_status_shortcuts_and_history() {
    let mut app = create_app(RecordingClipboard::default());
    type_text(&mut app, "nike");
    app.handle_input(key(KeyCode::Enter));
    app.handle_input(key(KeyCode::Tab));

    app.handle_input(key(KeyCode::Char('s')));
    assert_eq!(app.state.search.status, StatusFilter::Registered);

    app.handle_input(key_with(KeyCode::Left, KeyModifiers::ALT));
    assert_eq!(app.state.search.status, StatusFilter::All);

    app.handle_input(key_with(KeyCode::Right, KeyModifiers::ALT));
    assert_eq!(app.state.search.status, StatusFilter::Registered);

    app.handle_input(key_with(KeyCode::Char('S'), KeyModifiers::SHIFT));
    assert_eq!(app.state.search.status, StatusFilter::All);
}

#[test]
fn test_placeholder_buttons_report_unavailable() {
    let mut app = create_app(RecordingClipboard::default());
    app.handle_input(key(KeyCode::Tab));

    app.handle_input(key(KeyCode::Char('f')));
    assert_eq!(
        app.state.ui.message.as_deref(),
        Some("Filter is not available yet")
    );
    assert!(app.message_timer.is_some());
}

#[test]
fn test_double_ctrl_c_exits() {
    let mut app = create_app(RecordingClipboard::default());
    let ctrl_c = key_with(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert!(!app.handle_input(ctrl_c));
    assert_eq!(app.state.ui.message.as_deref(), Some(EXIT_PROMPT));
    assert!(app.handle_input(ctrl_c));
}

#[test]
fn test_esc_returns_to_search_box_then_quits() {
    let mut app = create_app(RecordingClipboard::default());
    app.handle_input(key(KeyCode::Tab));

    assert!(!app.handle_input(key(KeyCode::Esc)));
    assert_eq!(app.state.focus, Focus::SearchInput);
    assert!(app.handle_input(key(KeyCode::Esc)));
}

#[test]
fn test_release_events_ignored() {
    let mut app = create_app(RecordingClipboard::default());
    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;
    app.handle_input(release);
    assert_eq!(app.renderer.get_search_bar_mut().query(), "");
}
