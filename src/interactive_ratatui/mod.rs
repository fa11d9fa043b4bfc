use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::query::PageLocation;
use crate::search::SearchBackend;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod tests;

pub use self::application::clipboard_service::{ClipboardService, ClipboardSink};
pub use self::domain::models::{DisplayMode, FacetDisplayPolicy, UiConfig};

use self::application::search_service::SearchService;
use self::constants::*;
use self::domain::models::{Focus, Mode, SearchResponse};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, EXIT_PROMPT},
    events::Message,
    renderer::Renderer,
};

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: SearchService,
    search_receiver: Receiver<SearchResponse>,
    clipboard: Box<dyn ClipboardSink>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
    should_quit: bool,
}

impl InteractiveSearch {
    pub fn new(
        state: AppState,
        backend: Arc<dyn SearchBackend>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let (search_service, search_receiver) = SearchService::new(backend);

        Self {
            state,
            renderer: Renderer::new(),
            search_service,
            search_receiver,
            clipboard,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
            should_quit: false,
        }
    }

    pub fn run(&mut self, location: PageLocation) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let command = self.state.start(location);
        self.execute_command(command);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.poll_responses();

            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.message_timer = None;
                    self.execute_command(Command::ClearMessage);
                }
            }

            if self.should_quit {
                break;
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Feed every finished search into the state
    fn poll_responses(&mut self) {
        while let Ok(response) = self.search_receiver.try_recv() {
            self.handle_message(Message::SearchCompleted(response));
        }
    }

    /// Returns true when the application should exit
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            return false;
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::ResultDetail => match key.code {
                KeyCode::F(1) | KeyCode::Char('?') => Some(Message::ShowHelp),
                _ => self.renderer.get_result_detail_mut().handle_key(key),
            },
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
            Mode::Acknowledge => self.renderer.get_ack_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        self.should_quit
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let focus = self.state.focus;
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::F(1) => return Some(Message::ShowHelp),
            KeyCode::Tab => return Some(Message::FocusNext),
            KeyCode::BackTab => return Some(Message::FocusPrev),
            KeyCode::Left if alt => return Some(Message::NavigateBack),
            KeyCode::Right if alt => return Some(Message::NavigateForward),
            KeyCode::Esc if focus == Focus::SearchInput => return Some(Message::Quit),
            KeyCode::Esc => return Some(Message::SetFocus(Focus::SearchInput)),
            KeyCode::Down if focus == Focus::SearchInput => {
                return Some(Message::SetFocus(Focus::Results));
            }
            _ => {}
        }

        // Printable shortcuts only apply outside text inputs
        if !focus.is_text_input() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            let shortcut = match key.code {
                KeyCode::Char('?') => Some(Message::ShowHelp),
                KeyCode::Char('/') => Some(Message::SetFocus(Focus::SearchInput)),
                KeyCode::Char('v') => Some(Message::ToggleDisplayMode),
                KeyCode::Char('y') => Some(Message::Share),
                KeyCode::Char('f') => Some(Message::FilterButtonPressed),
                KeyCode::Char('m') => Some(Message::MenuButtonPressed),
                KeyCode::Char('s') => Some(Message::SelectStatus(self.state.search.status.next())),
                KeyCode::Char('S') => Some(Message::SelectStatus(self.state.search.status.prev())),
                _ => None,
            };
            if shortcut.is_some() {
                return shortcut;
            }
        }

        match focus {
            Focus::SearchInput => self.renderer.get_search_bar_mut().handle_key(key),
            Focus::Results => match self.state.search.display_mode {
                DisplayMode::List => self.renderer.get_result_list_mut().handle_key(key),
                DisplayMode::Grid => self.renderer.get_result_grid_mut().handle_key(key),
            },
            Focus::StatusFilter => self.renderer.get_status_filter_mut().handle_key(key),
            Focus::Facets | Focus::FacetFilter => {
                self.renderer.get_facet_panel_mut().handle_key(key)
            }
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch(request) => {
                self.search_service.dispatch(request);
            }
            Command::ShareLink(url) => match self.clipboard.set_text(&url) {
                Ok(()) => {
                    info!(url = %url, "share link copied");
                    self.handle_message(Message::ShareSucceeded);
                }
                Err(e) => warn!("failed to copy share link: {e:#}"),
            },
            Command::CopyToClipboard(content) => {
                let message = match self.clipboard.set_text(content.text()) {
                    Ok(()) => content.confirmation().to_string(),
                    Err(e) => {
                        warn!("clipboard copy failed: {e:#}");
                        format!("Failed to copy: {e}")
                    }
                };
                self.state.ui.message = Some(message);
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = MESSAGE_CLEAR_DELAY_MS;
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
            Command::Quit => {
                debug!("quit requested");
                self.should_quit = true;
            }
        }
    }
}
