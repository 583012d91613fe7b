//! Window state and key handling, plus the terminal loop that drives it.

use super::entry::EntryField;
use super::panes::{CheckListsPane, EntryBar, TaskPane};
use super::render;
use crate::libs::check_list::CheckList;
use crate::libs::controller::{StoreError, TaskService};
use crate::libs::messages::Message;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Lists,
    Tasks,
    Entry,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Lists => Focus::Tasks,
            Focus::Tasks => Focus::Entry,
            Focus::Entry => Focus::Lists,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Lists => Focus::Entry,
            Focus::Tasks => Focus::Lists,
            Focus::Entry => Focus::Tasks,
        }
    }
}

/// Dialogs drawn over the window; they take every key while open.
#[derive(Debug)]
pub enum Modal {
    NewList(EntryField),
    Error(String),
}

pub struct TasksApp<S: TaskService> {
    service: S,
    lists: CheckListsPane,
    tasks: TaskPane,
    entry: EntryBar,
    focus: Focus,
    modal: Option<Modal>,
    quit: bool,
}

impl<S: TaskService> TasksApp<S> {
    /// Builds the window and loads the lists and the first list's tasks.
    pub fn new(service: S, placeholder: &str) -> Self {
        let mut app = TasksApp {
            service,
            lists: CheckListsPane::new(),
            tasks: TaskPane::new(),
            entry: EntryBar::new(placeholder),
            focus: Focus::Lists,
            modal: None,
            quit: false,
        };
        app.refresh_lists();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match self.modal.take() {
            Some(Modal::Error(_)) => {}
            Some(Modal::NewList(field)) => self.handle_new_list_key(field, key),
            None => match self.focus {
                Focus::Entry => self.handle_entry_key(key),
                Focus::Lists | Focus::Tasks => self.handle_navigation_key(key),
            },
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Char('a') | KeyCode::Char('i') => self.set_focus(Focus::Entry),
            KeyCode::Char('n') => self.open_new_list(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Enter if self.focus == Focus::Lists => self.set_focus(Focus::Tasks),
            KeyCode::Char(' ') | KeyCode::Enter if self.focus == Focus::Tasks => self.toggle_task(),
            _ => {}
        }
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.add_task(),
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Esc => self.set_focus(Focus::Tasks),
            KeyCode::Backspace => self.entry.field_mut().backspace(),
            KeyCode::Char(c) => self.entry.field_mut().insert(c),
            _ => {}
        }
    }

    fn handle_new_list_key(&mut self, mut field: EntryField, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => {
                if let Some(name) = field.submit() {
                    self.add_check_list(&name);
                }
            }
            KeyCode::Backspace => {
                field.backspace();
                self.modal = Some(Modal::NewList(field));
            }
            KeyCode::Char(c) => {
                field.insert(c);
                self.modal = Some(Modal::NewList(field));
            }
            _ => self.modal = Some(Modal::NewList(field)),
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Entry {
            self.entry.field_mut().focus_out();
        }
        if focus == Focus::Entry {
            self.entry.field_mut().focus_in();
        }
        self.focus = focus;
    }

    fn move_selection(&mut self, delta: isize) {
        match self.focus {
            Focus::Lists => {
                if self.lists.move_selection(delta) {
                    self.refresh_tasks();
                }
            }
            Focus::Tasks => self.tasks.move_cursor(delta),
            Focus::Entry => {}
        }
    }

    fn open_new_list(&mut self) {
        let mut field = EntryField::new(&Message::NewListPlaceholder.to_string());
        field.focus_in();
        self.modal = Some(Modal::NewList(field));
    }

    fn add_task(&mut self) {
        let list_id = self.lists.selected_id();
        match self.entry.submit(&mut self.service, list_id) {
            Ok(Some(id)) => {
                debug!(id, "task submitted");
                self.refresh_tasks();
            }
            Ok(None) => debug!("{}", Message::EmptyTaskSkipped),
            Err(e) => self.show_error(e),
        }
    }

    fn toggle_task(&mut self) {
        if let Err(e) = self.tasks.toggle(&mut self.service) {
            self.show_error(e);
        }
    }

    fn add_check_list(&mut self, name: &str) {
        let check_list = CheckList::new(name, "");
        match self.service.add_check_list(&check_list) {
            Ok(id) => {
                self.refresh_lists();
                self.lists.select_id(id);
                self.refresh_tasks();
            }
            Err(e) => self.show_error(e),
        }
    }

    fn refresh_lists(&mut self) {
        if let Err(e) = self.lists.refresh(&mut self.service) {
            self.show_error(e);
            return;
        }
        self.refresh_tasks();
    }

    fn refresh_tasks(&mut self) {
        let list_id = self.lists.selected_id();
        if let Err(e) = self.tasks.refresh(&mut self.service, list_id) {
            self.show_error(e);
        }
    }

    fn show_error(&mut self, e: StoreError) {
        warn!(status = %e.status(), "{}", e);
        self.modal = Some(Modal::Error(e.to_string()));
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn lists(&self) -> &CheckListsPane {
        &self.lists
    }

    pub fn tasks(&self) -> &TaskPane {
        &self.tasks
    }

    pub fn entry(&self) -> &EntryBar {
        &self.entry
    }

    /// Hands the store back, e.g. to close it once the window is gone.
    pub fn into_service(self) -> S {
        self.service
    }
}

/// Raw mode plus the alternate screen, undone on drop even when setup fails halfway.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Every step runs; a failed one must not skip the rest
        if let Err(e) = execute!(stdout(), LeaveAlternateScreen, cursor::Show) {
            warn!("leaving the alternate screen failed: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            warn!("disabling raw mode failed: {}", e);
        }
    }
}

/// Runs the window until the user quits, restoring the terminal afterwards.
pub fn run<S: TaskService>(app: &mut TasksApp<S>) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    event_loop(&mut terminal, app)
}

fn event_loop<S: TaskService>(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut TasksApp<S>) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| render::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
