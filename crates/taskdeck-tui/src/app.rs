use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use taskdeck_client::{ApiError, ApiResponse, Endpoints, TaskAction, TaskApi};
use taskdeck_core::TaskdeckResult;
use taskdeck_domain::{ListFilter, Task, TaskId, TaskStats, VisibilityRule};

use crate::counters::StatsPanel;
use crate::drag::DragState;
use crate::events::{Event, EventHandler};
use crate::forms::{cycle_priority, edit_text_field, AddTaskForm, EditTaskForm, FormField};
use crate::input::InputState;
use crate::reveal::RevealState;
use crate::selection::SelectionState;
use crate::sidebar::SidebarState;
use crate::toast::ToastStack;
use crate::ui::{self, HitAreas};

/// Delay between a successful mutation's toast and the task-list refresh,
/// giving the user time to read the message.
pub const REFRESH_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    AddTask,
    EditTask,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit(TaskId),
}

/// Completions of background requests, delivered to the event loop.
#[derive(Debug)]
pub enum NetEvent {
    TasksLoaded(Result<Vec<Task>, ApiError>),
    SubmitFinished {
        kind: FormKind,
        result: Result<ApiResponse, ApiError>,
    },
    ActionFinished {
        action: TaskAction,
        task_id: TaskId,
        result: Result<ApiResponse, ApiError>,
    },
    ReorderFinished(Result<ApiResponse, ApiError>),
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub tasks: Vec<Task>,
    pub visibility: VisibilityRule,
    pub visible: Vec<bool>,
    pub active_filter: Option<ListFilter>,
    pub selection: SelectionState,
    pub search: InputState,
    pub add_form: AddTaskForm,
    pub edit_form: Option<EditTaskForm>,
    pub toasts: ToastStack,
    pub stats: StatsPanel,
    pub sidebar: SidebarState,
    pub drag: DragState,
    pub reveal: RevealState,
    pub layout: HitAreas,
    pub pending_refresh: Option<Instant>,
    pub reorder_snapshot: Option<Vec<Task>>,
    pub api: Arc<dyn TaskApi>,
    pub endpoints: Endpoints,
    pub(crate) net_tx: mpsc::UnboundedSender<NetEvent>,
}

impl App {
    pub fn new(
        api: Arc<dyn TaskApi>,
        endpoints: Endpoints,
    ) -> (Self, mpsc::UnboundedReceiver<NetEvent>) {
        let (net_tx, net_rx) = mpsc::unbounded_channel();
        let app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            tasks: Vec::new(),
            visibility: VisibilityRule::default(),
            visible: Vec::new(),
            active_filter: Some(ListFilter::All),
            selection: SelectionState::new(),
            search: InputState::new(),
            add_form: AddTaskForm::new(),
            edit_form: None,
            toasts: ToastStack::new(),
            stats: StatsPanel::default(),
            sidebar: SidebarState::default(),
            drag: DragState::Idle,
            reveal: RevealState::default(),
            layout: HitAreas::default(),
            pending_refresh: None,
            reorder_snapshot: None,
            api,
            endpoints,
            net_tx,
        };
        (app, net_rx)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub async fn run(
        &mut self,
        mut net_rx: mpsc::UnboundedReceiver<NetEvent>,
    ) -> TaskdeckResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();
        self.spawn_load_tasks();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Event::Key(key)) => self.handle_key_event(key),
                        Some(Event::Mouse(mouse)) => self.handle_mouse_event(mouse),
                        Some(Event::Tick) => self.on_tick(Instant::now()),
                        None => break,
                    }
                }
                Some(net_event) = net_rx.recv() => {
                    self.handle_net_event(net_event);
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::AddTask => self.handle_add_form_key(key),
            AppMode::EditTask => self.handle_edit_form_key(key),
            AppMode::Search => self.handle_search_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') = key.code {
                self.toggle_add_task();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Esc => self.close_all_forms(),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.apply_filter(ListFilter::ALL_FILTERS[index]);
            }
            KeyCode::Char('/') => self.mode = AppMode::Search,
            KeyCode::Char('b') => self.sidebar.toggle(),
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(self.tasks.len()),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_for_selected(),
            KeyCode::Char('c') => self.toggle_complete_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            _ => {}
        }
    }

    fn handle_add_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_all_forms(),
            KeyCode::Enter => {
                if !self.add_form.submitting {
                    self.submit_add_form();
                }
            }
            KeyCode::Tab => self.add_form.focus = self.add_form.focus.next(),
            code => match self.add_form.focus {
                FormField::Description => {
                    edit_text_field(&mut self.add_form.description, code);
                }
                FormField::Priority => match code {
                    KeyCode::Left => {
                        self.add_form.priority = cycle_priority(self.add_form.priority, false);
                    }
                    KeyCode::Right => {
                        self.add_form.priority = cycle_priority(self.add_form.priority, true);
                    }
                    _ => {}
                },
            },
        }
    }

    fn handle_edit_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.edit_form.as_mut() else {
            self.mode = AppMode::Normal;
            return;
        };
        match key.code {
            KeyCode::Esc => self.close_all_forms(),
            KeyCode::Enter => {
                if !form.submitting {
                    self.submit_edit_form();
                }
            }
            KeyCode::Tab => form.focus = form.focus.next(),
            code => match form.focus {
                FormField::Description => {
                    edit_text_field(&mut form.description, code);
                }
                FormField::Priority => match code {
                    KeyCode::Left => form.priority = cycle_priority(form.priority, false),
                    KeyCode::Right => form.priority = cycle_priority(form.priority, true),
                    _ => {}
                },
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = AppMode::Normal,
            code => {
                if edit_text_field(&mut self.search, code) {
                    self.apply_search();
                }
            }
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_mouse_down(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let hover = self.layout.task_row_at(mouse.column, mouse.row);
                self.drag.set_hover(hover);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.finish_drag(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn on_mouse_down(&mut self, column: u16, row: u16) {
        if let Some(index) = self.layout.toast_at(column, row) {
            self.toasts.dismiss(index);
            return;
        }
        if let Some(filter) = self.layout.filter_button_at(column, row) {
            self.apply_filter(filter);
            return;
        }
        if self.layout.over_sidebar_toggle(column, row) {
            self.sidebar.toggle();
            return;
        }
        if let Some(task_index) = self.layout.task_row_at(column, row) {
            self.selection.set(Some(task_index));
            self.begin_drag(task_index);
        }
    }

    /// Advance animations and fire the scheduled refresh once its delay has
    /// elapsed.
    pub fn on_tick(&mut self, now: Instant) {
        self.toasts.tick(now);
        self.stats.step_all();
        if let Some(deadline) = self.pending_refresh {
            if now >= deadline {
                self.pending_refresh = None;
                self.spawn_load_tasks();
            }
        }
    }

    pub fn toggle_add_task(&mut self) {
        if self.add_form.visible {
            self.add_form.visible = false;
            if self.mode == AppMode::AddTask {
                self.mode = AppMode::Normal;
            }
        } else {
            self.add_form.visible = true;
            self.add_form.focus = FormField::Description;
            self.mode = AppMode::AddTask;
        }
    }

    /// Close every open edit form and the add-task form.
    pub fn close_all_forms(&mut self) {
        self.edit_form = None;
        self.add_form.visible = false;
        self.mode = AppMode::Normal;
    }

    pub fn open_edit_for_selected(&mut self) {
        let Some(task) = self.selection.get().and_then(|idx| self.tasks.get(idx)) else {
            return;
        };
        self.edit_form = Some(EditTaskForm::for_task(task));
        self.mode = AppMode::EditTask;
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.get().and_then(|idx| self.tasks.get(idx))
    }

    pub fn schedule_refresh(&mut self, now: Instant) {
        self.pending_refresh = Some(now + REFRESH_DELAY);
    }

    pub fn refresh_visibility(&mut self) {
        self.visible = self.visibility.visible_flags(&self.tasks);
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn spawn_load_tasks(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.net_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_tasks().await;
            let _ = tx.send(NetEvent::TasksLoaded(result));
        });
    }

    pub(crate) fn recompute_stats(&mut self) {
        self.stats.set_targets(TaskStats::compute(&self.tasks));
    }
}

fn setup_terminal() -> TaskdeckResult<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> TaskdeckResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
