use chrono::{Duration, Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::calendar::{
    grid, DayItems, FilterMode, ItemRef, ProjectId, Store, TodoId, ViewMode,
};
use crate::components::event_form::EventFormState;
use crate::components::form::FormState;
use crate::components::project_form::ProjectFormState;
use crate::components::todo_form::TodoFormState;
use crate::config::Config;
use crate::share;
use crate::theme::{Theme, ThemeConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Calendar,
    Sidebar,
}

/// Popup drawn over the calendar. Only one is open at a time.
#[derive(Debug, Clone)]
pub enum Modal {
    TodoForm(TodoFormState),
    EventForm(EventFormState),
    ProjectForm(ProjectFormState),
    Detail(ItemRef),
    ConfirmDeleteProject(ProjectId),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSource {
    Keyboard,
    Mouse,
}

/// A todo being carried to another day. The todo id is the whole payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    pub todo_id: TodoId,
    pub origin: NaiveDate,
    pub source: DragSource,
    /// Day currently under the pointer (mouse drags only).
    pub hover: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SidebarEntry {
    All,
    Project(ProjectId),
    Personal,
}

pub struct App {
    pub running: bool,
    pub view_mode: ViewMode,
    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    pub filter: FilterMode,
    pub focus: Focus,
    pub modal: Option<Modal>,
    /// Index into the selected day's item list.
    pub item_cursor: usize,
    pub sidebar_cursor: usize,
    pub drag: Option<Drag>,
    pub status_message: Option<String>,
    pub theme: Theme,
    pub sidebar_width: u16,
    /// Text the event loop should copy to the clipboard.
    pub pending_clipboard: Option<String>,
    share_base_url: String,
    /// Color overrides reapplied on every theme switch.
    theme_config: ThemeConfig,
    store: Store,
}

impl App {
    pub fn new(store: Store, config: &Config, today: NaiveDate) -> Self {
        Self {
            running: true,
            view_mode: config.calendar.view_mode(),
            selected_date: today,
            today,
            filter: FilterMode::All,
            focus: Focus::Calendar,
            modal: None,
            item_cursor: 0,
            sidebar_cursor: 0,
            drag: None,
            status_message: None,
            theme: config.theme.to_theme(),
            sidebar_width: config.ui.sidebar_width,
            pending_clipboard: None,
            share_base_url: config.share.base_url.clone(),
            theme_config: config.theme.clone(),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn tick(&mut self) {
        self.today = Local::now().date_naive();
    }

    pub fn day_items(&self, date: NaiveDate) -> DayItems<'_> {
        DayItems::for_date(&self.store, &self.filter, date)
    }

    pub fn selected_item(&self) -> Option<ItemRef> {
        self.day_items(self.selected_date).item_ref(self.item_cursor)
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    // ── Navigation ──

    pub fn select_date(&mut self, date: NaiveDate) {
        if date != self.selected_date {
            debug!(%date, "date selected");
            self.selected_date = date;
            self.item_cursor = 0;
        }
    }

    pub fn next_day(&mut self) {
        self.select_date(self.selected_date + Duration::days(1));
    }

    pub fn prev_day(&mut self) {
        self.select_date(self.selected_date - Duration::days(1));
    }

    pub fn next_week(&mut self) {
        self.select_date(self.selected_date + Duration::weeks(1));
    }

    pub fn prev_week(&mut self) {
        self.select_date(self.selected_date - Duration::weeks(1));
    }

    /// One week in week view, one month in month view.
    pub fn next_period(&mut self) {
        match self.view_mode {
            ViewMode::Week => self.next_week(),
            ViewMode::Month => self.select_date(grid::shift_months(self.selected_date, 1)),
        }
    }

    pub fn prev_period(&mut self) {
        match self.view_mode {
            ViewMode::Week => self.prev_week(),
            ViewMode::Month => self.select_date(grid::shift_months(self.selected_date, -1)),
        }
    }

    pub fn go_to_today(&mut self) {
        self.tick();
        self.select_date(self.today);
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggle();
    }

    pub fn next_item(&mut self) {
        let len = self.day_items(self.selected_date).len();
        if len > 0 {
            self.item_cursor = (self.item_cursor + 1) % len;
        }
    }

    pub fn prev_item(&mut self) {
        let len = self.day_items(self.selected_date).len();
        if len > 0 {
            self.item_cursor = (self.item_cursor + len - 1) % len;
        }
    }

    pub fn select_item(&mut self, date: NaiveDate, item: &ItemRef) {
        self.select_date(date);
        let position = self.day_items(date).refs().iter().position(|r| r == item);
        if let Some(idx) = position {
            self.item_cursor = idx;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.day_items(self.selected_date).len();
        self.item_cursor = self.item_cursor.min(len.saturating_sub(1));
    }

    pub fn toggle_theme(&mut self) {
        self.theme = ThemeConfig {
            preset: Some(self.theme.opposite_preset().to_string()),
            ..self.theme_config.clone()
        }
        .to_theme();
        info!(theme = %self.theme.name, "theme switched");
    }

    // ── Items ──

    pub fn toggle_selected_todo(&mut self) {
        let Some(ItemRef::Todo(id)) = self.selected_item() else {
            return;
        };
        match self.store.toggle_todo(&id) {
            Ok(true) => self.set_status("완료 처리했습니다"),
            Ok(false) => self.set_status("미완료로 되돌렸습니다"),
            Err(e) => {
                warn!(error = %e, "toggle failed");
                self.set_status(e.to_string());
            }
        }
    }

    pub fn delete_selected_item(&mut self) {
        let result = match self.selected_item() {
            Some(ItemRef::Todo(id)) => self.store.delete_todo(&id).map(|t| t.title),
            Some(ItemRef::Event(id)) => self.store.delete_event(&id).map(|e| e.title),
            None => return,
        };
        match result {
            Ok(title) => self.set_status(format!("'{}' 삭제됨", title)),
            Err(e) => {
                warn!(error = %e, "delete failed");
                self.set_status(e.to_string());
            }
        }
        self.clamp_cursor();
    }

    pub fn show_detail(&mut self) {
        if let Some(item) = self.selected_item() {
            self.modal = Some(Modal::Detail(item));
        }
    }

    pub fn show_help(&mut self) {
        self.modal = Some(Modal::Help);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // ── Forms ──

    pub fn open_todo_form(&mut self) {
        self.modal = Some(Modal::TodoForm(TodoFormState::new(self.selected_date)));
    }

    pub fn open_event_form(&mut self) {
        self.modal = Some(Modal::EventForm(EventFormState::new(self.selected_date)));
    }

    pub fn open_project_form(&mut self) {
        self.modal = Some(Modal::ProjectForm(ProjectFormState::new()));
    }

    /// Opens the edit form for the selected todo or event, or the one shown
    /// in the detail popup.
    pub fn edit_selected_item(&mut self) {
        let item = match &self.modal {
            Some(Modal::Detail(item)) => Some(item.clone()),
            _ => self.selected_item(),
        };
        self.modal = match item {
            Some(ItemRef::Todo(id)) => self
                .store
                .todo(&id)
                .map(|t| Modal::TodoForm(TodoFormState::edit(t))),
            Some(ItemRef::Event(id)) => self
                .store
                .event(&id)
                .map(|e| Modal::EventForm(EventFormState::edit(e))),
            None => None,
        };
    }

    fn active_form(&mut self) -> Option<&mut dyn FormState> {
        match self.modal.as_mut()? {
            Modal::TodoForm(f) => Some(f),
            Modal::EventForm(f) => Some(f),
            Modal::ProjectForm(f) => Some(f),
            _ => None,
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = self.active_form() {
            form.next_field();
        }
    }

    pub fn form_prev_field(&mut self) {
        if let Some(form) = self.active_form() {
            form.prev_field();
        }
    }

    pub fn form_input_char(&mut self, c: char) {
        if let Some(form) = self.active_form() {
            form.input_char(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = self.active_form() {
            form.backspace();
        }
    }

    pub fn form_space(&mut self) {
        let projects = self.store.projects();
        let form: Option<&mut dyn FormState> = match self.modal.as_mut() {
            Some(Modal::TodoForm(f)) => Some(f),
            Some(Modal::EventForm(f)) => Some(f),
            Some(Modal::ProjectForm(f)) => Some(f),
            _ => None,
        };
        if let Some(form) = form {
            form.space(projects);
        }
    }

    /// Saves the open form. Incomplete forms stay open.
    pub fn submit_form(&mut self) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        if !matches!(modal, Modal::TodoForm(_) | Modal::EventForm(_) | Modal::ProjectForm(_)) {
            self.modal = Some(modal);
            return;
        }

        let outcome = match &modal {
            Modal::TodoForm(form) => match form.to_draft() {
                None => None,
                Some(draft) => Some(match &form.editing {
                    Some(id) => self.store.update_todo(id, draft).map(|_| "TODO를 수정했습니다"),
                    None => self.store.create_todo(draft).map(|_| "TODO를 추가했습니다"),
                }),
            },
            Modal::EventForm(form) => match form.to_draft() {
                None => None,
                Some(draft) => Some(match &form.editing {
                    Some(id) => self.store.update_event(id, draft).map(|_| "일정을 수정했습니다"),
                    None => self.store.create_event(draft).map(|_| "일정을 추가했습니다"),
                }),
            },
            Modal::ProjectForm(form) => match form.to_draft() {
                None => None,
                Some(draft) => Some(match &form.editing {
                    Some(id) => self.store.update_project(id, draft).map(|_| "프로젝트를 수정했습니다"),
                    None => {
                        self.store.create_project(draft);
                        Ok("프로젝트를 추가했습니다")
                    }
                }),
            },
            _ => None,
        };

        match outcome {
            None => {
                self.set_status("필수 항목을 입력하세요");
                self.modal = Some(modal);
            }
            Some(Ok(msg)) => {
                self.set_status(msg);
                self.clamp_cursor();
            }
            Some(Err(e)) => {
                warn!(error = %e, "save failed");
                self.set_status(e.to_string());
                self.modal = Some(modal);
            }
        }
    }

    // ── Sidebar ──

    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        let mut entries = vec![SidebarEntry::All];
        entries.extend(
            self.store
                .projects()
                .iter()
                .map(|p| SidebarEntry::Project(p.id.clone())),
        );
        entries.push(SidebarEntry::Personal);
        entries
    }

    pub fn focus_sidebar(&mut self) {
        self.focus = Focus::Sidebar;
    }

    pub fn focus_calendar(&mut self) {
        self.focus = Focus::Calendar;
    }

    pub fn sidebar_down(&mut self) {
        let len = self.sidebar_entries().len();
        self.sidebar_cursor = (self.sidebar_cursor + 1) % len;
    }

    pub fn sidebar_up(&mut self) {
        let len = self.sidebar_entries().len();
        self.sidebar_cursor = (self.sidebar_cursor + len - 1) % len;
    }

    fn sidebar_entry(&self) -> Option<SidebarEntry> {
        self.sidebar_entries().get(self.sidebar_cursor).cloned()
    }

    fn sidebar_project(&self) -> Option<ProjectId> {
        match self.sidebar_entry()? {
            SidebarEntry::Project(id) => Some(id),
            _ => None,
        }
    }

    pub fn sidebar_activate(&mut self) {
        match self.sidebar_entry() {
            Some(SidebarEntry::All) => self.clear_filter(),
            Some(SidebarEntry::Project(id)) => self.toggle_project_filter(&id),
            Some(SidebarEntry::Personal) => self.toggle_personal_filter(),
            None => {}
        }
    }

    pub fn toggle_project_filter(&mut self, id: &ProjectId) {
        self.filter.toggle_project(id);
        debug!(filter = ?self.filter, "filter changed");
        self.clamp_cursor();
    }

    pub fn toggle_personal_filter(&mut self) {
        self.filter.toggle_personal();
        debug!(filter = ?self.filter, "filter changed");
        self.clamp_cursor();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.clamp_cursor();
    }

    pub fn edit_sidebar_project(&mut self) {
        if let Some(project) = self.sidebar_project().and_then(|id| self.store.project(&id)) {
            self.modal = Some(Modal::ProjectForm(ProjectFormState::edit(project)));
        }
    }

    pub fn request_delete_project(&mut self) {
        if let Some(id) = self.sidebar_project() {
            self.modal = Some(Modal::ConfirmDeleteProject(id));
        }
    }

    pub fn confirm_delete_project(&mut self) {
        let Some(Modal::ConfirmDeleteProject(id)) = self.modal.take() else {
            return;
        };
        match self.store.delete_project(&id) {
            Ok(removal) => {
                self.filter.forget_project(&id);
                self.set_status(format!(
                    "프로젝트 삭제됨 (TODO {}개, 일정 {}개 함께 삭제)",
                    removal.todos, removal.events
                ));
            }
            Err(e) => {
                warn!(error = %e, "project delete failed");
                self.set_status(e.to_string());
            }
        }
        let len = self.sidebar_entries().len();
        self.sidebar_cursor = self.sidebar_cursor.min(len - 1);
        self.clamp_cursor();
    }

    /// Builds the share link for the highlighted project and queues it for
    /// the clipboard.
    pub fn share_sidebar_project(&mut self) {
        if let Some(id) = self.sidebar_project() {
            let link = share::share_link(&self.share_base_url, &id);
            info!(project = %id, "share link copied");
            self.set_status(format!("링크 복사됨: {}", link));
            self.pending_clipboard = Some(link);
        }
    }

    // ── Drag and drop ──

    /// Picks up the selected todo for a keyboard move.
    pub fn begin_keyboard_drag(&mut self) {
        if let Some(ItemRef::Todo(id)) = self.selected_item() {
            self.drag = Some(Drag {
                todo_id: id,
                origin: self.selected_date,
                source: DragSource::Keyboard,
                hover: None,
            });
            self.set_status("이동할 날짜를 선택하세요 (m/Enter: 놓기, Esc: 취소)");
        }
    }

    pub fn begin_mouse_drag(&mut self, todo_id: TodoId, origin: NaiveDate) {
        self.drag = Some(Drag {
            todo_id,
            origin,
            source: DragSource::Mouse,
            hover: Some(origin),
        });
    }

    pub fn drag_hover(&mut self, date: Option<NaiveDate>) {
        if let Some(drag) = self.drag.as_mut() {
            drag.hover = date;
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Drops the carried todo on `date`.
    pub fn drop_drag(&mut self, date: NaiveDate) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        match self.store.move_todo(&drag.todo_id, date) {
            Ok(()) => {
                self.select_item(date, &ItemRef::Todo(drag.todo_id));
                self.set_status(format!("{}(으)로 이동했습니다", date.format("%m/%d")));
            }
            Err(e) => {
                warn!(error = %e, "drop ignored");
                self.set_status(e.to_string());
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
