//! Visibility filtering and per-day bucketing of todos and events.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::event::CalendarEvent;
use super::id::{EventId, ProjectId, TodoId};
use super::store::Store;
use super::todo::Todo;

/// Combined todo + event lines a month cell shows before `+N개 더`.
pub const MONTH_CELL_CAP: usize = 3;

/// Which items are visible. The project set and the personal toggle are
/// mutually exclusive, so they live in one enum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    /// Never empty; an emptied set collapses back to `All`.
    ByProjects(BTreeSet<ProjectId>),
    PersonalOnly,
}

impl FilterMode {
    pub fn toggle_project(&mut self, id: &ProjectId) {
        match self {
            FilterMode::ByProjects(ids) => {
                if !ids.remove(id) {
                    ids.insert(id.clone());
                }
                if ids.is_empty() {
                    *self = FilterMode::All;
                }
            }
            FilterMode::All | FilterMode::PersonalOnly => {
                *self = FilterMode::ByProjects(BTreeSet::from([id.clone()]));
            }
        }
    }

    pub fn toggle_personal(&mut self) {
        *self = match self {
            FilterMode::PersonalOnly => FilterMode::All,
            _ => FilterMode::PersonalOnly,
        };
    }

    pub fn clear(&mut self) {
        *self = FilterMode::All;
    }

    /// Drops a deleted project from the selection.
    pub fn forget_project(&mut self, id: &ProjectId) {
        if let FilterMode::ByProjects(ids) = self {
            ids.remove(id);
            if ids.is_empty() {
                *self = FilterMode::All;
            }
        }
    }

    pub fn is_project_selected(&self, id: &ProjectId) -> bool {
        matches!(self, FilterMode::ByProjects(ids) if ids.contains(id))
    }

    pub fn is_personal_only(&self) -> bool {
        matches!(self, FilterMode::PersonalOnly)
    }

    pub fn shows_todo(&self, todo: &Todo) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::ByProjects(ids) => ids.contains(&todo.project_id),
            FilterMode::PersonalOnly => false,
        }
    }

    pub fn shows_event(&self, event: &CalendarEvent) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::ByProjects(ids) => event
                .project_id
                .as_ref()
                .is_some_and(|id| ids.contains(id)),
            FilterMode::PersonalOnly => event.is_personal,
        }
    }

    pub fn label(&self) -> String {
        match self {
            FilterMode::All => "전체".to_string(),
            FilterMode::ByProjects(ids) => format!("프로젝트 {}개", ids.len()),
            FilterMode::PersonalOnly => "개인 일정".to_string(),
        }
    }
}

pub fn visible_todos<'a>(filter: &FilterMode, todos: &'a [Todo]) -> Vec<&'a Todo> {
    todos.iter().filter(|t| filter.shows_todo(t)).collect()
}

pub fn visible_events<'a>(
    filter: &FilterMode,
    events: &'a [CalendarEvent],
) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|e| filter.shows_event(e)).collect()
}

/// Reference to one line in a day's item list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Event(EventId),
    Todo(TodoId),
}

/// Visible items of one day: events first, then todos, each in insertion
/// order.
#[derive(Debug, Clone)]
pub struct DayItems<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a CalendarEvent>,
    pub todos: Vec<&'a Todo>,
}

impl<'a> DayItems<'a> {
    pub fn for_date(store: &'a Store, filter: &FilterMode, date: NaiveDate) -> Self {
        Self {
            date,
            events: store.events_on(date).filter(|e| filter.shows_event(e)).collect(),
            todos: store.todos_on(date).filter(|t| filter.shows_todo(t)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len() + self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn item_ref(&self, index: usize) -> Option<ItemRef> {
        if let Some(event) = self.events.get(index) {
            return Some(ItemRef::Event(event.id.clone()));
        }
        self.todos
            .get(index - self.events.len())
            .map(|todo| ItemRef::Todo(todo.id.clone()))
    }

    pub fn refs(&self) -> Vec<ItemRef> {
        (0..self.len()).filter_map(|i| self.item_ref(i)).collect()
    }

    /// Events take the first slots; todos fill whatever is left.
    pub fn capped(&self, cap: usize) -> CappedDay<'a> {
        let events: Vec<&'a CalendarEvent> = self.events.iter().take(cap).copied().collect();
        let todos: Vec<&'a Todo> = self
            .todos
            .iter()
            .take(cap - events.len())
            .copied()
            .collect();
        CappedDay {
            hidden: self.len() - events.len() - todos.len(),
            events,
            todos,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CappedDay<'a> {
    pub events: Vec<&'a CalendarEvent>,
    pub todos: Vec<&'a Todo>,
    pub hidden: usize,
}

pub fn more_label(hidden: usize) -> String {
    format!("+{}개 더", hidden)
}

/// One `DayItems` per grid date, in grid order.
pub fn bucket_days<'a>(
    store: &'a Store,
    filter: &FilterMode,
    days: &[NaiveDate],
) -> Vec<DayItems<'a>> {
    days.iter()
        .map(|&date| DayItems::for_date(store, filter, date))
        .collect()
}
