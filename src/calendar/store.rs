use chrono::{Local, NaiveDate};
use tracing::info;

use super::event::{CalendarEvent, EventDraft};
use super::id::{EventId, ProjectId, TodoId};
use super::project::{Project, ProjectDraft};
use super::todo::{Todo, TodoDraft};
use super::user::User;
use crate::error::{StoreError, StoreResult};

/// What a cascading project delete took with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRemoval {
    pub todos: usize,
    pub events: usize,
}

/// In-memory owner of every project, todo, event and user for the session.
///
/// Collections keep insertion order; that order is the display order inside a
/// day.
#[derive(Debug, Default)]
pub struct Store {
    projects: Vec<Project>,
    todos: Vec<Todo>,
    events: Vec<CalendarEvent>,
    users: Vec<User>,
    last_id: i64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entities(
        projects: Vec<Project>,
        todos: Vec<Todo>,
        events: Vec<CalendarEvent>,
        users: Vec<User>,
    ) -> Self {
        Self {
            projects,
            todos,
            events,
            users,
            last_id: 0,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn todo(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn event(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Members of a project that resolve to a known user.
    pub fn members_of(&self, project: &Project) -> Vec<&User> {
        project
            .members
            .iter()
            .filter_map(|id| self.users.iter().find(|u| &u.id == id))
            .collect()
    }

    pub fn todos_on(&self, date: NaiveDate) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(move |t| t.date == date)
    }

    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(move |e| e.date == date)
    }

    /// Millisecond timestamp, bumped past the last one handed out so two
    /// creates in the same millisecond still get distinct ids.
    fn next_id(&mut self) -> String {
        let now = Local::now().timestamp_millis();
        let id = if now > self.last_id { now } else { self.last_id + 1 };
        self.last_id = id;
        id.to_string()
    }

    fn ensure_project(&self, id: &ProjectId) -> StoreResult<()> {
        if self.project(id).is_some() {
            Ok(())
        } else {
            Err(StoreError::UnknownProject(id.clone()))
        }
    }

    // ── Projects ──

    pub fn create_project(&mut self, draft: ProjectDraft) -> ProjectId {
        let id = ProjectId::new(self.next_id());
        info!(project = %id, name = %draft.name, "project created");
        self.projects.push(Project {
            id: id.clone(),
            name: draft.name,
            color: draft.color,
            description: draft.description,
            created_at: Local::now(),
            members: Vec::new(),
            is_shared: false,
        });
        id
    }

    pub fn update_project(&mut self, id: &ProjectId, draft: ProjectDraft) -> StoreResult<()> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::ProjectNotFound(id.clone()))?;
        project.name = draft.name;
        project.color = draft.color;
        project.description = draft.description;
        info!(project = %id, "project updated");
        Ok(())
    }

    /// Removes the project and every todo and event that references it.
    pub fn delete_project(&mut self, id: &ProjectId) -> StoreResult<ProjectRemoval> {
        let before = self.projects.len();
        self.projects.retain(|p| &p.id != id);
        if self.projects.len() == before {
            return Err(StoreError::ProjectNotFound(id.clone()));
        }

        let todos_before = self.todos.len();
        self.todos.retain(|t| &t.project_id != id);
        let events_before = self.events.len();
        self.events.retain(|e| e.project_id.as_ref() != Some(id));

        let removal = ProjectRemoval {
            todos: todos_before - self.todos.len(),
            events: events_before - self.events.len(),
        };
        info!(
            project = %id,
            todos = removal.todos,
            events = removal.events,
            "project deleted"
        );
        Ok(removal)
    }

    // ── Todos ──

    pub fn create_todo(&mut self, draft: TodoDraft) -> StoreResult<TodoId> {
        self.ensure_project(&draft.project_id)?;
        let id = TodoId::new(self.next_id());
        info!(todo = %id, date = %draft.date, "todo created");
        self.todos.push(Todo {
            id: id.clone(),
            title: draft.title,
            project_id: draft.project_id,
            date: draft.date,
            completed: false,
            priority: draft.priority,
            created_at: Local::now(),
            description: draft.description,
        });
        Ok(id)
    }

    pub fn update_todo(&mut self, id: &TodoId, draft: TodoDraft) -> StoreResult<()> {
        self.ensure_project(&draft.project_id)?;
        let todo = self.todo_mut(id)?;
        todo.title = draft.title;
        todo.project_id = draft.project_id;
        todo.date = draft.date;
        todo.priority = draft.priority;
        todo.description = draft.description;
        info!(todo = %id, "todo updated");
        Ok(())
    }

    pub fn delete_todo(&mut self, id: &TodoId) -> StoreResult<Todo> {
        let idx = self
            .todos
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| StoreError::TodoNotFound(id.clone()))?;
        info!(todo = %id, "todo deleted");
        Ok(self.todos.remove(idx))
    }

    /// Flips completion and returns the new state.
    pub fn toggle_todo(&mut self, id: &TodoId) -> StoreResult<bool> {
        let todo = self.todo_mut(id)?;
        todo.completed = !todo.completed;
        let completed = todo.completed;
        info!(todo = %id, completed, "todo toggled");
        Ok(completed)
    }

    /// Reschedules a todo. Only the date changes.
    pub fn move_todo(&mut self, id: &TodoId, date: NaiveDate) -> StoreResult<()> {
        let todo = self.todo_mut(id)?;
        let from = todo.date;
        todo.date = date;
        info!(todo = %id, %from, to = %date, "todo moved");
        Ok(())
    }

    fn todo_mut(&mut self, id: &TodoId) -> StoreResult<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::TodoNotFound(id.clone()))
    }

    // ── Events ──

    fn check_event_draft(&self, draft: &mut EventDraft) -> StoreResult<()> {
        if draft.is_personal {
            draft.project_id = None;
        }
        match &draft.project_id {
            Some(project) => self.ensure_project(project),
            None if draft.is_personal => Ok(()),
            None => Err(StoreError::EventWithoutProject),
        }
    }

    pub fn create_event(&mut self, mut draft: EventDraft) -> StoreResult<EventId> {
        self.check_event_draft(&mut draft)?;
        let id = EventId::new(self.next_id());
        info!(event = %id, date = %draft.date, personal = draft.is_personal, "event created");
        self.events.push(CalendarEvent {
            id: id.clone(),
            title: draft.title,
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            project_id: draft.project_id,
            kind: draft.kind,
            description: draft.description,
            is_personal: draft.is_personal,
        });
        Ok(id)
    }

    pub fn update_event(&mut self, id: &EventId, mut draft: EventDraft) -> StoreResult<()> {
        self.check_event_draft(&mut draft)?;
        let event = self
            .events
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| StoreError::EventNotFound(id.clone()))?;
        event.title = draft.title;
        event.date = draft.date;
        event.start_time = draft.start_time;
        event.end_time = draft.end_time;
        event.project_id = draft.project_id;
        event.kind = draft.kind;
        event.description = draft.description;
        event.is_personal = draft.is_personal;
        info!(event = %id, "event updated");
        Ok(())
    }

    pub fn delete_event(&mut self, id: &EventId) -> StoreResult<CalendarEvent> {
        let idx = self
            .events
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| StoreError::EventNotFound(id.clone()))?;
        info!(event = %id, "event deleted");
        Ok(self.events.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventKind, Priority};
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(store: &mut Store, name: &str) -> ProjectId {
        store.create_project(ProjectDraft {
            name: name.to_string(),
            color: "#3B82F6".to_string(),
            description: None,
        })
    }

    fn todo(store: &mut Store, project: &ProjectId, title: &str) -> TodoId {
        store
            .create_todo(TodoDraft {
                title: title.to_string(),
                project_id: project.clone(),
                date: date(2024, 3, 15),
                priority: Priority::Medium,
                description: None,
            })
            .unwrap()
    }

    fn event(store: &mut Store, project: Option<&ProjectId>, personal: bool) -> EventId {
        store
            .create_event(EventDraft {
                title: "sync".to_string(),
                date: date(2024, 3, 15),
                start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                project_id: project.cloned(),
                kind: EventKind::Meeting,
                description: None,
                is_personal: personal,
            })
            .unwrap()
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let mut store = Store::new();
        let a = project(&mut store, "a");
        let b = project(&mut store, "b");
        let c = project(&mut store, "c");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn todo_requires_known_project() {
        let mut store = Store::new();
        let err = store
            .create_todo(TodoDraft {
                title: "orphan".to_string(),
                project_id: ProjectId::from("missing"),
                date: date(2024, 3, 15),
                priority: Priority::Low,
                description: None,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownProject(ProjectId::from("missing")));
        assert!(store.todos().is_empty());
    }

    #[test]
    fn double_toggle_restores_completion() {
        let mut store = Store::new();
        let p = project(&mut store, "work");
        let t = todo(&mut store, &p, "write report");
        let original = store.todo(&t).unwrap().clone();

        assert!(store.toggle_todo(&t).unwrap());
        assert!(!store.toggle_todo(&t).unwrap());
        assert_eq!(store.todo(&t).unwrap(), &original);
    }

    #[test]
    fn move_changes_only_the_date() {
        let mut store = Store::new();
        let p = project(&mut store, "work");
        let t = todo(&mut store, &p, "write report");
        let before = store.todo(&t).unwrap().clone();

        store.move_todo(&t, date(2024, 3, 20)).unwrap();

        let after = store.todo(&t).unwrap();
        assert_eq!(after.date, date(2024, 3, 20));
        assert_eq!(
            Todo {
                date: before.date,
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn update_todo_keeps_identity_and_completion() {
        let mut store = Store::new();
        let p = project(&mut store, "work");
        let t = todo(&mut store, &p, "draft");
        store.toggle_todo(&t).unwrap();
        let created_at = store.todo(&t).unwrap().created_at;

        store
            .update_todo(
                &t,
                TodoDraft {
                    title: "final".to_string(),
                    project_id: p.clone(),
                    date: date(2024, 3, 16),
                    priority: Priority::High,
                    description: Some("now".to_string()),
                },
            )
            .unwrap();

        let updated = store.todo(&t).unwrap();
        assert_eq!(updated.title, "final");
        assert_eq!(updated.priority, Priority::High);
        assert!(updated.completed);
        assert_eq!(updated.created_at, created_at);
    }

    #[test]
    fn personal_events_drop_their_project() {
        let mut store = Store::new();
        let p = project(&mut store, "work");
        let e = event(&mut store, Some(&p), true);
        let stored = store.event(&e).unwrap();
        assert!(stored.is_personal);
        assert_eq!(stored.project_id, None);
    }

    #[test]
    fn delete_project_cascades_to_exactly_its_items() {
        let mut store = Store::new();
        let work = project(&mut store, "work");
        let home = project(&mut store, "home");
        todo(&mut store, &work, "a");
        todo(&mut store, &work, "b");
        let kept_todo = todo(&mut store, &home, "c");
        event(&mut store, Some(&work), false);
        let kept_event = event(&mut store, Some(&home), false);
        let personal = event(&mut store, None, true);

        let removal = store.delete_project(&work).unwrap();

        assert_eq!(removal, ProjectRemoval { todos: 2, events: 1 });
        assert!(store.project(&work).is_none());
        assert!(store.project(&home).is_some());
        assert_eq!(store.todos().len(), 1);
        assert!(store.todo(&kept_todo).is_some());
        assert_eq!(store.events().len(), 2);
        assert!(store.event(&kept_event).is_some());
        assert!(store.event(&personal).is_some());
    }

    #[test]
    fn delete_unknown_project_is_an_error() {
        let mut store = Store::new();
        assert_eq!(
            store.delete_project(&ProjectId::from("nope")),
            Err(StoreError::ProjectNotFound(ProjectId::from("nope")))
        );
    }

    #[test]
    fn shared_event_requires_a_project() {
        let mut store = Store::new();
        let draft = EventDraft {
            title: "standup".to_string(),
            date: date(2024, 3, 15),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
            project_id: None,
            kind: EventKind::Meeting,
            description: None,
            is_personal: false,
        };
        assert_eq!(
            store.create_event(draft.clone()),
            Err(StoreError::EventWithoutProject)
        );
        assert!(store.events().is_empty());

        let personal = store
            .create_event(EventDraft {
                is_personal: true,
                ..draft.clone()
            })
            .unwrap();
        assert_eq!(
            store.update_event(&personal, draft),
            Err(StoreError::EventWithoutProject)
        );
        assert!(store.event(&personal).unwrap().is_personal);
    }
}
