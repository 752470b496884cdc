//! Startup data. Dates are stored as day offsets from today so the sample
//! calendar always has something nearby.

use std::path::Path;

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use serde::Deserialize;

use super::event::{CalendarEvent, EventKind};
use super::id::{EventId, ProjectId, TodoId, UserId};
use super::project::Project;
use super::store::Store;
use super::todo::{Priority, Todo};
use super::user::{Role, User};
use crate::error::SeedError;

const EMBEDDED_SEED: &str = include_str!("../../assets/seed.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Seed {
    users: Vec<SeedUser>,
    projects: Vec<SeedProject>,
    todos: Vec<SeedTodo>,
    events: Vec<SeedEvent>,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    id: String,
    name: String,
    email: String,
    role: Role,
}

#[derive(Debug, Deserialize)]
struct SeedProject {
    id: String,
    name: String,
    color: String,
    description: Option<String>,
    #[serde(default)]
    members: Vec<String>,
    #[serde(default)]
    shared: bool,
    #[serde(default)]
    created_offset: i64,
}

#[derive(Debug, Deserialize)]
struct SeedTodo {
    id: String,
    title: String,
    project: String,
    offset: i64,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    completed: bool,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedEvent {
    id: String,
    title: String,
    offset: i64,
    start: String,
    end: String,
    project: Option<String>,
    #[serde(default)]
    kind: EventKind,
    #[serde(default)]
    personal: bool,
    description: Option<String>,
}

impl Seed {
    pub fn parse(content: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(content)?)
    }

    pub fn embedded() -> Result<Self, SeedError> {
        Self::parse(EMBEDDED_SEED)
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Builds the store, anchoring every offset on `today`.
    pub fn into_store(self, today: NaiveDate) -> Result<Store, SeedError> {
        let now = Local::now();

        let users = self
            .users
            .into_iter()
            .map(|u| User {
                id: UserId::new(u.id),
                name: u.name,
                email: u.email,
                role: u.role,
            })
            .collect();

        let projects: Vec<Project> = self
            .projects
            .into_iter()
            .map(|p| Project {
                id: ProjectId::new(p.id),
                name: p.name,
                color: p.color,
                description: p.description,
                created_at: now + Duration::days(p.created_offset),
                members: p.members.into_iter().map(UserId::new).collect(),
                is_shared: p.shared,
            })
            .collect();

        let known = |item: &str, id: &ProjectId| -> Result<(), SeedError> {
            if projects.iter().any(|p| &p.id == id) {
                Ok(())
            } else {
                Err(SeedError::UnknownProject {
                    item: item.to_string(),
                    project: id.clone(),
                })
            }
        };

        let mut todos = Vec::with_capacity(self.todos.len());
        for t in self.todos {
            let project_id = ProjectId::new(t.project);
            known(&t.title, &project_id)?;
            todos.push(Todo {
                id: TodoId::new(t.id),
                title: t.title,
                project_id,
                date: today + Duration::days(t.offset),
                completed: t.completed,
                priority: t.priority,
                created_at: now,
                description: t.description,
            });
        }

        let mut events = Vec::with_capacity(self.events.len());
        for e in self.events {
            let start_time = parse_time(&e.title, &e.start)?;
            let end_time = parse_time(&e.title, &e.end)?;
            let project_id = if e.personal {
                None
            } else {
                e.project.map(ProjectId::new)
            };
            match &project_id {
                Some(id) => known(&e.title, id)?,
                None if e.personal => {}
                None => return Err(SeedError::EventWithoutProject { item: e.title }),
            }
            events.push(CalendarEvent {
                id: EventId::new(e.id),
                title: e.title,
                date: today + Duration::days(e.offset),
                start_time,
                end_time,
                project_id,
                kind: e.kind,
                description: e.description,
                is_personal: e.personal,
            });
        }

        Ok(Store::with_entities(projects, todos, events, users))
    }
}

fn parse_time(item: &str, value: &str) -> Result<NaiveTime, SeedError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| SeedError::Time {
        item: item.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn embedded_seed_builds_a_store() {
        let store = Seed::embedded().unwrap().into_store(today()).unwrap();
        assert!(!store.projects().is_empty());
        assert!(!store.todos().is_empty());
        assert!(!store.events().is_empty());
        assert!(store.events().iter().any(|e| e.is_personal));
        for todo in store.todos() {
            assert!(store.project(&todo.project_id).is_some());
        }
    }

    #[test]
    fn offsets_are_relative_to_today() {
        let seed = Seed::parse(
            r##"
            [[projects]]
            id = "p"
            name = "Work"
            color = "#3B82F6"

            [[todos]]
            id = "t"
            title = "tomorrow"
            project = "p"
            offset = 1
            "##,
        )
        .unwrap();
        let store = seed.into_store(today()).unwrap();
        assert_eq!(store.todos()[0].date, NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
        assert_eq!(store.todos()[0].priority, Priority::Medium);
    }

    #[test]
    fn todo_with_unknown_project_is_rejected() {
        let seed = Seed::parse(
            r#"
            [[todos]]
            id = "t"
            title = "orphan"
            project = "ghost"
            offset = 0
            "#,
        )
        .unwrap();
        assert!(matches!(
            seed.into_store(today()),
            Err(SeedError::UnknownProject { .. })
        ));
    }

    #[test]
    fn bad_event_time_is_rejected() {
        let seed = Seed::parse(
            r#"
            [[events]]
            id = "e"
            title = "gym"
            offset = 0
            start = "25:00"
            end = "26:00"
            personal = true
            "#,
        )
        .unwrap();
        assert!(matches!(seed.into_store(today()), Err(SeedError::Time { .. })));
    }
}
