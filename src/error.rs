use thiserror::Error;

use crate::calendar::{EventId, ProjectId, TodoId};

/// Failures of in-memory store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    TodoNotFound(TodoId),

    #[error("event {0} not found")]
    EventNotFound(EventId),

    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("unknown project {0}")]
    UnknownProject(ProjectId),

    #[error("event needs a project unless it is personal")]
    EventWithoutProject,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid time {value:?} in {item:?}")]
    Time { item: String, value: String },

    #[error("{item:?} references unknown project {project}")]
    UnknownProject { item: String, project: ProjectId },

    #[error("{item:?} has no project and is not personal")]
    EventWithoutProject { item: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
