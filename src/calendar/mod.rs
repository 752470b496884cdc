pub mod event;
pub mod filter;
pub mod grid;
pub mod id;
pub mod project;
pub mod seed;
pub mod store;
pub mod todo;
pub mod user;

pub use event::{CalendarEvent, EventDraft, EventKind};
pub use filter::{DayItems, FilterMode, ItemRef};
pub use grid::ViewMode;
pub use id::{EventId, ProjectId, TodoId, UserId};
pub use project::{Project, ProjectDraft, PROJECT_COLORS};
pub use seed::Seed;
pub use store::{ProjectRemoval, Store};
pub use todo::{Priority, Todo, TodoDraft};
pub use user::{Role, User};
