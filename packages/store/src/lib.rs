pub mod backend;
pub mod calendar;
pub mod config;
pub mod drafts;
pub mod drawing;
pub mod filter;
pub mod models;
pub mod repo;
pub mod starred;

mod memory;
pub use memory::MemoryBackend;

pub use backend::{Backend, BackendError, NoteQuery, TaskQuery};
pub use calendar::MonthGrid;
pub use config::AppConfig;
pub use drafts::{DraftError, NoteDraft, ProfileDraft, TaskDraft};
pub use drawing::{Canvas, Drawing, Tool};
pub use filter::NoteFilter;
pub use models::{
    ItemKind, Note, Profile, StarredItem, Task, TaskPriority, TaskStatus, ThemePreference,
    UserType,
};
pub use repo::{RepoError, Repository};
pub use starred::merge_starred;
