mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod home;
pub use home::HomeView;

mod auth;
pub use auth::AuthView;

mod dashboard;
pub use dashboard::DashboardView;

mod notes;
pub use notes::NotesView;

mod note_editor;
pub use note_editor::{EditNoteView, NewNoteView};

mod tasks;
pub use tasks::{NewTaskView, TasksView};

mod starred;
pub use starred::StarredView;

mod profile;
pub use profile::ProfileView;
