//! Data models for the application.

mod user;

#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;

mod note;

#[cfg(feature = "server")]
pub use note::Note;
pub use note::{parse_priority, NoteInfo, NoteSort};
