pub mod config;
pub mod error;
pub mod loader;
pub mod navigation;
pub mod session;
pub mod verse;

// Re-export main types for convenience
pub use config::{Config, Labels};
pub use error::LoadError;
pub use loader::{ChapterLoader, ChapterSource};
pub use navigation::{update, Action, Effect, NavigationState, Page};
pub use session::Session;
pub use verse::{ChapterDataset, ChapterId, VerseRecord};
