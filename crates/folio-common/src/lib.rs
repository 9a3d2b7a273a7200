pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, FolioError, PlatformError};
pub use events::{Event, EventBus};
pub use types::{Color, PageRoute, RunPhase};

pub type Result<T> = std::result::Result<T, FolioError>;
