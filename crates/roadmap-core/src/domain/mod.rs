//! Domain model (roadmap document, status, filter, labels, errors).

pub mod errors;
pub mod filter;
pub mod locale;
pub mod progress;
pub mod roadmap;
pub mod status;

pub use self::errors::LoadError;
pub use self::filter::StatusFilter;
pub use self::locale::Locale;
pub use self::progress::completion_percent;
pub use self::roadmap::{Phase, RoadmapDocument, Task};
pub use self::status::PhaseStatus;
