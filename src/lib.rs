pub mod app;
pub mod catalog;
pub mod client_message;
pub mod config;
pub mod enums;
pub mod error;
pub mod states;
pub mod summary;
pub mod ws;

pub use catalog::{Catalog, ProfileDefinition, ProfileLabel, Question, QuizOption};
pub use error::{CatalogError, QuizError, QuizResult};
pub use states::app_state::AppState;
pub use states::quiz_state::{Phase, QuizState};
pub use summary::{BreakdownEntry, Summary, compute_summary};
