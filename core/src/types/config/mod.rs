mod app;
mod corpus;
mod highlight;

pub use app::{AppConfig, AppConfigError};
pub use corpus::CorpusConfig;
pub use highlight::{HighlightConfig, SeparatorPolicy};
