pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, CorpusConfig, HighlightConfig, SeparatorPolicy};

pub(crate) mod mode;
pub use mode::{MatchMode, Strategy};

pub(crate) mod query;
pub use query::{Query, Term, TermError};

pub(crate) mod results;
pub use results::{decode_results, read_results};
