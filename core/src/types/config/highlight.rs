use crate::types::Strategy;
use serde::{Deserialize, Serialize};

/// Markup settings for highlighted fragments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_mark_class")]
    pub mark_class: String,
    #[serde(default = "default_container_class")]
    pub container_class: String,
    #[serde(default = "default_separator_class")]
    pub separator_class: String,
    #[serde(default)]
    pub separators: SeparatorPolicy,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            mark_class: default_mark_class(),
            container_class: default_container_class(),
            separator_class: default_separator_class(),
            separators: SeparatorPolicy::default(),
        }
    }
}

fn default_mark_class() -> String {
    "bg-yellow-300 tracking-tighter".to_string()
}

fn default_container_class() -> String {
    "p-5 w-1/2".to_string()
}

fn default_separator_class() -> String {
    "border-t-2 border-slate-500 w-1/2".to_string()
}

/// When a separator row follows each fragment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparatorPolicy {
    /// Phrase matching omits separators; term and fuzzy matching emit them.
    #[default]
    ByMode,
    Always,
    Never,
}

impl SeparatorPolicy {
    pub fn emits_for(self, strategy: Strategy) -> bool {
        match self {
            SeparatorPolicy::ByMode => strategy != Strategy::Phrase,
            SeparatorPolicy::Always => true,
            SeparatorPolicy::Never => false,
        }
    }
}
