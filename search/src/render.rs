//! HTML markup for highlighted fragments.

use quill_core::types::HighlightConfig;

const MARK_CLOSE: &str = "</mark>";
const CONTAINER_CLOSE: &str = "</div>";
const LINE_BREAK: &str = "<br />";

/// Produces the markup injected around matched text and result rows.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: HighlightConfig,
}

impl Renderer {
    pub fn new(config: HighlightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn mark(&self, text: &str) -> String {
        format!("{}{}{}", self.mark_open(), text, MARK_CLOSE)
    }

    /// Wraps highlighted html in the per-result container, optionally followed
    /// by a separator row.
    pub fn container(&self, html: &str, separator: bool) -> String {
        let mut out = format!("{}{}{}", self.container_open(), html, CONTAINER_CLOSE);
        if separator {
            out.push_str(&self.separator());
        }
        out
    }

    /// Removes everything this renderer injects and restores newlines.
    ///
    /// Exact as long as the original text does not itself contain the
    /// injected tags.
    pub fn strip(&self, fragment: &str) -> String {
        let separator = self.separator();
        let container_open = self.container_open();

        let body = fragment.strip_suffix(&separator).unwrap_or(fragment);
        let body = match body
            .strip_prefix(&container_open)
            .and_then(|inner| inner.strip_suffix(CONTAINER_CLOSE))
        {
            Some(inner) => inner,
            None => body,
        };

        body.replace(&self.mark_open(), "")
            .replace(MARK_CLOSE, "")
            .replace(LINE_BREAK, "\n")
    }

    fn mark_open(&self) -> String {
        format!("<mark class=\"{}\">", self.config.mark_class)
    }

    fn container_open(&self) -> String {
        format!("<div class=\"{}\" >  ", self.config.container_class)
    }

    fn separator(&self) -> String {
        format!("<div class=\"{}\"> </div>", self.config.separator_class)
    }
}

/// Converts every `\n` into a `<br />` tag.
pub fn line_breaks(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}
