//! Markdown-to-HTML conversion for lesson prose.

use pulldown_cmark::{Options, Parser, html};

/// Converts lesson markdown into an HTML fragment.
///
/// The pipeline treats this as an opaque collaborator; tests swap in a
/// trivial implementation to assert on structure alone.
pub trait ProseRenderer {
    /// Render markdown into an HTML fragment.
    fn render(&self, markdown: &str) -> String;
}

/// `pulldown-cmark` prose renderer.
///
/// GFM is enabled by default. When enabled, the parser supports:
/// - Tables
/// - Strikethrough (`~~text~~`)
/// - Task lists (`- [ ] item`)
/// - Alerts (`> [!NOTE]`)
#[derive(Clone, Copy, Debug)]
pub struct CmarkProse {
    gfm: bool,
}

impl CmarkProse {
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

impl Default for CmarkProse {
    fn default() -> Self {
        Self::new()
    }
}

impl ProseRenderer for CmarkProse {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
