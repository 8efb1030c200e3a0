//! The lesson entity.

use crate::slug::slugify;
use crate::snippet::Snippet;

/// One unit of tutorial content.
///
/// Prose is always present. The four variants cover every combination of
/// anchor and snippet, so a verifier without a snippet cannot be expressed.
#[derive(Debug)]
pub enum Lesson {
    /// Markdown prose only.
    ProseOnly { text: String },
    /// Addressable prose, listed in the table of contents.
    ProseWithAnchor { anchor: String, text: String },
    /// Prose followed by a runnable demonstration.
    ProseWithSnippet { text: String, snippet: Snippet },
    /// Addressable prose with a runnable demonstration.
    ProseWithAnchorAndSnippet {
        anchor: String,
        text: String,
        snippet: Snippet,
    },
}

impl Lesson {
    /// Create a prose-only lesson.
    pub fn prose(text: impl Into<String>) -> Self {
        Self::ProseOnly { text: text.into() }
    }

    /// Create an addressable prose lesson.
    pub fn anchored(anchor: impl Into<String>, text: impl Into<String>) -> Self {
        Self::ProseWithAnchor {
            anchor: anchor.into(),
            text: text.into(),
        }
    }

    /// Create a lesson with a runnable demonstration.
    pub fn demo(text: impl Into<String>, snippet: impl Into<Snippet>) -> Self {
        Self::ProseWithSnippet {
            text: text.into(),
            snippet: snippet.into(),
        }
    }

    /// Create an addressable lesson with a runnable demonstration.
    pub fn anchored_demo(
        anchor: impl Into<String>,
        text: impl Into<String>,
        snippet: impl Into<Snippet>,
    ) -> Self {
        Self::ProseWithAnchorAndSnippet {
            anchor: anchor.into(),
            text: text.into(),
            snippet: snippet.into(),
        }
    }

    /// Markdown prose.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::ProseOnly { text }
            | Self::ProseWithAnchor { text, .. }
            | Self::ProseWithSnippet { text, .. }
            | Self::ProseWithAnchorAndSnippet { text, .. } => text,
        }
    }

    /// Human-readable anchor title, if the lesson is addressable.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Self::ProseWithAnchor { anchor, .. } | Self::ProseWithAnchorAndSnippet { anchor, .. } => {
                Some(anchor)
            }
            Self::ProseOnly { .. } | Self::ProseWithSnippet { .. } => None,
        }
    }

    /// Runnable demonstration, if any.
    #[must_use]
    pub fn snippet(&self) -> Option<&Snippet> {
        match self {
            Self::ProseWithSnippet { snippet, .. }
            | Self::ProseWithAnchorAndSnippet { snippet, .. } => Some(snippet),
            Self::ProseOnly { .. } | Self::ProseWithAnchor { .. } => None,
        }
    }

    /// Link target derived from the anchor.
    #[must_use]
    pub fn slug(&self) -> Option<String> {
        self.anchor().map(slugify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prose_only_accessors() {
        let lesson = Lesson::prose("Intro");
        assert_eq!(lesson.text(), "Intro");
        assert_eq!(lesson.anchor(), None);
        assert!(lesson.snippet().is_none());
        assert_eq!(lesson.slug(), None);
    }

    #[test]
    fn test_anchored_slug() {
        let lesson = Lesson::anchored("Maps - Merge", "## Maps - Merge");
        assert_eq!(lesson.anchor(), Some("Maps - Merge"));
        assert_eq!(lesson.slug().as_deref(), Some("maps-merge"));
        assert!(lesson.snippet().is_none());
    }

    #[test]
    fn test_demo_carries_snippet() {
        let lesson = Lesson::demo("text", Snippet::new(|| 1));
        assert!(lesson.anchor().is_none());
        assert!(lesson.snippet().is_some());
    }

    #[test]
    fn test_anchored_demo_carries_both() {
        let lesson = Lesson::anchored_demo(
            "Lists",
            "## Lists",
            Snippet::new(|| vec![1]).verify(|v: &Vec<i32>| v.len() == 1),
        );
        assert_eq!(lesson.slug().as_deref(), Some("lists"));
        assert!(lesson.snippet().is_some_and(Snippet::is_verified));
    }
}
