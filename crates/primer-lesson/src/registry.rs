//! Ordered, immutable lesson registry.

use std::collections::BTreeMap;
use std::fmt;

use crate::lesson::Lesson;

/// Synthetic key of a registry entry, derived from its position.
///
/// Keys are unique within one registry and stable across re-renders of it.
/// Unlike slugs they are not meant to be linked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LessonKey(usize);

impl LessonKey {
    /// Zero-based position in the registry.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lesson-{}", self.0)
    }
}

/// A lesson together with its registry key.
#[derive(Debug)]
pub struct Entry {
    key: LessonKey,
    lesson: Lesson,
}

impl Entry {
    #[must_use]
    pub fn key(&self) -> LessonKey {
        self.key
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }
}

/// Two or more anchors that resolve to the same slug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateSlug {
    pub slug: String,
    /// Colliding anchors, in registry order.
    pub anchors: Vec<String>,
}

/// Lessons in display order.
///
/// Built once and never mutated; rendering borrows it.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Build a registry from lessons in display order.
    pub fn new(lessons: impl IntoIterator<Item = Lesson>) -> Self {
        let entries = lessons
            .into_iter()
            .enumerate()
            .map(|(index, lesson)| Entry {
                key: LessonKey(index),
                lesson,
            })
            .collect();
        Self { entries }
    }

    /// Build a registry by concatenating topic groups in the given order.
    pub fn from_groups<G>(groups: impl IntoIterator<Item = G>) -> Self
    where
        G: IntoIterator<Item = Lesson>,
    {
        Self::new(groups.into_iter().flatten())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that declare an anchor, in registry order.
    pub fn anchored(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.lesson.anchor().is_some())
    }

    /// Resolve a permalink target back to its lesson.
    ///
    /// When several anchors share a slug the last one wins, matching the
    /// order in which the rendered targets are emitted.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Entry> {
        self.anchored()
            .filter(|e| e.lesson.slug().as_deref() == Some(slug))
            .last()
    }

    /// Report anchors whose slugs collide.
    #[must_use]
    pub fn duplicate_slugs(&self) -> Vec<DuplicateSlug> {
        let mut by_slug: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in self.anchored() {
            if let (Some(anchor), Some(slug)) = (entry.lesson.anchor(), entry.lesson.slug()) {
                by_slug.entry(slug).or_default().push(anchor.to_owned());
            }
        }
        by_slug
            .into_iter()
            .filter(|(_, anchors)| anchors.len() > 1)
            .map(|(slug, anchors)| DuplicateSlug { slug, anchors })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Registry {
        Registry::from_groups([
            vec![Lesson::anchored("Intro", "## Intro"), Lesson::prose("Welcome")],
            vec![Lesson::anchored("Lists", "## Lists")],
            vec![],
            vec![Lesson::prose("Sets")],
        ])
    }

    #[test]
    fn test_groups_concatenate_in_order() {
        let registry = sample();
        let texts: Vec<_> = registry.iter().map(|e| e.lesson().text()).collect();
        assert_eq!(texts, vec!["## Intro", "Welcome", "## Lists", "Sets"]);
    }

    #[test]
    fn test_keys_follow_positions() {
        let registry = sample();
        let keys: Vec<_> = registry.iter().map(|e| e.key().to_string()).collect();
        assert_eq!(keys, vec!["lesson-0", "lesson-1", "lesson-2", "lesson-3"]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_anchored_filters() {
        let registry = sample();
        let anchors: Vec<_> = registry
            .anchored()
            .filter_map(|e| e.lesson().anchor())
            .collect();
        assert_eq!(anchors, vec!["Intro", "Lists"]);
    }

    #[test]
    fn test_find_by_slug() {
        let registry = sample();
        let entry = registry.find_by_slug("lists").unwrap();
        assert_eq!(entry.key().index(), 2);
        assert!(registry.find_by_slug("maps").is_none());
    }

    #[test]
    fn test_duplicate_slugs_last_wins() {
        let registry = Registry::new([
            Lesson::anchored("Maps: Merge", "first"),
            Lesson::anchored("Maps Merge", "second"),
            Lesson::anchored("Sets", "third"),
        ]);
        assert_eq!(
            registry.duplicate_slugs(),
            vec![DuplicateSlug {
                slug: "maps-merge".to_owned(),
                anchors: vec!["Maps: Merge".to_owned(), "Maps Merge".to_owned()],
            }]
        );
        assert_eq!(
            registry.find_by_slug("maps-merge").unwrap().lesson().text(),
            "second"
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert!(registry.duplicate_slugs().is_empty());
    }
}
