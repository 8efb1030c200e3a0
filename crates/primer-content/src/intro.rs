//! Introduction to persistent collections.

use im::{Vector, vector};
use primer_lesson::{Lesson, Snippet};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::anchored(
            "Intro",
            "## Intro to persistent collections

This tutorial uses the [`im`](https://docs.rs/im) crate, version 15. Every \
example below is compiled into the page and its result is shown underneath.",
        ),
        Lesson::demo(
            r#"A persistent collection is never changed in place. Cloning one is
cheap because the clone shares structure with the original, and changing the
clone leaves the original untouched. That gives you the convenience of a
mutable API with none of the defensive copying.

For example, `push_back` on a clone does NOT modify the original collection.

```rust
let collection = vector!["ironMan"];
let mut changed = collection.clone();
changed.push_back("captainAmerica");
// `collection` remains un-modified.
collection
```"#,
            Snippet::new(|| {
                let collection = vector!["ironMan"];
                let mut changed = collection.clone();
                changed.push_back("captainAmerica");
                collection
            })
            .expect(["ironMan"]),
        ),
        Lesson::demo(
            r#"If we keep the changed clone, we can see the result of the push.

```rust
let collection = vector!["ironMan"];
let mut new_collection = collection.clone();
new_collection.push_back("captainAmerica");
new_collection
```"#,
            Snippet::new(|| {
                let collection = vector!["ironMan"];
                let mut new_collection = collection.clone();
                new_collection.push_back("captainAmerica");
                new_collection
            })
            .expect(["ironMan", "captainAmerica"]),
        ),
        Lesson::demo(
            r#"Methods such as `update` return a new collection directly and borrow
the original immutably, so both versions stay usable side by side.

```rust
let before = vector!["ironMan", "captainAmerica"];
let after = before.update(0, "blackWidow");
(before, after)
```"#,
            Snippet::new(|| {
                let before = vector!["ironMan", "captainAmerica"];
                let after = before.update(0, "blackWidow");
                (before, after)
            })
            .verify(|(before, after): &(Vector<&'static str>, Vector<&'static str>)| {
                before[0] == "ironMan" && after[0] == "blackWidow"
            }),
        ),
    ]
}
