//! Assorted examples that do not belong to a single collection.

use im::{OrdMap, Vector, ordmap, vector};
use primer_lesson::{Lesson, Snippet};
use serde_json::json;

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        Lesson::anchored(
            "Misc",
            "## Misc handpicked examples\n\nThese can possibly be moved into other sections.",
        ),
        Lesson::demo(
            r#"### Value equality

Two collections with the same contents are equal, no matter how they were
built.

```rust
let a = ordmap! { "a" => 1, "b" => 2 };
let b = OrdMap::new().update("b", 2).update("a", 1);
a == b
```"#,
            Snippet::new(|| {
                let a = ordmap! { "a" => 1, "b" => 2 };
                let b = OrdMap::new().update("b", 2).update("a", 1);
                a == b
            })
            .expect(true),
        ),
        Lesson::demo(
            r#"### Cheap clones share structure

A clone points at the same tree until one side changes. `ptr_eq` tells you
whether two vectors still share their root.

```rust
let avengers: Vector<i32> = (0..1000).collect();
let copy = avengers.clone();
let mut changed = avengers.clone();
changed.set(0, -1);
(avengers.ptr_eq(&copy), avengers.ptr_eq(&changed))
```"#,
            Snippet::new(|| {
                let avengers: Vector<i32> = (0..1000).collect();
                let copy = avengers.clone();
                let mut changed = avengers.clone();
                changed.set(0, -1);
                (avengers.ptr_eq(&copy), avengers.ptr_eq(&changed))
            })
            .expect((true, false)),
        ),
        Lesson::demo(
            r#"### Keys and values

```rust
let avengers = ordmap! { "ironMan" => "Tony Stark", "theHulk" => "Bruce Banner" };
(
    avengers.keys().copied().collect::<Vector<_>>(),
    avengers.values().copied().collect::<Vector<_>>(),
)
```"#,
            Snippet::new(|| {
                let avengers = ordmap! { "ironMan" => "Tony Stark", "theHulk" => "Bruce Banner" };
                (
                    avengers.keys().copied().collect::<Vector<_>>(),
                    avengers.values().copied().collect::<Vector<_>>(),
                )
            })
            .expect((["ironMan", "theHulk"], ["Tony Stark", "Bruce Banner"])),
        ),
        Lesson::demo(
            r#"### Map and filter through iterators

```rust
let strengths = vector![3, 8, 10, 2];
strengths
    .iter()
    .filter(|s| **s > 2)
    .map(|s| s * 10)
    .collect::<Vector<_>>()
```"#,
            Snippet::new(|| {
                let strengths = vector![3, 8, 10, 2];
                strengths
                    .iter()
                    .filter(|s| **s > 2)
                    .map(|s| s * 10)
                    .collect::<Vector<_>>()
            })
            .expect([30, 80, 100]),
        ),
        Lesson::demo(
            r#"### Nested structures display as plain JSON

```rust
ordmap! {
    "heroes" => vector![
        ordmap! { "heroName" => "blackWidow", "realName" => "Natasha Romanoff" },
        ordmap! { "heroName" => "ironMan", "realName" => "Tony Stark" }
    ]
}
```"#,
            Snippet::new(|| {
                ordmap! {
                    "heroes" => vector![
                        ordmap! { "heroName" => "blackWidow", "realName" => "Natasha Romanoff" },
                        ordmap! { "heroName" => "ironMan", "realName" => "Tony Stark" }
                    ]
                }
            })
            .expect(json!({
                "heroes": [
                    { "heroName": "blackWidow", "realName": "Natasha Romanoff" },
                    { "heroName": "ironMan", "realName": "Tony Stark" }
                ]
            })),
        ),
        Lesson::demo(
            r#"### Inspecting values while you work

Not every example returns something interesting. This one only logs the
vector, so run the page builder with `--verbose` to see it.

```rust
let avengers = vector!["ironMan", "captainAmerica"];
tracing::info!(?avengers, "inspecting");
```"#,
            Snippet::effect(|| {
                let avengers = vector!["ironMan", "captainAmerica"];
                tracing::info!(?avengers, "inspecting");
            }),
        ),
    ]
}
