//! `OrdSet` lessons.

use im::{OrdSet, Vector, ordset, vector};
use primer_lesson::{Lesson, Snippet};

pub(crate) fn lessons() -> Vec<Lesson> {
    let mut lessons = basics();
    lessons.extend(combining());
    lessons
}

fn basics() -> Vec<Lesson> {
    vec![
        Lesson::anchored_demo(
            "Sets",
            r#"## Persistent Sets: `OrdSet`

A set holds each value at most once. `OrdSet` keeps its values sorted, so
duplicates disappear and the order is predictable.

```rust
ordset!["ironMan", "captainAmerica", "ironMan", "blackWidow"]
```"#,
            Snippet::new(|| ordset!["ironMan", "captainAmerica", "ironMan", "blackWidow"])
                .expect(["blackWidow", "captainAmerica", "ironMan"]),
        ),
        Lesson::demo(
            r#"### De-duplicate a `Vector`

```rust
let roll_call = vector!["thor", "loki", "thor", "thor"];
roll_call.into_iter().collect::<OrdSet<&str>>()
```"#,
            Snippet::new(|| {
                let roll_call = vector!["thor", "loki", "thor", "thor"];
                roll_call.into_iter().collect::<OrdSet<&str>>()
            })
            .verify(|heroes: &OrdSet<&'static str>| heroes.len() == 2),
        ),
        Lesson::demo(
            r#"### Add and remove with `update()` and `without()`

```rust
let avengers = ordset!["ironMan", "captainAmerica"];
let joined = avengers.update("blackWidow");
let left = joined.without("ironMan");
(avengers, joined, left)
```"#,
            Snippet::new(|| {
                let avengers = ordset!["ironMan", "captainAmerica"];
                let joined = avengers.update("blackWidow");
                let left = joined.without("ironMan");
                (avengers, joined, left)
            })
            .expect((
                ["captainAmerica", "ironMan"],
                ["blackWidow", "captainAmerica", "ironMan"],
                ["blackWidow", "captainAmerica"],
            )),
        ),
        Lesson::demo(
            r#"### Ranges

```rust
let power_levels = ordset![3, 8, 10, 2, 7];
power_levels.range(3..=8).copied().collect::<Vector<_>>()
```"#,
            Snippet::new(|| {
                let power_levels = ordset![3, 8, 10, 2, 7];
                power_levels.range(3..=8).copied().collect::<Vector<_>>()
            })
            .expect([3, 7, 8]),
        ),
        Lesson::demo(
            r#"### Membership and extremes

```rust
let avengers = ordset!["ironMan", "captainAmerica", "blackWidow"];
(avengers.contains("thor"), avengers.get_min(), avengers.get_max())
```"#,
            Snippet::new(|| {
                let avengers = ordset!["ironMan", "captainAmerica", "blackWidow"];
                (
                    avengers.contains("thor"),
                    avengers.get_min().copied(),
                    avengers.get_max().copied(),
                )
            })
            .expect((false, Some("blackWidow"), Some("ironMan"))),
        ),
    ]
}

fn combining() -> Vec<Lesson> {
    vec![
        Lesson::anchored_demo(
            "Sets - Union, Intersect and Subtract",
            r#"## Sets - Union, Intersect and Subtract

### `union`

```rust
let avengers = ordset!["ironMan", "captainAmerica"];
let defenders = ordset!["daredevil", "ironMan"];
avengers.union(defenders)
```"#,
            Snippet::new(|| {
                let avengers = ordset!["ironMan", "captainAmerica"];
                let defenders = ordset!["daredevil", "ironMan"];
                avengers.union(defenders)
            })
            .expect(["captainAmerica", "daredevil", "ironMan"]),
        ),
        Lesson::demo(
            r#"### `intersection`

```rust
let avengers = ordset!["ironMan", "captainAmerica", "blackWidow"];
let shield = ordset!["blackWidow", "nickFury", "ironMan"];
avengers.intersection(shield)
```"#,
            Snippet::new(|| {
                let avengers = ordset!["ironMan", "captainAmerica", "blackWidow"];
                let shield = ordset!["blackWidow", "nickFury", "ironMan"];
                avengers.intersection(shield)
            })
            .expect(["blackWidow", "ironMan"]),
        ),
        Lesson::demo(
            r#"### Subtract with `relative_complement`

Keeps the values of the left-hand set that are not in the right-hand one.

```rust
let avengers = ordset!["ironMan", "captainAmerica", "blackWidow"];
let retired = ordset!["ironMan", "blackWidow"];
avengers.relative_complement(retired)
```"#,
            Snippet::new(|| {
                let avengers = ordset!["ironMan", "captainAmerica", "blackWidow"];
                let retired = ordset!["ironMan", "blackWidow"];
                avengers.relative_complement(retired)
            })
            .expect(["captainAmerica"]),
        ),
        Lesson::demo(
            r#"### Values in exactly one set with `symmetric_difference`

```rust
let avengers = ordset!["ironMan", "captainAmerica"];
let defenders = ordset!["daredevil", "ironMan"];
avengers.symmetric_difference(defenders)
```"#,
            Snippet::new(|| {
                let avengers = ordset!["ironMan", "captainAmerica"];
                let defenders = ordset!["daredevil", "ironMan"];
                avengers.symmetric_difference(defenders)
            })
            .expect(["captainAmerica", "daredevil"]),
        ),
        Lesson::demo(
            r#"### Subsets

```rust
let founders = ordset!["ironMan", "thor"];
let avengers = ordset!["ironMan", "thor", "theHulk"];
(founders.is_subset(&avengers), avengers.is_subset(&founders))
```"#,
            Snippet::new(|| {
                let founders = ordset!["ironMan", "thor"];
                let avengers = ordset!["ironMan", "thor", "theHulk"];
                (founders.is_subset(&avengers), avengers.is_subset(&founders))
            })
            .expect((true, false)),
        ),
        Lesson::demo(
            r#"Sets of sets work, as long as the inner values are ordered too.

```rust
let teams: Vector<OrdSet<&str>> = vector![
    ordset!["ironMan", "thor"],
    ordset!["thor", "ironMan"],
];
teams.into_iter().collect::<OrdSet<OrdSet<&str>>>().len()
```"#,
            Snippet::new(|| {
                let teams: Vector<OrdSet<&str>> =
                    vector![ordset!["ironMan", "thor"], ordset!["thor", "ironMan"]];
                teams.into_iter().collect::<OrdSet<OrdSet<&str>>>().len()
            })
            .expect(1),
        ),
    ]
}
