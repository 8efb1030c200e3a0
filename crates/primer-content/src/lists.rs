//! `Vector` lessons.

use im::{OrdMap, Vector, vector};
use primer_lesson::{Lesson, Snippet};

pub(crate) fn lessons() -> Vec<Lesson> {
    let mut lessons = creating();
    lessons.extend(get_set_delete());
    lessons.extend(merging());
    lessons.extend(grouping());
    lessons
}

fn creating() -> Vec<Lesson> {
    vec![
        Lesson::anchored("Lists", "## Persistent Lists: `Vector`"),
        Lesson::demo(
            r#"## `vector!` vs `Vector::from` vs `collect`

There are several ways to build a `Vector`, depending on where your data lives:

- `vector![...]` builds one from a fixed list of values;
- `Vector::from(vec)` converts an existing `Vec` (or slice);
- `.collect()` builds one from any iterator, including the characters of a string.

```rust
"ironMan".chars().collect::<Vector<char>>()
```"#,
            Snippet::new(|| "ironMan".chars().collect::<Vector<char>>())
                .expect(["i", "r", "o", "n", "M", "a", "n"]),
        ),
        Lesson::demo(
            r#"A map is also an iterator of key/value pairs, so it can be turned into a
`Vector` of tuples the same way.

```rust
let avengers = ordmap! {
    "ironMan" => "Tony Stark",
    "captainAmerica" => "Steve Rogers"
};
avengers.into_iter().collect::<Vector<_>>()
```"#,
            Snippet::new(|| {
                let avengers = im::ordmap! {
                    "ironMan" => "Tony Stark",
                    "captainAmerica" => "Steve Rogers"
                };
                avengers.into_iter().collect::<Vector<_>>()
            }),
        ),
    ]
}

fn get_set_delete() -> Vec<Lesson> {
    vec![
        Lesson::anchored_demo(
            "Lists - Get, Set, and Delete",
            r#"## Lists - Get, Set, and Delete

### Get a value with `get()`

Like `Vec`, a `Vector` is zero-indexed. `get` returns an `Option` so an
out-of-range index is not a panic.

```rust
let avengers = vector!["ironMan", "captainAmerica"];
avengers.get(1)
```"#,
            Snippet::new(|| {
                let avengers = vector!["ironMan", "captainAmerica"];
                avengers.get(1).copied()
            })
            .expect(Some("captainAmerica")),
        ),
        Lesson::demo(
            r#"Counting back from the end uses `len()`; `back()` is a shortcut for the
last value.

```rust
let avengers = vector!["ironMan", "captainAmerica", "blackWidow", "theHulk"];
avengers.get(avengers.len() - 2)
```"#,
            Snippet::new(|| {
                let avengers = vector!["ironMan", "captainAmerica", "blackWidow", "theHulk"];
                avengers.get(avengers.len() - 2).copied()
            })
            .expect(Some("blackWidow")),
        ),
        Lesson::demo(
            r#"### Get a value from a nested `Vector`

Nested collections are just vectors of vectors. Chain `get` calls with
`and_then` to walk down a path without panicking on a missing level.

```rust
let avengers = vector![
    vector!["ironMan"],
    vector!["captainAmerica", "blackWidow"],
    vector!["theHulk"],
];
avengers.get(1).and_then(|team| team.get(1))
```"#,
            Snippet::new(|| {
                let avengers = vector![
                    vector!["ironMan"],
                    vector!["captainAmerica", "blackWidow"],
                    vector!["theHulk"],
                ];
                avengers.get(1).and_then(|team| team.get(1)).copied()
            })
            .expect(Some("blackWidow")),
        ),
        Lesson::demo(
            r#"### Replace a value with `update()`

```rust
let avengers = vector!["ironMan", "captainAmerica"];
// change ironMan to blackWidow
avengers.update(0, "blackWidow")
```"#,
            Snippet::new(|| {
                let avengers = vector!["ironMan", "captainAmerica"];
                avengers.update(0, "blackWidow")
            })
            .expect(["blackWidow", "captainAmerica"]),
        ),
        Lesson::demo(
            r#"`set` does the same on a mutable binding and hands back the value it
replaced. Any clones taken earlier still see the old value.

```rust
let original = vector!["ironMan", "captainAmerica", "blackWidow", "theHulk", "antMan"];
let mut avengers = original.clone();
// Replace theHulk with scarletWitch (sorry Bruce)
let replaced = avengers.set(3, "scarletWitch");
(replaced, avengers, original)
```"#,
            Snippet::new(|| {
                let original =
                    vector!["ironMan", "captainAmerica", "blackWidow", "theHulk", "antMan"];
                let mut avengers = original.clone();
                let replaced = avengers.set(3, "scarletWitch");
                (replaced, avengers, original)
            })
            .verify(
                |(replaced, avengers, original): &(
                    &'static str,
                    Vector<&'static str>,
                    Vector<&'static str>,
                )| {
                    *replaced == "theHulk"
                        && avengers.get(3) == Some(&"scarletWitch")
                        && original.get(3) == Some(&"theHulk")
                },
            ),
        ),
        Lesson::demo(
            r#"### Add values with `push_back`, `push_front` and `insert`

```rust
let mut avengers = vector!["ironMan", "captainAmerica"];
avengers.push_back("blackWidow");
avengers.push_front("antMan");
avengers.insert(2, "theHulk");
avengers
```"#,
            Snippet::new(|| {
                let mut avengers = vector!["ironMan", "captainAmerica"];
                avengers.push_back("blackWidow");
                avengers.push_front("antMan");
                avengers.insert(2, "theHulk");
                avengers
            })
            .expect(["antMan", "ironMan", "theHulk", "captainAmerica", "blackWidow"]),
        ),
        Lesson::demo(
            r#"### Delete values with `remove` and `pop_back`

```rust
let mut avengers = vector!["ironMan", "captainAmerica", "blackWidow"];
// 'bye Tony
avengers.remove(0);
// see ya later, Natasha
let popped = avengers.pop_back();
(popped, avengers)
```"#,
            Snippet::new(|| {
                let mut avengers = vector!["ironMan", "captainAmerica", "blackWidow"];
                avengers.remove(0);
                let popped = avengers.pop_back();
                (popped, avengers)
            })
            .expect((Some("blackWidow"), ["captainAmerica"])),
        ),
        Lesson::demo(
            r#"Delete all values with `clear`.

```rust
let mut avengers = vector!["ironMan", "captainAmerica", "blackWidow", "antMan"];
// kill all Avengers
avengers.clear();
avengers
```"#,
            Snippet::new(|| {
                let mut avengers = vector!["ironMan", "captainAmerica", "blackWidow", "antMan"];
                avengers.clear();
                avengers
            })
            .verify(|avengers: &Vector<&'static str>| avengers.is_empty()),
        ),
    ]
}

fn merging() -> Vec<Lesson> {
    vec![
        Lesson::anchored_demo(
            "Lists - Merging",
            r#"## Lists - Merging

### Concatenate with `append`

Appending shares the tree nodes of both inputs instead of copying every
element.

```rust
let mut avengers = vector!["ironMan", "captainAmerica"];
let more = vector!["blackWidow", "theHulk"];
avengers.append(more);
avengers
```"#,
            Snippet::new(|| {
                let mut avengers = vector!["ironMan", "captainAmerica"];
                let more = vector!["blackWidow", "theHulk"];
                avengers.append(more);
                avengers
            })
            .expect(["ironMan", "captainAmerica", "blackWidow", "theHulk"]),
        ),
        Lesson::demo(
            r#"### Split with `split_at`, `take` and `skip`

```rust
let avengers = vector!["ironMan", "captainAmerica", "blackWidow", "theHulk"];
let (founders, recruits) = avengers.clone().split_at(2);
(founders, recruits, avengers.take(1), avengers.skip(3))
```"#,
            Snippet::new(|| {
                let avengers = vector!["ironMan", "captainAmerica", "blackWidow", "theHulk"];
                let (founders, recruits) = avengers.clone().split_at(2);
                (founders, recruits, avengers.take(1), avengers.skip(3))
            })
            .expect((
                ["ironMan", "captainAmerica"],
                ["blackWidow", "theHulk"],
                ["ironMan"],
                ["theHulk"],
            )),
        ),
        Lesson::demo(
            r#"### Merge element-wise with `zip`

```rust
let heroes = vector!["ironMan", "captainAmerica"];
let names = vector!["Tony Stark", "Steve Rogers"];
heroes.into_iter().zip(names).collect::<Vector<_>>()
```"#,
            Snippet::new(|| {
                let heroes = vector!["ironMan", "captainAmerica"];
                let names = vector!["Tony Stark", "Steve Rogers"];
                heroes.into_iter().zip(names).collect::<Vector<_>>()
            })
            .expect([["ironMan", "Tony Stark"], ["captainAmerica", "Steve Rogers"]]),
        ),
        Lesson::demo(
            r#"### Sort a copy

`sort` needs a mutable binding, so sorting a clone leaves the source order
intact.

```rust
let avengers = vector!["theHulk", "blackWidow", "ironMan"];
let mut sorted = avengers.clone();
sorted.sort();
(avengers, sorted)
```"#,
            Snippet::new(|| {
                let avengers = vector!["theHulk", "blackWidow", "ironMan"];
                let mut sorted = avengers.clone();
                sorted.sort();
                (avengers, sorted)
            })
            .expect((
                ["theHulk", "blackWidow", "ironMan"],
                ["blackWidow", "ironMan", "theHulk"],
            )),
        ),
    ]
}

fn grouping() -> Vec<Lesson> {
    vec![Lesson::anchored_demo(
        "Lists - Grouping",
        r#"## Lists - Grouping

There is no built-in `group_by`; folding into an `OrdMap` of vectors does the
job and keeps the groups in key order.

```rust
let avengers = vector![
    ("ironMan", "human"),
    ("vision", "android"),
    ("blackWidow", "human"),
    ("ultron", "android"),
];
let empty: OrdMap<&str, Vector<&str>> = OrdMap::new();
avengers.iter().fold(empty, |groups, (hero, kind)| {
    let mut members = groups.get(kind).cloned().unwrap_or_default();
    members.push_back(*hero);
    groups.update(*kind, members)
})
```"#,
        Snippet::new(|| {
            let avengers = vector![
                ("ironMan", "human"),
                ("vision", "android"),
                ("blackWidow", "human"),
                ("ultron", "android"),
            ];
            let empty: OrdMap<&str, Vector<&str>> = OrdMap::new();
            avengers.iter().fold(empty, |groups, (hero, kind)| {
                let mut members = groups.get(kind).cloned().unwrap_or_default();
                members.push_back(*hero);
                groups.update(*kind, members)
            })
        })
        .expect(serde_json::json!({
            "android": ["vision", "ultron"],
            "human": ["ironMan", "blackWidow"],
        })),
    )]
}
