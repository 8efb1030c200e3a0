//! `OrdMap` and `HashMap` lessons.

use im::{HashMap, OrdMap, Vector, ordmap};
use primer_lesson::{Lesson, Snippet};
use serde_json::json;

pub(crate) fn lessons() -> Vec<Lesson> {
    let mut lessons = creating();
    lessons.extend(get_set_update_delete());
    lessons.extend(merging());
    lessons
}

fn creating() -> Vec<Lesson> {
    vec![
        Lesson::anchored("Maps", "## Persistent Maps: `OrdMap` and `HashMap`"),
        Lesson::demo(
            r#"## Creating a map

`ordmap!` builds a map that keeps its keys sorted. `hashmap!` builds a hash
map with the same persistent API, trading ordered iteration for faster
lookups.

```rust
ordmap! {
    "ironMan" => "Tony Stark",
    "captainAmerica" => "Steve Rogers",
    "blackWidow" => "Natasha Romanoff"
}
```"#,
            Snippet::new(|| {
                ordmap! {
                    "ironMan" => "Tony Stark",
                    "captainAmerica" => "Steve Rogers",
                    "blackWidow" => "Natasha Romanoff"
                }
            }),
        ),
        Lesson::demo(
            r#"Maps can also be collected from any iterator of pairs. Duplicate keys
keep the last value seen.

```rust
vec![("ironMan", "Tony"), ("ironMan", "Tony Stark")]
    .into_iter()
    .collect::<OrdMap<&str, &str>>()
```"#,
            Snippet::new(|| {
                vec![("ironMan", "Tony"), ("ironMan", "Tony Stark")]
                    .into_iter()
                    .collect::<OrdMap<&str, &str>>()
            })
            .expect(json!({ "ironMan": "Tony Stark" })),
        ),
        Lesson::demo(
            r#"Numeric keys are fine too; they are shown as strings because that is
how JSON spells object keys.

```rust
ordmap! { 1 => "ironMan", 2 => "captainAmerica" }
```"#,
            Snippet::new(|| ordmap! { 1 => "ironMan", 2 => "captainAmerica" })
                .expect(json!({ "1": "ironMan", "2": "captainAmerica" })),
        ),
    ]
}

fn get_set_update_delete() -> Vec<Lesson> {
    vec![
        Lesson::anchored_demo(
            "Maps - Get, Set, Update and Delete",
            r#"## Maps - Get, Set, Update and Delete

### Get a value with `get()`

```rust
let avengers = ordmap! { "blackWidow" => "Natasha Romanoff" };
avengers.get("blackWidow")
```"#,
            Snippet::new(|| {
                let avengers = ordmap! { "blackWidow" => "Natasha Romanoff" };
                avengers.get("blackWidow").copied()
            })
            .expect(Some("Natasha Romanoff")),
        ),
        Lesson::demo(
            r#"A missing key gives `None`; pair it with `unwrap_or` for a default.

```rust
let avengers = ordmap! { "blackWidow" => "Natasha Romanoff" };
avengers.get("theHulk").copied().unwrap_or("Bruce Banner")
```"#,
            Snippet::new(|| {
                let avengers = ordmap! { "blackWidow" => "Natasha Romanoff" };
                avengers.get("theHulk").copied().unwrap_or("Bruce Banner")
            })
            .expect("Bruce Banner"),
        ),
        Lesson::demo(
            r#"### Get a value from a nested map

```rust
let avengers = ordmap! {
    "ironMan" => ordmap! { "realName" => "Tony Stark", "partner" => "Pepper Potts" }
};
avengers.get("ironMan").and_then(|hero| hero.get("partner"))
```"#,
            Snippet::new(|| {
                let avengers = ordmap! {
                    "ironMan" => ordmap! { "realName" => "Tony Stark", "partner" => "Pepper Potts" }
                };
                avengers
                    .get("ironMan")
                    .and_then(|hero| hero.get("partner"))
                    .copied()
            })
            .expect(Some("Pepper Potts")),
        ),
        Lesson::demo(
            r#"### First and last entries

An `OrdMap` knows its smallest and largest keys.

```rust
let avengers = ordmap! {
    "ironMan" => "Tony Stark",
    "blackWidow" => "Natasha Romanoff",
    "theHulk" => "Bruce Banner"
};
(avengers.get_min().cloned(), avengers.get_max().cloned())
```"#,
            Snippet::new(|| {
                let avengers = ordmap! {
                    "ironMan" => "Tony Stark",
                    "blackWidow" => "Natasha Romanoff",
                    "theHulk" => "Bruce Banner"
                };
                (avengers.get_min().cloned(), avengers.get_max().cloned())
            })
            .expect((
                Some(("blackWidow", "Natasha Romanoff")),
                Some(("theHulk", "Bruce Banner")),
            )),
        ),
        Lesson::demo(
            r#"### Look for a key or a value

```rust
let avengers = ordmap! { "ironMan" => "Tony Stark", "blackWidow" => "Natasha Romanoff" };
(
    avengers.contains_key("ironMan"),
    avengers.values().any(|name| *name == "Bruce Banner"),
)
```"#,
            Snippet::new(|| {
                let avengers =
                    ordmap! { "ironMan" => "Tony Stark", "blackWidow" => "Natasha Romanoff" };
                (
                    avengers.contains_key("ironMan"),
                    avengers.values().any(|name| *name == "Bruce Banner"),
                )
            })
            .expect((true, false)),
        ),
        Lesson::demo(
            r#"### Walk a key range

Sorted keys make range queries cheap.

```rust
let releases = ordmap! {
    2008 => "Iron Man",
    2011 => "Thor",
    2012 => "The Avengers",
    2014 => "The Winter Soldier"
};
releases.range(2010..2013).map(|(_, film)| *film).collect::<Vector<_>>()
```"#,
            Snippet::new(|| {
                let releases = ordmap! {
                    2008 => "Iron Man",
                    2011 => "Thor",
                    2012 => "The Avengers",
                    2014 => "The Winter Soldier"
                };
                releases
                    .range(2010..2013)
                    .map(|(_, film)| *film)
                    .collect::<Vector<_>>()
            })
            .expect(["Thor", "The Avengers"]),
        ),
        Lesson::demo(
            r#"### Set a value with `update()`

`update` returns a new map with the key added or replaced.

```rust
let avengers = ordmap! { "ironMan" => "Tony Stark" };
let with_cap = avengers.update("captainAmerica", "Steve Rogers");
(avengers.len(), with_cap)
```"#,
            Snippet::new(|| {
                let avengers = ordmap! { "ironMan" => "Tony Stark" };
                let with_cap = avengers.update("captainAmerica", "Steve Rogers");
                (avengers.len(), with_cap)
            })
            .expect(json!([
                1,
                { "captainAmerica": "Steve Rogers", "ironMan": "Tony Stark" }
            ])),
        ),
        Lesson::demo(
            r#"### Update a nested value

Take the inner map out, update it, and put it back. Both levels share every
untouched node with the original.

```rust
let avengers = ordmap! {
    "ironMan" => ordmap! { "realName" => "Tony Stark", "partner" => "Pepper Potts" }
};
let hero = avengers.get("ironMan").cloned().unwrap_or_default();
avengers.update("ironMan", hero.update("partner", "Rhodey"))
```"#,
            Snippet::new(|| {
                let avengers = ordmap! {
                    "ironMan" => ordmap! { "realName" => "Tony Stark", "partner" => "Pepper Potts" }
                };
                let hero = avengers.get("ironMan").cloned().unwrap_or_default();
                avengers.update("ironMan", hero.update("partner", "Rhodey"))
            })
            .expect(json!({
                "ironMan": { "partner": "Rhodey", "realName": "Tony Stark" }
            })),
        ),
        Lesson::demo(
            r#"### Change a value in terms of the old one with `alter()`

```rust
let scores = ordmap! { "ironMan" => 3, "theHulk" => 10 };
scores.alter(|score| score.map(|s| s + 1), "ironMan")
```"#,
            Snippet::new(|| {
                let scores = ordmap! { "ironMan" => 3, "theHulk" => 10 };
                scores.alter(|score| score.map(|s| s + 1), "ironMan")
            })
            .verify(|scores: &OrdMap<&'static str, i32>| scores.get("ironMan") == Some(&4)),
        ),
        Lesson::demo(
            r#"### Insert or combine with `update_with()`

The closure only runs when the key is already present; it gets the old value
first.

```rust
let wins = ordmap! { "ironMan" => 3 };
wins.update_with("ironMan", 1, |old, new| old + new)
    .update_with("thor", 1, |old, new| old + new)
```"#,
            Snippet::new(|| {
                let wins = ordmap! { "ironMan" => 3 };
                wins.update_with("ironMan", 1, |old, new| old + new)
                    .update_with("thor", 1, |old, new| old + new)
            })
            .expect(json!({ "ironMan": 4, "thor": 1 })),
        ),
        Lesson::demo(
            r#"### Delete a key with `without()`

```rust
let avengers = ordmap! { "ironMan" => "Tony Stark", "antMan" => "Scott Lang" };
avengers.without("antMan")
```"#,
            Snippet::new(|| {
                let avengers = ordmap! { "ironMan" => "Tony Stark", "antMan" => "Scott Lang" };
                avengers.without("antMan")
            })
            .verify(|avengers: &OrdMap<&'static str, &'static str>| {
                !avengers.contains_key("antMan") && avengers.len() == 1
            }),
        ),
        Lesson::demo(
            r#"### Delete a nested key

```rust
let avengers = ordmap! {
    "ironMan" => ordmap! { "realName" => "Tony Stark", "partner" => "Pepper Potts" }
};
let hero = avengers.get("ironMan").cloned().unwrap_or_default();
avengers.update("ironMan", hero.without("partner"))
```"#,
            Snippet::new(|| {
                let avengers = ordmap! {
                    "ironMan" => ordmap! { "realName" => "Tony Stark", "partner" => "Pepper Potts" }
                };
                let hero = avengers.get("ironMan").cloned().unwrap_or_default();
                avengers.update("ironMan", hero.without("partner"))
            })
            .expect(json!({ "ironMan": { "realName": "Tony Stark" } })),
        ),
        Lesson::demo(
            r#"### Delete everything with `clear()`

```rust
let mut avengers = ordmap! { "ironMan" => "Tony Stark", "theHulk" => "Bruce Banner" };
avengers.clear();
avengers
```"#,
            Snippet::new(|| {
                let mut avengers =
                    ordmap! { "ironMan" => "Tony Stark", "theHulk" => "Bruce Banner" };
                avengers.clear();
                avengers
            })
            .expect(json!({})),
        ),
        Lesson::demo(
            r#"### `HashMap` has the same API

Iteration order of a `HashMap` is unspecified, but the displayed value is
always sorted by key.

```rust
let mut avengers = HashMap::new();
avengers.insert("theHulk", "Bruce Banner");
avengers.insert("blackWidow", "Natasha Romanoff");
avengers
```"#,
            Snippet::new(|| {
                let mut avengers = HashMap::new();
                avengers.insert("theHulk", "Bruce Banner");
                avengers.insert("blackWidow", "Natasha Romanoff");
                avengers
            })
            .expect(json!({
                "blackWidow": "Natasha Romanoff",
                "theHulk": "Bruce Banner"
            })),
        ),
    ]
}

fn merging() -> Vec<Lesson> {
    vec![
        Lesson::anchored_demo(
            "Maps - Merge",
            r#"## Maps - Merge

### Combine disjoint maps with `union`

```rust
let founders = ordmap! { "ironMan" => "Tony Stark", "captainAmerica" => "Steve Rogers" };
let recruits = ordmap! { "blackWidow" => "Natasha Romanoff" };
founders.union(recruits)
```"#,
            Snippet::new(|| {
                let founders =
                    ordmap! { "ironMan" => "Tony Stark", "captainAmerica" => "Steve Rogers" };
                let recruits = ordmap! { "blackWidow" => "Natasha Romanoff" };
                founders.union(recruits)
            })
            .expect(json!({
                "blackWidow": "Natasha Romanoff",
                "captainAmerica": "Steve Rogers",
                "ironMan": "Tony Stark"
            })),
        ),
        Lesson::demo(
            r#"When both maps hold the same key, plain `union` keeps the value from the
larger map, whichever side it is on. That is rarely what you want for an
update, so state the rule yourself with `union_with`. The closure receives
the value from the left map first.

```rust
let avengers = ordmap! { "ironMan" => "Tony Stark", "captainAmerica" => "Steve Rogers" };
let update = ordmap! { "captainAmerica" => "Sam Wilson" };
// the newer value wins
avengers.union_with(update, |_old, new| new)
```"#,
            Snippet::new(|| {
                let avengers =
                    ordmap! { "ironMan" => "Tony Stark", "captainAmerica" => "Steve Rogers" };
                let update = ordmap! { "captainAmerica" => "Sam Wilson" };
                avengers.union_with(update, |_old, new| new)
            })
            .expect(json!({
                "captainAmerica": "Sam Wilson",
                "ironMan": "Tony Stark"
            })),
        ),
        Lesson::demo(
            r#"Flip the closure to keep what you already had.

```rust
let avengers = ordmap! { "ironMan" => "Tony Stark", "captainAmerica" => "Steve Rogers" };
let update = ordmap! { "captainAmerica" => "Sam Wilson", "blackWidow" => "Natasha Romanoff" };
avengers.union_with(update, |old, _new| old)
```"#,
            Snippet::new(|| {
                let avengers =
                    ordmap! { "ironMan" => "Tony Stark", "captainAmerica" => "Steve Rogers" };
                let update =
                    ordmap! { "captainAmerica" => "Sam Wilson", "blackWidow" => "Natasha Romanoff" };
                avengers.union_with(update, |old, _new| old)
            })
            .expect(json!({
                "blackWidow": "Natasha Romanoff",
                "captainAmerica": "Steve Rogers",
                "ironMan": "Tony Stark"
            })),
        ),
        Lesson::demo(
            r#"### Resolve conflicts by combining values

```rust
let wins = ordmap! { "ironMan" => 3, "theHulk" => 5 };
let more = ordmap! { "ironMan" => 2, "thor" => 4 };
wins.union_with(more, |a, b| a + b)
```"#,
            Snippet::new(|| {
                let wins = ordmap! { "ironMan" => 3, "theHulk" => 5 };
                let more = ordmap! { "ironMan" => 2, "thor" => 4 };
                wins.union_with(more, |a, b| a + b)
            })
            .expect(json!({ "ironMan": 5, "theHulk": 5, "thor": 4 })),
        ),
        Lesson::demo(
            r#"### Deep merge

Nest one `union_with` inside another to merge maps of maps level by level.

```rust
let avengers = ordmap! {
    "ironMan" => ordmap! { "realName" => "Tony Stark" },
    "theHulk" => ordmap! { "realName" => "Bruce Banner" }
};
let update = ordmap! { "ironMan" => ordmap! { "partner" => "Pepper Potts" } };
avengers.union_with(update, |old, new| old.union_with(new, |_old, new| new))
```"#,
            Snippet::new(|| {
                let avengers = ordmap! {
                    "ironMan" => ordmap! { "realName" => "Tony Stark" },
                    "theHulk" => ordmap! { "realName" => "Bruce Banner" }
                };
                let update = ordmap! { "ironMan" => ordmap! { "partner" => "Pepper Potts" } };
                avengers.union_with(update, |old, new| old.union_with(new, |_old, new| new))
            })
            .expect(json!({
                "ironMan": { "partner": "Pepper Potts", "realName": "Tony Stark" },
                "theHulk": { "realName": "Bruce Banner" }
            })),
        ),
    ]
}
