//! Runnable lesson demonstrations.
//!
//! A [`Snippet`] wraps a zero-argument closure producing any [`Serialize`]
//! value, plus an optional verifier over that value. Evaluation serializes
//! the produced value to JSON for display and reduces the verifier's outcome
//! to a pass/fail signal.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use serde::Serialize;
use serde_json::Value;

type Runner = dyn Fn() -> Result<Evaluation, SnippetError>;

thread_local! {
    static EVALUATING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_PANICS: Once = Once::new();

/// Error produced when a snippet cannot be evaluated.
///
/// These are authoring mistakes in lesson content, not verification
/// mismatches: a snippet whose verifier rejects the value still evaluates
/// successfully with a failing signal.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    /// The produced (or expected) value has no JSON representation.
    #[error("Snippet result cannot be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The demonstration or its verifier panicked.
    #[error("Snippet panicked: {0}")]
    Panicked(String),
}

/// Result of running a snippet.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    value: Value,
    signal: Option<bool>,
    effect: bool,
}

impl Evaluation {
    /// The produced value in JSON form.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Verification signal: `None` without a verifier, otherwise whether the
    /// verifier returned exactly `true`.
    #[must_use]
    pub fn signal(&self) -> Option<bool> {
        self.signal
    }

    /// Whether the snippet ran only for its side effects.
    #[must_use]
    pub fn is_effect(&self) -> bool {
        self.effect
    }

    /// Pretty-printed value with two-space indentation and sorted object keys.
    ///
    /// Side-effect snippets have nothing to show and print as an empty string.
    #[must_use]
    pub fn pretty(&self) -> String {
        if self.effect {
            return String::new();
        }
        serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| self.value.to_string())
    }
}

/// A lesson's runnable demonstration.
///
/// Built with [`Snippet::new`], optionally followed by [`Demo::verify`] or
/// [`Demo::expect`]:
///
/// ```
/// use primer_lesson::Snippet;
///
/// let shown: Snippet = Snippet::new(|| vec![1, 2, 3]).into();
/// let checked = Snippet::new(|| vec![1, 2, 3]).verify(|v: &Vec<i32>| v.len() == 3);
/// let expected = Snippet::new(|| vec![1, 2, 3]).expect([1, 2, 3]);
///
/// assert_eq!(shown.evaluate().unwrap().signal(), None);
/// assert_eq!(checked.evaluate().unwrap().signal(), Some(true));
/// assert_eq!(expected.evaluate().unwrap().signal(), Some(true));
/// ```
pub struct Snippet {
    runner: Box<Runner>,
    verified: bool,
}

impl Snippet {
    /// Start a snippet from a demonstration closure.
    ///
    /// Returns a [`Demo`] builder; convert it with `.into()` for an
    /// unverified snippet or attach a check with [`Demo::verify`].
    #[allow(clippy::new_ret_no_self)]
    pub fn new<F, T>(demo: F) -> Demo<F>
    where
        F: Fn() -> T + 'static,
        T: Serialize,
    {
        Demo { demo }
    }

    /// A snippet run only for its side effects, such as logging.
    ///
    /// It never carries a verifier and its result block stays empty.
    pub fn effect<F>(run: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::from_runner(false, move || {
            run();
            Ok(Evaluation {
                value: Value::Null,
                signal: None,
                effect: true,
            })
        })
    }

    fn from_runner(
        verified: bool,
        runner: impl Fn() -> Result<Evaluation, SnippetError> + 'static,
    ) -> Self {
        Self {
            runner: Box::new(runner),
            verified,
        }
    }

    /// Whether this snippet carries a verifier.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Run the demonstration and its verifier once.
    ///
    /// Panics raised by lesson code are caught and reported as
    /// [`SnippetError::Panicked`] so one broken lesson cannot take down the page.
    /// The default panic message is not printed for them.
    pub fn evaluate(&self) -> Result<Evaluation, SnippetError> {
        install_quiet_panics();
        let outer = EVALUATING.with(|flag| flag.replace(true));
        let caught = panic::catch_unwind(AssertUnwindSafe(|| (self.runner)()));
        EVALUATING.with(|flag| flag.set(outer));

        let result = match caught {
            Ok(result) => result,
            Err(payload) => Err(SnippetError::Panicked(panic_message(payload.as_ref()))),
        };
        match &result {
            Ok(evaluation) => tracing::trace!(
                signal = ?evaluation.signal,
                effect = evaluation.effect,
                "Snippet ran"
            ),
            Err(e) => tracing::debug!(error = %e, "Snippet failed"),
        }
        result
    }
}

impl fmt::Debug for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snippet")
            .field("verified", &self.verified)
            .finish_non_exhaustive()
    }
}

/// Builder returned by [`Snippet::new`].
pub struct Demo<F> {
    demo: F,
}

impl<F, T> Demo<F>
where
    F: Fn() -> T + 'static,
    T: Serialize,
{
    /// Attach a verifier over the produced value.
    ///
    /// The verifier may return anything convertible to a JSON value. Only a
    /// literal `true` passes; `1`, `"yes"` or any other truthy-looking outcome
    /// is a failure.
    pub fn verify<C, R>(self, check: C) -> Snippet
    where
        C: Fn(&T) -> R + 'static,
        R: Into<Value>,
    {
        let demo = self.demo;
        Snippet::from_runner(true, move || {
            let produced = demo();
            let value = serde_json::to_value(&produced)?;
            let outcome: Value = check(&produced).into();
            Ok(Evaluation {
                value,
                signal: Some(outcome == Value::Bool(true)),
                effect: false,
            })
        })
    }

    /// Verify by deep equality between the serialized produced value and
    /// the serialized `expected` value.
    pub fn expect<E>(self, expected: E) -> Snippet
    where
        E: Serialize + 'static,
    {
        let demo = self.demo;
        Snippet::from_runner(true, move || {
            let value = serde_json::to_value(demo())?;
            let expected = serde_json::to_value(&expected)?;
            let signal = Some(value == expected);
            Ok(Evaluation {
                value,
                signal,
                effect: false,
            })
        })
    }
}

impl<F, T> From<Demo<F>> for Snippet
where
    F: Fn() -> T + 'static,
    T: Serialize,
{
    fn from(builder: Demo<F>) -> Self {
        let demo = builder.demo;
        Self::from_runner(false, move || {
            Ok(Evaluation {
                value: serde_json::to_value(demo())?,
                signal: None,
                effect: false,
            })
        })
    }
}

/// Route panics raised while a snippet is evaluating on this thread to the
/// debug log instead of the previous hook.
fn install_quiet_panics() {
    QUIET_PANICS.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if EVALUATING.with(Cell::get) {
                tracing::debug!(panic = %info, "Snippet panicked");
            } else {
                previous(info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unverified_has_no_signal() {
        let snippet: Snippet = Snippet::new(|| vec![1, 2, 3]).into();
        let evaluation = snippet.evaluate().unwrap();
        assert!(!snippet.is_verified());
        assert_eq!(evaluation.value(), &json!([1, 2, 3]));
        assert_eq!(evaluation.signal(), None);
    }

    #[test]
    fn test_verifier_passes() {
        let snippet = Snippet::new(|| vec![1, 2, 3]).verify(|v: &Vec<i32>| v.len() == 3);
        assert!(snippet.is_verified());
        assert_eq!(snippet.evaluate().unwrap().signal(), Some(true));
    }

    #[test]
    fn test_verifier_fails() {
        let snippet = Snippet::new(|| vec![1, 2]).verify(|v: &Vec<i32>| v.len() == 3);
        assert_eq!(snippet.evaluate().unwrap().signal(), Some(false));
    }

    #[test]
    fn test_truthy_non_boolean_is_failure() {
        let snippet = Snippet::new(|| vec![1, 2, 3]).verify(|_: &Vec<i32>| 1);
        assert_eq!(snippet.evaluate().unwrap().signal(), Some(false));

        let snippet = Snippet::new(|| vec![1, 2, 3]).verify(|_: &Vec<i32>| "true");
        assert_eq!(snippet.evaluate().unwrap().signal(), Some(false));
    }

    #[test]
    fn test_expect_deep_equality() {
        let snippet = Snippet::new(|| vec!["ironMan", "captainAmerica"])
            .expect(["ironMan", "captainAmerica"]);
        assert_eq!(snippet.evaluate().unwrap().signal(), Some(true));

        let snippet = Snippet::new(|| vec!["ironMan"]).expect(["ironMan", "captainAmerica"]);
        assert_eq!(snippet.evaluate().unwrap().signal(), Some(false));
    }

    #[test]
    fn test_unit_snippet_is_null() {
        let snippet: Snippet = Snippet::new(|| ()).into();
        let evaluation = snippet.evaluate().unwrap();
        assert_eq!(evaluation.value(), &Value::Null);
        assert_eq!(evaluation.pretty(), "null");
    }

    #[test]
    fn test_effect_snippet_shows_nothing() {
        let ran = std::rc::Rc::new(Cell::new(0));
        let counter = std::rc::Rc::clone(&ran);
        let snippet = Snippet::effect(move || counter.set(counter.get() + 1));

        let evaluation = snippet.evaluate().unwrap();
        assert!(!snippet.is_verified());
        assert!(evaluation.is_effect());
        assert_eq!(evaluation.signal(), None);
        assert_eq!(evaluation.pretty(), "");
        assert_eq!(ran.get(), 1);
    }

    #[test]
    fn test_pretty_sorts_keys() {
        let snippet: Snippet = Snippet::new(|| {
            let mut map = std::collections::HashMap::new();
            map.insert("b", 2);
            map.insert("a", 1);
            map
        })
        .into();
        let pretty = snippet.evaluate().unwrap().pretty();
        assert_eq!(pretty, "{\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn test_unserializable_value_is_error() {
        let snippet: Snippet = Snippet::new(|| {
            let mut map = BTreeMap::new();
            map.insert(vec![1], "list keys are not JSON keys");
            map
        })
        .into();
        let err = snippet.evaluate().unwrap_err();
        assert!(matches!(err, SnippetError::Serialize(_)));
    }

    #[test]
    fn test_panic_is_captured() {
        let snippet: Snippet = Snippet::new(|| -> Vec<i32> { panic!("index out of bounds") }).into();
        let err = snippet.evaluate().unwrap_err();
        assert_eq!(err.to_string(), "Snippet panicked: index out of bounds");
        assert!(!EVALUATING.with(Cell::get));
    }

    #[test]
    fn test_panic_in_verifier_is_captured() {
        let snippet = Snippet::new(|| vec![1]).verify(|v: &Vec<i32>| v[3] == 1);
        let err = snippet.evaluate().unwrap_err();
        assert!(matches!(err, SnippetError::Panicked(_)));
    }

    #[test]
    fn test_repeated_evaluation_is_identical() {
        let snippet = Snippet::new(|| vec![1, 2, 3]).verify(|v: &Vec<i32>| v.len() == 3);
        assert_eq!(snippet.evaluate().unwrap(), snippet.evaluate().unwrap());
    }
}
