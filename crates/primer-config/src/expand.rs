//! `${VAR}` expansion for configuration strings.
//!
//! Only the braced forms are recognized:
//! - `${VAR}` expands to the value of `VAR` and fails if it is unset,
//! - `${VAR:-default}` falls back to `default`.
//!
//! A bare `$` (a price in a title, say) is left alone.

use crate::ConfigError;

/// Expands variable references, tagging failures with the config field they
/// came from.
pub(crate) struct Expander<L> {
    lookup: L,
}

impl Expander<fn(&str) -> Option<String>> {
    /// Expander backed by the process environment.
    pub(crate) fn from_env() -> Self {
        Self::new(|name| std::env::var(name).ok())
    }
}

impl<L> Expander<L>
where
    L: Fn(&str) -> Option<String>,
{
    pub(crate) fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Expand `value`, naming `field` in the error if a variable is unset.
    pub(crate) fn expand(&self, field: &str, value: &str) -> Result<String, ConfigError> {
        if !value.contains("${") {
            return Ok(value.to_owned());
        }

        shellexpand::env_with_context(value, |name| match (self.lookup)(name) {
            Some(found) => Ok(Some(found)),
            None => Err(Unset(name.to_owned())),
        })
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
    }

    /// Expand a field in place.
    pub(crate) fn apply(&self, field: &str, value: &mut String) -> Result<(), ConfigError> {
        *value = self.expand(field, value)?;
        Ok(())
    }

    /// Expand an optional field in place; `None` stays `None`.
    pub(crate) fn apply_opt(
        &self,
        field: &str,
        value: &mut Option<String>,
    ) -> Result<(), ConfigError> {
        match value {
            Some(inner) => self.apply(field, inner),
            None => Ok(()),
        }
    }
}

/// Name of a variable with no value and no default.
struct Unset(String);
