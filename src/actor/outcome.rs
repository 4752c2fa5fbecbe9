//! actor::outcome
//!
//! Warnings and the explicit result type of every actor operation.
//!
//! # Invariants
//!
//! - Warnings keep insertion order and duplicates
//! - An [`Outcome`] carries its warnings whether the call succeeded or not
//! - [`Outcome::surface`] displays the warnings before handing back the
//!   result, so callers cannot skip them on the error path
//!
//! # Example
//!
//! ```
//! use cfwork::actor::{ActionError, Outcome, Warnings};
//! use cfwork::ui::BufferUi;
//!
//! let ui = BufferUi::new();
//! let outcome: Outcome<()> = Outcome::err(
//!     ActionError::ApplicationNotFound { name: "some-app".into() },
//!     vec!["get-warning-1"],
//! );
//!
//! let result = outcome.surface(&ui);
//! assert!(result.is_err());
//! assert_eq!(ui.err(), "get-warning-1");
//! ```

use std::fmt;

use super::errors::ActionError;
use crate::ui::Ui;

/// Ordered non-fatal messages attached to an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings(Vec<String>);

impl Warnings {
    /// Create an empty warning list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one warning.
    pub fn push(&mut self, warning: impl Into<String>) {
        self.0.push(warning.into());
    }

    /// Append all warnings from `other`, after the existing ones.
    pub fn extend(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    /// Take the warnings of `outcome` and return its result.
    ///
    /// Lets a multi-step operation collect warnings across calls while
    /// still using `?` on each step.
    pub fn absorb<T, E>(&mut self, outcome: Outcome<T, E>) -> Result<T, E> {
        self.extend(outcome.warnings);
        outcome.result
    }

    /// Iterate over the warnings in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no warnings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> From<Vec<S>> for Warnings {
    fn from(items: Vec<S>) -> Self {
        items.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Warnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("\n"))
    }
}

/// Result of an actor operation: a value or an error, plus warnings.
#[must_use = "an outcome carries warnings that must be surfaced"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T, E = ActionError> {
    /// The typed value, or the error that prevented it.
    pub result: Result<T, E>,
    /// Warnings produced by the call, in order.
    pub warnings: Warnings,
}

impl<T, E> Outcome<T, E> {
    /// Create an outcome from its parts.
    pub fn new(result: Result<T, E>, warnings: impl Into<Warnings>) -> Self {
        Self {
            result,
            warnings: warnings.into(),
        }
    }

    /// A successful outcome.
    pub fn ok(value: T, warnings: impl Into<Warnings>) -> Self {
        Self::new(Ok(value), warnings)
    }

    /// A failed outcome.
    pub fn err(error: E, warnings: impl Into<Warnings>) -> Self {
        Self::new(Err(error), warnings)
    }

    /// Check if the call succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Transform the value, keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        Outcome {
            result: self.result.map(f),
            warnings: self.warnings,
        }
    }

    /// Transform the error, keeping the warnings.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        Outcome {
            result: self.result.map_err(f),
            warnings: self.warnings,
        }
    }

    /// Chain a fallible step onto a successful value.
    ///
    /// The step's warnings follow the existing ones. On error the chain
    /// stops and only the warnings gathered so far are kept. Async
    /// multi-request operations collect through [`Warnings::absorb`]
    /// instead.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        let mut warnings = self.warnings;
        match self.result {
            Ok(value) => {
                let next = f(value);
                warnings.extend(next.warnings);
                Outcome {
                    result: next.result,
                    warnings,
                }
            }
            Err(err) => Outcome {
                result: Err(err),
                warnings,
            },
        }
    }

    /// Split into result and warnings.
    pub fn into_parts(self) -> (Result<T, E>, Warnings) {
        (self.result, self.warnings)
    }

    /// Display the warnings, then return the result.
    pub fn surface(self, ui: &dyn Ui) -> Result<T, E> {
        ui.display_warnings(&self.warnings);
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::ui::BufferUi;

    #[test]
    fn warnings_keep_order_and_duplicates() {
        let mut warnings = Warnings::from(vec!["b", "a"]);
        warnings.push("b");
        assert_eq!(warnings.iter().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn extend_appends_after() {
        let mut first = Warnings::from(vec!["w1"]);
        first.extend(Warnings::from(vec!["w2", "w3"]));
        assert_eq!(first.into_vec(), vec!["w1", "w2", "w3"]);
    }

    #[test]
    fn absorb_collects_on_error_too() {
        let mut warnings = Warnings::new();
        let ok: Result<u8, ApiError> = warnings.absorb(Outcome::ok(1, vec!["a"]));
        let err: Result<u8, ApiError> =
            warnings.absorb(Outcome::err(ApiError::NotFound("x".into()), vec!["b"]));
        assert_eq!(ok, Ok(1));
        assert!(err.is_err());
        assert_eq!(warnings.to_string(), "a\nb");
    }

    #[test]
    fn surface_displays_before_returning_error() {
        let ui = BufferUi::new();
        let outcome: Outcome<()> = Outcome::err(
            ActionError::SpaceNotFound {
                name: "s".into(),
            },
            vec!["w1", "w2"],
        );
        let result = outcome.surface(&ui);
        assert_eq!(
            result,
            Err(ActionError::SpaceNotFound { name: "s".into() })
        );
        assert!(ui.err_says_in_order(&["w1", "w2"]));
    }

    #[test]
    fn map_keeps_warnings() {
        let outcome: Outcome<u8> = Outcome::ok(2, vec!["w"]);
        let mapped = outcome.map(|v| v * 2);
        assert_eq!(mapped.result, Ok(4));
        assert_eq!(mapped.warnings.len(), 1);
    }

    #[test]
    fn map_err_keeps_warnings() {
        let outcome: Outcome<(), ApiError> =
            Outcome::err(ApiError::Network("down".into()), vec!["w"]);
        let mapped: Outcome<()> = outcome.map_err(ActionError::from);
        assert!(!mapped.is_ok());
        assert_eq!(mapped.warnings.len(), 1);
    }

    #[test]
    fn and_then_concatenates_in_call_order() {
        let first: Outcome<u8> = Outcome::ok(1, vec!["w1"]);
        let chained = first.and_then(|v| Outcome::ok(v + 1, vec!["w2"]));
        assert_eq!(chained.result, Ok(2));
        assert_eq!(chained.warnings.into_vec(), vec!["w1", "w2"]);
    }

    #[test]
    fn and_then_short_circuits() {
        let first: Outcome<u8> = Outcome::err(
            ActionError::ApplicationNotFound { name: "a".into() },
            vec!["w1"],
        );
        let mut called = false;
        let chained = first.and_then(|v| {
            called = true;
            Outcome::ok(v, vec!["w2"])
        });
        assert!(!called);
        assert!(!chained.is_ok());
        assert_eq!(chained.warnings.into_vec(), vec!["w1"]);
    }
}
