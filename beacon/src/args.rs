//! Ordered, type-erased argument payloads.
//!
//! This module provides [`Args`], the payload type forwarded to every
//! handler matched by an emission. A payload is an ordered sequence of
//! opaque values; position and identity are preserved, so every handler
//! sees exactly what the emitter passed, in the order it was passed.
//!
//! # Type Erasure
//!
//! Values are stored as `Box<dyn Any + Send>`. Handlers downcast back to
//! concrete types by position with [`get()`](Args::get), which returns
//! `None` on a missing position or a type mismatch rather than panicking.
//!
//! # Example
//!
//! ```rust,ignore
//! let payload = args!["first", 2u32];
//!
//! assert_eq!(payload.get::<&str>(0), Some(&"first"));
//! assert_eq!(payload.get::<u32>(1), Some(&2));
//! assert_eq!(payload.get::<u32>(0), None); // wrong type
//! assert_eq!(payload.get::<u32>(2), None); // out of range
//! ```

use std::any::Any;

/// A single forwarded argument value.
///
/// Values must be `Send` so that a populated payload (and any registry
/// holding handlers that capture one) can cross thread boundaries when the
/// embedding application synchronizes externally.
pub type Value = Box<dyn Any + Send>;

/// An ordered sequence of opaque argument values.
///
/// `Args` is built by the emitter, passed by reference to every matched
/// handler, and read positionally. An empty payload is valid and common;
/// many events carry no data at all.
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends a value to the end of the payload.
    ///
    /// Values are read back in the order they were pushed.
    pub fn push(&mut self, value: impl Any + Send) {
        self.values.push(Box::new(value));
    }

    /// Returns the value at `index` downcast to `T`.
    ///
    /// Returns `None` when the position does not exist or holds a value of
    /// a different type.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut payload = Args::new();
    /// payload.push(42u32);
    ///
    /// assert_eq!(payload.get::<u32>(0), Some(&42));
    /// assert_eq!(payload.get::<i64>(0), None);
    /// ```
    pub fn get<T: 'static>(&self, index: usize) -> Option<&T> {
        self.values.get(index)?.downcast_ref::<T>()
    }

    /// Returns the number of values in the payload.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the payload carries no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an [`Args`] payload from a comma-separated list of values.
///
/// Values may be of heterogeneous types; order is preserved.
///
/// # Example
///
/// ```rust,ignore
/// let payload = args!["door:front", 3u32, true];
/// assert_eq!(payload.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::args::Args::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut payload = $crate::args::Args::new();
        $(payload.push($value);)+
        payload
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction ====================

    #[test]
    fn new_creates_empty_payload() {
        let payload = Args::new();

        assert!(payload.is_empty());
        assert_eq!(payload.len(), 0);
    }

    #[test]
    fn push_preserves_order() {
        let mut payload = Args::new();

        payload.push(1u32);
        payload.push(2u32);
        payload.push(3u32);

        assert_eq!(payload.len(), 3);
        assert_eq!(payload.get::<u32>(0), Some(&1));
        assert_eq!(payload.get::<u32>(1), Some(&2));
        assert_eq!(payload.get::<u32>(2), Some(&3));
    }

    #[test]
    fn push_accepts_heterogeneous_types() {
        let mut payload = Args::new();

        payload.push("label");
        payload.push(7i64);
        payload.push(true);

        assert_eq!(payload.get::<&str>(0), Some(&"label"));
        assert_eq!(payload.get::<i64>(1), Some(&7));
        assert_eq!(payload.get::<bool>(2), Some(&true));
    }

    // ==================== Downcast Behavior ====================

    #[test]
    fn get_with_wrong_type_returns_none() {
        let mut payload = Args::new();
        payload.push(42u32);

        assert_eq!(payload.get::<i64>(0), None);
        assert_eq!(payload.get::<String>(0), None);
    }

    #[test]
    fn get_out_of_range_returns_none() {
        let mut payload = Args::new();
        payload.push(42u32);

        assert_eq!(payload.get::<u32>(1), None);
    }

    #[test]
    fn get_on_empty_payload_returns_none() {
        let payload = Args::new();

        assert_eq!(payload.get::<u32>(0), None);
    }

    // ==================== Macro ====================

    #[test]
    fn args_macro_empty() {
        let payload = args![];

        assert!(payload.is_empty());
    }

    #[test]
    fn args_macro_builds_in_order() {
        let payload = args!["first", "second", 3u8];

        assert_eq!(payload.get::<&str>(0), Some(&"first"));
        assert_eq!(payload.get::<&str>(1), Some(&"second"));
        assert_eq!(payload.get::<u8>(2), Some(&3));
    }

    #[test]
    fn args_macro_accepts_trailing_comma() {
        let payload = args![1u32, 2u32,];

        assert_eq!(payload.len(), 2);
    }
}
