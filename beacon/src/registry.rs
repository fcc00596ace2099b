//! String-keyed handler registry and synchronous dispatch.
//!
//! This module provides [`Registry`], the dispatcher's single data
//! structure. It owns two independent namespaces of named handler lists:
//!
//! - **Multi**: handlers registered via [`on()`](Registry::on), invoked on
//!   every emission of their name until removed
//! - **Once**: handlers registered via [`once()`](Registry::once), invoked
//!   on the first emission of their name, then discarded as a bucket
//!
//! The same event name may have entries in both namespaces simultaneously;
//! an emission fires the multi handlers first, then the once handlers, each
//! group in insertion order.
//!
//! # Dispatch Model
//!
//! [`emit()`](Registry::emit) is fully synchronous: it calls each matched
//! handler in place on the caller's thread and returns only after the last
//! one has completed. Nothing is scheduled, suspended, or retried. A
//! handler that panics is not caught; the panic propagates to `emit`'s
//! caller and any remaining handlers for that call are not invoked.
//!
//! # Reentrancy
//!
//! `emit` takes `&mut self`, so a handler cannot also hold a reference to
//! the registry that is dispatching it. The borrow checker rules out
//! mutating the registry from inside an in-flight emission.
//!
//! # Example
//!
//! ```rust,ignore
//! use beacon::{Args, Registry, args};
//!
//! let mut registry = Registry::new();
//!
//! registry.on("save", |args: &Args| {
//!     let path = args.get::<&str>(0).unwrap();
//!     println!("saving to {path}");
//! });
//! registry.once("save", |_: &Args| println!("first save!"));
//!
//! registry.emit("save", &args!["game.dat"]); // both fire
//! registry.emit("save", &args!["game.dat"]); // only the multi handler
//! ```

use std::collections::HashMap;

use log::trace;

use crate::args::Args;

/// A registered callback, invoked with the payload forwarded by `emit`.
///
/// Handlers must be `Send` so a registry can cross thread boundaries when
/// the embedding application synchronizes it externally.
pub type Handler = Box<dyn FnMut(&Args) + Send>;

/// String-keyed registry of multi and once handlers.
///
/// A registry starts empty. Handlers accumulate per name in insertion
/// order and execute in that order on emission. Every operation reports
/// success with a `bool`; in this rendition registration cannot fail (the
/// handler parameter type only admits callables), so all operations return
/// `true`.
///
/// # Namespaces
///
/// The multi and once namespaces are independent: removing or emitting one
/// never disturbs entries under other names, and a name may be populated
/// in both at the same time.
pub struct Registry {
    /// Handlers invoked on every emission of their name.
    multi: HashMap<String, Vec<Handler>>,

    /// Handlers invoked on the first emission of their name, then dropped.
    once: HashMap<String, Vec<Handler>>,
}

impl Registry {
    /// Creates a new, empty registry.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let registry = Registry::new();
    /// assert!(registry.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            multi: HashMap::new(),
            once: HashMap::new(),
        }
    }

    /// Registers a handler to fire on every emission of `name`.
    ///
    /// The handler is appended to the multi sequence for `name`, creating
    /// the sequence if absent. Handlers fire in registration order.
    ///
    /// Always returns `true`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// registry.on("change", |args: &Args| {
    ///     println!("changed: {:?}", args.get::<u32>(0));
    /// });
    /// ```
    pub fn on(&mut self, name: impl Into<String>, handler: impl FnMut(&Args) + Send + 'static) -> bool {
        let name = name.into();
        trace!("on '{}': registering multi handler", name);
        let handlers = self.multi.entry(name).or_default();
        handlers.push(Box::new(handler));
        true
    }

    /// Registers a handler to fire on the first emission of `name` only.
    ///
    /// The handler is appended to the once sequence for `name`. The entire
    /// once bucket for a name is discarded immediately after its single
    /// emission pass, however many handlers it held.
    ///
    /// Always returns `true`.
    pub fn once(&mut self, name: impl Into<String>, handler: impl FnMut(&Args) + Send + 'static) -> bool {
        let name = name.into();
        trace!("once '{}': registering single-fire handler", name);
        let handlers = self.once.entry(name).or_default();
        handlers.push(Box::new(handler));
        true
    }

    /// Removes all handlers registered under `name`, in both namespaces.
    ///
    /// A name that was never registered is a no-op, not an error. Handlers
    /// under other names are unaffected.
    ///
    /// Always returns `true`.
    pub fn off(&mut self, name: &str) -> bool {
        self.multi.remove(name);
        self.once.remove(name);
        trace!("off '{}'", name);
        true
    }

    /// Removes every handler under every name, in both namespaces.
    ///
    /// Always returns `true`.
    pub fn off_all(&mut self) -> bool {
        self.multi.clear();
        self.once.clear();
        trace!("off_all");
        true
    }

    /// Synchronously invokes every handler registered under `name`.
    ///
    /// Multi handlers fire first, then once handlers, each group in
    /// insertion order, each receiving the same `args` payload. The once
    /// bucket for `name` is discarded after the pass, even when it held no
    /// handlers. A name with no handlers at all is a silent no-op.
    ///
    /// Always returns `true`. `emit` itself never fails; a panicking
    /// handler propagates to the caller and aborts delivery to the
    /// handlers not yet invoked for this call.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// registry.emit("change", &args!["first", "second"]);
    /// registry.emit("tick", &args![]); // no payload
    /// ```
    pub fn emit(&mut self, name: &str, args: &Args) -> bool {
        let multi_count = self.multi.get(name).map_or(0, Vec::len);
        let once_count = self.once.get(name).map_or(0, Vec::len);
        trace!(
            "emit '{}': dispatching {} multi + {} once handlers",
            name, multi_count, once_count
        );

        if let Some(handlers) = self.multi.get_mut(name) {
            for handler in handlers.iter_mut() {
                handler(args);
            }
        }

        // Detach the once bucket before invoking so the whole bucket is
        // gone after this pass, whatever it held.
        if let Some(mut handlers) = self.once.remove(name) {
            for handler in handlers.iter_mut() {
                handler(args);
            }
        }

        true
    }

    /// Returns `true` if any handler (multi or once) is registered under
    /// `name`.
    #[inline]
    pub fn has_handlers(&self, name: &str) -> bool {
        self.handler_count(name) > 0
    }

    /// Returns the number of handlers registered under `name`, across both
    /// namespaces.
    pub fn handler_count(&self, name: &str) -> usize {
        self.multi.get(name).map_or(0, Vec::len) + self.once.get(name).map_or(0, Vec::len)
    }

    /// Returns `true` if no handlers are registered under any name.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.multi.is_empty() && self.once.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
