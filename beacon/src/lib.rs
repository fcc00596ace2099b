//! A minimal named-event dispatcher.
//!
//! This crate provides [`Registry`], a string-keyed callback registry with
//! two independent handler namespaces:
//!
//! - **Multi**: handlers that fire on every emission of their name until
//!   explicitly removed
//! - **Once**: handlers that fire on the first emission of their name, then
//!   are discarded automatically
//!
//! Emission is fully synchronous: [`emit()`](Registry::emit) walks the
//! matched handlers in insertion order on the caller's thread and returns
//! only after all of them have completed.
//!
//! # Forwarded Arguments
//!
//! Emission forwards an [`Args`] payload, an ordered sequence of opaque
//! values, identically to every matched handler. Handlers recover typed
//! values by position via [`Args::get()`](Args::get). The [`args!`] macro
//! builds a payload from heterogeneous values.
//!
//! # Example
//!
//! ```rust,ignore
//! use beacon::{Registry, args};
//!
//! let mut registry = Registry::new();
//!
//! registry.on("door:open", |args: &beacon::Args| {
//!     let room = args.get::<&str>(0).unwrap();
//!     println!("door opened in {room}");
//! });
//!
//! registry.emit("door:open", &args!["kitchen"]);
//! registry.emit("door:open", &args!["hallway"]);
//! ```
//!
//! # Thread Safety
//!
//! `Registry` itself carries no locking. Handlers and argument values are
//! `Send`, so a registry can be moved across threads or shared behind a
//! `Mutex`, but concurrent access is the embedding application's
//! responsibility.

pub mod args;
pub mod registry;

pub use args::{Args, Value};
pub use registry::{Handler, Registry};
