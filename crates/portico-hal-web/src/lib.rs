//! Browser adapter for the portico page core.
//!
//! Implements the core's viewport traits on top of `IntersectionObserver`
//! and the DOM scrolling primitives, and carries the DOM-side render and
//! clipboard helpers the shell wires together at mount.

pub mod clipboard;
pub mod dom;
pub mod observer;
pub mod scroll;
