//! This crate is a small collection of name/value association types, written as exercises in
//! growth policies, linked storage, sorting and serialization.
//!
//! # Purpose
//! Both collections here store ordered `(name, value)` pairs where each name appears at most once.
//! They are intentionally simple: lookups are linear scans and there is no indexing structure. For
//! small tables this is perfectly fast, and it keeps the interesting parts (growth, compaction,
//! relinking and the on-disk format) easy to read.
//!
//! - [`ResizableTable`](collections::contiguous::ResizableTable) is array-backed. It starts with
//!   a capacity of 10 and doubles whenever it runs out of room.
//! - [`LinkedTable`](collections::linked::LinkedTable) is a doubly linked list of heap nodes with
//!   the same contract.
//!
//! Both implement [`Association`](collections::traits::Association), which provides
//! [`save`](collections::traits::Association::save) and
//! [`load`](collections::traits::Association::load) for a flat, line-oriented text format.
//!
//! # Values
//! A collection holds either text ([`String`]) or integer ([`i64`]) values, chosen by its type
//! parameter. Because the kind is part of the type, a single table can never end up with a mix of
//! the two. See [`TableValue`](collections::value::TableValue).
//!
//! # Error Handling
//! As with most collections, a few failures are treated as fatal and panic: running out of
//! capacity being the obvious one. Everything else is reported through [`Option`] (for lookups by
//! name) or [`Result`] with small, strongly typed errors that implement
//! [`Error`](std::error::Error). Errors that group several causes are enums, so matching on them is
//! static rather than relying on `dyn Error`.
//!
//! # Dependencies
//! This crate depends on `derive_more` to remove the repetitive parts of writing error types and
//! on `log` for diagnostics. No logger is installed by the crate itself; applications pick their
//! own backend.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "persist")]
pub mod persist;

pub(crate) mod util;
