//! This crate is my attempt at writing (some key parts of) the numeric and algorithmic half of a
//! standard library.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. It covers two things that every standard library has to get
//! right and that are easy to get subtly wrong: the in-place sequence algorithms (selection,
//! heaps, partitioning, sorting and merging) and the limb arithmetic underneath a big integer.
//!
//! # Method
//! Everything here is written based on my existing understanding and problem solving. The
//! [`algorithm`] module follows the shape of C++'s `<algorithm>`, with introselect and introsort
//! at its core, but with Rust's slices and closures instead of iterators. The [`bigint`] module
//! is generic over both the limb type and the container, so the same code drives a fixed width
//! `[u64; 4]` and a growable `Vec<u32>`.
//!
//! # Error Handling
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). Functions that can fail for reasons the caller can't easily rule
//! out come in pairs: `try_*` returns the error and the plain version panics with its message.
//! Fixed width arithmetic never panics on overflow, it reports it as a value instead.
//!
//! # Dependencies
//! This crate uses `std`. It depends on `derive_more` for the error types, `num-traits` to be
//! generic over the primitive unsigned integers used as limbs and `log` for some tracing of the
//! slower paths.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithm")]
pub mod algorithm;
#[cfg(feature = "bigint")]
pub mod bigint;

pub(crate) mod util;
