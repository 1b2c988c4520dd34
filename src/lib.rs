//! Calendar derivation and layout core for Chronos.
//!
//! The crate turns backend task records into render-ready calendar data:
//! filter → normalize → partition into day buckets → resolve overlapping
//! events into lanes. Every entry point is a pure function of its inputs
//! (including an explicit `now`), so a reactive UI layer can recompute the
//! whole pipeline on any state change without coordination.
//!
//! The UI chrome, data fetching, and stores live in the host application;
//! this crate neither performs I/O nor holds state between calls.

pub mod model;
pub mod ops;
pub mod parse;
