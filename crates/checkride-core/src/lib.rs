//! checkride-core — Competency catalog, OB classifier, grading engine,
//! and report assembler.
//!
//! This crate holds the pure, synchronous evaluation logic the rest of the
//! checkride system builds on. It owns no I/O and no identifier lookup;
//! callers hand it in-memory sessions and get grade reports back.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod grading;
pub mod model;
pub mod report;
