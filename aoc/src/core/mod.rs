//! Deterministic, pure logic shared by every puzzle.
//!
//! Core modules must be free of I/O side effects. They borrow input that the
//! `io` layer acquired and never allocate while scanning it.

pub mod answer;
pub mod delimiters;
pub mod geometry;
pub mod integer;
pub mod tokenizer;
pub mod view;
