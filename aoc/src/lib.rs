//! Zero-copy input toolkit for small two-part puzzle solvers.
//!
//! Every solver reads a short text input and prints two answers. This crate
//! holds the layer they share:
//!
//! - **[`core`]**: Pure logic over borrowed bytes: [`InputView`](core::view::InputView)
//!   windows, the delimiter tokenizer, integer parsing, grid geometry.
//!   No I/O, no allocation while scanning.
//! - **[`io`]**: Side effects: memory-mapping input files, reading stdin,
//!   loading TOML samples.
//!
//! [`harness`] ties them together: acquire input, solve, print
//! `Part 1`/`Part 2`, and in self-test mode compare against a sample's
//! expected answers.

pub mod core;
pub mod exit_codes;
pub mod harness;
pub mod io;
pub mod logging;
pub mod stats;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod timer;
