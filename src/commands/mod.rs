//! # CLI Command Implementations
//!
//! The `contributors` tool has a single action, updating the contributor list,
//! so the top-level arguments are the update arguments. The implementation is
//! kept in its own module in the same shape as any further command would be:
//!
//! - An `Args` struct that defines the options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `contributors` library.

pub mod update;
