//! objkit-util - leaf utilities over the objkit value model.
//!
//! One concern per module: sequence normalization, structural cloning and
//! equality, small collection helpers, and a seedable graph fuzzer for
//! test suites.

pub mod array_of;
pub mod deep_clone;
pub mod deep_equal;
pub mod flatten;
pub mod fuzzer;
pub mod has_own;
pub mod shallow_clone;
pub mod unique;

// Re-exports for convenience
pub use array_of::{array_from_args, get_array_of, StringHandling};
pub use deep_clone::deep_clone;
pub use deep_equal::deep_equal;
pub use flatten::flatten;
pub use fuzzer::GraphFuzzer;
pub use has_own::has_own;
pub use shallow_clone::shallow_clone;
pub use unique::get_unique_array;
