//! Command-line surface: argument definitions and the validation workflow

pub mod args;
pub mod orchestration;

pub use args::Args;
pub use orchestration::run;
