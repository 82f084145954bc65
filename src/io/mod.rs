//! Types and methods for reading file lists and writing output.

pub mod file;

pub use file::{base_name, InputFile, OutputFile};
