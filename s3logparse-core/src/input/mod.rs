//! Turning command-line paths into the flat list of raw lines the reports
//! consume. Directories are expanded with a glob, files are read whole and
//! closed before any report runs.

mod discover;
mod error;
mod read;

#[cfg(test)]
mod tests;

pub use discover::*;
pub use error::*;
pub use read::*;
