//! buildstamp tools library

pub mod common;

pub use common::{init_logging, render, OutputFormat};
