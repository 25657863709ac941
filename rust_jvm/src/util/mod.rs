//! This module contains supporting types and structures which are not specific to the JVM, but help
//! with its implementation.

mod arc_slice;

pub use arc_slice::ThinArcSlice;
