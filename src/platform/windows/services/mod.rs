//! Windows implementations of the core service traits.

pub mod icon_extractor;

pub use icon_extractor::ShellIconExtractor;
