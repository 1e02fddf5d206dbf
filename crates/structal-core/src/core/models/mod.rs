//! Plain data models consumed by the I/O layer.

pub mod sequence;
