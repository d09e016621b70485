//! Data module: field storage for the geometry cache
#![warn(missing_docs)]

pub mod field;
pub mod storage;

pub use field::GeomField;
pub use storage::{Storage, VecStorage};
