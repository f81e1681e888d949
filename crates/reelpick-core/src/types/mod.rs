//! Shared data structures.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec4};
