//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for a movie's billed cast (four `Star` columns).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
