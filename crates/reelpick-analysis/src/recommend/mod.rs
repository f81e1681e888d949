//! Recommender facade: builds both indexes from one record store and maps
//! every lookup outcome to something a user can be shown.

pub mod handle;
pub mod outcome;
pub mod recommender;

pub use handle::RecommenderHandle;
pub use outcome::{ActorRecommendation, FilterRecommendation, FilterSelection};
pub use recommender::{BuildStats, Recommender};
