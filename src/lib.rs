//! cardseek — in-process search and ranking for business-card profiles.
//!
//! The engine owns an in-memory snapshot of candidate profiles and answers
//! free-text queries with a three-tier strategy: weighted field scoring,
//! approximate matching when nothing hits, and an editorial top-ranked
//! default so the result surface never goes visibly empty. It also keeps
//! per-instance analytics: a short recent-search history and trending
//! keyword counts.
//!
//! The engine performs no I/O. Fetching the candidate snapshot is the
//! caller's job; the engine is constructed from a fully-loaded `Vec` and
//! operates synchronously over it.

pub mod demo_data;
mod engine;
pub mod models;
pub mod query;
pub mod ranking;

pub use engine::{SearchEngine, SearchRecord};
pub use models::{BusinessInfo, ProfileCard};
