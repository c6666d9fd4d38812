//! Pure operations over in-memory task collections
//!
//! Nothing here touches the disk; callers load through the
//! [`Repository`](crate::repository::Repository) and pass the tasks in.

pub mod filter;
pub mod id;
pub mod search;
pub mod seed;

pub use filter::filter_by_status;
pub use id::next_id;
pub use search::search;
pub use seed::{seed, SAMPLE_TASKS};
