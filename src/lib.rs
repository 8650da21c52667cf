//! Agent/player account lookup against the bridge hierarchy service.
//!
//! A search queries both account namespaces for one username, gates the
//! results behind a duplicate-account fraud warning when both exist, and
//! renders each account's organizational chain.

pub mod bridge;
pub mod hierarchy;
pub mod notification;
pub mod search;
pub mod types;
