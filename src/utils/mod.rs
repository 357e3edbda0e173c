//! Utility modules shared by the loader, the aggregator and the views.

pub mod date;
pub mod slug;
