//! Read-side commands over the persisted index files.
//!
//! Nothing here touches content; counts come from the JSON written by `build`.

pub mod archive;
pub mod tags;
