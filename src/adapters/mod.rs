//! Adapters implementing the port traits.
//!
//! `live` talks to the real disk and stdout; `memory` keeps everything in
//! process so the pipeline can be exercised without touching either.

pub mod live;
pub mod memory;
