//! Core functionality modules
//!
//! This module contains all core business logic organized into logical layers:
//! - `http`: transport seam consumed by every fetcher
//! - `extract`: pattern extraction and HTML cleanup
//! - `fetchers`: per-source retrieval strategies and the registry
//! - `lyrics`: the multi-source search itself

pub mod extract;
pub mod fetchers;
pub mod http;
pub mod lyrics;
