//! Command Line Interface module
//!
//! One submodule per subcommand: `fetch` runs the multi-source search,
//! `sources` lists the known fetchers, `config` inspects configuration.

pub mod config;
pub mod fetch;
pub mod sources;
