//! Project-wide manifests that every example is registered in.

pub mod block;
pub mod dependabot;
pub mod io;
pub mod mkdocs;

pub use dependabot::{generate_dependabot_updates, sync_updates};
pub use mkdocs::{generate_mkdocs, sync_nav};
