//! CLI command handlers, one per file.

mod catalog;
mod inspect;
mod run;

pub use catalog::run_list_catalog;
pub use inspect::run_inspect;
pub use run::{run_download, RunOverrides};
