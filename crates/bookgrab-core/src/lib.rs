pub mod config;
pub mod logging;

pub mod catalog;
pub mod download;
pub mod entry;
pub mod events;
pub mod extract;
pub mod fetch;
pub mod naming;
pub mod scheduler;
