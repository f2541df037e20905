//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file's directory, with a
//! 500ms debounce so editors that save via write + rename trigger a
//! single reload.

mod config_watcher;


pub use config_watcher::ConfigWatcher;
