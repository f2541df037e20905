//! Live config reload manager.
//!
//! Combines the file watcher with loading and validation so consumers
//! receive a new config every time a valid one lands on disk.

mod manager;


pub use manager::ReloadManager;
