//! # encyclopedia-core
//!
//! Core library for the encyclopedia wiki.
//!
//! This crate provides the file-backed entry store, title validation, the
//! site configuration, and the converter from the wiki markup dialect to HTML.

pub mod config;
pub mod markup;
pub mod models;
pub mod storage;
pub mod store;
pub mod title;

pub use config::Config;
pub use markup::render;
pub use models::{Entry, SearchOutcome};
pub use storage::{FsStorage, MemoryStorage, Storage};
pub use store::{EntryStore, StoreError};
pub use title::{Title, TitleError};
