//! # encyclopedia-render
//!
//! Template rendering library for the encyclopedia wiki.
//!
//! This crate handles HTML page rendering using Askama.

pub mod templates;

pub use templates::{
    EditTemplate, EntryLink, EntryTemplate, IndexTemplate, NotFoundTemplate, SiteContext,
};
