//! Domain objects for the TUI application.
//!
//! Pure state containers with explicit update operations, kept free of
//! rendering and transport concerns so they can be tested in isolation.

pub mod pagination;

pub use pagination::{total_pages, visible_page, PageState, PageView, DEFAULT_PAGE_SIZE};
