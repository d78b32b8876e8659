//! # bita-ui
//!
//! Explicit state values for the interactive parts of the Bita site. Each
//! component instance owns its state; there are no globals and no shared
//! stores. Rendering is out of scope: these types answer "what is open, what
//! is selected, what is visible" and nothing else.
//!
//! ## Modules
//!
//! - [`header`] - Scroll-aware header and mobile navigation
//! - [`filter`] - Generic category filter
//! - [`menu`] - Menu catalog and category selection
//! - [`gallery`] - Image gallery, category filter, and lightbox
//! - [`accordion`] - Single-open accordion and the FAQ entries

pub mod accordion;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod header;
pub mod menu;

pub use accordion::Accordion;
pub use error::UiError;
pub use filter::{CategoryFilter, Categorized};
pub use gallery::{GalleryCategory, GalleryImage, GalleryState};
pub use header::HeaderState;
pub use menu::{Dish, MenuCategory, MenuSection};
