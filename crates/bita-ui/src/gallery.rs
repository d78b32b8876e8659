//! The photo gallery: category filter plus a lightbox.
//!
//! At most one image is open in the lightbox. While it is open the page
//! behind it must not scroll; [`GalleryState::scroll_locked`] reports that.
//! The lightbox closes on its close button, a backdrop click, or `Escape`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::UiError;
use crate::filter::{CategoryFilter, Categorized};

/// What a photo shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryCategory {
    Ambiance,
    Dishes,
    Drinks,
    Service,
}

impl GalleryCategory {
    /// Every category, in button order.
    pub const ALL: [Self; 4] = [Self::Ambiance, Self::Dishes, Self::Drinks, Self::Service];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Ambiance => "ambiance",
            Self::Dishes => "dishes",
            Self::Drinks => "drinks",
            Self::Service => "service",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ambiance => "אווירה",
            Self::Dishes => "מנות",
            Self::Drinks => "משקאות",
            Self::Service => "שירות",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GalleryCategory {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UiError::UnknownCategory(s.to_string()))
    }
}

/// One gallery photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub id: &'static str,
    /// Alternative text, also used as the caption.
    pub alt: &'static str,
    pub category: GalleryCategory,
    pub width: u32,
    pub height: u32,
}

impl Categorized for GalleryImage {
    type Category = GalleryCategory;

    fn category(&self) -> GalleryCategory {
        self.category
    }
}

/// The photos shown on the site.
pub const GALLERY: [GalleryImage; 9] = [
    image("1", "אווירת המסעדה - חלל פנימי מואר", GalleryCategory::Ambiance, 600),
    image("2", "מנה ראשונה - סלט ירקות טרי", GalleryCategory::Dishes, 1000),
    image("3", "קוקטייל הבית", GalleryCategory::Drinks, 800),
    image("4", "צוות השירות שלנו", GalleryCategory::Service, 600),
    image("5", "פינת ישיבה חיצונית", GalleryCategory::Ambiance, 800),
    image("6", "מנה עיקרית - פילה דג טרי", GalleryCategory::Dishes, 600),
    image("7", "יין אדום מובחר", GalleryCategory::Drinks, 1000),
    image("8", "חוויית האירוח שלנו", GalleryCategory::Service, 800),
    image("9", "קינוח מיוחד של השף", GalleryCategory::Dishes, 800),
];

// All gallery photos are 800 px wide.
const fn image(
    id: &'static str,
    alt: &'static str,
    category: GalleryCategory,
    height: u32,
) -> GalleryImage {
    GalleryImage {
        id,
        alt,
        category,
        width: 800,
        height,
    }
}

/// Looks up a gallery photo by id.
pub fn find_image(id: &str) -> Option<&'static GalleryImage> {
    GALLERY.iter().find(|img| img.id == id)
}

/// State of the gallery section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    filter: CategoryFilter<GalleryCategory>,
    lightbox: Option<&'static GalleryImage>,
}

impl GalleryState {
    /// Creates a gallery showing every photo with the lightbox closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a filter button click by id (`"all"` or a category id).
    pub fn select(&mut self, id: &str) -> Result<(), UiError> {
        self.filter.select_id(id)
    }

    pub const fn filter(&self) -> &CategoryFilter<GalleryCategory> {
        &self.filter
    }

    /// The photos that pass the current filter, in gallery order.
    pub fn visible(&self) -> Vec<&'static GalleryImage> {
        self.filter.apply(&GALLERY)
    }

    /// Opens the lightbox on a photo, replacing any photo already open.
    pub fn open(&mut self, id: &str) -> Result<(), UiError> {
        let image = find_image(id).ok_or_else(|| UiError::UnknownImage(id.to_string()))?;
        self.lightbox = Some(image);
        tracing::debug!(image = id, "lightbox opened");
        Ok(())
    }

    /// Closes the lightbox. Closing a closed lightbox does nothing.
    pub fn close(&mut self) {
        if self.lightbox.take().is_some() {
            tracing::debug!("lightbox closed");
        }
    }

    /// Handles a key press while the gallery has focus. Returns `true` if the
    /// key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.lightbox.is_some() {
            self.close();
            return true;
        }
        false
    }

    /// The photo in the lightbox, if open.
    pub const fn lightbox(&self) -> Option<&'static GalleryImage> {
        self.lightbox
    }

    /// Whether page scrolling must be suppressed.
    pub const fn scroll_locked(&self) -> bool {
        self.lightbox.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_catalog() {
        assert_eq!(GALLERY.len(), 9);
        assert_eq!(
            GALLERY
                .iter()
                .filter(|i| i.category == GalleryCategory::Dishes)
                .count(),
            3
        );
        assert!(GALLERY.iter().all(|i| i.width == 800));
    }

    #[test]
    fn test_filter_drinks() {
        let mut gallery = GalleryState::new();
        gallery.select("drinks").unwrap();
        let ids: Vec<&str> = gallery.visible().iter().map(|i| i.id).collect();
        assert_eq!(ids, ["3", "7"]);
    }

    #[test]
    fn test_open_and_escape() {
        let mut gallery = GalleryState::new();
        gallery.open("5").unwrap();
        assert_eq!(gallery.lightbox().map(|i| i.alt), Some("פינת ישיבה חיצונית"));
        assert!(gallery.scroll_locked());

        assert!(!gallery.on_key("Enter"));
        assert!(gallery.scroll_locked());

        assert!(gallery.on_key("Escape"));
        assert!(gallery.lightbox().is_none());
        assert!(!gallery.scroll_locked());
        assert!(!gallery.on_key("Escape"));
    }

    #[test]
    fn test_open_replaces_current() {
        let mut gallery = GalleryState::new();
        gallery.open("1").unwrap();
        gallery.open("2").unwrap();
        assert_eq!(gallery.lightbox().map(|i| i.id), Some("2"));
    }

    #[test]
    fn test_open_unknown_image() {
        let mut gallery = GalleryState::new();
        assert_eq!(gallery.open("42"), Err(UiError::UnknownImage("42".into())));
        assert!(!gallery.scroll_locked());
    }

    #[test]
    fn test_filter_change_keeps_lightbox() {
        let mut gallery = GalleryState::new();
        gallery.open("4").unwrap();
        gallery.select("dishes").unwrap();
        assert_eq!(gallery.lightbox().map(|i| i.id), Some("4"));
    }
}
