//! Category filtering shared by the menu and the gallery.
//!
//! A [`CategoryFilter`] is either showing everything (no selection, the
//! default) or a single category. Filtering preserves catalog order.

use std::str::FromStr;

use crate::error::UiError;

/// The id both filters use for "show everything".
pub const ALL: &str = "all";

/// An item that belongs to exactly one category.
pub trait Categorized {
    /// The category type.
    type Category: Copy + Eq;

    /// Returns the item's category.
    fn category(&self) -> Self::Category;
}

/// The selected category of a filterable list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter<C> {
    selected: Option<C>,
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<C: Copy + Eq> CategoryFilter<C> {
    /// Creates a filter that shows everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects one category, or everything for `None`.
    pub fn select(&mut self, category: Option<C>) {
        self.selected = category;
    }

    /// Returns the selected category, `None` meaning all.
    pub const fn selected(&self) -> Option<C> {
        self.selected
    }

    /// Returns `true` if the "all" button should show as pressed.
    pub const fn is_all(&self) -> bool {
        self.selected.is_none()
    }

    /// Returns `true` if `category`'s button should show as pressed.
    pub fn is_selected(&self, category: C) -> bool {
        self.selected == Some(category)
    }

    /// Returns `true` if `item` passes the filter.
    pub fn matches<T: Categorized<Category = C>>(&self, item: &T) -> bool {
        self.selected.map_or(true, |c| item.category() == c)
    }

    /// Returns the visible items in their original order.
    pub fn apply<'a, T: Categorized<Category = C>>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

impl<C: Copy + Eq + FromStr<Err = UiError>> CategoryFilter<C> {
    /// Selects by button id: `"all"` or a category id.
    pub fn select_id(&mut self, id: &str) -> Result<(), UiError> {
        self.selected = if id == ALL { None } else { Some(id.parse()?) };
        Ok(())
    }
}
