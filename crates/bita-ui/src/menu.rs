//! The restaurant menu and its category tabs.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::UiError;
use crate::filter::{CategoryFilter, Categorized};

/// A menu course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Appetizers,
    Main,
    Desserts,
    Drinks,
}

impl MenuCategory {
    /// Every category, in tab order.
    pub const ALL: [Self; 4] = [Self::Appetizers, Self::Main, Self::Desserts, Self::Drinks];

    /// The tab id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Appetizers => "appetizers",
            Self::Main => "main",
            Self::Desserts => "desserts",
            Self::Drinks => "drinks",
        }
    }

    /// The tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Appetizers => "מנות ראשונות",
            Self::Main => "מנות עיקריות",
            Self::Desserts => "קינוחים",
            Self::Drinks => "משקאות",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MenuCategory {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UiError::UnknownCategory(s.to_string()))
    }
}

/// One dish on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dish {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Price in whole shekels.
    pub price_ils: u32,
    pub category: MenuCategory,
}

impl Dish {
    /// Formats the price for display, e.g. `₪42`.
    pub fn price_label(&self) -> String {
        format!("₪{}", self.price_ils)
    }
}

impl Categorized for Dish {
    type Category = MenuCategory;

    fn category(&self) -> MenuCategory {
        self.category
    }
}

/// The dishes shown on the site.
pub const MENU: [Dish; 8] = [
    Dish {
        id: "1",
        name: "סלט ירקות ישראלי",
        description: "עגבניות, מלפפונים, פלפלים, בצל סגול וזיתים ברוטב שמן זית ולימון",
        price_ils: 42,
        category: MenuCategory::Appetizers,
    },
    Dish {
        id: "2",
        name: "חומוס ביתי",
        description: "חומוס קרמי מוגש עם טחינה, שמן זית, פפריקה ופיתות חמות",
        price_ils: 38,
        category: MenuCategory::Appetizers,
    },
    Dish {
        id: "3",
        name: "שקשוקה מסורתית",
        description: "ביצים ברוטב עגבניות עשיר עם פלפלים, בצל ותבלינים מוגש עם טחינה ולחם",
        price_ils: 58,
        category: MenuCategory::Main,
    },
    Dish {
        id: "4",
        name: "פילה דניס",
        description: "פילה דג טרי צלוי בתנור עם שום, לימון ועשבי תיבול מוגש עם ירקות עונתיים",
        price_ils: 98,
        category: MenuCategory::Main,
    },
    Dish {
        id: "5",
        name: "קנאפה",
        description: "קינוח מסורתי של אטריות קדאיף במילוי גבינה מתוקה ומי ורדים",
        price_ils: 42,
        category: MenuCategory::Desserts,
    },
    Dish {
        id: "6",
        name: "מלבי",
        description: "קינוח חלב מסורתי מבושם במי ורדים ומוגש עם אגוזים וסירופ",
        price_ils: 36,
        category: MenuCategory::Desserts,
    },
    Dish {
        id: "7",
        name: "לימונדה ביתית",
        description: "לימונדה טרייה עם נענע ולימונים סחוטים במקום",
        price_ils: 18,
        category: MenuCategory::Drinks,
    },
    Dish {
        id: "8",
        name: "יין אדום מקומי",
        description: "יין אדום משובח מהגליל העליון, כוס",
        price_ils: 32,
        category: MenuCategory::Drinks,
    },
];

/// State of one menu section: its heading and the selected tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub title: String,
    pub subtitle: String,
    filter: CategoryFilter<MenuCategory>,
}

impl Default for MenuSection {
    fn default() -> Self {
        Self {
            title: "התפריט שלנו".to_string(),
            subtitle: "מבחר מהמנות האהובות במסעדה".to_string(),
            filter: CategoryFilter::new(),
        }
    }
}

impl MenuSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a tab click by id (`"all"` or a category id).
    pub fn select(&mut self, id: &str) -> Result<(), UiError> {
        self.filter.select_id(id)?;
        tracing::debug!(tab = id, "menu tab selected");
        Ok(())
    }

    pub const fn filter(&self) -> &CategoryFilter<MenuCategory> {
        &self.filter
    }

    /// The dishes under the selected tab, in menu order.
    pub fn visible(&self) -> Vec<&'static Dish> {
        self.filter.apply(&MENU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_category() {
        for category in MenuCategory::ALL {
            assert_eq!(MENU.iter().filter(|d| d.category == category).count(), 2);
        }
    }

    #[test]
    fn test_default_tab_shows_everything() {
        let section = MenuSection::new();
        assert!(section.filter().is_all());
        assert_eq!(section.visible().len(), 8);
    }

    #[test]
    fn test_select_desserts() {
        let mut section = MenuSection::new();
        section.select("desserts").unwrap();
        let names: Vec<&str> = section.visible().iter().map(|d| d.name).collect();
        assert_eq!(names, ["קנאפה", "מלבי"]);

        section.select("all").unwrap();
        assert_eq!(section.visible().len(), 8);
    }

    #[test]
    fn test_select_unknown_tab() {
        let mut section = MenuSection::new();
        assert_eq!(
            section.select("soups"),
            Err(UiError::UnknownCategory("soups".into()))
        );
    }

    #[test]
    fn test_category_round_trip_and_labels() {
        for category in MenuCategory::ALL {
            assert_eq!(category.id().parse::<MenuCategory>(), Ok(category));
        }
        assert_eq!(MenuCategory::Main.label(), "מנות עיקריות");
    }

    #[test]
    fn test_price_label() {
        assert_eq!(MENU[3].price_label(), "₪98");
    }
}
