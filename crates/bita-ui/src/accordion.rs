//! Single-open accordion, used by the FAQ section.

use serde::Serialize;

use crate::error::UiError;

/// A question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    /// The question, shown as the item header.
    pub question: &'static str,
    /// The answer, shown when the item is expanded.
    pub answer: &'static str,
}

/// The FAQ shown on the site.
pub const FAQ: [FaqEntry; 6] = [
    FaqEntry {
        question: "האם נדרשת הזמנה מראש?",
        answer: "כן, אנו ממליצים להזמין מקום מראש, במיוחד בסופי שבוע ובערבים. ניתן להזמין דרך האתר או בטלפון 03-1234567.",
    },
    FaqEntry {
        question: "האם יש אפשרויות לתזונה צמחונית/טבעונית?",
        answer: "בהחלט! התפריט שלנו כולל מגוון רחב של מנות צמחוניות וטבעוניות. אנא ציינו את העדפותיכם בעת ההזמנה ונשמח להתאים את המנות לצרכים שלכם.",
    },
    FaqEntry {
        question: "מהן שעות הפעילות?",
        answer: "אנו פתוחים בימים א'-ה' בין השעות 12:00-23:00, בימי שישי בין 12:00-15:00, ובמוצאי שבת מצאת השבת ועד 23:00. בשבת המסעדה סגורה.",
    },
    FaqEntry {
        question: "האם המסעדה נגישה לבעלי מוגבלויות?",
        answer: "כן, המסעדה שלנו מותאמת באופן מלא לבעלי מוגבלויות, כולל גישה לכיסאות גלגלים ושירותים מותאמים.",
    },
    FaqEntry {
        question: "האם יש חנייה בקרבת מקום?",
        answer: "כן, ישנו חניון ציבורי במרחק של 50 מטר מהמסעדה. לקוחות המסעדה זכאים להנחה בחנייה עם הצגת חשבונית.",
    },
    FaqEntry {
        question: "האם ניתן להזמין אירועים פרטיים?",
        answer: "בהחלט! אנו מציעים אפשרות לאירועים פרטיים עד 50 איש. לפרטים נוספים ותיאום, אנא צרו קשר עם מנהל האירועים שלנו.",
    },
];

/// Which item of an accordion is expanded.
///
/// Opening an item collapses the previous one; toggling the open item
/// collapses it, leaving nothing open.
///
/// # Examples
///
/// ```
/// use bita_ui::Accordion;
///
/// let mut faq = Accordion::new(3);
/// faq.toggle(1).unwrap();
/// faq.toggle(2).unwrap();
/// assert_eq!(faq.active(), Some(2));
/// faq.toggle(2).unwrap();
/// assert_eq!(faq.active(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    active: Option<usize>,
}

impl Accordion {
    /// Creates a collapsed accordion of `len` items.
    pub const fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    /// Creates a collapsed accordion over the site FAQ.
    pub const fn faq() -> Self {
        Self::new(FAQ.len())
    }

    /// Toggles item `index`. Returns whether it is now expanded.
    pub fn toggle(&mut self, index: usize) -> Result<bool, UiError> {
        if index >= self.len {
            return Err(UiError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = if self.active == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.active.is_some())
    }

    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let faq = Accordion::faq();
        assert_eq!(faq.len(), 6);
        assert_eq!(faq.active(), None);
        assert!((0..faq.len()).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn test_only_one_open() {
        let mut faq = Accordion::faq();
        assert!(faq.toggle(0).unwrap());
        assert!(faq.toggle(4).unwrap());
        assert!(!faq.is_open(0));
        assert!(faq.is_open(4));
    }

    #[test]
    fn test_toggle_open_item_closes() {
        let mut faq = Accordion::faq();
        faq.toggle(3).unwrap();
        assert!(!faq.toggle(3).unwrap());
        assert_eq!(faq.active(), None);
    }

    #[test]
    fn test_out_of_range() {
        let mut faq = Accordion::faq();
        faq.toggle(2).unwrap();
        assert_eq!(
            faq.toggle(6),
            Err(UiError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(faq.active(), Some(2));
    }
}
