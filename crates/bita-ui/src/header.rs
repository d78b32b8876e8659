//! Site header: background change on scroll and the mobile menu.

/// Scroll offset, in pixels, past which the header turns solid.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// A navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible link text.
    pub label: &'static str,
    /// Target path.
    pub href: &'static str,
}

/// The header's navigation entries, in display order.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "ראשי", href: "/" },
    NavLink { label: "תפריט", href: "/menu" },
    NavLink { label: "אודות", href: "/about" },
    NavLink { label: "גלריה", href: "/gallery" },
    NavLink { label: "צור קשר", href: "/contact" },
];

/// Header state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
}

impl HeaderState {
    /// Creates a transparent header with the mobile menu closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates from the page's vertical scroll offset.
    pub fn on_scroll(&mut self, offset_px: f64) {
        self.scrolled = offset_px > SCROLL_THRESHOLD_PX;
    }

    /// Opens or closes the mobile menu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Follows a navigation link; the mobile menu closes behind it.
    pub fn follow(&mut self, href: &str) -> Option<&'static NavLink> {
        self.menu_open = false;
        NAV_LINKS.iter().find(|link| link.href == href)
    }

    /// Returns `true` once the page has scrolled past [`SCROLL_THRESHOLD_PX`].
    pub const fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns `true` while the mobile menu is open.
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }
}
