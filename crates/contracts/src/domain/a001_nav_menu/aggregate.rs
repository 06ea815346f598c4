use serde::{Deserialize, Serialize};

/// Ширина окна (в логических пикселях), ниже которой открытое меню
/// блокирует прокрутку страницы.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const OPEN_CLASS: &str = "is-open";
pub const SCROLL_LOCK_CLASS: &str = "no-scroll";

// ============================================================================
// Aggregate
// ============================================================================

/// Состояние адаптивного меню навигации.
///
/// `expanded` is the only stored flag; `aria-expanded` and the `is-open`
/// class are both rendered from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    pub expanded: bool,
}

/// Result of a single activation of the menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTransition {
    pub expanded: bool,
    /// `Some(lock)` when the body scroll lock has to be set, `None` when the
    /// viewport is wide enough (or unknown) and the lock is left alone.
    pub scroll_lock: Option<bool>,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Переключить меню.
    ///
    /// The scroll lock follows the new `expanded` value, i.e. it is engaged
    /// when the menu goes from collapsed to expanded.
    pub fn toggle(&mut self, viewport_width: Option<f64>, breakpoint: f64) -> MenuTransition {
        let was_expanded = self.expanded;
        self.expanded = !was_expanded;

        let scroll_lock = match viewport_width {
            Some(width) if width < breakpoint => Some(!was_expanded),
            _ => None,
        };

        MenuTransition {
            expanded: self.expanded,
            scroll_lock,
        }
    }

    /// Value of the `aria-expanded` attribute on the toggle control.
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Class list of the navigation container.
    pub fn nav_class(&self, base: &str) -> String {
        if self.expanded {
            format!("{} {}", base, OPEN_CLASS)
        } else {
            base.to_string()
        }
    }
}
