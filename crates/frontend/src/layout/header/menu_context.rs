use crate::shared::dom;
use contracts::domain::a001_nav_menu::NavMenu;
use leptos::prelude::*;

/// State of the responsive menu, created once per mount and handed to the
/// click handler.
#[derive(Clone, Copy)]
pub struct MenuContext {
    pub menu: RwSignal<NavMenu>,
    breakpoint: f64,
}

impl MenuContext {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            menu: RwSignal::new(NavMenu::new()),
            breakpoint,
        }
    }

    /// Handle one activation of the toggle control.
    pub fn toggle(&self) {
        let width = dom::viewport_width();
        let Some(transition) = self.menu.try_update(|m| m.toggle(width, self.breakpoint)) else {
            return;
        };
        if let Some(lock) = transition.scroll_lock {
            dom::set_body_scroll_lock(lock);
        }
        log::debug!(
            "menu toggled: expanded={} scroll_lock={:?}",
            transition.expanded,
            transition.scroll_lock
        );
    }
}
