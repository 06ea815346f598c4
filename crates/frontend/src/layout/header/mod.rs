pub mod menu_context;
pub mod site_menu;

pub use menu_context::MenuContext;
pub use site_menu::SiteMenu;
