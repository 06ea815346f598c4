pub mod a001_nav_menu;
pub mod a002_volunteer_form;
