use crate::layout::header::SiteMenu;
use crate::shared::config::load_host_config;
use crate::shared::dom;
use crate::usecases::u001_volunteer_registration::RegistrationPage;
use leptos::prelude::*;

/// Host element for the responsive navigation menu.
pub const MENU_HOST_ID: &str = "site-menu-root";
/// Host element for the volunteer registration form.
pub const FORM_HOST_ID: &str = "volunteer-form-root";

/// Mount every behavior whose host element is present on the page.
///
/// The two behaviors are independent: a page without the form host (e.g. the
/// home page) still gets the menu, and vice versa.
pub fn mount_behaviors() {
    match dom::find_host(MENU_HOST_ID) {
        Some(host) => {
            let config = load_host_config(&host);
            leptos::mount::mount_to(host, move || view! { <SiteMenu config=config /> }).forget();
            log::debug!("site menu mounted");
        }
        None => log::debug!("#{} not found, site menu disabled", MENU_HOST_ID),
    }

    match dom::find_host(FORM_HOST_ID) {
        Some(host) => {
            let config = load_host_config(&host);
            leptos::mount::mount_to(host, move || view! { <RegistrationPage config=config /> })
                .forget();
            log::debug!("volunteer registration form mounted");
        }
        None => log::debug!("#{} not found, registration form disabled", FORM_HOST_ID),
    }
}
