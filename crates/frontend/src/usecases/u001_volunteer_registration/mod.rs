pub mod context;
pub mod view;

pub use context::RegistrationContext;
pub use view::RegistrationPage;
