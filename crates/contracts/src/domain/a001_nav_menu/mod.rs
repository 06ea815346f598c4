pub mod aggregate;

pub use aggregate::{MenuTransition, NavMenu, MOBILE_BREAKPOINT_PX};
