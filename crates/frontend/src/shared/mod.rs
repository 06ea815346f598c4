pub mod components;
pub mod config;
pub mod dom;
pub mod notices;
