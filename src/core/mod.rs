pub mod components;
pub mod config;
pub mod screen;
pub mod system;
