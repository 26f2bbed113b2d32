pub mod bootstrap;
pub mod config {
    pub mod env_loader;
    pub mod model;
}
pub mod content;
pub mod events;
pub mod pages;
pub mod slug;
pub mod theme;
pub mod tracing;
