pub mod builder;
pub mod model;
pub mod output;
pub mod templates;
