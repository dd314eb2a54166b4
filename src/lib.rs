pub mod config;
pub mod default_colors;
pub mod display;
pub mod normalize;
pub mod openlib_schema;
pub mod openlibrary;
pub mod shelf;
pub mod types;
pub mod wikipedia;
