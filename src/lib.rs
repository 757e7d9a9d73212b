pub mod api;
pub mod app;
pub mod config;
pub mod draft;
pub mod model;
pub mod session;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::QuestionAdmin;
