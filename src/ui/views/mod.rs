pub mod confirm_delete;
pub mod form;
pub mod questions;
