//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `auth_form`: Sign-in, signup and password recovery screens

mod auth_form;
mod field_renderer;

pub use auth_form::draw;
