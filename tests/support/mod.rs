#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod factory;
pub mod logging;
pub mod state;

pub use app_builder::create_test_app;
pub use state::{test_security, test_state};
