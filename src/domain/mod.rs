pub mod user;

pub use user::{normalize_email, NewUser, Role, User};
