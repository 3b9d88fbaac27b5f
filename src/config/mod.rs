pub mod public_paths;

pub use public_paths::is_public_path;
