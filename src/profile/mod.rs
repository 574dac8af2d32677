//! Client profile data structures and sheet loading

mod data;
pub mod loader;

pub use data::{ClientProfile, MAX_CLIENT_AGE, MIN_CLIENT_AGE};
pub use loader::{load_profile, load_profile_from_reader, DEFAULT_PROFILE_PATH};
