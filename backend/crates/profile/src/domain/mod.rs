//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::profile::{Education, Experience, Profile, ProfileDetails, Social};
pub use repository::{GithubGateway, ProfileRepository};
