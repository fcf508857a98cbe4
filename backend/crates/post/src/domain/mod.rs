//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::post::{Author, Comment, Like, Post};
pub use repository::PostRepository;
