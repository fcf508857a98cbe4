//! Application Layer
//!
//! Use cases over the post document.

mod author;
pub mod comments;
pub mod create_post;
pub mod delete_post;
pub mod likes;
pub mod query;

pub use comments::CommentUseCase;
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use likes::LikeUseCase;
pub use query::PostQueryUseCase;
