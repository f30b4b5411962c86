//! Domain entities - the core business objects.

mod post;
mod user;

pub use post::{Comment, Post, PostPatch, PostStatus};
pub use user::User;
