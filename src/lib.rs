//! Headless client for the Mural create-post flow: keep the form state,
//! generate an image from a prompt, and share the result to the community
//! feed. The presentation layer drives [`CreatePostView`] and renders the
//! `ApiError` values it returns.

#[macro_use]
extern crate lazy_static;

pub mod app;
pub mod create_post;
pub mod media;
pub mod posts;
pub mod prompts;

pub use app::config::AppConfig;
pub use app::models::api_error::ApiError;
pub use create_post::view::CreatePostView;
