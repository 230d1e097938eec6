pub mod client;
pub mod error;
pub mod response;

pub use client::{ActionLink, ApiClient, Endpoints, TaskAction, TaskApi};
pub use error::ApiError;
pub use response::ApiResponse;
