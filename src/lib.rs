pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod markup;
pub mod page;

pub use error::{Error, Result};
