mod client;
mod types;

pub use client::{DocumentApi, HttpDocumentApi};
pub use types::*;
