mod client;
pub mod payload;

pub use client::{WebApi, BASE_URL};
