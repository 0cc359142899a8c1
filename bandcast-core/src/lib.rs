#![allow(clippy::new_without_default)]

pub mod config;
pub mod error;
pub mod home;
pub mod http;
pub mod model;
pub mod normalize;
pub mod route;
pub mod scrape;
pub mod search;
pub mod source;
#[cfg(test)]
mod testing;
pub mod webapi;

pub use crate::{
    config::SourceConfig,
    error::Error,
    search::SearchFilter,
    source::Bandcamp,
};
