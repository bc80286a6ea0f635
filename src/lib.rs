//! pagesense - scrape a web page, then analyze its text for sentiment
//! and relevance to a user-supplied prompt

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod relevance;
pub mod scrape;
pub mod sentiment;
pub mod util;

pub use error::{PagesenseError, Result};
