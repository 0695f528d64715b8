//! Turns a directory of dated plain-text posts into a static site: one HTML
//! page per post, an index ordered by recency and an RSS 2.0 feed.
//!
//! Posts are named `YYYYMMDD_title.txt`. [`site::generate_site`] runs the
//! whole pipeline; the other modules are its stages.

pub mod config;
pub mod error;
pub mod logger;
pub mod post;
pub mod post_list;
pub mod post_name;
pub mod post_store;
pub mod site;
pub mod text_utils;
pub mod timestamp;
pub mod view;
mod test_data;
