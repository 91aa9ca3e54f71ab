/// EPIC API access module
///
/// This module handles:
/// - Fetching the list of natural-color image records (client.rs)
/// - Downloading the PNG of the selected record (client.rs)
/// - Building archive URLs from record dates (archive.rs)

pub mod archive;
pub mod client;

pub use client::{EpicClient, FetchError};
