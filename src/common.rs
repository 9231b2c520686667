// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::collections::HashMap;

mod bucket_summary;
mod client_config;
mod object_lister;
mod region;

pub use bucket_summary::*;
pub use client_config::*;
pub use object_lister::*;
pub use region::*;

#[cfg(test)]
pub use object_lister::tests::{
    MockLister,
    MockPage,
};

/// Bucket names as returned by bucket enumeration.
pub type BucketNames = Vec<String>;

/// Summaries of every sized bucket, keyed by bucket name.
pub type ResultSet = HashMap<String, BucketSummary>;
