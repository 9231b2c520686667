// Per-bucket results
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// A single object as seen by a listing call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ObjectDescriptor {
    /// Size of the object in bytes.
    pub size: u64,
}

/// One page of a bucket's object listing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ObjectPage {
    /// Objects contained in this page.
    pub objects: Vec<ObjectDescriptor>,

    /// Continuation token for the following page.
    ///
    /// `None` when this was the final page for the bucket.
    pub next_token: Option<String>,
}

/// The aggregated size and object count of one bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketSummary {
    /// Name of the bucket.
    pub name: String,

    /// Sum of the sizes of every counted object, in bytes.
    pub total_size_bytes: u64,

    /// Number of counted objects.
    pub object_count: usize,
}

impl BucketSummary {
    /// Return a new `BucketSummary`.
    pub fn new(name: &str, total_size_bytes: u64, object_count: usize) -> Self {
        Self {
            name:             name.into(),
            total_size_bytes: total_size_bytes,
            object_count:     object_count,
        }
    }
}
