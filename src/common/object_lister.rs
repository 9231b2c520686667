// ObjectLister trait and pagination over it
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use super::{
    BucketNames,
    ObjectDescriptor,
    ObjectPage,
};

/// `ObjectLister` represents the required methods to enumerate S3 buckets and
/// page through their objects.
///
/// Implementations must be safe to use from many concurrent tasks at once.
#[async_trait]
pub trait ObjectLister: Send + Sync {
    /// Returns the names of every bucket in the account.
    async fn buckets(&self) -> Result<BucketNames>;

    /// Returns a single page of the objects in `bucket`.
    ///
    /// A `continuation_token` of `None` requests the first page.
    async fn list_objects_page(
        &self,
        bucket:             &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage>;
}

/// Walks the object listing of a single bucket one page at a time.
///
/// Each `ObjectPaginator` starts from the first page of its bucket.
pub struct ObjectPaginator<'a, L: ?Sized> {
    lister:             &'a L,
    bucket:             &'a str,
    continuation_token: Option<String>,
    exhausted:          bool,
}

impl<'a, L> ObjectPaginator<'a, L>
where
    L: ObjectLister + ?Sized,
{
    /// Return a new `ObjectPaginator` for `bucket`.
    pub fn new(lister: &'a L, bucket: &'a str) -> Self {
        Self {
            lister:             lister,
            bucket:             bucket,
            continuation_token: None,
            exhausted:          false,
        }
    }

    /// Returns `true` until a page without a continuation token was fetched.
    pub fn has_more_pages(&self) -> bool {
        !self.exhausted
    }

    /// Fetch the next page of objects.
    ///
    /// A failed fetch leaves the paginator where it was.
    pub async fn next_page(&mut self) -> Result<Vec<ObjectDescriptor>> {
        let page = self.lister
            .list_objects_page(self.bucket, self.continuation_token.clone())
            .await?;

        match page.next_token {
            Some(token) => self.continuation_token = Some(token),
            None        => self.exhausted = true,
        }

        Ok(page.objects)
    }
}
