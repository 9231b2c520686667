// Implement the ObjectLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use async_trait::async_trait;
use crate::common::{
    BucketNames,
    ObjectLister,
    ObjectPage,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl ObjectLister for Client {
    /// Return every bucket name in the account.
    async fn buckets(&self) -> Result<BucketNames> {
        debug!("buckets: Listing...");

        let bucket_names = self.list_buckets().await?;

        debug!("buckets: Found {} buckets", bucket_names.len());

        Ok(bucket_names)
    }

    async fn list_objects_page(
        &self,
        bucket:             &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        Client::list_objects_page(self, bucket, continuation_token).await
    }
}
