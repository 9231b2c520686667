// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use aws_sdk_s3::client::Client as S3Client;
use crate::common::{
    BucketNames,
    ClientConfig,
    ObjectDescriptor,
    ObjectPage,
};
use tracing::debug;

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    ///
    /// Credentials are resolved through the AWS SDK's default provider chain.
    pub async fn new(config: ClientConfig) -> Self {
        let region = config.region;

        debug!("new: Creating S3Client in region '{}'", region.name());

        let loader = aws_config::from_env();

        let loader = match region.aws_region() {
            Some(region) => loader.region(region),
            None         => loader,
        };

        let config = loader.load().await;
        let client = S3Client::new(&config);

        Self {
            client,
        }
    }

    /// Returns a list of bucket names.
    pub async fn list_buckets(&self) -> Result<BucketNames> {
        let output = self.client.list_buckets()
            .send()
            .await?;

        let bucket_names = output.buckets()
            .unwrap_or_default()
            .iter()
            .filter_map(|b| b.name())
            .map(ToOwned::to_owned)
            .collect();

        Ok(bucket_names)
    }

    /// Return a single `ListObjectsV2` page for `bucket`.
    ///
    /// S3 only returns a `NextContinuationToken` for truncated listings, so
    /// its presence alone decides whether another page follows.
    pub async fn list_objects_page(
        &self,
        bucket:             &str,
        continuation_token: Option<String>,
    ) -> Result<ObjectPage> {
        debug!(
            "list_objects_page for '{}' at {:?}",
            bucket,
            continuation_token,
        );

        let output = self.client.list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(continuation_token)
            .send()
            .await?;

        let objects = output.contents()
            .unwrap_or_default()
            .iter()
            .map(|o| ObjectDescriptor {
                size: u64::try_from(o.size()).unwrap_or_default(),
            })
            .collect();

        let next_token = output.next_continuation_token()
            .map(ToOwned::to_owned);

        Ok(ObjectPage {
            objects,
            next_token,
        })
    }
}
