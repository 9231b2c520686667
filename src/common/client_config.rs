// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::Region;

/// S3 client configuration.
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// The region that our AWS client should be created in.
    ///
    /// An unset region leaves the choice to the AWS SDK's default provider
    /// chain.
    pub region: Region,
}
