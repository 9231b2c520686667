// Handles region things
use aws_types::region;
use std::env;
use tracing::debug;

/// The AWS region the S3 client is created in, if one was selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    region: Option<region::Region>,
}

impl Region {
    /// Return a `Region` taken from `AWS_REGION` or `AWS_DEFAULT_REGION`.
    pub fn new() -> Self {
        // By default, we try to get a region from the environment, this might
        // be overridden later depending on CLI options.
        let possibilities = vec![
            env::var("AWS_REGION"),
            env::var("AWS_DEFAULT_REGION"),
        ];

        let region = possibilities
            .iter()
            .find_map(|region| region.as_ref().ok())
            .filter(|region| !region.is_empty())
            .map(|region| region::Region::new(region.to_owned()));

        debug!("AWS_REGION in environment is: {:?}", region);

        Self {
            region: region,
        }
    }

    /// Returns the region name
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }

    /// Returns the SDK region, if one was selected.
    pub fn aws_region(&self) -> Option<region::Region> {
        self.region.to_owned()
    }

    /// Select `region`.
    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        let region = region::Region::new(region.to_string());
        self.region = Some(region);
        self
    }
}
