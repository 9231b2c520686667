// The daily report pipeline
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use crate::common::ObjectLister;
use crate::coordinator::size_buckets;
use crate::report::{
    Notifier,
    Report,
};
use std::sync::Arc;
use tracing::info;

/// Size every bucket visible to `lister` and deliver the total via
/// `notifier`.
///
/// Failing to enumerate buckets or to deliver the report is an error.
/// Problems listing an individual bucket are not.
pub async fn run<L>(lister: Arc<L>, notifier: &Notifier) -> Result<Report>
where
    L: ObjectLister + ?Sized + 'static,
{
    let bucket_names = lister.buckets()
        .await
        .context("Failed to list buckets")?;

    info!("Sizing {} buckets", bucket_names.len());

    let results = size_buckets(lister, bucket_names).await;
    let report  = Report::from(&results);

    info!("Total S3 size: {:.2} GiB", report.gibibytes());

    notifier.notify(&report)
        .await
        .context("Failed to deliver report")?;

    Ok(report)
}
