// Sizes a single bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    BucketSummary,
    ObjectLister,
    ObjectPaginator,
};
use humansize::{
    format_size,
    BINARY,
};
use tracing::{
    debug,
    warn,
};

/// Return the total size and object count of `bucket`.
///
/// Pages are summed until the listing is exhausted. If a page can't be
/// fetched, listing stops there and the summary covers only the pages before
/// it. The failure is logged and never returned.
pub async fn aggregate_bucket<L>(lister: &L, bucket: &str) -> BucketSummary
where
    L: ObjectLister + ?Sized,
{
    debug!("aggregate_bucket: Calculating size for '{}'", bucket);

    let mut paginator    = ObjectPaginator::new(lister, bucket);
    let mut object_count = 0;
    let mut size         = 0;

    while paginator.has_more_pages() {
        let objects = match paginator.next_page().await {
            Ok(objects) => objects,
            Err(e)      => {
                warn!("Bucket {} skipped: {:#}", bucket, e);

                break;
            },
        };

        object_count += objects.len();
        size += objects.iter().map(|o| o.size).sum::<u64>();
    }

    debug!(
        "aggregate_bucket: '{}' holds {} objects in {}",
        bucket,
        object_count,
        format_size(size, BINARY),
    );

    BucketSummary::new(bucket, size, object_count)
}
