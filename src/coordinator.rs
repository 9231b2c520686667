// Sizes every bucket concurrently
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::aggregator::aggregate_bucket;
use crate::common::{
    BucketNames,
    ObjectLister,
    ResultSet,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{
    debug,
    error,
};

/// Size every bucket in `bucket_names` concurrently.
///
/// One task is spawned per bucket. Finished `BucketSummary` values are sent
/// back over a channel and this function is the only writer of the returned
/// `ResultSet`. Every bucket gets an entry, including buckets whose listing
/// failed outright, which are recorded as empty.
pub async fn size_buckets<L>(lister: Arc<L>, bucket_names: BucketNames) -> ResultSet
where
    L: ObjectLister + ?Sized + 'static,
{
    debug!("size_buckets: Sizing {} buckets", bucket_names.len());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut handles  = Vec::with_capacity(bucket_names.len());

    for bucket_name in bucket_names {
        let lister = Arc::clone(&lister);
        let tx     = tx.clone();

        let handle = tokio::spawn(async move {
            let summary = aggregate_bucket(lister.as_ref(), &bucket_name).await;

            // The receiver is held until every sender has been dropped.
            let _ = tx.send(summary);
        });

        handles.push(handle);
    }

    // Drop our own sender so that the channel closes once the last task is
    // done.
    drop(tx);

    let mut results = ResultSet::new();

    while let Some(summary) = rx.recv().await {
        results.insert(summary.name.clone(), summary);
    }

    for handle in handles {
        if let Err(e) = handle.await {
            error!("Bucket sizing task failed: {}", e);
        }
    }

    debug!("size_buckets: Collected {} summaries", results.len());

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{
        BucketSummary,
        MockLister,
        MockPage,
    };
    use pretty_assertions::assert_eq;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_size_buckets() {
        let lister = MockLister::new()
            .with_bucket("a-bucket", vec![
                MockPage::Objects(vec![100, 200]),
                MockPage::Objects(vec![300]),
            ])
            .with_bucket("another-bucket", vec![
                MockPage::Objects(vec![1024]),
            ])
            .with_bucket("empty-bucket", Vec::new());

        let lister       = Arc::new(lister);
        let bucket_names = lister.buckets().await.unwrap();

        let ret = size_buckets(Arc::clone(&lister), bucket_names).await;

        let expected: ResultSet = vec![
            BucketSummary::new("a-bucket", 600, 3),
            BucketSummary::new("another-bucket", 1024, 1),
            BucketSummary::new("empty-bucket", 0, 0),
        ]
        .into_iter()
        .map(|s| (s.name.clone(), s))
        .collect();

        assert_eq!(ret, expected);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_size_buckets_keeps_failed_buckets() {
        let lister = MockLister::new()
            .with_bucket("denied-bucket", vec![
                MockPage::Fail,
                MockPage::Objects(vec![1]),
            ])
            .with_bucket("partial-bucket", vec![
                MockPage::Objects(vec![10, 20]),
                MockPage::Fail,
                MockPage::Objects(vec![30]),
            ])
            .with_bucket("ok-bucket", vec![
                MockPage::Objects(vec![5]),
            ]);

        let lister       = Arc::new(lister);
        let bucket_names = lister.buckets().await.unwrap();

        let ret = size_buckets(Arc::clone(&lister), bucket_names).await;

        assert_eq!(ret.len(), 3);
        assert_eq!(
            ret["denied-bucket"],
            BucketSummary::new("denied-bucket", 0, 0),
        );
        assert_eq!(
            ret["partial-bucket"],
            BucketSummary::new("partial-bucket", 30, 2),
        );
        assert_eq!(
            ret["ok-bucket"],
            BucketSummary::new("ok-bucket", 5, 1),
        );

        assert_eq!(lister.calls("denied-bucket"), 1);
        assert_eq!(lister.calls("partial-bucket"), 2);
    }

    #[tokio::test]
    async fn test_size_buckets_no_buckets() {
        let lister = Arc::new(MockLister::new());

        let ret = size_buckets(lister, BucketNames::new()).await;

        assert!(ret.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_size_buckets_loses_no_updates() {
        let bucket_names: BucketNames = (0..100)
            .map(|i| format!("bucket-{:03}", i))
            .collect();

        for _ in 0..50 {
            let lister = bucket_names
                .iter()
                .fold(MockLister::new(), |lister, name| {
                    lister.with_bucket(name, vec![
                        MockPage::Objects(vec![1, 2]),
                        MockPage::Objects(vec![3]),
                    ])
                });

            let ret = size_buckets(
                Arc::new(lister),
                bucket_names.clone(),
            ).await;

            assert_eq!(ret.len(), 100);

            for name in &bucket_names {
                assert_eq!(ret[name], BucketSummary::new(name, 6, 3));
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_size_buckets_dyn_lister() {
        let lister: Arc<dyn ObjectLister> = Arc::new(
            MockLister::new()
                .with_bucket("a-bucket", vec![MockPage::Objects(vec![42])]),
        );

        let ret = size_buckets(lister, vec!["a-bucket".into()]).await;

        assert_eq!(ret["a-bucket"], BucketSummary::new("a-bucket", 42, 1));
    }
}
