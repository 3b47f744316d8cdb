use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::catalog::{
    build_tuples, CatalogService, ChartEntry, QueryTuple, AGES, CATEGORIES, COLLECTIONS,
};
use crate::config::Session;
use crate::store::Store;
use crate::{info_time, Result};

/// Downloads every chart in the full category × collection × age space and
/// persists each one as its own file. Returns the number of charts written.
pub async fn scrape_charts(
    catalog: Arc<dyn CatalogService>,
    session: &Session,
    store: &Store,
) -> Result<usize> {
    let tuples = build_tuples(CATEGORIES, COLLECTIONS, AGES);
    scrape_tuples(catalog, session, store, tuples).await
}

/// Issues one query per tuple, all launched before any result is awaited,
/// each launched query carrying its tuple alongside the pending result.
/// Failed queries are logged and skipped; the batch always runs to the end.
pub async fn scrape_tuples(
    catalog: Arc<dyn CatalogService>,
    session: &Session,
    store: &Store,
    tuples: Vec<QueryTuple>,
) -> Result<usize> {
    info_time!("Requesting {} charts", tuples.len());

    let mut pending: Vec<(QueryTuple, JoinHandle<Result<Vec<ChartEntry>>>)> =
        Vec::with_capacity(tuples.len());
    for tuple in tuples {
        let handle = tokio::spawn({
            let catalog = catalog.clone();
            let tuple = tuple.clone();
            let lang = session.lang.clone();
            let country = session.country.clone();
            let num = session.list_num;
            async move { catalog.list(&tuple, num, &lang, &country).await }
        });
        pending.push((tuple, handle));
    }

    let mut written = 0;
    for (tuple, handle) in pending {
        let key = tuple.key();
        match handle.await? {
            Ok(mut chart) => {
                chart.truncate(session.list_num);
                match store.put(&key, &chart).await {
                    Ok(()) => written += 1,
                    Err(err) => info_time!("ERROR writing chart {}: {}", key, err),
                }
            }
            Err(err) => info_time!("ERROR: {} {}", key, err),
        }
    }
    Ok(written)
}
