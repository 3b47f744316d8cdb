use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, sleep};

use crate::catalog::CatalogService;
use crate::config::Session;
use crate::store::Store;
use crate::{info_time, Result};

/// Fetches the full detail record for every app id, spread across
/// `simultaneous_downloads` independent lanes. Lane `i` walks indices
/// i, i+N, i+2N, ... so together the lanes cover the list exactly once.
/// Returns once every lane has finished.
pub async fn scrape_details(
    catalog: Arc<dyn CatalogService>,
    session: &Session,
    store: &Store,
    app_ids: Vec<String>,
) -> Result<()> {
    let lanes = session.simultaneous_downloads;
    let app_ids = Arc::new(app_ids);
    info_time!("Fetching {} app details on {} lanes", app_ids.len(), lanes);

    let mut handles = Vec::with_capacity(lanes);
    for lane in 0..lanes {
        handles.push(tokio::spawn(run_lane(
            lane,
            session.clone(),
            app_ids.clone(),
            catalog.clone(),
            store.clone(),
        )));
    }
    for handle in handles {
        handle.await?;
    }
    Ok(())
}

/// One sequential fetch worker. The delay runs from the start of one fetch
/// to the start of the next, so a slow fetch is not compensated for. Ends
/// once the cursor leaves the list or hits an empty slot; any per-id
/// failure is logged and the lane moves on.
async fn run_lane(
    lane: usize,
    session: Session,
    app_ids: Arc<Vec<String>>,
    catalog: Arc<dyn CatalogService>,
    store: Store,
) {
    let lanes = session.simultaneous_downloads;
    let delay = Duration::from_millis(session.download_delay);

    // Stagger the lane starts so the first requests don't all fire at once.
    sleep(delay * lane as u32 / lanes as u32).await;

    let mut ticks = interval(delay);
    let mut cursor = lane;
    while cursor < app_ids.len() {
        let app_id = &app_ids[cursor];
        if app_id.is_empty() {
            break;
        }
        ticks.tick().await;

        info_time!("lane {}: {} ({})", lane, app_id, cursor);
        match catalog.details(app_id, &session.lang, &session.country).await {
            Ok(record) => {
                if let Err(err) = store.put(&record.app_id, &record).await {
                    info_time!("lane {}: ERROR writing {}: {}", lane, record.app_id, err);
                }
            }
            Err(err) => info_time!("lane {}: ERROR {} {}", lane, app_id, err),
        }
        cursor += lanes;
    }
}
