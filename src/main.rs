use std::sync::Arc;

use chrono::Local;
use playscrape::{
    catalog::{CatalogService, HttpCatalog},
    charts, collect,
    config::Session,
    details, info_time,
    store::Store,
    Result, SESSION_PATH,
};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let session = Session::load(SESSION_PATH).await?;
    let catalog: Arc<dyn CatalogService> = Arc::new(HttpCatalog::default());

    info_time!("Downloading charts");
    let chart_store = Store::open(&session.charts_path).await?;
    let written = charts::scrape_charts(catalog.clone(), &session, &chart_store).await?;
    info_time!("Wrote {} charts", written);

    let app_ids = collect::collect_app_ids(&session).await?;

    info_time!("Downloading app details");
    let detail_store = Store::open(&session.full_details_path).await?;
    details::scrape_details(catalog, &session, &detail_store, app_ids).await?;

    info_time!(start_time, "Full program time:");
    Ok(())
}
