use serde_json::Value;

use crate::catalog::ChartEntry;
use crate::config::Session;
use crate::{info_time, Result};

/// Walks the chart files and gathers every app id they mention into one
/// sorted list, written to the configured charts-json path. Duplicates are
/// kept; identical ids simply overwrite the same detail file later on.
/// Chart files that fail to parse are logged and skipped.
pub async fn collect_app_ids(session: &Session) -> Result<Vec<String>> {
    let mut ids = Vec::new();

    let mut dir = tokio::fs::read_dir(&session.charts_path).await?;
    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) => {
                info_time!("skipping chart {}: {}", path.display(), err);
                continue;
            }
        };
        match serde_json::from_str::<Vec<ChartEntry>>(&raw) {
            Ok(chart) => ids.extend(chart.into_iter().map(|e| e.app_id)),
            Err(err) => info_time!("skipping chart {}: {}", path.display(), err),
        }
    }
    ids.sort_unstable();

    if let Some(parent) = session.charts_json_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let list = Value::from(ids.clone());
    tokio::fs::write(&session.charts_json_path, serde_json::to_vec(&list)?).await?;
    info_time!("Collected {} app ids", ids.len());

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    fn session(dir: &Path) -> Session {
        Session {
            lang: "en".into(),
            country: "at".into(),
            charts_path: dir.join("charts"),
            full_details_path: dir.join("fullDetails"),
            charts_json_path: dir.join("charts.json"),
            download_delay: 1,
            simultaneous_downloads: 2,
            list_num: 660,
        }
    }

    fn chart_json(ids: &[&str]) -> String {
        let entries: Vec<Value> = ids
            .iter()
            .map(|id| serde_json::json!({ "appId": id, "title": "x" }))
            .collect();
        serde_json::to_string(&entries).unwrap()
    }

    #[tokio::test]
    async fn gathers_sorted_ids_from_every_chart_file() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(dir.path());
        std::fs::create_dir_all(&session.charts_path).unwrap();
        std::fs::write(
            session.charts_path.join("TOOLS-TOP_FREE.json"),
            chart_json(&["com.c", "com.a"]),
        )
        .unwrap();
        std::fs::write(
            session.charts_path.join("GAME-TOP_PAID.json"),
            chart_json(&["com.b", "com.a"]),
        )
        .unwrap();
        std::fs::write(session.charts_path.join("notes.txt"), "ignored").unwrap();

        let ids = collect_app_ids(&session).await.unwrap();

        // Sorted, duplicates preserved.
        assert_eq!(ids, ["com.a", "com.a", "com.b", "com.c"]);
        let raw = std::fs::read_to_string(&session.charts_json_path).unwrap();
        let on_disk: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, ids);
    }

    #[tokio::test]
    async fn unparsable_charts_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(dir.path());
        std::fs::create_dir_all(&session.charts_path).unwrap();
        std::fs::write(session.charts_path.join("bad.json"), "{ nope").unwrap();
        std::fs::write(
            session.charts_path.join("TOOLS-TOP_FREE.json"),
            chart_json(&["com.a"]),
        )
        .unwrap();

        let ids = collect_app_ids(&session).await.unwrap();
        assert_eq!(ids, ["com.a"]);
    }

    #[tokio::test]
    async fn an_unreadable_chart_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(dir.path());
        std::fs::create_dir_all(&session.charts_path).unwrap();
        // A directory masquerading as a chart file makes the read fail.
        std::fs::create_dir(session.charts_path.join("oops.json")).unwrap();
        std::fs::write(
            session.charts_path.join("TOOLS-TOP_FREE.json"),
            chart_json(&["com.a"]),
        )
        .unwrap();

        let ids = collect_app_ids(&session).await.unwrap();
        assert_eq!(ids, ["com.a"]);
    }
}
