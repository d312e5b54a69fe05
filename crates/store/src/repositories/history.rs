use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;
use uuid::Uuid;

use giftery_core::RecipientAnalysis;

use super::{parse_timestamp, HistoryStore, StoreError, HISTORY_RETENTION};
use crate::records::PromptRecord;
use crate::DbPool;

pub struct SqlHistoryStore {
    pool: DbPool,
}

impl SqlHistoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl HistoryStore for SqlHistoryStore {
    async fn record(&self, record: PromptRecord) -> Result<(), StoreError> {
        let analysis_json = record
            .analysis
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|error| StoreError::Decode(format!("could not encode analysis: {error}")))?;
        let product_ids_json = serde_json::to_string(&record.product_ids)
            .map_err(|error| StoreError::Decode(format!("could not encode product ids: {error}")))?;

        sqlx::query(
            "INSERT INTO prompt_history (
                id,
                prompt,
                analysis_json,
                product_ids_json,
                created_at
             ) VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                prompt = excluded.prompt,
                analysis_json = excluded.analysis_json,
                product_ids_json = excluded.product_ids_json,
                created_at = excluded.created_at",
        )
        .bind(record.id.to_string())
        .bind(&record.prompt)
        .bind(analysis_json.as_deref())
        .bind(&product_ids_json)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        let evicted = sqlx::query(
            "DELETE FROM prompt_history
             WHERE id NOT IN (
                SELECT id FROM prompt_history
                ORDER BY created_at DESC, rowid DESC
                LIMIT ?
             )",
        )
        .bind(i64::try_from(HISTORY_RETENTION).unwrap_or(i64::MAX))
        .execute(&self.pool)
        .await?
        .rows_affected();

        if evicted > 0 {
            debug!(
                event_name = "store.history.evicted",
                evicted,
                "trimmed prompt history to its retention cap"
            );
        }

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<PromptRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT
                id,
                prompt,
                analysis_json,
                product_ids_json,
                created_at
             FROM prompt_history
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?",
        )
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(prompt_record_from_row).collect()
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM prompt_history").execute(&self.pool).await?;
        Ok(())
    }
}

fn prompt_record_from_row(row: SqliteRow) -> Result<PromptRecord, StoreError> {
    let id_raw = row.try_get::<String, _>("id")?;
    let id = Uuid::parse_str(&id_raw)
        .map_err(|error| StoreError::Decode(format!("invalid uuid in `id`: `{id_raw}` ({error})")))?;

    let analysis = row
        .try_get::<Option<String>, _>("analysis_json")?
        .map(|json| {
            serde_json::from_str::<RecipientAnalysis>(&json).map_err(|error| {
                StoreError::Decode(format!("invalid analysis payload for `{id_raw}`: {error}"))
            })
        })
        .transpose()?;

    let product_ids_raw = row.try_get::<String, _>("product_ids_json")?;
    let product_ids = serde_json::from_str::<Vec<String>>(&product_ids_raw).map_err(|error| {
        StoreError::Decode(format!("invalid product id payload for `{id_raw}`: {error}"))
    })?;

    Ok(PromptRecord {
        id,
        prompt: row.try_get("prompt")?,
        created_at: parse_timestamp("created_at", row.try_get("created_at")?)?,
        analysis,
        product_ids,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use uuid::Uuid;

    use giftery_core::RecipientAnalysis;

    use super::SqlHistoryStore;
    use crate::records::PromptRecord;
    use crate::repositories::{HistoryStore, HISTORY_RETENTION};
    use crate::{connect_with_settings, migrations, DbPool};

    #[tokio::test]
    async fn sql_history_round_trips_a_record() {
        let pool = setup_pool().await;
        let store = SqlHistoryStore::new(pool.clone());

        let record = PromptRecord {
            id: Uuid::new_v4(),
            prompt: "birthday gift for my sister".to_string(),
            created_at: parse_ts("2026-03-01T09:00:00Z"),
            analysis: Some(sample_analysis()),
            product_ids: vec!["ai-rec-1".to_string(), "ai-rec-2".to_string()],
        };

        store.record(record.clone()).await.expect("record prompt");

        let recent = store.recent(10).await.expect("load recent");
        assert_eq!(recent, vec![record]);

        pool.close().await;
    }

    #[tokio::test]
    async fn recent_returns_newest_first() {
        let pool = setup_pool().await;
        let store = SqlHistoryStore::new(pool.clone());
        let base = parse_ts("2026-03-01T09:00:00Z");

        for offset in 0..3 {
            let record = stamped_record(&format!("prompt {offset}"), base, offset);
            store.record(record).await.expect("record prompt");
        }

        let recent = store.recent(2).await.expect("load recent");
        let prompts: Vec<&str> = recent.iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["prompt 2", "prompt 1"]);

        pool.close().await;
    }

    #[tokio::test]
    async fn retention_cap_evicts_the_oldest_records() {
        let pool = setup_pool().await;
        let store = SqlHistoryStore::new(pool.clone());
        let base = parse_ts("2026-03-01T09:00:00Z");

        for offset in 0..(HISTORY_RETENTION as i64 + 5) {
            let record = stamped_record(&format!("prompt {offset}"), base, offset);
            store.record(record).await.expect("record prompt");
        }

        let recent = store.recent(HISTORY_RETENTION + 10).await.expect("load recent");
        assert_eq!(recent.len(), HISTORY_RETENTION);
        assert_eq!(recent[0].prompt, format!("prompt {}", HISTORY_RETENTION as i64 + 4));
        assert_eq!(recent[HISTORY_RETENTION - 1].prompt, "prompt 5");

        pool.close().await;
    }

    #[tokio::test]
    async fn clear_empties_the_history() {
        let pool = setup_pool().await;
        let store = SqlHistoryStore::new(pool.clone());

        store
            .record(stamped_record("prompt", parse_ts("2026-03-01T09:00:00Z"), 0))
            .await
            .expect("record prompt");
        store.clear().await.expect("clear history");

        assert_eq!(store.recent(10).await.expect("load recent"), vec![]);

        pool.close().await;
    }

    async fn setup_pool() -> DbPool {
        let pool =
            connect_with_settings("sqlite::memory:", 1, 5_000).await.expect("connect test pool");
        migrations::run_pending(&pool).await.expect("run migrations");
        pool
    }

    fn stamped_record(prompt: &str, base: DateTime<Utc>, offset: i64) -> PromptRecord {
        PromptRecord {
            id: Uuid::new_v4(),
            prompt: prompt.to_string(),
            created_at: base + Duration::seconds(offset),
            analysis: None,
            product_ids: Vec::new(),
        }
    }

    fn sample_analysis() -> RecipientAnalysis {
        RecipientAnalysis {
            age: Some(30),
            gender: None,
            interests: vec!["yoga".to_string()],
            relationship: "sister".to_string(),
            occasion: "birthday".to_string(),
            budget: None,
            personality: vec![],
            lifestyle: vec![],
            preferences: vec![],
        }
    }

    fn parse_ts(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).expect("valid rfc3339").with_timezone(&Utc)
    }
}
