// ==========================================
// 家禽杂交预测系统 - SQLite 预测缓存
// ==========================================
// 表: cross_prediction ((lo_id, hi_id) 联合主键, result_json 存 JSON)
// 写入: UPSERT,同键后写覆盖
// ==========================================

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::prediction::{CrossPairKey, CrossPredictionResult};
use crate::perf::install_sqlite_tracing;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::prediction_cache::{CachedPrediction, PredictionCache};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};
use tracing::debug;

pub struct SqlitePredictionCache {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePredictionCache {
    /// 打开（或创建）数据库文件并建表
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let mut conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        install_sqlite_tracing(&mut conn);
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    /// 从已有连接创建缓存（建表幂等）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            init_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn parse_created_at(raw: &str) -> RepositoryResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| RepositoryError::Serialization(format!("created_at: {}", e)))
    }
}

impl PredictionCache for SqlitePredictionCache {
    fn get(&self, key: &CrossPairKey) -> RepositoryResult<Option<CachedPrediction>> {
        let conn = self.get_conn()?;
        let row = conn
            .query_row(
                r#"
                SELECT prediction_id, parent_a_id, parent_b_id, result_json, created_at
                FROM cross_prediction
                WHERE lo_id = ?1 AND hi_id = ?2
                "#,
                params![key.lo(), key.hi()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, parent_a_id, parent_b_id, result_json, created_at)) = row else {
            return Ok(None);
        };

        let result: CrossPredictionResult = serde_json::from_str(&result_json)?;
        Ok(Some(CachedPrediction {
            id,
            parent_a_id,
            parent_b_id,
            result,
            created_at: Self::parse_created_at(&created_at)?,
        }))
    }

    fn put(
        &self,
        parent_a_id: &str,
        parent_b_id: &str,
        result: &CrossPredictionResult,
    ) -> RepositoryResult<CachedPrediction> {
        let cached = CachedPrediction::new(parent_a_id, parent_b_id, result.clone());
        let result_json = serde_json::to_string(&cached.result)?;
        let key = cached.key();

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO cross_prediction (
                lo_id, hi_id, prediction_id, parent_a_id, parent_b_id, result_json, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(lo_id, hi_id) DO UPDATE SET
                prediction_id = excluded.prediction_id,
                parent_a_id = excluded.parent_a_id,
                parent_b_id = excluded.parent_b_id,
                result_json = excluded.result_json,
                created_at = excluded.created_at
            "#,
            params![
                key.lo(),
                key.hi(),
                cached.id,
                cached.parent_a_id,
                cached.parent_b_id,
                result_json,
                cached.created_at.to_rfc3339(),
            ],
        )?;

        debug!(pair_key = %key, prediction_id = %cached.id, "预测结果已缓存");
        Ok(cached)
    }

    fn len(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM cross_prediction", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn clear(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM cross_prediction", [])?;
        Ok(())
    }
}
