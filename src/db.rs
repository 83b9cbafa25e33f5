// ==========================================
// 家禽杂交预测系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 预测缓存表的建表与版本登记
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;
use tracing::{info, warn};

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version
pub const CURRENT_SCHEMA_VERSION: i64 = 2;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS cross_prediction (
    lo_id TEXT NOT NULL,
    hi_id TEXT NOT NULL,
    prediction_id TEXT NOT NULL,
    parent_a_id TEXT NOT NULL,
    parent_b_id TEXT NOT NULL,
    result_json TEXT NOT NULL,
    created_at TEXT NOT NULL,
    PRIMARY KEY (lo_id, hi_id)
);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 建表（幂等）并登记 schema_version
///
/// 旧版缓存表（单列 pair_key 主键）直接重建: 缓存内容可随时重算
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    let existing = read_schema_version(conn)?;
    if let Some(v) = existing.filter(|v| *v < CURRENT_SCHEMA_VERSION) {
        conn.execute_batch("DROP TABLE IF EXISTS cross_prediction;")?;
        warn!(
            from = v,
            to = CURRENT_SCHEMA_VERSION,
            "预测缓存表结构过旧,已清空重建"
        );
    }

    conn.execute_batch(SCHEMA_SQL)?;

    match existing {
        None => {
            record_schema_version(conn)?;
            info!(version = CURRENT_SCHEMA_VERSION, "数据库 schema 初始化完成");
        }
        Some(v) if v < CURRENT_SCHEMA_VERSION => {
            record_schema_version(conn)?;
        }
        Some(v) if v != CURRENT_SCHEMA_VERSION => {
            warn!(
                found = v,
                expected = CURRENT_SCHEMA_VERSION,
                "数据库 schema_version 与代码不一致"
            );
        }
        Some(_) => {}
    }

    Ok(())
}

fn record_schema_version(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO schema_version (version, applied_at) VALUES (?1, ?2)",
        rusqlite::params![CURRENT_SCHEMA_VERSION, chrono::Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// 读取 schema_version（若表不存在或为空则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        assert_eq!(read_schema_version(&conn).unwrap(), None);

        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();

        assert_eq!(read_schema_version(&conn).unwrap(), Some(CURRENT_SCHEMA_VERSION));
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_legacy_pair_key_table_is_rebuilt() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE schema_version (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL);
            INSERT INTO schema_version VALUES (1, '2026-01-01T00:00:00Z');
            CREATE TABLE cross_prediction (
                pair_key TEXT PRIMARY KEY,
                prediction_id TEXT NOT NULL,
                parent_a_id TEXT NOT NULL,
                parent_b_id TEXT NOT NULL,
                result_json TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            INSERT INTO cross_prediction VALUES ('a_b', 'p1', 'a', 'b', '{}', '2026-01-01T00:00:00Z');
            "#,
        )
        .unwrap();

        init_schema(&conn).unwrap();

        assert_eq!(read_schema_version(&conn).unwrap(), Some(CURRENT_SCHEMA_VERSION));
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM cross_prediction", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0);
        conn.execute(
            "INSERT INTO cross_prediction (lo_id, hi_id, prediction_id, parent_a_id, parent_b_id, result_json, created_at) \
             VALUES ('a', 'b', 'p2', 'a', 'b', '{}', 'now')",
            [],
        )
        .unwrap();
    }
}
