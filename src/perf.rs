// ==========================================
// 性能统计
// ==========================================
// PerfGuard: 操作耗时（target = "perf"）
// 慢 SQL: SQLite profile 回调（target = "slow_sql"）
// ==========================================

use rusqlite::Connection;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static SLOW_SQL_THRESHOLD_MS: AtomicU64 = AtomicU64::new(0);

/// 慢 SQL 阈值环境变量（毫秒,0 关闭）
pub const SLOW_SQL_ENV: &str = "POULTRY_CROSS_SLOW_SQL_MS";

fn truncate_sql(sql: &str, max_len: usize) -> String {
    let s = sql.trim().replace('\n', " ");
    if s.chars().count() <= max_len {
        return s;
    }
    let head: String = s.chars().take(max_len).collect();
    format!("{}…", head)
}

/// 安装 SQLite 慢查询日志
///
/// 默认阈值: Debug 50ms, Release 200ms
pub fn install_sqlite_tracing(conn: &mut Connection) {
    let slow_ms = std::env::var(SLOW_SQL_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 });
    SLOW_SQL_THRESHOLD_MS.store(slow_ms, Ordering::Relaxed);

    if slow_ms == 0 {
        conn.profile(None);
        return;
    }
    conn.profile(Some(sql_profile_callback));
}

fn sql_profile_callback(sql: &str, duration: Duration) {
    let ms = duration.as_millis() as u64;
    let threshold = SLOW_SQL_THRESHOLD_MS.load(Ordering::Relaxed);
    if threshold > 0 && ms >= threshold {
        tracing::warn!(
            target: "slow_sql",
            duration_ms = ms,
            sql = %truncate_sql(sql, 420),
            "slow sql"
        );
    }
}

/// 性能统计 Guard：drop 时记录 elapsed_ms
///
/// ```ignore
/// let _perf = poultry_cross::perf::PerfGuard::new("calculate_cross");
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
    }
}
