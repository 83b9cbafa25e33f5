// ==========================================
// 家禽杂交预测系统 - 预测缓存
// ==========================================
// 键: 无序亲本对 (CrossPairKey),A×B 与 B×A 命中同一条
// 并发: 查-算-存 非原子,同一对可能被重复计算并覆盖,结果相同
// ==========================================

use crate::domain::prediction::{CrossPairKey, CrossPredictionResult};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

// ==========================================
// CachedPrediction - 缓存的预测记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedPrediction {
    pub id: String,
    pub parent_a_id: String,
    pub parent_b_id: String,
    pub result: CrossPredictionResult,
    pub created_at: DateTime<Utc>,
}

impl CachedPrediction {
    /// 新建缓存记录,id 形如 cross_{lo}_{hi}_{uuid}
    pub fn new(parent_a_id: &str, parent_b_id: &str, result: CrossPredictionResult) -> Self {
        let key = CrossPairKey::new(parent_a_id, parent_b_id);
        Self {
            id: format!("cross_{}_{}", key, Uuid::new_v4()),
            parent_a_id: parent_a_id.to_string(),
            parent_b_id: parent_b_id.to_string(),
            result,
            created_at: Utc::now(),
        }
    }

    pub fn key(&self) -> CrossPairKey {
        CrossPairKey::new(&self.parent_a_id, &self.parent_b_id)
    }
}

// ==========================================
// PredictionCache Trait
// ==========================================
pub trait PredictionCache: Send + Sync {
    fn get(&self, key: &CrossPairKey) -> RepositoryResult<Option<CachedPrediction>>;

    /// 写入（同键覆盖）
    fn put(
        &self,
        parent_a_id: &str,
        parent_b_id: &str,
        result: &CrossPredictionResult,
    ) -> RepositoryResult<CachedPrediction>;

    fn len(&self) -> RepositoryResult<usize>;

    fn clear(&self) -> RepositoryResult<()>;
}

// ==========================================
// InMemoryPredictionCache - 进程内缓存
// ==========================================
#[derive(Debug, Default)]
pub struct InMemoryPredictionCache {
    entries: RwLock<HashMap<CrossPairKey, CachedPrediction>>,
}

impl InMemoryPredictionCache {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error<E: std::fmt::Display>(e: E) -> RepositoryError {
    RepositoryError::LockError(e.to_string())
}

impl PredictionCache for InMemoryPredictionCache {
    fn get(&self, key: &CrossPairKey) -> RepositoryResult<Option<CachedPrediction>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(key).cloned())
    }

    fn put(
        &self,
        parent_a_id: &str,
        parent_b_id: &str,
        result: &CrossPredictionResult,
    ) -> RepositoryResult<CachedPrediction> {
        let cached = CachedPrediction::new(parent_a_id, parent_b_id, result.clone());
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.insert(cached.key(), cached.clone());
        Ok(cached)
    }

    fn len(&self) -> RepositoryResult<usize> {
        Ok(self.entries.read().map_err(lock_error)?.len())
    }

    fn clear(&self) -> RepositoryResult<()> {
        self.entries.write().map_err(lock_error)?.clear();
        Ok(())
    }
}
