// ==========================================
// 家禽杂交预测系统 - 品种目录仓储
// ==========================================
// 红线: 目录启动时加载一次,之后只读
// 红线: Repository 不含预测逻辑
// ==========================================
// 列表类查询统一按品种名称排序
// ==========================================

use crate::domain::breed::BreedTraitRecord;
use crate::domain::types::BreedCategory;
use crate::repository::error::RepositoryResult;
use std::collections::{BTreeSet, HashMap};

// ==========================================
// BreedCatalog Trait - 品种查找接口
// ==========================================
pub trait BreedCatalog: Send + Sync {
    /// 按 id 查找品种（未找到 → None）
    fn get_breed_by_id(&self, id: &str) -> RepositoryResult<Option<BreedTraitRecord>>;

    /// 全部品种
    fn list_breeds(&self) -> RepositoryResult<Vec<BreedTraitRecord>>;

    /// 指定类别的品种（未知类别 → 空列表）
    fn list_breeds_by_category(&self, category: &str) -> RepositoryResult<Vec<BreedTraitRecord>>;

    /// 名称 / 描述 / 产地 / 类别 子串搜索（不区分大小写）
    fn search_breeds(&self, query: &str) -> RepositoryResult<Vec<BreedTraitRecord>>;

    /// 目录中出现的类别（去重,排序）
    fn categories(&self) -> RepositoryResult<Vec<String>>;

    fn len(&self) -> RepositoryResult<usize>;
}

// ==========================================
// InMemoryBreedCatalog - 内存目录
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryBreedCatalog {
    records: Vec<BreedTraitRecord>, // 按名称排序
    by_id: HashMap<String, usize>,
}

impl InMemoryBreedCatalog {
    /// 从记录构建目录（重复 id 时后者覆盖前者）
    pub fn new(records: Vec<BreedTraitRecord>) -> Self {
        let mut unique: HashMap<String, BreedTraitRecord> = HashMap::with_capacity(records.len());
        for record in records {
            unique.insert(record.id.clone(), record);
        }

        let mut records: Vec<BreedTraitRecord> = unique.into_values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        let by_id = records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.id.clone(), idx))
            .collect();

        Self { records, by_id }
    }

    fn matches_query(record: &BreedTraitRecord, needle: &str) -> bool {
        record.name.to_lowercase().contains(needle)
            || record.description.to_lowercase().contains(needle)
            || record.origin.to_lowercase().contains(needle)
            || record.category.as_str().contains(needle)
    }
}

impl BreedCatalog for InMemoryBreedCatalog {
    fn get_breed_by_id(&self, id: &str) -> RepositoryResult<Option<BreedTraitRecord>> {
        Ok(self.by_id.get(id).map(|&idx| self.records[idx].clone()))
    }

    fn list_breeds(&self) -> RepositoryResult<Vec<BreedTraitRecord>> {
        Ok(self.records.clone())
    }

    fn list_breeds_by_category(&self, category: &str) -> RepositoryResult<Vec<BreedTraitRecord>> {
        let Some(category) = BreedCategory::from_str(category) else {
            return Ok(Vec::new());
        };
        Ok(self
            .records
            .iter()
            .filter(|record| record.category == category)
            .cloned()
            .collect())
    }

    fn search_breeds(&self, query: &str) -> RepositoryResult<Vec<BreedTraitRecord>> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .records
            .iter()
            .filter(|record| Self::matches_query(record, &needle))
            .cloned()
            .collect())
    }

    fn categories(&self) -> RepositoryResult<Vec<String>> {
        let set: BTreeSet<&'static str> = self
            .records
            .iter()
            .map(|record| record.category.as_str())
            .collect();
        Ok(set.into_iter().map(str::to_string).collect())
    }

    fn len(&self) -> RepositoryResult<usize> {
        Ok(self.records.len())
    }
}
