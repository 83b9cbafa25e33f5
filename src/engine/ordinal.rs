// ==========================================
// 家禽杂交预测系统 - 有序性状混合
// ==========================================
// 规则: 两亲本等级取平均,按 ≤ k+0.5 分桶
// 例: 三级量表 ≤1.5 → 1, ≤2.5 → 2, 其余 → 3
// ==========================================

use crate::domain::types::OrdinalScale;

/// 两亲本等级的算术平均
pub fn average_rank<T: OrdinalScale>(a: T, b: T) -> f64 {
    (a.rank() as f64 + b.rank() as f64) / 2.0
}

/// 平均等级落入的桶（恰好在中点时取低一级）
pub fn bucket<T: OrdinalScale>(avg: f64) -> T {
    for level in T::LEVELS {
        if avg <= level.rank() as f64 + 0.5 {
            return *level;
        }
    }
    // 超出最高桶边界
    T::LEVELS[T::LEVELS.len() - 1]
}

/// 混合两个亲本的有序性状
pub fn blend<T: OrdinalScale>(a: T, b: T) -> T {
    bucket(average_rank(a, b))
}
