//! `selector`：从尾节点的分组结果里挑选最终输出。

use crate::bucket::WeightBuckets;
use crate::error::{Result, SegmentError};
use crate::model::Path;

/// Selector：对尾节点的路径分组做后处理，得到输出列表。
pub trait Selector: Send + Sync {
    fn select<'s>(&self, buckets: WeightBuckets<'s>) -> Vec<Path<'s>>;
}

/// 默认 selector：取权重最小的 N 个**不同权重**，返回这些权重下的全部路径。
///
/// 按权重类而不是按条数截断：边界权重上并列的路径全部保留，
/// 因此输出条数通常远大于 N。
#[derive(Debug, Clone, Copy)]
pub struct TopKSelector {
    n_path: usize,
}

impl TopKSelector {
    /// `n_path` 必须为正数。
    pub fn new(n_path: usize) -> Result<Self> {
        if n_path == 0 {
            return Err(SegmentError::invalid_argument("n_path 必须为正数"));
        }
        Ok(Self { n_path })
    }

    pub fn n_path(&self) -> usize {
        self.n_path
    }

    /// 会被选中的权重（升序），最多 `n_path` 个。
    pub fn selected_weights(&self, buckets: &WeightBuckets<'_>) -> Vec<usize> {
        buckets.weights().take(self.n_path).collect()
    }
}

impl Selector for TopKSelector {
    /// 输出顺序：权重升序，同权重内保持插入顺序。
    fn select<'s>(&self, mut buckets: WeightBuckets<'s>) -> Vec<Path<'s>> {
        let weights = self.selected_weights(&buckets);
        let total = weights.iter().map(|&w| buckets.get(w).len()).sum();
        let mut out = Vec::with_capacity(total);
        for weight in weights {
            out.append(&mut buckets.take_class(weight));
        }
        out
    }
}
