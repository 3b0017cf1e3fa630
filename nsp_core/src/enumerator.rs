//! `enumerator`：在词图上做 DP，枚举到每个顶点的全部路径并按权重分组。
//!
//! 递推顺序必须是顶点编号递增：处理顶点 `i` 时，所有更小的顶点都已松弛完毕，
//! 因而 `i` 的路径集合已经完整。同一个顶点的不同出边写入不同的目标顶点，
//! 开启 `parallel` feature 时这些出边并行扩展，再按边的顺序合并，结果与串行一致。
//!
//! 这里不做任何剪枝：路径数量可能随句长组合式增长，必要时用 `path_limit` 设上限。

use log::{debug, trace, warn};

use crate::bucket::WeightBuckets;
use crate::error::{Result, SegmentError};
use crate::graph::WordGraph;
use crate::model::Path;

/// 路径枚举器。
#[derive(Debug, Clone, Copy, Default)]
pub struct PathEnumerator {
    /// 全部顶点上累计物化的路径数上限；`None` 表示不限制
    path_limit: Option<usize>,
}

impl PathEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置物化路径数上限；超过时返回 `ResourceExhausted`，不返回部分结果。
    pub fn path_limit(mut self, limit: usize) -> Self {
        self.path_limit = Some(limit);
        self
    }

    /// 只返回尾节点的分组结果（即全部完整切分）。
    ///
    /// 中间顶点的路径在其出边松弛完成后即被释放。
    pub fn enumerate<'s>(&self, graph: &WordGraph<'s>) -> Result<WeightBuckets<'s>> {
        let mut buckets = self.sweep(graph, false)?;
        Ok(buckets.pop().unwrap_or_default())
    }

    /// 返回每个顶点的分组结果，下标即顶点编号（顶点 0 恒为空）。
    pub fn enumerate_all<'s>(&self, graph: &WordGraph<'s>) -> Result<Vec<WeightBuckets<'s>>> {
        self.sweep(graph, true)
    }

    fn sweep<'s>(&self, graph: &WordGraph<'s>, retain: bool) -> Result<Vec<WeightBuckets<'s>>> {
        let terminal = graph.terminal();
        let mut buckets: Vec<WeightBuckets<'s>> =
            (0..=terminal).map(|_| WeightBuckets::new()).collect();
        let mut budget = Budget::new(self.path_limit);

        // 初始化：只有顶点 0 的出边直接生成单边路径，顶点 0 自身没有“空路径”
        for edge in graph.edges_from(0) {
            budget.charge(1)?;
            buckets[edge.end].insert(Path::seed(graph.word(edge), edge.weight));
        }

        for vertex in 1..terminal {
            let (done, pending) = buckets.split_at_mut(vertex + 1);
            let source = &done[vertex];
            trace!(
                "vertex {vertex}: {} paths in {} classes, {} edges",
                source.len(),
                source.class_count(),
                graph.edges_from(vertex).len()
            );
            relax_vertex(graph, vertex, source, pending, &mut budget)?;
            if !retain {
                done[vertex] = WeightBuckets::new();
            }
        }

        debug!(
            "sweep finished: {} paths materialized, {} complete paths in {} weight classes",
            budget.materialized,
            buckets[terminal].len(),
            buckets[terminal].class_count()
        );
        Ok(buckets)
    }
}

/// 物化路径计数。
struct Budget {
    limit: Option<usize>,
    materialized: usize,
}

impl Budget {
    fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            materialized: 0,
        }
    }

    /// 在真正分配之前记账。
    fn charge(&mut self, count: usize) -> Result<()> {
        self.materialized = self.materialized.saturating_add(count);
        match self.limit {
            Some(limit) if self.materialized > limit => {
                warn!(
                    "path limit {limit} exceeded ({} paths requested)",
                    self.materialized
                );
                Err(SegmentError::resource_exhausted(limit))
            }
            _ => Ok(()),
        }
    }
}

/// 用 `source`（顶点 `vertex` 的全部路径）沿其每条出边扩展。
///
/// `pending[k]` 对应顶点 `vertex + 1 + k`。
#[cfg(not(feature = "parallel"))]
fn relax_vertex<'s>(
    graph: &WordGraph<'s>,
    vertex: usize,
    source: &WeightBuckets<'s>,
    pending: &mut [WeightBuckets<'s>],
    budget: &mut Budget,
) -> Result<()> {
    for edge in graph.edges_from(vertex) {
        budget.charge(source.len())?;
        let word = graph.word(edge);
        let target = &mut pending[edge.end - vertex - 1];
        for path in source.iter() {
            target.insert(path.extend(word, edge.weight));
        }
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn relax_vertex<'s>(
    graph: &WordGraph<'s>,
    vertex: usize,
    source: &WeightBuckets<'s>,
    pending: &mut [WeightBuckets<'s>],
    budget: &mut Budget,
) -> Result<()> {
    use rayon::prelude::*;

    let edges = graph.edges_from(vertex);
    budget.charge(source.len().saturating_mul(edges.len()))?;

    let extended: Vec<(usize, Vec<Path<'s>>)> = edges
        .par_iter()
        .map(|edge| {
            let word = graph.word(edge);
            let paths = source
                .iter()
                .map(|path| path.extend(word, edge.weight))
                .collect();
            (edge.end, paths)
        })
        .collect();

    // 按边的顺序合并，保证与串行版本的插入顺序一致
    for (end, paths) in extended {
        let target = &mut pending[end - vertex - 1];
        for path in paths {
            target.insert(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::graph::GraphBuilder;

    fn joined(buckets: &WeightBuckets<'_>, weight: usize) -> Vec<String> {
        buckets.get(weight).iter().map(|p| p.join("-")).collect()
    }

    #[test]
    fn test_terminal_buckets() {
        let dict: HashSet<&str> = ["中国", "男方", "中国男方"].into_iter().collect();
        let graph = GraphBuilder::new(6).build("中国男方", &dict).unwrap();
        let buckets = PathEnumerator::new().enumerate(&graph).unwrap();

        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets.weights().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(joined(&buckets, 1), vec!["中国男方"]);
        assert_eq!(joined(&buckets, 2), vec!["中国-男方"]);
        assert_eq!(joined(&buckets, 3), vec!["中-国-男方", "中国-男-方"]);
        assert_eq!(joined(&buckets, 4), vec!["中-国-男-方"]);
    }

    #[test]
    fn test_intermediate_buckets() {
        let dict: HashSet<&str> = ["青年", "青年人"].into_iter().collect();
        let graph = GraphBuilder::new(6).build("青年人", &dict).unwrap();
        let all = PathEnumerator::new().enumerate_all(&graph).unwrap();

        assert_eq!(all.len(), 4);
        assert!(all[0].is_empty());
        assert_eq!(joined(&all[1], 1), vec!["青"]);
        assert_eq!(joined(&all[2], 1), vec!["青年"]);
        assert_eq!(joined(&all[2], 2), vec!["青-年"]);
        assert_eq!(all[3].len(), 3);
        assert_eq!(all[3].min_weight(), Some(1));
    }

    #[test]
    fn test_single_char_sentence() {
        let dict: HashSet<&str> = HashSet::new();
        let graph = GraphBuilder::new(6).build("亲", &dict).unwrap();
        let buckets = PathEnumerator::new().enumerate(&graph).unwrap();

        assert_eq!(joined(&buckets, 1), vec!["亲"]);
    }

    #[test]
    fn test_path_limit() {
        let dict: HashSet<&str> = ["中国", "男方", "中国男方"].into_iter().collect();
        let graph = GraphBuilder::new(6).build("中国男方", &dict).unwrap();

        // 顶点 1..=4 上一共物化 1 + 2 + 2 + 5 = 10 条路径
        assert!(PathEnumerator::new().path_limit(10).enumerate(&graph).is_ok());
        let err = PathEnumerator::new()
            .path_limit(9)
            .enumerate(&graph)
            .unwrap_err();
        assert_eq!(err, SegmentError::resource_exhausted(9));
    }
}
