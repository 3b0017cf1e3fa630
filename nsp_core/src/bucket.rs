//! `bucket`：按权重分组的路径集合。
//!
//! 权重不会超过顶点编号，所以直接用“以权重为下标的数组”代替 map；
//! 空槽位表示该权重不存在。

use std::mem;

use crate::model::Path;

/// 到达某个顶点的全部路径，按权重（词数）分组。
#[derive(Debug, Clone, Default)]
pub struct WeightBuckets<'s> {
    slots: Vec<Vec<Path<'s>>>,
    len: usize,
}

impl<'s> WeightBuckets<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 把路径放进与其权重对应的组（组内保持插入顺序）。
    pub fn insert(&mut self, path: Path<'s>) {
        let weight = path.weight();
        if self.slots.len() <= weight {
            self.slots.resize_with(weight + 1, Vec::new);
        }
        self.slots[weight].push(path);
        self.len += 1;
    }

    /// 某个权重下的全部路径；不存在时为空切片。
    pub fn get(&self, weight: usize) -> &[Path<'s>] {
        self.slots.get(weight).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 出现过的权重，升序。
    pub fn weights(&self) -> impl Iterator<Item = usize> + '_ {
        self.classes().map(|(weight, _)| weight)
    }

    /// `(权重, 路径)` 分组，按权重升序。
    pub fn classes(&self) -> impl Iterator<Item = (usize, &[Path<'s>])> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(weight, paths)| (weight, paths.as_slice()))
    }

    /// 全部路径：权重升序，组内按插入顺序。
    pub fn iter(&self) -> impl Iterator<Item = &Path<'s>> + '_ {
        self.slots.iter().flatten()
    }

    /// 取走某个权重组。
    pub fn take_class(&mut self, weight: usize) -> Vec<Path<'s>> {
        let Some(slot) = self.slots.get_mut(weight) else {
            return Vec::new();
        };
        let paths = mem::take(slot);
        self.len -= paths.len();
        paths
    }

    pub fn min_weight(&self) -> Option<usize> {
        self.weights().next()
    }

    /// 不同权重的个数。
    pub fn class_count(&self) -> usize {
        self.slots.iter().filter(|paths| !paths.is_empty()).count()
    }

    /// 路径总数。
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WORD_WEIGHT;

    fn path<'s>(words: &[&'s str]) -> Path<'s> {
        let mut p = Path::seed(words[0], WORD_WEIGHT);
        for &w in &words[1..] {
            p = p.extend(w, WORD_WEIGHT);
        }
        p
    }

    #[test]
    fn test_grouping_by_weight() {
        let mut buckets = WeightBuckets::new();
        buckets.insert(path(&["中", "国"]));
        buckets.insert(path(&["中国"]));
        buckets.insert(path(&["中", "国"]));

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.class_count(), 2);
        assert_eq!(buckets.weights().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(buckets.min_weight(), Some(1));
        assert_eq!(buckets.get(2).len(), 2);
        assert!(buckets.get(0).is_empty());
        assert!(buckets.get(9).is_empty());
        assert_eq!(buckets.iter().next().map(Path::weight), Some(1));
    }

    #[test]
    fn test_take_class() {
        let mut buckets = WeightBuckets::new();
        buckets.insert(path(&["中国"]));
        buckets.insert(path(&["中", "国"]));

        assert_eq!(buckets.take_class(2).len(), 1);
        assert!(buckets.take_class(7).is_empty());
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.class_count(), 1);
    }
}
