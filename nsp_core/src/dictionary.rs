use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// 词典抽象：core 不关心词典来自文件/内存/网络。
///
/// 约定：
/// - 只做精确匹配，词典在切分过程中只读
/// - 长度不在 `[2, max_word_len]` 之内的词条永远不会被查询
pub trait Dictionary: Send + Sync {
    /// `word` 是否是词典中的一个词。
    fn contains(&self, word: &str) -> bool;
}

impl<D> Dictionary for &D
where
    D: Dictionary + ?Sized,
{
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<S> Dictionary for HashSet<String, S>
where
    S: BuildHasher + Send + Sync,
{
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<'w, S> Dictionary for HashSet<&'w str, S>
where
    S: BuildHasher + Send + Sync,
{
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(dict: &dyn Dictionary, word: &str) -> bool {
        dict.contains(word)
    }

    #[test]
    fn test_set_impls() {
        let owned: HashSet<String> = ["中国".to_string()].into_iter().collect();
        let borrowed: HashSet<&str> = ["中国"].into_iter().collect();
        let ordered: BTreeSet<String> = ["中国".to_string()].into_iter().collect();

        let dicts: [&dyn Dictionary; 3] = [&owned, &borrowed, &ordered];
        for dict in dicts {
            assert!(lookup(dict, "中国"));
            assert!(!lookup(dict, "中"));
        }
    }

    #[test]
    fn test_reference_impl() {
        let words: HashSet<&str> = ["青年"].into_iter().collect();
        let by_ref = &words;
        assert!(Dictionary::contains(&by_ref, "青年"));
    }
}
