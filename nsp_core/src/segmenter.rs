//! `segmenter`：编排 构图 -> DP 枚举 -> 选取，对外提供切分接口。

use log::debug;

use crate::dictionary::Dictionary;
use crate::enumerator::PathEnumerator;
use crate::error::{Result, SegmentError};
use crate::graph::{GraphBuilder, WordGraph};
use crate::model::{MIN_WORD_LEN, Path};
use crate::selector::{Selector, TopKSelector};

/// 默认取前 10 个权重类。
pub const DEFAULT_N_PATH: usize = 10;
/// 默认单个词最多 6 个字符。
pub const DEFAULT_MAX_WORD_LEN: usize = 6;
/// 输出时词与词之间的分隔符。
pub const DEFAULT_DELIMITER: &str = "-";

/// 切分器：持有词典与参数，每次调用都重新构图，调用之间不共享状态。
///
/// ```
/// use std::collections::HashSet;
/// use nsp_core::Segmenter;
///
/// let dict: HashSet<&str> = ["中国", "男方", "中国男方"].into_iter().collect();
/// let paths = Segmenter::new(dict).n_path(2).segment("中国男方").unwrap();
/// assert_eq!(paths, vec!["中国男方", "中国-男方"]);
/// ```
pub struct Segmenter<D> {
    /// 词典（只读，精确匹配）
    dictionary: D,
    /// 取权重最小的多少个权重类（不是多少条路径）
    n_path: usize,
    /// 单个词最多覆盖多少个字符
    max_word_len: usize,
    /// 物化路径数上限；None 表示不限制
    path_limit: Option<usize>,
    /// 输出字符串中的词分隔符
    delimiter: String,
}

impl<D> Segmenter<D>
where
    D: Dictionary,
{
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            n_path: DEFAULT_N_PATH,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            path_limit: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// 设置权重类个数；0 会在切分时报 `InvalidArgument`。
    pub fn n_path(mut self, n: usize) -> Self {
        self.n_path = n;
        self
    }

    /// 设置单个词的最大字符数；小于 2 会在切分时报 `InvalidArgument`。
    pub fn max_word_len(mut self, n: usize) -> Self {
        self.max_word_len = n;
        self
    }

    /// 限制物化的路径总数，超过时报 `ResourceExhausted`。
    pub fn path_limit(mut self, limit: usize) -> Self {
        self.path_limit = Some(limit);
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// 只构图，不枚举路径（便于调试与检查词典命中）。
    pub fn graph<'s>(&self, sentence: &'s str) -> Result<WordGraph<'s>> {
        self.validate(sentence)?;
        GraphBuilder::new(self.max_word_len).build(sentence, &self.dictionary)
    }

    /// 返回前 `n_path` 个权重类中的全部路径：权重升序，同权重内按枚举顺序。
    pub fn shortest_paths<'s>(&self, sentence: &'s str) -> Result<Vec<Path<'s>>> {
        let graph = self.graph(sentence)?;
        let selector = TopKSelector::new(self.n_path)?;

        let enumerator = match self.path_limit {
            Some(limit) => PathEnumerator::new().path_limit(limit),
            None => PathEnumerator::new(),
        };
        let terminal = enumerator.enumerate(&graph)?;
        let paths = selector.select(terminal);

        debug!(
            "segmented {} chars into {} paths (n_path = {})",
            graph.terminal(),
            paths.len(),
            self.n_path
        );
        Ok(paths)
    }

    /// 同 `shortest_paths`，每条路径用分隔符连接成字符串。
    pub fn segment(&self, sentence: &str) -> Result<Vec<String>> {
        let paths = self.shortest_paths(sentence)?;
        Ok(paths.iter().map(|p| p.join(&self.delimiter)).collect())
    }

    fn validate(&self, sentence: &str) -> Result<()> {
        if sentence.is_empty() {
            return Err(SegmentError::invalid_argument("句子为空"));
        }
        if self.n_path == 0 {
            return Err(SegmentError::invalid_argument("n_path 必须为正数"));
        }
        if self.max_word_len < MIN_WORD_LEN {
            return Err(SegmentError::invalid_argument(format!(
                "max_word_len 至少为 {MIN_WORD_LEN}，实际为 {}",
                self.max_word_len
            )));
        }
        Ok(())
    }
}

/// 快捷接口：用默认分隔符 `-` 切分。
pub fn segment<D>(
    sentence: &str,
    dictionary: &D,
    n_path: usize,
    max_word_len: usize,
) -> Result<Vec<String>>
where
    D: Dictionary + ?Sized,
{
    Segmenter::new(dictionary)
        .n_path(n_path)
        .max_word_len(max_word_len)
        .segment(sentence)
}
