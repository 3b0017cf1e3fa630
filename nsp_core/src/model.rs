use std::ops::Range;

/// 每条边恰好代表一个词，权重恒为 1（路径权重 = 词数）。
pub const WORD_WEIGHT: usize = 1;

/// 词典词的最短长度（字符数）；单字由必有的单字边覆盖。
pub const MIN_WORD_LEN: usize = 2;

/// 边：从某个顶点出发、覆盖一个候选词。
///
/// 注意：`end` 是**字符位置**（不是字节偏移），`bytes` 才是句子里的字节范围。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// 终点顶点编号，总是大于起点
    pub end: usize,
    /// 边的权重（恒为 `WORD_WEIGHT`）
    pub weight: usize,
    /// 词在句子中的字节范围
    pub bytes: Range<usize>,
}

/// 顶点：字符边界位置 `0..=length`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// 该边界在句子中的字节偏移
    pub offset: usize,
    /// 出边在 `WordGraph` 扁平边数组中的范围（单字边在前）
    pub edges: Range<usize>,
}

/// 构图时命中的词典词。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    /// 起始顶点
    pub start: usize,
    /// 字符数
    pub len: usize,
    pub text: &'s str,
}

/// 路径：从顶点 0 出发的一种（前缀）切分。
///
/// 词按从左到右的顺序保存；`weight` 等于词数。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<'s> {
    words: Vec<&'s str>,
    weight: usize,
}

impl<'s> Path<'s> {
    /// 单边路径（DP 的种子）。
    pub(crate) fn seed(word: &'s str, weight: usize) -> Self {
        Self {
            words: vec![word],
            weight,
        }
    }

    /// 在末尾追加一条边，得到一条新路径。
    pub(crate) fn extend(&self, word: &'s str, weight: usize) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend_from_slice(&self.words);
        words.push(word);
        Self {
            words,
            weight: self.weight + weight,
        }
    }

    pub fn words(&self) -> &[&'s str] {
        &self.words
    }

    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 用分隔符连接各词，例如 `"中国-男方"`。
    pub fn join(&self, delimiter: &str) -> String {
        self.words.join(delimiter)
    }

    /// 路径覆盖的原文（各词直接拼接）。
    pub fn text(&self) -> String {
        self.words.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_keeps_prefix() {
        let seed = Path::seed("中国", WORD_WEIGHT);
        let path = seed.extend("男方", WORD_WEIGHT);

        assert_eq!(seed.words(), &["中国"]);
        assert_eq!(path.words(), &["中国", "男方"]);
        assert_eq!(path.weight(), 2);
        assert_eq!(path.join("-"), "中国-男方");
        assert_eq!(path.text(), "中国男方");
    }
}
