use std::{fs, io, path::Path};

use log::debug;
use nsp_core::dictionary::Dictionary;
use rustc_hash::FxHashSet;

/// 词表格式（简化版）：
///
/// - 每行一个词：`word[<TAB>...]`，TAB 之后的列（词频、词性等）被忽略
/// - 允许空行与 `#` 开头注释行
///
/// 只做精确匹配；长度不在切分器 `[2, max_word_len]` 范围内的词条保留但不会命中。
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
    /// 最长词条的字符数
    max_word_len: usize,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let list = Self::from_list_str(&s)?;
        debug!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn from_list_str(s: &str) -> io::Result<Self> {
        let mut list = Self::new();
        for (idx, line) in s.lines().enumerate() {
            let line = line.trim_end();
            if line.trim_start().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let word = line.split('\t').next().unwrap_or("").trim();
            if word.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("词表第 {} 行缺少词", idx + 1),
                ));
            }
            list.insert(word);
        }
        Ok(list)
    }

    /// 插入一个词；已存在时返回 false。
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        let chars = word.chars().count();
        let inserted = self.words.insert(word);
        if inserted {
            self.max_word_len = self.max_word_len.max(chars);
        }
        inserted
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 最长词条的字符数（空词表为 0）。
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl<W> FromIterator<W> for WordList
where
    W: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<W> Extend<W> for WordList
where
    W: Into<String>,
{
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
