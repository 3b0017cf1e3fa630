//! `graph`：把句子构造成“字符边界 + 词边”的有向无环图。
//!
//! - 顶点：字符位置 `0..=length`（按 char 计，不是字节）
//! - 边：每个顶点先有一条单字边 `i -> i+1`，再按长度从长到短追加词典命中的词
//! - 所有边都指向更大的顶点，所以按顶点编号递增遍历就是拓扑序

use std::iter;

use log::debug;

use crate::dictionary::Dictionary;
use crate::error::{Result, SegmentError};
use crate::model::{Edge, MIN_WORD_LEN, Token, Vertex, WORD_WEIGHT};

/// 构图器：只关心单个词的最大长度。
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    max_word_len: usize,
}

impl GraphBuilder {
    pub fn new(max_word_len: usize) -> Self {
        Self { max_word_len }
    }

    /// 对 `sentence` 构图；词典只读。
    pub fn build<'s, D>(&self, sentence: &'s str, dictionary: &D) -> Result<WordGraph<'s>>
    where
        D: Dictionary + ?Sized,
    {
        if sentence.is_empty() {
            return Err(SegmentError::invalid_argument("句子为空"));
        }
        if self.max_word_len < MIN_WORD_LEN {
            return Err(SegmentError::invalid_argument(format!(
                "max_word_len 至少为 {MIN_WORD_LEN}，实际为 {}",
                self.max_word_len
            )));
        }

        // offsets[i]：第 i 个字符边界的字节偏移，末尾补上 sentence.len()
        let offsets: Vec<usize> = sentence
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(sentence.len()))
            .collect();
        let length = offsets.len() - 1;

        let mut vertices = Vec::with_capacity(length + 1);
        let mut edges = Vec::with_capacity(length);
        let mut tokens = Vec::new();

        for start in 0..length {
            let first = edges.len();
            edges.push(Edge {
                end: start + 1,
                weight: WORD_WEIGHT,
                bytes: offsets[start]..offsets[start + 1],
            });

            // 所有满足长度的命中都加边，不是只取最长的那个
            let longest = self.max_word_len.min(length - start);
            for len in (MIN_WORD_LEN..=longest).rev() {
                let bytes = offsets[start]..offsets[start + len];
                let word = &sentence[bytes.clone()];
                if dictionary.contains(word) {
                    tokens.push(Token {
                        start,
                        len,
                        text: word,
                    });
                    edges.push(Edge {
                        end: start + len,
                        weight: WORD_WEIGHT,
                        bytes,
                    });
                }
            }

            vertices.push(Vertex {
                offset: offsets[start],
                edges: first..edges.len(),
            });
        }
        // 尾节点：没有出边
        vertices.push(Vertex {
            offset: sentence.len(),
            edges: edges.len()..edges.len(),
        });

        debug!(
            "graph built: {} vertices, {} edges, {} dictionary matches",
            vertices.len(),
            edges.len(),
            tokens.len()
        );

        Ok(WordGraph {
            sentence,
            vertices,
            edges,
            tokens,
        })
    }
}

/// 句子的词图。顶点与边都存放在扁平数组里，互相只用下标引用。
#[derive(Debug, Clone)]
pub struct WordGraph<'s> {
    sentence: &'s str,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    tokens: Vec<Token<'s>>,
}

impl<'s> WordGraph<'s> {
    pub fn sentence(&self) -> &'s str {
        self.sentence
    }

    /// 句子的字符数，同时也是尾节点的编号。
    pub fn terminal(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// 顶点 `index` 的出边（插入顺序）；越界时为空。
    pub fn edges_from(&self, index: usize) -> &[Edge] {
        match self.vertices.get(index) {
            Some(vertex) => &self.edges[vertex.edges.clone()],
            None => &[],
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 边上的词（句子的切片）。
    pub fn word(&self, edge: &Edge) -> &'s str {
        &self.sentence[edge.bytes.clone()]
    }

    /// 构图时命中的词典词，按发现顺序（起点升序，同起点长词在前）。
    pub fn tokens(&self) -> &[Token<'s>] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn words(graph: &WordGraph<'_>, index: usize) -> Vec<String> {
        graph
            .edges_from(index)
            .iter()
            .map(|e| graph.word(e).to_string())
            .collect()
    }

    #[test]
    fn test_single_char_edges_first() {
        let dict: HashSet<&str> = ["中国", "中国男方", "男方"].into_iter().collect();
        let graph = GraphBuilder::new(6).build("中国男方", &dict).unwrap();

        assert_eq!(graph.terminal(), 4);
        assert_eq!(words(&graph, 0), vec!["中", "中国男方", "中国"]);
        assert_eq!(words(&graph, 1), vec!["国"]);
        assert_eq!(words(&graph, 2), vec!["男", "男方"]);
        assert!(graph.edges_from(4).is_empty());
        assert_eq!(graph.edge_count(), 7);
    }

    #[test]
    fn test_vertices_are_char_positions() {
        let dict: HashSet<&str> = ["1920"].into_iter().collect();
        let graph = GraphBuilder::new(6).build("于1920到", &dict).unwrap();

        assert_eq!(graph.terminal(), 6);
        assert_eq!(graph.vertex(1).map(|v| v.offset), Some("于".len()));
        let edge = &graph.edges_from(1)[1];
        assert_eq!(edge.end, 5);
        assert_eq!(graph.word(edge), "1920");
        assert_eq!(graph.vertex(6).map(|v| v.offset), Some("于1920到".len()));
    }

    #[test]
    fn test_entries_outside_length_range_are_inert() {
        let dict: HashSet<&str> = ["中", "中国男方", "国男"].into_iter().collect();
        let graph = GraphBuilder::new(3).build("中国男方", &dict).unwrap();

        assert_eq!(graph.tokens().len(), 1);
        assert_eq!(graph.tokens()[0].text, "国男");
        assert_eq!(graph.tokens()[0].start, 1);
        assert_eq!(graph.tokens()[0].len, 2);
        assert!(graph.edges_from(0).iter().all(|e| e.weight == WORD_WEIGHT));
    }

    #[test]
    fn test_invalid_arguments() {
        let dict: HashSet<&str> = HashSet::new();
        assert!(matches!(
            GraphBuilder::new(6).build("", &dict),
            Err(SegmentError::InvalidArgument { .. })
        ));
        assert!(matches!(
            GraphBuilder::new(1).build("中国", &dict),
            Err(SegmentError::InvalidArgument { .. })
        ));
    }
}
