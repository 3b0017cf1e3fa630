//! `nsp_core`：N-最短路径分词的纯逻辑层，不做任何 I/O。
//!
//! 流水线：
//! - `graph`（构图）：句子 + 词典 -> 字符边界上的有向无环词图
//! - `enumerator`（DP）：按顶点顺序枚举到每个顶点的全部路径，按权重（词数）分组
//! - `selector`（选取）：在尾节点上取权重最小的 N 个权重类中的全部路径
//! - `segmenter`（编排）：参数校验 + 上面三步 + 输出字符串
//!
//! ```
//! use std::collections::HashSet;
//!
//! let dict: HashSet<&str> = ["青年", "青年人"].into_iter().collect();
//! let paths = nsp_core::segment("青年人", &dict, 1, 6).unwrap();
//! assert_eq!(paths, vec!["青年人"]);
//! ```
pub mod bucket;
pub mod dictionary;
pub mod enumerator;
pub mod error;
pub mod graph;
pub mod model;
pub mod segmenter;
pub mod selector;

pub use crate::dictionary::Dictionary;
pub use crate::error::{Result, SegmentError};
pub use crate::segmenter::{Segmenter, segment};
