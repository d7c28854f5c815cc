//! 長名稱改寫。
//!
//! 變數與函式兩個步驟的編號規則不同：
//! - 變數：`var_N` 的 N 是該 token 在整段掃描中的位置（從 1 起算），
//!   同名出現多次時以最後一次的位置為準。
//! - 函式：`func_k` 依名稱第一次出現的順序編號，同名只算一次，
//!   而且掃描的是原始輸入，不是前面步驟改寫後的文字。

use crate::domain::model::Technique;
use crate::domain::ports::{PipelineContext, Stage};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

// 只把 ASCII 英數與底線視為 word 字元
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[A-Za-z_][A-Za-z0-9_]*").unwrap());
// 整字比對：一個名稱的整字出現位置就是一段完整的 word 字元
static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());
static FUNCTION_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+([A-Za-z0-9_]+)\s*\(").unwrap());

/// 保留插入順序的名稱對照表；重複插入會覆寫舊值但不改變位置
#[derive(Debug, Default)]
pub struct RenameMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl RenameMap {
    pub fn insert(&mut self, name: &str, replacement: String) {
        match self.index.get(name) {
            Some(&position) => self.entries[position].1 = replacement,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), replacement));
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 整字、全域替換，一次掃描完成；替換後的文字不會再被比對
    pub fn apply(&self, text: String) -> String {
        if self.is_empty() {
            return text;
        }

        WORD_RUN
            .replace_all(&text, |caps: &Captures<'_>| {
                let word = &caps[0];
                self.get(word).unwrap_or(word).to_string()
            })
            .into_owned()
    }
}

fn is_long_name(name: &str, min_length: usize) -> bool {
    name.len() > min_length && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

pub fn collect_variable_names(text: &str, min_length: usize) -> RenameMap {
    let mut map = RenameMap::default();
    for (index, token) in IDENTIFIER.find_iter(text).enumerate() {
        if is_long_name(token.as_str(), min_length) {
            map.insert(token.as_str(), format!("var_{}", index + 1));
        }
    }
    map
}

pub fn collect_function_names(source: &str, min_length: usize) -> RenameMap {
    let mut map = RenameMap::default();
    for caps in FUNCTION_DECLARATION.captures_iter(source) {
        let name = &caps[1];
        if is_long_name(name, min_length) && !map.contains(name) {
            let replacement = format!("func_{}", map.len() + 1);
            map.insert(name, replacement);
        }
    }
    map
}

pub struct VariableRenameStage {
    min_length: usize,
}

impl VariableRenameStage {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Stage for VariableRenameStage {
    fn name(&self) -> &'static str {
        "variables"
    }

    fn apply(&self, text: String, context: &mut PipelineContext<'_>) -> String {
        let map = collect_variable_names(&text, self.min_length);
        if map.is_empty() {
            return text;
        }

        tracing::debug!("Renaming {} long identifiers", map.len());
        context.record(Technique::VariableRenaming);
        map.apply(text)
    }
}

pub struct FunctionRenameStage {
    min_length: usize,
}

impl FunctionRenameStage {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Stage for FunctionRenameStage {
    fn name(&self) -> &'static str {
        "functions"
    }

    fn apply(&self, text: String, context: &mut PipelineContext<'_>) -> String {
        let map = collect_function_names(context.original(), self.min_length);
        if map.is_empty() {
            return text;
        }

        tracing::debug!("Renaming {} long function names", map.len());
        context.record(Technique::FunctionRenaming);
        map.apply(text)
    }
}
