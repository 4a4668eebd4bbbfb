use serde::{Deserialize, Serialize};

/// 拆分后的 Tailwind class 表示
///
/// 只负责剥离修饰符、`!` 与负号，`base` 部分的语义由调用方决定。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedClass {
    /// 原始 class 文本
    pub raw: String,

    /// 修饰符片段（如 `md:hover:p-4` → `["md", "hover"]`）
    pub variants: Vec<String>,

    /// 前置重要性标记（`!p-4`）
    ///
    /// 后置写法（`p-4!`）保留在 `base` 中。
    pub important: bool,

    /// 是否为负值（如 -m-4）
    pub negative: bool,

    /// 剩余部分（如 `m-4`、`rounded-tl-[10px]`）
    pub base: String,
}

/// 值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// 无值（如 `rounded`、`border-t`）
    Empty,
    /// 标准值（如 `-4`、`-sm`、`-indigo-200/50`）
    Named,
    /// 任意值（如 `-[10px]`）
    Arbitrary,
}

impl ParsedClass {
    /// 修饰符前缀（含末尾冒号），无修饰符时为空串
    pub fn variant_prefix(&self) -> String {
        variant_prefix(&self.variants)
    }

    /// 由各部分重新拼出 class 字符串
    pub fn to_class_string(&self) -> String {
        let mut result = self.variant_prefix();
        if self.important {
            result.push('!');
        }
        if self.negative {
            result.push('-');
        }
        result.push_str(&self.base);
        result
    }
}

impl ValueKind {
    /// 根据值文本判断类型，`value` 含前导 `-`
    pub fn of(value: &str) -> Self {
        if value.is_empty() {
            ValueKind::Empty
        } else if value.starts_with("-[") || value.starts_with('[') {
            ValueKind::Arbitrary
        } else {
            ValueKind::Named
        }
    }

    pub fn is_arbitrary(&self) -> bool {
        matches!(self, ValueKind::Arbitrary)
    }
}

/// 将修饰符片段拼成前缀（`["md", "hover"]` → `"md:hover:"`）
pub fn variant_prefix(variants: &[String]) -> String {
    let mut prefix = String::new();
    for variant in variants {
        prefix.push_str(variant);
        prefix.push(':');
    }
    prefix
}
