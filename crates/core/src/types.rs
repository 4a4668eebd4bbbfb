use crate::catalog::Direction;
use serde::{Deserialize, Serialize};
use shortwind_tw_parse::types::variant_prefix;
use shortwind_tw_parse::ValueKind;

/// 族成员信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utility {
    /// 所属族名（如 "margin"）
    pub family: &'static str,
    pub direction: Direction,
    /// 工具类名（如 "mt"、"rounded-tl"）
    pub name: &'static str,
}

/// class 属性中的一个 class
///
/// 对族成员：`value` 为成员名之后的部分（含前导 `-`，可为空）。
/// 对非族成员：`utility` 为 None，`value` 保存去掉修饰符后的全部内容；
/// 无法解析的 class 整体保存在 `value` 中。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken {
    /// 原始文本
    pub raw: String,
    pub variants: Vec<String>,
    pub important: bool,
    pub negative: bool,
    pub utility: Option<Utility>,
    pub value: String,
    pub value_kind: ValueKind,
}

impl ClassToken {
    /// 不属于任何简写族的 class，原样保留
    pub fn passthrough(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            variants: Vec::new(),
            important: false,
            negative: false,
            utility: None,
            value: raw.to_string(),
            value_kind: ValueKind::of(raw),
        }
    }

    pub fn is_family_member(&self) -> bool {
        self.utility.is_some()
    }

    /// 由各部分重新拼出 class 字符串，结果总是等于 `raw`
    pub fn to_class_string(&self) -> String {
        let mut result = variant_prefix(&self.variants);
        if self.important {
            result.push('!');
        }
        if self.negative {
            result.push('-');
        }
        if let Some(utility) = &self.utility {
            result.push_str(utility.name);
        }
        result.push_str(&self.value);
        result
    }

    /// 保留修饰符、符号与值，只替换工具类名
    pub fn with_utility(&self, utility: Utility) -> Self {
        let mut token = Self {
            raw: String::new(),
            variants: self.variants.clone(),
            important: self.important,
            negative: self.negative,
            utility: Some(utility),
            value: self.value.clone(),
            value_kind: self.value_kind,
        };
        token.raw = token.to_class_string();
        token
    }
}

/// 一次合并：被消耗的 class 位置与生成的简写 class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    /// 被消耗的 class 在原列表中的位置（升序）
    pub sources: Vec<usize>,
    pub shorthand: ClassToken,
}

impl MatchGroup {
    /// 第一个被消耗的 class 的位置，简写 class 写在这里
    pub fn first_source(&self) -> usize {
        self.sources.first().copied().unwrap_or(usize::MAX)
    }

    pub fn describe(&self, tokens: &[ClassToken]) -> ShorthandGroup {
        ShorthandGroup {
            source_classnames: self
                .sources
                .iter()
                .filter_map(|&pos| tokens.get(pos))
                .map(|token| token.raw.clone())
                .collect(),
            shorthand: self.shorthand.raw.clone(),
        }
    }
}

/// 对外报告的一次合并
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShorthandGroup {
    /// 被替换的 class（按原始顺序）
    pub source_classnames: Vec<String>,
    /// 替换后的简写 class
    pub shorthand: String,
}

/// 分析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// 修复后的 class 字符串（空白已规范化）
    pub fixed_string: String,
    /// 按第一个 class 出现顺序排列
    pub groups: Vec<ShorthandGroup>,
}

impl Analysis {
    pub fn has_shorthands(&self) -> bool {
        !self.groups.is_empty()
    }
}
