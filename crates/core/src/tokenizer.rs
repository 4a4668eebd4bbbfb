use crate::catalog;
use crate::types::{ClassToken, Utility};
use shortwind_tw_parse::{class_list, parse_class, ValueKind};

/// 将 class 属性值切分并逐个分类
pub fn tokenize(class_value: &str) -> Vec<ClassToken> {
    class_list(class_value).map(classify).collect()
}

/// 分类单个 class
///
/// 解析失败或不属于任何族的 class 原样透传，从不报错。
pub fn classify(raw: &str) -> ClassToken {
    let parsed = match parse_class(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::trace!(class = raw, error = %err, "unparsable class passed through");
            return ClassToken::passthrough(raw);
        }
    };

    let (utility, value) = match catalog::lookup(&parsed.base) {
        Some((name, member)) => (
            Some(Utility {
                family: member.family,
                direction: member.direction,
                name,
            }),
            parsed.base[name.len()..].to_string(),
        ),
        None => (None, parsed.base),
    };

    ClassToken {
        raw: parsed.raw,
        variants: parsed.variants,
        important: parsed.important,
        negative: parsed.negative,
        utility,
        value_kind: ValueKind::of(&value),
        value,
    }
}
