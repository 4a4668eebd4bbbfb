use crate::error::ShorthandError;
use crate::types::{ClassToken, MatchGroup};

/// 按合并组重写 class 列表
///
/// 简写 class 写在该组第一个 class 的位置，组内其余 class 被移除；
/// 其他 class 保持原样和原始相对顺序。结果以单个空格连接。
///
/// 一个 class 被多个组消耗时立即返回错误，不产出任何重写结果。
pub fn rewrite(tokens: &[ClassToken], groups: &[MatchGroup]) -> Result<String, ShorthandError> {
    // 每个位置被哪个组消耗
    let mut consumed: Vec<Option<usize>> = vec![None; tokens.len()];

    for (index, group) in groups.iter().enumerate() {
        for &position in &group.sources {
            let slot = consumed
                .get_mut(position)
                .ok_or(ShorthandError::SourceOutOfRange {
                    position,
                    len: tokens.len(),
                })?;
            if slot.is_some() {
                let class = tokens[position].raw.clone();
                tracing::error!(class = %class, position, "class consumed by two shorthand groups");
                return Err(ShorthandError::TokenConsumedTwice { class, position });
            }
            *slot = Some(index);
        }
    }

    let mut result: Vec<&str> = Vec::with_capacity(tokens.len());
    for (position, token) in tokens.iter().enumerate() {
        match consumed[position] {
            None => result.push(&token.raw),
            Some(index) if groups[index].first_source() == position => {
                result.push(&groups[index].shorthand.raw);
            }
            Some(_) => {}
        }
    }

    Ok(result.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_groups;
    use crate::options::ShorthandOptions;
    use crate::tokenizer::{classify, tokenize};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rewrite_in_place() {
        let tokens = tokenize("mt-0 mr-0 mb-0 ml-1");
        let groups = find_groups(&tokens, &ShorthandOptions::default());
        assert_eq!(rewrite(&tokens, &groups).unwrap(), "my-0 mr-0 ml-1");
    }

    #[test]
    fn test_rewrite_without_groups_normalizes_whitespace() {
        let tokens = tokenize("  block\n\tflex  ");
        assert_eq!(rewrite(&tokens, &[]).unwrap(), "block flex");
    }

    #[test]
    fn test_rewrite_keeps_non_family_order() {
        let tokens = tokenize("block px-0 text-red-500 py-0 flex");
        let groups = find_groups(&tokens, &ShorthandOptions::default());
        assert_eq!(
            rewrite(&tokens, &groups).unwrap(),
            "block p-0 text-red-500 flex"
        );
    }

    #[test]
    fn test_rewrite_rejects_double_consumption() {
        let tokens = tokenize("mt-0 mb-0 mx-0");
        let groups = vec![
            MatchGroup {
                sources: vec![0, 1],
                shorthand: classify("my-0"),
            },
            MatchGroup {
                sources: vec![1, 2],
                shorthand: classify("m-0"),
            },
        ];
        let err = rewrite(&tokens, &groups).unwrap_err();
        assert!(err.is_defect());
        assert!(matches!(
            err,
            ShorthandError::TokenConsumedTwice { ref class, position: 1 } if class == "mb-0"
        ));
    }

    #[test]
    fn test_rewrite_rejects_out_of_range() {
        let tokens = tokenize("mt-0");
        let groups = vec![MatchGroup {
            sources: vec![0, 3],
            shorthand: classify("my-0"),
        }];
        assert!(matches!(
            rewrite(&tokens, &groups).unwrap_err(),
            ShorthandError::SourceOutOfRange { position: 3, len: 1 }
        ));
    }
}
