use crate::catalog::{CombineRule, Direction, Family, FAMILIES};
use crate::options::ShorthandOptions;
use crate::types::{ClassToken, MatchGroup, Utility};
use indexmap::IndexMap;

/// 分桶键：修饰符、重要性、符号、值都完全相同的成员才能合并
#[derive(Debug, PartialEq, Eq, Hash)]
struct BucketKey<'a> {
    variants: &'a [String],
    important: bool,
    negative: bool,
    value: &'a str,
}

/// 方向 → 占据该方向的 class 位置
type Slots = IndexMap<Direction, Vec<usize>>;

/// 在一个 class 属性值中查找所有可合并的组
///
/// 各族独立处理。结果按每组第一个 class 的位置排序，
/// 与分桶的遍历顺序无关。
pub fn find_groups(tokens: &[ClassToken], options: &ShorthandOptions) -> Vec<MatchGroup> {
    let mut groups = Vec::new();

    for family in FAMILIES.iter().filter(|f| options.is_enabled(f.name)) {
        for (_, slots) in bucket_family(tokens, family) {
            groups.extend(reduce_bucket(tokens, family, slots));
        }
    }

    groups.sort_by_key(MatchGroup::first_source);
    groups
}

/// 将某个族的成员按 (修饰符, 重要性, 符号, 值) 分桶
///
/// 同一桶内重复出现的方向共用一个槽位，合并时一起被消耗。
fn bucket_family<'a>(tokens: &'a [ClassToken], family: &Family) -> IndexMap<BucketKey<'a>, Slots> {
    let mut buckets: IndexMap<BucketKey<'a>, Slots> = IndexMap::new();

    for (pos, token) in tokens.iter().enumerate() {
        let Some(utility) = &token.utility else {
            continue;
        };
        if utility.family != family.name {
            continue;
        }

        let key = BucketKey {
            variants: &token.variants,
            important: token.important,
            negative: token.negative,
            value: &token.value,
        };
        buckets
            .entry(key)
            .or_default()
            .entry(utility.direction)
            .or_default()
            .push(pos);
    }

    buckets
}

/// 在一个桶内反复应用合并规则直到不动点
///
/// 每次触发都从优先级最高的规则重新开始，派生出的方向可以继续参与
/// 后续规则（如 l + r → x，再 x + y → 全部）。
/// 每次触发至少减少一个槽位，循环必然结束。
///
/// 开局可触发多条规则时（如 `rounded-tl rounded-tr rounded-bl rounded-r`
/// 中的 tl + tr 与 tl + bl），逐一尝试作为第一步，取剩余槽位最少的结果；
/// 数量相同时按规则优先级。
fn reduce_bucket(tokens: &[ClassToken], family: &Family, slots: Slots) -> Vec<MatchGroup> {
    let best = family
        .rules
        .iter()
        .filter(|rule| rule.fires(&slots))
        .map(|first| reduce_from(family, slots.clone(), first))
        .min_by_key(|(remaining, _)| remaining.len());

    let Some((slots, derived)) = best else {
        return Vec::new();
    };

    tracing::debug!(
        family = family.name,
        derived = ?derived,
        remaining = slots.len(),
        "bucket reduced"
    );

    slots
        .into_iter()
        .filter(|(direction, _)| derived.contains(direction))
        .filter_map(|(direction, sources)| build_group(tokens, family, direction, sources))
        .collect()
}

/// 以 `first` 为第一步，之后按优先级合并到不动点
///
/// 返回剩余槽位与派生出的方向。
fn reduce_from(
    family: &Family,
    mut slots: Slots,
    first: &CombineRule,
) -> (Slots, Vec<Direction>) {
    let mut derived: Vec<Direction> = Vec::new();
    let mut next = Some(first);

    while let Some(rule) = next {
        let mut merged: Vec<usize> = Vec::new();
        for direction in rule.from {
            merged.extend(slots.shift_remove(direction).unwrap_or_default());
        }
        // 目标方向已存在时一并吸收（如 mt-0 mb-0 my-0 → my-0）
        if let Some(existing) = slots.shift_remove(&rule.to) {
            merged.extend(existing);
        }
        merged.sort_unstable();

        tracing::trace!(
            family = family.name,
            from = ?rule.from,
            to = ?rule.to,
            classes = merged.len(),
            "shorthand rule fired"
        );

        slots.insert(rule.to, merged);
        derived.push(rule.to);
        next = family.rules.iter().find(|rule| rule.fires(&slots));
    }

    (slots, derived)
}

fn build_group(
    tokens: &[ClassToken],
    family: &Family,
    direction: Direction,
    sources: Vec<usize>,
) -> Option<MatchGroup> {
    let Some(name) = family.member_name(direction) else {
        tracing::error!(family = family.name, ?direction, "rule target has no member");
        return None;
    };
    let template = tokens.get(*sources.first()?)?;
    let shorthand = template.with_utility(Utility {
        family: family.name,
        direction,
        name,
    });

    Some(MatchGroup { sources, shorthand })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use pretty_assertions::assert_eq;

    fn groups_of(input: &str) -> Vec<(Vec<String>, String)> {
        let tokens = tokenize(input);
        find_groups(&tokens, &ShorthandOptions::default())
            .iter()
            .map(|g| {
                let described = g.describe(&tokens);
                (described.source_classnames, described.shorthand)
            })
            .collect()
    }

    fn group(sources: &[&str], shorthand: &str) -> (Vec<String>, String) {
        (
            sources.iter().map(|s| s.to_string()).collect(),
            shorthand.to_string(),
        )
    }

    #[test]
    fn test_margin_two_way() {
        assert_eq!(
            groups_of("mt-0 mr-0 mb-0 ml-1"),
            vec![group(&["mt-0", "mb-0"], "my-0")]
        );
    }

    #[test]
    fn test_margin_full_collapse() {
        assert_eq!(
            groups_of("mt-2 mr-2 mb-2 ml-2"),
            vec![group(&["mt-2", "mr-2", "mb-2", "ml-2"], "m-2")]
        );
    }

    #[test]
    fn test_no_shorthand_for_distinct_values() {
        assert!(groups_of("mt-0 mr-1 mb-3 ml-4").is_empty());
        assert!(groups_of("overflow-x-auto overflow-y-scroll").is_empty());
        assert!(groups_of("gap-x-8 gap-y-4").is_empty());
    }

    #[test]
    fn test_single_member_untouched() {
        assert!(groups_of("overflow-x-auto").is_empty());
        assert!(groups_of("m-4").is_empty());
    }

    #[test]
    fn test_mixed_value_kinds_never_merge() {
        assert!(groups_of("top-[0] right-0 bottom-0 left-[0]").is_empty());
        assert!(groups_of("px-0 py-[0]").is_empty());
    }

    #[test]
    fn test_variant_isolation() {
        assert_eq!(
            groups_of("md:mx-2 md:my-2"),
            vec![group(&["md:mx-2", "md:my-2"], "md:m-2")]
        );
        assert!(groups_of("mx-2 md:my-2").is_empty());
        assert!(groups_of("md:mx-2 lg:my-2").is_empty());
    }

    #[test]
    fn test_sign_isolation() {
        assert!(groups_of("scale-x-75 -scale-y-75").is_empty());
        assert_eq!(
            groups_of("-mt-1 -mr-1 -mb-1 ml-0"),
            vec![group(&["-mt-1", "-mb-1"], "-my-1")]
        );
    }

    #[test]
    fn test_important_isolation() {
        assert!(groups_of("!mx-2 my-2").is_empty());
        assert_eq!(
            groups_of("!mx-2 !my-2"),
            vec![group(&["!mx-2", "!my-2"], "!m-2")]
        );
    }

    #[test]
    fn test_chained_axis_reduction() {
        assert_eq!(
            groups_of("lg:border-y lg:border-l lg:border-r"),
            vec![group(&["lg:border-y", "lg:border-l", "lg:border-r"], "lg:border")]
        );
    }

    #[test]
    fn test_pre_merged_axis_is_valid_input() {
        assert_eq!(
            groups_of("rounded-tl rounded-tr rounded-b"),
            vec![group(&["rounded-tl", "rounded-tr", "rounded-b"], "rounded")]
        );
    }

    #[test]
    fn test_corners_with_different_values() {
        assert_eq!(
            groups_of("rounded-tl-sm rounded-tr-sm rounded-br-lg rounded-bl-xl"),
            vec![group(&["rounded-tl-sm", "rounded-tr-sm"], "rounded-t-sm")]
        );
    }

    #[test]
    fn test_three_corners_merge_one_edge() {
        assert_eq!(
            groups_of("rounded-tl-sm rounded-tr-sm rounded-br-sm"),
            vec![group(&["rounded-tl-sm", "rounded-tr-sm"], "rounded-t-sm")]
        );
    }

    #[test]
    fn test_corner_mix_prefers_fewest_classes() {
        // tl + bl → l，再 l + r → 全部；先合并 tl + tr 会剩下三个 class
        assert_eq!(
            groups_of("rounded-tl rounded-tr rounded-bl rounded-r"),
            vec![group(&["rounded-tl", "rounded-bl", "rounded-r"], "rounded")]
        );
    }

    #[test]
    fn test_four_corners() {
        assert_eq!(
            groups_of("rounded-tl-lg rounded-tr-lg rounded-br-lg rounded-bl-lg"),
            vec![group(
                &["rounded-tl-lg", "rounded-tr-lg", "rounded-br-lg", "rounded-bl-lg"],
                "rounded-lg"
            )]
        );
    }

    #[test]
    fn test_existing_target_is_absorbed() {
        assert_eq!(
            groups_of("mt-0 mb-0 my-0"),
            vec![group(&["mt-0", "mb-0", "my-0"], "my-0")]
        );
    }

    #[test]
    fn test_duplicates_consumed_together() {
        assert_eq!(
            groups_of("mt-0 mt-0 mb-0"),
            vec![group(&["mt-0", "mt-0", "mb-0"], "my-0")]
        );
    }

    #[test]
    fn test_groups_ordered_by_first_class() {
        let groups = groups_of("py-0 md:mx-2 px-0 md:my-2 mt-0 mb-0");
        assert_eq!(
            groups,
            vec![
                group(&["py-0", "px-0"], "p-0"),
                group(&["md:mx-2", "md:my-2"], "md:m-2"),
                group(&["mt-0", "mb-0"], "my-0"),
            ]
        );
    }

    #[test]
    fn test_inset_groups() {
        assert_eq!(
            groups_of("top-[0] right-[var(--some-value)] bottom-[0] left-[var(--some-value)]"),
            vec![
                group(&["top-[0]", "bottom-[0]"], "inset-y-[0]"),
                group(
                    &["right-[var(--some-value)]", "left-[var(--some-value)]"],
                    "inset-x-[var(--some-value)]"
                ),
            ]
        );
    }

    #[test]
    fn test_border_color_requires_same_alpha() {
        assert!(groups_of("border-t-indigo-200/50 border-b-indigo-200/40").is_empty());
        assert_eq!(
            groups_of("border-t-indigo-200/50 border-b-indigo-200/50"),
            vec![group(
                &["border-t-indigo-200/50", "border-b-indigo-200/50"],
                "border-y-indigo-200/50"
            )]
        );
    }

    #[test]
    fn test_disabled_family() {
        let tokens = tokenize("mx-2 my-2 px-2 py-2");
        let options = ShorthandOptions::default().disable("margin");
        let groups = find_groups(&tokens, &options);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].shorthand.raw, "p-2");
    }

    #[test]
    fn test_non_family_ignored() {
        assert!(groups_of("block flex grid grid-cols-3").is_empty());
    }
}
