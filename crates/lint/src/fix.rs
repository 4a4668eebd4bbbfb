use crate::Fix;

/// 将修复应用到源码
///
/// 修复之间互不重叠（每个修复对应一个属性值），从后往前替换，
/// 前面的偏移量不受影响。
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> String {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|fix| std::cmp::Reverse(fix.start));

    let mut code = source.to_string();
    let mut limit = code.len();
    for fix in ordered {
        if fix.start > fix.end
            || fix.end > limit
            || !code.is_char_boundary(fix.start)
            || !code.is_char_boundary(fix.end)
        {
            tracing::warn!(start = fix.start, end = fix.end, "overlapping or invalid fix skipped");
            continue;
        }
        code.replace_range(fix.start..fix.end, &fix.replacement);
        limit = fix.start;
    }
    code
}

/// 字节偏移 → (行, 列)，均从 1 开始，列按字符计
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
