pub mod catalog;
pub mod error;
pub mod matcher;
pub mod options;
pub mod report;
pub mod rewriter;
pub mod tokenizer;
pub mod types;

// Re-export commonly used types
pub use error::ShorthandError;
pub use options::ShorthandOptions;
pub use report::ShorthandSink;
pub use types::{Analysis, ClassToken, MatchGroup, ShorthandGroup};

/// 分析一个 class 属性值，找出可以用简写替换的 class 组
///
/// # 示例
///
/// ```
/// use shortwind_core::analyze;
///
/// let analysis = analyze("mt-0 mr-0 mb-0 ml-1").unwrap();
/// assert_eq!(analysis.fixed_string, "my-0 mr-0 ml-1");
/// assert_eq!(analysis.groups.len(), 1);
/// assert_eq!(analysis.groups[0].source_classnames, vec!["mt-0", "mb-0"]);
/// assert_eq!(analysis.groups[0].shorthand, "my-0");
/// ```
pub fn analyze(class_value: &str) -> Result<Analysis, ShorthandError> {
    analyze_with_options(class_value, &ShorthandOptions::default())
}

/// 同 [`analyze`]，可禁用部分族
pub fn analyze_with_options(
    class_value: &str,
    options: &ShorthandOptions,
) -> Result<Analysis, ShorthandError> {
    let tokens = tokenizer::tokenize(class_value);
    let groups = matcher::find_groups(&tokens, options);
    let fixed_string = rewriter::rewrite(&tokens, &groups)?;

    Ok(Analysis {
        fixed_string,
        groups: groups.iter().map(|g| g.describe(&tokens)).collect(),
    })
}

/// 分析并把每个合并组交给 `sink`
///
/// 发生内部缺陷时不会调用 `sink`。
pub fn report_shorthands<S>(
    class_value: &str,
    options: &ShorthandOptions,
    sink: &mut S,
) -> Result<Analysis, ShorthandError>
where
    S: ShorthandSink + ?Sized,
{
    let analysis = analyze_with_options(class_value, options)?;
    for group in &analysis.groups {
        sink.report(group, &analysis.fixed_string);
    }
    Ok(analysis)
}
