pub mod collector;
pub mod fix;
pub mod html;
pub mod jsx_visitor;

use jsx_visitor::JsxClassVisitor;
use serde::{Deserialize, Serialize};
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, SourceMap};
use swc_core::ecma::ast::*;
use swc_core::ecma::parser::{parse_file_as_module, EsSyntax, Syntax, TsSyntax};
use swc_core::ecma::visit::VisitWith;

// Re-exports
pub use collector::ShorthandCollector;
pub use shortwind_core::{ShorthandError, ShorthandOptions};

/// lint 选项
///
/// JSON 示例：
/// ```json
/// {
///   "classAttributes": ["class", "className", "tw"],
///   "skipClassAttribute": false,
///   "shorthand": { "disabledFamilies": ["scale"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintOptions {
    /// 简写检测选项
    pub shorthand: ShorthandOptions,
    /// 需要检查的属性名（默认 `class` 与 `className`）
    pub class_attributes: Vec<String>,
    /// 跳过普通的 `class` 属性（只检查其它属性，如 `className`）
    pub skip_class_attribute: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            shorthand: ShorthandOptions::default(),
            class_attributes: vec!["class".to_string(), "className".to_string()],
            skip_class_attribute: false,
        }
    }
}

impl LintOptions {
    /// 从 JSON 字符串加载并校验
    pub fn from_json(json_str: &str) -> Result<Self, LintError> {
        let options: Self = serde_json::from_str(json_str)?;
        options.shorthand.validate()?;
        Ok(options)
    }

    /// 实际检查的属性名
    pub fn attribute_names(&self) -> Vec<&str> {
        self.class_attributes
            .iter()
            .map(String::as_str)
            .filter(|name| !(self.skip_class_attribute && *name == "class"))
            .collect()
    }
}

/// lint 错误
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Shorthand(#[from] ShorthandError),
    #[error("invalid lint options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    /// 可以替换为简写
    Warning,
    /// 检测过程出现内部缺陷，该属性值未被修改
    Error,
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// 属性值在源码中的字节范围（不含引号）
    pub start: usize,
    pub end: usize,
    /// 属性值起始位置（从 1 开始）
    pub line: usize,
    pub column: usize,
    /// 可被替换的 class（按原始顺序）
    pub classnames: Vec<String>,
    pub shorthand: Option<String>,
}

/// 一次文本替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// lint 结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    /// 应用所有修复后的源码
    pub code: String,
    pub diagnostics: Vec<Diagnostic>,
    pub fixes: Vec<Fix>,
}

impl LintResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// 检查 JSX/TSX 源码
///
/// 遍历 AST，对 `className="..."` 和 `class="..."` 中的字符串字面量
/// 运行简写检测。
///
/// # 参数
///
/// - `source`: JSX/TSX 源码字符串
/// - `filename`: 文件名（用于判断语法类型：.tsx/.jsx/.ts/.js）
/// - `options`: lint 选项
///
/// # 示例
///
/// ```no_run
/// use shortwind_lint::{lint_jsx, LintOptions};
///
/// let source = r#"
///     export default function App() {
///         return <div className="mx-4 my-4">Hello</div>;
///     }
/// "#;
///
/// let result = lint_jsx(source, "App.tsx", &LintOptions::default()).unwrap();
/// for diagnostic in &result.diagnostics {
///     println!("{}:{} {}", diagnostic.line, diagnostic.column, diagnostic.message);
/// }
/// println!("Fixed:\n{}", result.code);
/// ```
pub fn lint_jsx(source: &str, filename: &str, options: &LintOptions) -> Result<LintResult, LintError> {
    options.shorthand.validate()?;

    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom(filename.to_string()).into(),
        source.to_string(),
    );

    let mut errors = vec![];
    let module = parse_file_as_module(&fm, syntax_for(filename), EsVersion::latest(), None, &mut errors)
        .map_err(|e| LintError::Parse(format!("{:?}", e)))?;

    if !errors.is_empty() {
        return Err(LintError::Parse(format!("{:?}", errors)));
    }

    let attribute_names = options.attribute_names();
    let mut visitor = JsxClassVisitor::new(&attribute_names, fm.start_pos);
    module.visit_with(&mut visitor);
    let ranges = visitor.into_ranges();

    tracing::debug!(filename, class_values = ranges.len(), "linting JSX source");

    let mut collector = ShorthandCollector::new(source, &options.shorthand);
    for range in ranges {
        collector.process_class_value(range);
    }
    Ok(collector.finish())
}

/// 检查 HTML 源码
///
/// 扫描 HTML 中的 `class="..."` 属性（以及选项中配置的其它属性名）。
///
/// # 示例
///
/// ```
/// use shortwind_lint::{lint_html, LintOptions};
///
/// let html = r#"<div class="overflow-x-auto overflow-y-auto block">x</div>"#;
/// let result = lint_html(html, &LintOptions::default()).unwrap();
/// assert_eq!(result.code, r#"<div class="overflow-auto block">x</div>"#);
/// assert_eq!(result.diagnostics.len(), 1);
/// ```
pub fn lint_html(source: &str, options: &LintOptions) -> Result<LintResult, LintError> {
    options.shorthand.validate()?;

    let attribute_names = options.attribute_names();
    let ranges = html::scan_class_attributes(source, &attribute_names);

    tracing::debug!(class_values = ranges.len(), "linting HTML source");

    let mut collector = ShorthandCollector::new(source, &options.shorthand);
    for range in ranges {
        collector.process_class_value(range);
    }
    Ok(collector.finish())
}

/// 根据文件名选择语法
fn syntax_for(filename: &str) -> Syntax {
    if filename.ends_with(".tsx") {
        Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        })
    } else if filename.ends_with(".ts") {
        Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        })
    } else {
        // .jsx / .js 默认支持 JSX
        Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        })
    }
}
