use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use shortwind_core::{analyze_with_options, ShorthandOptions};
use shortwind_lint::{
    lint_html as rs_lint_html, lint_jsx as rs_lint_jsx, Diagnostic, DiagnosticLevel, LintOptions,
    LintResult,
};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsLintOptions {
    /// 不传时使用默认的 `["class", "className"]`
    #[serde(default)]
    class_attributes: Option<Vec<String>>,
    #[serde(default)]
    skip_class_attribute: bool,
    #[serde(default)]
    disabled_families: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDiagnostic {
    /// "warning" | "error"
    level: &'static str,
    message: String,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
    classnames: Vec<String>,
    shorthand: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLintResult {
    code: String,
    diagnostics: Vec<JsDiagnostic>,
}

// ── 类型转换 ──────────────────────────────────────────────────

impl From<JsLintOptions> for LintOptions {
    fn from(opts: JsLintOptions) -> Self {
        let defaults = LintOptions::default();
        LintOptions {
            shorthand: ShorthandOptions {
                disabled_families: opts.disabled_families,
            },
            class_attributes: opts.class_attributes.unwrap_or(defaults.class_attributes),
            skip_class_attribute: opts.skip_class_attribute,
        }
    }
}

impl From<Diagnostic> for JsDiagnostic {
    fn from(d: Diagnostic) -> Self {
        JsDiagnostic {
            level: match d.level {
                DiagnosticLevel::Warning => "warning",
                DiagnosticLevel::Error => "error",
            },
            message: d.message,
            start: d.start,
            end: d.end,
            line: d.line,
            column: d.column,
            classnames: d.classnames,
            shorthand: d.shorthand,
        }
    }
}

impl From<LintResult> for JsLintResult {
    fn from(result: LintResult) -> Self {
        JsLintResult {
            code: result.code,
            diagnostics: result.diagnostics.into_iter().map(Into::into).collect(),
        }
    }
}

fn parse_options(options: JsValue) -> Result<JsLintOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsLintOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 分析单个 class 属性值
///
/// @param value   - class 属性值，如 "mt-0 mb-0 block"
/// @param options - `{ disabledFamilies }`，可选
/// @returns `{ fixedString, groups: [{ sourceClassnames, shorthand }] }`
#[wasm_bindgen(js_name = "analyze")]
pub fn analyze(value: &str, options: JsValue) -> Result<JsValue, JsError> {
    let opts: LintOptions = parse_options(options)?.into();
    opts.shorthand
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))?;
    let analysis =
        analyze_with_options(value, &opts.shorthand).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&analysis)
}

/// 检查 JSX/TSX 源码
///
/// @param source   - JSX/TSX 源码字符串
/// @param filename - 文件名（如 "App.tsx"），用于判断语法
/// @param options  - lint 选项，可选
/// @returns `{ code, diagnostics }`
#[wasm_bindgen(js_name = "lintJsx")]
pub fn lint_jsx(source: &str, filename: &str, options: JsValue) -> Result<JsValue, JsError> {
    let opts: LintOptions = parse_options(options)?.into();
    let result = rs_lint_jsx(source, filename, &opts).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&JsLintResult::from(result))
}

/// 检查 HTML 源码
///
/// @param source  - HTML 源码字符串
/// @param options - lint 选项，可选
/// @returns `{ code, diagnostics }`
#[wasm_bindgen(js_name = "lintHtml")]
pub fn lint_html(source: &str, options: JsValue) -> Result<JsValue, JsError> {
    let opts: LintOptions = parse_options(options)?.into();
    let result = rs_lint_html(source, &opts).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&JsLintResult::from(result))
}
