use crate::fix::line_column;
use crate::{Diagnostic, DiagnosticLevel, Fix, LintResult};
use shortwind_core::{report_shorthands, ShorthandGroup, ShorthandOptions, ShorthandSink};
use std::ops::Range;

/// 诊断收集器 —— 对源码中的每个 class 属性值运行简写检测，
/// 收集诊断信息和对应的修复。
pub struct ShorthandCollector<'a> {
    source: &'a str,
    options: &'a ShorthandOptions,
    diagnostics: Vec<Diagnostic>,
    fixes: Vec<Fix>,
}

/// 单个 class 属性值的诊断接收方
struct OccurrenceSink<'d> {
    diagnostics: &'d mut Vec<Diagnostic>,
    range: Range<usize>,
    line: usize,
    column: usize,
}

impl ShorthandSink for OccurrenceSink<'_> {
    fn report(&mut self, group: &ShorthandGroup, _fixed: &str) {
        self.diagnostics.push(Diagnostic {
            level: DiagnosticLevel::Warning,
            message: format!(
                "Classnames '{}' could be replaced by the '{}' shorthand!",
                group.source_classnames.join(", "),
                group.shorthand
            ),
            start: self.range.start,
            end: self.range.end,
            line: self.line,
            column: self.column,
            classnames: group.source_classnames.clone(),
            shorthand: Some(group.shorthand.clone()),
        });
    }
}

impl<'a> ShorthandCollector<'a> {
    pub fn new(source: &'a str, options: &'a ShorthandOptions) -> Self {
        Self {
            source,
            options,
            diagnostics: Vec::new(),
            fixes: Vec::new(),
        }
    }

    /// 处理一个 class 属性值（`range` 为其在源码中的字节范围，不含引号）
    ///
    /// 有可合并的组时记录一个修复：用修复后的字符串替换整个属性值。
    /// 内部缺陷只产生一条 Error 级诊断，不产生修复。
    pub fn process_class_value(&mut self, range: Range<usize>) {
        let Some(value) = self.source.get(range.clone()) else {
            tracing::warn!(?range, "class value range is not a valid slice of the source");
            return;
        };
        if value.trim().is_empty() {
            return;
        }

        let (line, column) = line_column(self.source, range.start);
        let mut sink = OccurrenceSink {
            diagnostics: &mut self.diagnostics,
            range: range.clone(),
            line,
            column,
        };

        match report_shorthands(value, self.options, &mut sink) {
            Ok(analysis) if analysis.has_shorthands() => {
                tracing::debug!(
                    line,
                    groups = analysis.groups.len(),
                    "shorthand candidates found"
                );
                self.fixes.push(Fix {
                    start: range.start,
                    end: range.end,
                    replacement: analysis.fixed_string,
                });
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(line, column, error = %err, "class value skipped");
                self.diagnostics.push(Diagnostic {
                    level: DiagnosticLevel::Error,
                    message: format!("Shorthand detection aborted: {}", err),
                    start: range.start,
                    end: range.end,
                    line,
                    column,
                    classnames: Vec::new(),
                    shorthand: None,
                });
            }
        }
    }

    /// 目前为止收集到的诊断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 消费 self，应用所有修复并返回结果
    pub fn finish(self) -> LintResult {
        let code = crate::fix::apply_fixes(self.source, &self.fixes);
        LintResult {
            code,
            diagnostics: self.diagnostics,
            fixes: self.fixes,
        }
    }
}
