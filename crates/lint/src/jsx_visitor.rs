use std::ops::Range;
use swc_core::common::{BytePos, Span};
use swc_core::ecma::ast::*;
use swc_core::ecma::visit::{Visit, VisitWith};

/// JSX/TSX 遍历器 —— 使用 SWC Visit 遍历 AST，
/// 找到 className / class 属性中的字符串字面量，
/// 记录其内容（不含引号）在源码中的字节范围。
///
/// 支持三种写法：
/// - `className="mt-0 mb-0"`
/// - `className={"mt-0 mb-0"}`
/// - ``className={`mt-0 mb-0`}``（无插值模板字面量）
///
/// 动态表达式（条件、函数调用、带插值的模板）不处理。
pub struct JsxClassVisitor<'a> {
    attribute_names: &'a [&'a str],
    /// 源文件在 SourceMap 中的起始位置
    start_pos: BytePos,
    ranges: Vec<Range<usize>>,
}

impl<'a> JsxClassVisitor<'a> {
    pub fn new(attribute_names: &'a [&'a str], start_pos: BytePos) -> Self {
        Self {
            attribute_names,
            start_pos,
            ranges: Vec::new(),
        }
    }

    /// 按源码顺序返回收集到的范围
    pub fn into_ranges(mut self) -> Vec<Range<usize>> {
        self.ranges.sort_by_key(|range| range.start);
        self.ranges
    }

    /// 判断 JSX 属性名是否为 class 相关属性
    fn is_class_attr(&self, name: &JSXAttrName) -> bool {
        // 命名空间属性（`xml:class`）不算
        let JSXAttrName::Ident(ident) = name else {
            return false;
        };
        let s: &str = &ident.sym;
        self.attribute_names.iter().any(|name| *name == s)
    }

    /// 记录带引号字面量的内容范围（去掉首尾引号）
    fn push_quoted(&mut self, span: Span) {
        let (Some(lo), Some(hi)) = (
            span.lo.0.checked_sub(self.start_pos.0),
            span.hi.0.checked_sub(self.start_pos.0),
        ) else {
            tracing::warn!(?span, "class literal outside of source file");
            return;
        };
        let (lo, hi) = (lo as usize, hi as usize);
        if hi >= lo + 2 {
            self.ranges.push(lo + 1..hi - 1);
        }
    }

    /// 处理花括号内的表达式
    fn visit_class_expr(&mut self, expr: &Expr) {
        match expr {
            // className={"mt-0 mb-0"}
            Expr::Lit(Lit::Str(str_lit)) => self.push_quoted(str_lit.span),
            // className={`mt-0 mb-0`}
            Expr::Tpl(tpl) if tpl.exprs.is_empty() && tpl.quasis.len() == 1 => {
                self.push_quoted(tpl.span)
            }
            // className={("mt-0 mb-0")}
            Expr::Paren(paren) => self.visit_class_expr(&paren.expr),
            _ => {
                // 动态表达式暂不处理
            }
        }
    }
}

impl Visit for JsxClassVisitor<'_> {
    fn visit_jsx_attr(&mut self, attr: &JSXAttr) {
        if self.is_class_attr(&attr.name) {
            match &attr.value {
                // className="mt-0 mb-0"
                Some(JSXAttrValue::Str(str_lit)) => self.push_quoted(str_lit.span),
                Some(JSXAttrValue::JSXExprContainer(container)) => {
                    if let JSXExpr::Expr(expr) = &container.expr {
                        self.visit_class_expr(expr);
                    }
                }
                _ => {}
            }
        }

        attr.visit_children_with(self);
    }
}
