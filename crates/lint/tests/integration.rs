use pretty_assertions::assert_eq;
use shortwind_lint::{lint_html, lint_jsx, DiagnosticLevel, LintOptions, ShorthandOptions};

const CARD_TSX: &str = r#"import React from "react";

export function Card({ title }: { title: string }) {
    return (
        <section className="border-t-2 border-b-2 border-x-2 p-4">
            <h2 className={"scroll-mt-4 scroll-mb-4"}>{title}</h2>
            <img className="rounded-tl-lg rounded-tr-lg" />
            <p className={`md:gap-x-[10px] md:gap-y-[10px] text-sm`}>Body</p>
        </section>
    );
}
"#;

#[test]
fn test_end_to_end_tsx_component() {
    let result = lint_jsx(CARD_TSX, "Card.tsx", &LintOptions::default()).unwrap();

    let found: Vec<(Vec<String>, String)> = result
        .diagnostics
        .iter()
        .map(|d| (d.classnames.clone(), d.shorthand.clone().unwrap_or_default()))
        .collect();
    let expected: Vec<(Vec<String>, String)> = vec![
        (
            vec!["border-t-2".into(), "border-b-2".into(), "border-x-2".into()],
            "border-2".into(),
        ),
        (vec!["scroll-mt-4".into(), "scroll-mb-4".into()], "scroll-my-4".into()),
        (vec!["rounded-tl-lg".into(), "rounded-tr-lg".into()], "rounded-t-lg".into()),
        (
            vec!["md:gap-x-[10px]".into(), "md:gap-y-[10px]".into()],
            "md:gap-[10px]".into(),
        ),
    ];
    assert_eq!(found, expected);
    assert!(result
        .diagnostics
        .iter()
        .all(|d| d.level == DiagnosticLevel::Warning));

    // 每个属性值对应一个修复
    assert_eq!(result.fixes.len(), 4);
    assert!(result.code.contains(r#"<section className="border-2 p-4">"#));
    assert!(result.code.contains(r#"<h2 className={"scroll-my-4"}>"#));
    assert!(result.code.contains(r#"<img className="rounded-t-lg" />"#));
    assert!(result.code.contains("<p className={`md:gap-[10px] text-sm`}>"));

    // 修复后的源码不再产生诊断
    let again = lint_jsx(&result.code, "Card.tsx", &LintOptions::default()).unwrap();
    assert!(again.is_clean());
    assert_eq!(again.code, result.code);
}

#[test]
fn test_end_to_end_html_page() {
    let html = r#"<!doctype html>
<html>
  <body class="-mx-2 -my-2 !px-1 !py-1 lg:overflow-x-hidden lg:overflow-y-hidden">
    <main class='-mx-2 my-2 mt-0 mb-1'>unchanged</main>
  </body>
</html>"#;

    let result = lint_html(html, &LintOptions::default()).unwrap();

    let shorthands: Vec<&str> = result
        .diagnostics
        .iter()
        .filter_map(|d| d.shorthand.as_deref())
        .collect();
    assert_eq!(shorthands, vec!["-m-2", "!p-1", "lg:overflow-hidden"]);
    assert!(result.diagnostics.iter().all(|d| d.line == 3));
    assert!(result
        .code
        .contains(r#"<body class="-m-2 !p-1 lg:overflow-hidden">"#));
    assert!(result
        .code
        .contains("<main class='-mx-2 my-2 mt-0 mb-1'>unchanged</main>"));
}

#[test]
fn test_disabled_family_is_not_reported() {
    let html = r#"<div class="rounded-tl-lg rounded-tr-lg mx-1 my-1">x</div>"#;
    let options = LintOptions {
        shorthand: ShorthandOptions::default().disable("border-radius"),
        ..Default::default()
    };

    let result = lint_html(html, &options).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].shorthand.as_deref(), Some("m-1"));
    assert_eq!(
        result.code,
        r#"<div class="rounded-tl-lg rounded-tr-lg m-1">x</div>"#
    );
}

#[test]
fn test_result_serializes_camel_case() {
    let result = lint_html(r#"<i class="mt-0 mb-0"></i>"#, &LintOptions::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["code"], r#"<i class="my-0"></i>"#);
    assert_eq!(json["diagnostics"][0]["level"], "Warning");
    assert_eq!(json["diagnostics"][0]["shorthand"], "my-0");
    assert_eq!(json["fixes"][0]["replacement"], "my-0");
}
