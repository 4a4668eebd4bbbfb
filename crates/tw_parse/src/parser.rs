use crate::types::ParsedClass;

/// 解析单个 Tailwind class
///
/// 支持的格式：
/// - 简单类：`p-4`, `rounded-tl-sm`, `border-t-indigo-200/50`
/// - 修饰符：`md:p-4`, `md:hover:p-4`
/// - 任意修饰符：`[&:hover]:mt-0`（方括号内的冒号不作分隔符）
/// - 重要性：`!mt-0`
/// - 负值：`-m-4`, `md:-top-1`
///
/// # 示例
///
/// ```
/// use shortwind_tw_parse::parse_class;
///
/// let parsed = parse_class("md:hover:-mt-4").unwrap();
/// assert_eq!(parsed.variants, vec!["md", "hover"]);
/// assert!(parsed.negative);
/// assert_eq!(parsed.base, "mt-4");
/// ```
pub fn parse_class(input: &str) -> Result<ParsedClass, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new(input);
    parser.parse()
}

/// 按空白切分 class 属性值，保留重复项与原始顺序
pub fn class_list(input: &str) -> impl Iterator<Item = &str> {
    input.split_whitespace()
}

/// 解析错误类型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Unmatched bracket")]
    UnmatchedBracket,
    #[error("Missing utility after variants")]
    MissingUtility,
}

/// 内部解析器
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(&mut self) -> Result<ParsedClass, ParseError> {
        // 1. 解析修饰符（modifier:modifier:...）
        let variants = self.parse_variants()?;

        // 2. 解析重要性（!）
        let important = self.consume_if(b'!');

        // 3. 解析负值标记
        let negative = self.consume_if(b'-');

        let base = &self.input[self.pos..];
        if base.is_empty() {
            return Err(ParseError::MissingUtility);
        }

        Ok(ParsedClass {
            raw: self.input.to_string(),
            variants,
            important,
            negative,
            base: base.to_string(),
        })
    }

    /// 解析修饰符列表
    ///
    /// 以最外层的 `:` 为分隔符，方括号和圆括号内的冒号属于任意值。
    /// 最后一个分隔符之后的内容是 base。
    fn parse_variants(&mut self) -> Result<Vec<String>, ParseError> {
        let bytes = self.input.as_bytes();
        let mut variants = Vec::new();
        let mut depth: usize = 0;
        let mut start = self.pos;

        for (i, &byte) in bytes.iter().enumerate().skip(self.pos) {
            match byte {
                b'[' | b'(' => depth += 1,
                b']' | b')' => {
                    depth = depth.checked_sub(1).ok_or(ParseError::UnmatchedBracket)?;
                }
                b':' if depth == 0 => {
                    let segment = &self.input[start..i];
                    if segment.is_empty() {
                        return Err(ParseError::InvalidFormat(format!(
                            "Empty variant at position {}",
                            i
                        )));
                    }
                    variants.push(segment.to_string());
                    start = i + 1;
                }
                _ => {}
            }
        }

        if depth != 0 {
            return Err(ParseError::UnmatchedBracket);
        }

        self.pos = start;
        Ok(variants)
    }

    /// 消费指定字符（如果存在）
    fn consume_if(&mut self, expected: u8) -> bool {
        if self.input.as_bytes().get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
