use std::ops::Range;

/// 扫描 HTML 源码中的 class 属性，返回每个属性值（不含引号）的字节范围。
///
/// 使用简单的状态机解析，避免引入正则依赖：
/// - 只在开始标签 `<tag ...>` 内部识别属性，正文文本被忽略
/// - 其它属性的引号值整体跳过（`title='class="..."'` 不会被误判）
/// - 注释、`<script>`/`<style>` 的内容被跳过
///
/// 支持双引号和单引号，未加引号的属性值被忽略。
pub fn scan_class_attributes(source: &str, attribute_names: &[&str]) -> Vec<Range<usize>> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < len {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        // <!-- ... -->
        if bytes[i..].starts_with(b"<!--") {
            i = find(bytes, i + 4, b"-->").map_or(len, |end| end + 3);
            continue;
        }

        // 只处理开始标签（'<' 后紧跟字母），`</div>`、`<!doctype>`、`a < b` 都跳过
        if !bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic) {
            i += 1;
            continue;
        }

        let (tag_end, tag_name) = scan_tag(bytes, i + 1, attribute_names, &mut ranges);
        i = tag_end;

        let tag_name = &bytes[tag_name];
        if tag_name.eq_ignore_ascii_case(b"script") || tag_name.eq_ignore_ascii_case(b"style") {
            i = find_closing_tag(bytes, i, tag_name).unwrap_or(len);
        }
    }

    ranges
}

/// 扫描一个开始标签的属性列表，`i` 指向标签名第一个字节
///
/// 返回标签结束后的位置以及标签名范围。
fn scan_tag(
    bytes: &[u8],
    mut i: usize,
    attribute_names: &[&str],
    ranges: &mut Vec<Range<usize>>,
) -> (usize, Range<usize>) {
    let len = bytes.len();
    let name_start = i;
    i = skip_name(bytes, i);
    let tag_name = name_start..i;

    loop {
        i = skip_whitespace(bytes, i);
        match bytes.get(i) {
            None => return (len, tag_name),
            Some(b'>') => return (i + 1, tag_name),
            Some(b'/') => {
                i += 1;
                continue;
            }
            _ => {}
        }

        let attr_start = i;
        i = skip_name(bytes, i);
        if i == attr_start {
            // 游离的 '=' 等字符
            i += 1;
            continue;
        }
        let attr_name = &bytes[attr_start..i];

        // 无值属性（如 `disabled`）
        i = skip_whitespace(bytes, i);
        if bytes.get(i) != Some(&b'=') {
            continue;
        }
        i = skip_whitespace(bytes, i + 1);

        match bytes.get(i) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                let value_start = i + 1;
                let Some(value_end) = find(bytes, value_start, &[quote]) else {
                    // 引号未闭合，丢弃剩余内容
                    return (len, tag_name);
                };
                if matches_attr_name(attr_name, attribute_names) {
                    ranges.push(value_start..value_end);
                }
                i = value_end + 1;
            }
            _ => {
                while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
            }
        }
    }
}

/// 属性名精确匹配（区别于 className、data-class 等）
fn matches_attr_name(attr_name: &[u8], attribute_names: &[&str]) -> bool {
    attribute_names
        .iter()
        .any(|name| !name.is_empty() && name.as_bytes() == attr_name)
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// 标签名 / 属性名：直到空白、'='、'>' 或 '/'
fn skip_name(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len()
        && !bytes[i].is_ascii_whitespace()
        && !matches!(bytes[i], b'=' | b'>' | b'/')
    {
        i += 1;
    }
    i
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

/// 查找 `</name`（忽略大小写），返回其起始位置
fn find_closing_tag(bytes: &[u8], from: usize, name: &[u8]) -> Option<usize> {
    let mut i = from;
    while let Some(pos) = find(bytes, i, b"</") {
        let name_start = pos + 2;
        if bytes
            .get(name_start..name_start + name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
        {
            return Some(pos);
        }
        i = name_start;
    }
    None
}
