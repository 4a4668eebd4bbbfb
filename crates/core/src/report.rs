use crate::types::ShorthandGroup;

/// 诊断接收方
///
/// 宿主（lint 引擎、编辑器插件等）实现此 trait，负责定位源码偏移、
/// 组织消息文本并应用修复。核心只提供语义内容。
pub trait ShorthandSink {
    /// 每个合并组调用一次，按第一个 class 出现顺序。
    /// `fixed` 是整个 class 属性值修复后的字符串。
    fn report(&mut self, group: &ShorthandGroup, fixed: &str);
}

impl<F> ShorthandSink for F
where
    F: FnMut(&ShorthandGroup, &str),
{
    fn report(&mut self, group: &ShorthandGroup, fixed: &str) {
        self(group, fixed)
    }
}
