/// 简写检测错误
#[derive(Debug, thiserror::Error)]
pub enum ShorthandError {
    /// 同一个 class 被两个合并组消耗，属于内部缺陷
    #[error("class '{class}' at position {position} is consumed by more than one shorthand group")]
    TokenConsumedTwice { class: String, position: usize },

    #[error("shorthand group references position {position} but only {len} classes exist")]
    SourceOutOfRange { position: usize, len: usize },

    #[error("unknown shorthand family '{0}'")]
    UnknownFamily(String),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl ShorthandError {
    /// 是否为内部缺陷（而非配置问题）
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            ShorthandError::TokenConsumedTwice { .. } | ShorthandError::SourceOutOfRange { .. }
        )
    }
}
