use crate::catalog;
use crate::error::ShorthandError;
use serde::{Deserialize, Serialize};

/// 简写检测选项
///
/// JSON 示例：
/// ```json
/// { "disabledFamilies": ["scale", "border-radius"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShorthandOptions {
    /// 不参与检测的族名（如 "margin"、"border-radius"）
    pub disabled_families: Vec<String>,
}

impl ShorthandOptions {
    /// 从 JSON 字符串加载并校验
    pub fn from_json(json_str: &str) -> Result<Self, ShorthandError> {
        let options: Self = serde_json::from_str(json_str)?;
        options.validate()?;
        Ok(options)
    }

    /// 所有禁用的族名都必须存在于族表中
    pub fn validate(&self) -> Result<(), ShorthandError> {
        match self
            .disabled_families
            .iter()
            .find(|name| catalog::family(name).is_none())
        {
            Some(unknown) => Err(ShorthandError::UnknownFamily(unknown.clone())),
            None => Ok(()),
        }
    }

    /// 禁用某个族
    pub fn disable(mut self, family: impl Into<String>) -> Self {
        self.disabled_families.push(family.into());
        self
    }

    pub fn is_enabled(&self, family: &str) -> bool {
        !self.disabled_families.iter().any(|name| name == family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let options = ShorthandOptions::default();
        for family in catalog::FAMILIES {
            assert!(options.is_enabled(family.name));
        }
    }

    #[test]
    fn test_from_json() {
        let options = ShorthandOptions::from_json(r#"{ "disabledFamilies": ["scale"] }"#).unwrap();
        assert!(!options.is_enabled("scale"));
        assert!(options.is_enabled("margin"));
    }

    #[test]
    fn test_from_json_empty_object() {
        let options = ShorthandOptions::from_json("{}").unwrap();
        assert_eq!(options, ShorthandOptions::default());
    }

    #[test]
    fn test_unknown_family_rejected() {
        let err = ShorthandOptions::from_json(r#"{ "disabledFamilies": ["marg"] }"#).unwrap_err();
        assert!(matches!(err, ShorthandError::UnknownFamily(name) if name == "marg"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = ShorthandOptions::from_json("{ disabledFamilies: ").unwrap_err();
        assert!(matches!(err, ShorthandError::InvalidOptions(_)));
        assert!(!err.is_defect());
    }
}
