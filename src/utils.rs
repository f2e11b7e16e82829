use thiserror::Error;

/// 自定义错误类型
///
/// 校验类错误都带上记录的主名称，便于在数据集中定位。
#[derive(Error, Debug)]
pub enum ModDataError {
    #[error("Error! Mod name contains ';': {name}")]
    DelimiterInName { name: String },

    #[error("Error! Unrecognized curseforge link for mod: {name}")]
    UnrecognizedCurseforge { name: String },

    #[error("Error! Unrecognized mcmod link for mod {name}: {url}")]
    UnrecognizedMcmod { name: String, url: String },

    #[error("Error! Unrecognized mcbbs link for mod {name}: {url}")]
    UnrecognizedMcbbs { name: String, url: String },

    #[error("Error! Mod id of {name} contains ',': {mod_id}")]
    SeparatorInModId { name: String, mod_id: String },

    #[error("Error! Mod id of {name} contains ';': {mod_id}")]
    DelimiterInModId { name: String, mod_id: String },

    #[error("Illegal mod data line, 7 items expected but got {fields}: {line}")]
    MalformedRow { line: String, fields: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 记录过滤配置
///
/// 数据集中混入了一些并非模组的条目，以及一些在 CurseForge 上没有独立页面的条目。
#[derive(Debug, Clone, Copy)]
pub struct FilterConfig {
    /// 副名称命中时整条记录跳过
    pub skip: &'static [&'static str],
    /// 主名称或副名称命中时不解析 CurseForge 链接
    pub curseforge_exclusions: &'static [&'static str],
}

impl FilterConfig {
    pub const fn new() -> Self {
        Self {
            skip: &["Minecraft", "The Building Game"],
            curseforge_exclusions: &[
                "Wood Converter",
                "Link Suit",
                "Material Changer",
                "Advancement Book",
                "Showcase Item",
            ],
        }
    }

    /// 是否整条跳过
    pub fn is_skipped(&self, sub_name: &str) -> bool {
        self.skip.contains(&sub_name)
    }

    /// 是否跳过 CurseForge 链接解析
    pub fn is_curseforge_excluded(&self, main_name: &str, sub_name: &str) -> bool {
        self.curseforge_exclusions
            .iter()
            .any(|&n| n == main_name || n == sub_name)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 判断字符串是否为空白
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_set() {
        let config = FilterConfig::new();
        assert!(config.is_skipped("Minecraft"));
        assert!(config.is_skipped("The Building Game"));
        assert!(!config.is_skipped("minecraft"));
        assert!(!config.is_skipped("Applied Energistics 2"));
    }

    #[test]
    fn test_curseforge_exclusions() {
        let config = FilterConfig::new();
        assert!(config.is_curseforge_excluded("Link Suit", ""));
        assert!(config.is_curseforge_excluded("连接套装", "Link Suit"));
        assert!(!config.is_curseforge_excluded("应用能源2", "Applied Energistics 2"));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(is_blank("　"));
        assert!(!is_blank(" AE2 "));
    }
}
