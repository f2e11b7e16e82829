/// MC百科链接解析
///
/// 整条 URL 参与匹配：主机必须是 `www.mcmod.cn`，路径为 `/class/<数字>.html` 或 `/modpack/<数字>.html`。

use std::sync::LazyLock;
use super::{first_match, UrlRule};

static RULES: LazyLock<Vec<UrlRule>> = LazyLock::new(|| {
    vec![UrlRule::new(
        r"^https?://www\.mcmod\.cn/(class|modpack)/(?P<modid>\d+)\.html$",
        "modid",
    )]
});

/// MC百科页面类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McmodKind {
    Mod,
    Modpack,
}

impl McmodKind {
    /// 由 ID 拼出页面地址
    pub fn url(self, id: &str) -> String {
        match self {
            McmodKind::Mod => format!("https://www.mcmod.cn/class/{}.html", id),
            McmodKind::Modpack => format!("https://www.mcmod.cn/modpack/{}.html", id),
        }
    }
}

/// 提取 MC百科 ID，无法识别时返回 None
pub fn extract(url: &str) -> Option<String> {
    first_match(&RULES, url)
}

/// 提取 MC百科 ID，无法识别时返回空字符串
pub fn parse(url: &str) -> String {
    extract(url).unwrap_or_default()
}
