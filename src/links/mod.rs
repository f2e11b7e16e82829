/// 外部站点链接解析模块
///
/// 数据集中的链接来自不同年代的站点结构（现行页面、旧版重定向、基于查询参数的论坛链接），
/// 每个站点维护一组按优先级排列的匹配规则，先命中者生效。
///
/// # 模块结构
///
/// - **curseforge**: CurseForge 项目标识（slug）
/// - **mcmod**: MC百科 class/modpack 数字 ID
/// - **mcbbs**: MCBBS 帖子 ID
///
/// # 使用示例
///
/// ```rust
/// use mod_data_parser::links::{curseforge, mcmod, mcbbs};
///
/// assert_eq!(curseforge::parse("https://www.curseforge.com/minecraft/mc-mods/jei"), "jei");
/// assert_eq!(mcmod::parse("http://www.mcmod.cn/class/1234.html"), "1234");
/// assert_eq!(mcbbs::parse("http://www.mcbbs.net/thread-555-1-1.html"), "555");
/// ```
pub mod curseforge;
pub mod mcmod;
pub mod mcbbs;

use regex::Regex;
use url::Url;

/// 单条匹配规则：正则 + 捕获 ID 的命名分组
#[derive(Debug)]
pub struct UrlRule {
    regex: Regex,
    group: &'static str,
}

impl UrlRule {
    /// 规则在编译期写死，模式非法属于程序错误
    pub fn new(pattern: &str, group: &'static str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid url rule {:?}: {}", pattern, e));
        UrlRule { regex, group }
    }

    /// 匹配并返回捕获的 ID
    pub fn capture(&self, haystack: &str) -> Option<String> {
        self.regex
            .captures(haystack)
            .and_then(|caps| caps.name(self.group))
            .map(|m| m.as_str().to_string())
    }
}

/// 按顺序尝试规则，返回第一个命中的 ID
pub fn first_match(rules: &[UrlRule], haystack: &str) -> Option<String> {
    rules.iter().find_map(|rule| rule.capture(haystack))
}

/// 解析 http/https 链接，其他协议或无法解析时返回 None
pub fn parse_web_url(url: &str) -> Option<Url> {
    let parsed = Url::parse(url).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(parsed),
        _ => None,
    }
}
