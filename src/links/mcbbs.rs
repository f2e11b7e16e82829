/// MCBBS 链接解析
///
/// 帖子有两种链接形式：静态化的 `/thread-<tid>-<页>-<N>.html`，
/// 以及 `forum.php?mod=viewthread&tid=<tid>`。

use std::sync::LazyLock;
use url::Url;
use super::{first_match, parse_web_url, UrlRule};

const MCBBS_HOST: &str = "www.mcbbs.net";

static THREAD_RULES: LazyLock<Vec<UrlRule>> = LazyLock::new(|| {
    vec![UrlRule::new(r"^/thread-(?P<modid>\d+)-(\d+)-(\d+)\.html", "modid")]
});

/// 提取帖子 ID，无法识别时返回 None
pub fn extract(url: &str) -> Option<String> {
    let parsed = parse_web_url(url)?;
    if parsed.host_str() != Some(MCBBS_HOST) {
        return None;
    }

    first_match(&THREAD_RULES, parsed.path()).or_else(|| extract_forum_php(&parsed))
}

/// 提取帖子 ID，无法识别时返回空字符串
pub fn parse(url: &str) -> String {
    extract(url).unwrap_or_default()
}

/// `forum.php?mod=viewthread&tid=<tid>`，重复的参数取第一个
fn extract_forum_php(url: &Url) -> Option<String> {
    if url.path() != "/forum.php" {
        return None;
    }

    let query_value = |key: &str| {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    };

    if query_value("mod").as_deref() != Some("viewthread") {
        return None;
    }
    query_value("tid").filter(|tid| !tid.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_url() {
        assert_eq!(parse("http://www.mcbbs.net/thread-555-1-1.html"), "555");
        assert_eq!(parse("https://www.mcbbs.net/thread-38297-3-2.html"), "38297");
    }

    #[test]
    fn test_forum_php() {
        assert_eq!(parse("http://www.mcbbs.net/forum.php?mod=viewthread&tid=777"), "777");
        assert_eq!(parse("http://www.mcbbs.net/forum.php?tid=777&mod=viewthread&page=2"), "777");
        assert_eq!(parse("http://www.mcbbs.net/forum.php?mod=viewthread&tid=1&tid=2"), "1");
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(parse("http://mcbbs.net/thread-555-1-1.html"), "");
        assert_eq!(parse("http://www.example.com/thread-555-1-1.html"), "");
        assert_eq!(parse("ftp://www.mcbbs.net/thread-555-1-1.html"), "");
        assert_eq!(parse("http://www.mcbbs.net/forum.php?mod=forumdisplay&fid=1"), "");
        assert_eq!(parse("http://www.mcbbs.net/forum.php?mod=viewthread"), "");
        assert_eq!(parse("http://www.mcbbs.net/home.php?mod=viewthread&tid=777"), "");
        assert_eq!(parse("http://www.mcbbs.net/thread-abc-1-1.html"), "");
    }
}
