/// CurseForge 链接解析
///
/// 只匹配 URL 的路径部分，主机名不做限制（新旧站点域名都出现过）。

use std::sync::LazyLock;
use super::{first_match, parse_web_url, UrlRule};

/// 按优先级排列的路径规则
static RULES: LazyLock<Vec<UrlRule>> = LazyLock::new(|| {
    vec![
        // 现行站点：/minecraft/mc-mods/<slug>
        UrlRule::new(
            r"^/(minecraft|Minecraft|minecraft-bedrock)/(mc-mods|modpacks|customization|mc-addons|texture-packs|customization/configuration|addons)/+(?P<modid>[\w-]+)(/(.*?))?$",
            "modid",
        ),
        // minecraft.curseforge.com/projects/<slug 或数字 ID>
        UrlRule::new(r"^/projects/(?P<modid>[\w-]+)(/(.*?))?$", "modid"),
        UrlRule::new(r"^/mc-mods/minecraft/(?P<modid>[\w-]+)(/(.*?))?$", "modid"),
        // 更早的 /legacy/mc-mods/minecraft/<数字>-<slug>
        UrlRule::new(r"^/legacy/mc-mods/minecraft/(\d+)-(?P<modid>[\w-]+)", "modid"),
    ]
});

/// 提取 CurseForge slug，无法识别时返回 None
pub fn extract(url: &str) -> Option<String> {
    let parsed = parse_web_url(url)?;
    first_match(&RULES, parsed.path())
}

/// 提取 CurseForge slug，无法识别时返回空字符串
pub fn parse(url: &str) -> String {
    extract(url).unwrap_or_default()
}
