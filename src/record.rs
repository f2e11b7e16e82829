use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 站点键：CurseForge
pub const SITE_CURSEFORGE: &str = "curseforge";
/// 站点键：MC百科
pub const SITE_MCMOD: &str = "mcmod";
/// 站点键：MCBBS
pub const SITE_MCBBS: &str = "mcbbs";

/// 输入数据集中的一条模组记录
///
/// 只声明转换需要的字段，其余字段在反序列化时忽略。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModRecord {
    pub name: ModName,
    #[serde(default)]
    pub links: ModLinks,
    #[serde(default)]
    pub modid: ModIdList,
}

/// 模组名称
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModName {
    /// 主名称（中文名）
    pub main: String,
    /// 副名称（通常是英文原名）
    #[serde(default)]
    pub sub: String,
    /// 缩写
    #[serde(default)]
    pub abbr: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModLinks {
    /// 站点键 -> 链接列表
    #[serde(default)]
    pub list: HashMap<String, Vec<Link>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModIdList {
    #[serde(default)]
    pub list: Option<Vec<String>>,
}

impl ModRecord {
    /// 创建只有名称的记录
    pub fn new(main: &str, sub: &str, abbr: &str) -> Self {
        ModRecord {
            name: ModName {
                main: main.to_string(),
                sub: sub.to_string(),
                abbr: abbr.to_string(),
            },
            ..Default::default()
        }
    }

    /// 追加一个站点链接
    pub fn with_link(mut self, site: &str, url: &str) -> Self {
        self.links
            .list
            .entry(site.to_string())
            .or_default()
            .push(Link { url: url.to_string() });
        self
    }

    /// 追加一个模组 ID
    pub fn with_mod_id(mut self, id: &str) -> Self {
        self.modid.list.get_or_insert_with(Vec::new).push(id.to_string());
        self
    }

    /// 获取某个站点的全部链接；站点不存在时返回 None
    pub fn site_links(&self, site: &str) -> Option<&[Link]> {
        self.links.list.get(site).map(Vec::as_slice)
    }

    /// 显式声明的模组 ID
    pub fn mod_ids(&self) -> &[String] {
        self.modid.list.as_deref().unwrap_or(&[])
    }
}
