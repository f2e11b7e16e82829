use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

use crate::io::decode_utf8;
use crate::links::mcmod::McmodKind;
use crate::row::OutputRow;
use crate::utils::{is_blank, ModDataError};

/// 模板工程里的占位 ID，不参与索引
const PLACEHOLDER_MOD_ID: &str = "examplemod";

/// mod_data.txt 的查询索引
///
/// 支持按 CurseForge slug、模组 ID 精确查找，以及按名称模糊搜索。
#[derive(Debug, Clone)]
pub struct ModTranslations {
    kind: McmodKind,
    mods: Vec<OutputRow>,
    curseforge_map: HashMap<String, usize>,
    mod_id_map: HashMap<String, usize>,
    keywords: Vec<(Vec<char>, usize)>,
}

impl ModTranslations {
    /// 由已解析的行构建索引
    pub fn new(kind: McmodKind, mods: Vec<OutputRow>) -> Self {
        let mut curseforge_map = HashMap::new();
        let mut mod_id_map = HashMap::new();
        let mut keywords = Vec::new();

        for (index, row) in mods.iter().enumerate() {
            if !is_blank(&row.curseforge_id) {
                curseforge_map.insert(row.curseforge_id.clone(), index);
            }
            for id in &row.mod_ids {
                if !is_blank(id) && id != PLACEHOLDER_MOD_ID {
                    mod_id_map.insert(id.clone(), index);
                }
            }
            for keyword in [&row.chinese_name, &row.sub_name, &row.abbr] {
                if !is_blank(keyword) {
                    keywords.push((keyword.chars().collect(), index));
                }
            }
        }

        ModTranslations {
            kind,
            mods,
            curseforge_map,
            mod_id_map,
            keywords,
        }
    }

    /// 从文件加载
    pub fn load(path: &Path, kind: McmodKind) -> Result<Self, ModDataError> {
        let bytes = std::fs::read(path)?;
        let text = decode_utf8(&bytes)?;
        Ok(Self::parse(&text, kind))
    }

    /// 解析数据文件文本
    ///
    /// `#` 开头的行和空行忽略，格式错误的行记录警告后跳过。
    pub fn parse(text: &str, kind: McmodKind) -> Self {
        let mut mods = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            match OutputRow::parse_line(line) {
                Ok(row) => mods.push(row),
                Err(e) => warn!(line = line_no + 1, "跳过无效数据行: {}", e),
            }
        }
        Self::new(kind, mods)
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn mods(&self) -> &[OutputRow] {
        &self.mods
    }

    pub fn get_by_curseforge(&self, id: &str) -> Option<&OutputRow> {
        if is_blank(id) {
            return None;
        }
        self.curseforge_map.get(id).map(|&i| &self.mods[i])
    }

    pub fn get_by_mod_id(&self, id: &str) -> Option<&OutputRow> {
        if is_blank(id) {
            return None;
        }
        self.mod_id_map.get(id).map(|&i| &self.mods[i])
    }

    /// MC百科页面地址；没有 MC百科 ID 时返回 None
    pub fn mcmod_url(&self, row: &OutputRow) -> Option<String> {
        if is_blank(&row.mcmod_id) {
            return None;
        }
        Some(self.kind.url(&row.mcmod_id))
    }

    /// 按名称模糊搜索
    ///
    /// 查询去掉空白后与每个关键字计算最长公共子序列，
    /// 长度不低于 `max(1, 查询长度 - 3)` 的保留，按得分从高到低排列。
    pub fn search(&self, query: &str) -> Vec<&OutputRow> {
        let query: Vec<char> = query.chars().filter(|c| !c.is_whitespace()).collect();

        let mut matches: Vec<(usize, usize)> = Vec::new();
        let threshold = query.len().saturating_sub(3).max(1);
        for (keyword, index) in &self.keywords {
            let score = longest_common_subsequence(&query, keyword);
            if score >= threshold {
                matches.push((score, *index));
            }
        }

        // 稳定排序，同分保持关键字顺序
        matches.sort_by(|a, b| b.0.cmp(&a.0));
        matches.into_iter().map(|(_, i)| &self.mods[i]).collect()
    }
}

impl FromStr for ModTranslations {
    type Err = ModDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s, McmodKind::Mod))
    }
}

/// 最长公共子序列长度（按字符）
pub fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
