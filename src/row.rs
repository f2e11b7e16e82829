use serde::{Deserialize, Serialize};
use crate::utils::{is_blank, ModDataError};

/// 行内字段分隔符
pub const ROW_DELIMITER: char = ';';
/// 模组 ID 列表分隔符
pub const MOD_ID_SEPARATOR: char = ',';
/// 每行字段数
pub const FIELD_COUNT: usize = 7;

/// mod_data.txt 中的一行
///
/// 格式：`curseforge;mcmod;mcbbs;modid1,modid2;中文名;副名称;缩写`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputRow {
    pub curseforge_id: String,
    pub mcmod_id: String,
    pub mcbbs_id: String,
    pub mod_ids: Vec<String>,
    pub chinese_name: String,
    pub sub_name: String,
    pub abbr: String,
}

impl OutputRow {
    /// 序列化为一行（包含结尾换行符）
    pub fn to_line(&self) -> String {
        let separator = MOD_ID_SEPARATOR.to_string();
        let mod_ids = self.mod_ids.join(separator.as_str());
        format!(
            "{curseforge}{d}{mcmod}{d}{mcbbs}{d}{mod_ids}{d}{name}{d}{sub}{d}{abbr}\n",
            curseforge = self.curseforge_id,
            mcmod = self.mcmod_id,
            mcbbs = self.mcbbs_id,
            mod_ids = mod_ids,
            name = self.chinese_name,
            sub = self.sub_name,
            abbr = self.abbr,
            d = ROW_DELIMITER,
        )
    }

    /// 从一行解析（不含换行符）
    ///
    /// 空字段保留；必须恰好 7 个字段。
    pub fn parse_line(line: &str) -> Result<Self, ModDataError> {
        let items: Vec<&str> = line.split(ROW_DELIMITER).collect();
        if items.len() != FIELD_COUNT {
            return Err(ModDataError::MalformedRow {
                line: line.to_string(),
                fields: items.len(),
            });
        }

        let mod_ids = if items[3].is_empty() {
            Vec::new()
        } else {
            items[3].split(MOD_ID_SEPARATOR).map(str::to_string).collect()
        };

        Ok(OutputRow {
            curseforge_id: items[0].to_string(),
            mcmod_id: items[1].to_string(),
            mcbbs_id: items[2].to_string(),
            mod_ids,
            chinese_name: items[4].to_string(),
            sub_name: items[5].to_string(),
            abbr: items[6].to_string(),
        })
    }

    /// 显示名称：`[缩写] 中文名 (副名称)`
    pub fn display_name(&self) -> String {
        let mut builder = String::new();
        if !is_blank(&self.abbr) {
            builder.push('[');
            builder.push_str(self.abbr.trim());
            builder.push_str("] ");
        }
        builder.push_str(&self.chinese_name);
        if !is_blank(&self.sub_name) {
            builder.push_str(" (");
            builder.push_str(&self.sub_name);
            builder.push(')');
        }
        builder
    }
}
