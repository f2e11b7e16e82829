use std::io::Write;
use tracing::{debug, info};

use crate::links::{curseforge, mcbbs, mcmod};
use crate::record::{ModRecord, SITE_CURSEFORGE, SITE_MCBBS, SITE_MCMOD};
use crate::row::{OutputRow, MOD_ID_SEPARATOR, ROW_DELIMITER};
use crate::utils::{FilterConfig, ModDataError};

/// 批量转换统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// 写出的行数
    pub written: usize,
    /// 按跳过名单忽略的记录数
    pub skipped: usize,
}

/// 校验并转换单条记录
///
/// 返回 `Ok(None)` 表示记录在跳过名单中。任何校验失败都直接返回错误，由调用方终止整批转换。
pub fn transform_record(
    record: &ModRecord,
    config: &FilterConfig,
) -> Result<Option<OutputRow>, ModDataError> {
    let name = &record.name;
    if config.is_skipped(&name.sub) {
        return Ok(None);
    }

    if name.main.contains(ROW_DELIMITER) || name.sub.contains(ROW_DELIMITER) {
        return Err(ModDataError::DelimiterInName { name: name.main.clone() });
    }

    let mut curseforge_id = String::new();
    if let Some(links) = record.site_links(SITE_CURSEFORGE).filter(|l| !l.is_empty()) {
        if !config.is_curseforge_excluded(&name.main, &name.sub) {
            curseforge_id = links
                .iter()
                .find_map(|link| curseforge::extract(&link.url))
                .ok_or_else(|| ModDataError::UnrecognizedCurseforge { name: name.main.clone() })?;
        }
    }

    let mut mcmod_id = String::new();
    if let Some(link) = record.site_links(SITE_MCMOD).and_then(|l| l.first()) {
        mcmod_id = mcmod::extract(&link.url).ok_or_else(|| ModDataError::UnrecognizedMcmod {
            name: name.main.clone(),
            url: link.url.clone(),
        })?;
    }

    let mut mcbbs_id = String::new();
    if let Some(link) = record.site_links(SITE_MCBBS).and_then(|l| l.first()) {
        mcbbs_id = mcbbs::extract(&link.url).ok_or_else(|| ModDataError::UnrecognizedMcbbs {
            name: name.main.clone(),
            url: link.url.clone(),
        })?;
    }

    let mut mod_ids = Vec::with_capacity(record.mod_ids().len());
    for id in record.mod_ids() {
        if id.contains(MOD_ID_SEPARATOR) {
            return Err(ModDataError::SeparatorInModId {
                name: name.main.clone(),
                mod_id: id.clone(),
            });
        }
        if id.contains(ROW_DELIMITER) {
            return Err(ModDataError::DelimiterInModId {
                name: name.main.clone(),
                mod_id: id.clone(),
            });
        }
        mod_ids.push(id.clone());
    }

    Ok(Some(OutputRow {
        curseforge_id,
        mcmod_id,
        mcbbs_id,
        mod_ids,
        chinese_name: name.main.clone(),
        sub_name: name.sub.clone(),
        abbr: name.abbr.clone(),
    }))
}

/// 按输入顺序逐条转换并写出
///
/// 遇到第一条错误即停止；此前已写出的行保留在 writer 中。
pub fn convert<W: Write>(
    records: &[ModRecord],
    config: &FilterConfig,
    writer: &mut W,
) -> Result<ConvertStats, ModDataError> {
    let mut stats = ConvertStats::default();

    for record in records {
        let row = match transform_record(record, config) {
            Ok(Some(row)) => row,
            Ok(None) => {
                debug!(name = %record.name.main, sub = %record.name.sub, "跳过非模组条目");
                stats.skipped += 1;
                continue;
            }
            Err(e) => {
                writer.flush()?;
                return Err(e);
            }
        };
        writer.write_all(row.to_line().as_bytes())?;
        stats.written += 1;
    }

    writer.flush()?;
    info!(written = stats.written, skipped = stats.skipped, "转换完成");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FilterConfig {
        FilterConfig::new()
    }

    #[test]
    fn test_full_record() {
        let record = ModRecord::new("示例模组", "Example Mod", "EM")
            .with_link(SITE_CURSEFORGE, "https://www.curseforge.com/minecraft/mc-mods/examplemod")
            .with_link(SITE_MCMOD, "http://www.mcmod.cn/class/42.html")
            .with_mod_id("examplemod_id");

        let row = transform_record(&record, &config()).unwrap().unwrap();
        assert_eq!(row.to_line(), "examplemod;42;;examplemod_id;示例模组;Example Mod;EM\n");
    }

    #[test]
    fn test_skipped_record() {
        let record = ModRecord::new("我的世界", "Minecraft", "")
            .with_link(SITE_CURSEFORGE, "https://example.com/broken");
        assert!(transform_record(&record, &config()).unwrap().is_none());
    }

    #[test]
    fn test_delimiter_in_name() {
        let record = ModRecord::new("坏;名字", "Bad", "");
        assert!(matches!(
            transform_record(&record, &config()),
            Err(ModDataError::DelimiterInName { name }) if name == "坏;名字"
        ));

        let record = ModRecord::new("好名字", "Bad;Sub", "");
        assert!(matches!(
            transform_record(&record, &config()),
            Err(ModDataError::DelimiterInName { .. })
        ));
    }

    #[test]
    fn test_curseforge_tries_links_in_order() {
        let record = ModRecord::new("测试", "Test", "")
            .with_link(SITE_CURSEFORGE, "https://www.curseforge.com/members/author")
            .with_link(SITE_CURSEFORGE, "https://minecraft.curseforge.com/projects/test-mod")
            .with_link(SITE_CURSEFORGE, "https://www.curseforge.com/minecraft/mc-mods/other");

        let row = transform_record(&record, &config()).unwrap().unwrap();
        assert_eq!(row.curseforge_id, "test-mod");
    }

    #[test]
    fn test_curseforge_unrecognized() {
        let record = ModRecord::new("测试", "Test", "")
            .with_link(SITE_CURSEFORGE, "https://www.curseforge.com/members/author");
        assert!(matches!(
            transform_record(&record, &config()),
            Err(ModDataError::UnrecognizedCurseforge { .. })
        ));
    }

    #[test]
    fn test_curseforge_exclusion() {
        let record = ModRecord::new("连接套装", "Link Suit", "")
            .with_link(SITE_CURSEFORGE, "https://www.curseforge.com/members/author");
        let row = transform_record(&record, &config()).unwrap().unwrap();
        assert_eq!(row.curseforge_id, "");
    }

    #[test]
    fn test_only_first_mcmod_and_mcbbs_link() {
        let record = ModRecord::new("测试", "Test", "")
            .with_link(SITE_MCMOD, "http://www.mcmod.cn/class/1.html")
            .with_link(SITE_MCMOD, "broken")
            .with_link(SITE_MCBBS, "http://www.mcbbs.net/forum.php?mod=viewthread&tid=777");
        let row = transform_record(&record, &config()).unwrap().unwrap();
        assert_eq!(row.mcmod_id, "1");
        assert_eq!(row.mcbbs_id, "777");

        let record = ModRecord::new("测试", "Test", "")
            .with_link(SITE_MCMOD, "broken")
            .with_link(SITE_MCMOD, "http://www.mcmod.cn/class/1.html");
        assert!(matches!(
            transform_record(&record, &config()),
            Err(ModDataError::UnrecognizedMcmod { url, .. }) if url == "broken"
        ));

        let record = ModRecord::new("测试", "Test", "")
            .with_link(SITE_MCBBS, "http://www.mcbbs.net/home.php");
        assert!(matches!(
            transform_record(&record, &config()),
            Err(ModDataError::UnrecognizedMcbbs { .. })
        ));
    }

    #[test]
    fn test_mod_id_separators() {
        let record = ModRecord::new("测试", "Test", "").with_mod_id("a,b");
        assert!(matches!(
            transform_record(&record, &config()),
            Err(ModDataError::SeparatorInModId { mod_id, .. }) if mod_id == "a,b"
        ));

        let record = ModRecord::new("测试", "Test", "").with_mod_id("a;b");
        assert!(matches!(
            transform_record(&record, &config()),
            Err(ModDataError::DelimiterInModId { .. })
        ));
    }

    #[test]
    fn test_convert_keeps_rows_before_error() {
        let records = vec![
            ModRecord::new("一", "One", "").with_mod_id("one"),
            ModRecord::new("我的世界", "Minecraft", ""),
            ModRecord::new("二", "Two", "").with_mod_id("two"),
            ModRecord::new("坏;", "Bad", ""),
            ModRecord::new("三", "Three", ""),
        ];

        let mut out = Vec::new();
        let result = convert(&records, &config(), &mut out);
        assert!(matches!(result, Err(ModDataError::DelimiterInName { .. })));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ";;;one;一;One;\n;;;two;二;Two;\n"
        );
    }

    #[test]
    fn test_convert_stats() {
        let records = vec![
            ModRecord::new("一", "One", ""),
            ModRecord::new("积木", "The Building Game", ""),
            ModRecord::new("二", "Two", "T"),
        ];

        let mut out = Vec::new();
        let stats = convert(&records, &config(), &mut out).unwrap();
        assert_eq!(stats, ConvertStats { written: 2, skipped: 1 });
        assert_eq!(String::from_utf8(out).unwrap(), ";;;;一;One;\n;;;;二;Two;T\n");
    }
}
