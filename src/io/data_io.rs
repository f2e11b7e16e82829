/// 数据集 IO 实现
///
/// 输入按 UTF-8 解码并容忍开头的 BOM；输出为不带 BOM 的 UTF-8。

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use super::traits::{ModDataReader, RowSink};
use crate::record::ModRecord;
use crate::utils::ModDataError;

/// 解码 UTF-8 字节，去掉可能存在的 BOM
pub fn decode_utf8(bytes: &[u8]) -> Result<String, ModDataError> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(ModDataError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "输入不是有效的 UTF-8 文本",
        )));
    }
    Ok(text.into_owned())
}

/// 默认的数据集读取器
#[derive(Debug, Clone, Default)]
pub struct DefaultModDataReader;

impl DefaultModDataReader {
    /// 从内存中的字节解析
    pub fn parse(&self, bytes: &[u8]) -> Result<Vec<ModRecord>, ModDataError> {
        let text = decode_utf8(bytes)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl ModDataReader for DefaultModDataReader {
    fn read(&self, path: &Path) -> Result<Vec<ModRecord>, ModDataError> {
        let bytes = std::fs::read(path)?;
        self.parse(&bytes)
    }
}

/// 默认的数据文件输出
#[derive(Debug, Clone, Default)]
pub struct DefaultRowSink;

impl RowSink for DefaultRowSink {
    type Writer = BufWriter<File>;

    fn create(&self, path: &Path) -> Result<Self::Writer, ModDataError> {
        // 确保父目录存在
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        Ok(BufWriter::new(File::create(path)?))
    }
}
