/// IO 抽象层 - trait 定义

use std::io::Write;
use std::path::Path;
use crate::record::ModRecord;
use crate::utils::ModDataError;

/// 数据集读取 trait
///
/// # 职责
/// - 读取 JSON 数据集并反序列化为记录列表，保持输入顺序
pub trait ModDataReader {
    /// 读取数据集
    ///
    /// # 参数
    /// * `path` - JSON 文件路径
    fn read(&self, path: &Path) -> Result<Vec<ModRecord>, ModDataError>;
}

/// 数据文件输出 trait
///
/// # 职责
/// - 打开输出目标，转换逻辑只向返回的 writer 逐行写入
pub trait RowSink {
    type Writer: Write;

    /// 创建（覆盖）输出目标
    fn create(&self, path: &Path) -> Result<Self::Writer, ModDataError>;
}
