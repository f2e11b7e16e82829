/// IO 抽象层模块
///
/// 该模块提供了数据集读取与数据文件写出的抽象接口，转换逻辑只依赖 trait，
/// 测试时可以替换为内存实现。
///
/// # 架构设计
///
/// - **traits**: 定义 Reader/Writer trait 接口
/// - **data_io**: 基于文件系统的默认实现
///
/// # 使用示例
///
/// ```rust,ignore
/// use mod_data_parser::io::{DefaultModDataReader, ModDataReader};
///
/// let reader = DefaultModDataReader;
/// let records = reader.read(Path::new("data.json"))?;
/// ```
pub mod traits;
pub mod data_io;

// === 导出 trait 定义 ===
pub use traits::{ModDataReader, RowSink};

// === 导出默认实现 ===
pub use data_io::{decode_utf8, DefaultModDataReader, DefaultRowSink};
