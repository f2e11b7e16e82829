pub mod io;
pub mod links;
pub mod record;
pub mod row;
pub mod transform;
pub mod translations;
pub mod utils;

// 重新导出主要结构
pub use record::ModRecord;
pub use row::{OutputRow, MOD_ID_SEPARATOR, ROW_DELIMITER};
pub use transform::{convert, transform_record, ConvertStats};
pub use translations::ModTranslations;
pub use links::mcmod::McmodKind;
pub use utils::{FilterConfig, ModDataError};

// 常量定义
pub const DEFAULT_INPUT: &str = "data.json";
pub const DEFAULT_OUTPUT: &str = "data.txt";
