use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mod_data_parser::io::{DefaultModDataReader, DefaultRowSink, ModDataReader, RowSink};
use mod_data_parser::{
    convert, FilterConfig, McmodKind, ModTranslations, OutputRow, DEFAULT_INPUT, DEFAULT_OUTPUT,
};

#[derive(Parser)]
#[command(name = "mod_data_parser")]
#[command(about = "将模组 JSON 数据集转换为 mod_data.txt")]
#[command(version)]
struct Cli {
    /// 输入 JSON 文件路径
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// 输出数据文件路径
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,

    /// 查询模式：在输出数据文件中按名称模糊搜索
    #[arg(long)]
    search: Option<String>,

    /// 查询模式：按 CurseForge slug 查找
    #[arg(long)]
    curseforge: Option<String>,

    /// 查询模式：按模组 ID 查找
    #[arg(long)]
    modid: Option<String>,

    /// 查询时按整合包生成 MC百科 链接
    #[arg(long)]
    modpack: bool,
}

impl Cli {
    fn is_query(&self) -> bool {
        self.search.is_some() || self.curseforge.is_some() || self.modid.is_some()
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = if cli.is_query() {
        handle_query(&cli)
    } else {
        handle_conversion(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// 处理数据集转换
fn handle_conversion(cli: &Cli) -> anyhow::Result<()> {
    let records = DefaultModDataReader
        .read(&cli.input)
        .with_context(|| format!("读取数据集失败: {:?}", cli.input))?;

    let mut writer = DefaultRowSink
        .create(&cli.output)
        .with_context(|| format!("创建输出文件失败: {:?}", cli.output))?;

    let stats = convert(&records, &FilterConfig::new(), &mut writer)?;

    if !cli.quiet {
        println!("Success!");
        println!("写出 {} 行，跳过 {} 条记录", stats.written, stats.skipped);
        println!("结果已写入: {:?}", cli.output);
    }

    Ok(())
}

/// 处理查询模式
fn handle_query(cli: &Cli) -> anyhow::Result<()> {
    let translations = load_translations(&cli.output, cli.modpack)?;

    if let Some(id) = &cli.curseforge {
        print_lookup(&translations, translations.get_by_curseforge(id), id);
    }

    if let Some(id) = &cli.modid {
        print_lookup(&translations, translations.get_by_mod_id(id), id);
    }

    if let Some(query) = &cli.search {
        let results = translations.search(query);
        if results.is_empty() {
            println!("没有匹配 \"{}\" 的模组", query);
        }
        for (i, row) in results.iter().take(10).enumerate() {
            print_row(&translations, i + 1, row);
        }
        if results.len() > 10 {
            println!("... 还有 {} 个结果", results.len() - 10);
        }
    }

    Ok(())
}

/// 加载数据文件
fn load_translations(path: &Path, modpack: bool) -> anyhow::Result<ModTranslations> {
    let kind = if modpack { McmodKind::Modpack } else { McmodKind::Mod };
    ModTranslations::load(path, kind).with_context(|| format!("读取数据文件失败: {:?}", path))
}

fn print_lookup(translations: &ModTranslations, row: Option<&OutputRow>, id: &str) {
    match row {
        Some(row) => print_row(translations, 1, row),
        None => println!("未找到: {}", id),
    }
}

fn print_row(translations: &ModTranslations, index: usize, row: &OutputRow) {
    println!("{}. {}", index, row.display_name());
    if let Some(url) = translations.mcmod_url(row) {
        println!("   {}", url);
    }
}
