//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexicon")]
#[command(about = "UI 翻譯解析工具 - UI translation resolver")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 指定設定檔路徑 (Specify configuration file path)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 語系檔目錄 (Directory of <locale>.toml files)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// 指定語系 (Active locale, e.g. zh-TW)
    #[arg(short, long, global = true)]
    pub locale: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 翻譯鍵值 (Translate a key path)
    #[command(visible_alias = "t")]
    Translate {
        /// 鍵值路徑 (Key path, e.g. store.addRepeatContentTips)
        key: String,
        /// 參數 NAME=VALUE (Placeholder parameter)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// 顯示來源語系 (Show which locale supplied the text)
        #[arg(long)]
        explain: bool,
    },

    /// 列出鍵值 (List key paths of the active locale)
    #[command(visible_alias = "ls")]
    Keys {
        /// 命名空間 (Only this namespace)
        namespace: Option<String>,
    },

    /// 列出語系 (List registered locales)
    Locales,

    /// 檢查語系 (Check the active locale against the fallback locale)
    Check,
}

/// Parse a `NAME=VALUE` placeholder parameter
pub fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("Invalid parameter '{}'. Expected NAME=VALUE", s)),
    }
}
