use clap::{Parser, Subcommand};
use leaf_doctor_common::Severity;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leaf-doctor")]
#[command(about = "葉の写真から植物の病害を判定するデモツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 葉の写真を解析して診断結果を表示
    Analyze {
        /// 画像ファイル（複数指定時は先頭のみ使用）
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// 診断レポートのJSON出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 乱数シード（設定ファイルより優先）
        #[arg(long)]
        seed: Option<u64>,

        /// フェーズの待機を省略
        #[arg(long)]
        fast: bool,
    },

    /// 病害データベースを一覧表示
    Catalog {
        /// 重症度で絞り込み (none/low/medium/high/critical)
        #[arg(short, long)]
        severity: Option<Severity>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 病害の詳細を表示
    Show {
        /// 病害キー（例: tomato_late_blight）
        #[arg(required = true)]
        key: String,
    },

    /// 分類ポリシーの分布をサンプリング
    Sample {
        /// 試行回数
        #[arg(short = 'n', long, default_value = "10000")]
        runs: usize,

        /// 乱数シード
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 対話モードで解析を繰り返す
    Session {
        /// 乱数シード
        #[arg(long)]
        seed: Option<u64>,

        /// フェーズの待機を省略
        #[arg(long)]
        fast: bool,
    },

    /// 設定を表示/編集
    Config {
        /// フェーズ待機時間の倍率を設定
        #[arg(long)]
        set_time_scale: Option<f64>,

        /// 乱数シードを設定
        #[arg(long)]
        set_seed: Option<u64>,

        /// 乱数シードを解除
        #[arg(long)]
        clear_seed: bool,

        /// カスタムカタログJSONを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
