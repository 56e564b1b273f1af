use anyhow::Context;
use clap::Parser;
use leaf_doctor::{cli, config, ingest, progress, report, sampler, session};
use leaf_doctor::workflow::{WorkflowController, WorkflowOptions};
use cli::{Cli, Commands};
use config::Config;
use leaf_doctor_common::SeverityGroup;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// 設定とCLI引数からコントローラを生成（カタログはここで検証される）
fn build_controller(
    config: &Config,
    seed: Option<u64>,
    fast: bool,
) -> leaf_doctor::Result<WorkflowController> {
    let catalog = Arc::new(config.load_catalog()?);
    let seed = match seed {
        Some(seed) => Some(seed),
        None => config.effective_seed()?,
    };
    let time_scale = if fast { 0.0 } else { config.time_scale };

    WorkflowController::seeded(
        catalog,
        seed,
        WorkflowOptions::default().with_time_scale(time_scale),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { images, output, seed, fast } => {
            println!("🌿 leaf-doctor - 葉の診断\n");
            let controller = build_controller(&config, seed, fast)?;

            // 1. 画像読み込み
            println!("[1/3] 画像を読み込み中...");
            let files = images
                .iter()
                .map(|path| ingest::read_file(path))
                .collect::<leaf_doctor::Result<Vec<_>>>()?;
            if files.len() > 1 {
                println!("  {}件指定されたため先頭のみ使用します", files.len());
            }

            let outcome = controller.select_first_image(
                files
                    .iter()
                    .map(|f| (f.bytes.as_slice(), f.content_type.as_str())),
            );
            if let Some(hint) = session::ignored_hint(outcome) {
                println!("  {}", hint);
                return Ok(());
            }
            let file = &files[0];
            println!(
                "✔ {} ({}, {} bytes)\n",
                file.file_name,
                file.content_type,
                file.bytes.len()
            );

            // 2. 疑似AI解析
            println!("[2/3] AI解析中...");
            let result = progress::analyze_with_progress(&controller).await?;
            let record = controller.lookup(&result.disease_key)?;
            println!("\n{}", report::render_result(&result, record));

            // 3. 結果保存
            if let Some(path) = output {
                println!("[3/3] 結果を保存中...");
                let state = controller.snapshot();
                if let Some(image) = state.selected_image.as_ref() {
                    let analysis_report =
                        report::AnalysisReport::new(&file.file_name, image, &result, record);
                    analysis_report
                        .save(&path)
                        .with_context(|| format!("write {}", path.display()))?;
                    println!("✔ 結果を保存: {}", path.display());
                }
            }

            println!("\n✅ 診断完了");
        }

        Commands::Catalog { severity, json } => {
            let catalog = config.load_catalog()?;
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.records())?);
            } else {
                print!("{}", report::render_catalog(&catalog, severity));
            }
        }

        Commands::Show { key } => {
            let catalog = config.load_catalog()?;
            let record = catalog
                .lookup(&key)
                .with_context(|| format!("病害キー '{}' はデータベースにありません", key))?;
            print!("{}", report::render_record(record));
        }

        Commands::Sample { runs, seed } => {
            let catalog = config.load_catalog()?;
            let seed = match seed {
                Some(seed) => seed,
                None => config.effective_seed()?.unwrap_or_else(rand::random),
            };

            println!("🎲 分類ポリシーを{}回サンプリング (seed={})\n", runs, seed);
            let summary = sampler::sample(&catalog, runs, seed)?;

            for (group, expected) in [
                (SeverityGroup::Healthy, 15.0),
                (SeverityGroup::High, 15.0),
                (SeverityGroup::Common, 70.0),
            ] {
                println!(
                    "  {:<8} {:>6.2}%  (期待値 {:.0}%)",
                    group,
                    summary.share(group) * 100.0,
                    expected
                );
            }
            if let (Some(min), Some(max)) = (summary.min_confidence, summary.max_confidence) {
                println!("  確信度の範囲: {}% - {}%", min, max);
            }
        }

        Commands::Session { seed, fast } => {
            let controller = build_controller(&config, seed, fast)?;
            session::run_session(&controller, seed).await?;
        }

        Commands::Config { set_time_scale, set_seed, clear_seed, set_catalog, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(scale) = set_time_scale {
                config.set_time_scale(scale)?;
                changed = true;
            }
            if let Some(seed) = set_seed {
                config.seed = Some(seed);
                changed = true;
            }
            if clear_seed {
                config.seed = None;
                changed = true;
            }
            if let Some(path) = set_catalog {
                let path = path
                    .canonicalize()
                    .with_context(|| format!("read {}", path.display()))?;
                config.catalog_path = Some(path);
                config.load_catalog()?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  待機倍率: {}", config.time_scale);
                println!(
                    "  乱数シード: {}",
                    config.seed.map_or("未設定".to_string(), |s| s.to_string())
                );
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map_or("組み込み".to_string(), |p| p.display().to_string())
                );
            }
        }
    }

    Ok(())
}
