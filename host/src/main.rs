//! # sweeper
//!
//! 无窗口运行扫雷特效：按命令行翻开/爆破格子，推进若干帧后导出画面。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p sweeper-host -- --reveal 0,0 --frames 10 --output frame.png
//! sweeper --config config.json --reveal 2,3 --reveal 5,5 --cascade
//! sweeper --demolish 4,4 --verbose
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sweeper_host::{App, AppConfig, RevealOutcome, create_sound_loader, logging, parse_cell};
use sweeper_runtime::hint_map;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sweeper")]
#[command(about = "扫雷特效引擎 - 无窗口帧渲染")]
#[command(version)]
struct Cli {
    /// 配置文件（默认：config.json）
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// 推进帧数
    #[arg(short, long, default_value = "30")]
    frames: u32,

    /// 导出最后一帧为 PNG
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 翻开格子（row,col），可重复
    #[arg(short, long, value_parser = parse_cell)]
    reveal: Vec<(usize, usize)>,

    /// 爆破格子（row,col），可重复
    #[arg(short, long, value_parser = parse_cell)]
    demolish: Vec<(usize, usize)>,

    /// 翻开零提示格子时连锁翻开
    #[arg(long)]
    cascade: bool,

    /// 输出 debug 日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 日志级别取决于配置，读取结果在日志初始化之后再报告
    let loaded = AppConfig::load_optional(&cli.config);
    let verbose = cli.verbose || matches!(&loaded, Ok(Some(config)) if config.debug.verbose);
    logging::init(verbose);

    let mut config = match loaded {
        Ok(Some(config)) => {
            info!(path = %cli.config.display(), "配置文件加载成功");
            config
        }
        Ok(None) => {
            warn!(path = %cli.config.display(), "配置文件不存在，使用默认配置");
            AppConfig::default()
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("无法加载配置文件: {}", cli.config.display()));
        }
    };
    // 命令行优先于配置文件
    if cli.cascade {
        config.board.cascade = true;
    }
    config.debug.verbose = verbose;

    config.validate().context("配置无效")?;

    let sounds = create_sound_loader(&config);
    let mut app = App::new(config, sounds).context("应用初始化失败")?;

    for &(row, col) in &cli.demolish {
        app.demolish(row, col);
    }
    for &(row, col) in &cli.reveal {
        if app.reveal(row, col) == RevealOutcome::Exploded {
            info!(row, col, "游戏结束");
        }
    }

    app.run_frames(cli.frames);

    if let Some(output) = &cli.output {
        app.save_frame(output)
            .with_context(|| format!("无法写出画面: {}", output.display()))?;
        info!(path = %output.display(), "画面已导出");
    }

    info!(
        score = app.board().score(),
        cleared = app.board().is_cleared(),
        frames = app.frame(),
        active_effects = app.effects().len(),
        "运行结束"
    );
    println!("{}", hint_map(app.board().mines()));

    Ok(())
}
