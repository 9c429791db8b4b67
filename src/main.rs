use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use battery_required::{app, config, i18n, vehicle_db::VehicleDb};

#[derive(Parser, Debug)]
#[command(author, version, about = "Battery Required: EV trip charge calculator (CLI)", long_about = None)]
struct Cli {
    /// 언어 코드 (auto/en-us/ko-kr)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_from(&cli.config)?;
    let resolved = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&resolved, cfg.language_pack_dir.as_deref());
    let mut db = VehicleDb::load_or_default(&cfg.vehicle_store_path);
    app::run(&mut cfg, &tr, &mut db)?;
    Ok(())
}
