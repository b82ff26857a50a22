//! ALua Sentinel CLI: analyze texts from arguments or stdin, or an image file.

use alua_sentinel::{
    config::SentinelConfig, logging::StructuredLogger, report::BatchItem, Sentinel,
};
use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "alua-sentinel", version, about = "Heuristic AI-generated content classifier")]
struct Cli {
    /// Texts to analyze; more than one runs as a batch
    texts: Vec<String>,
    /// Read one text from stdin
    #[arg(long)]
    stdin: bool,
    /// Analyze an image file (placeholder classifier)
    #[arg(long)]
    image: Option<PathBuf>,
    /// Print an integrity certificate per result
    #[arg(long)]
    certificate: bool,
    /// Print results as JSON lines
    #[arg(long)]
    json: bool,
    /// Print system info and exit
    #[arg(long)]
    status: bool,
    /// Config file (defaults: ALUA_CONFIG_PATH, ./config.json, platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(p) = explicit {
        return p;
    }
    if let Ok(p) = std::env::var("ALUA_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    let local = PathBuf::from("config.json");
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|d| d.join("alua-sentinel").join("config.json"))
        .unwrap_or(local)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.clone());
    let config = SentinelConfig::load(&config_path);

    StructuredLogger::init(&config.log);
    info!(config = %config_path.display(), version = %config.version, "ALua Sentinel starting");

    let sentinel = Sentinel::new(config);
    sentinel.initialize().await;

    if cli.status {
        StructuredLogger::emit_json(&sentinel.system_info(), &mut std::io::stdout().lock())?;
        return Ok(());
    }

    if let Some(path) = &cli.image {
        let data = tokio::fs::read(path).await?;
        let result = sentinel.analyze_image(&data)?;
        StructuredLogger::emit_json(&result, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    let mut texts = cli.texts;
    if cli.stdin {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        texts.push(buf);
    }
    if texts.is_empty() {
        return Err("no input: pass texts as arguments or use --stdin".into());
    }

    let items = sentinel.analyze_batch(&texts).await;
    let mut out = std::io::stdout().lock();
    for item in &items {
        match item {
            BatchItem::Analyzed(result) if cli.certificate => {
                writeln!(out, "{}\n", sentinel.generate_certificate(result))?;
            }
            BatchItem::Analyzed(result) if !cli.json => {
                writeln!(
                    out,
                    "{} ai={} confidence={:.3} integrity={:.3}",
                    result.id, result.is_ai_generated, result.confidence, result.integrity_score
                )?;
                for reason in &result.reasons {
                    writeln!(out, "  - {}", reason)?;
                }
            }
            BatchItem::Failed(f) if !cli.json => {
                writeln!(out, "#{} failed: {} ({})", f.index, f.error, f.preview)?;
            }
            _ => StructuredLogger::emit_json(item, &mut out)?,
        }
    }
    Ok(())
}
