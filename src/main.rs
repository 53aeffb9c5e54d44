use clap::Parser;
use modal_fixes::core::{ConfigProvider, Storage};
use modal_fixes::utils::{logger, validation::Validate};
use modal_fixes::{write_status, AssetError, AssetWriter, CliConfig, LocalStorage, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置 (logger 尚未初始化，直接輸出到 stderr)
    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref(), settings.log_format);

    tracing::info!("Starting modal-fixes");
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        fail("Configuration validation failed", e);
    }

    let storage = LocalStorage::from_config(&settings);
    let writer = AssetWriter::new(storage, settings.filename());

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        let plan = writer.plan();
        println!(
            "Would write {} bytes to {}{}",
            plan.bytes,
            plan.path.display(),
            if plan.target_exists { " (replacing existing file)" } else { "" }
        );
        return Ok(());
    }

    if cli.check {
        if let Err(e) = writer.ensure_current() {
            fail("Check failed", e);
        }
        let path = writer.storage().resolve(settings.filename());
        println!("✅ {} is up to date", path.display());
        return Ok(());
    }

    match writer.write() {
        Ok(report) => {
            tracing::debug!(
                "Wrote {} bytes (replaced existing: {})",
                report.bytes_written,
                report.replaced_existing
            );
            write_status(&mut std::io::stdout().lock())?;
        }
        Err(e) => fail("Writing the stylesheet failed", e),
    }

    Ok(())
}

fn fail(context: &str, e: AssetError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
