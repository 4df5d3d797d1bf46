use anyhow::Context;
use clap::Parser;
use numeral_text::config::cli::LocalInput;
use numeral_text::config::Settings;
use numeral_text::core::report::{render, render_check};
use numeral_text::utils::error::{ErrorSeverity, NumeralError};
use numeral_text::utils::{logger, validation::Validate};
use numeral_text::{CliConfig, NumeralText};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證命令列參數
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    // 載入 TOML 配置
    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(exit_code(&e));
        }
    };
    if let Some(Err(e)) = file_config.as_ref().map(|c| c.validate()) {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let settings = config.resolve(file_config.as_ref());

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting numeral-text");
    tracing::debug!("Resolved settings: {:?}", settings);

    let input = LocalInput::new(config.numbers.clone(), config.input.clone());
    let numerals = match input.read_numerals() {
        Ok(numerals) => numerals,
        Err(e) => fail(&e),
    };
    tracing::info!("📥 Read {} numerals", numerals.len());

    let output = match convert(&numerals, &settings) {
        Ok(output) => output,
        Err(e) => fail(&e),
    };

    let mut stdout = std::io::stdout().lock();
    if !output.is_empty() {
        writeln!(stdout, "{}", output).context("failed to write output")?;
    }
    stdout.flush().context("failed to flush output")?;

    tracing::info!("✅ Conversion completed");
    Ok(())
}

fn convert(numerals: &[String], settings: &Settings) -> numeral_text::Result<String> {
    let engine = NumeralText::with_options(settings.options);

    if settings.check {
        let results: Vec<(String, bool)> = numerals
            .iter()
            .map(|n| (n.clone(), engine.can_generate(n)))
            .collect();
        return Ok(render_check(&results));
    }

    // 不跳過錯誤時，先全部驗證再輸出
    if !settings.skip_invalid {
        for numeral in numerals {
            engine.prepare(numeral)?;
        }
    }

    let conversions = engine.generate_batch(numerals);
    let failed = conversions.iter().filter(|c| !c.is_ok()).count();
    if failed > 0 {
        tracing::warn!("⚠️ Skipped {} malformed numerals", failed);
    }

    render(&conversions, settings.format, settings.include_source)
}

fn fail(e: &NumeralError) -> ! {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &NumeralError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
