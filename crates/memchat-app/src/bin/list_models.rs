//! Print every Gemini model available to the configured API key.

use std::process::ExitCode;

use clap::Parser;
use memchat_ai::GeminiClient;
use memchat_app::boot;
use memchat_app::cli::ListArgs;
use memchat_app::listing::write_models;

#[tokio::main]
async fn main() -> ExitCode {
    let args = ListArgs::parse();

    let started = match boot::boot(args.config.as_deref(), args.log_level.as_deref()) {
        Ok(started) => started,
        Err(e) => {
            boot::report_boot_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let client = match GeminiClient::new(boot::gemini_config(&started.api_key, &started.config)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error fetching models: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Fetching available Gemini models...\n");

    let mut stdout = std::io::stdout();
    match write_models(client.list_models(), args.method.as_deref(), &mut stdout).await {
        Ok(count) => {
            tracing::info!(count, "listed models");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
