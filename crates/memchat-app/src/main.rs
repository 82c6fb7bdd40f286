use std::process::ExitCode;

use clap::Parser;
use memchat_ai::{ChatSession, GeminiClient};
use memchat_app::boot::{self, Boot};
use memchat_app::cli::ChatArgs;
use memchat_app::error::AppError;
use memchat_app::repl::Repl;
use memchat_common::SessionId;

async fn run(args: ChatArgs) -> Result<(), AppError> {
    let Boot {
        mut config,
        api_key,
    } = boot::boot(args.config.as_deref(), args.log_level.as_deref())?;
    boot::apply_overrides(&mut config, args.model.as_deref(), args.context_turns)?;

    let client = GeminiClient::new(boot::gemini_config(&api_key, &config))?;

    let session = ChatSession::new(SessionId::new()).with_context_turns(config.chat.context_turns);
    tracing::info!(session = %session.id().short(), "session started");

    println!("memchat v{}", env!("CARGO_PKG_VERSION"));
    println!("Model: {}", client.model());
    println!("API key loaded: {}", memchat_config::mask_key(&api_key));
    println!(
        "Remembering the last {} turns. Type /help for commands.\n",
        config.chat.context_turns
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let mut repl = Repl::new(session, &client)
        .with_preview(config.chat.history_preview, config.chat.preview_chars);
    repl.run(stdin, &mut stdout).await?;

    tracing::info!(
        turns = repl.session().memory_count(),
        "session ended"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = ChatArgs::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Startup(e)) => {
            boot::report_boot_error(&e);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = ?e.ai_error(), "client setup failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
