use anyhow::{Context as _, Result};
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use hub_application::HubContext;
use hub_core::config::HubConfig;
use hub_infrastructure::ConfigService;
use hub_infrastructure::paths::HubPaths;

mod commands;
mod helper;
mod render;
mod shell;

use commands::Command;
use helper::ShellHelper;
use shell::Shell;

/// Installs a file logger under the logs directory so the interactive output
/// stays clean. `RUST_LOG` wins over the configured level.
fn init_tracing(config: &HubConfig) -> Result<WorkerGuard> {
    let logs_dir = HubPaths::logs_dir().context("Failed to resolve logs directory")?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "sales-hub.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigService::from_default_location()?.load()?;
    let _log_guard = init_tracing(&config)?;
    tracing::info!(?config, "Starting Sales Hub shell");

    let context = HubContext::bootstrap(config).await?;
    let mut shell = Shell::new(&context);

    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new()));

    println!("{}", "=== Hering Sales Hub ===".bright_magenta().bold());
    println!("{}", "Sistema de Gestão de Vendas · digite 'help'".bright_black());
    println!();

    render::navigation(&shell.start().await);

    loop {
        let prompt = format!("{}> ", shell.location());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match trimmed.parse::<Command>() {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{}", message.bright_black());
                        continue;
                    }
                };

                if matches!(command, Command::Login { .. }) && !shell.is_authenticated().await {
                    println!("{}", "Entrando...".bright_black());
                }

                match shell.execute(command).await {
                    Ok(reply) => {
                        render::reply(&reply);
                        if reply.is_quit() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Command failed");
                        eprintln!("{}", format!("Erro: {e}").red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detectado. Digite 'quit' para sair.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
