mod api;
mod appsettings;
mod form;
mod host;
mod notify;
mod reminder;
mod session;
mod terminal;

#[cfg(test)]
mod test_utils;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tokio::io::{BufReader, stdin, stdout};

use api::{HttpTaskApi, TaskApi};
use appsettings::AppSettings;
use form::EditReminderForm;
use notify::ConsoleNotifier;
use session::Session;
use terminal::TerminalBoard;

/// Edit a reminder and save it to the task service.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// JSON file holding the reminder record to edit
    #[arg(short, long)]
    reminder: PathBuf,

    /// Identifier of the user the reminder belongs to
    #[arg(short, long)]
    user: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let cli = Cli::parse();
    let settings = AppSettings::new().context("Could not load application settings")?;
    log::info!("Using task service at {}", settings.api.base_url);

    let reminder = reminder::load_from_file(&cli.reminder).await?;
    let api: Arc<dyn TaskApi> =
        Arc::new(HttpTaskApi::new(&settings.api).context("Could not create HTTP client")?);

    let board = Arc::new(TerminalBoard::new());
    board.open_with(reminder).await;

    let mut form = EditReminderForm::new(
        api,
        board.clone(),
        Arc::new(ConsoleNotifier),
        settings.form.close_on,
    );
    let session = Session::new(cli.user);

    terminal::run_dialogue(
        &mut form,
        &board,
        &session,
        BufReader::new(stdin()),
        stdout(),
    )
    .await?;

    log::info!(
        "Edit session finished [refreshes = {}]",
        board.refreshes().await
    );
    Ok(())
}
