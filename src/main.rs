use clap::Parser;
use futures::future::AbortHandle;
use tracing::Level;

use spo_cli::cli::{Cli, Commands, FileCheckoutOptions, FileCommands};
use spo_cli::client::SpoClient;
use spo_cli::error::{CommandError, Error, Result};
use spo_cli::file_checkout::FileCheckoutCommand;
use spo_cli::session::Session;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        if json {
            eprintln!("{}", json_error(&err));
        } else {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let session = cli.session();

    match cli.command {
        Commands::File {
            command: FileCommands::Checkout(options),
        } => checkout(session, options).await,
    }
}

async fn checkout(session: Session, options: FileCheckoutOptions) -> Result<()> {
    init_tracing(&options);
    options.validate()?;

    let command = FileCheckoutCommand::new(SpoClient::new()?);

    let (handle, registration) = AbortHandle::new_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.abort();
        }
    });

    let mut stdout = std::io::stdout();
    command
        .action(&session, &options, registration, &mut stdout)
        .await
}

fn init_tracing(options: &FileCheckoutOptions) {
    let level = if options.debug {
        Level::DEBUG
    } else if options.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn json_error(err: &Error) -> String {
    let payload = match err {
        Error::Command(inner) => inner.clone(),
        other => CommandError::new(other.to_string()),
    };

    serde_json::to_string(&payload).unwrap_or_else(|_| err.to_string())
}
