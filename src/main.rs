use std::path::PathBuf;

use clap::{
    Args, CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotify_image_downloader::{
    cli::{self, DownloadOptions},
    config, error, success,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// URL or URI of the Spotify resource
    #[clap(required_unless_present_any = ["clear", "completions"])]
    id: Option<String>,

    /// Output file
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// List the available images instead of downloading the largest one
    #[clap(long, conflicts_with = "output")]
    list: bool,

    /// Location of the credential file
    #[clap(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[clap(flatten)]
    authorization: AuthorizationOptions,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,
}

#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Authorization")]
struct AuthorizationOptions {
    /// Spotify client ID. Only required on first run
    #[clap(long)]
    client_id: Option<String>,

    /// Spotify client secret. Only required on first run
    #[clap(long)]
    client_secret: Option<String>,

    /// Use the provided authorization without overwriting the saved configuration
    #[clap(long)]
    one_time: bool,

    /// Remove the current saved Spotify client configuration
    #[clap(long)]
    clear: bool,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let config_path = match cli.config {
        Some(path) => match config::absolute_path(path) {
            Ok(path) => path,
            Err(e) => error!("Cannot resolve credential file path. Err: {}", e),
        },
        None => config::credentials_path(),
    };

    if cli.authorization.clear {
        match cli::clear(&config_path).await {
            Ok(()) => success!("Cleared saved credentials in {}", config_path.display()),
            Err(e) => error!("{}", e),
        }
        return;
    }

    let Some(id) = cli.id else {
        error!("A Spotify URL or URI is required.");
    };

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => error!("Cannot determine the current directory. Err: {}", e),
    };

    let options = DownloadOptions {
        id,
        output: cli.output,
        client_id: cli.authorization.client_id,
        client_secret: cli.authorization.client_secret,
        one_time: cli.authorization.one_time,
        config_path,
        working_dir,
        endpoints: config::Endpoints::from_env(),
    };

    if cli.list {
        if let Err(e) = cli::list_images(options).await {
            error!("{}", e);
        }
        return;
    }

    match cli::download(options).await {
        Ok(path) => success!("Saved image to {}", path.display()),
        Err(e) => error!("{}", e),
    }
}
