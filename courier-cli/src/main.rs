//! Courier CLI: forward posts into conversations and resolve avatars from the terminal.

mod commands;
mod config;
mod handlers;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{avatar, conversation, forward, post};
use rust_i18n::t;

rust_i18n::i18n!("src/locales", fallback = "en");

/// Courier CLI
#[derive(Parser)]
#[command(name = "courier")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    format: output::OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Language for output (en, zh-CN)
    #[arg(short, long, global = true, default_value = "en")]
    lang: String,

    /// Backend base URL
    #[arg(long, global = true, env = "COURIER_API_BASE")]
    api_base: Option<String>,

    /// Front-end origin used in shareable post links
    #[arg(long, global = true, env = "COURIER_APP_ORIGIN")]
    app_origin: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage authentication
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// List conversations a post can be forwarded into
    #[command(alias = "c")]
    Conversations(conversation::ConversationsArgs),

    /// Forward a post into a conversation
    #[command(alias = "fw")]
    Forward(forward::ForwardArgs),

    /// Resolve an avatar image reference
    #[command(alias = "a")]
    Avatar(avatar::AvatarArgs),

    /// Post operations
    #[command(alias = "p")]
    Post {
        #[command(subcommand)]
        action: post::PostAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Login with token and uid
    Login {
        /// Access token
        #[arg(short, long)]
        token: String,
        /// User ID
        #[arg(short, long)]
        uid: String,
    },
    /// Logout
    Logout,
    /// Show current auth status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    rust_i18n::set_locale(&cli.lang);
    init_logging(cli.verbose);

    let overrides = config::Overrides {
        api_base: cli.api_base,
        app_origin: cli.app_origin,
    };

    let command = cli
        .command
        .ok_or_else(|| anyhow::anyhow!("{}", t!("no_command")))?;

    match command {
        Commands::Auth { action } => handle_auth(action).await,
        Commands::Conversations(args) => conversation::handle(args, cli.format, &overrides).await,
        Commands::Forward(args) => forward::handle(args, cli.format, &overrides).await,
        Commands::Avatar(args) => avatar::handle(args, cli.format, &overrides),
        Commands::Post { action } => post::handle(action, cli.format, &overrides),
        Commands::Config => {
            let cfg = config::load_config()?;
            println!(
                "{}",
                t!("config_file", path = config::config_path()?.display())
            );
            println!("{}", t!("authenticated", status = cfg.auth.is_some()));
            if let Some(auth) = &cfg.auth {
                println!("{}", t!("user_id", uid = &auth.uid));
            }
            println!("{}", t!("api_base", url = cfg.api_base(&overrides)));
            println!("{}", t!("app_origin", url = cfg.app_origin(&overrides)));
            Ok(())
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_auth(action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Login { token, uid } => {
            let mut cfg = config::load_config()?;
            cfg.auth = Some(config::AuthConfig {
                token: token.clone(),
                uid: uid.clone(),
            });
            config::save_config(&cfg)?;
            println!("{}", t!("logged_in_as", uid = &uid));
            Ok(())
        }
        AuthAction::Logout => {
            let mut cfg = config::load_config()?;
            cfg.auth = None;
            config::save_config(&cfg)?;
            println!("{}", t!("logged_out"));
            Ok(())
        }
        AuthAction::Status => {
            let cfg = config::load_config()?;
            if let Some(auth) = &cfg.auth {
                println!("{}", t!("logged_in_as", uid = &auth.uid));
            } else {
                println!("{}", t!("not_logged_in"));
            }
            Ok(())
        }
    }
}
