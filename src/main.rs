use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use turbo_config::config::{FixedDir, MaskedToken, PathResolver, UserConfig, UserConfigStore};
use turbo_config::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "turbo-config", version, about = "Manage the stored user login and team settings")]
struct Cli {
    /// Use DIR instead of the platform config directory
    #[arg(long, value_name = "DIR", global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the path of the user config file
    Path,
    /// Print the effective settings (token masked)
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store a bearer token
    Login {
        #[arg(long)]
        token: String,
        #[arg(long)]
        api_url: Option<String>,
        #[arg(long)]
        login_url: Option<String>,
    },
    /// Select a team
    Link {
        #[arg(long)]
        team_id: String,
        #[arg(long)]
        team_slug: Option<String>,
    },
    /// Clear the selected team
    Unlink,
    /// Clear all stored settings
    Logout,
}

fn main() {
    init_tracing("warn");
    let cli = Cli::parse();

    let result = match cli.config_dir {
        Some(dir) => run(cli.command, UserConfigStore::with_resolver(FixedDir::new(dir))),
        None => run(cli.command, UserConfigStore::new()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run<R: PathResolver>(command: Command, store: UserConfigStore<R>) -> Result<()> {
    match command {
        Command::Path => {
            let path = store.user_config_path()?;
            println!("{}", path.display());
        }
        Command::Show { json } => {
            let mut config = store.read().unwrap_or_else(|e| e.into_config());
            config.apply_env_overrides();
            print_config(&config, json)?;
        }
        Command::Login {
            token,
            api_url,
            login_url,
        } => {
            store
                .update(|c| {
                    c.token = token;
                    if let Some(url) = api_url {
                        c.api_url = url;
                    }
                    if let Some(url) = login_url {
                        c.login_url = url;
                    }
                })
                .context("failed to save login")?;
            println!("Logged in");
        }
        Command::Link { team_id, team_slug } => {
            let config = store
                .update(|c| {
                    c.team_id = team_id;
                    c.team_slug = team_slug.unwrap_or_default();
                })
                .context("failed to save team")?;
            println!("Linked to team {}", display_team(&config));
        }
        Command::Unlink => {
            store
                .update(|c| {
                    c.team_id.clear();
                    c.team_slug.clear();
                })
                .context("failed to clear team")?;
            println!("Unlinked");
        }
        Command::Logout => {
            store.reset().context("failed to reset user config")?;
            println!("Logged out");
        }
    }
    Ok(())
}

fn print_config(config: &UserConfig, json: bool) -> Result<()> {
    let token = MaskedToken(&config.token).to_string();
    if json {
        let value = serde_json::json!({
            "token": token,
            "teamId": config.team_id,
            "apiUrl": config.api_url,
            "loginUrl": config.login_url,
            "teamSlug": config.team_slug,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("token:     {}", token);
        println!("teamId:    {}", config.team_id);
        println!("teamSlug:  {}", config.team_slug);
        println!("apiUrl:    {}", config.api_url);
        println!("loginUrl:  {}", config.login_url);
    }
    Ok(())
}

fn display_team(config: &UserConfig) -> &str {
    if config.team_slug.is_empty() {
        &config.team_id
    } else {
        &config.team_slug
    }
}
