use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hearth_api::{ApiClient, HearthConfig, ReqwestClient};

use super::{config, listing, slug};

#[derive(Clone, Debug, Parser)]
#[command(name = "hearth", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// TOML file layered over the defaults; HEARTH_* variables still apply
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "s", name = "slug", about = "Encode or decode gallery slugs")]
    Slug(SlugArg),
    #[command(alias = "ls", name = "properties", about = "List properties page by page")]
    Properties(PropertiesArg),
    #[command(alias = "p", name = "property", about = "Show the property behind a gallery slug")]
    Property(PropertyArg),
    #[command(alias = "cfg", name = "config", about = "Print the effective configuration")]
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct SlugArg {
    #[command(subcommand)]
    pub cmd: SlugCommands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SlugCommands {
    #[command(alias = "e", name = "encode")]
    Encode {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    #[command(alias = "d", name = "decode")]
    Decode { slug: String },
}

#[derive(Clone, Debug, Args)]
pub struct PropertiesArg {
    /// Stop after this many pages
    #[arg(long, default_value_t = 1)]
    pub pages: u32,
    /// Page size; defaults to scroll.limit from the configuration
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct PropertyArg {
    pub slug: String,
}

impl App {
    pub async fn run(self) -> Result<()> {
        match self.cmd {
            Commands::Slug(arg) => {
                match arg.cmd {
                    SlugCommands::Encode { id } => println!("{}", slug::encode(id)),
                    SlugCommands::Decode { slug } => println!("{}", slug::decode(&slug)?),
                }
                Ok(())
            }
            Commands::Config => {
                let config = load_config(self.config.as_deref())?;
                print!("{}", config::render(&config)?);
                Ok(())
            }
            Commands::Properties(arg) => {
                let config = load_config(self.config.as_deref())?;
                let client = connect(&config)?;
                listing::properties(&client, &config, arg.pages, arg.limit).await
            }
            Commands::Property(arg) => {
                let config = load_config(self.config.as_deref())?;
                let client = connect(&config)?;
                listing::property(&client, &arg.slug).await
            }
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<HearthConfig> {
    HearthConfig::load(path).context("failed to load configuration")
}

fn connect(config: &HearthConfig) -> Result<ApiClient<ReqwestClient>> {
    ApiClient::from_config(ReqwestClient::new(), config)
        .with_context(|| format!("cannot use base URL `{}`", config.api.base_url))
}
