use breeze_core::{Config, Favourites, provider::openweather::OpenWeatherProvider};
use clap::Parser;

/// Top-level CLI struct. The whole surface is the interactive menu, so
/// there are no flags or subcommands beyond clap's `--help`/`--version`.
#[derive(Debug, Parser)]
#[command(
    name = "breeze",
    version,
    about = "Interactive weather lookup with favourite cities"
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        // Missing credential is the one fatal error: bail before any prompt.
        let config = Config::from_env()?;

        let provider = OpenWeatherProvider::new(config.api_key);
        let mut favourites = Favourites::new();

        crate::menu::run(&provider, &mut favourites).await
    }
}
