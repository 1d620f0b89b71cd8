mod config;
mod models;
mod scraper;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::models::LeagueData;
use crate::scraper::{League, StandingsSource, TerraScraper};

#[derive(Parser)]
#[command(name = "brasileirao", about = "Campeonato Brasileiro standings & fixtures scraper", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch standings and rounds for a league, print JSON to stdout
    Fetch {
        #[arg(value_enum)]
        league: LeagueArg,

        /// Standings only; the output then carries no "rodadas" key
        #[arg(long)]
        skip_rounds: bool,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Fetch the standings table only
    Standings {
        #[arg(value_enum)]
        league: LeagueArg,
    },

    /// Print the four upstream endpoint URLs
    Urls,
}

#[derive(Clone, Copy, ValueEnum)]
enum LeagueArg {
    SerieA,
    SerieB,
}

impl From<LeagueArg> for League {
    fn from(arg: LeagueArg) -> Self {
        match arg {
            LeagueArg::SerieA => League::SerieA,
            LeagueArg::SerieB => League::SerieB,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "brasileirao=info,warn",
        1 => "brasileirao=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::new(filter))
        .init();

    let config = AppConfig::load()?;

    match cli.command {
        Command::Fetch {
            league,
            skip_rounds,
            pretty,
        } => {
            let scraper = TerraScraper::new(&config.scraper)?;
            let data = match League::from(league) {
                League::SerieA => scraper.serie_a(!skip_rounds).await?,
                League::SerieB => scraper.serie_b(!skip_rounds).await?,
            };
            print_json(&data, pretty)?;
        }

        Command::Standings { league } => {
            let scraper = TerraScraper::new(&config.scraper)?;
            let tabela = scraper.fetch_standings(league.into()).await?;
            println!("{}", serde_json::to_string(&tabela)?);
        }

        Command::Urls => {
            for league in [League::SerieA, League::SerieB] {
                println!("{} standings : {}", league.name(), league.standings_url());
                println!("{} rounds    : {}", league.name(), league.rounds_url());
            }
        }
    }

    Ok(())
}

fn print_json(data: &LeagueData, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    println!("{}", json);
    Ok(())
}
