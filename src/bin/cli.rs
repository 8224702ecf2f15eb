use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};

use trendrank::files::{self, DEFAULT_NAMES_FILE, DEFAULT_RANKINGS_FILE};
use trendrank::{
    GoogleTrendsProvider, InterestOracle, NameLengthScorer, RankEngine, RankOptions, RateLimiter,
    TrendProvider, TrendScorer, WindowScorer,
};

#[derive(Parser)]
#[command(name = "trendrank")]
#[command(about = "Rank game names by public interest via Google Trends", long_about = None)]
struct Cli {
    /// Running without a subcommand ranks names.txt into rankings.txt
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the names in the input file
    Rank {
        /// Input file, one game name per line
        #[arg(short, long, default_value = DEFAULT_NAMES_FILE)]
        input: String,

        /// Output rankings file
        #[arg(short, long, default_value = DEFAULT_RANKINGS_FILE)]
        output: String,

        /// Names per provider request
        #[arg(short, long, default_value = "5")]
        batch_size: usize,

        /// Scoring backend
        #[arg(long, value_enum, default_value = "trends")]
        scorer: ScorerKind,

        /// Seconds between provider calls
        #[arg(long, default_value = "5")]
        spacing: u64,

        /// Seconds between calls after the provider pushes back
        #[arg(long, default_value = "60")]
        penalty: u64,

        /// Attempts per provider call before giving up
        #[arg(long, default_value = "5")]
        max_attempts: u32,
    },

    /// Check whether the trend provider is reachable
    Check,
}

impl Default for Commands {
    /// The parameterless run: full pipeline on the fixed default paths
    fn default() -> Self {
        Commands::Rank {
            input: DEFAULT_NAMES_FILE.to_string(),
            output: DEFAULT_RANKINGS_FILE.to_string(),
            batch_size: RankOptions::default().batch_size,
            scorer: ScorerKind::Trends,
            spacing: 5,
            penalty: 60,
            max_attempts: 5,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScorerKind {
    /// Live Google Trends interest data
    Trends,
    /// Offline name-length proxy
    Length,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Rank {
            input,
            output,
            batch_size,
            scorer,
            spacing,
            penalty,
            max_attempts,
        } => {
            if batch_size < 2 {
                bail!("batch size must be at least 2");
            }

            let names = files::read_names(&input)?;
            println!("🔍 Ranking {} names from {}", names.len(), input);

            let scorer: Box<dyn WindowScorer> = match scorer {
                ScorerKind::Trends => {
                    let provider = Arc::new(GoogleTrendsProvider::new());
                    let limiter = RateLimiter::with_spacing(
                        Duration::from_secs(spacing),
                        Duration::from_secs(penalty),
                    );
                    let oracle = InterestOracle::with_limits(provider, limiter, max_attempts);
                    Box::new(TrendScorer::new(oracle))
                }
                ScorerKind::Length => Box::new(NameLengthScorer::new()),
            };

            let mut engine = RankEngine::with_options(scorer, RankOptions { batch_size });

            // This could take a while: one spaced provider call per window
            let ranking = engine.rank(&names).await?;
            files::write_rankings(&output, &ranking)?;

            println!("✅ Wrote {} rankings to {}", ranking.len(), output);
            for entry in ranking.entries.iter().take(3) {
                println!("   {}. {}", entry.rank, entry.name);
            }
            if ranking.len() > 3 {
                println!("   ...");
            }
        }

        Commands::Check => {
            let provider = GoogleTrendsProvider::new();
            println!("🔍 Checking {}...", provider.name());

            if provider.is_available().await {
                println!("✅ Provider is reachable");
            } else {
                bail!("provider is not reachable");
            }
        }
    }

    Ok(())
}
