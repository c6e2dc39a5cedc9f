use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use spinlab_execution::{rng, stream_simulation_with_limit};
use spinlab_simulator::{execute, replay, Config, ResultSlots, ValidatedConfig};
use spinlab_types::roulette::{BetTarget, Preset};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};

fn init_tracing(level: Level, json: bool) {
    // Logs go to stderr so stdout carries only the report.
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in wheel: european-fair, european-tweaked, colors-fair or colors-tweaked.
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Number (0-36) or color (RED, BLACK, GREEN) to bet on.
    #[arg(short, long)]
    target: Option<BetTarget>,

    /// Stake per round.
    #[arg(long)]
    stake: Option<f64>,

    /// Number of rounds to simulate.
    #[arg(short, long)]
    rounds: Option<u64>,

    #[arg(long)]
    starting_balance: Option<f64>,

    /// Seed for reproducible runs (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound on rounds per run.
    #[arg(long)]
    max_rounds: Option<u64>,

    /// Also run the fair/tweaked counterpart and print the difference.
    #[arg(long, default_value_t = false)]
    compare: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the first N rounds one at a time before the report.
    #[arg(long)]
    replay: Option<usize>,

    /// Delay between replayed rounds in milliseconds.
    #[arg(long)]
    replay_delay_ms: Option<u64>,

    /// Worker threads for batch runs (0 uses logical cores).
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long)]
    log_level: Option<String>,

    /// Emit structured JSON logs.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn load_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    serde_yaml::from_str(&contents).context("Could not parse config file")
}

fn build_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    if let Some(preset) = args.preset {
        // An explicit preset replaces any custom wheel from the file.
        config.preset = preset;
        config.wheel = None;
        config.payout = None;
    }
    if let Some(target) = args.target {
        config.target = Some(target);
    }
    if let Some(stake) = args.stake {
        config.stake = stake;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if let Some(starting_balance) = args.starting_balance {
        config.starting_balance = starting_balance;
    }
    config.seed = args.seed.or(config.seed);
    if let Some(max_rounds) = args.max_rounds {
        config.max_rounds = max_rounds;
    }
    config.compare |= args.compare;
    if let Some(replay) = args.replay {
        config.replay = replay;
    }
    if let Some(replay_delay_ms) = args.replay_delay_ms {
        config.replay_delay_ms = replay_delay_ms;
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if let Some(log_level) = &args.log_level {
        config.log_level = log_level.clone();
    }
    config.json_logs |= args.json_logs;

    Ok(config)
}

fn run(config: &ValidatedConfig, format: OutputFormat) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        scenario = %config.scenario.name,
        target = %config.scenario.bet.target,
        rounds = config.rounds,
        seed,
        compare = config.counterpart.is_some(),
        "starting simulation"
    );

    let mut stdout = std::io::stdout().lock();
    if config.replay > 0 {
        // Same stream as the primary run, so the replay is its prefix.
        let mut rng = rng::stream_rng(seed, 0);
        let stream = stream_simulation_with_limit(
            &config.scenario.wheel,
            &config.scenario.bet,
            config.rounds,
            config.starting_balance,
            config.max_rounds,
            &mut rng,
        )
        .context("failed to start replay")?;
        // Keep stdout parseable when it carries a JSON report.
        let written = match format {
            OutputFormat::Text => replay(stream, config.replay, config.replay_delay, &mut stdout),
            OutputFormat::Json => replay(
                stream,
                config.replay,
                config.replay_delay,
                &mut std::io::stderr().lock(),
            ),
        }
        .context("failed to write replay")?;
        debug!(rounds = written, "replay finished");
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.get())
        .build()
        .context("failed to create execution pool")?;
    let mut slots = ResultSlots::new();
    let report = execute(config, seed, &mut slots, &pool).context("simulation failed")?;

    match format {
        OutputFormat::Text => write!(stdout, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &report)
                .context("failed to serialize report")?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&args)?
        .validate()
        .context("Invalid configuration")?;
    init_tracing(config.log_level, config.json_logs);
    info!(config = ?config, "loaded config");

    run(&config, args.format)
}
