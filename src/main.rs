use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{info, warn};
use serde::de::DeserializeOwned;

use stylist::advisor::{Advisor, AnalysisRequest, Enricher};
use stylist::config::AppConfig;
use stylist::errors::StylistError;
use stylist::knowledge::{color, occasion, seasonal};
use stylist::models::{OutfitBreakdown, Season, SkinUndertone, UserProfile};
use stylist::profile::{self, Observation, ProfileExtras};
use stylist::report;
use stylist::storage::{FileProfileStore, HistoryLog, ProfileStore};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse an outfit against a profile for an occasion
    Analyze {
        /// Profile JSON. Defaults to the stored profile.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Outfit breakdown JSON from the vision step
        #[arg(long)]
        outfit: PathBuf,

        #[arg(long)]
        occasion: String,

        /// Where to write the recommendation JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        no_history: bool,
    },
    /// Build or inspect the stored profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Show past analyses
    History {
        /// Newest entries to show, 0 for all
        #[arg(short, long, default_value_t = 0)]
        last: usize,
    },
    /// Print the colour palette for an undertone
    Palette {
        #[arg(short, long)]
        undertone: String,

        #[arg(short, long)]
        season: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommands {
    Build {
        /// JSON array of per-photo observations
        #[arg(long)]
        observations: PathBuf,

        /// Replace the stored profile and bump its version
        #[arg(long)]
        refresh: bool,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        lifestyle: Option<String>,

        #[arg(long)]
        age_group: Option<String>,

        #[arg(long)]
        budget_tier: Option<String>,
    },
    Show,
}

/// Enricher that pipes the prompt to an external program and reads its reply
/// from stdout.
struct CommandEnricher {
    program: String,
    args: Vec<String>,
}

impl CommandEnricher {
    fn from_config(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Enricher for CommandEnricher {
    fn enrich(&self, prompt: &str) -> Result<String, StylistError> {
        let failed = |reason: String| StylistError::EnrichmentFailed { reason };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| failed(format!("could not start {}: {}", self.program, e)))?;

        // Feed stdin from its own thread so a chatty child cannot fill stdout
        // and block while we are still writing the prompt.
        let stdin = child.stdin.take();
        let (output, sent) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(prompt.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let sent = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("prompt writer panicked")));
            (output, sent)
        });

        let output = output.map_err(|e| failed(format!("enrichment command failed: {}", e)))?;
        if !output.status.success() {
            return Err(failed(format!(
                "{} exited with {}",
                self.program, output.status
            )));
        }
        sent.map_err(|e| failed(format!("could not send prompt: {}", e)))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StylistError> {
    let content = std::fs::read_to_string(path).map_err(|e| StylistError::InputFileError {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| StylistError::InputFormatError {
        path: path.display().to_string(),
        source: e,
    })
}

fn profile_store(config: &AppConfig) -> Result<FileProfileStore, StylistError> {
    Ok(FileProfileStore::new(config.data_dir()?))
}

fn advisor(config: &AppConfig) -> Advisor {
    match config
        .enrichment_command
        .as_deref()
        .and_then(CommandEnricher::from_config)
    {
        Some(enricher) if config.use_enrichment => Advisor::with_enricher(Box::new(enricher)),
        None if config.use_enrichment => {
            warn!("Enrichment is enabled but no enrichment command is configured");
            Advisor::new()
        }
        _ => Advisor::new(),
    }
}

fn analyze(
    config: &AppConfig,
    profile_path: Option<&Path>,
    outfit: &Path,
    occasion_slug: &str,
    output: Option<PathBuf>,
    no_history: bool,
) -> Result<(), StylistError> {
    if !occasion::is_known(occasion_slug) {
        warn!(
            "Unknown occasion '{}', known occasions are: {}",
            occasion_slug,
            occasion::OCCASIONS.join(", ")
        );
    }

    let user_profile: UserProfile = match profile_path {
        Some(path) => read_json(path)?,
        None => profile_store(config)?.load()?,
    };
    let breakdown: OutfitBreakdown = read_json(outfit)?;

    let output = output.unwrap_or_else(|| {
        config
            .output_dir
            .join(format!("analysis_{}.json", Utc::now().timestamp()))
    });

    let mut request = AnalysisRequest::new(user_profile, breakdown, occasion_slug);
    request.analysis_json_path = output.display().to_string();
    request.use_enrichment = config.use_enrichment;

    let recommendation = advisor(config).recommend(&request);
    println!("{}", report::render(&recommendation));
    report::export_json(&recommendation, &output)?;

    if config.history_enabled && !no_history {
        let history = HistoryLog::new(config.data_dir()?);
        history.append(&recommendation, &request.analysis_json_path)?;
    }
    Ok(())
}

fn build_profile(
    config: &AppConfig,
    observations: &Path,
    refresh: bool,
    extras: ProfileExtras,
) -> Result<(), StylistError> {
    let observations: Vec<Observation> = read_json(observations)?;
    let mut store = profile_store(config)?;

    let built = if refresh && store.exists() {
        let previous = store.load()?;
        profile::refresh(&observations, &previous)?
    } else {
        profile::build_profile(&observations, None)?
    };
    let user_profile = profile::enrich_profile(built, &observations, extras);

    let path = store.save(&user_profile, refresh)?;
    info!(
        "Profile version {} saved to {}",
        user_profile.profile_version,
        path.display()
    );
    Ok(())
}

fn show_profile(config: &AppConfig) -> Result<(), StylistError> {
    let user_profile = profile_store(config)?.load()?;
    let json = serde_json::to_string_pretty(&user_profile)
        .map_err(|e| StylistError::SerializeError { source: e })?;
    println!("{}", json);
    Ok(())
}

fn show_history(config: &AppConfig, last: usize) -> Result<(), StylistError> {
    let entries = HistoryLog::new(config.data_dir()?).load(last)?;
    if entries.is_empty() {
        println!("No analyses yet.");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {:<26} overall {:>2}/10  outfit {:>2}  grooming {:>2}  accessory {:>2}  footwear {:>2}  remarks {} ({} critical)",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.occasion,
            entry.overall_style_score,
            entry.outfit_score,
            entry.grooming_score,
            entry.accessory_score,
            entry.footwear_score,
            entry.remark_count,
            entry.critical_count
        );
    }
    Ok(())
}

fn palette(undertone: &str, season: Option<&str>) -> Result<(), StylistError> {
    let undertone: SkinUndertone = undertone.parse()?;
    println!("{} undertone", undertone);
    println!("  Wear : {}", color::palette_do(undertone).join(", "));
    println!("  Avoid: {}", color::palette_avoid(undertone).join(", "));

    if let Some(season) = season {
        let season: Season = season.parse()?;
        let refinement = seasonal::seasonal_type(season);
        println!("{} refinement", season);
        println!("  Also wear : {}", refinement.palette_do.join(", "));
        println!("  Also avoid: {}", refinement.palette_avoid.join(", "));
    }
    Ok(())
}

fn run(cli: Args) -> Result<(), StylistError> {
    let config = AppConfig::from_local_file().unwrap_or_default();

    match cli.command {
        Commands::Analyze {
            profile,
            outfit,
            occasion,
            output,
            no_history,
        } => analyze(
            &config,
            profile.as_deref(),
            &outfit,
            &occasion,
            output,
            no_history,
        ),
        Commands::Profile { command } => match command {
            ProfileCommands::Build {
                observations,
                refresh,
                name,
                lifestyle,
                age_group,
                budget_tier,
            } => build_profile(
                &config,
                &observations,
                refresh,
                ProfileExtras {
                    preferred_name: name,
                    lifestyle,
                    age_group,
                    budget_tier,
                },
            ),
            ProfileCommands::Show => show_profile(&config),
        },
        Commands::History { last } => show_history(&config, last),
        Commands::Palette { undertone, season } => palette(&undertone, season.as_deref()),
    }
}

fn main() {
    colog::init();

    let cli = Args::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
