//! Bathwise - personalized bath routines from the command line
//!
//! Every decision is made by `bathwise_core`; this binary only loads the
//! profile, settings and history around those calls and prints the result.

use anyhow::{Context, Result};
use chrono::{Local, Timelike, Utc};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bathwise_core::catalog;
use bathwise_core::config::{load_profile, BathwisePaths, EngineSettings};
use bathwise_core::engine;
use bathwise_core::history::{HistoryStore, RecommendationHistory};
use bathwise_core::home::{build_home_orchestration, HomeOrchestrationInput};
use bathwise_core::model::{
    ActiveState, BathEnvironment, BathRecommendation, DailyTag, Feedback, FeedbackRating,
    TimeContext, UserProfile,
};
use bathwise_core::EngineError;

mod render;

/// Trace modules for decision tracing
#[derive(Debug, Clone, ValueEnum)]
enum TraceModule {
    Engine,
    Safety,
    Conflict,
    Home,
    All,
}

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "bathwise",
    about = "Personalized bath routine recommendations",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Directory holding .bathwise/ (defaults to $HOME)
    #[clap(long, global = true)]
    home_dir: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Enable decision tracing (comma-separated: engine,safety,conflict,home,all)
    #[clap(long, value_delimiter = ',', global = true)]
    trace: Vec<TraceModule>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Recommend a care routine for today's tags
    Recommend {
        /// Daily tags (comma-separated), e.g. muscle_pain,insomnia; none gives the sleep routine
        #[clap(long, value_delimiter = ',')]
        tags: Vec<DailyTag>,

        /// Bathing environment (defaults to the profile's)
        #[clap(long)]
        environment: Option<BathEnvironment>,

        /// Print the recommendation as JSON
        #[clap(long)]
        json: bool,

        /// Store the recommendation in history
        #[clap(long)]
        save: bool,
    },

    /// Recommend a theme-driven trip routine
    Trip {
        /// Theme id, e.g. kyoto_forest
        #[clap(long)]
        theme: String,

        #[clap(long)]
        environment: Option<BathEnvironment>,

        #[clap(long)]
        json: bool,

        #[clap(long)]
        save: bool,
    },

    /// Show what the home surface would suggest
    Home {
        /// How you feel right now
        #[clap(long)]
        state: ActiveState,

        /// Time of day (defaults to the local clock)
        #[clap(long)]
        time: Option<TimeContext>,

        /// Theme for the trip card
        #[clap(long)]
        theme: Option<String>,

        #[clap(long)]
        json: bool,
    },

    /// Apply a sub-protocol option to a saved recommendation
    Override {
        /// Recommendation id from history
        #[clap(long)]
        id: String,

        /// Intent, e.g. sleep_prep
        #[clap(long)]
        intent: String,

        /// Sub-protocol option id
        #[clap(long)]
        option: String,

        #[clap(long)]
        environment: Option<BathEnvironment>,
    },

    /// List the sub-protocol options an intent accepts
    Options {
        /// Intent, e.g. sleep_prep
        #[clap(long)]
        intent: String,
    },

    /// List saved recommendations
    History {
        /// Show at most this many entries
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Rate a saved recommendation
    Feedback {
        #[clap(long)]
        id: String,

        /// good, neutral or bad
        #[clap(long)]
        rating: FeedbackRating,

        #[clap(long)]
        note: Option<String>,
    },
}

fn initialize_tracing(log_level: &LogLevel, trace_modules: &[TraceModule]) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    for module in trace_modules {
        let directive = match module {
            TraceModule::Engine => "bathwise_core::engine=trace",
            TraceModule::Safety => "bathwise_core::engine::safety=trace",
            TraceModule::Conflict => "bathwise_core::engine::conflict=trace",
            TraceModule::Home => "bathwise_core::home=trace",
            TraceModule::All => "bathwise_core=trace",
        };

        if let Ok(parsed) = directive.parse() {
            filter = filter.add_directive(parsed);
        }
    }

    // stdout carries command output only
    if !trace_modules.is_empty() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init();

        tracing::info!(trace_modules = ?trace_modules, "Bathwise decision tracing enabled");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Settings, profile and history location for one invocation.
struct Workspace {
    paths: BathwisePaths,
    settings: EngineSettings,
    profile: UserProfile,
}

impl Workspace {
    async fn open(home_dir: Option<PathBuf>) -> Result<Self> {
        let root = match home_dir {
            Some(dir) => dir,
            None => std::env::var_os("HOME")
                .map(PathBuf::from)
                .map_or_else(std::env::current_dir, Ok)
                .context("Failed to determine a home directory")?,
        };
        let paths = BathwisePaths::resolve(&root);

        let settings = EngineSettings::load_or_default(&paths.settings)
            .await
            .context("Failed to load settings")?;
        let profile = load_profile(&paths.profile)
            .await
            .context("Failed to load profile")?
            .unwrap_or_else(|| {
                debug!("No profile - using settings defaults");
                UserProfile {
                    environment: settings.default_environment,
                    health_conditions: Vec::new(),
                }
            });

        Ok(Self {
            paths,
            settings,
            profile,
        })
    }

    fn store(&self) -> HistoryStore {
        HistoryStore::new(&self.paths.history)
    }

    async fn load_history(&self) -> Result<RecommendationHistory> {
        self.store()
            .load(self.settings.history_limit)
            .await
            .context("Failed to load history")
    }

    async fn save_history(&self, history: &RecommendationHistory) -> Result<()> {
        self.store()
            .save(history)
            .await
            .context("Failed to save history")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, &cli.trace);

    let workspace = Workspace::open(cli.home_dir).await?;

    match cli.command {
        Command::Recommend {
            tags,
            environment,
            json,
            save,
        } => {
            let environment = environment.unwrap_or(workspace.profile.environment);
            let rec = engine::generate_care_recommendation(&workspace.profile, &tags, environment)?;
            finish_recommendation(&workspace, rec, json, save).await
        }
        Command::Trip {
            theme,
            environment,
            json,
            save,
        } => {
            let environment = environment.unwrap_or(workspace.profile.environment);
            let rec =
                engine::generate_trip_recommendation(&workspace.profile, &theme, environment)?;
            finish_recommendation(&workspace, rec, json, save).await
        }
        Command::Home {
            state,
            time,
            theme,
            json,
        } => home_command(&workspace, state, time, theme, json),
        Command::Override {
            id,
            intent,
            option,
            environment,
        } => override_command(&workspace, &id, &intent, &option, environment).await,
        Command::Options { intent } => options_command(&intent),
        Command::History { limit } => history_command(&workspace, limit).await,
        Command::Feedback { id, rating, note } => {
            feedback_command(&workspace, &id, rating, note).await
        }
    }
}

async fn finish_recommendation(
    workspace: &Workspace,
    rec: BathRecommendation,
    json: bool,
    save: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        print!("{}", render::recommendation(&rec)?);
    }

    if save {
        let mut history = workspace.load_history().await?;
        let id = rec.id.clone();
        history.push(rec);
        workspace.save_history(&history).await?;
        info!(id = id.as_str(), "Recommendation saved");
        eprintln!("Saved as {id}");
    }
    Ok(())
}

fn home_command(
    workspace: &Workspace,
    state: ActiveState,
    time: Option<TimeContext>,
    theme: Option<String>,
    json: bool,
) -> Result<()> {
    let time_context = time.unwrap_or_else(|| TimeContext::from_hour(Local::now().hour()));

    let input = HomeOrchestrationInput {
        active_state: state,
        time_context,
        health_conditions: workspace.profile.health_conditions.clone(),
        has_completed_profile: workspace.profile.is_complete(),
        has_commerce_candidate: workspace.settings.commerce_enabled,
        selected_theme_id: theme.or_else(|| workspace.settings.default_theme_id.clone()),
    };
    let contract = build_home_orchestration(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&contract)?);
    } else {
        print!("{}", render::home(&contract, state)?);
    }
    Ok(())
}

async fn override_command(
    workspace: &Workspace,
    id: &str,
    intent: &str,
    option_id: &str,
    environment: Option<BathEnvironment>,
) -> Result<()> {
    let mut history = workspace.load_history().await?;
    let rec = history
        .find(id)
        .ok_or_else(|| EngineError::UnknownRecommendation { id: id.to_string() })?;
    let option =
        catalog::sub_protocol(intent, option_id).ok_or_else(|| EngineError::UnknownSubProtocol {
            intent_id: intent.to_string(),
            sub_protocol_id: option_id.to_string(),
        })?;

    let environment = environment.unwrap_or(rec.environment_used);
    let updated = engine::apply_sub_protocol_overrides(rec, option, environment, intent);
    print!("{}", render::recommendation(&updated)?);

    history.replace(updated)?;
    workspace.save_history(&history).await
}

fn options_command(intent: &str) -> Result<()> {
    let options = catalog::sub_protocols_for_intent(intent);
    if options.is_empty() {
        anyhow::bail!(
            "Unknown intent '{intent}'. Valid options: sleep_prep, muscle_relief, mood_reset"
        );
    }
    println!("{}", render::options_table(&options));
    Ok(())
}

async fn history_command(workspace: &Workspace, limit: Option<usize>) -> Result<()> {
    let history = workspace.load_history().await?;
    if history.is_empty() {
        println!("No saved recommendations.");
        return Ok(());
    }

    let shown = limit.unwrap_or(history.len()).min(history.len());
    println!("{}", render::history_table(&history.entries()[..shown]));
    Ok(())
}

async fn feedback_command(
    workspace: &Workspace,
    id: &str,
    rating: FeedbackRating,
    note: Option<String>,
) -> Result<()> {
    let mut history = workspace.load_history().await?;
    history.record_feedback(
        id,
        Feedback {
            rating,
            note,
            recorded_at: Utc::now(),
        },
    )?;
    workspace.save_history(&history).await?;
    println!("Recorded '{rating}' for {id}");
    Ok(())
}
