use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use reps_core::VERSION;

/// Reps - a seasonal movement journal
#[derive(Parser)]
#[command(name = "reps")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the journal data
    #[arg(short, long, global = true, env = "REPS_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Latitude used for weather lookups
    #[arg(long, allow_hyphen_values = true, requires = "longitude")]
    pub latitude: Option<f64>,

    /// Longitude used for weather lookups
    #[arg(long, allow_hyphen_values = true, requires = "latitude")]
    pub longitude: Option<f64>,

    /// Leave weather lookups switched off
    #[arg(long, conflicts_with = "latitude")]
    pub no_weather: bool,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `log` command
#[derive(Args)]
pub struct LogArgs {
    /// Movement type (lifted, walked, ran, stretched, played, moved)
    #[arg(value_name = "TYPE")]
    pub movement_type: String,

    /// How it felt (strong, alive, peaceful, heavy, grinding, easy, rough)
    #[arg(value_name = "FEELING")]
    pub feeling: String,

    /// Display label (defaults to the type's label)
    #[arg(long)]
    pub label: Option<String>,

    /// Free-form note
    #[arg(short, long)]
    pub note: Option<String>,

    /// Exercise detail as name[:sets[:reps[:weight]]] (repeatable)
    #[arg(short, long, value_name = "SPEC")]
    pub exercise: Vec<String>,

    /// Set custom date/time (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments that only name a record
#[derive(Args)]
pub struct ShowArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for delete commands
#[derive(Args)]
pub struct DeleteArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for list commands
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results (most recent first)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `sessions` command
#[derive(Args)]
pub struct SessionsArgs {
    #[command(subcommand)]
    pub command: SessionsSubcommand,
}

#[derive(Subcommand)]
pub enum SessionsSubcommand {
    /// List recent movement sessions
    List(ListArgs),

    /// Show a session
    Show(ShowArgs),

    /// Delete a session
    Delete(DeleteArgs),
}

/// Arguments for the `templates` command
#[derive(Args)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub command: TemplatesSubcommand,
}

#[derive(Subcommand)]
pub enum TemplatesSubcommand {
    /// Create a workout template
    Create(TemplateCreateArgs),

    /// List templates
    List(TemplateListArgs),

    /// Show a template
    Show(ShowArgs),

    /// Rename a template or replace its exercises
    Update(TemplateUpdateArgs),

    /// Delete a template (workouts keep their recorded name)
    Delete(DeleteArgs),
}

/// Arguments for `templates create`
#[derive(Args)]
pub struct TemplateCreateArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Exercise name (repeatable, in order)
    #[arg(short, long, value_name = "NAME")]
    pub exercise: Vec<String>,
}

/// Arguments for `templates list`
#[derive(Args)]
pub struct TemplateListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `templates update`
#[derive(Args)]
pub struct TemplateUpdateArgs {
    /// Template ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Replacement exercise list (repeatable, in order)
    #[arg(short, long, value_name = "NAME")]
    pub exercise: Vec<String>,

    /// Remove every exercise from the template
    #[arg(long, conflicts_with = "exercise")]
    pub clear_exercises: bool,
}

/// Arguments for the `workouts` command
#[derive(Args)]
pub struct WorkoutsArgs {
    #[command(subcommand)]
    pub command: WorkoutsSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutsSubcommand {
    /// Start a workout from a template
    Start(WorkoutStartArgs),

    /// List recent workouts
    List(ListArgs),

    /// Show a workout
    Show(ShowArgs),

    /// Change a workout's date, template or exercises
    Update(WorkoutUpdateArgs),

    /// Delete a workout
    Delete(DeleteArgs),
}

/// Arguments for `workouts start`
#[derive(Args)]
pub struct WorkoutStartArgs {
    /// Template ID
    #[arg(value_name = "TEMPLATE_ID")]
    pub template_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `workouts update`
#[derive(Args)]
pub struct WorkoutUpdateArgs {
    /// Workout ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New date/time (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Re-point the workout at another template
    #[arg(long, value_name = "TEMPLATE_ID")]
    pub template: Option<String>,

    /// Replacement exercise rows as name[:sets[:reps[:weight]]] (repeatable).
    /// Rows that keep their name keep their tags and notes.
    #[arg(short, long, value_name = "SPEC")]
    pub exercise: Vec<String>,

    /// Tag an exercise row, e.g. "Bench=To failure" (repeatable)
    #[arg(long, value_name = "EXERCISE=TAG")]
    pub tag: Vec<String>,

    /// Remove a tag from an exercise row (repeatable)
    #[arg(long, value_name = "EXERCISE=TAG")]
    pub untag: Vec<String>,

    /// Set an exercise row's notes; an empty text clears them (repeatable)
    #[arg(long, value_name = "EXERCISE=TEXT")]
    pub note: Vec<String>,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `weather` command
#[derive(Args)]
pub struct WeatherArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `reset` command
#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init(InitArgs),

    /// Log a movement session
    Log(LogArgs),

    /// Browse and delete movement sessions
    #[command(alias = "session")]
    Sessions(SessionsArgs),

    /// Manage workout templates
    #[command(alias = "template")]
    Templates(TemplatesArgs),

    /// Record workouts from templates
    #[command(alias = "workout")]
    Workouts(WorkoutsArgs),

    /// Season progress, 14-day row and season summary
    Stats(StatsArgs),

    /// Current weather (cached for an hour)
    Weather(WeatherArgs),

    /// Greeting, weather and the last two weeks at a glance
    Today,

    /// Delete every template, workout and session
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
