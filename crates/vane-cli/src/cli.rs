use clap::{ArgAction, Parser, Subcommand, ValueHint};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}",
    arg_required_else_help = true
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as json
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Provide custom config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set user agent
    #[arg(required = false, long, short = 'A', global = true)]
    pub user_agent: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which repositories may serve a group
    #[command(arg_required_else_help = true)]
    #[clap(name = "route", visible_alias = "r")]
    Route {
        /// Group to route
        #[arg(required = true)]
        group: String,
    },

    /// Fetch artifacts through the routing table
    #[command(arg_required_else_help = true)]
    #[clap(name = "fetch", visible_alias = "dl")]
    Fetch {
        /// Artifact coordinates (group:artifact:version[:classifier])
        #[arg(required = true)]
        coordinates: Vec<String>,

        /// Directory artifacts are written to
        #[arg(required = false, short, long, value_hint = ValueHint::AnyPath)]
        output: Option<String>,
    },

    /// List configured repositories and their scopes
    #[clap(name = "list", visible_alias = "ls")]
    List,

    /// Print the project's manifest attributes
    #[clap(name = "manifest")]
    Manifest,

    /// Print the configuration file to stdout
    #[clap(name = "config")]
    Config,

    /// Generate default config
    #[clap(name = "defconfig")]
    DefConfig,
}
