use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::filter::Directive;

#[derive(Debug, Clone)]
pub enum Command {
    Download {
        config_path: Option<String>,
        source_url: Option<String>,
        output_dir: Option<String>,
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
        report_path: Option<String>,
        allow_failures: bool,
        no_progress: bool,
    },
    List {
        config_path: Option<String>,
        source_url: Option<String>,
        timeout_secs: Option<u64>,
        user_agent: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "panelgrab",
    version,
    about = "Fetch an image manifest and download every image it lists"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Fetch the manifest and download every image into the output directory
    Download {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Optional config file (YAML, TOML or JSON)"
        )]
        config: Option<String>,

        #[arg(
            short = 'u',
            long = "source-url",
            value_name = "URL",
            help = "Overrides the manifest URL"
        )]
        source_url: Option<String>,

        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the output directory (default: downloads)"
        )]
        output_dir: Option<String>,

        #[arg(
            long = "timeout",
            value_name = "SECS",
            help = "Per-request timeout in seconds (default: none)"
        )]
        timeout: Option<u64>,

        #[arg(long = "user-agent", value_name = "UA", help = "Sets the HTTP User-Agent")]
        user_agent: Option<String>,

        #[arg(
            short = 'r',
            long = "report",
            value_name = "FILE",
            help = "Writes a JSON report mapping manifest entries to saved files"
        )]
        report: Option<String>,

        #[arg(
            long = "allow-failures",
            help = "Exit successfully even if some images failed to download"
        )]
        allow_failures: bool,

        #[arg(long = "no-progress", help = "Disables the progress bar")]
        no_progress: bool,
    },

    /// Fetch the manifest and print the images that would be downloaded
    List {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Optional config file (YAML, TOML or JSON)"
        )]
        config: Option<String>,

        #[arg(
            short = 'u',
            long = "source-url",
            value_name = "URL",
            help = "Overrides the manifest URL"
        )]
        source_url: Option<String>,

        #[arg(
            long = "timeout",
            value_name = "SECS",
            help = "Per-request timeout in seconds (default: none)"
        )]
        timeout: Option<u64>,

        #[arg(long = "user-agent", value_name = "UA", help = "Sets the HTTP User-Agent")]
        user_agent: Option<String>,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    if let Ok(directive) = "hyper_util=info".parse::<Directive>() {
        env_filter = env_filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let command = match cli.command {
        CliCommand::Download {
            config,
            source_url,
            output_dir,
            timeout,
            user_agent,
            report,
            allow_failures,
            no_progress,
        } => Command::Download {
            config_path: config,
            source_url,
            output_dir,
            timeout_secs: timeout,
            user_agent,
            report_path: report,
            allow_failures,
            no_progress,
        },
        CliCommand::List {
            config,
            source_url,
            timeout,
            user_agent,
        } => Command::List {
            config_path: config,
            source_url,
            timeout_secs: timeout,
            user_agent,
        },
    };

    Args { command, log_level }
}
