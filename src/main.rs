use clap::{CommandFactory, Parser};
use globcopy::logger::initialize_logger;
use globcopy::{copy_matching_files, CopyConfig, ExcludedDirs, GlobCopyError};
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// File names or glob patterns (e.g. 'main.rs', '*.ts'), matched against base names
    patterns: Vec<String>,
    #[arg(long, env = "GLOBCOPY_STDOUT", help = "Print to stdout instead of the clipboard")]
    stdout: bool,
    #[arg(long = "exclude", help = "Additional directory names to skip")]
    exclude: Option<Vec<String>>,
    #[arg(short = 's', long, env = "GLOBCOPY_NO_STATS")]
    no_stats: bool,
    #[arg(short = 'M', long, env = "GLOBCOPY_MODEL", default_value = "gpt-4o")]
    model: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger();

    if cli_args.patterns.is_empty() {
        eprintln!("{}", CliArgs::command().render_usage());
        eprintln!("Example: globcopy task.component.ts 'task.component.*' '*.html'");
        return ExitCode::FAILURE;
    }

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            error!("Cannot determine the working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = CopyConfig {
        root,
        patterns: cli_args.patterns,
        excluded_dirs: ExcludedDirs::new(cli_args.exclude),
        stdout: cli_args.stdout,
        no_stats: cli_args.no_stats,
        model: cli_args.model,
    };

    match copy_matching_files(config).await {
        Ok(delivery) => {
            debug!("Delivered via {:?}", delivery);
            ExitCode::SUCCESS
        }
        Err(GlobCopyError::NoMatch) => {
            eprintln!("No files found matching the given patterns.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error copying files: {}", e);
            ExitCode::FAILURE
        }
    }
}
