use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use strcalc_cli::shell::unescape;
use strcalc_cli::{resolve, watch, Shell};
use strcalc_core::{ConfigHandle, Evaluator};

#[derive(Parser)]
#[command(name = "strcalc")]
#[command(about = "Delimited string calculator", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./appsettings.json when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Reload the settings file whenever it changes
    #[arg(long, global = true)]
    watch: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one input per line and print each result (default)
    Repl,
    /// Evaluate a single input
    Eval {
        /// Input string; a literal `\n` is read as a line feed
        #[arg(value_name = "INPUT", allow_hyphen_values = true)]
        input: String,
        /// Emit the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (config, settings_path) = resolve(cli.config.as_deref())?;
    let handle = Arc::new(ConfigHandle::new(config));

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Eval { input, json } => {
            let evaluation = Evaluator::new().evaluate_traced_with(&unescape(&input), &handle)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
            } else {
                println!("{}", evaluation);
            }
        }
        Commands::Repl => {
            let _watcher = match (cli.watch, settings_path) {
                (true, Some(path)) => Some(watch::spawn(path, Arc::clone(&handle))?),
                (true, None) => {
                    log::warn!("--watch ignored: no settings file to watch");
                    None
                }
                (false, _) => None,
            };

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Shell::new(&handle).run(stdin.lock(), &mut stdout)?;
        }
    }
    Ok(())
}
