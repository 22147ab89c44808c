use std::path::PathBuf;

use clap::Parser;
use duty_letters::letter::DEFAULT_WRAP_WIDTH;
use duty_letters::prompt::TerminalPrompter;
use duty_letters::session::{self, SessionConfig};
use duty_letters::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let config = cli.into_config();
    let mut prompter = TerminalPrompter::stdio();
    let summary = session::run(&mut prompter, &config)?;

    println!("Wrote {} appointment letter(s).", summary.letters.len());
    if let Some(path) = &summary.unassigned_export {
        println!("Unassigned duties saved to {}.", path.display());
    } else if !summary.unassigned.is_empty() {
        println!("{} duty slot(s) still need a holder.", summary.unassigned.len());
    }
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "duty_letters=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ToolError::Logging(err.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Assign collateral duties and print the appointment letters."
)]
struct Cli {
    /// Directory searched for the roster workbooks.
    #[arg(long, default_value = ".")]
    workbook_dir: PathBuf,

    /// Directory the letters and the unassigned-duty sheet are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Personnel workbook; skips the selection menu.
    #[arg(long)]
    personnel: Option<PathBuf>,

    /// Duty workbook; skips the selection menu.
    #[arg(long)]
    duties: Option<PathBuf>,

    /// Duty titles this many characters or longer are wrapped on the subject line.
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    wrap_width: usize,

    /// Log progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> SessionConfig {
        SessionConfig {
            workbook_dir: self.workbook_dir,
            output_dir: self.output_dir,
            personnel: self.personnel,
            duties: self.duties,
            wrap_width: self.wrap_width,
        }
    }
}
