mod domain;
mod usecase;
mod interface_adapter;
mod infrastructure;
mod shared;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::domain::model::Profile;
use crate::infrastructure::profile::json_profile_adapter::to_pretty_json;
use crate::infrastructure::tui::app_runner::{self, RunOptions};
use crate::interface_adapter::adapter::profile_adapter_factory;
use crate::interface_adapter::controller::tui_controller::TuiController;
use crate::shared::error::AppError;
use crate::usecase::session_usecase::{self, SessionUsecase};

/// Portfolio presented as a fake terminal.
#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about)]
struct Args {
    /// JSON profile to load instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Skip the boot animation
    #[arg(long)]
    no_boot: bool,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the loaded profile as JSON and exit
    #[arg(long)]
    dump_profile: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    // Profile from the selected adapter
    let profile = load(&args.profile)?;

    if args.dump_profile {
        println!("{}", to_pretty_json(&profile)?);
        return Ok(());
    }

    // Usecase -> controller -> TUI
    let usecase = SessionUsecase::new(&profile);
    let controller = TuiController::new(usecase);
    let options = RunOptions {
        show_boot: !args.no_boot,
        rain_seed: rain_seed(),
    };
    app_runner::run(controller, &profile, options)?;

    Ok(())
}

fn load(path: &Option<PathBuf>) -> Result<Profile, AppError> {
    match path {
        Some(path) => {
            let adapter = profile_adapter_factory::create_json_profile_adapter(path.clone());
            session_usecase::load_profile(&adapter)
        }
        None => {
            let adapter = profile_adapter_factory::create_builtin_profile_adapter();
            session_usecase::load_profile(&adapter)
        }
    }
}

/// Logs go to a file because stdout belongs to the TUI.
fn init_logging(path: &Path, level: &str) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    info!(log_file = %path.display(), "logging initialized");
    Ok(())
}

fn rain_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
