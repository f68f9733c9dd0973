//! Logger setup shared by the command-line tools.
//!
//! The level comes from `YPBANK_SWIFT_LOG`, falling back to `RUST_LOG` and
//! then `warn`. Records go to stderr so converted output on stdout stays
//! clean. Setting `YPBANK_SWIFT_LOG_DIR` also writes a dated log file there.

use chrono::Local;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install the global logger once; later calls are no-ops.
pub fn init_logging(app_name: &str) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        if let Err(err) = init_logging_inner(app_name) {
            init_result = Err(err);
        }
    });
    init_result
}

fn level_from_env() -> log::LevelFilter {
    std::env::var("YPBANK_SWIFT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|level| level.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn)
}

fn init_logging_inner(app_name: &str) -> Result<(), String> {
    let log_dir = match std::env::var("YPBANK_SWIFT_LOG_DIR").ok().as_deref() {
        None | Some("") | Some("off") | Some("none") => None,
        Some(path) => Some(PathBuf::from(path)),
    };

    let mut dispatch = fern::Dispatch::new()
        .level(level_from_env())
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let date = Local::now().format("%Y_%m_%d");
        let file_path = dir.join(format!("{app_name}-{date}.log"));
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}
