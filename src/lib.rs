mod bridge;
mod ffi;
mod types;
#[cfg(windows)]
mod win;

use std::env;
use std::fs::File;

use env_logger::{Builder, Target};
use log::LevelFilter;

pub use crate::bridge::MonitorEnumFn;
pub use crate::ffi::{monitor_enum_proc_callback, MonitorEnumProcCallback};
pub use crate::types::{Monitor, Rect};
#[cfg(windows)]
pub use crate::win::{enumerate_monitors, set_process_dpi_awareness};

/// Sets up logging from the environment. Defaults to errors only;
/// `LIBMONENUM_LOG_LEVEL` overrides the filter and `LIBMONENUM_LOG_FILE`
/// redirects output to a file. Safe to call more than once.
pub fn init_logging() {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Error);

    let env_var = "LIBMONENUM_LOG_LEVEL";
    if let Ok(level_str) = env::var(env_var) {
        builder.parse_filters(&level_str);
    }

    if let Ok(path) = env::var("LIBMONENUM_LOG_FILE") {
        if let Ok(file) = File::create(&path) {
            builder.target(Target::Pipe(Box::new(file)));
        } else {
            eprintln!("Failed to create log file: {}", path);
        }
    }

    let _ = builder.try_init();
}
