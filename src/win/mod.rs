//! Windows-specific functionality for libmonenum.
//!
//! This module contains the code that actually talks to the Win32
//! display APIs: driving monitor enumeration through the bridge and
//! setting process DPI awareness.

mod dpi;
mod monitor;

pub use dpi::set_process_dpi_awareness;
pub use monitor::enumerate_monitors;
