//! Process DPI awareness setup.
//!
//! Without per-monitor awareness the enumeration reports virtualized,
//! DPI-scaled rectangles instead of physical pixels.

use log::{info, warn};
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};

/// Opts the process into per-monitor DPI awareness V2. Returns whether
/// the call succeeded; it fails harmlessly if awareness was already set
/// (for example through the application manifest).
pub fn set_process_dpi_awareness() -> bool {
    unsafe {
        let res = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
        if let Err(e) = res {
            warn!("Failed to set DPI awareness context: {:?}", e);
            return false;
        }
    }
    info!("Process DPI awareness set to per-monitor V2");
    true
}
