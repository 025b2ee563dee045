//! Windows monitor enumeration.
//!
//! Drives `EnumDisplayMonitors` through the exported callback bridge,
//! collecting one [`Monitor`] per attached display.

use log::{debug, warn};
use windows::core::BOOL;
use windows::Win32::Foundation::{FALSE, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{EnumDisplayMonitors, HDC, HMONITOR};

use crate::ffi::monitor_enum_proc_callback;
use crate::types::Monitor;

/// Walks all attached displays once and returns a copy of each
/// monitor's handle, device context and bounds.
///
/// An empty result is a valid empty enumeration, not an error; a Win32
/// failure is logged and yields whatever was collected before it.
pub fn enumerate_monitors() -> Vec<Monitor> {
    let mut monitors: Vec<Monitor> = Vec::new();
    unsafe {
        let enum_res = EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitors_forward),
            LPARAM(&mut monitors as *mut Vec<Monitor> as isize),
        );
        if !enum_res.as_bool() {
            warn!("EnumDisplayMonitors failed");
        }
    }

    debug!("Enumerated {} monitors", monitors.len());
    monitors
}

/// Typed adapter between the Win32 callback shape and the raw-word
/// bridge contract. This is the only place the Win32 handle types are
/// lowered to plain machine words.
extern "system" fn enum_monitors_forward(
    hmonitor: HMONITOR,
    hdc: HDC,
    lprc_monitor: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let cont = monitor_enum_proc_callback(
        hmonitor.0 as usize,
        hdc.0 as usize,
        lprc_monitor as usize,
        lparam.0 as usize,
    );
    if cont { TRUE } else { FALSE }
}
