use std::panic::{self, UnwindSafe};

use log::{trace, warn};

use crate::types::{Monitor, Rect};

/// Canonical shape of the enumeration callback.
///
/// The native driver calls this once per monitor: monitor handle,
/// device-context handle, address of a [`Rect`], caller-supplied context
/// value, each passed as one pointer-width unsigned integer. Returning
/// `true` continues the enumeration pass, `false` stops it.
pub type MonitorEnumFn = extern "system" fn(usize, usize, usize, usize) -> bool;

/// The one place where the raw words become typed values.
///
/// The third parameter is reinterpreted as `*const Rect` and copied out
/// before return; the memory belongs to the driver and is only valid for
/// this call. The fourth is reinterpreted as the `Vec<Monitor>` the
/// initiating code packed into it.
fn record_monitor(hmonitor: usize, hdc: usize, lprc_monitor: usize, dw_data: usize) -> bool {
    if dw_data == 0 {
        warn!("Enumeration started with no inventory to record into, stopping");
        return false;
    }
    if lprc_monitor == 0 {
        warn!("Driver delivered a null rectangle for monitor 0x{:x}, skipping", hmonitor);
        return true;
    }

    let bounds = unsafe { *(lprc_monitor as *const Rect) };
    let monitors = unsafe { &mut *(dw_data as *mut Vec<Monitor>) };

    trace!("Enumerating monitor: handle=0x{:x}, hdc=0x{:x}, rect={:?}", hmonitor, hdc, bounds);
    monitors.push(Monitor { handle: hmonitor, device_context: hdc, bounds });

    true
}

/// Shared dispatch for both exported callback symbols.
///
/// No fault may cross the boundary: the native driver has no unwinding
/// machinery, so a panic while recording is caught and turned into a
/// `false` return that stops the pass.
pub(crate) fn dispatch(hmonitor: usize, hdc: usize, lprc_monitor: usize, dw_data: usize) -> bool {
    dispatch_with(|| record_monitor(hmonitor, hdc, lprc_monitor, dw_data), hmonitor)
}

fn dispatch_with(record: impl FnOnce() -> bool + UnwindSafe, hmonitor: usize) -> bool {
    panic::catch_unwind(record).unwrap_or_else(|_| {
        warn!("Callback panicked while recording monitor 0x{:x}, stopping enumeration", hmonitor);
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_records_copy_of_rect() {
        let mut monitors: Vec<Monitor> = Vec::new();
        let mut rect = Rect { left: 0, top: 0, right: 1920, bottom: 1080 };

        let cont = dispatch(
            0x1001,
            0x20,
            &mut rect as *mut Rect as usize,
            &mut monitors as *mut Vec<Monitor> as usize,
        );
        assert!(cont);

        // Driver reuses its rect storage for the next monitor; the copy
        // must be unaffected.
        rect = Rect { left: 1920, top: 0, right: 3840, bottom: 1080 };
        let _ = rect;

        assert_eq!(monitors.len(), 1);
        assert_eq!(monitors[0].handle, 0x1001);
        assert_eq!(monitors[0].device_context, 0x20);
        assert_eq!(monitors[0].bounds, Rect { left: 0, top: 0, right: 1920, bottom: 1080 });
    }

    #[test]
    fn test_dispatch_skips_null_rect() {
        let mut monitors: Vec<Monitor> = Vec::new();
        let cont = dispatch(0x1001, 0, 0, &mut monitors as *mut Vec<Monitor> as usize);
        assert!(cont);
        assert!(monitors.is_empty());
    }

    #[test]
    fn test_dispatch_stops_on_null_context() {
        let mut rect = Rect::default();
        let cont = dispatch(0x1001, 0, &mut rect as *mut Rect as usize, 0);
        assert!(!cont);
    }

    #[test]
    fn test_panic_while_recording_becomes_false_return() {
        let cont = dispatch_with(|| panic!("recorder fault"), 0x1001);
        assert!(!cont);
    }

    #[test]
    fn test_zero_area_rect_passes_through_unaltered() {
        let mut monitors: Vec<Monitor> = Vec::new();
        let mut rect = Rect { left: 100, top: 200, right: 100, bottom: 200 };

        let cont = dispatch(
            0x1,
            0,
            &mut rect as *mut Rect as usize,
            &mut monitors as *mut Vec<Monitor> as usize,
        );
        assert!(cont);
        assert_eq!(monitors[0].bounds, Rect { left: 100, top: 200, right: 100, bottom: 200 });
    }
}
