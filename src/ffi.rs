use crate::bridge::{self, MonitorEnumFn};
use crate::types::Monitor;

/// Native-language gateway binding of the enumeration callback.
///
/// Externally linkable under its C-style name so native code can take
/// its address and hand it straight to the enumeration facility.
#[unsafe(no_mangle)]
pub extern "system" fn monitor_enum_proc_callback(
    hmonitor: usize,
    hdc: usize,
    lprc_monitor: usize,
    dw_data: usize,
) -> bool {
    bridge::dispatch(hmonitor, hdc, lprc_monitor, dw_data)
}

/// Exported-symbol binding of the enumeration callback.
///
/// Same contract as [`monitor_enum_proc_callback`] under the PascalCase
/// name; the two are interchangeable.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub extern "system" fn MonitorEnumProcCallback(
    hmonitor: usize,
    hdc: usize,
    lprc_monitor: usize,
    dw_data: usize,
) -> bool {
    bridge::dispatch(hmonitor, hdc, lprc_monitor, dw_data)
}

// Both bindings must keep the canonical signature; divergence is a
// compile error here.
const _: [MonitorEnumFn; 2] = [monitor_enum_proc_callback, MonitorEnumProcCallback];

#[unsafe(no_mangle)]
pub extern "C" fn libmonenum_init_logging() {
    crate::init_logging();
}

/// Runs one enumeration pass and hands the collected monitors to the
/// caller. Returns 1 on success, 0 on bad arguments. The array must be
/// released with [`libmonenum_free_monitors`].
#[cfg(windows)]
#[unsafe(no_mangle)]
pub extern "C" fn libmonenum_enumerate(
    out_monitors: *mut *mut Monitor,
    out_num_monitors: *mut usize,
) -> i32 {
    if out_monitors.is_null() || out_num_monitors.is_null() {
        return 0;
    }

    unsafe { hand_off_monitors(crate::win::enumerate_monitors(), out_monitors, out_num_monitors) };

    1
}

/// Transfers ownership of the collected monitors to a C caller.
///
/// The allocation goes out as a boxed slice so its capacity equals its
/// length; `libmonenum_free_monitors` rebuilds the `Vec` with
/// `capacity = len` and the two must describe the same allocation.
///
/// # Safety
/// Both out-pointers must be valid for writes.
#[cfg_attr(not(windows), allow(dead_code))]
unsafe fn hand_off_monitors(
    monitors_vec: Vec<Monitor>,
    out_monitors: *mut *mut Monitor,
    out_num_monitors: *mut usize,
) {
    let len = monitors_vec.len();
    if len > 0 {
        *out_monitors = Box::into_raw(monitors_vec.into_boxed_slice()) as *mut Monitor;
    } else {
        *out_monitors = std::ptr::null_mut();
    }

    *out_num_monitors = len;
}

#[unsafe(no_mangle)]
pub extern "C" fn libmonenum_free_monitors(monitors: *mut Monitor, num_monitors: usize) {
    if !monitors.is_null() {
        unsafe {
            let _ = Vec::from_raw_parts(monitors, num_monitors, num_monitors);
        }
    }
}

#[cfg(windows)]
#[unsafe(no_mangle)]
pub extern "C" fn libmonenum_set_process_dpi_awareness() -> i32 {
    if crate::win::set_process_dpi_awareness() { 1 } else { 0 }
}
