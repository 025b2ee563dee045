use std::fmt;

/// Monitor bounding box in screen coordinates.
///
/// Byte-compatible with the Win32 `RECT` layout: four 32-bit signed
/// integers in the order left, top, right, bottom. This type is a pure
/// data-layout agreement; whichever side constructs a value is
/// responsible for `left <= right` and `top <= bottom`.
#[repr(C)]
#[derive(Copy, Clone)]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from ({}, {}) to ({}, {}), size {}x{}",
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.right - self.left,
            self.bottom - self.top
        )
    }
}

/// One enumerated monitor, copied out of driver-owned memory.
///
/// The handles are opaque pointer-width identifiers passed through
/// without interpretation. `bounds` is a copy; it stays valid after the
/// enumeration pass ends.
#[repr(C)]
#[derive(Copy, Clone)]
#[derive(Debug, PartialEq, Eq)]
pub struct Monitor {
    pub handle: usize,
    pub device_context: usize,
    pub bounds: Rect,
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hMonitor = 0x{:x}, hDC = 0x{:x}, rect = {}",
            self.handle, self.device_context, self.bounds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_rect_layout_matches_native() {
        assert_eq!(mem::size_of::<Rect>(), 16);
        assert_eq!(mem::align_of::<Rect>(), 4);
        assert_eq!(mem::offset_of!(Rect, left), 0);
        assert_eq!(mem::offset_of!(Rect, top), 4);
        assert_eq!(mem::offset_of!(Rect, right), 8);
        assert_eq!(mem::offset_of!(Rect, bottom), 12);
    }

    #[test]
    fn test_rect_display() {
        let r = Rect { left: 0, top: 0, right: 1920, bottom: 1080 };
        assert_eq!(r.to_string(), "from (0, 0) to (1920, 1080), size 1920x1080");
    }

    #[test]
    fn test_monitor_display() {
        let m = Monitor {
            handle: 0x1001,
            device_context: 0,
            bounds: Rect { left: 0, top: 0, right: 1, bottom: 1 },
        };
        assert_eq!(
            m.to_string(),
            "hMonitor = 0x1001, hDC = 0x0, rect = from (0, 0) to (1, 1), size 1x1"
        );
    }
}
