#[cfg(windows)]
fn main() {
    libmonenum::init_logging();

    // Without this the reported rectangles are DPI-virtualized.
    if !libmonenum::set_process_dpi_awareness() {
        println!("DPI awareness already set (or unavailable); continuing.");
    }

    let monitors = libmonenum::enumerate_monitors();
    println!("Found {} monitor(s)", monitors.len());
    for (i, m) in monitors.iter().enumerate() {
        println!("Monitor #{}: {}", i, m);
    }
}

#[cfg(not(windows))]
fn main() {
    println!("The enumeration driver only exists on Windows.");
}
