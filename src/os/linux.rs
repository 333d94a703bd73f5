//! Operating system abstraction layer (Linux)
//!
//! Exposes random bytes from the kernel entropy pool via the `getrandom`
//! system call. Partial reads, which can occur on signal interruption,
//! are handled transparently.

use libc::{c_void, getrandom};

/// Fills a buffer with random bytes from the OS.
///
/// # Panics
/// Panics if `getrandom` returns an error; that indicates a critical
/// operating system issue with no recovery path here.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
