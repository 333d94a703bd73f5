use libc::arc4random_buf;

/// Fills a buffer with random bytes from the OS. `arc4random_buf`
/// cannot fail.
pub(crate) fn sys_random(buf: &mut [u8]) {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }
}
