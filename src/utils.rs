use anyhow::Result;
use libc::c_char;
use std::ffi::CStr;
use std::io;

/// Default capacity of the buffer handed to gethostname(2); large enough
/// for any name the kernel allows (HOST_NAME_MAX is 64 on Linux).
pub const HOSTNAME_BUF_LEN: usize = 128;

// inspired by https://crates.io/crates/uname
#[inline]
fn to_cstr(buf: &[c_char]) -> &CStr {
    unsafe { CStr::from_ptr(buf.as_ptr()) }
}

/// The local machine's hostname as reported by gethostname(2).
pub fn hostname() -> Result<String> {
    hostname_with_capacity(HOSTNAME_BUF_LEN)
}

/// Like [`hostname`], but with an explicit buffer capacity.
///
/// A name that does not fit into `cap` bytes (including the trailing NUL)
/// is an error, never a silent truncation.
pub fn hostname_with_capacity(cap: usize) -> Result<String> {
    let mut buf: Vec<c_char> = vec![0; cap];
    let r = unsafe { libc::gethostname(buf.as_mut_ptr(), buf.len()) };
    if r != 0 {
        return Err(anyhow::anyhow!(io::Error::last_os_error()));
    }
    // POSIX leaves it unspecified whether a name of exactly `cap` bytes is
    // NUL-terminated; the buffer started zeroed, so a non-zero last byte
    // means the name filled it completely.
    match buf.last() {
        Some(0) => Ok(to_cstr(&buf[..]).to_string_lossy().into_owned()),
        _ => Err(anyhow::anyhow!("hostname does not fit into {} bytes", cap)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;

    #[test]
    fn matches_kernel_hostname() {
        let name = hostname().expect("hostname");
        let kernel = read_to_string("/proc/sys/kernel/hostname").expect("procfs");
        assert_eq!(name, kernel.trim_end());
    }

    #[test]
    fn fits_default_buffer() {
        let name = hostname().expect("hostname");
        assert!(!name.is_empty());
        assert!(name.len() < HOSTNAME_BUF_LEN);
        assert!(!name.contains('\0'));
    }

    #[test]
    fn undersized_buffer_is_an_error() {
        assert!(hostname_with_capacity(0).is_err());
        assert!(hostname_with_capacity(1).is_err());
    }

    #[test]
    fn exact_fit_without_nul_is_an_error() {
        let len = hostname().expect("hostname").len();
        // no room for the trailing NUL
        assert!(hostname_with_capacity(len).is_err());
    }
}
