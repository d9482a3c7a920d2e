//! Conversion between native Windows paths and the `/cygdrive/X/...` form
//! expected by Cygwin command lines.
//!
//! Conversion only happens when the host is Windows; elsewhere the input is
//! returned untouched. The `_for` variants take the host explicitly.

/// Host operating system family, as far as path syntax is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    Unix,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(windows) { HostOs::Windows } else { HostOs::Unix }
    }
}

const CYGDRIVE: &str = "/cygdrive/";

/// Ensure a path is suitable for a Cygwin command line
pub fn to_cygwin_path(path: &str) -> String {
    to_cygwin_path_for(path, HostOs::current())
}

pub fn to_cygwin_path_for(path: &str, os: HostOs) -> String {
    if os != HostOs::Windows {
        return path.to_string();
    }

    let path = path.replace('\\', "/");
    let chars: Vec<char> = path.chars().collect();
    let mut out = String::with_capacity(path.len() + CYGDRIVE.len());
    let mut i = 0;

    while i < chars.len() {
        if is_drive_prefix(&chars, i) {
            // "/C:/" and "C:/" both become "/cygdrive/C/"
            if out.ends_with('/') {
                out.pop();
            }
            out.push_str(CYGDRIVE);
            out.push(chars[i]);
            i += 2; // the slash after ':' is copied as a regular char
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// A drive letter at `i` followed by ":/", not glued to a preceding word
fn is_drive_prefix(chars: &[char], i: usize) -> bool {
    chars[i].is_ascii_alphabetic()
        && chars.get(i + 1) == Some(&':')
        && chars.get(i + 2) == Some(&'/')
        && (i == 0 || !chars[i - 1].is_alphanumeric())
}

/// Ensure a path is suitable for a Windows command line
pub fn to_windows_path(path: &str) -> String {
    to_windows_path_for(path, HostOs::current())
}

pub fn to_windows_path_for(path: &str, os: HostOs) -> String {
    if os != HostOs::Windows {
        return path.to_string();
    }

    let chars: Vec<char> = path.chars().collect();
    let mut out = String::with_capacity(path.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some((drive, consumed)) = windows_drive_at(&chars, i) {
            out.push(drive);
            out.push(':');
            i += consumed;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out.replace('/', "\\")
}

/// Recognise "/cygdrive/X" or "/X:" at `i`; returns the drive letter and
/// how many chars the match spans.
fn windows_drive_at(chars: &[char], i: usize) -> Option<(char, usize)> {
    if chars[i] != '/' {
        return None;
    }
    let boundary = |j: usize| chars.get(j).is_none_or(|c| *c == '/');

    let cygdrive: Vec<char> = CYGDRIVE.chars().collect();
    if chars[i..].starts_with(&cygdrive) {
        let j = i + cygdrive.len();
        if let Some(letter) = chars.get(j).filter(|c| c.is_ascii_alphabetic()) {
            if boundary(j + 1) {
                return Some((*letter, cygdrive.len() + 1));
            }
        }
    }

    let letter = chars.get(i + 1).filter(|c| c.is_ascii_alphabetic())?;
    if chars.get(i + 2) == Some(&':') {
        return Some((*letter, 3));
    }
    None
}
