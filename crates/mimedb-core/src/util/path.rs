//! Extension extraction from paths, file names and bare extensions.

use memchr::{memchr, memrchr, memrchr2};

/// Lowercased extension of `input`, or an empty string when it has none.
///
/// - anything containing `/` or `\` is a path; the part after the last
///   separator is the file name
/// - anything else containing a `.` is a file name
/// - anything else is already an extension and comes back as is
///
/// A file name whose only dot is its first character (`.bashrc`) has no
/// extension.
pub fn extension_of(input: &str) -> String {
    let lowered = input.to_lowercase();
    let bytes = lowered.as_bytes();

    if let Some(sep) = memrchr2(b'/', b'\\', bytes) {
        return extension_of_file_name(&lowered[sep + 1..]).to_string();
    }

    if memchr(b'.', bytes).is_some() {
        return extension_of_file_name(&lowered).to_string();
    }

    lowered
}

fn extension_of_file_name(file_name: &str) -> &str {
    match memrchr(b'.', file_name.as_bytes()) {
        None | Some(0) => "",
        Some(dot) => &file_name[dot + 1..],
    }
}
