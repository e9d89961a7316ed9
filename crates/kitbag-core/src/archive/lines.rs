//! Line counting for archived source files.

/// Counts lines the way a text reader splits them.
///
/// Only `\n` ends a line, so `\r\n` counts once and a lone `\r` is an
/// ordinary byte. A trailing fragment without a terminator still counts as a
/// line. Bytes are not decoded, so files in any encoding are accepted.
///
/// # Examples
///
/// ```
/// use kitbag_core::archive::lines::count_lines;
///
/// assert_eq!(count_lines(b""), 0);
/// assert_eq!(count_lines(b"one\ntwo\n"), 2);
/// assert_eq!(count_lines(b"one\ntwo"), 2);
/// assert_eq!(count_lines(b"one\r\ntwo\rthree"), 2);
/// ```
#[must_use]
pub fn count_lines(bytes: &[u8]) -> usize {
    let lines = bytes.iter().filter(|&&b| b == b'\n').count();

    match bytes.last() {
        Some(b'\n') | None => lines,
        Some(_) => lines + 1,
    }
}
