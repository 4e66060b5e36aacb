//! Text decoding for uploaded CSV files.
//!
//! Handles BOM detection (UTF-8, UTF-16 LE/BE), validates UTF-8,
//! and falls back to chardetng for spreadsheet exports in legacy encodings.

/// Decode uploaded bytes to a String, detecting encoding automatically.
///
/// The BOM is stripped so it never leaks into the first header name.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(rest).into_owned();
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        let (decoded, _, _) = encoding_rs::UTF_16LE.decode(rest);
        return decoded.into_owned();
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let (decoded, _, _) = encoding_rs::UTF_16BE.decode(rest);
        return decoded.into_owned();
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_owned();
    }

    // Excel on Windows still writes CSV as Windows-1252 by default
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}
