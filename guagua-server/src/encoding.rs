//! Repair of double-encoded provider text.
//!
//! The TITSA endpoint serves text that was UTF-8 on the wire but got
//! decoded as Latin-1 somewhere along the way, so "Cristóbal" arrives
//! as "CristÃ³bal". Undoing that is lossless: re-encode the string as
//! Latin-1 bytes and decode those bytes as UTF-8. If either step fails
//! the input was not mojibake and is returned unchanged.

/// Attempt to reverse a Latin-1/UTF-8 double encoding.
///
/// Returns the input unchanged when it is not mojibake, which makes
/// this a no-op on ASCII and on text that is already correct.
///
/// # Examples
///
/// ```
/// use guagua_server::encoding::clean_str;
///
/// assert_eq!(clean_str("CristÃ³bal"), "Cristóbal");
/// assert_eq!(clean_str("Intercambiador"), "Intercambiador");
/// ```
pub fn clean_str(s: &str) -> String {
    // A string that was mis-decoded as Latin-1 contains only chars in
    // U+0000..=U+00FF; anything above that rules out the corruption.
    let mut bytes = Vec::with_capacity(s.len());
    for c in s.chars() {
        match u8::try_from(c as u32) {
            Ok(b) => bytes.push(b),
            Err(_) => return s.to_string(),
        }
    }

    match String::from_utf8(bytes) {
        Ok(repaired) => repaired,
        Err(_) => s.to_string(),
    }
}
