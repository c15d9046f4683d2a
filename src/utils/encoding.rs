/// Decode UTF-8, replacing every invalid byte with U+FFFD
///
/// Unlike `String::from_utf8_lossy`, which emits one replacement per maximal
/// invalid sequence, a character cut after two of its three bytes becomes two
/// replacement characters.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // Already validated up to here
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());

                let invalid = e.error_len().unwrap_or(after.len());
                out.extend(std::iter::repeat_n(char::REPLACEMENT_CHARACTER, invalid));
                rest = &after[invalid..];
            }
        }
    }
}
