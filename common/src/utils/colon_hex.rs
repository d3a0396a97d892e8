//! Colon-separated hex rendering.
//!
//! Every DUID leaves this crate as lowercase hex pairs joined by `:`
//! (`00:03:00:01:...`). Odd-length input is rejected rather than padded.

use crate::error::IdentityError;

/// Inserts a colon between every pair of hex digits.
///
/// `"0001"` becomes `"00:01"`. Upper-case digits are lowered. Odd-length
/// input fails with [`IdentityError::OddLength`], anything that is not a hex
/// digit with [`IdentityError::InvalidHex`].
pub fn colonize(hex: &str) -> Result<String, IdentityError> {
    if let Some((index, character)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(IdentityError::InvalidHex {
            field: "hex string",
            character,
            index,
        });
    }
    if hex.len() % 2 != 0 {
        return Err(IdentityError::OddLength {
            field: "hex string",
            len: hex.len(),
        });
    }

    Ok(pair_up(hex))
}

/// Renders raw bytes as colon-separated lowercase hex.
pub fn to_colon_hex(bytes: &[u8]) -> String {
    // `hex::encode` output is always even-length lowercase hex.
    pair_up(&hex::encode(bytes))
}

/// Joins already validated hex digits two by two.
fn pair_up(hex: &str) -> String {
    let mut out = String::with_capacity(hex.len() + hex.len() / 2);
    for (i, c) in hex.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(':');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Removes every colon, recovering the bare hex string.
pub fn strip_colons(s: &str) -> String {
    s.chars().filter(|c| *c != ':').collect()
}

/// Decodes hex in either colon-separated or bare form.
pub fn decode_colon_hex(field: &'static str, s: &str) -> Result<Vec<u8>, IdentityError> {
    let bare = strip_colons(s.trim());
    decode_hex(field, &bare)
}

/// Decodes a bare hex string, tagging failures with `field`.
pub fn decode_hex(field: &'static str, s: &str) -> Result<Vec<u8>, IdentityError> {
    hex::decode(s).map_err(|e| IdentityError::from_hex(field, s.len(), e))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
