//! Output formatting for the external IR decoder harness.
//!
//! The decoder consumes lines of the form `B64_multi <b64> <b64>`, one per
//! transmission, where the two buffers are the packets of the burst. Remotes
//! that send a single packet transmit it twice, so their lines repeat the
//! same buffer.

use base64::prelude::{Engine as _, BASE64_STANDARD};

/// Format a two-packet transmission as a `B64_multi` line.
pub fn b64_multi(first: &[u8], second: &[u8]) -> String {
    format!(
        "B64_multi {} {}",
        BASE64_STANDARD.encode(first),
        BASE64_STANDARD.encode(second)
    )
}

/// Format a single-packet transmission; the packet is repeated because the
/// remote always transmits twice.
pub fn b64_multi_repeated(packet: &[u8]) -> String {
    b64_multi(packet, packet)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        assert_eq!(b64_multi(&[1], &[2]), "B64_multi AQ== Ag==");
        assert_eq!(b64_multi_repeated(&[1]), "B64_multi AQ== AQ==");
    }
}
