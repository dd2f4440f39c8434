use std::str::FromStr;

use base64::prelude::{Engine as _, BASE64_STANDARD};
use bytes::{BufMut, BytesMut};
use thiserror::Error;

use super::encoding::Encoding;


/// Width of the encoding tag prepended to a payload.
///
/// Two wire conventions coexist in deployed transmitter firmware: the
/// original single-command firmware expects a 4-byte little-endian tag,
/// the bundling firmware a single tag byte per sub-command. Neither
/// supersedes the other, so the width is an explicit parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagWidth {
    Byte,
    WideLe,
}


#[derive(Error, Debug)]
pub enum FramingError {
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("bundled command too long ({len} bytes, 255 max)")]
    CommandTooLong { len: usize },

    #[error("too many commands in bundle ({count}, 255 max)")]
    TooManyCommands { count: usize },

    #[error("invalid base64 code")]
    InvalidCode(#[from] base64::DecodeError),
}


/// Prefix `payload` with the encoding tag in the given width.
pub fn with_encoding(encoding: Encoding, payload: &[u8], width: TagWidth) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(4 + payload.len());

    match width {
        TagWidth::Byte => buf.put_u8(encoding.tag_byte()),
        TagWidth::WideLe => buf.put_i32_le(encoding.tag_wide()),
    }
    buf.put(payload);

    buf.to_vec()
}

/// Pack a sequence of values as consecutive signed 32-bit little-endian words.
pub fn to_buffer(values: &[i32]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(values.len() * 4);
    for value in values {
        buf.put_i32_le(*value);
    }
    buf.to_vec()
}

/// Concatenate commands into one transport payload: a command-count byte,
/// then a 1-byte length prefix followed by the bytes of each command.
///
/// Both prefixes are a single byte, so a command longer than 255 bytes or a
/// bundle of more than 255 commands cannot be represented and is rejected.
pub fn bundle_commands<T: AsRef<[u8]>>(commands: &[T]) -> Result<Vec<u8>, FramingError> {
    if commands.len() > 0xff {
        return Err(FramingError::TooManyCommands { count: commands.len() });
    }

    let mut buf = BytesMut::new();
    buf.put_u8(commands.len() as u8);

    for command in commands {
        let command = command.as_ref();
        if command.len() > 0xff {
            return Err(FramingError::CommandTooLong { len: command.len() });
        }

        buf.put_u8(command.len() as u8);
        buf.put(command);
    }

    Ok(buf.to_vec())
}

/// A pause between bundled commands: the delay tag followed by the duration
/// in milliseconds, 16-bit little-endian.
pub fn delay_command(ms: u16) -> [u8; 3] {
    let [lo, hi] = ms.to_le_bytes();
    [Encoding::Delay.tag_byte(), lo, hi]
}


/// Carrier frequency reported alongside raw interval payloads.
const CARRIER_FREQUENCY: i32 = 35;

// Interval durations in microseconds.
const HDR_MARK: i32 = 3502;
const HDR_SPACE: i32 = 1700;
const BIT_MARK: i32 = 502;
const ONE_SPACE: i32 = 1244;
const ZERO_SPACE: i32 = 400;

/// Expand a byte payload into the `panasonic_intervals` waveform: a raw-tagged
/// sequence of alternating mark/space durations.
///
/// Header mark/space pair, then per bit a fixed mark and a space picked by the
/// bit value, finished by one trailing mark with no space. Bits are taken
/// least-significant first within each byte.
pub fn panasonic_intervals(data: &[u8]) -> Vec<u8> {
    let mut words = Vec::with_capacity(4 + data.len() * 16 + 1);

    words.extend([Encoding::Raw.tag_wide(), CARRIER_FREQUENCY, HDR_MARK, HDR_SPACE]);

    for byte in data {
        for bit in 0..8 {
            words.push(BIT_MARK);
            words.push(if byte & (1 << bit) != 0 { ONE_SPACE } else { ZERO_SPACE });
        }
    }

    words.push(BIT_MARK);

    to_buffer(&words)
}


/// Encode a base64 literal code under a named encoding.
///
/// `panasonic_intervals` expands the decoded bytes into a waveform payload;
/// every other name resolves through [Encoding] and tags the decoded bytes
/// as-is. Unknown names fail fast, aborting the whole encode.
pub fn encode_code(name: &str, code: &str, width: TagWidth) -> Result<Vec<u8>, FramingError> {
    if name == "panasonic_intervals" {
        return Ok(panasonic_intervals(&BASE64_STANDARD.decode(code)?));
    }

    let encoding = Encoding::from_str(name)
        .map_err(|_| FramingError::UnknownEncoding(name.to_string()))?;

    Ok(with_encoding(encoding, &BASE64_STANDARD.decode(code)?, width))
}
