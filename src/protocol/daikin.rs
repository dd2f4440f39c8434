//! Daikin A/C remote coding.
//!
//! The remote transmits a burst of two checksummed packets: a mostly-static
//! first frame carrying a single fan-related byte, and a second frame with
//! the mode, temperature, fan and timer settings.

use packed_struct::prelude::*;
use packed_struct::PackingError;

use super::Checksum;


#[derive(PrimitiveEnum_u8, Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Auto = 0,
    Dry = 2,
    Cooling = 3,
    Heating = 4,
    SendoffWind = 6,
}


/// Pack the two countdown timers into their shared 3-byte field.
///
/// The on timer is split 8 low / 3 high bits, the off timer 4 low / 7 high
/// bits; the off timer's low nibble shares the middle byte with the on
/// timer's high bits. An unset timer forces the `3` pattern into its high
/// bits, a sentinel distinct from a zero count. A zero count is treated as
/// unset, matching the remote.
pub fn encode_timers(on_timer: Option<u16>, off_timer: Option<u16>) -> [u8; 3] {
    let (on_low, on_high) = match on_timer {
        Some(t) if t != 0 => ((t & 0xff) as u8, ((t >> 8) & 0x7) as u8),
        _ => (0, 3 << 1),
    };

    let (off_low, off_high) = match off_timer {
        Some(t) if t != 0 => ((t & 0xf) as u8, ((t >> 4) & 0x7f) as u8),
        _ => (0, 3 << 5),
    };

    [on_low, off_low << 4 | on_high, off_high]
}


/// First frame of the burst. Static except for the fan byte.
#[derive(PackedStruct, Clone, Debug)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "19")]
pub struct Packet1 {
    #[packed_field(bytes = "0..=11")]
    pub header: [u8; 12],

    #[packed_field(bytes = "12")]
    pub fan_yonder: u8,

    #[packed_field(bytes = "13..=18")]
    pub rest: [u8; 6],
}

impl Default for Packet1 {
    fn default() -> Self {
        Self {
            header: [17, 218, 39, 0, 2, 0, 0, 0, 0, 0, 0, 0],
            fan_yonder: 0,
            rest: [0; 6],
        }
    }
}

impl Packet1 {
    pub fn encode(&self) -> Result<[u8; 20], PackingError> {
        let mut buffer = [0u8; 20];
        buffer[..19].copy_from_slice(&self.pack()?);
        buffer[19] = buffer[..19].iter().checksum();
        Ok(buffer)
    }
}


/// Second frame of the burst: mode, temperature, fan and timers.
#[derive(PackedStruct, Clone, Debug)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "18")]
pub struct Packet2 {
    #[packed_field(bytes = "0..=4")]
    pub header: [u8; 5],

    // byte 5

    #[packed_field(bits = "40")]
    pub padding1: bool,

    #[packed_field(bits = "41:43", ty = "enum")]
    pub mode: Mode,

    /// Reserved, always set.
    #[packed_field(bits = "44")]
    pub padding2: bool,

    #[packed_field(bits = "45")]
    pub off_timer_set: bool,

    #[packed_field(bits = "46")]
    pub on_timer_set: bool,

    #[packed_field(bits = "47")]
    pub power: bool,

    /// Half-degree wire units (degrees Celsius doubled).
    #[packed_field(bytes = "6")]
    pub temperature: u8,

    #[packed_field(bytes = "7")]
    pub padding3: u8,

    // byte 8

    #[packed_field(bits = "64:67")]
    pub fan_speed: u8,

    #[packed_field(bits = "68:71")]
    pub vane_direction: u8,

    // byte 9

    #[packed_field(bits = "72:75")]
    pub left_right: u8,

    #[packed_field(bits = "76:79")]
    pub padding4: u8,

    /// See [encode_timers].
    #[packed_field(bytes = "10..=12")]
    pub timers: [u8; 3],

    // byte 13

    #[packed_field(bits = "104:106")]
    pub padding5: u8,

    #[packed_field(bits = "107")]
    pub silent: bool,

    #[packed_field(bits = "108:110")]
    pub padding6: u8,

    #[packed_field(bits = "111")]
    pub powerful_mode: bool,

    // byte 14

    #[packed_field(bits = "112")]
    pub intelligent_on: bool,

    #[packed_field(bits = "113:119")]
    pub padding7: u8,

    /// Reserved, always `195`.
    #[packed_field(bytes = "15")]
    pub padding8: u8,

    #[packed_field(bytes = "16..=17")]
    pub rest: [u8; 2],
}

impl Default for Packet2 {
    fn default() -> Self {
        Self {
            header: [17, 218, 39, 0, 0],
            padding1: false,
            mode: Mode::Auto,
            padding2: true,
            off_timer_set: false,
            on_timer_set: false,
            power: false,
            temperature: 18 * 2,
            padding3: 0,
            fan_speed: 3,
            vane_direction: 15,
            left_right: 0,
            padding4: 0,
            timers: encode_timers(None, None),
            padding5: 0,
            silent: false,
            padding6: 0,
            powerful_mode: false,
            intelligent_on: false,
            padding7: 0,
            padding8: 195,
            rest: [0; 2],
        }
    }
}

impl Packet2 {
    pub fn encode(&self) -> Result<[u8; 19], PackingError> {
        let mut buffer = [0u8; 19];
        buffer[..18].copy_from_slice(&self.pack()?);
        buffer[18] = buffer[..18].iter().checksum();
        Ok(buffer)
    }
}


/// Sparse caller intent. Every `None` keeps the default record's value, so
/// an encode is total regardless of which fields the caller supplies.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub power: Option<bool>,
    pub mode: Option<Mode>,

    /// Degrees Celsius. Doubled into half-degree wire units during encode;
    /// a requested 0 encodes as wire byte 0.
    pub temperature: Option<u8>,

    pub fan_speed: Option<u8>,
    pub vane_direction: Option<u8>,
    pub left_right: Option<u8>,
    pub silent: Option<bool>,
    pub powerful_mode: Option<bool>,
    pub intelligent_on: Option<bool>,

    pub on_timer_set: Option<bool>,
    pub off_timer_set: Option<bool>,
    pub on_timer: Option<u16>,
    pub off_timer: Option<u16>,

    pub fan_yonder: Option<u8>,
}

/// Build the two-packet transmission for the given intent.
pub fn encode(options: &Options) -> Result<([u8; 20], [u8; 19]), PackingError> {
    let mut p1 = Packet1::default();
    if let Some(fan_yonder) = options.fan_yonder {
        p1.fan_yonder = fan_yonder;
    }

    let mut p2 = Packet2::default();
    if let Some(power) = options.power {
        p2.power = power;
    }
    if let Some(mode) = options.mode {
        p2.mode = mode;
    }
    if let Some(temperature) = options.temperature {
        p2.temperature = temperature.wrapping_mul(2);
    }
    if let Some(fan_speed) = options.fan_speed {
        p2.fan_speed = fan_speed;
    }
    if let Some(vane_direction) = options.vane_direction {
        p2.vane_direction = vane_direction;
    }
    if let Some(left_right) = options.left_right {
        p2.left_right = left_right;
    }
    if let Some(silent) = options.silent {
        p2.silent = silent;
    }
    if let Some(powerful_mode) = options.powerful_mode {
        p2.powerful_mode = powerful_mode;
    }
    if let Some(intelligent_on) = options.intelligent_on {
        p2.intelligent_on = intelligent_on;
    }
    if let Some(on_timer_set) = options.on_timer_set {
        p2.on_timer_set = on_timer_set;
    }
    if let Some(off_timer_set) = options.off_timer_set {
        p2.off_timer_set = off_timer_set;
    }
    if options.on_timer.is_some() || options.off_timer.is_some() {
        p2.timers = encode_timers(options.on_timer, options.off_timer);
    }

    Ok((p1.encode()?, p2.encode()?))
}
