//! Mitsubishi GP82 A/C remote coding.
//!
//! A single 14-byte checksummed packet. The temperature field is inverted
//! and offset: wire value = 31 - degrees Celsius, so 31C packs as 0 and
//! 16C as 15. That offset is an appliance constant, not a scale.

use packed_struct::prelude::*;
use packed_struct::PackingError;
use tracing::debug;

use super::Checksum;


#[derive(PrimitiveEnum_u8, Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Heating = 1,
    Dry = 2,
    Cooling = 3,
}

#[derive(PrimitiveEnum_u8, Clone, Copy, Debug, PartialEq)]
pub enum DryIntensity {
    Standard = 0,
    Weak = 1,
    Strong = 3,
}

#[derive(PrimitiveEnum_u8, Clone, Copy, Debug, PartialEq)]
pub enum WindSpeed {
    Auto = 0,
    Quiet = 2,
    Weak = 3,
    Strong = 5,
}

#[derive(PrimitiveEnum_u8, Clone, Copy, Debug, PartialEq)]
pub enum WindDirection {
    Auto = 0,
    Topmost = 1,
    Top = 2,
    Middle = 3,
    Bottom = 4,
    Downmost = 5,
}


/// Lowest temperature the remote offers.
const DEGREES_MIN: u8 = 16;

/// Highest temperature the remote offers; also the wire encoding's zero point.
const DEGREES_MAX: u8 = 31;

/// Map degrees Celsius to the inverted wire value. Requests outside the
/// remote's 16-31 span clamp to the nearest end of the scale.
fn wire_temperature(celsius: u8) -> u8 {
    DEGREES_MAX - celsius.clamp(DEGREES_MIN, DEGREES_MAX)
}


/// The complete command record as it packs onto the wire (checksum aside).
#[derive(PackedStruct, Clone, Debug)]
#[packed_struct(bit_numbering = "msb0", size_bytes = "13")]
pub struct Command {
    #[packed_field(bytes = "0..=4")]
    pub header: [u8; 5],

    // byte 5

    /// Reserved, always `1`.
    #[packed_field(bits = "40:42")]
    pub padding1: u8,

    #[packed_field(bits = "43:44")]
    pub timer_mode: u8,

    #[packed_field(bits = "45")]
    pub on: bool,

    #[packed_field(bits = "46:47")]
    pub padding2: u8,

    // byte 6

    #[packed_field(bits = "48:51")]
    pub padding3: u8,

    #[packed_field(bits = "52:53", ty = "enum")]
    pub dry_intensity: DryIntensity,

    #[packed_field(bits = "54:55", ty = "enum")]
    pub mode: Mode,

    // byte 7

    #[packed_field(bits = "56:59")]
    pub padding4: u8,

    /// Inverted wire value (31 - degrees Celsius).
    #[packed_field(bits = "60:63")]
    pub temperature: u8,

    // byte 8

    #[packed_field(bits = "64:65")]
    pub is_timer_command: u8,

    #[packed_field(bits = "66:68", ty = "enum")]
    pub wind_direction: WindDirection,

    #[packed_field(bits = "69:71", ty = "enum")]
    pub wind_speed: WindSpeed,

    #[packed_field(bytes = "9")]
    pub timer_value: u8,

    #[packed_field(bytes = "10")]
    pub padding5: u8,

    // byte 11

    #[packed_field(bits = "88:89")]
    pub padding6: u8,

    #[packed_field(bits = "90")]
    pub cool_feeling: bool,

    #[packed_field(bits = "91:95")]
    pub padding7: u8,

    #[packed_field(bytes = "12")]
    pub padding8: u8,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            header: [0x23, 0xcb, 0x26, 0x01, 0x00],
            padding1: 1,
            timer_mode: 0,
            on: false,
            padding2: 0,
            padding3: 0,
            dry_intensity: DryIntensity::Standard,
            mode: Mode::Heating,
            padding4: 0,
            temperature: 13, // 18 degrees
            is_timer_command: 0,
            wind_direction: WindDirection::Auto,
            wind_speed: WindSpeed::Auto,
            timer_value: 0,
            padding5: 0,
            padding6: 0,
            cool_feeling: false,
            padding7: 0,
            padding8: 0,
        }
    }
}

impl Command {
    pub fn encode(&self) -> Result<[u8; 14], PackingError> {
        let mut buffer = [0u8; 14];
        buffer[..13].copy_from_slice(&self.pack()?);
        buffer[13] = buffer[..13].iter().checksum();
        Ok(buffer)
    }
}


/// Sparse caller intent. Every `None` keeps the default record's value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub on: Option<bool>,
    pub mode: Option<Mode>,

    /// Degrees Celsius, 16 to 31.
    pub temperature: Option<u8>,

    pub dry_intensity: Option<DryIntensity>,
    pub wind_speed: Option<WindSpeed>,
    pub wind_direction: Option<WindDirection>,
    pub cool_feeling: Option<bool>,

    pub timer_mode: Option<u8>,
    pub is_timer_command: Option<u8>,
    pub timer_value: Option<u8>,
}

/// Build the 14-byte command packet for the given intent.
pub fn encode(options: &Options) -> Result<[u8; 14], PackingError> {
    let mut command = Command::default();

    if let Some(on) = options.on {
        command.on = on;
    }
    if let Some(mode) = options.mode {
        command.mode = mode;
    }
    if let Some(temperature) = options.temperature {
        command.temperature = wire_temperature(temperature);
    }
    if let Some(dry_intensity) = options.dry_intensity {
        command.dry_intensity = dry_intensity;
    }
    if let Some(wind_speed) = options.wind_speed {
        command.wind_speed = wind_speed;
    }
    if let Some(wind_direction) = options.wind_direction {
        command.wind_direction = wind_direction;
    }
    if let Some(cool_feeling) = options.cool_feeling {
        command.cool_feeling = cool_feeling;
    }
    if let Some(timer_mode) = options.timer_mode {
        command.timer_mode = timer_mode;
    }
    if let Some(is_timer_command) = options.is_timer_command {
        command.is_timer_command = is_timer_command;
    }
    if let Some(timer_value) = options.timer_value {
        command.timer_value = timer_value;
    }

    debug!(?command, "encoding gp82 command");

    command.encode()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_inversion() {
        let packet = encode(&Options {
            temperature: Some(25),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(packet[7] & 0x0f, 31 - 25);

        let coldest = encode(&Options {
            temperature: Some(16),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(coldest[7] & 0x0f, 15);

        let hottest = encode(&Options {
            temperature: Some(31),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(hottest[7] & 0x0f, 0);
    }

    #[test]
    fn test_temperature_out_of_range() {
        // above the scale saturates to the hottest wire value
        let packet = encode(&Options {
            temperature: Some(40),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(packet[7] & 0x0f, 0);

        // below the scale clamps to the coldest wire value
        let packet = encode(&Options {
            temperature: Some(10),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(packet[7] & 0x0f, 15);
    }

    #[test]
    fn test_default_packet() {
        let packet = encode(&Options::default()).unwrap();

        assert_eq!(packet.len(), 14);
        assert_eq!(&packet[..5], &[0x23, 0xcb, 0x26, 0x01, 0x00]);

        // padding1 in the top 3 bits of byte 5, everything else clear
        assert_eq!(packet[5], 0b001_00000);
        // mode heating in the low 2 bits of byte 6
        assert_eq!(packet[6], 0x01);
        // default 18 degrees
        assert_eq!(packet[7], 13);

        assert_eq!(packet[13], packet[..13].iter().checksum());
    }

    #[test]
    fn test_cooling_command() {
        let packet = encode(&Options {
            on: Some(true),
            mode: Some(Mode::Cooling),
            temperature: Some(22),
            wind_speed: Some(WindSpeed::Strong),
            wind_direction: Some(WindDirection::Downmost),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(packet[5], 0b001_00100); // padding1 | on
        assert_eq!(packet[6], 0x03); // cooling
        assert_eq!(packet[7], 9); // 31 - 22
        assert_eq!(packet[8], (5 << 3) | 5); // direction downmost, speed strong
        assert_eq!(packet[13], packet[..13].iter().checksum());
    }
}
