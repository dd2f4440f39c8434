use strum_macros::{Display, EnumIter, EnumString};

/// Encoding identifiers understood by the transmitter firmware.
///
/// `Nec` through `Denon` (and `Unknown`) follow the IRremote library's
/// protocol numbering. `Raw`, `PanasonicBytes` and `Delay` are sender
/// extensions; `Delay` is only meaningful inside a bundled payload.
///
/// The numeric values are a stable wire contract -- do not renumber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[repr(i32)]
pub enum Encoding {
    Nec = 1,
    Sony = 2,
    Rc5 = 3,
    Rc6 = 4,
    Dish = 5,
    Sharp = 6,
    Panasonic = 7,
    Jvc = 8,
    Sanyo = 9,
    Mitsubishi = 10,
    Samsung = 11,
    Lg = 12,
    Whynter = 13,
    Coolix = 15,
    Daikin = 16,
    Denon = 17,
    Unknown = -1,

    Raw = 240,
    PanasonicBytes = 241,
    Delay = 239,
}

impl Encoding {
    /// Tag value for the single-byte framing convention.
    /// `Unknown` wraps to `0xff`.
    pub fn tag_byte(self) -> u8 {
        self as i32 as u8
    }

    /// Tag value for the 4-byte little-endian framing convention.
    pub fn tag_wide(self) -> i32 {
        self as i32
    }
}


#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(Encoding::Nec.tag_wide(), 1);
        assert_eq!(Encoding::Denon.tag_wide(), 17);
        assert_eq!(Encoding::Coolix.tag_wide(), 15);
        assert_eq!(Encoding::Unknown.tag_wide(), -1);
        assert_eq!(Encoding::Unknown.tag_byte(), 0xff);
        assert_eq!(Encoding::Raw.tag_byte(), 240);
        assert_eq!(Encoding::PanasonicBytes.tag_byte(), 241);
        assert_eq!(Encoding::Delay.tag_byte(), 239);
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!(Encoding::from_str("nec").unwrap(), Encoding::Nec);
        assert_eq!(Encoding::from_str("panasonic_bytes").unwrap(), Encoding::PanasonicBytes);
        assert_eq!(Encoding::PanasonicBytes.to_string(), "panasonic_bytes");

        for encoding in Encoding::iter() {
            assert_eq!(Encoding::from_str(&encoding.to_string()).unwrap(), encoding);
        }

        assert!(Encoding::from_str("betamax").is_err());
    }
}
