pub mod codec;
pub mod daiko;
pub mod daikin;
pub mod encoding;
pub mod mitsubishi_gp82;


pub trait Checksum {
    fn checksum(&mut self) -> u8;
}

/// Additive 8-bit checksum, the integrity byte every checksummed packet
/// carries as its final byte. Sum-and-truncate, not a CRC.
impl<'a> Checksum for std::slice::Iter<'a, u8> {
    fn checksum(&mut self) -> u8 {
        self.fold(0, |acc, byte| acc.wrapping_add(*byte))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_wraps_modulo_256() {
        assert_eq!([0x10u8, 0x20, 0x30].iter().checksum(), 0x60);
        assert_eq!([0xffu8, 0x01].iter().checksum(), 0x00);
        assert_eq!([0xffu8, 0xff, 0x03].iter().checksum(), 0x01);
        assert_eq!([0u8; 0].iter().checksum(), 0x00);
    }
}
