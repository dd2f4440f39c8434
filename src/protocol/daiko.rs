//! Daiko ceiling light remote coding.
//!
//! Commands are one or two payload bytes behind a 2-byte header. The remote
//! supports two channels; the selected channel occupies the top bit of every
//! payload byte, and each payload byte is immediately followed by its one's
//! complement as a per-byte integrity check.

const COMMAND_HEADER: [u8; 2] = [0x85, 0xfb];

const CMD_OFF: u8 = 0;
const CMD_TOGGLE: u8 = 5;
const CMD_WHITE: u8 = 40;
const CMD_FULL: u8 = 41;
const CMD_WARM: u8 = 42;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    One = 0,
    Two = 1,
}


/// Command builder for the lights on one channel.
#[derive(Clone, Copy, Debug)]
pub struct DaikoLights {
    channel: Channel,
}

impl DaikoLights {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    fn write_byte(&self, buffer: &mut Vec<u8>, byte: u8) {
        let byte_with_channel = ((self.channel as u8) & 1) << 7 | byte;
        buffer.push(byte_with_channel);
        buffer.push(0xff - byte_with_channel);
    }

    fn command(&self, b1: u8, b2: Option<u8>) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(6);
        buffer.extend_from_slice(&COMMAND_HEADER);

        self.write_byte(&mut buffer, b1);
        if let Some(b2) = b2 {
            self.write_byte(&mut buffer, b2);
        }

        buffer
    }

    pub fn off(&self) -> Vec<u8> {
        self.command(CMD_OFF, None)
    }

    pub fn toggle(&self) -> Vec<u8> {
        self.command(CMD_TOGGLE, None)
    }

    pub fn white(&self) -> Vec<u8> {
        self.command(CMD_WHITE, None)
    }

    pub fn full(&self) -> Vec<u8> {
        self.command(CMD_FULL, None)
    }

    pub fn warm(&self) -> Vec<u8> {
        self.command(CMD_WARM, None)
    }

    /// Night light at `intensity` 1-10.
    ///
    /// The code mapping is piecewise with a jump between 7 and 8
    /// (`12` to `16`) -- that gap is how the remote numbers its codes,
    /// not an off-by-one.
    pub fn night_light(&self, intensity: u8) -> Vec<u8> {
        let code = if intensity <= 7 { intensity + 5 } else { intensity + 8 };
        self.command(code, None)
    }

    /// Turn on with the given warmth and brightness, each 1-11.
    pub fn on(&self, warmth: u8, brightness: u8) -> Vec<u8> {
        self.command(warmth + 28, Some(brightness + 18))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn check_integrity(command: &[u8]) {
        assert_eq!(&command[..2], &COMMAND_HEADER);
        for pair in command[2..].chunks(2) {
            assert_eq!(pair[1], 0xff - pair[0]);
        }
    }

    #[test]
    fn test_fixed_commands() {
        let lights = DaikoLights::new(Channel::One);

        assert_eq!(lights.off(), vec![0x85, 0xfb, 0, 0xff]);
        assert_eq!(lights.toggle(), vec![0x85, 0xfb, 5, 0xfa]);
        assert_eq!(lights.white(), vec![0x85, 0xfb, 40, 215]);
        assert_eq!(lights.full(), vec![0x85, 0xfb, 41, 214]);
        assert_eq!(lights.warm(), vec![0x85, 0xfb, 42, 213]);
    }

    #[test]
    fn test_channel_bit() {
        let lights = DaikoLights::new(Channel::Two);

        let command = lights.toggle();
        assert_eq!(command[2], 0x80 | 5);
        check_integrity(&command);
    }

    #[test]
    fn test_night_light_discontinuity() {
        let lights = DaikoLights::new(Channel::One);

        // the mapped codes jump from 12 to 16 across the 7/8 boundary
        assert_eq!(lights.night_light(7)[2], 12);
        assert_eq!(lights.night_light(8)[2], 16);

        assert_eq!(lights.night_light(1)[2], 6);
        assert_eq!(lights.night_light(10)[2], 18);
    }

    #[test]
    fn test_on_command() {
        let lights = DaikoLights::new(Channel::One);

        let command = lights.on(1, 1);
        assert_eq!(command, vec![0x85, 0xfb, 29, 226, 19, 236]);
        check_integrity(&command);

        // channel two sets the top bit of both payload bytes
        let command = DaikoLights::new(Channel::Two).on(11, 11);
        assert_eq!(command.len(), 6);
        assert_eq!(command[2], 0x80 | 39);
        assert_eq!(command[4], 0x80 | 29);
        check_integrity(&command);
    }

    #[test]
    fn test_every_command_is_integrity_framed() {
        for channel in [Channel::One, Channel::Two] {
            let lights = DaikoLights::new(channel);

            check_integrity(&lights.off());
            check_integrity(&lights.toggle());
            check_integrity(&lights.white());
            check_integrity(&lights.full());
            check_integrity(&lights.warm());

            for intensity in 1..=10 {
                check_integrity(&lights.night_light(intensity));
            }

            for warmth in 1..=11 {
                for brightness in 1..=11 {
                    check_integrity(&lights.on(warmth, brightness));
                }
            }
        }
    }
}
