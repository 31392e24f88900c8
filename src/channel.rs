//  K8055.rs is a library for controlling the Vellemann K8055 USB IO card from rust.
//  Copyright (C) 2014 Falco Hirschenberger <falco.hirschenberger@gmail.com>
//
//  This program is free software; you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation; either version 2 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License along
//  with this program; if not, write to the Free Software Foundation, Inc.,
//  51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.


//! Channel values and card addresses of the K8055.

use crate::errors::*;

/// Analog values in the range (0-255).
#[derive(PartialEq, PartialOrd, Debug, Copy, Clone)]
pub enum AnalogChannel {
    A1(u8),
    A2(u8),
}

bitflags!(
#[doc = "
The digital output channel values.

Can be combined with bitoperations.

    use k8055_blink::DigitalChannel;
    let dc = DigitalChannel::D1 | DigitalChannel::D2 | DigitalChannel::D3;

See the bitflags documentation for more information.
"]
  pub struct DigitalChannel: u8 {
#[doc = "All flags set to `off`"]
    const DZERO = 0;
    const D1 = 1;
    const D2 = 2;
    const D3 = 4;
    const D4 = 8;
    const D5 = 16;
    const D6 = 32;
    const D7 = 64;
    const D8 = 128;
#[doc = "All flags set to `on`"]
    const DALL = 255;
  }
);

bitflags!(
#[doc = "
Adresses of the different cards that can be controlled.

See the jumper setting on your card for the correct address.
"]
    pub struct CardAddress: u16 {
#[doc = "Use card `0x5500` (see jumper settings)"]
        const CARD_1 = 0x5500;
#[doc = "Use card `0x5501` (see jumper settings)"]
        const CARD_2 = 0x5501;
#[doc = "Use card `0x5502` (see jumper settings)"]
        const CARD_3 = 0x5502;
#[doc = "Use card `0x5503` (see jumper settings)"]
        const CARD_4 = 0x5503;
#[doc = "Automatically selects the first card found on the system"]
        const CARD_ANY = 0x0;
    }
);

impl CardAddress {
    /// All concrete card addresses, in jumper order.
    pub const ALL: [CardAddress; 4] = [
        CardAddress::CARD_1,
        CardAddress::CARD_2,
        CardAddress::CARD_3,
        CardAddress::CARD_4,
    ];

    /// Whether a USB product id belongs to this address.
    ///
    /// `CARD_ANY` matches every K8055 product id.
    pub fn matches(self, product_id: u16) -> bool {
        if self == CardAddress::CARD_ANY {
            CardAddress::ALL.iter().any(|a| a.bits() == product_id)
        } else {
            self.bits() == product_id
        }
    }
}

bitflags!(
#[doc = "
The decoded digital input channels I1 to I5.

The board reports its inputs scrambled (I1: 0x10, I2: 0x20, I3: 0x01,
I4: 0x40, I5: 0x80), `DigitalInputs::decode` maps them to bits 0-4.
"]
    pub struct DigitalInputs: u8 {
        const I1 = 1;
        const I2 = 2;
        const I3 = 4;
        const I4 = 8;
        const I5 = 16;
    }
);

// raw input bit for I1..I5
const RAW_INPUT_BITS: [u8; 5] = [0x10, 0x20, 0x01, 0x40, 0x80];
const RAW_UNUSED_BITS: u8 = 0x0e;

impl DigitalInputs {
    /// Decode the raw input byte of a status report.
    ///
    /// Fails with `InputRange` if a bit is set that carries no input.
    pub fn decode(raw: u8) -> Result<DigitalInputs> {
        if raw & RAW_UNUSED_BITS != 0 {
            bail!(ErrorKind::InputRange(raw));
        }
        let bits = RAW_INPUT_BITS
            .iter()
            .enumerate()
            .filter(|&(_, &b)| raw & b != 0)
            .fold(0u8, |acc, (i, _)| acc | 1 << i);
        Ok(DigitalInputs::from_bits_truncate(bits))
    }

    /// State of input `index` (1-5), `true` when the input is pulled low.
    pub fn is_set(self, index: u8) -> Result<bool> {
        match index {
            1..=5 => Ok(self.bits() & (1 << (index - 1)) != 0),
            _ => Err(ErrorKind::InputIndex(index).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0x00 => DigitalInputs::empty(); "nothing pressed")]
    #[test_case(0x10 => DigitalInputs::I1; "i1")]
    #[test_case(0x20 => DigitalInputs::I2; "i2")]
    #[test_case(0x01 => DigitalInputs::I3; "i3")]
    #[test_case(0x40 => DigitalInputs::I4; "i4")]
    #[test_case(0x80 => DigitalInputs::I5; "i5")]
    #[test_case(0xf1 => DigitalInputs::all(); "all pressed")]
    fn decode_raw_inputs(raw: u8) -> DigitalInputs {
        DigitalInputs::decode(raw).unwrap()
    }

    #[test_case(0x02)]
    #[test_case(0x04)]
    #[test_case(0x18)]
    fn decode_rejects_unused_bits(raw: u8) {
        match DigitalInputs::decode(raw) {
            Err(Error(ErrorKind::InputRange(r), _)) => assert_eq!(r, raw),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn single_input_lookup() {
        let inputs = DigitalInputs::I2 | DigitalInputs::I5;
        assert!(!inputs.is_set(1).unwrap());
        assert!(inputs.is_set(2).unwrap());
        assert!(inputs.is_set(5).unwrap());
        assert!(inputs.is_set(0).is_err());
        assert!(inputs.is_set(6).is_err());
    }

    #[test]
    fn card_address_matching() {
        assert!(CardAddress::CARD_ANY.matches(0x5502));
        assert!(!CardAddress::CARD_ANY.matches(0x1234));
        assert!(CardAddress::CARD_2.matches(0x5501));
        assert!(!CardAddress::CARD_2.matches(0x5500));
    }
}
