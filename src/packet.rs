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


//! The 8 byte interrupt reports exchanged with the card.
//!
//! Output report: `[0x05, DO, DA1, DA2, 0, 0, 0, 0]`.
//!
//! Status report: `[In, St, A1, A2, C1lo, C1hi, C2lo, C2hi]` with the raw digital
//! inputs `In`, a status byte `St`, both analog inputs and the two 16 bit
//! event counters of inputs I1 and I2.

use crate::channel::DigitalInputs;
use crate::errors::*;

pub const REPORT_LEN: usize = 8;

const SET_ANALOG_DIGITAL: u8 = 5;

/// Values of all outputs, always sent to the card as a group.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Output {
    pub digital: u8,
    pub analog1: u8,
    pub analog2: u8,
}

impl Output {
    pub fn encode(&self) -> [u8; REPORT_LEN] {
        [SET_ANALOG_DIGITAL, self.digital, self.analog1, self.analog2, 0, 0, 0, 0]
    }
}

/// One reading of all inputs of a card.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Status {
    /// Raw digital input byte, see `DigitalInputs::decode`.
    pub inputs: u8,
    pub status: u8,
    pub analog1: u8,
    pub analog2: u8,
    pub counter1: u16,
    pub counter2: u16,
}

impl Status {
    pub fn decode(d: &[u8]) -> Result<Status> {
        if d.len() < REPORT_LEN {
            bail!(ErrorKind::ShortRead(d.len()));
        }
        Ok(Status {
            inputs: d[0],
            status: d[1],
            analog1: d[2],
            analog2: d[3],
            counter1: u16::from_le_bytes([d[4], d[5]]),
            counter2: u16::from_le_bytes([d[6], d[7]]),
        })
    }

    /// The `(inputs, status, analog1, analog2)` view of the report.
    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (self.inputs, self.status, self.analog1, self.analog2)
    }

    /// Decoded digital inputs I1 to I5.
    pub fn digital_inputs(&self) -> Result<DigitalInputs> {
        DigitalInputs::decode(self.inputs)
    }

    /// Event counter of input I1 (`index` 1) or I2 (`index` 2).
    pub fn counter(&self, index: u8) -> Result<u16> {
        check_counter_index(index)?;
        Ok(if index == 1 { self.counter1 } else { self.counter2 })
    }
}

/// Only inputs I1 and I2 have event counters.
pub fn check_counter_index(index: u8) -> Result<()> {
    match index {
        1 | 2 => Ok(()),
        _ => Err(ErrorKind::CounterIndex(index).into()),
    }
}
