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


//! The call surface a K8055 session offers to applications.

use crate::errors::*;
use crate::packet::Status;

/// Raw access to one opened card.
///
/// Outputs are always written as a group: the digital output byte and both
/// analog output values.
pub trait Board {
    /// Set the digital outputs and both analog outputs.
    fn write_data(&mut self, digital: u8, analog1: u8, analog2: u8) -> Result<()>;

    /// Read one status report.
    fn read_data(&mut self) -> Result<Status>;
}

impl<'b, B: Board + ?Sized> Board for &'b mut B {
    fn write_data(&mut self, digital: u8, analog1: u8, analog2: u8) -> Result<()> {
        (**self).write_data(digital, analog1, analog2)
    }

    fn read_data(&mut self) -> Result<Status> {
        (**self).read_data()
    }
}
