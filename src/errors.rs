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


//! Error type shared by the driver session, the demo and its configuration.

error_chain! {
    foreign_links {
        Usb(libusb::Error);
    }

    errors {
        /// No card matching the device name is connected.
        DeviceNotFound(name: String) {
            description("K8055 device not found")
            display("no K8055 card found for device name '{}'", name)
        }
        InvalidDeviceName(name: String) {
            description("invalid K8055 device name")
            display("invalid device name '{}', expected K8055$ or K8055$1..K8055$4", name)
        }
        /// IO was attempted on a session that was never opened.
        NotOpen {
            description("K8055 device not open")
            display("K8055 device not open")
        }
        ShortRead(len: usize) {
            description("short status report")
            display("status report has {} bytes, expected 8", len)
        }
        /// Raw input byte has bits set that no input is wired to.
        InputRange(raw: u8) {
            description("digital input byte out of range")
            display("raw digital input byte {:#04x} has unused bits set", raw)
        }
        InputIndex(index: u8) {
            description("digital input index out of range")
            display("digital input index {} out of range 1..5", index)
        }
        CounterIndex(index: u8) {
            description("counter index out of range")
            display("counter index {} out of range 1..2", index)
        }
        InfoIndex(section: usize, byte: usize) {
            description("info string index out of range")
            display("info string index ({}, {}) out of range", section, byte)
        }
        Config(msg: String) {
            description("invalid configuration")
            display("configuration error: {}", msg)
        }
    }
}
