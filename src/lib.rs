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


//! Driver session and blink demo for the *Vellemann K8055(N)* USB digital and analog IO-cards.
//!
//! See the Vellemann [Homepage](http://www.velleman.eu/products/view/?id=351346) for the
//! hardware specification.
//!
//! A card is opened by its symbolic name and then driven through the `Board` trait:
//!
//! ```no_run
//! use k8055_blink::{Board, DeviceName, K8055};
//!
//! let ctx = libusb::Context::new().unwrap();
//! let name: DeviceName = "K8055$".parse().unwrap();
//! let mut k = K8055::open_named(&ctx, &name).unwrap();
//! k.write_data(0x03, 0, 0).unwrap();
//! let (inputs, _, a1, a2) = k.read_data().unwrap().as_tuple();
//! println!("{} {} {}", inputs, a1, a2);
//! ```

#![crate_type = "lib"]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate error_chain;

pub mod errors;

pub mod board;
pub mod channel;
pub mod config;
pub mod demo;
pub mod device;
pub mod info;
pub mod k8055;
pub mod logging;
pub mod packet;

pub use crate::board::Board;
pub use crate::channel::{AnalogChannel, CardAddress, DigitalChannel, DigitalInputs};
pub use crate::config::DemoConfig;
pub use crate::device::{DeviceName, DEFAULT_DEVICE_NAME};
pub use crate::k8055::K8055;
pub use crate::packet::Status;
