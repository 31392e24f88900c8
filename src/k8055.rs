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


//! libusb backed session with one K8055 card.

use std::fmt;
use std::time::Duration;

use libusb::{Context, Device, DeviceHandle};
use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::channel::{AnalogChannel, CardAddress, DigitalChannel, DigitalInputs};
use crate::device::DeviceName;
use crate::errors::*;
use crate::packet::{check_counter_index, Output, Status, REPORT_LEN};

const VENDOR_ID: u16 = 0x10cf;
const INTERFACE: u8 = 0;
const EP_OUT: u8 = 0x01;
const EP_IN: u8 = 0x81;
const TIMEOUT: Duration = Duration::from_millis(1000);

/// Object controlling one Vellemann K8055 card.
pub struct K8055<'a> {
    dev: Device<'a>,
    hd: Option<DeviceHandle<'a>>,
    // kernel driver detached by `open`, reattached on drop
    detached: bool,
    state: Output,
}

impl<'a> K8055<'a> {
    /// Create a new K8055 instance with the first card found on the system.
    ///
    /// Fails with `DeviceNotFound` if no card is connected to the system.
    pub fn new(ctx: &'a Context) -> Result<K8055<'a>> {
        K8055::new_addr(ctx, CardAddress::CARD_ANY)
    }

    /// Create a new K8055 instance with a specific card address.
    ///
    /// See the hardware jumpers on the card for your card's address. Fails with
    /// `DeviceNotFound` if no card with the address `addr` is connected.
    pub fn new_addr(ctx: &'a Context, addr: CardAddress) -> Result<K8055<'a>> {
        let mut found = Vec::new();
        for dev in ctx.devices()?.iter() {
            let desc = dev
                .device_descriptor()
                .chain_err(|| "Unable to get device description")?;
            found.push((desc.vendor_id(), desc.product_id(), dev));
        }
        let dev = select_card(found, addr)?;
        debug!(bus = dev.bus_number(), address = dev.address(), "found K8055");
        Ok(K8055 {
            dev,
            hd: None,
            detached: false,
            state: Output::default(),
        })
    }

    /// Find the card `name` resolves to and open it.
    pub fn open_named(ctx: &'a Context, name: &DeviceName) -> Result<K8055<'a>> {
        let mut k = K8055::new_addr(ctx, name.address())?;
        k.open()?;
        info!(device = %name, "opened {:?}", k);
        Ok(k)
    }

    /// Open the device for starting IO operations.
    ///
    /// Detaches an active kernel driver and claims the card's interface.
    /// Does nothing if the device is already open.
    pub fn open(&mut self) -> Result<()> {
        if self.hd.is_some() {
            return Ok(());
        }
        let mut hd = self.dev.open()?;
        self.detached = claim(&mut hd)?;
        self.hd = Some(hd);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.hd.is_some()
    }

    /// Set all analog and digital values to zero.
    pub fn reset(&mut self) -> Result<()> {
        self.write(Output::default())
    }

    // digital

    /// Write the digital value `d` to the outports.
    ///
    /// Leaves the analog values untouched.
    pub fn write_digital_out(&mut self, d: DigitalChannel) -> Result<()> {
        self.write(Output {
            digital: d.bits(),
            ..self.state
        })
    }

    /// Write the masked digital value `d` to the outports.
    ///
    /// Masks `d` with `mask` to only affect bits which are `on` in the mask.
    /// Leaves the analog values untouched.
    pub fn write_digital_out_mask(&mut self, d: DigitalChannel, mask: DigitalChannel) -> Result<()> {
        self.write_digital_out(d & mask)
    }

    /// Return the bits that are currently set on the digital out channel.
    pub fn get_digital_out(&self) -> DigitalChannel {
        DigitalChannel::from_bits_truncate(self.state.digital)
    }

    /// Return the bits that are currently set on the digital out channel, masked with `mask`.
    pub fn get_digital_out_mask(&self, mask: DigitalChannel) -> DigitalChannel {
        self.get_digital_out() & mask
    }

    /// Read the raw digital in channel.
    pub fn read_digital_in(&mut self) -> Result<DigitalChannel> {
        let s = self.read()?;
        Ok(DigitalChannel::from_bits_truncate(s.inputs))
    }

    /// Read the raw digital in channel masked with `mask`.
    pub fn read_digital_in_mask(&mut self, mask: DigitalChannel) -> Result<DigitalChannel> {
        Ok(self.read_digital_in()? & mask)
    }

    /// Read the digital inputs decoded to I1..I5.
    pub fn read_inputs(&mut self) -> Result<DigitalInputs> {
        self.read()?.digital_inputs()
    }

    /// Read the event counter of input I1 (`index` 1) or I2 (`index` 2).
    pub fn read_counter(&mut self, index: u8) -> Result<u16> {
        check_counter_index(index)?;
        self.read()?.counter(index)
    }

    // analog

    /// Write the analog value `a` to the given outport.
    ///
    /// Leaves the digital values untouched.
    pub fn write_analog_out(&mut self, a: AnalogChannel) -> Result<()> {
        let out = match a {
            AnalogChannel::A1(v) => Output {
                analog1: v,
                ..self.state
            },
            AnalogChannel::A2(v) => Output {
                analog2: v,
                ..self.state
            },
        };
        self.write(out)
    }

    /// Return the analog channel 1 out value
    pub fn get_analog_out1(&self) -> AnalogChannel {
        AnalogChannel::A1(self.state.analog1)
    }

    /// Return the analog channel 2 out value
    pub fn get_analog_out2(&self) -> AnalogChannel {
        AnalogChannel::A2(self.state.analog2)
    }

    /// Read the analog channel 1 input value.
    pub fn read_analog_in1(&mut self) -> Result<AnalogChannel> {
        Ok(AnalogChannel::A1(self.read()?.analog1))
    }

    /// Read the analog channel 2 input value.
    pub fn read_analog_in2(&mut self) -> Result<AnalogChannel> {
        Ok(AnalogChannel::A2(self.read()?.analog2))
    }

    // private
    fn write(&mut self, out: Output) -> Result<()> {
        let hd = self.hd.as_ref().ok_or(ErrorKind::NotOpen)?;
        let data = out.encode();
        trace!(?data, "write report");
        hd.write_interrupt(EP_OUT, &data, TIMEOUT)?;
        // update the internal state on output changes
        self.state = out;
        Ok(())
    }

    fn read(&mut self) -> Result<Status> {
        let hd = self.hd.as_ref().ok_or(ErrorKind::NotOpen)?;
        let mut data = [0u8; REPORT_LEN];
        let n = hd.read_interrupt(EP_IN, &mut data, TIMEOUT)?;
        trace!(?data, len = n, "read report");
        Status::decode(&data[..n])
    }
}

impl<'a> Board for K8055<'a> {
    fn write_data(&mut self, digital: u8, analog1: u8, analog2: u8) -> Result<()> {
        self.write(Output {
            digital,
            analog1,
            analog2,
        })
    }

    fn read_data(&mut self) -> Result<Status> {
        self.read()
    }
}

impl<'a> Drop for K8055<'a> {
    fn drop(&mut self) {
        if let Some(ref mut hd) = self.hd {
            if let Err(e) = release(hd, self.detached) {
                warn!("releasing K8055 failed: {}", e);
            }
        }
    }
}

impl<'a> fmt::Debug for K8055<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "K8055( bus: {}, address: {} )",
            self.dev.bus_number(),
            self.dev.address()
        )
    }
}

/// Pick the first `(vendor_id, product_id, device)` that is a K8055 at `addr`.
fn select_card<T, I>(found: I, addr: CardAddress) -> Result<T>
where
    I: IntoIterator<Item = (u16, u16, T)>,
{
    found
        .into_iter()
        .find(|&(vid, pid, _)| vid == VENDOR_ID && addr.matches(pid))
        .map(|(_, _, dev)| dev)
        .ok_or_else(|| ErrorKind::DeviceNotFound(DeviceName::for_address(addr).to_string()).into())
}

/// The handle operations needed to take the card from the kernel and give it back.
trait Interface {
    fn kernel_driver_active(&self, iface: u8) -> libusb::Result<bool>;
    fn detach_kernel_driver(&mut self, iface: u8) -> libusb::Result<()>;
    fn attach_kernel_driver(&mut self, iface: u8) -> libusb::Result<()>;
    fn claim_interface(&mut self, iface: u8) -> libusb::Result<()>;
    fn release_interface(&mut self, iface: u8) -> libusb::Result<()>;
}

impl<'a> Interface for DeviceHandle<'a> {
    fn kernel_driver_active(&self, iface: u8) -> libusb::Result<bool> {
        DeviceHandle::kernel_driver_active(self, iface)
    }

    fn detach_kernel_driver(&mut self, iface: u8) -> libusb::Result<()> {
        DeviceHandle::detach_kernel_driver(self, iface)
    }

    fn attach_kernel_driver(&mut self, iface: u8) -> libusb::Result<()> {
        DeviceHandle::attach_kernel_driver(self, iface)
    }

    fn claim_interface(&mut self, iface: u8) -> libusb::Result<()> {
        DeviceHandle::claim_interface(self, iface)
    }

    fn release_interface(&mut self, iface: u8) -> libusb::Result<()> {
        DeviceHandle::release_interface(self, iface)
    }
}

/// Claim the interface, returns whether a kernel driver had to be detached.
fn claim<H: Interface>(hd: &mut H) -> Result<bool> {
    // not supported on every platform, only an active driver matters
    let detach = hd.kernel_driver_active(INTERFACE).unwrap_or(false);
    if detach {
        hd.detach_kernel_driver(INTERFACE)?;
    }
    if let Err(e) = hd.claim_interface(INTERFACE) {
        if detach {
            let _ = hd.attach_kernel_driver(INTERFACE);
        }
        return Err(e.into());
    }
    Ok(detach)
}

fn release<H: Interface>(hd: &mut H, detached: bool) -> Result<()> {
    hd.release_interface(INTERFACE)?;
    if detached {
        hd.attach_kernel_driver(INTERFACE)?;
    }
    Ok(())
}
