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


//! Blink the outputs of a K8055 and read back its inputs.
//!
//! Usage: `k8055-blink [DEVICE]`, see `k8055_blink::config` for the
//! environment overrides.

#[macro_use]
extern crate error_chain;

use std::env;
use std::thread;

use k8055_blink::errors::*;
use k8055_blink::info::info_string;
use k8055_blink::{demo, logging, DemoConfig, K8055};
use tracing::info;

fn run() -> Result<()> {
    logging::init();

    let mut config = DemoConfig::from_env()?;
    if let Some(device) = env::args().nth(1) {
        config.device = device;
    }
    info!("{}", info_string(6)?.trim_end());
    info!("{}", info_string(4)?.trim_end());

    let ctx = libusb::Context::new().chain_err(|| "Unable to initialize libusb")?;
    let summary = demo::run(&config, |name| K8055::open_named(&ctx, name), thread::sleep)?;
    info!(cycles = summary.cycles, "done");
    Ok(())
}

quick_main!(run);
