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


//! Settings of the blink demo.
//!
//! Every value has a default and can be overridden from the environment:
//!
//! | variable                 | default  |
//! |--------------------------|----------|
//! | `K8055_DEVICE`           | `K8055$` |
//! | `K8055_CYCLES`           | `100`    |
//! | `K8055_STEP_DELAY_MS`    | `5000`   |
//! | `K8055_SETTLE_DELAY_MS`  | `1000`   |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::device::DEFAULT_DEVICE_NAME;
use crate::errors::*;

pub const ENV_DEVICE: &str = "K8055_DEVICE";
pub const ENV_CYCLES: &str = "K8055_CYCLES";
pub const ENV_STEP_DELAY_MS: &str = "K8055_STEP_DELAY_MS";
pub const ENV_SETTLE_DELAY_MS: &str = "K8055_SETTLE_DELAY_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Symbolic name of the card to open.
    pub device: String,
    /// How often the blink sequence runs.
    pub cycles: u32,
    /// Pause after every write and read.
    pub step_delay: Duration,
    /// Pause between opening the card and the first step.
    pub settle_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> DemoConfig {
        DemoConfig {
            device: DEFAULT_DEVICE_NAME.to_owned(),
            cycles: 100,
            step_delay: Duration::from_secs(5),
            settle_delay: Duration::from_secs(1),
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<DemoConfig> {
        DemoConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `K8055_*` keys.
    pub fn from_lookup<F>(lookup: F) -> Result<DemoConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DemoConfig::default();
        if let Some(device) = lookup(ENV_DEVICE) {
            config.device = device;
        }
        if let Some(cycles) = parse_var(&lookup, ENV_CYCLES)? {
            config.cycles = cycles;
        }
        if let Some(ms) = parse_var(&lookup, ENV_STEP_DELAY_MS)? {
            config.step_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(&lookup, ENV_SETTLE_DELAY_MS)? {
            config.settle_delay = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            ErrorKind::Config(format!("invalid value '{}' for {}", value, key)).into()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = DemoConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.device, "K8055$");
        assert_eq!(config.cycles, 100);
        assert_eq!(config.step_delay, Duration::from_secs(5));
        assert_eq!(config.settle_delay, Duration::from_secs(1));
    }

    #[test]
    fn overrides_from_lookup() {
        let config = DemoConfig::from_lookup(lookup_in(&[
            (ENV_DEVICE, "K8055$2"),
            (ENV_CYCLES, "3"),
            (ENV_STEP_DELAY_MS, " 20 "),
            (ENV_SETTLE_DELAY_MS, "0"),
        ]))
        .unwrap();
        assert_eq!(config.device, "K8055$2");
        assert_eq!(config.cycles, 3);
        assert_eq!(config.step_delay, Duration::from_millis(20));
        assert_eq!(config.settle_delay, Duration::from_millis(0));
    }

    #[test]
    fn invalid_number_is_rejected() {
        match DemoConfig::from_lookup(lookup_in(&[(ENV_CYCLES, "many")])) {
            Err(Error(ErrorKind::Config(msg), _)) => assert!(msg.contains(ENV_CYCLES)),
            other => panic!("unexpected {:?}", other),
        }
    }
}
