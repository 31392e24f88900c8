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


//! Symbolic device names.
//!
//! A card is addressed by a name like `K8055$`, which selects the first card
//! found, or `K8055$1` to `K8055$4`, which select the card with the matching
//! jumper address.

use std::fmt;
use std::str::FromStr;

use crate::channel::CardAddress;
use crate::errors::*;

/// Name of the first card found on the system.
pub const DEFAULT_DEVICE_NAME: &str = "K8055$";

const PREFIX: &str = "K8055$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceName {
    name: String,
    addr: CardAddress,
}

impl DeviceName {
    /// The card address this name resolves to.
    pub fn address(&self) -> CardAddress {
        self.addr
    }

    /// Canonical name of the card at `addr`.
    pub fn for_address(addr: CardAddress) -> DeviceName {
        let name = match CardAddress::ALL.iter().position(|&a| a == addr) {
            Some(i) => format!("{}{}", PREFIX, i + 1),
            None => PREFIX.to_owned(),
        };
        DeviceName { name, addr }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl Default for DeviceName {
    fn default() -> DeviceName {
        DeviceName {
            name: DEFAULT_DEVICE_NAME.to_owned(),
            addr: CardAddress::CARD_ANY,
        }
    }
}

impl FromStr for DeviceName {
    type Err = Error;

    fn from_str(s: &str) -> Result<DeviceName> {
        let name = s.trim();
        let invalid = || Error::from(ErrorKind::InvalidDeviceName(s.to_owned()));

        let prefix = name.get(..PREFIX.len()).ok_or_else(invalid)?;
        if !prefix.eq_ignore_ascii_case(PREFIX) {
            return Err(invalid());
        }
        let addr = match &name[PREFIX.len()..] {
            "" => CardAddress::CARD_ANY,
            "1" => CardAddress::CARD_1,
            "2" => CardAddress::CARD_2,
            "3" => CardAddress::CARD_3,
            "4" => CardAddress::CARD_4,
            _ => return Err(invalid()),
        };
        Ok(DeviceName {
            name: name.to_owned(),
            addr,
        })
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("K8055$" => CardAddress::CARD_ANY; "any card")]
    #[test_case("k8055$" => CardAddress::CARD_ANY; "lower case")]
    #[test_case(" K8055$ " => CardAddress::CARD_ANY; "surrounding whitespace")]
    #[test_case("K8055$1" => CardAddress::CARD_1; "card 1")]
    #[test_case("K8055$4" => CardAddress::CARD_4; "card 4")]
    fn resolve(name: &str) -> CardAddress {
        name.parse::<DeviceName>().unwrap().address()
    }

    #[test_case(""; "empty")]
    #[test_case("K8055"; "missing dollar")]
    #[test_case("K8055$0"; "card 0")]
    #[test_case("K8055$5"; "card 5")]
    #[test_case("K8055$x"; "garbage suffix")]
    #[test_case("K8055$+1"; "signed suffix")]
    #[test_case("K8055$01"; "leading zero")]
    #[test_case("K8055$1 2"; "inner whitespace")]
    #[test_case("KDEV01"; "other device")]
    #[test_case("Kä055$"; "non ascii")]
    fn reject(name: &str) {
        match name.parse::<DeviceName>() {
            Err(Error(ErrorKind::InvalidDeviceName(n), _)) => assert_eq!(n, name),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test_case(CardAddress::CARD_ANY => "K8055$"; "any card")]
    #[test_case(CardAddress::CARD_1 => "K8055$1"; "card 1")]
    #[test_case(CardAddress::CARD_4 => "K8055$4"; "card 4")]
    fn name_for_address(addr: CardAddress) -> String {
        let name = DeviceName::for_address(addr);
        assert_eq!(name.address(), addr);
        assert_eq!(name, name.as_str().parse().unwrap());
        name.to_string()
    }

    #[test]
    fn default_is_any_card() {
        let name = DeviceName::default();
        assert_eq!(name.to_string(), "K8055$");
        assert_eq!(name.address(), CardAddress::CARD_ANY);
        assert_eq!(name, DEFAULT_DEVICE_NAME.parse().unwrap());
    }
}
