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


//! Information strings about this library.
//!
//! Six strings are available, each starting with its index. The first one is
//! a length template only.

use crate::errors::*;

/// Width every info string is padded to.
pub const INFO_STR_LEN: usize = 32;

const INFO_STRINGS: [&str; 6] = [
    "1 abcdefghijklmnopqrstuvwxyzABCD",
    "2 Authors: F. Hirschenberger",
    "3 Date: 2026-10-19",
    concat!("4 Version: ", env!("CARGO_PKG_VERSION")),
    concat!("5 Licence: ", env!("CARGO_PKG_LICENSE")),
    concat!("6 Name: ", env!("CARGO_PKG_NAME")),
];

/// Info string `section` (1-6), padded or cut to `INFO_STR_LEN` bytes.
pub fn info_string(section: usize) -> Result<String> {
    let s = section
        .checked_sub(1)
        .and_then(|i| INFO_STRINGS.get(i))
        .ok_or(ErrorKind::InfoIndex(section, 0))?;
    let mut out: String = s.chars().take(INFO_STR_LEN).collect();
    while out.len() < INFO_STR_LEN {
        out.push(' ');
    }
    Ok(out)
}

/// Byte `byte` (1-32) of info string `section` (1-6).
pub fn info_byte(section: usize, byte: usize) -> Result<u8> {
    let s = info_string(section).map_err(|_| ErrorKind::InfoIndex(section, byte))?;
    byte.checked_sub(1)
        .and_then(|i| s.as_bytes().get(i).cloned())
        .ok_or_else(|| ErrorKind::InfoIndex(section, byte).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_padded_and_indexed() {
        for section in 1..=6 {
            let s = info_string(section).unwrap();
            assert_eq!(s.len(), INFO_STR_LEN);
            assert!(s.starts_with(&section.to_string()));
        }
        assert_eq!(info_string(1).unwrap(), "1 abcdefghijklmnopqrstuvwxyzABCD");
        assert!(info_string(6).unwrap().starts_with("6 Name: k8055-blink"));
    }

    #[test]
    fn strings_fit_without_cutting() {
        for s in INFO_STRINGS.iter() {
            assert!(s.len() <= INFO_STR_LEN, "{:?} too long", s);
        }
        assert_eq!(info_string(2).unwrap().trim_end(), "2 Authors: F. Hirschenberger");
    }

    #[test]
    fn section_three_is_the_date() {
        let s = info_string(3).unwrap();
        assert!(s.starts_with("3 Date: "));
        let date = s["3 Date: ".len()..].trim_end();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[7..8], "-");
        assert_eq!(info_byte(3, 3).unwrap(), b'D');
    }

    #[test]
    fn out_of_range_sections() {
        assert!(info_string(0).is_err());
        assert!(info_string(7).is_err());
    }

    #[test]
    fn single_bytes() {
        assert_eq!(info_byte(1, 1).unwrap(), b'1');
        assert_eq!(info_byte(1, 3).unwrap(), b'a');
        assert_eq!(info_byte(1, 32).unwrap(), b'D');
        assert!(info_byte(1, 0).is_err());
        assert!(info_byte(1, 33).is_err());
        assert!(info_byte(9, 1).is_err());
    }
}
