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


//! The blink demo.
//!
//! Opens one card and runs a fixed sequence of output writes and input reads,
//! pausing after every step. The first failing call ends the run.

use std::time::Duration;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::DemoConfig;
use crate::device::DeviceName;
use crate::errors::*;
use crate::packet::Status;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Write { digital: u8, analog1: u8, analog2: u8 },
    Read { label: &'static str },
}

/// One cycle of the demo.
pub const BLINK_SEQUENCE: [Step; 6] = [
    Step::Write { digital: 0x03, analog1: 0, analog2: 0 },
    Step::Write { digital: 0xF0, analog1: 0, analog2: 0 },
    Step::Write { digital: 0xF1, analog1: 0x40, analog2: 130 },
    Step::Read { label: "read data1" },
    Step::Write { digital: 0x42, analog1: 0x80, analog2: 200 },
    Step::Read { label: "read data2" },
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of completed cycles.
    pub cycles: u32,
    pub last_status: Option<Status>,
}

/// Open the configured device with `open` and run the demo on it.
///
/// `pause` is called with the settle delay once and with the step delay after
/// every step.
pub fn run<B, O, P>(config: &DemoConfig, open: O, mut pause: P) -> Result<Summary>
where
    B: Board,
    O: FnOnce(&DeviceName) -> Result<B>,
    P: FnMut(Duration),
{
    let name: DeviceName = config.device.parse()?;
    let mut board = open(&name)?;
    info!(device = %name, cycles = config.cycles, "starting blink demo");
    pause(config.settle_delay);

    let mut summary = Summary::default();
    for cycle in 1..=config.cycles {
        debug!(cycle, "cycle");
        if let Some(status) = run_cycle(&mut board, config.step_delay, &mut pause)? {
            summary.last_status = Some(status);
        }
        summary.cycles = cycle;
    }
    info!(cycles = summary.cycles, "blink demo finished");
    Ok(summary)
}

/// Run `BLINK_SEQUENCE` once, returning the last status read.
pub fn run_cycle<B, P>(board: &mut B, step_delay: Duration, pause: &mut P) -> Result<Option<Status>>
where
    B: Board,
    P: FnMut(Duration),
{
    let mut last = None;
    for step in BLINK_SEQUENCE.iter() {
        match *step {
            Step::Write { digital, analog1, analog2 } => {
                board.write_data(digital, analog1, analog2)?;
                info!("{:#04x},{:#04x},{}", digital, analog1, analog2);
            }
            Step::Read { label } => {
                let status = board.read_data()?;
                let (inputs, st, a1, a2) = status.as_tuple();
                info!("{} {} {} {} {}", label, inputs, st, a1, a2);
                last = Some(status);
            }
        }
        pause(step_delay);
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Write(u8, u8, u8),
        Read,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        fail_after: Option<usize>,
        reads: u8,
    }

    impl Recorder {
        fn check(&self) -> Result<()> {
            match self.fail_after {
                Some(n) if self.calls.len() > n => Err(libusb::Error::Timeout.into()),
                _ => Ok(()),
            }
        }
    }

    impl Board for Recorder {
        fn write_data(&mut self, digital: u8, analog1: u8, analog2: u8) -> Result<()> {
            self.calls.push(Call::Write(digital, analog1, analog2));
            self.check()
        }

        fn read_data(&mut self) -> Result<Status> {
            self.calls.push(Call::Read);
            self.check()?;
            self.reads = self.reads.wrapping_add(1);
            Ok(Status {
                analog1: self.reads,
                ..Status::default()
            })
        }
    }

    fn one_cycle() -> Vec<Call> {
        vec![
            Call::Write(0x03, 0, 0),
            Call::Write(0xF0, 0, 0),
            Call::Write(0xF1, 0x40, 130),
            Call::Read,
            Call::Write(0x42, 0x80, 200),
            Call::Read,
        ]
    }

    #[test]
    fn default_run_issues_fixed_sequence() {
        let config = DemoConfig::default();
        let mut board = Recorder::default();
        let mut opened = Vec::new();
        let mut pauses = Vec::new();

        let b = &mut board;
        let summary = run(
            &config,
            |name| {
                opened.push(name.to_string());
                Ok(b)
            },
            |d| pauses.push(d),
        )
        .unwrap();

        assert_eq!(opened, vec!["K8055$".to_owned()]);
        assert_eq!(summary.cycles, 100);
        assert_eq!(board.calls.len(), 600);
        for cycle in board.calls.chunks(6) {
            assert_eq!(cycle, &one_cycle()[..]);
        }
        assert_eq!(summary.last_status.map(|s| s.analog1), Some(200));

        assert_eq!(pauses.len(), 1 + 600);
        assert_eq!(pauses[0], Duration::from_secs(1));
        assert!(pauses[1..].iter().all(|&d| d == Duration::from_secs(5)));
    }

    #[test]
    fn first_error_aborts_run() {
        let config = DemoConfig {
            cycles: 3,
            ..DemoConfig::default()
        };
        let mut board = Recorder {
            fail_after: Some(8),
            ..Recorder::default()
        };
        let mut pauses = 0;

        let b = &mut board;
        let res = run(&config, |_| Ok(b), |_| pauses += 1);

        match res {
            Err(Error(ErrorKind::Usb(libusb::Error::Timeout), _)) => {}
            other => panic!("unexpected {:?}", other),
        }
        // second cycle's third write failed
        assert_eq!(board.calls.len(), 9);
        assert_eq!(board.calls[8], Call::Write(0xF1, 0x40, 130));
        assert_eq!(pauses, 1 + 8);
    }

    #[test]
    fn open_failure_is_fatal() {
        let config = DemoConfig::default();
        let mut pauses = 0;
        let res = run(
            &config,
            |name| -> Result<Recorder> {
                Err(ErrorKind::DeviceNotFound(name.to_string()).into())
            },
            |_| pauses += 1,
        );
        match res {
            Err(Error(ErrorKind::DeviceNotFound(name), _)) => assert_eq!(name, "K8055$"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(pauses, 0);
    }

    #[test]
    fn invalid_device_name_never_opens() {
        let config = DemoConfig {
            device: "KDEV01".to_owned(),
            ..DemoConfig::default()
        };
        let mut opened = false;
        let res = run(
            &config,
            |_| {
                opened = true;
                Ok(Recorder::default())
            },
            |_| {},
        );
        assert!(res.is_err());
        assert!(!opened);
    }

    #[test]
    fn zero_cycles_only_settles() {
        let config = DemoConfig {
            cycles: 0,
            ..DemoConfig::default()
        };
        let mut board = Recorder::default();
        let b = &mut board;
        let summary = run(&config, |_| Ok(b), |_| {}).unwrap();
        assert_eq!(summary, Summary::default());
        assert!(board.calls.is_empty());
    }
}
