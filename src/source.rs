//! src/source.rs
//!
//! Sample sources polled by the event loop once per frame.
//!
//! Sources never run on their own thread: `poll` returns whatever arrived
//! since the previous call and the loop hands it to the charts directly.

use std::io::{self, BufRead, BufReader};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serialport::SerialPort;
use tracing::{info, warn};

use crate::config::{AppConfig, SourceKind};

/// Upper bound of lines consumed per poll so a chatty port cannot stall a frame.
const MAX_LINES_PER_POLL: usize = 64;

/// One update for the two charts; `None` leaves a chart untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reading {
    pub primary: Option<f64>,
    pub secondary: Option<f64>,
}

pub trait SampleSource {
    fn poll(&mut self) -> Vec<Reading>;

    /// Chart titles for the primary and secondary series.
    fn labels(&self) -> [&'static str; 2];

    fn describe(&self) -> String;
}

/// Build the source selected on the command line.
pub fn open_source(config: &AppConfig) -> Box<dyn SampleSource> {
    match config.source {
        SourceKind::Random => Box::new(
            config
                .seed
                .map_or_else(RandomWalk::new, RandomWalk::seeded),
        ),
        SourceKind::Serial => Box::new(SerialTelemetry::open(&config.port, config.baud)),
    }
}

/// Two bounded random walks with occasional spikes.
pub struct RandomWalk {
    rng: StdRng,
    levels: [f64; 2],
}

impl RandomWalk {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            levels: [40.0, 20.0],
        }
    }

    fn step(&mut self, series: usize) -> f64 {
        let level = (self.levels[series] + self.rng.random_range(-4.0..=4.0)).clamp(0.0, 100.0);
        self.levels[series] = level;
        if self.rng.random_bool(0.05) {
            level * 1.8
        } else {
            level
        }
    }

    /// `count` consecutive primary samples.
    pub fn burst(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.step(0)).collect()
    }
}

impl SampleSource for RandomWalk {
    fn poll(&mut self) -> Vec<Reading> {
        vec![Reading {
            primary: Some(self.step(0)),
            secondary: Some(self.step(1)),
        }]
    }

    fn labels(&self) -> [&'static str; 2] {
        ["Load", "Latency"]
    }

    fn describe(&self) -> String {
        "random walk".to_string()
    }
}

/// Line-based telemetry from a LoRa receiver on a serial port.
///
/// Signal strengths are reported as path loss (negated dBm) so that weaker
/// links draw taller bars.
pub struct SerialTelemetry {
    port_name: String,
    reader: Option<BufReader<Box<dyn SerialPort>>>,
    pending: String,
}

impl SerialTelemetry {
    /// Open the port; failure is logged and leaves the source idle.
    pub fn open(port_name: &str, baud: u32) -> Self {
        let reader = match serialport::new(port_name, baud)
            .timeout(Duration::from_millis(5))
            .open()
        {
            Ok(port) => {
                info!(port = port_name, baud, "serial source opened");
                Some(BufReader::new(port))
            }
            Err(e) => {
                warn!(port = port_name, error = %e, "failed to open serial port");
                None
            }
        };
        Self {
            port_name: port_name.to_string(),
            reader,
            pending: String::new(),
        }
    }
}

impl SampleSource for SerialTelemetry {
    fn poll(&mut self) -> Vec<Reading> {
        let mut readings = Vec::new();
        let Some(reader) = self.reader.as_mut() else {
            return readings;
        };

        for _ in 0..MAX_LINES_PER_POLL {
            match reader.read_line(&mut self.pending) {
                Ok(0) => {
                    warn!(port = %self.port_name, "serial port closed");
                    self.reader = None;
                    break;
                }
                Ok(_) => {
                    // stream ended mid-line; the next read reports the close
                    if !self.pending.ends_with('\n') {
                        continue;
                    }
                    if let Some(reading) = parse_telemetry_line(&self.pending) {
                        readings.push(reading);
                    }
                    self.pending.clear();
                }
                // partial lines stay in `pending` until the rest arrives
                Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
                Err(e) => {
                    warn!(port = %self.port_name, error = %e, "serial read failed");
                    self.reader = None;
                    break;
                }
            }
        }
        readings
    }

    fn labels(&self) -> [&'static str; 2] {
        ["ACK path loss (-dBm)", "Packet path loss (-dBm)"]
    }

    fn describe(&self) -> String {
        match self.reader {
            Some(_) => format!("serial {}", self.port_name),
            None => format!("serial {} (idle)", self.port_name),
        }
    }
}

/// Parse one receiver line.
///
/// Accepted forms:
/// ```text
/// Received: MSG 9 RSSI -94.5
/// RSSI_PACKET: -93.5 dBm
/// ```
/// Anything else yields `None`.
pub fn parse_telemetry_line(line: &str) -> Option<Reading> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["Received:", "MSG", _, "RSSI", rssi, ..] => rssi.parse::<f64>().ok().map(|v| Reading {
            primary: Some(-v),
            secondary: None,
        }),
        ["RSSI_PACKET:", rssi, ..] => rssi.parse::<f64>().ok().map(|v| Reading {
            primary: None,
            secondary: Some(-v),
        }),
        _ => None,
    }
}
