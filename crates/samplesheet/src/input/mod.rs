//! Input format detection.

mod sniffer;

pub use sniffer::{Dialect, FormatSniffer, SnifferConfig};
