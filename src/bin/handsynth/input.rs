//! JSON-lines landmark input
//!
//! One camera frame per line, as emitted by a hand-landmark bridge:
//!
//! ```text
//! {"t": 0.033, "hands": [[{"index": 0, "x": 320, "y": 410}, ...], [...]]}
//! ```
//!
//! `t` (seconds since session start) is optional; `hands` holds zero to two
//! landmark lists in detector order.

use std::time::Duration;

use color_eyre::eyre::{bail, Result as EyreResult, WrapErr};
use serde::Deserialize;

use handsynth::HandFrame;

#[derive(Debug, Deserialize)]
struct FrameLine {
    #[serde(default)]
    t: Option<f64>,
    #[serde(default)]
    hands: Vec<HandFrame>,
}

/// One parsed input frame.
#[derive(Debug)]
pub struct InputFrame {
    pub timestamp: Option<Duration>,
    pub first: HandFrame,
    pub second: HandFrame,
}

pub fn parse_line(line: &str) -> EyreResult<InputFrame> {
    let parsed: FrameLine = serde_json::from_str(line).wrap_err("invalid frame JSON")?;

    let timestamp = match parsed.t {
        Some(t) => match Duration::try_from_secs_f64(t) {
            Ok(d) => Some(d),
            Err(_) => bail!("invalid timestamp {t}"),
        },
        None => None,
    };

    if parsed.hands.len() > 2 {
        bail!("expected at most 2 hands, got {}", parsed.hands.len());
    }
    let mut hands = parsed.hands.into_iter();
    let first = hands.next().unwrap_or_default();
    let second = hands.next().unwrap_or_default();

    Ok(InputFrame {
        timestamp,
        first,
        second,
    })
}
