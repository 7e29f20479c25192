//! Command writer thread
//!
//! Drains the engine command queue and prints one JSON object per line on
//! stdout, so a sound engine in another process can follow along. Chords
//! carry their pad voicing in Hz.

use std::io::{self, BufWriter, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rtrb::Consumer;
use serde::Serialize;

use handsynth::engine::CommandReceiver;
use handsynth::EngineCommand;

/// Poll interval while the queue is empty
const IDLE_SLEEP: Duration = Duration::from_millis(1);

#[derive(Serialize)]
struct CommandLine<'a> {
    #[serde(flatten)]
    command: &'a EngineCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    voicing_hz: Option<Vec<f32>>,
}

impl<'a> From<&'a EngineCommand> for CommandLine<'a> {
    fn from(command: &'a EngineCommand) -> Self {
        let voicing_hz = match command {
            EngineCommand::Chord { chord } => Some(chord.voicing()),
            _ => None,
        };
        Self {
            command,
            voicing_hz,
        }
    }
}

pub fn write_command<W: Write>(out: &mut W, command: &EngineCommand) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &CommandLine::from(command))?;
    out.write_all(b"\n")
}

/// Spawn the writer. It exits once the producer is dropped and the queue
/// is drained, returning how many commands it wrote.
pub fn spawn_writer(mut rx: Consumer<EngineCommand>) -> JoinHandle<io::Result<u64>> {
    thread::spawn(move || {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let mut written = 0u64;

        loop {
            match CommandReceiver::pop(&mut rx) {
                Some(command) => {
                    write_command(&mut out, &command)?;
                    written += 1;
                }
                None if rx.is_closed() => break,
                None => {
                    out.flush()?;
                    thread::sleep(IDLE_SLEEP);
                }
            }
        }

        out.flush()?;
        Ok(written)
    })
}
