use std::io::{self, BufRead, Write};

use dee_core::{Interpreter, Outcome, SessionState};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// An exit trigger matched.
    Exit,
    /// Input stream closed. Treated the same as an exit.
    EndOfInput,
}

#[derive(Debug)]
pub struct Summary {
    pub ending: Ending,
    pub turns: usize,
    pub state: SessionState,
}

/// Read-eval-print loop over arbitrary streams.
///
/// One line is fully handled and answered before the next is read. Handler
/// faults are printed as a persona glitch and the session continues; only
/// I/O failures on the streams themselves are returned.
pub fn run<R: BufRead, W: Write>(dee: &Interpreter, mut input: R, mut output: W) -> io::Result<Summary> {
    let persona = dee.config().persona;
    let voice = persona.voice();
    let gap = if voice.spaced { "\n" } else { "" };

    if voice.spaced {
        writeln!(output)?;
    }
    for line in voice.banner {
        writeln!(output, "{line}")?;
    }

    let mut state = dee.new_session();
    let mut turns = 0;
    let mut buf = Vec::new();

    loop {
        write!(output, "{gap}{}: ", voice.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::info!(turns, "input closed, ending session");
            writeln!(output)?;
            writeln!(output, "{gap}{}: {}", voice.label, voice.farewell)?;
            output.flush()?;
            return Ok(Summary {
                ending: Ending::EndOfInput,
                turns,
                state,
            });
        }
        let line = String::from_utf8_lossy(&buf);
        turns += 1;

        match dee.step(&state, &line) {
            Ok(turn) => {
                state = turn.state;
                match turn.outcome {
                    Outcome::Terminate { farewell } => {
                        writeln!(output, "{gap}{}: {farewell}", voice.label)?;
                        output.flush()?;
                        return Ok(Summary {
                            ending: Ending::Exit,
                            turns,
                            state,
                        });
                    }
                    Outcome::Reply(text) => {
                        writeln!(output, "{gap}{}: {text}", voice.label)?;
                    }
                }
            }
            Err(e) => {
                tracing::warn!("handler failed: {e}");
                writeln!(output, "{gap}{}: {}", voice.label, persona.glitch(&e.to_string()))?;
            }
        }
    }
}
