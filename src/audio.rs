use std::io::{self, Write};

/// Short sound clips the game can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Bounce,
    Score,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Bounce => "bounce",
            Cue::Score => "score",
        }
    }
}

/// Fire-and-forget playback. Failures never reach the game loop.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Plays every cue as the terminal bell.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        if let Err(err) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            log::warn!("could not play {} cue: {err}", cue.name());
        }
    }
}
