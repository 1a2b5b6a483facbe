//! Scripted messages played by the simulated peer.

use std::time::Duration;

/// One scripted message, delivered `delay` after the script starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptLine {
    pub delay: Duration,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub name: &'static str,
    pub lines: Vec<ScriptLine>,
}

impl Script {
    /// Build a script from `(delay_ms, text)` pairs.
    pub fn new(name: &'static str, lines: &[(u64, &str)]) -> Self {
        Self {
            name,
            lines: lines
                .iter()
                .map(|(ms, text)| ScriptLine {
                    delay: Duration::from_millis(*ms),
                    text: (*text).to_string(),
                })
                .collect(),
        }
    }

    /// The opening exchange shown on startup and after every reset.
    pub fn seed() -> Self {
        Self::new(
            "seed",
            &[(0, "lmao"), (300, "hahahahahahaha"), (600, "what's up?")],
        )
    }

    /// Played when the profile area in the header is clicked.
    pub fn demo() -> Self {
        Self::new(
            "demo",
            &[(0, "ha~ha"), (300, "hahahahahaha"), (600, "for real?")],
        )
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Time from start until the last line is delivered.
    pub fn duration(&self) -> Duration {
        self.lines
            .iter()
            .map(|line| line.delay)
            .max()
            .unwrap_or_default()
    }
}
