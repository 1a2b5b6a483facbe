//! Chat bubble model: messages, roles and bridge decorations.
//!
//! A `BubbleRecord` is the engine's view of one rendered bubble. Merge state
//! and bridges live here as plain fields; the renderer translates them into
//! shapes.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Local};

/// Identifier of a bubble, unique for the lifetime of an engine.
pub type BubbleId = u64;

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SenderKind {
    /// Written locally through the input field.
    Sent,
    /// Delivered by the simulated peer.
    Received,
}

impl fmt::Display for SenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderKind::Sent => write!(f, "sent"),
            SenderKind::Received => write!(f, "received"),
        }
    }
}

/// A chat message. Immutable once created.
#[derive(Clone, Debug)]
pub struct Message {
    pub text: String,
    pub sender: SenderKind,
    pub created_at: DateTime<Local>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: SenderKind) -> Self {
        Self {
            text: text.into(),
            sender,
            created_at: Local::now(),
        }
    }
}

/// Position of a bubble inside its merged group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// Not merged (yet).
    #[default]
    None,
    First,
    Middle,
    Last,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeDirection {
    /// Connects to the previous bubble.
    Up,
    /// Connects to the next bubble.
    Down,
}

/// Connector drawn between two bubbles of different width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bridge {
    pub direction: BridgeDirection,
    /// Size of the connector in unscaled points.
    pub magnitude: f32,
    /// Bridges are hidden until their reveal delay has passed.
    pub visible: bool,
}

impl Bridge {
    pub fn new(direction: BridgeDirection, magnitude: f32) -> Self {
        Self {
            direction,
            magnitude,
            visible: false,
        }
    }
}

/// One message plus its mutable presentation state.
#[derive(Clone, Debug)]
pub struct BubbleRecord {
    pub id: BubbleId,
    pub message: Message,
    pub role: Role,
    /// "HH:MM" label shown next to the last bubble of a group.
    pub timestamp: Option<String>,
    pub bridge: Option<Bridge>,
    /// Last rendered width in unscaled points, timestamp excluded.
    pub width: Option<f32>,
    /// When the bubble entered the list; drives the entrance animation.
    pub appeared_at: Instant,
}

impl BubbleRecord {
    pub fn new(id: BubbleId, message: Message, appeared_at: Instant) -> Self {
        Self {
            id,
            message,
            role: Role::None,
            timestamp: None,
            bridge: None,
            width: None,
            appeared_at,
        }
    }

    pub fn sender(&self) -> SenderKind {
        self.message.sender
    }

    pub fn text(&self) -> &str {
        &self.message.text
    }

    pub fn is_merged(&self) -> bool {
        self.role != Role::None
    }

    /// Attach a timestamp unless one is already present.
    pub fn stamp(&mut self, label: &str) {
        if self.timestamp.is_none() {
            self.timestamp = Some(label.to_string());
        }
    }
}
