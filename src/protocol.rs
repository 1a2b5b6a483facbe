use crate::script::Script;

/// Actions sent from the UI to the peer backend
#[derive(Debug, Clone)]
pub enum PeerAction {
    /// Start playing a script; arrivals are tagged with `generation`
    Play { generation: u64, script: Script },
    /// Abort every script that is still playing
    CancelAll,
    /// Abort scripts and stop the backend thread
    Shutdown,
}

/// Events sent from the peer backend to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerEvent {
    /// A scripted message arrived from the peer
    MessageArrived { generation: u64, text: String },
    /// Every line of a script has been delivered
    ScriptFinished { generation: u64, name: &'static str },
    /// Backend failure the UI should know about
    Error(String),
}
