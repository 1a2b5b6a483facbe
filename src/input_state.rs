//! Composer state: the text being typed and recall of sent messages.

/// Where the composer is while browsing sent messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recall {
    /// Index into `InputState::sent`
    pub index: usize,
    /// What was typed before browsing started
    pub draft: String,
}

/// Text field contents, focus, and the in-memory list of sent messages.
#[derive(Debug, Default)]
pub struct InputState {
    pub message_input: String,
    /// Sent this session, oldest first
    pub sent: Vec<String>,
    pub recall: Option<Recall>,
    focused: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the composed message for sending.
    ///
    /// Returns the trimmed text and clears the field, or `None` (leaving the
    /// field untouched) when there is nothing but whitespace.
    pub fn take_message(&mut self) -> Option<String> {
        let text = self.message_input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.sent.push(text.clone());
        self.message_input.clear();
        self.recall = None;
        Some(text)
    }

    /// Track focus changes of the text field. Returns `Some(true)` when
    /// focus was gained and `Some(false)` when it was lost this frame.
    pub fn update_focus(&mut self, has_focus: bool) -> Option<bool> {
        if has_focus == self.focused {
            return None;
        }
        self.focused = has_focus;
        Some(has_focus)
    }

    /// Step to the previous sent message. Stops at the oldest one.
    pub fn recall_older(&mut self) {
        let Some(newest) = self.sent.len().checked_sub(1) else {
            return;
        };
        let index = match self.recall.as_mut() {
            Some(recall) => {
                recall.index = recall.index.saturating_sub(1);
                recall.index
            }
            None => {
                let draft = std::mem::take(&mut self.message_input);
                self.recall = Some(Recall { index: newest, draft });
                newest
            }
        };
        self.message_input.clone_from(&self.sent[index]);
    }

    /// Step to the next sent message; past the newest, the draft comes back.
    pub fn recall_newer(&mut self) {
        let Some(recall) = self.recall.as_mut() else {
            return;
        };
        if recall.index + 1 < self.sent.len() {
            recall.index += 1;
            self.message_input.clone_from(&self.sent[recall.index]);
        } else if let Some(recall) = self.recall.take() {
            self.message_input = recall.draft;
        }
    }
}
