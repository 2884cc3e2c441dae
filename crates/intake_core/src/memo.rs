use serde::{Deserialize, Serialize};

pub const MEMO_MAX_CHARS: usize = 80;

/// Memo to the approving partner plus the attestation checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    text: String,
    attested: bool,
}

impl Memo {
    /// Stores at most [`MEMO_MAX_CHARS`] characters of `text`.
    pub fn set_text(&mut self, text: &str) -> &str {
        let end = text
            .char_indices()
            .nth(MEMO_MAX_CHARS)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len());
        self.text = text[..end].to_string();
        &self.text
    }

    pub fn set_attested(&mut self, attested: bool) {
        self.attested = attested;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attested(&self) -> bool {
        self.attested
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn remaining(&self) -> usize {
        MEMO_MAX_CHARS.saturating_sub(self.len())
    }
}
