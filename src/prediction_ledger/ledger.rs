use crate::image_classifier::interface::{Decision, RiskLabel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub identifier: String,
    pub is_low_risk: bool,
}

impl LedgerEntry {
    pub fn label(&self) -> RiskLabel {
        RiskLabel::from_is_low_risk(self.is_low_risk)
    }

    pub fn to_display_string(&self) -> String {
        format!("{}: {}", self.identifier, self.label())
    }
}

/// Prediction history of one session, in the order predictions were made.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, identifier: &str, decision: &Decision) -> LedgerEntry {
        let entry = LedgerEntry {
            identifier: identifier.to_string(),
            is_low_risk: decision.is_low_risk(),
        };
        self.entries.push(entry.clone());
        entry
    }

    pub fn all(&self) -> &[LedgerEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
