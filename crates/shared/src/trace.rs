use serde::{Deserialize, Serialize};

/// What moved during one observed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Relocation {
    /// Adjacent exchange; `moved_right` was the left element before the swap.
    Swap { moved_right: i32, moved_left: i32 },
    Select { value: i32, position: usize },
    /// `from` is where the key was lifted, `position` where it landed.
    Insert {
        value: i32,
        from: usize,
        position: usize,
    },
}

impl Relocation {
    /// Insertion reports every key, including ones that stay put.
    pub fn moved(&self) -> bool {
        match self {
            Self::Swap { .. } | Self::Select { .. } => true,
            Self::Insert { from, position, .. } => from != position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum TraceEvent {
    /// `pass` is 1-based.
    PassStarted { pass: usize, snapshot: Vec<i32> },
    Relocated {
        relocation: Relocation,
        snapshot: Vec<i32>,
    },
}

impl TraceEvent {
    pub fn snapshot(&self) -> &[i32] {
        match self {
            Self::PassStarted { snapshot, .. } | Self::Relocated { snapshot, .. } => snapshot,
        }
    }

    pub fn is_pass_boundary(&self) -> bool {
        matches!(self, Self::PassStarted { .. })
    }

    pub fn moved_element(&self) -> bool {
        match self {
            Self::PassStarted { .. } => false,
            Self::Relocated { relocation, .. } => relocation.moved(),
        }
    }
}

#[cfg(test)]
#[path = "tests/trace_tests.rs"]
mod tests;
