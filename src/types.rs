//! Core data types for Distance Graph
//!
//! # Main Types
//!
//! - [`History`] - Capped FIFO of plotted values
//! - [`TickOutcome`] / [`RejectReason`] - Result of a single acquisition tick
//! - [`TickStats`] - Running counters shown in the status bar
//! - [`ConnectionStatus`] - Lifecycle of the serial link once the window is up
//!
//! # Memory Management
//!
//! The history is a ring buffer holding at most [`MAX_HISTORY_LEN`] values.
//! When it is full the oldest value is evicted before the new one is stored.

use std::collections::VecDeque;

/// Maximum number of values retained for plotting
pub const MAX_HISTORY_LEN: usize = 1000;

/// Bounded, oldest-first history of plotted values
#[derive(Debug, Clone)]
pub struct History {
    values: VecDeque<f64>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history with the standard capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_LEN)
    }

    /// Create an empty history holding at most `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value, returning the evicted head if the cap was exceeded
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.front().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// Values as plot points (sample index, value)
    pub fn as_plot_points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }
}

/// Why a line was not turned into a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing arrived before the read timeout, or only whitespace
    Empty,
    /// Line does not start with the `Distance: ` label
    MissingPrefix,
    /// Labelled field is not a finite number
    InvalidNumber,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Empty => write!(f, "empty line"),
            RejectReason::MissingPrefix => write!(f, "missing label"),
            RejectReason::InvalidNumber => write!(f, "invalid number"),
        }
    }
}

/// Outcome of one acquisition tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// A sample was pushed into the history (the stored, negated value)
    Appended(f64),
    /// The line was dropped; the history is untouched
    Ignored(RejectReason),
}

impl TickOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, TickOutcome::Appended(_))
    }
}

/// Running counters for the acquisition loop
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickStats {
    pub ticks: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub bytes_read: u64,
    /// Last value stored in the history
    pub last_value: Option<f64>,
}

impl TickStats {
    /// Fold one tick into the counters
    pub fn record(&mut self, outcome: TickOutcome, bytes: usize) {
        self.ticks += 1;
        self.bytes_read += bytes as u64;
        match outcome {
            TickOutcome::Appended(value) => {
                self.accepted += 1;
                self.last_value = Some(value);
            }
            // Empty reads are timeouts, not malformed input
            TickOutcome::Ignored(RejectReason::Empty) => {}
            TickOutcome::Ignored(_) => self.rejected += 1,
        }
    }
}

/// State of the serial link while the window is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Port opened, no tick has run yet
    #[default]
    Connected,
    /// Ticks are being processed
    Running,
    /// A read failed; ticking has stopped and the chart is frozen
    Stalled,
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Connected => write!(f, "Connected"),
            ConnectionStatus::Running => write!(f, "Running"),
            ConnectionStatus::Stalled => write!(f, "Stalled"),
        }
    }
}
