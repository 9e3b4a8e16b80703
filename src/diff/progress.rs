//! Progress reporting for long-running diffs.
//!
//! The engine emits [`ProgressInfo`] events through a [`ProgressSink`]
//! while a diff runs. Progress is a one-way observational channel: a sink
//! that fails (or a receiver that goes away) is ignored by the engine and
//! never alters the diff result or aborts the run.

use serde::Serialize;
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Coarse stages of one diff run, in the order they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressPhase {
    /// Indexing the old table by key
    BuildOldMap,
    /// Scanning the new table and classifying rows
    ScanNewMap,
    /// Draining the residual index into removed rows
    Finalizing,
    /// Diff complete
    Done,
}

impl ProgressPhase {
    /// Get the human-readable name for this phase
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BuildOldMap => "indexing old table",
            Self::ScanNewMap => "scanning new table",
            Self::Finalizing => "collecting removed rows",
            Self::Done => "done",
        }
    }
}

/// One progress event.
///
/// `percent` is monotonically non-decreasing across a run: indexing ends at
/// 5, the scan advances linearly from 5 to 90, finalizing reports 95 and
/// completion 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressInfo {
    /// Current phase
    pub phase: ProgressPhase,
    /// Items processed so far within the phase, when meaningful
    pub processed: Option<usize>,
    /// Total items for the phase, when meaningful
    pub total: Option<usize>,
    /// Overall completion in percent (0..=100)
    pub percent: u8,
    /// Optional human-readable status line
    pub message: Option<String>,
}

impl ProgressInfo {
    /// Create a progress event for a phase with counters
    #[must_use]
    pub fn new(phase: ProgressPhase, processed: usize, total: usize, percent: u8) -> Self {
        Self {
            phase,
            processed: Some(processed),
            total: Some(total),
            percent,
            message: None,
        }
    }

    /// Attach a status message
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Error returned by a progress consumer.
///
/// The engine discards these: a failing consumer can neither change the
/// diff result nor abort the run.
#[derive(Debug, Error)]
#[error("progress consumer failed: {0}")]
pub struct ProgressSinkError(pub String);

/// Consumer side of the progress channel.
pub trait ProgressSink {
    /// Receive one progress event
    fn emit(&mut self, info: ProgressInfo) -> Result<(), ProgressSinkError>;
}

/// Sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn emit(&mut self, _info: ProgressInfo) -> Result<(), ProgressSinkError> {
        Ok(())
    }
}

/// Sink wrapping a plain callback.
#[derive(Debug)]
pub struct CallbackSink<F>(F);

impl<F> CallbackSink<F>
where
    F: FnMut(&ProgressInfo),
{
    /// Wrap a callback as a sink
    pub fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F> ProgressSink for CallbackSink<F>
where
    F: FnMut(&ProgressInfo),
{
    fn emit(&mut self, info: ProgressInfo) -> Result<(), ProgressSinkError> {
        (self.0)(&info);
        Ok(())
    }
}

/// Sink forwarding events into an mpsc channel.
///
/// A disconnected receiver surfaces as a sink error, which the engine
/// discards — dropping the receiving end never aborts a diff.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<ProgressInfo>,
}

impl ChannelSink {
    /// Create a sink sending into the given channel
    #[must_use]
    pub fn new(tx: Sender<ProgressInfo>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn emit(&mut self, info: ProgressInfo) -> Result<(), ProgressSinkError> {
        self.tx
            .send(info)
            .map_err(|e| ProgressSinkError(e.to_string()))
    }
}
