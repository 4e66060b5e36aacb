//! Import phase machine
//!
//! Replaces "is a file selected" and "is there preview data" flags with one
//! tagged state, so combinations like "previewing without a file" cannot be
//! represented.

use crate::album::Album;
use crate::import::SelectedFile;
use crate::preview::PreviewRows;
use tracing::debug;

// ============================================================================
// State Machine Types
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ImportPhase {
    /// No file chosen
    #[default]
    Idle,
    /// File chosen, contents still being read
    Reading { file: SelectedFile, ticket: u64 },
    /// File parsed; rows may be empty if nothing passed validation
    Previewing {
        file: SelectedFile,
        rows: PreviewRows,
    },
    /// Rows handed off for commit
    Finalizing { rows: Vec<Album> },
}

/// Events that can be dispatched to the phase machine
#[derive(Clone, Debug)]
pub enum ImportEvent {
    /// User picked a file; `ticket` tags the read started for it
    FileSelected { file: SelectedFile, ticket: u64 },
    /// A file read finished (from async operation)
    ReadComplete { ticket: u64, rows: Vec<Album> },
    /// User edited a preview row's title
    EditTitle { index: usize, title: String },
    /// User removed a preview row
    RemoveRow(usize),
    /// User clicked "Finalize Import"
    BeginFinalize,
    /// Commit finished
    FinishFinalize,
}

// ============================================================================
// State Machine Implementation
// ============================================================================

impl ImportPhase {
    /// Apply an event and return the new phase.
    ///
    /// Events that make no sense in the current phase leave it unchanged.
    pub fn transition(self, event: ImportEvent) -> ImportPhase {
        match (self, event) {
            (_, ImportEvent::FileSelected { file, ticket }) => {
                ImportPhase::Reading { file, ticket }
            }
            (
                ImportPhase::Reading { file, ticket },
                ImportEvent::ReadComplete {
                    ticket: completed,
                    rows,
                },
            ) => {
                if ticket == completed {
                    ImportPhase::Previewing {
                        file,
                        rows: PreviewRows::new(rows),
                    }
                } else {
                    debug!("Dropping stale read {completed}, waiting on {ticket}");
                    ImportPhase::Reading { file, ticket }
                }
            }
            (
                ImportPhase::Previewing { file, mut rows },
                ImportEvent::EditTitle { index, title },
            ) => {
                rows.edit_title(index, title);
                ImportPhase::Previewing { file, rows }
            }
            (ImportPhase::Previewing { file, mut rows }, ImportEvent::RemoveRow(index)) => {
                rows.remove(index);
                ImportPhase::Previewing { file, rows }
            }
            (ImportPhase::Reading { .. }, ImportEvent::BeginFinalize) => {
                ImportPhase::Finalizing { rows: Vec::new() }
            }
            (ImportPhase::Previewing { rows, .. }, ImportEvent::BeginFinalize) => {
                ImportPhase::Finalizing {
                    rows: rows.into_rows(),
                }
            }
            (ImportPhase::Finalizing { .. }, ImportEvent::FinishFinalize) => ImportPhase::Idle,
            (phase, event) => {
                debug!("Ignoring {event:?} in {}", phase.name());
                phase
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImportPhase::Idle => "idle",
            ImportPhase::Reading { .. } => "reading",
            ImportPhase::Previewing { .. } => "previewing",
            ImportPhase::Finalizing { .. } => "finalizing",
        }
    }
}

/// Owner of the import phase and the ticket counter for file reads
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportFlow {
    phase: ImportPhase,
    last_ticket: u64,
}

impl ImportFlow {
    pub fn phase(&self) -> &ImportPhase {
        &self.phase
    }

    pub fn dispatch(&mut self, event: ImportEvent) {
        let phase = std::mem::take(&mut self.phase);
        self.phase = phase.transition(event);
    }

    /// Record a newly selected file and return the ticket for its read.
    ///
    /// Any read still in flight becomes stale: its completion is ignored.
    pub fn select_file(&mut self, file: SelectedFile) -> u64 {
        self.last_ticket += 1;
        let ticket = self.last_ticket;
        self.dispatch(ImportEvent::FileSelected { file, ticket });
        ticket
    }

    /// Deliver the result of a read. Returns false if the read was stale.
    pub fn complete_read(&mut self, ticket: u64, rows: Vec<Album>) -> bool {
        let current = matches!(self.phase, ImportPhase::Reading { ticket: t, .. } if t == ticket);
        self.dispatch(ImportEvent::ReadComplete { ticket, rows });
        current
    }

    /// The chosen file, while one is chosen
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.phase {
            ImportPhase::Reading { file, .. } | ImportPhase::Previewing { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Whether "Finalize Import" should be offered
    pub fn can_finalize(&self) -> bool {
        self.selected_file().is_some()
    }

    /// Rows staged for preview; empty outside `Previewing`
    pub fn preview_rows(&self) -> &[Album] {
        match &self.phase {
            ImportPhase::Previewing { rows, .. } => rows.rows(),
            _ => &[],
        }
    }

    /// Rows being committed; empty outside `Finalizing`
    pub fn finalizing_rows(&self) -> &[Album] {
        match &self.phase {
            ImportPhase::Finalizing { rows } => rows,
            _ => &[],
        }
    }
}
