// 📝 Appointment Log - human-readable export
//
// One line per appointment, appended on every save:
//   Appointment Index: <i>: Appointment: Patient[..] - Doctor[..] - Status: ..
//
// This is a display log. Nothing reads it back.

use crate::appointment::Appointment;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Used when no path is configured
pub const DEFAULT_LOG_FILE: &str = "Appointments.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Format every appointment as a log line, indexed by list position
pub fn render_lines(appointments: &[Appointment]) -> Vec<String> {
    appointments
        .iter()
        .enumerate()
        .map(|(i, a)| format!("Appointment Index: {}: {}", i, a.details()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentLog {
    path: PathBuf,
}

impl AppointmentLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AppointmentLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the current appointment list; returns the number of lines written.
    /// The file handle is dropped before returning on every path.
    pub fn append(&self, appointments: &[Appointment]) -> Result<usize, ExportError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error("open", source))?;

        let mut writer = BufWriter::new(file);
        let lines = render_lines(appointments);

        for line in &lines {
            writeln!(writer, "{}", line).map_err(|source| self.io_error("write", source))?;
        }
        writer
            .flush()
            .map_err(|source| self.io_error("write", source))?;

        debug!(path = %self.path.display(), lines = lines.len(), "appointment log appended");
        Ok(lines.len())
    }

    /// Truncate the log to zero length, creating it if missing
    pub fn clear(&self) -> Result<(), ExportError> {
        File::create(&self.path).map_err(|source| self.io_error("truncate", source))?;
        debug!(path = %self.path.display(), "appointment log cleared");
        Ok(())
    }

    fn io_error(&self, action: &'static str, source: io::Error) -> ExportError {
        ExportError::Io {
            action,
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for AppointmentLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}
