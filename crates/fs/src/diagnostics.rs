use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use log::warn;

/// Operator-facing notice raised while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    AccessDenied(PathBuf),
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the process logger.
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::AccessDenied(path) => {
                warn!("[scan] no read access to {}", path.display())
            }
        }
    }
}

/// Collects diagnostics in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferedSink {
    buf: Arc<Mutex<Vec<Diagnostic>>>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.buf.lock() {
            Ok(buf) => buf.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for BufferedSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match self.buf.lock() {
            Ok(mut buf) => buf.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
