use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ScanError {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    // Empty for lexical errors, filled by later front end stages.
    pub location: &'static str,
    pub error: ScanError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Line {}] Error {}: {}", self.line, self.location, self.error)
    }
}

/// Collects the diagnostics of one scan; the caller decides what to do with them.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn error(&mut self, line: usize, error: ScanError) {
        self.report(line, "", error);
    }

    fn report(&mut self, line: usize, location: &'static str, error: ScanError) {
        self.diagnostics.push(Diagnostic {
            line,
            location,
            error,
        });
    }

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
