use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    MalformedLine,
    PhaseImbalance,
}

/// Structural problems found while reading the input. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: @order is only allowed as the first statement")]
    OrderNotFirst { line: usize },

    #[error("line {line}: {reason}: `{text}`")]
    MalformedLine {
        line: usize,
        text: String,
        reason: &'static str,
    },

    #[error("line {line}: @endphase without matching @phase")]
    UnmatchedEndPhase { line: usize },

    #[error("phase `{name}` opened on line {line} is never closed")]
    UnclosedPhase { name: String, line: usize },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OrderNotFirst { .. } => ErrorKind::Usage,
            Self::MalformedLine { .. } => ErrorKind::MalformedLine,
            Self::UnmatchedEndPhase { .. } | Self::UnclosedPhase { .. } => {
                ErrorKind::PhaseImbalance
            }
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Self::OrderNotFirst { line }
            | Self::MalformedLine { line, .. }
            | Self::UnmatchedEndPhase { line }
            | Self::UnclosedPhase { line, .. } => *line,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
