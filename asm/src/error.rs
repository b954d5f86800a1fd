use crate::util::source_line;
use color_print::ceprintln;
use std::fmt::Display;
use thiserror::Error;

/// Section of a C-instruction a mnemonic was looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Dest,
    Comp,
    Jump,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Dest => write!(f, "dest"),
            Field::Comp => write!(f, "comp"),
            Field::Jump => write!(f, "jump"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Malformed label: `{0}`")]
    MalformedLabel(String),

    #[error("Label redefines predefined symbol: `{0}`")]
    PredefinedLabel(String),

    #[error("Unknown {0} mnemonic: `{1}`")]
    UnknownMnemonic(Field, String),

    #[error("Missing computation: `{0}`")]
    EmptyComp(String),

    #[error("Expected `=` or `;`: `{0}`")]
    MissingSeparator(String),

    #[error("Missing operand after `@`")]
    MissingOperand,

    #[error("Negative address: `{0}`")]
    NegativeAddress(String),

    #[error("Address exceeds 32767: `{0}`")]
    AddressOverflow(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("line {line}: {kind}")]
    Syntax {
        line: usize,
        raw: String,
        kind: SyntaxError,
    },

    #[error("Input file must have `.asm` extension: {0}")]
    BadExtension(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol table")]
    Symbols(#[source] serde_yaml::Error),
}

pub const EXIT_USAGE: i32 = 1;
pub const EXIT_INPUT: i32 = 2;
pub const EXIT_SYNTAX: i32 = 3;
pub const EXIT_OUTPUT: i32 = 4;

impl Error {
    pub fn syntax(line: usize, raw: &str, kind: SyntaxError) -> Self {
        Error::Syntax {
            line,
            raw: raw.to_string(),
            kind,
        }
    }

    /// 1-based source line of a syntax error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Syntax { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<&SyntaxError> {
        match self {
            Error::Syntax { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Syntax { .. } => EXIT_SYNTAX,
            Error::BadExtension(_) | Error::FileOpen(..) => EXIT_INPUT,
            Error::FileCreate(..) | Error::FileWrite(..) | Error::Symbols(_) => EXIT_OUTPUT,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &str) {
        match self {
            Error::Syntax { line, kind, .. } => {
                ceprintln!("<red,bold>error</>: {}", kind);
                ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
                ceprintln!("      <blue>|</>");
                ceprintln!(" <blue>{:>4} |</> {}", line, source_line(source, *line));
                ceprintln!("      <blue>|</>");
            }
            _ => {
                ceprintln!("<red,bold>error</>: {}", self);
                if let Some(cause) = std::error::Error::source(self) {
                    ceprintln!("  <blue>cause</>: {}", cause);
                }
            }
        }
    }
}
