//! Two-pass assembler for the Hack 16-bit computer.
//!
//! ```
//! let program = hasm::assemble("@2\nD=A\n(LOOP)\n@LOOP\n0;JMP\n").unwrap();
//! assert_eq!(program.bins().next().as_deref(), Some("0000000000000010"));
//! ```

pub mod encode;
pub mod error;
pub mod ident;
pub mod label;
pub mod line;
pub mod msg;
pub mod output;
pub mod parser;
pub mod util;

use error::Error;
use ident::Idents;
use label::Redefined;
use line::Line;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Program {
    /// Encoded instructions in program order.
    pub lines: Vec<Line>,
    pub idents: Idents,
    pub redefined: Vec<Redefined>,
}

impl Program {
    pub fn bins(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().filter_map(Line::encoded)
    }

    /// Contents of the `.hack` file: one word per line, no trailing newline.
    pub fn hack(&self) -> String {
        self.bins().collect::<Vec<_>>().join("\n")
    }
}

pub fn assemble(source: &str) -> Result<Program, Error> {
    let mut idents = Idents::new();
    let (insts, redefined) = label::collect_labels(line::classify(source), &mut idents)?;
    let lines = encode::encode(insts, &mut idents)?;
    Ok(Program {
        lines,
        idents,
        redefined,
    })
}
