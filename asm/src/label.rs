use crate::{
    error::{Error, SyntaxError},
    ident::Idents,
    line::{Kind, Line},
};
use arch::ADDR_MAX;

/// A label declared more than once. The later declaration wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redefined {
    pub name: String,
    pub line: usize,
    /// Line of the declaration that was replaced.
    pub prev: usize,
}

/// Extracts `NAME` from `(NAME)`.
pub fn parse_label(code: &str) -> Result<&str, SyntaxError> {
    let trimmed = code.strip_prefix('(').unwrap_or(code);
    let parts: Vec<&str> = trimmed.split(')').collect();

    // `NAME)` splits into at least two parts
    match parts.as_slice() {
        [name, _, ..] if !name.is_empty() => Ok(*name),
        _ => Err(SyntaxError::MalformedLabel(code.to_string())),
    }
}

/// Pass 1: binds every label to the program counter of the instruction after
/// it, and returns the remaining instructions.
pub fn collect_labels(
    lines: Vec<Line>,
    idents: &mut Idents,
) -> Result<(Vec<Line>, Vec<Redefined>), Error> {
    let mut insts = Vec::with_capacity(lines.len());
    let mut redefined = vec![];
    let mut pc: usize = 0;

    for line in lines {
        match line.kind {
            Kind::Label => {
                let name = parse_label(&line.code)
                    .map_err(|kind| Error::syntax(line.src, &line.code, kind))?;
                let addr = u16::try_from(pc)
                    .ok()
                    .filter(|addr| *addr <= ADDR_MAX)
                    .ok_or_else(|| {
                        let kind = SyntaxError::AddressOverflow(name.to_string());
                        Error::syntax(line.src, &line.code, kind)
                    })?;
                let prev = idents
                    .insert_label(name.to_string(), addr, line.src)
                    .map_err(|kind| Error::syntax(line.src, &line.code, kind))?;
                if let Some(prev) = prev {
                    redefined.push(Redefined {
                        name: name.to_string(),
                        line: line.src,
                        prev,
                    });
                }
            }
            Kind::Addr | Kind::Calc => {
                pc += 1;
                insts.push(line);
            }
        }
    }

    Ok((insts, redefined))
}
