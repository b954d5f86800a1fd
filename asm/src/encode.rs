use crate::{
    error::Error,
    ident::Idents,
    line::{Kind, Line},
    parser::{parse_addr, parse_calc},
};

/// Pass 2: encodes every instruction, allocating variables on first use.
/// Stops at the first error.
pub fn encode(lines: Vec<Line>, idents: &mut Idents) -> Result<Vec<Line>, Error> {
    lines
        .into_iter()
        .map(|mut line| -> Result<Line, Error> {
            let inst = match line.kind {
                Kind::Addr => parse_addr(&line.code, idents, line.src),
                Kind::Calc => parse_calc(&line.code),
                Kind::Label => return Ok(line),
            }
            .map_err(|kind| Error::syntax(line.src, &line.code, kind))?;
            line.inst = Some(inst);
            Ok(line)
        })
        .collect()
}
