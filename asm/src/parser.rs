use crate::{
    error::{Field, SyntaxError},
    ident::Idents,
};
use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump, ADDR_MAX};

// ----------------------------------------------------------------------------
// A-instruction

/// Parses `@operand`. Known names win over literals; anything else becomes a
/// new variable.
pub fn parse_addr(code: &str, idents: &mut Idents, line: usize) -> Result<Inst, SyntaxError> {
    let operand = code.strip_prefix('@').unwrap_or(code);
    if operand.is_empty() {
        return Err(SyntaxError::MissingOperand);
    }

    if let Some(addr) = idents.get_val(operand) {
        return Ok(Inst::Addr(addr));
    }
    if let Some(literal) = parse_literal(operand) {
        return literal.map(Inst::Addr);
    }
    idents.allocate(operand, line).map(Inst::Addr)
}

/// Base-10 literal with an optional leading `-`. `None` if `s` is not a
/// literal at all.
pub fn parse_literal(s: &str) -> Option<Result<u16, SyntaxError>> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // u16 parse fails on anything above 65535
    let result = match (negative, digits.parse::<u16>().ok()) {
        (false, Some(val)) if val <= ADDR_MAX => Ok(val),
        (false, _) => Err(SyntaxError::AddressOverflow(s.to_string())),
        (true, Some(0)) => Ok(0),
        (true, _) => Err(SyntaxError::NegativeAddress(s.to_string())),
    };
    Some(result)
}

// ----------------------------------------------------------------------------
// C-instruction

/// Parses `[dest=]comp[;jump]`.
pub fn parse_calc(code: &str) -> Result<Inst, SyntaxError> {
    let semi = code.find(';');
    let eq = code.find('=').filter(|eq| semi.map_or(true, |semi| *eq < semi));
    if eq.is_none() && semi.is_none() {
        return Err(SyntaxError::MissingSeparator(code.to_string()));
    }

    let dest = match eq {
        Some(eq) => {
            let name = &code[..eq];
            let dest = Dest::parse(name)
                .ok_or_else(|| SyntaxError::UnknownMnemonic(Field::Dest, name.to_string()))?;
            Some(dest)
        }
        None => None,
    };

    let name = &code[eq.map_or(0, |eq| eq + 1)..semi.unwrap_or(code.len())];
    if name.is_empty() {
        return Err(SyntaxError::EmptyComp(code.to_string()));
    }
    let comp = Comp::parse(name)
        .ok_or_else(|| SyntaxError::UnknownMnemonic(Field::Comp, name.to_string()))?;

    let jump = match semi {
        Some(semi) => {
            let name = &code[semi + 1..];
            let jump = Jump::parse(name)
                .ok_or_else(|| SyntaxError::UnknownMnemonic(Field::Jump, name.to_string()))?;
            Some(jump)
        }
        None => None,
    };

    Ok(Inst::Calc(dest, comp, jump))
}
