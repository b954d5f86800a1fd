use arch::inst::Inst;

/// A line whose first non-blank character is this is a comment. `/` is not
/// valid anywhere else in the grammar.
pub const COMMENT_LEAD: char = '/';
const INLINE_COMMENT: &str = "//";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Label,
    Addr,
    Calc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: Kind,
    /// 1-based line in the source file.
    pub src: usize,
    /// Program counter, `None` for labels.
    pub pc: Option<usize>,
    /// Statement text without comment and surrounding whitespace.
    pub code: String,
    pub comment: Option<String>,
    pub inst: Option<Inst>,
}

impl Line {
    /// Returns `None` for blank and comment lines.
    pub fn classify(src: usize, pc: usize, raw: &str) -> Option<Line> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_LEAD) {
            return None;
        }

        let (code, comment) = match trimmed.split_once(INLINE_COMMENT) {
            Some((code, comment)) => (code.trim_end(), Some(comment.to_string())),
            None => (trimmed, None),
        };

        let kind = match code.chars().next() {
            Some('(') => Kind::Label,
            Some('@') => Kind::Addr,
            _ => Kind::Calc,
        };

        Some(Line {
            kind,
            src,
            pc: match kind {
                Kind::Label => None,
                _ => Some(pc),
            },
            code: code.to_string(),
            comment,
            inst: None,
        })
    }

    /// The 16 character binary form, once pass 2 has run.
    pub fn encoded(&self) -> Option<String> {
        self.inst.map(|inst| inst.to_string())
    }
}

/// Splits `source` into statements. Blank and comment lines are dropped but
/// still count towards `src`.
pub fn classify(source: &str) -> Vec<Line> {
    let mut lines = vec![];
    let mut pc = 0;
    for (idx, raw) in source.lines().enumerate() {
        if let Some(line) = Line::classify(idx + 1, pc, raw) {
            if line.pc.is_some() {
                pc += 1;
            }
            lines.push(line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(Kind, usize, Option<usize>)> {
        classify(source)
            .into_iter()
            .map(|line| (line.kind, line.src, line.pc))
            .collect()
    }

    #[test]
    fn blank_and_comment() {
        assert_eq!(Line::classify(1, 0, ""), None);
        assert_eq!(Line::classify(1, 0, "   \t "), None);
        assert_eq!(Line::classify(1, 0, "// comment line"), None);
        assert_eq!(Line::classify(1, 0, "  / single slash"), None);
    }

    #[test]
    fn kind_by_first_char() {
        assert_eq!(Line::classify(1, 0, "@256").map(|l| l.kind), Some(Kind::Addr));
        assert_eq!(Line::classify(1, 0, "0;JMP").map(|l| l.kind), Some(Kind::Calc));
        assert_eq!(Line::classify(1, 0, "(LABEL)").map(|l| l.kind), Some(Kind::Label));
        assert_eq!(Line::classify(1, 0, "LABEL)").map(|l| l.kind), Some(Kind::Calc));
    }

    #[test]
    fn inline_comment() {
        let line = Line::classify(3, 7, "  D=M   // D = first number").unwrap();
        assert_eq!(line.code, "D=M");
        assert_eq!(line.comment.as_deref(), Some(" D = first number"));
        assert_eq!(line.src, 3);
        assert_eq!(line.pc, Some(7));
        assert_eq!(line.encoded(), None);

        let line = Line::classify(1, 0, "\t@R0\t//x").unwrap();
        assert_eq!(line.code, "@R0");
    }

    #[test]
    fn interior_whitespace_kept() {
        assert_eq!(Line::classify(1, 0, " D =M ").unwrap().code, "D =M");
    }

    #[test]
    fn counters() {
        let source = "// header\n\n(START)\n@1\n\nD=A // x\n(END)\n(END2)\n0;JMP\n";
        assert_eq!(
            kinds(source),
            vec![
                (Kind::Label, 3, None),
                (Kind::Addr, 4, Some(0)),
                (Kind::Calc, 6, Some(1)),
                (Kind::Label, 7, None),
                (Kind::Label, 8, None),
                (Kind::Calc, 9, Some(2)),
            ]
        );
    }

    #[test]
    fn crlf() {
        assert_eq!(
            kinds("@1\r\n\r\nD=M\r\n"),
            vec![(Kind::Addr, 1, Some(0)), (Kind::Calc, 3, Some(1))]
        );
    }
}
