use crate::{
    label::parse_label,
    line::{Kind, Line},
    Program,
};
use color_print::cformat;

/// Text of a 1-based source line, empty if out of range.
pub fn source_line(source: &str, line: usize) -> &str {
    line.checked_sub(1)
        .and_then(|idx| source.lines().nth(idx))
        .unwrap_or("")
}

const GUTTER: usize = 23;

pub fn print_dump(path: &str, source: &str, program: &Program) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(GUTTER),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );

    let pad = " ".repeat(GUTTER);
    let mut insts = program.lines.iter().peekable();
    for (idx, raw) in source.lines().enumerate() {
        let line_num = idx + 1;
        let body = match Line::classify(line_num, 0, raw) {
            None => {
                format!("{}| {:>4}: {}", &pad, line_num, raw.trim())
            }
            Some(line) if line.kind == Kind::Label => {
                let label = match parse_label(&line.code) {
                    Ok(name) => {
                        let addr = program.idents.get_val(name).unwrap_or_default();
                        cformat!("<g>({})</> <y>0x{:0>4X}</>", name, addr)
                    }
                    Err(_) => cformat!("<r,s>{}</>", line.code),
                };
                format!("{}| {:>4}: {}{}", &pad, line_num, label, comment(&line))
            }
            Some(_) => match insts.next_if(|inst| inst.src == line_num) {
                Some(line) => {
                    let pc = line.pc.unwrap_or_default();
                    let bin = line
                        .encoded()
                        .unwrap_or_else(|| cformat!("<r,s>????????????????</>"));
                    let asm = line.inst.map(|inst| inst.cformat()).unwrap_or_default();
                    format!(
                        "[{:04X}] {} | {:>4}:   {} {}{}",
                        pc,
                        bin,
                        line_num,
                        asm,
                        line.code,
                        comment(line)
                    )
                }
                None => format!("{}| {:>4}: {}", &pad, line_num, raw.trim()),
            },
        };
        println!("{}", body);
    }
    println!("{}+{}", "-".repeat(GUTTER), "-".repeat(53));
}

fn comment(line: &Line) -> String {
    line.comment
        .as_ref()
        .map(|s| format!(" //{}", s))
        .unwrap_or_default()
}
