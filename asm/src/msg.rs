use color_print::ceprintln;

#[derive(Debug)]
pub enum Msg {
    Warn(String),
    Note(String),
}

impl Msg {
    /// `info` is `(file, 1-based line, line text)`.
    pub fn diag(&self, info: (&str, usize, &str)) {
        let (file, line, raw) = info;
        match self {
            Msg::Warn(msg) => ceprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => ceprintln!("<green,bold>note</>: {}", msg),
        }
        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", line, raw);
        ceprintln!("      <blue>|</>");
    }
}
