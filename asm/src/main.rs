use color_print::ceprint;
use hasm::{
    error::{Error, EXIT_USAGE},
    msg::Msg,
    output,
    util::{print_dump, source_line},
};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (*.asm)
    input: PathBuf,

    /// Output file [default: input with .hack extension]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write symbol table (YAML)
    #[clap(short, long, value_name = "FILE")]
    symbols: Option<PathBuf>,

    /// Suppress progress output
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    use clap::Parser;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            ceprint!("{}", err.render().ansi());
            std::process::exit(EXIT_USAGE);
        }
        // --help, --version
        Err(err) => err.exit(),
    };
    let file = args.input.display().to_string();

    if !args.quiet {
        println!("Hack Assembler");
        println!("1. Read File");
        println!("  < {}", file);
    }
    let source = match output::read_source(&args.input) {
        Ok(source) => source,
        Err(err) => fail(&err, &file, ""),
    };

    if let Err(err) = run(&args, &file, &source) {
        fail(&err, &file, &source);
    }
}

fn run(args: &Args, file: &str, source: &str) -> Result<(), Error> {
    let progress = |msg: &str| {
        if !args.quiet {
            println!("{}", msg);
        }
    };

    let hack = match &args.output {
        Some(path) => path.clone(),
        None => output::hack_path(&args.input)?,
    };

    progress("2. Resolve Labels & Generate Binary");
    let program = hasm::assemble(source)?;

    for redef in &program.redefined {
        Msg::Warn(format!("Re-defined label: `{}`", redef.name))
            .diag((file, redef.line, source_line(source, redef.line)));
        Msg::Note("Already defined here. The value has been overridden.".to_string())
            .diag((file, redef.prev, source_line(source, redef.prev)));
    }

    progress("3. Write Files");
    progress(&format!("  > {}", hack.display()));
    output::write_hack(&hack, &program)?;
    if let Some(path) = &args.symbols {
        progress(&format!("  > {}", path.display()));
        output::write_symbols(path, &program.idents)?;
    }

    if args.dump {
        print_dump(file, source, &program);
    }
    Ok(())
}

fn fail(err: &Error, file: &str, source: &str) -> ! {
    err.print_diag(file, source);
    std::process::exit(err.exit_code())
}
