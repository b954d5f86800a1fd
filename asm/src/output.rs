use crate::{error::Error, ident::Idents, Program};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

pub const SOURCE_EXT: &str = "asm";
pub const HACK_EXT: &str = "hack";

/// `dir/Prog.asm` -> `dir/Prog.hack`
pub fn hack_path(input: &Path) -> Result<PathBuf, Error> {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(SOURCE_EXT) => Ok(input.with_extension(HACK_EXT)),
        _ => Err(Error::BadExtension(input.display().to_string())),
    }
}

pub fn read_source(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|e| Error::FileOpen(path.display().to_string(), e))
}

pub fn write_hack(path: &Path, program: &Program) -> Result<(), Error> {
    write_file(path, &program.hack())
}

pub fn write_symbols(path: &Path, idents: &Idents) -> Result<(), Error> {
    let yaml = idents.to_yaml().map_err(Error::Symbols)?;
    write_file(path, &yaml)
}

fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    let name = || path.display().to_string();
    let mut file = File::create(path).map_err(|e| Error::FileCreate(name(), e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::FileWrite(name(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hack_name() {
        assert_eq!(
            hack_path(Path::new("projects/6/Max.asm")).unwrap(),
            PathBuf::from("projects/6/Max.hack")
        );
        assert_eq!(hack_path(Path::new("Pong.asm")).unwrap(), PathBuf::from("Pong.hack"));
        assert_eq!(
            hack_path(Path::new("a.b.asm")).unwrap(),
            PathBuf::from("a.b.hack")
        );
    }

    #[test]
    fn hack_name_requires_asm() {
        for bad in ["Max.txt", "Max", "Max.ASM", "asm"] {
            let err = hack_path(Path::new(bad)).unwrap_err();
            assert!(matches!(err, Error::BadExtension(_)), "{bad}");
        }
    }

    #[test]
    fn missing_input() {
        let err = read_source(Path::new("no/such/dir/Prog.asm")).unwrap_err();
        assert!(matches!(err, Error::FileOpen(..)));
    }
}
