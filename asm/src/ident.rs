use crate::error::SyntaxError;
use arch::{symbol::Builtin, ADDR_MAX, VAR_BASE};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ident {
    Builtin,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kind: Ident,
    pub addr: u16,
    /// 1-based source line that bound the name, `None` for builtins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Symbol table of one assembly run, in binding order.
#[derive(Debug, Clone)]
pub struct Idents {
    map: IndexMap<String, Entry>,
    next_var: u16,
}

impl Idents {
    pub fn new() -> Self {
        let map = Builtin::all()
            .map(|b| {
                let entry = Entry {
                    kind: Ident::Builtin,
                    addr: b.addr(),
                    line: None,
                };
                (b.to_string(), entry)
            })
            .collect();
        Idents {
            map,
            next_var: VAR_BASE,
        }
    }

    /// Binds a label, returning the line of the declaration it replaced.
    /// Predefined symbols cannot be rebound.
    pub fn insert_label(
        &mut self,
        name: String,
        addr: u16,
        line: usize,
    ) -> Result<Option<usize>, SyntaxError> {
        if let Some(Entry {
            kind: Ident::Builtin,
            ..
        }) = self.map.get(&name)
        {
            return Err(SyntaxError::PredefinedLabel(name));
        }
        let entry = Entry {
            kind: Ident::Label,
            addr,
            line: Some(line),
        };
        Ok(self.map.insert(name, entry).and_then(|prev| prev.line))
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.map.get(name).map(|entry| entry.addr)
    }

    /// Looks `name` up, binding it to the next free variable address on first use.
    pub fn allocate(&mut self, name: &str, line: usize) -> Result<u16, SyntaxError> {
        if let Some(addr) = self.get_val(name) {
            return Ok(addr);
        }
        if self.next_var > ADDR_MAX {
            return Err(SyntaxError::AddressOverflow(name.to_string()));
        }
        let addr = self.next_var;
        let entry = Entry {
            kind: Ident::Variable,
            addr,
            line: Some(line),
        };
        self.map.insert(name.to_string(), entry);
        self.next_var += 1;
        Ok(addr)
    }

    pub fn next_var(&self) -> u16 {
        self.next_var
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.map.iter()
    }

    /// Labels and variables as YAML, keyed by name.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let user: IndexMap<&String, &Entry> = self
            .iter()
            .filter(|(_, entry)| entry.kind != Ident::Builtin)
            .collect();
        serde_yaml::to_string(&user)
    }
}

impl Default for Idents {
    fn default() -> Self {
        Self::new()
    }
}
