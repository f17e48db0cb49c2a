//! Leitura de reference strings de um arquivo texto.
//!
//! O formato é o mesmo aceito na linha de comando (números separados por
//! vírgula ou espaço), podendo ocupar várias linhas. Linhas começando com `#`
//! são comentários.

use std::{fs, path::Path};

use pagesim::{ReferenceString, Result};

pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<ReferenceString> {
    let contents = fs::read_to_string(path)?;

    parse_reference_file(&contents)
}

fn parse_reference_file(contents: &str) -> Result<ReferenceString> {
    let mut pages = Vec::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed: ReferenceString = line.parse()?;
        pages.extend(parsed.iter());
    }

    Ok(ReferenceString::new(pages))
}
