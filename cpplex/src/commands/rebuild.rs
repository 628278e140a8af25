//! `rebuild`: write `<file>.rebuilt` from the token stream.

use cpplex_core::{rebuild, tokenize};

use super::{read_file, report_error};

pub(crate) fn rebuild_file(path: &str) {
    let content = read_file(path);
    let out = tokenize(&content, 0);
    if let Some(error) = &out.error {
        report_error(path, error);
        std::process::exit(1);
    }

    let bytes = rebuild(&out);
    let target = format!("{path}.rebuilt");
    if let Err(e) = std::fs::write(&target, &bytes) {
        eprintln!("Error writing '{target}': {e}");
        std::process::exit(1);
    }
    tracing::info!(bytes = bytes.len(), "wrote {target}");
    println!("wrote {target}");
}

#[cfg(test)]
mod tests {
    use std::fs;

    #[test]
    fn rebuilt_file_matches_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.cpp");
        let source = b"#define ONE 1\nint x = ONE; // one\n";
        fs::write(&path, source).unwrap();

        super::rebuild_file(path.to_str().unwrap());

        let rebuilt = fs::read(path.with_extension("cpp.rebuilt")).unwrap();
        assert_eq!(rebuilt, source);
    }
}
