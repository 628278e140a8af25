//! `check`: tokenize, rebuild in memory, and compare against the input.

use cpplex_core::{rebuild, tokenize};

use super::{read_file, report_error};

/// Outcome of comparing the rebuild with the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    /// Byte-identical.
    Equal,
    /// Same content, different newline characters somewhere.
    NewlinesDiffer,
    /// Content differs.
    Different,
}

/// Returns the process exit code: 0 for an exact rebuild, 1 otherwise.
pub(crate) fn check_file(path: &str) -> i32 {
    let content = read_file(path);
    let out = tokenize(&content, 0);
    if let Some(error) = &out.error {
        report_error(path, error);
        return 1;
    }

    let rebuilt = rebuild(&out);
    match compare(&content, &rebuilt) {
        Verdict::Equal => {
            println!("[ok]");
            0
        }
        Verdict::NewlinesDiffer => {
            println!("[~ok]");
            1
        }
        Verdict::Different => {
            println!("bad rebuild of {path}");
            1
        }
    }
}

/// Split off the next line: `(body_len, total_len)` where the body
/// excludes the terminator and the total includes it.
fn next_line(buf: &[u8]) -> (usize, usize) {
    let body = memchr::memchr2(b'\r', b'\n', buf).unwrap_or(buf.len());
    let total = match buf.get(body) {
        Some(b'\r') if buf.get(body + 1) == Some(&b'\n') => body + 2,
        Some(_) => body + 1,
        None => body,
    };
    (body, total)
}

/// Line-by-line comparison. A body mismatch names the line and stops;
/// terminator differences are reported but comparison continues.
fn compare(original: &[u8], rebuilt: &[u8]) -> Verdict {
    let mut verdict = Verdict::Equal;
    let mut oi = 0;
    let mut ri = 0;
    let mut line = 0u32;

    loop {
        line += 1;
        let o_end = oi >= original.len();
        let r_end = ri >= rebuilt.len();
        if o_end || r_end {
            if o_end != r_end {
                println!("length mismatch");
                return Verdict::Different;
            }
            return verdict;
        }

        let (o_body, o_total) = next_line(&original[oi..]);
        let (r_body, r_total) = next_line(&rebuilt[ri..]);

        if original[oi..oi + o_body] != rebuilt[ri..ri + r_body] {
            println!("mismatch at line {line}");
            return Verdict::Different;
        }
        if original[oi + o_body..oi + o_total] != rebuilt[ri + r_body..ri + r_total] {
            println!("inconsistent newline at line {line}");
            verdict = Verdict::NewlinesDiffer;
        }

        oi += o_total;
        ri += r_total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn next_line_handles_every_terminator() {
        assert_eq!(next_line(b"ab\ncd"), (2, 3));
        assert_eq!(next_line(b"ab\r\ncd"), (2, 4));
        assert_eq!(next_line(b"ab\rcd"), (2, 3));
        assert_eq!(next_line(b"ab"), (2, 2));
        assert_eq!(next_line(b"\nx"), (0, 1));
    }

    #[test]
    fn identical_buffers_compare_equal() {
        assert_eq!(compare(b"a\nb\n", b"a\nb\n"), Verdict::Equal);
        assert_eq!(compare(b"", b""), Verdict::Equal);
    }

    #[test]
    fn newline_style_difference_is_soft() {
        assert_eq!(compare(b"a\r\nb\r\n", b"a\nb\n"), Verdict::NewlinesDiffer);
    }

    #[test]
    fn content_difference_is_hard() {
        assert_eq!(compare(b"a\nb\n", b"a\nc\n"), Verdict::Different);
        assert_eq!(compare(b"a\n", b"a\nextra\n"), Verdict::Different);
    }

    #[test]
    fn check_accepts_a_clean_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.cpp");
        fs::write(&path, b"int main()\n{\n\treturn 0;\n}\n").unwrap();
        assert_eq!(check_file(path.to_str().unwrap()), 0);
    }

    #[test]
    fn check_flags_mixed_newline_styles() {
        // One LF and one CRLF: the rebuild picks a single style, so the
        // comparison can only be newline-soft.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.cpp");
        fs::write(&path, b"int a;\nint b;\r\n").unwrap();
        assert_eq!(check_file(path.to_str().unwrap()), 1);
    }

    #[test]
    fn check_reports_tokenize_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.cpp");
        fs::write(&path, b"int @;\n").unwrap();
        assert_eq!(check_file(path.to_str().unwrap()), 1);
    }
}
