use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary I/O error: {0}")]
    Io(String),
    #[error("Malformed dictionary entry at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl From<std::io::Error> for DictionaryError {
    fn from(err: std::io::Error) -> Self {
        DictionaryError::Io(err.to_string())
    }
}

/// User-supplied tokens inserted by the static dictionary operator.
///
/// Read-only for the duration of a fuzzing session. An empty dictionary is valid;
/// the operator then falls back to random bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<Vec<u8>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_entries<I, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        let mut dictionary = Self::new();
        for entry in entries {
            dictionary.add(entry.into());
        }
        dictionary
    }

    /// Adds a token. Empty tokens carry no information and are dropped.
    pub fn add(&mut self, entry: Vec<u8>) -> bool {
        if entry.is_empty() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[Vec<u8>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.entries.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a dictionary file in the AFL-style token format.
    ///
    /// Each non-blank line that is not a `#` comment holds one token, written as
    /// `"value"` or `name="value"`. Inside the quotes `\\`, `\"` and `\xHH` escapes
    /// are recognised.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DictionaryError::Io(format!("Failed to read dictionary {:?}: {}", path, e))
        })?;
        let dictionary = Self::parse(&content)?;
        log::debug!(
            "Loaded {} dictionary entries from {:?}",
            dictionary.len(),
            path
        );
        Ok(dictionary)
    }

    pub fn parse(content: &str) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let quoted = match line.find('"') {
                Some(start) => &line[start..],
                None => {
                    return Err(DictionaryError::Parse {
                        line: line_no,
                        reason: "expected a double-quoted value".to_string(),
                    });
                }
            };
            if quoted.len() < 2 || !quoted.ends_with('"') {
                return Err(DictionaryError::Parse {
                    line: line_no,
                    reason: "unterminated quoted value".to_string(),
                });
            }
            let value = unescape(&quoted[1..quoted.len() - 1])
                .map_err(|reason| DictionaryError::Parse {
                    line: line_no,
                    reason,
                })?;
            dictionary.add(value);
        }
        Ok(dictionary)
    }

    /// Appends tokens given inline in the configuration, quoted or not.
    pub fn extend_from_config(&mut self, entries: &[String]) -> Result<(), DictionaryError> {
        for (index, raw) in entries.iter().enumerate() {
            let body = raw
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(raw);
            let value = unescape(body).map_err(|reason| DictionaryError::Parse {
                line: index + 1,
                reason,
            })?;
            self.add(value);
        }
        Ok(())
    }
}

fn unescape(body: &str) -> Result<Vec<u8>, String> {
    let bytes = body.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'\\' {
            if b == b'"' {
                return Err("unescaped quote inside value".to_string());
            }
            out.push(b);
            i += 1;
            continue;
        }
        match bytes.get(i + 1) {
            Some(b'\\') => out.push(b'\\'),
            Some(b'"') => out.push(b'"'),
            Some(b'x') => {
                let hex = bytes
                    .get(i + 2..i + 4)
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                    .ok_or_else(|| format!("invalid \\x escape at column {}", i + 1))?;
                out.push(hex);
                i += 4;
                continue;
            }
            Some(other) => {
                return Err(format!("unknown escape \\{}", *other as char));
            }
            None => return Err("dangling backslash".to_string()),
        }
        i += 2;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_accepts_named_and_bare_entries() {
        let content = "# tokens\n\nkw_get=\"GET \"\n\"\\x00\\xffA\"\nquote=\"a\\\"b\\\\c\"\n";
        let dictionary = Dictionary::parse(content).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.get(0), Some(&b"GET "[..]));
        assert_eq!(dictionary.get(1), Some(&[0x00, 0xff, b'A'][..]));
        assert_eq!(dictionary.get(2), Some(&b"a\"b\\c"[..]));
    }

    #[test]
    fn parse_reports_line_of_bad_entry() {
        let content = "\"ok\"\nbroken\n";
        match Dictionary::parse(content) {
            Err(DictionaryError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error on line 2, got {:?}", other),
        }
        assert!(Dictionary::parse("\"\\x4\"").is_err());
        assert!(Dictionary::parse("\"abc").is_err());
    }

    #[test]
    fn empty_values_are_skipped() {
        let dictionary = Dictionary::parse("empty=\"\"\n\"x\"").unwrap();
        assert_eq!(dictionary.entries(), &[b"x".to_vec()]);
    }

    #[test]
    fn load_from_file_reads_tokens() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "magic=\"\\x89PNG\"").unwrap();
        writeln!(file, "\"IHDR\"").unwrap();
        let dictionary = Dictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get(0), Some(&b"\x89PNG"[..]));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.dict");
        assert!(matches!(
            Dictionary::load_from_file(&missing),
            Err(DictionaryError::Io(_))
        ));
    }

    #[test]
    fn config_entries_accept_optional_quotes() {
        let mut dictionary = Dictionary::new();
        dictionary
            .extend_from_config(&["\"<html>\"".to_string(), "\\x7f\\x45LF".to_string()])
            .unwrap();
        assert_eq!(dictionary.get(0), Some(&b"<html>"[..]));
        assert_eq!(dictionary.get(1), Some(&b"\x7fELF"[..]));
    }
}
