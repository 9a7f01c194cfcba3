//! Pattern file loading
//!
//! A pattern is plain text: `#` is an alive cell, every other character is dead.
//! The longest line sets the width and shorter lines are padded with dead cells.

use crate::error::Result;
use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Initial cell states read from a pattern, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<bool>,
}

impl Pattern {
    /// Count alive cells in the pattern
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

/// Parse a pattern from its text.
///
/// Lines are split on `\n` only. A final line terminator does not open a new row,
/// and empty input yields a 0x0 pattern.
pub fn parse_pattern(content: &str) -> Pattern {
    let lines: Vec<&str> = content.split_terminator('\n').collect();

    let height = lines.len();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut cells = Vec::with_capacity(width * height);
    for line in &lines {
        let start = cells.len();
        cells.extend(line.chars().map(|ch| ch == '#'));
        cells.resize(start + width, false);
    }

    Pattern {
        width: width as u32,
        height: height as u32,
        cells,
    }
}

/// Read a whole pattern from any reader
pub fn read_pattern<R: Read>(mut reader: R) -> Result<Pattern> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(parse_pattern(&content))
}

/// Load a pattern from a text file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Pattern> {
    let file = std::fs::File::open(&path)
        .with_context(|| format!("Failed to open pattern file: {}", path.as_ref().display()))?;

    let pattern = read_pattern(file)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    tracing::debug!(
        path = %path.as_ref().display(),
        width = pattern.width,
        height = pattern.height,
        alive = pattern.living_count(),
        "loaded pattern"
    );
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern() {
        let pattern = parse_pattern("##\n.#\n");
        assert_eq!(pattern.width, 2);
        assert_eq!(pattern.height, 2);
        assert_eq!(pattern.cells, vec![true, true, false, true]);
    }

    #[test]
    fn test_short_lines_padded() {
        let pattern = parse_pattern("#\n###\n\n.#");
        assert_eq!(pattern.width, 3);
        assert_eq!(pattern.height, 4);
        assert_eq!(
            pattern.cells,
            vec![
                true, false, false, //
                true, true, true, //
                false, false, false, //
                false, true, false,
            ]
        );
        assert_eq!(pattern.living_count(), 5);
    }

    #[test]
    fn test_any_other_character_is_dead() {
        let pattern = parse_pattern("#x O1\r\n");
        assert_eq!(pattern.width, 6);
        assert_eq!(pattern.height, 1);
        assert_eq!(pattern.living_count(), 1);
    }

    #[test]
    fn test_width_counts_characters() {
        let pattern = parse_pattern("é#\n#");
        assert_eq!(pattern.width, 2);
        assert_eq!(pattern.cells, vec![false, true, true, false]);
    }

    #[test]
    fn test_empty_input() {
        let pattern = parse_pattern("");
        assert_eq!((pattern.width, pattern.height), (0, 0));
        assert!(pattern.cells.is_empty());
    }

    #[test]
    fn test_read_failure_propagates() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        assert!(matches!(read_pattern(Broken), Err(LifeError::PatternRead(_))));
    }

    #[test]
    fn test_load_pattern_from_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("glider.txt");
        let mut file = std::fs::File::create(&file_path).unwrap();
        write!(file, ".#.\n..#\n###\n").unwrap();

        let pattern = load_pattern_from_file(&file_path).unwrap();
        assert_eq!((pattern.width, pattern.height), (3, 3));
        assert_eq!(pattern.living_count(), 5);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let err = load_pattern_from_file(temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
