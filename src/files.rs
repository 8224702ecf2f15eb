use std::fs;
use std::path::Path;

use crate::core::Ranking;
use crate::error::Result;

/// Default input: newline-separated game names
pub const DEFAULT_NAMES_FILE: &str = "names.txt";

/// Default output: one `"<rank>. <name>"` line per game
pub const DEFAULT_RANKINGS_FILE: &str = "rankings.txt";

/// Read the name list from a file.
///
/// One name per line; surrounding whitespace is trimmed and blank lines
/// (including the customary trailing one) are dropped. A name can never be
/// blank, so an empty file yields an empty list.
pub fn read_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Write a ranking out as the rankings text file.
///
/// The file is created (or truncated) even for an empty ranking.
pub fn write_rankings(path: impl AsRef<Path>, ranking: &Ranking) -> Result<()> {
    fs::write(path, ranking.to_text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("trendrank-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_read_names() {
        let path = temp_path("read-names.txt");
        fs::write(&path, "World of Warcraft\nEVE Online\nRuneScape\n").unwrap();

        let names = read_names(&path).unwrap();
        assert_eq!(names, vec!["World of Warcraft", "EVE Online", "RuneScape"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let path = temp_path("blank-lines.txt");
        fs::write(&path, "Tibia\n\n  \nRuneScape\n\n").unwrap();

        let names = read_names(&path).unwrap();
        assert_eq!(names, vec!["Tibia", "RuneScape"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_file_yields_no_names() {
        let path = temp_path("empty-names.txt");
        fs::write(&path, "").unwrap();

        let names = read_names(&path).unwrap();
        assert!(names.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_names(temp_path("does-not-exist.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_rankings() {
        let path = temp_path("write-rankings.txt");
        let ranking = Ranking::from_sorted(
            vec!["Cccc".to_string(), "Bbb".to_string(), "Aa".to_string()],
            "length",
        );

        write_rankings(&path, &ranking).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1. Cccc\n2. Bbb\n3. Aa\n"
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_empty_ranking_creates_empty_file() {
        let path = temp_path("empty-rankings.txt");
        let ranking = Ranking::default();

        write_rankings(&path, &ranking).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        fs::remove_file(&path).unwrap();
    }
}
