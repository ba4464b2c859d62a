//! Place list loading

use crate::error::CliError;
use anyhow::{Context, Result};
use placematch_core::PlaceQuery;
use std::fs;
use std::path::Path;

/// Read a place list file, one full place name per line
pub fn load_places(path: &Path) -> Result<Vec<PlaceQuery>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read place list: {}", path.display()))?;
    Ok(parse_places(&content))
}

/// Parse place names from text
///
/// Blank lines and `#` comments are skipped. Names without any tokens are
/// skipped with a warning.
pub fn parse_places(content: &str) -> Vec<PlaceQuery> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let name = line.trim();
            if name.is_empty() || name.starts_with('#') {
                return None;
            }
            match PlaceQuery::new(name) {
                Ok(query) => Some(query),
                Err(e) => {
                    log::warn!("skipping place on line {}: {e}", index + 1);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_blank_comment_and_empty_names() {
        let places = parse_places("New York\n\n# capitals\n  Paris  \n!!!\nRio de Janeiro\r\n");
        let names: Vec<&str> = places.iter().map(|p| p.full_name()).collect();
        assert_eq!(names, ["New York", "Paris", "Rio de Janeiro"]);
        assert_eq!(places[2].tokens(), ["rio", "de", "janeiro"]);
    }

    #[test]
    fn test_load_places_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("places.txt");
        fs::write(&path, "Sydney\nLos Angeles\n").unwrap();

        let places = load_places(&path).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[1].len(), 2);
    }

    #[test]
    fn test_missing_place_list() {
        let err = load_places(Path::new("/nonexistent/places.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
