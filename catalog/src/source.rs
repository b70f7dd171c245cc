use crate::error::CatalogError;
use crate::model::JobRecord;
use std::fs;
use std::path::Path;

/// Read a JSON array of postings from `path`.
///
/// The records are not validated here; pass them to
/// [`JobCatalogQuery::new`](crate::JobCatalogQuery::new).
pub fn load_from_path(path: &Path) -> Result<Vec<JobRecord>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let jobs: Vec<JobRecord> =
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), jobs = jobs.len(), "loaded postings");
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("catalog-source-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_path_reads_records() {
        let seed = serde_json::to_string_pretty(&crate::seed::jobs()).unwrap();
        let path = scratch_file("seed.json", &seed);

        let jobs = load_from_path(&path).unwrap();
        assert_eq!(jobs, crate::seed::jobs());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_from_missing_path_is_io_error() {
        let path = env::temp_dir().join("catalog-source-does-not-exist.json");
        assert!(matches!(load_from_path(&path), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let path = scratch_file("broken.json", r#"[{"id": "x"}]"#);

        assert!(matches!(load_from_path(&path), Err(CatalogError::Parse { .. })));
        fs::remove_file(path).unwrap();
    }
}
