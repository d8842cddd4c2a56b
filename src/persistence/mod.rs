use std::{
    fs,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    info,
};

use crate::core::{
    CatalogFile,
    FolioError,
    ProjectCatalog,
};

/// Reads a `.json` or `.hjson` file into `T`, picking the parser from the
/// extension.
pub fn read_data_file<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, FolioError> {
    let content = fs::read_to_string(path)
        .map_err(|source| FolioError::ReadFile { path: path.to_path_buf(), source })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let data = match extension.as_str() {
        "json" => serde_json::from_str(&content)?,
        "hjson" => serde_hjson::from_str(&content)?,
        other => return Err(FolioError::UnsupportedDataFormat(other.to_string())),
    };
    debug!("Data loaded from: {}", path.display());
    Ok(data)
}

pub fn write_json<T: Serialize>(data: &T, path: &Path) -> Result<(), FolioError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    debug!("Data saved to: {}", path.display());
    Ok(())
}

pub fn load_catalog(path: &Path) -> Result<ProjectCatalog, FolioError> {
    let file: CatalogFile = read_data_file(path)?;
    let catalog = ProjectCatalog::from_file(file)?;
    info!("Loaded {} projects from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Recursively copies `from` into `to`, returning the number of files copied.
/// A missing source directory copies nothing.
pub fn copy_dir(from: &Path, to: &Path) -> Result<usize, FolioError> {
    if !from.is_dir() {
        return Ok(0);
    }

    fs::create_dir_all(to)?;
    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let path = entry.path();
        let target = to.join(entry.file_name());

        if path.is_dir() {
            copied += copy_dir(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    const ONE_PROJECT: &str = r#"{"projects": [{
        "slug": "demo",
        "title": "Demo",
        "shortDescription": "short",
        "fullDescription": "full",
        "technologies": [],
        "image": "/images/demo.png"
    }]}"#;

    #[test]
    fn loads_json_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.json");
        fs::write(&path, ONE_PROJECT).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.slugs().collect::<Vec<_>>(), vec!["demo"]);
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("projects.yaml");
        fs::write(&path, ONE_PROJECT).unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, FolioError::UnsupportedDataFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn missing_file_keeps_io_error_and_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
        let FolioError::ReadFile { path: reported, source } = &err else {
            panic!("expected a read error, got {err:?}");
        };
        assert_eq!(reported, &path);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn copies_nested_directories() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("public");
        fs::create_dir_all(src.join("images/projects")).unwrap();
        fs::write(src.join("favicon.ico"), b"x").unwrap();
        fs::write(src.join("images/projects/a.png"), b"y").unwrap();

        let out = dir.path().join("out");
        assert_eq!(copy_dir(&src, &out).unwrap(), 2);
        assert!(out.join("images/projects/a.png").exists());
        assert_eq!(copy_dir(&dir.path().join("missing"), &out).unwrap(), 0);
    }

    #[test]
    fn bundled_catalog_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/projects.json");
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.find("autonomous-maze-robot").is_some());
    }
}
