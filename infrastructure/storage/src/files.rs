use std::path::{Path, PathBuf};

use business::domain::errors::RepositoryError;
use business::domain::inspection::model::SaveSlot;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes spreadsheet bytes: UTF-8 with or without BOM, falling back to Latin-1.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!("Input is not UTF-8, decoding as Latin-1");
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

/// Path a snapshot lands in: `out.csv`, `out_progress_5.csv`, `out_interrupted.csv`, `out_error.csv`.
pub fn slot_path(main: &Path, slot: SaveSlot) -> PathBuf {
    let suffix = match slot {
        SaveSlot::Main => return main.to_path_buf(),
        SaveSlot::Progress(count) => format!("progress_{}", count),
        SaveSlot::Interrupted => "interrupted".to_string(),
        SaveSlot::Error => "error".to_string(),
    };

    let stem = main
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = match main.extension() {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}_{}", stem, suffix),
    };
    main.with_file_name(file_name)
}

pub async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, RepositoryError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(RepositoryError::read_failed(format!("{}: {}", path.display(), e))),
    }
}

/// Writes `bytes`, creating missing parent directories first.
pub async fn write_file(path: &Path, bytes: &[u8]) -> Result<String, RepositoryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| RepositoryError::write_failed(format!("{}: {}", parent.display(), e)))?;
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| RepositoryError::write_failed(format!("{}: {}", path.display(), e)))?;
    Ok(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFa,b"), "a,b");
    }

    #[test]
    fn should_fall_back_to_latin1() {
        assert_eq!(decode_text(b"caf\xE9"), "café");
    }

    #[test]
    fn should_name_snapshot_files_after_slot() {
        let main = Path::new("out/sample_output_with_rules.csv");

        assert_eq!(slot_path(main, SaveSlot::Main), main);
        assert_eq!(
            slot_path(main, SaveSlot::Progress(10)),
            Path::new("out/sample_output_with_rules_progress_10.csv")
        );
        assert_eq!(
            slot_path(main, SaveSlot::Interrupted),
            Path::new("out/sample_output_with_rules_interrupted.csv")
        );
        assert_eq!(
            slot_path(Path::new("result"), SaveSlot::Error),
            Path::new("result_error")
        );
    }

    #[tokio::test]
    async fn should_create_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.txt");

        write_file(&path, b"hi").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hi");
        assert_eq!(read_optional(&dir.path().join("missing")).await.unwrap(), None);
    }
}
