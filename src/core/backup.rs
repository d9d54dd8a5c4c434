use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::fs_utils::ensure_writable;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Directory name of the section files inside the archive.
pub const ARCHIVE_DATA_DIR: &str = "attendance_data";

pub struct BackupLogic;

impl BackupLogic {
    /// Zip every section file and the registry into `dest_file`.
    ///
    /// Returns the number of files archived.
    pub fn backup(cfg: &Config, dest_file: &str, force: bool) -> AppResult<usize> {
        let dest = Path::new(dest_file);

        if !dest.is_absolute() {
            return Err(AppError::Backup(format!(
                "destination path must be absolute: {dest_file}"
            )));
        }

        ensure_writable(dest, force)?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut entries: Vec<(String, PathBuf)> = section_files(&cfg.data_dir_path())?
            .into_iter()
            .filter_map(|p| {
                let name = p.file_name()?.to_string_lossy().to_string();
                Some((format!("{ARCHIVE_DATA_DIR}/{name}"), p))
            })
            .collect();

        let registry = cfg.registry_path();
        if registry.exists()
            && let Some(name) = registry.file_name()
        {
            entries.push((name.to_string_lossy().to_string(), registry.clone()));
        }

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);

        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (name, path) in &entries {
            zip.start_file(name.as_str(), options)
                .map_err(|e| AppError::Backup(e.to_string()))?;
            let mut f = fs::File::open(path)?;
            io::copy(&mut f, &mut zip)?;
        }

        zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

        Ok(entries.len())
    }
}

/// `*.csv` files of the data directory, sorted by name.
fn section_files(data_dir: &Path) -> AppResult<Vec<PathBuf>> {
    let read = match fs::read_dir(data_dir) {
        Ok(r) => r,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    for entry in read {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
