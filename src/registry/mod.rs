//! Known batch/section pairs, persisted as a JSON list.

use crate::errors::{AppError, AppResult};
use crate::models::Section;
use crate::utils::fs_utils::write_atomic;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Seeded on first run when no registry file exists yet.
pub const DEFAULT_SECTIONS: [(&str, &str); 3] = [("58", "C"), ("58", "D"), ("58", "E")];

pub struct SectionRegistry {
    path: PathBuf,
    /// Filled on first access.
    sections: Option<Vec<Section>>,
}

impl SectionRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sections: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn loaded(&mut self) -> AppResult<&mut Vec<Section>> {
        if self.sections.is_none() {
            let sections = match fs::read_to_string(&self.path) {
                Ok(content) => serde_json::from_str::<Vec<Section>>(&content)?,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    let defaults: Vec<Section> = DEFAULT_SECTIONS
                        .iter()
                        .map(|(b, s)| Section::new(*b, *s))
                        .collect();
                    persist(&self.path, &defaults)?;
                    defaults
                }
                Err(e) => return Err(e.into()),
            };
            self.sections = Some(sections);
        }

        self.sections
            .as_mut()
            .ok_or_else(|| AppError::Other("section registry not loaded".to_string()))
    }

    pub fn list_all(&mut self) -> AppResult<&[Section]> {
        Ok(self.loaded()?.as_slice())
    }

    /// Register a section, or return the existing one when batch and section
    /// already match ignoring case.
    pub fn add(&mut self, batch_name: &str, section: &str) -> AppResult<Section> {
        let batch_name = batch_name.trim();
        let section = section.trim();
        if batch_name.is_empty() || section.is_empty() {
            return Err(AppError::InvalidSection(
                "batch and section must not be empty".to_string(),
            ));
        }

        let path = self.path.clone();
        let sections = self.loaded()?;

        if let Some(existing) = sections
            .iter()
            .find(|s| s.matches_ignore_case(batch_name, section))
        {
            return Ok(existing.clone());
        }

        let created = Section::new(batch_name, section);
        sections.push(created.clone());
        persist(&path, sections)?;

        Ok(created)
    }

    /// Remove by exact equality. Returns `false` if nothing matched.
    pub fn remove(&mut self, section: &Section) -> AppResult<bool> {
        let path = self.path.clone();
        let sections = self.loaded()?;

        let before = sections.len();
        sections.retain(|s| s != section);
        if sections.len() == before {
            return Ok(false);
        }

        persist(&path, sections)?;
        Ok(true)
    }

    /// Look a section up ignoring case, returning the registered spelling.
    pub fn resolve(&mut self, batch_name: &str, section: &str) -> AppResult<Section> {
        let (batch_name, section) = (batch_name.trim(), section.trim());
        self.loaded()?
            .iter()
            .find(|s| s.matches_ignore_case(batch_name, section))
            .cloned()
            .ok_or_else(|| AppError::SectionNotFound(format!("{batch_name} {section}")))
    }
}

fn persist(path: &Path, sections: &[Section]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sections)?;
    write_atomic(path, json.as_bytes())
}
