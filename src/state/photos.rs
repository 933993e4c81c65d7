//! Photo attachments and their preview handles

use crate::error::WizardError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Opaque reference to a displayable preview of a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreviewHandle(u64);

/// A file picked by the user, not yet attached to the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl PhotoFile {
    /// Build a photo file from a path on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WizardError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                WizardError::PhotoNotFound(path.to_path_buf())
            } else {
                WizardError::PhotoUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        if !metadata.is_file() {
            return Err(WizardError::PhotoNotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
        })
    }

    /// Parse a comma-separated list of paths, failing on the first bad one
    pub fn parse_list(input: &str) -> Result<Vec<Self>, WizardError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Self::from_path)
            .collect()
    }
}

/// What a preview handle resolves to while it is alive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSource {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// A photo attached to the listing
#[derive(Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: Uuid,
    pub name: String,
    pub preview: PreviewHandle,
}

/// Ordered photo attachments; owns every preview handle it hands out
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PhotoStore {
    photos: Vec<Photo>,
    previews: HashMap<PreviewHandle, PreviewSource>,
    next_handle: u64,
}

impl PhotoStore {
    /// Append files at the tail, returning the ids of the new entries
    pub fn add(&mut self, files: Vec<PhotoFile>) -> Vec<Uuid> {
        let mut ids = Vec::with_capacity(files.len());
        for file in files {
            let preview = PreviewHandle(self.next_handle);
            self.next_handle += 1;
            self.previews.insert(
                preview,
                PreviewSource {
                    path: file.path,
                    size_bytes: file.size_bytes,
                },
            );

            let id = Uuid::new_v4();
            tracing::debug!(%id, name = %file.name, "photo attached");
            self.photos.push(Photo {
                id,
                name: file.name,
                preview,
            });
            ids.push(id);
        }
        ids
    }

    /// Remove a photo by id and release its preview
    pub fn remove(&mut self, id: Uuid) -> Option<Photo> {
        let index = self.photos.iter().position(|p| p.id == id)?;
        let photo = self.photos.remove(index);
        self.previews.remove(&photo.preview);
        tracing::debug!(%id, "photo removed, preview released");
        Some(photo)
    }

    /// Release every preview and drop all photos
    pub fn clear(&mut self) {
        self.photos.clear();
        self.previews.clear();
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Resolve a preview handle, if it has not been released
    pub fn preview(&self, handle: PreviewHandle) -> Option<&PreviewSource> {
        self.previews.get(&handle)
    }

    /// Number of previews currently held
    pub fn live_previews(&self) -> usize {
        self.previews.len()
    }
}
