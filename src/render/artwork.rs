use std::path::PathBuf;

use crate::config::Settings;

/// Locations of the artwork files a deck is built from
///
/// Layout under the asset root:
/// `indices/<dir>/`, `pips/<dir>/`, `faces/<dir>/` and `boneyard/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    root: PathBuf,
    index_directory: String,
    pip_directory: String,
    face_directory: String,
}

impl Artwork {
    pub fn new(settings: &Settings) -> Self {
        Self {
            root: settings.asset_root.clone(),
            index_directory: settings.index_directory.clone(),
            pip_directory: settings.pip_directory.clone(),
            face_directory: settings.face_directory.clone(),
        }
    }

    pub fn index(&self, stem: &str) -> PathBuf {
        self.png("indices", &self.index_directory, stem)
    }

    pub fn pip(&self, stem: &str) -> PathBuf {
        self.png("pips", &self.pip_directory, stem)
    }

    pub fn face(&self, stem: &str) -> PathBuf {
        self.png("faces", &self.face_directory, stem)
    }

    /// Built-in images used for jokers without artwork
    pub fn boneyard(&self, file_name: &str) -> PathBuf {
        self.root.join("boneyard").join(file_name)
    }

    fn png(&self, kind: &str, directory: &str, stem: &str) -> PathBuf {
        self.root
            .join(kind)
            .join(directory)
            .join(format!("{}.png", stem))
    }
}
