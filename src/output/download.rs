//! Client-side file downloads

use crate::error::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const COVER_LETTER_FILE_NAME: &str = "CoverLetter.txt";

/// `Jane Q Roe` becomes `Jane-Q-Roe-Resume.pdf`. Path separators are
/// replaced too, so the result is always a single file name.
pub fn resume_file_name(full_name: &str) -> String {
    let name = full_name.replace(|c: char| c == ' ' || c == '/' || c == '\\', "-");
    format!("{}-Resume.pdf", name)
}

pub fn save_download(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, bytes)?;
    info!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resume_file_name() {
        assert_eq!(resume_file_name("Jane Roe"), "Jane-Roe-Resume.pdf");
        assert_eq!(resume_file_name("Jane Q Roe"), "Jane-Q-Roe-Resume.pdf");
        assert_eq!(resume_file_name("Prince"), "Prince-Resume.pdf");
    }

    #[test]
    fn test_resume_file_name_stays_in_download_dir() {
        let dir = tempdir().unwrap();
        for name in ["../../etc/passwd", "/tmp/Jane", "..\\Jane Roe"] {
            let file_name = resume_file_name(name);
            assert!(!file_name.contains('/') && !file_name.contains('\\'));

            let path = save_download(dir.path(), &file_name, b"%PDF").unwrap();
            assert_eq!(path.parent(), Some(dir.path()));
        }
        assert_eq!(resume_file_name("../../etc/passwd"), "..-..-etc-passwd-Resume.pdf");
    }

    #[test]
    fn test_save_download_creates_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("downloads");
        let path = save_download(&target, COVER_LETTER_FILE_NAME, b"Dear team").unwrap();

        assert_eq!(path, target.join("CoverLetter.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "Dear team");
    }
}
