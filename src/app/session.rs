// AgentDeck - app/session.rs
//
// Draft persistence: save and restore the four panels' form inputs between
// application restarts.
//
// - Drafts are saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good file.
// - Load errors are logged and discarded; a corrupt or incompatible file
//   just starts the app with empty forms.
// - Results are NOT persisted. They are canned and regenerated on demand.

use crate::core::model::AgentForm;
use crate::util::constants::SESSION_FILE_NAME;
use crate::util::error::SessionError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `DraftSession` changes in a breaking way. Version
/// mismatches silently discard the file.
pub const SESSION_VERSION: u32 = 1;

/// Persistent snapshot of the dashboard's form drafts.
#[derive(Debug, Serialize, Deserialize)]
pub struct DraftSession {
    /// Schema version; must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// One entry per panel that had any input when saved.
    #[serde(default)]
    pub drafts: Vec<AgentForm>,
}

impl DraftSession {
    /// Build a session from the current forms, dropping blank ones.
    pub fn from_forms(forms: Vec<AgentForm>) -> Self {
        Self {
            version: SESSION_VERSION,
            drafts: forms.into_iter().filter(|f| !f.is_blank()).collect(),
        }
    }
}

/// Resolve the draft file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed.
pub fn save(data: &DraftSession, path: &Path) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SessionError::Io {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| SessionError::Json { source: e })?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| SessionError::Io {
        path: tmp.clone(),
        operation: "write",
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        SessionError::Io {
            path: path.to_path_buf(),
            operation: "rename",
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), drafts = data.drafts.len(), "Drafts saved");
    Ok(())
}

/// Load and validate a `DraftSession` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller should treat `None` as "start fresh".
pub fn load(path: &Path) -> Option<DraftSession> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // "File not found" is the normal first run.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read draft file");
            }
        })
        .ok()?;

    let data: DraftSession = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Draft file is malformed; starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Draft file version mismatch; starting fresh"
        );
        return None;
    }

    tracing::info!(path = %path.display(), drafts = data.drafts.len(), "Draft file loaded");
    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{AgentKind, ComplianceForm, SegmentationForm};
    use tempfile::TempDir;

    fn sample_forms() -> Vec<AgentForm> {
        vec![
            AgentForm::empty(AgentKind::Narrative),
            AgentForm::Compliance(ComplianceForm {
                content: "Best prices guaranteed".to_string(),
                regulation: "FTC".to_string(),
            }),
            AgentForm::Segmentation(SegmentationForm {
                product: "Meal kits".to_string(),
                market: "UK".to_string(),
                notes: String::new(),
            }),
            AgentForm::empty(AgentKind::Competitor),
        ]
    }

    #[test]
    fn test_blank_forms_are_not_saved() {
        let session = DraftSession::from_forms(sample_forms());
        assert_eq!(session.drafts.len(), 2);
        assert_eq!(session.drafts[0].kind(), AgentKind::Compliance);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        let original = DraftSession::from_forms(sample_forms());

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should return Some after valid save");

        assert_eq!(loaded.version, SESSION_VERSION);
        assert_eq!(loaded.drafts, original.drafts);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("drafts.json");
        save(&DraftSession::from_forms(sample_forms()), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nonexistent.json")).is_none());
    }

    #[test]
    fn test_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        let mut data = DraftSession::from_forms(sample_forms());
        data.version = 99;
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    /// A leftover temp file from an earlier crash must not break the next save.
    #[test]
    fn test_save_overwrites_stale_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        save(&DraftSession::from_forms(sample_forms()), &path).unwrap();
        assert!(load(&path).is_some());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
