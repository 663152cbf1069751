use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use models::ContactDocument;
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::record_store::RecordStore;

/// JSON file-backed contact document.
///
/// Nothing is cached: every `load` reads the file again. `save` writes a
/// sibling temp file, fsyncs it and renames it over the target, so the file
/// on disk is always a complete document.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "contacts.json".to_string());
        self.file_path
            .with_file_name(format!(".{}.{}.tmp", name, uuid::Uuid::new_v4()))
    }

    async fn write_temp(&self, tmp: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<ContactDocument, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "contact document missing; starting empty");
                return Ok(ContactDocument::new());
            }
            Err(e) => {
                return Err(ServiceError::StorageRead(format!(
                    "{}: {}",
                    self.file_path.display(),
                    e
                )))
            }
        };
        ContactDocument::from_json_slice(&bytes).map_err(|e| {
            ServiceError::StorageRead(format!("{}: {}", self.file_path.display(), e))
        })
    }

    async fn save(&self, doc: &ContactDocument) -> Result<(), ServiceError> {
        let data = doc
            .to_pretty_json()
            .map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::StorageWrite(format!("{}: {}", parent.display(), e)))?;
        }

        let tmp = self.temp_path();
        let written = match self.write_temp(&tmp, &data).await {
            Ok(()) => fs::rename(&tmp, &self.file_path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::StorageWrite(format!(
                "{}: {}",
                self.file_path.display(),
                e
            )));
        }
        debug!(path = %self.file_path.display(), entries = doc.len(), "contact document saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{ContactId, ContactRecord};

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("json_file_store_{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() -> Result<(), anyhow::Error> {
        let store = JsonFileStore::new(tmp_path());
        let doc = store.load().await?;
        assert!(doc.is_empty());
        // loading never creates the file
        assert!(fs::metadata(store.path()).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn save_then_load_persists() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        let store = JsonFileStore::new(&tmp);

        let mut doc = ContactDocument::new();
        doc.insert(ContactId::new(3)?, ContactRecord { name: "Cy".into(), phone: "3".into() });
        doc.insert(ContactId::new(1)?, ContactRecord { name: "Ann".into(), phone: "1".into() });
        store.save(&doc).await?;

        // a second instance sees the same document
        let reloaded = JsonFileStore::new(&tmp).load().await?;
        assert_eq!(reloaded, doc);

        // no temp files left beside the target
        let dir = tmp.parent().unwrap();
        let stem = tmp.file_name().unwrap().to_string_lossy().into_owned();
        let mut rd = fs::read_dir(dir).await?;
        while let Some(entry) = rd.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            assert!(!(name.contains(&stem) && name.ends_with(".tmp")), "leftover {name}");
        }

        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn save_creates_parent_dirs() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("json_file_store_dir_{}", uuid::Uuid::new_v4()));
        let store = JsonFileStore::new(dir.join("nested").join("contacts.json"));
        store.save(&ContactDocument::new()).await?;
        assert_eq!(fs::read_to_string(store.path()).await?, "{}");
        let _ = fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_read_error() -> Result<(), anyhow::Error> {
        let tmp = tmp_path();
        for body in ["{not json", r#"{"01": {"name": "a", "phone": "1"}}"#] {
            fs::write(&tmp, body).await?;
            let err = JsonFileStore::new(&tmp).load().await.unwrap_err();
            assert!(matches!(err, ServiceError::StorageRead(_)), "{body}: {err:?}");
        }
        let _ = fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn unwritable_target_is_write_error() -> Result<(), anyhow::Error> {
        // the target path is an existing directory, so the rename cannot succeed
        let dir = std::env::temp_dir().join(format!("json_file_store_blocked_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(dir.join("contacts.json")).await?;
        let store = JsonFileStore::new(dir.join("contacts.json"));
        let err = store.save(&ContactDocument::new()).await.unwrap_err();
        assert!(matches!(err, ServiceError::StorageWrite(_)));
        let _ = fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
