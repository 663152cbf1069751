#![cfg(test)]
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use models::ContactDocument;

use crate::errors::ServiceError;
use crate::storage::RecordStore;

/// In-memory store that counts calls. `load` yields to the scheduler so
/// unsynchronised read-modify-write cycles would interleave. Saves can be
/// switched to fail while loads keep serving the last saved document.
#[derive(Default)]
pub struct MemoryStore {
    doc: Mutex<ContactDocument>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn loads(&self) -> usize { self.loads.load(Ordering::SeqCst) }
    pub fn saves(&self) -> usize { self.saves.load(Ordering::SeqCst) }
    pub fn fail_saves(&self, fail: bool) { self.fail_saves.store(fail, Ordering::SeqCst) }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self) -> Result<ContactDocument, ServiceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let doc = self.doc.lock().map_err(|e| ServiceError::StorageRead(e.to_string()))?.clone();
        tokio::task::yield_now().await;
        Ok(doc)
    }

    async fn save(&self, doc: &ContactDocument) -> Result<(), ServiceError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ServiceError::StorageWrite("simulated write failure".into()));
        }
        *self.doc.lock().map_err(|e| ServiceError::StorageWrite(e.to_string()))? = doc.clone();
        Ok(())
    }
}

/// Store that fails either every read or every write.
pub struct FailingStore {
    fail_reads: bool,
}

impl FailingStore {
    pub fn reads() -> Self { Self { fail_reads: true } }
    pub fn writes() -> Self { Self { fail_reads: false } }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn load(&self) -> Result<ContactDocument, ServiceError> {
        if self.fail_reads {
            return Err(ServiceError::StorageRead("simulated read failure".into()));
        }
        Ok(ContactDocument::new())
    }

    async fn save(&self, _doc: &ContactDocument) -> Result<(), ServiceError> {
        Err(ServiceError::StorageWrite("simulated write failure".into()))
    }
}
