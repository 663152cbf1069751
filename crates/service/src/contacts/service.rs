use std::sync::Arc;

use models::{ContactDocument, ContactId, ContactRecord, ContactUpdate, NewContact, SortField, SortOrder};
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::RecordStore;

const CONTACT: &str = "Contact";

/// Application service for contacts.
///
/// Holds no contact data between calls: each operation loads the document
/// from the store. Mutations run their load -> mutate -> save sequence under
/// `write_lock`; reads never take it.
pub struct ContactService {
    store: Arc<dyn RecordStore>,
    write_lock: Mutex<()>,
}

impl ContactService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }

    pub async fn get_all(&self) -> Result<ContactDocument, ServiceError> {
        self.store.load().await
    }

    pub async fn get_one(&self, id: i64) -> Result<ContactRecord, ServiceError> {
        let key = lookup_key(id)?;
        let doc = self.store.load().await?;
        doc.get(key).cloned().ok_or_else(|| ServiceError::not_found(CONTACT))
    }

    /// Both arguments are checked before the store is touched.
    pub async fn sort(&self, field: &str, order: Option<&str>) -> Result<Vec<ContactRecord>, ServiceError> {
        let field: SortField = field.parse()?;
        let order: SortOrder = match order {
            Some(o) => o.parse()?,
            None => SortOrder::default(),
        };
        let doc = self.store.load().await?;
        Ok(doc.sorted_by(field, order))
    }

    #[instrument(skip(self, input), fields(id = input.id))]
    pub async fn create(&self, input: NewContact) -> Result<ContactRecord, ServiceError> {
        let (id, record) = input.validate()?.into_parts();

        let _guard = self.write_lock.lock().await;
        let mut doc = self.store.load().await?;
        if doc.contains(id) {
            return Err(ServiceError::Conflict("Contact ID already exists".into()));
        }
        doc.insert(id, record.clone());
        self.store.save(&doc).await?;
        info!(%id, "contact created");
        Ok(record)
    }

    /// Replaces the phone number only; name and id are left as they are.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: i64, update: ContactUpdate) -> Result<ContactRecord, ServiceError> {
        let phone = update.validate()?;
        let key = lookup_key(id)?;

        let _guard = self.write_lock.lock().await;
        let mut doc = self.store.load().await?;
        let record = doc.get_mut(key).ok_or_else(|| ServiceError::not_found(CONTACT))?;
        record.phone = phone;
        let updated = record.clone();
        self.store.save(&doc).await?;
        info!(%key, "contact updated");
        Ok(updated)
    }

    /// Returns the removed contact's name.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<String, ServiceError> {
        let key = lookup_key(id)?;

        let _guard = self.write_lock.lock().await;
        let mut doc = self.store.load().await?;
        let removed = doc.remove(key).ok_or_else(|| ServiceError::not_found(CONTACT))?;
        self.store.save(&doc).await?;
        info!(%key, "contact deleted");
        Ok(removed.name)
    }
}

// Ids that can never be stored are reported as absent rather than malformed.
fn lookup_key(id: i64) -> Result<ContactId, ServiceError> {
    ContactId::new(id).map_err(|_| ServiceError::not_found(CONTACT))
}
