use std::sync::Arc;

use tokio::sync::watch;

use super::{ListState, Operation, SyncedList};
use crate::error::Result;
use crate::models::EvidenceRecord;
use crate::notify::Notifier;
use crate::resources::EvidenceClient;
use crate::transport::ApiClient;

/// Read-only evidence list.
pub struct EvidenceController {
    client: EvidenceClient,
    list: SyncedList<EvidenceRecord>,
}

impl EvidenceController {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client: EvidenceClient::new(api),
            list: SyncedList::new(notifier),
        }
    }

    pub fn state(&self) -> ListState<EvidenceRecord> {
        self.list.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<EvidenceRecord>> {
        self.list.subscribe()
    }

    pub async fn activate(&self) -> Result<()> {
        if self.list.first_activation() {
            self.fetch_all().await?;
        }
        Ok(())
    }

    pub async fn fetch_all(&self) -> Result<Vec<EvidenceRecord>> {
        self.list
            .run(
                Operation::reload("fetch evidence"),
                self.client.list(),
                |state, records| state.items.clone_from(records),
            )
            .await
    }

    pub async fn refresh(&self) -> Result<Vec<EvidenceRecord>> {
        self.fetch_all().await
    }

    pub async fn get_one(&self, id: &str) -> Result<EvidenceRecord> {
        self.list
            .run(
                Operation::read("fetch evidence record"),
                self.client.get(id),
                |_, _| {},
            )
            .await
    }
}
