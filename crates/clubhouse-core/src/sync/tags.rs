use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use super::{replace_keyed, ListState, Operation, SyncedList};
use crate::error::Result;
use crate::models::{Keyed, PrintTagsRequest, PrintTagsResponse, Tag};
use crate::notify::Notifier;
use crate::resources::TagsClient;
use crate::transport::{ApiClient, ApiResponse};

/// Keeps a local tag list in step with the backend.
pub struct TagsController {
    client: TagsClient,
    list: SyncedList<Tag>,
}

impl TagsController {
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client: TagsClient::new(api),
            list: SyncedList::new(notifier),
        }
    }

    pub fn state(&self) -> ListState<Tag> {
        self.list.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<Tag>> {
        self.list.subscribe()
    }

    /// Loads the list the first time the view becomes active.
    pub async fn activate(&self) -> Result<()> {
        if self.list.first_activation() {
            self.fetch_all().await?;
        }
        Ok(())
    }

    pub async fn fetch_all(&self) -> Result<Vec<Tag>> {
        self.list
            .run(Operation::reload("fetch tags"), self.client.list(), |state, tags| {
                state.items.clone_from(tags);
            })
            .await
    }

    pub async fn refresh(&self) -> Result<Vec<Tag>> {
        self.fetch_all().await
    }

    pub async fn get_one(&self, id: &str) -> Result<Tag> {
        self.list
            .run(Operation::read("fetch tag"), self.client.get(id), |_, _| {})
            .await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Tag> {
        self.list
            .run(
                Operation::mutation("create tag", "Tag created successfully"),
                self.client.create(data),
                |state, tag| state.items.push(tag.clone()),
            )
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: &str, data: &B) -> Result<Tag> {
        self.list
            .run(
                Operation::mutation("update tag", "Tag updated successfully"),
                self.client.update(id, data),
                |state, tag| replace_keyed(&mut state.items, id, tag),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse> {
        self.list
            .run(
                Operation::mutation("delete tag", "Tag deleted successfully"),
                self.client.delete(id),
                |state, _| state.items.retain(|tag| tag.key() != id),
            )
            .await
    }

    /// Requests a print batch, then reloads the list so the new tags show up.
    pub async fn print(&self, request: &PrintTagsRequest) -> Result<PrintTagsResponse> {
        let response = self
            .list
            .run(
                Operation::mutation("print tags", "Tags printed successfully"),
                self.client.print(request),
                |_, _| {},
            )
            .await?;
        // A failed reload is already recorded in the state and notified.
        if let Err(error) = self.refresh().await {
            tracing::debug!(%error, "Reload after print failed");
        }
        Ok(response)
    }
}
