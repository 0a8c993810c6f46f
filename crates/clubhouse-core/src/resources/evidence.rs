use serde::Deserialize;

use super::decode_envelope;
use crate::error::Result;
use crate::models::lenient_list;
use crate::models::EvidenceRecord;
use crate::transport::{path_segment, ApiClient};

const EVIDENCE_ENDPOINT: &str = "/evidence";

#[derive(Debug, Default, Deserialize)]
struct EvidenceEnvelope {
    #[serde(default, deserialize_with = "lenient_list")]
    records: Vec<EvidenceRecord>,
}

/// Read-only evidence endpoints.
#[derive(Debug, Clone)]
pub struct EvidenceClient {
    api: ApiClient,
}

impl EvidenceClient {
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<EvidenceRecord>> {
        let response = self.api.get(EVIDENCE_ENDPOINT).await?;
        Ok(decode_envelope::<EvidenceEnvelope>(response, "evidence list").records)
    }

    pub async fn get(&self, id: &str) -> Result<EvidenceRecord> {
        self.api
            .get(&format!("{EVIDENCE_ENDPOINT}/{}", path_segment(id)))
            .await?
            .decode("evidence record")
    }
}
