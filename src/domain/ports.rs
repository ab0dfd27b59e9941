use crate::domain::model::{DocumentModel, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote record-keeping service. One method per collaborator the document
/// engine consumes; each returns the raw record with any transport envelope
/// already stripped.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    async fn shipment(&self, id: &str) -> Result<Record>;
    async fn branch(&self, id: &str) -> Result<Record>;
    async fn party(&self, id: &str) -> Result<Record>;
}

/// Rendering collaborator. Consumes a finished document and returns a
/// reference to the produced artifact; how it paints it is not our concern.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, document: &DocumentModel) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
