use crate::domain::model::{DocumentModel, Record};
use crate::domain::ports::{RecordLookup, Renderer};
use crate::utils::error::{DocError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::form_urlencoded;

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=";
const TRACKING_LINK: &str = "https://gulfcargoksa.com/Orderdetails/shipment/?invoice=";

/// Scannable tracking-code image for a shipment, served by an external
/// image collaborator. Opaque to the engine; only the URL matters.
pub fn tracking_qr_url(shipment_id: &str) -> String {
    let target = format!("{}{}", TRACKING_LINK, shipment_id);
    let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{}{}", QR_SERVICE, encoded)
}

/// Record lookup against the remote record-keeping service. Responses come
/// wrapped in varying envelopes (`data`, `cargo`, `branch`), which are
/// stripped here so the rest of the engine only ever sees bare records.
pub struct HttpRecordLookup {
    base: String,
    client: Client,
}

impl HttpRecordLookup {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch(&self, path: &str, envelope_keys: &[&str]) -> Result<Record> {
        let url = format!("{}/{}", self.base, path);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DocError::UpstreamError {
                endpoint: url,
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        Ok(unwrap_envelope(body, envelope_keys))
    }
}

fn unwrap_envelope(body: Value, envelope_keys: &[&str]) -> Record {
    if let Value::Object(map) = &body {
        for key in envelope_keys {
            if let Some(Value::Object(inner)) = map.get(*key) {
                return Record::from_map(inner.clone());
            }
        }
    }
    Record::from_value(body)
}

#[async_trait]
impl RecordLookup for HttpRecordLookup {
    async fn shipment(&self, id: &str) -> Result<Record> {
        self.fetch(&format!("cargo/{}", id), &["data", "cargo"])
            .await
            .map_err(|e| match e {
                DocError::UpstreamError { status: 404, .. } => DocError::ShipmentNotFound {
                    id: id.to_string(),
                },
                other => other,
            })
    }

    async fn branch(&self, id: &str) -> Result<Record> {
        self.fetch(&format!("branch/{}", id), &["branch", "data"])
            .await
    }

    async fn party(&self, id: &str) -> Result<Record> {
        self.fetch(&format!("party/{}", id), &["data", "party"])
            .await
    }
}

/// Default rendering collaborator: writes the finished document model as
/// pretty JSON under the configured output directory, named after the
/// booking number. A real print renderer consumes the same model through
/// the Renderer port.
#[derive(Debug, Clone)]
pub struct JsonRenderer {
    output_dir: String,
}

impl JsonRenderer {
    pub fn new(output_dir: String) -> Self {
        Self { output_dir }
    }
}

#[async_trait]
impl Renderer for JsonRenderer {
    async fn render(&self, document: &DocumentModel) -> Result<String> {
        let safe_name: String = document
            .invoice
            .booking_no
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        let full_path = Path::new(&self.output_dir).join(format!("{}.json", safe_name));
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_vec_pretty(document)?;
        fs::write(&full_path, payload)?;

        Ok(full_path.to_string_lossy().into_owned())
    }
}
