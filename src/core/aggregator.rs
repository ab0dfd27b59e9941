use crate::core::resolver::{lenient_i64, resolve_field, value_text};
use crate::core::{normalize, totals};
use crate::domain::model::{BranchBlock, InvoiceModel, PartyBlock, Record};
use crate::domain::ports::RecordLookup;
use crate::utils::error::{DocError, Result};
use crate::utils::fmt;
use serde_json::Value;

const DEFAULT_BRANCH_NAME: &str = "GULF CARGO";
const DEFAULT_BRANCH_NAME_AR: &str = "جلف كارغو";
const DEFAULT_BRANCH_ADDRESS: &str = "KINGDOM OF SAUDI ARABIA";
const DEFAULT_COUNTRY: &str = "India";

/// Orchestrates the collaborator calls and assembles one canonical
/// InvoiceModel per invocation. Owns the partial-failure policy: the
/// shipment fetch is mandatory, everything else degrades to embedded or
/// default data.
pub struct Aggregator<L: RecordLookup> {
    lookup: L,
}

impl<L: RecordLookup> Aggregator<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub async fn assemble(&self, id: &str) -> Result<InvoiceModel> {
        // 第一階段:貨運主檔為必要資料,取不到就整個中止
        tracing::debug!("📥 Fetching shipment record for id {}", id);
        let shipment = self.lookup.shipment(id).await?;
        let shipment_id = shipment
            .get("id")
            .and_then(value_text)
            .ok_or(DocError::MissingShipmentId)?;

        let branch_id = shipment.get("branch_id").and_then(value_text).or_else(|| {
            shipment
                .get("branch")
                .and_then(|b| b.get("id"))
                .and_then(value_text)
        });
        let sender_id = shipment.get("sender_id").and_then(value_text);
        let receiver_id = shipment.get("receiver_id").and_then(value_text);

        // 第二階段:三個查詢彼此獨立,併發執行,個別失敗各自回退
        let (branch, sender, receiver) = tokio::join!(
            self.resolve_branch(branch_id.as_deref(), &shipment),
            self.resolve_party("sender", sender_id.as_deref(), shipment.get("sender")),
            self.resolve_party(
                "receiver",
                receiver_id.as_deref(),
                shipment.get("receiver")
            ),
        );

        let containers = normalize::containers(shipment.get("boxes"));
        let totals = totals::compute(&shipment, &containers);

        let pieces = match lenient_i64(shipment.get("no_of_pieces"), 0) {
            n if n > 0 => n as usize,
            _ => containers.len(),
        };

        let booking_no = resolve_field(&shipment, &["booking_no", "invoice_no"], &shipment_id);
        let date = fmt::format_date(&resolve_field(&shipment, &["date"], ""));

        tracing::info!(
            "📥 Invoice data ready for shipment {} [boxes: {}]",
            shipment_id,
            containers.len()
        );

        Ok(InvoiceModel {
            shipment_id,
            booking_no,
            date,
            shipping_method: resolve_field(&shipment, &["shipping_method_name"], "SEA"),
            payment_method: resolve_field(&shipment, &["payment_method_name"], "Cash"),
            tracking_code: resolve_field(&shipment, &["lrl_tracking_code"], ""),
            pieces,
            sender,
            receiver,
            branch,
            containers,
            totals,
        })
    }

    async fn resolve_party(
        &self,
        role: &str,
        id: Option<&str>,
        embedded: Option<&Value>,
    ) -> PartyBlock {
        if let Some(id) = id {
            match self.lookup.party(id).await {
                Ok(record) => return party_block(&record),
                Err(e) => {
                    tracing::warn!(
                        "🔶 {} lookup failed for id {}: {}; using embedded data",
                        role,
                        id,
                        e
                    );
                }
            }
        }

        let embedded = embedded.cloned().unwrap_or(Value::Null);
        party_block(&Record::from_value(embedded))
    }

    async fn resolve_branch(&self, id: Option<&str>, shipment: &Record) -> BranchBlock {
        let fetched = match id {
            Some(id) => match self.lookup.branch(id).await {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("🔶 branch lookup failed for id {}: {}; using defaults", id, e);
                    None
                }
            },
            None => None,
        };

        branch_block(fetched.as_ref(), shipment)
    }
}

/// Normalizes a raw party record into the block the layout needs. Every
/// field goes through the candidate-field chains; a wholly absent party
/// yields an all-default block.
pub fn party_block(record: &Record) -> PartyBlock {
    PartyBlock {
        name: resolve_field(record, &["name"], ""),
        phone: resolve_field(
            record,
            &["phone", "contact_number", "mobile", "whatsapp_number"],
            "",
        ),
        address: resolve_field(record, &["address"], ""),
        post: resolve_field(record, &["post"], ""),
        pin: resolve_field(record, &["pin", "postal_code"], ""),
        city: resolve_field(record, &["city"], ""),
        district: resolve_field(record, &["district"], ""),
        state: resolve_field(record, &["state"], ""),
        country: resolve_field(record, &["country"], DEFAULT_COUNTRY),
        document_id: resolve_field(record, &["document_id"], ""),
    }
}

/// Branch block with deterministic fallbacks: fetched record first, then
/// whatever the shipment itself carries, then the engine defaults.
pub fn branch_block(branch: Option<&Record>, shipment: &Record) -> BranchBlock {
    let empty = Record::default();
    let branch = branch.unwrap_or(&empty);

    let name = match resolve_field(branch, &["branch_name"], "") {
        n if n.is_empty() => resolve_field(shipment, &["branch_name"], DEFAULT_BRANCH_NAME),
        n => n,
    };

    BranchBlock {
        name,
        name_localized: resolve_field(branch, &["branch_name_ar"], DEFAULT_BRANCH_NAME_AR),
        address: resolve_field(branch, &["branch_address"], DEFAULT_BRANCH_ADDRESS),
        contact: resolve_field(
            branch,
            &["branch_contact_number", "branch_alternative_number"],
            "",
        ),
        logo_url: branch.get("logo_url").and_then(value_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;

    /// Scripted lookup: records keyed by id, with per-collaborator failure
    /// switches to exercise the fallback paths.
    #[derive(Default)]
    struct MockLookup {
        shipments: HashMap<String, Value>,
        branches: HashMap<String, Value>,
        parties: HashMap<String, Value>,
        fail_parties: bool,
        fail_branches: bool,
    }

    impl MockLookup {
        fn fetch(map: &HashMap<String, Value>, id: &str, what: &str) -> crate::Result<Record> {
            map.get(id)
                .map(|v| Record::from_value(v.clone()))
                .ok_or_else(|| DocError::UpstreamError {
                    endpoint: format!("{}/{}", what, id),
                    status: 404,
                })
        }
    }

    #[async_trait]
    impl RecordLookup for MockLookup {
        async fn shipment(&self, id: &str) -> crate::Result<Record> {
            Self::fetch(&self.shipments, id, "cargo").map_err(|_| DocError::ShipmentNotFound {
                id: id.to_string(),
            })
        }

        async fn branch(&self, id: &str) -> crate::Result<Record> {
            if self.fail_branches {
                return Err(DocError::UpstreamError {
                    endpoint: format!("branch/{}", id),
                    status: 500,
                });
            }
            Self::fetch(&self.branches, id, "branch")
        }

        async fn party(&self, id: &str) -> crate::Result<Record> {
            if self.fail_parties {
                return Err(DocError::UpstreamError {
                    endpoint: format!("party/{}", id),
                    status: 500,
                });
            }
            Self::fetch(&self.parties, id, "party")
        }
    }

    fn shipment_fixture() -> Value {
        json!({
            "id": 91,
            "booking_no": "GC-2025-091",
            "date": "2025-03-08",
            "branch_id": 4,
            "sender_id": 11,
            "receiver_id": 12,
            "amount_packing_charge": 40,
            "vat_percentage": 15,
            "amount_discount": 6,
            "boxes": [
                {"weight": 2.0, "items": [{"name": "Clothes", "qty": 2, "weight": 1.0}]},
                {"weight": 3.5, "items": [{"name": "Dates", "qty": 1, "weight": 3.0}]}
            ],
            "sender": {"name": "Embedded Sender", "whatsapp_number": "0551112222"},
            "receiver": {"name": "Embedded Receiver"}
        })
    }

    #[tokio::test]
    async fn test_full_assembly_with_all_collaborators() {
        let mut lookup = MockLookup::default();
        lookup.shipments.insert("91".into(), shipment_fixture());
        lookup.branches.insert(
            "4".into(),
            json!({"branch_name": "RIYADH MAIN", "branch_contact_number": "0112223333"}),
        );
        lookup.parties.insert(
            "11".into(),
            json!({"name": "Anil Kumar", "mobile": "0501234567", "city": "Riyadh"}),
        );
        lookup.parties.insert(
            "12".into(),
            json!({"name": "Suresh", "postal_code": 695001, "state": "Kerala"}),
        );

        let invoice = Aggregator::new(lookup).assemble("91").await.unwrap();

        assert_eq!(invoice.shipment_id, "91");
        assert_eq!(invoice.booking_no, "GC-2025-091");
        assert_eq!(invoice.date, "08/03/2025");
        assert_eq!(invoice.branch.name, "RIYADH MAIN");
        assert_eq!(invoice.sender.name, "Anil Kumar");
        assert_eq!(invoice.sender.phone, "0501234567");
        assert_eq!(invoice.receiver.pin, "695001");
        assert_eq!(invoice.receiver.country, "India");
        assert_eq!(invoice.containers.len(), 2);
        assert_eq!(invoice.pieces, 2);
        assert_eq!(invoice.totals.subtotal, 40.0);
        assert_eq!(invoice.totals.net_total, 40.0);
        assert_eq!(invoice.totals.total_weight, 5.5);
    }

    #[tokio::test]
    async fn test_missing_shipment_is_fatal() {
        let lookup = MockLookup::default();
        let err = Aggregator::new(lookup).assemble("404").await.unwrap_err();
        assert!(matches!(err, DocError::ShipmentNotFound { .. }));
    }

    #[tokio::test]
    async fn test_shipment_without_id_is_fatal() {
        let mut lookup = MockLookup::default();
        lookup
            .shipments
            .insert("91".into(), json!({"booking_no": "GC-1"}));

        let err = Aggregator::new(lookup).assemble("91").await.unwrap_err();
        assert!(matches!(err, DocError::MissingShipmentId));
    }

    #[tokio::test]
    async fn test_party_failure_falls_back_to_embedded_record() {
        let mut lookup = MockLookup::default();
        lookup.shipments.insert("91".into(), shipment_fixture());
        lookup.fail_parties = true;
        lookup.fail_branches = true;

        let invoice = Aggregator::new(lookup).assemble("91").await.unwrap();

        assert_eq!(invoice.sender.name, "Embedded Sender");
        assert_eq!(invoice.sender.phone, "0551112222");
        assert_eq!(invoice.receiver.name, "Embedded Receiver");
        // Branch degrades all the way to the engine defaults.
        assert_eq!(invoice.branch.name, "GULF CARGO");
        assert_eq!(invoice.branch.address, "KINGDOM OF SAUDI ARABIA");
    }

    #[tokio::test]
    async fn test_no_related_ids_yields_default_blocks() {
        let mut lookup = MockLookup::default();
        lookup
            .shipments
            .insert("7".into(), json!({"id": 7, "boxes": []}));

        let invoice = Aggregator::new(lookup).assemble("7").await.unwrap();

        assert_eq!(invoice.sender, party_block(&Record::default()));
        assert_eq!(invoice.sender.country, "India");
        assert_eq!(invoice.branch.name, "GULF CARGO");
        assert_eq!(invoice.booking_no, "7");
        assert!(invoice.containers.is_empty());
    }
}
