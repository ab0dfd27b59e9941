use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw upstream record as returned by the record service. Field names and
/// value shapes vary between deployments, so everything stays dynamic until
/// the resolver/normalizer turn it into the canonical structures below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn from_map(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            data: map.into_iter().collect(),
        }
    }

    /// Non-object values degrade to an empty record.
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }
}

/// A single named good inside a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub qty: i64,
    pub weight: f64,
}

/// A physical shipping unit. Carries its own weight independent of the
/// weights of the items inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub ordinal: usize,
    pub weight: f64,
    pub items: Vec<Item>,
}

/// One printable row of the paginated item grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutRow {
    Header { title: String },
    Item { serial: usize, name: String, qty: i64, weight: f64 },
    Filler,
}

impl LayoutRow {
    pub fn is_item(&self) -> bool {
        matches!(self, LayoutRow::Item { .. })
    }

    pub fn is_header(&self) -> bool {
        matches!(self, LayoutRow::Header { .. })
    }
}

/// One of the two fixed-capacity vertical sections of the printed grid.
/// Header and filler rows occupy slots but do not count against the item
/// capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub rows: Vec<LayoutRow>,
    pub item_capacity: usize,
}

impl Column {
    pub fn new(item_capacity: usize) -> Self {
        Self {
            rows: Vec::new(),
            item_capacity,
        }
    }

    pub fn item_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_item()).count()
    }

    pub fn filler_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, LayoutRow::Filler))
            .count()
    }
}

/// Sender or receiver block with every field the print layout needs,
/// already resolved through the candidate-field chains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyBlock {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub post: String,
    pub pin: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub country: String,
    pub document_id: String,
}

/// Issuing branch block. Every field has a deterministic fallback so a
/// missing branch record never blocks document generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchBlock {
    pub name: String,
    pub name_localized: String,
    pub address: String,
    pub contact: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: f64,
    pub vat_amount: f64,
    pub discount: f64,
    pub net_total: f64,
    pub total_weight: f64,
}

/// Display-ready renditions of the totals block: money with two decimals
/// and thousands separators, weight with three decimals, as printed on the
/// physical invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub vat_amount: String,
    pub discount: String,
    pub net_total: String,
    pub total_weight: String,
}

/// One row of the box-weight summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummaryRow {
    pub label: String,
    pub shipment_id: String,
    pub weight: f64,
}

/// Fully aggregated, normalized, pre-pagination representation of one
/// shipment's printable data. Assembled once per invocation; read-only
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceModel {
    pub shipment_id: String,
    pub booking_no: String,
    pub date: String,
    pub shipping_method: String,
    pub payment_method: String,
    pub tracking_code: String,
    pub pieces: usize,
    pub sender: PartyBlock,
    pub receiver: PartyBlock,
    pub branch: BranchBlock,
    pub containers: Vec<Container>,
    pub totals: Totals,
}

/// Final paginated structure handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentModel {
    pub invoice: InvoiceModel,
    pub box_summary: Vec<BoxSummaryRow>,
    pub left: Column,
    pub right: Column,
    pub totals_display: TotalsDisplay,
    pub tracking_image_url: String,
}
