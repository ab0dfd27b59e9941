use crate::adapters;
use crate::core::aggregator::Aggregator;
use crate::core::layout;
use crate::domain::model::{BoxSummaryRow, DocumentModel, TotalsDisplay};
use crate::domain::ports::{RecordLookup, Renderer};
use crate::utils::error::Result;
use crate::utils::fmt;

/// Runs one document generation end to end: aggregate, paginate, assemble,
/// then hand the finished document to the rendering collaborator.
pub struct DocumentEngine<L: RecordLookup, R: Renderer> {
    aggregator: Aggregator<L>,
    renderer: R,
}

impl<L: RecordLookup, R: Renderer> DocumentEngine<L, R> {
    pub fn new(lookup: L, renderer: R) -> Self {
        Self {
            aggregator: Aggregator::new(lookup),
            renderer,
        }
    }

    /// Assembles the document model without rendering it. Fails only when
    /// the shipment itself is unavailable; missing related data produces a
    /// document with default values instead.
    pub async fn build(&self, shipment_id: &str) -> Result<DocumentModel> {
        let invoice = self.aggregator.assemble(shipment_id).await?;

        let grid = layout::paginate(&invoice.containers);
        if grid.dropped_items > 0 {
            // 超出版面的列只能捨棄,至少留下紀錄
            tracing::warn!(
                "🔶 Shipment {}: {} item rows exceed the print grid and were dropped",
                invoice.shipment_id,
                grid.dropped_items
            );
        }

        let box_summary = invoice
            .containers
            .iter()
            .map(|c| BoxSummaryRow {
                label: format!("B{}", c.ordinal),
                shipment_id: invoice.shipment_id.clone(),
                weight: c.weight,
            })
            .collect();

        let totals_display = TotalsDisplay {
            subtotal: fmt::fmt_money(invoice.totals.subtotal),
            vat_amount: fmt::fmt_money(invoice.totals.vat_amount),
            discount: fmt::fmt_money(invoice.totals.discount),
            net_total: fmt::fmt_money(invoice.totals.net_total),
            total_weight: fmt::fmt_weight(invoice.totals.total_weight),
        };

        let tracking_image_url = adapters::tracking_qr_url(&invoice.shipment_id);

        Ok(DocumentModel {
            invoice,
            box_summary,
            left: grid.left,
            right: grid.right,
            totals_display,
            tracking_image_url,
        })
    }

    pub async fn generate(&self, shipment_id: &str) -> Result<String> {
        tracing::info!("📄 Starting document generation for shipment {}", shipment_id);

        let document = self.build(shipment_id).await?;
        let artifact = self.renderer.render(&document).await?;

        tracing::info!("💾 Document rendered to {}", artifact);
        Ok(artifact)
    }
}
