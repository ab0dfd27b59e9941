use crate::core::resolver::lenient_f64;
use crate::domain::model::{Container, Record, Totals};

/// Charge kinds collected by the shipment wizard. Each contributes an
/// `amount_<kind>` field (newer entry style) or a `quantity_<kind>` times
/// `rate_<kind>` product (older entry style).
pub const CHARGE_KINDS: [&str; 5] = [
    "packing_charge",
    "insurance",
    "duty",
    "awb_fee",
    "other_charges",
];

/// Derives the invoice totals block from the shipment's charge fields and
/// the normalized containers. Total weight is the sum of container weights;
/// item-level weights are informational and deliberately excluded.
/// Rounding to two decimals happens here, once, so recomputation from the
/// same inputs is bit-identical.
pub fn compute(shipment: &Record, containers: &[Container]) -> Totals {
    let subtotal: f64 = CHARGE_KINDS
        .iter()
        .map(|kind| charge_amount(shipment, kind))
        .sum();

    let vat_pct = lenient_f64(shipment.get("vat_percentage"));
    let vat_amount = subtotal * vat_pct / 100.0;
    let discount = lenient_f64(shipment.get("amount_discount"));
    let net_total = subtotal + vat_amount - discount;

    let total_weight: f64 = containers.iter().map(|c| c.weight).sum();

    Totals {
        subtotal: round2(subtotal),
        vat_amount: round2(vat_amount),
        discount: round2(discount),
        net_total: round2(net_total),
        total_weight: round2(total_weight),
    }
}

fn charge_amount(shipment: &Record, kind: &str) -> f64 {
    if let Some(amount) = shipment.get(&format!("amount_{}", kind)) {
        if !amount.is_null() {
            return lenient_f64(Some(amount));
        }
    }

    let qty = lenient_f64(shipment.get(&format!("quantity_{}", kind)));
    let rate = lenient_f64(shipment.get(&format!("rate_{}", kind)));
    qty * rate
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
