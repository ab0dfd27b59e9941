pub mod aggregator;
pub mod engine;
pub mod layout;
pub mod normalize;
pub mod resolver;
pub mod totals;

pub use crate::domain::model::{Column, Container, DocumentModel, InvoiceModel, Item, LayoutRow};
pub use crate::domain::ports::{ConfigProvider, RecordLookup, Renderer};
pub use crate::utils::error::Result;
