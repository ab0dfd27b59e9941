pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{HttpRecordLookup, JsonRenderer};
pub use crate::config::CliConfig;
pub use crate::core::aggregator::Aggregator;
pub use crate::core::engine::DocumentEngine;
pub use crate::domain::model::{
    Column, Container, DocumentModel, InvoiceModel, Item, LayoutRow, Record,
};
pub use crate::utils::error::{DocError, Result};
