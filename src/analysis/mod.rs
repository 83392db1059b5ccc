//! Analysis pipeline: enrich -> filter -> aggregate
//!
//! Every step is a pure function over its explicit inputs. The pipeline is
//! invoked on demand (per UI parameter change); there is no hidden
//! recomputation graph and no shared mutable state.

pub mod classify;
pub mod enrich;
pub mod filter;
pub mod summary;

pub use classify::{classify, classify_with};
pub use enrich::{enrich_record, enrich_records};
pub use filter::{filter_records, FilterCriteria};
pub use summary::{summarize, StatusBreakdown, SummaryReport};
