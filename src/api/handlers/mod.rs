//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod bills;
pub mod meta;
pub mod presidential;
pub mod records;
pub mod summaries;
pub mod text;

pub use bills::{bill_detail_handler, bill_numbers_handler, bills_handler, filtered_bills_handler};
pub use meta::{apps_handler, root_handler, widgets_handler};
pub use presidential::{
    document_pdfs_handler, presidential_documents_handler, view_document_handler,
};
pub use records::{daily_records_handler, record_issue_handler};
pub use summaries::{batch_summaries_handler, bill_summary_handler};
pub use text::{bill_html_handler, text_versions_handler};
