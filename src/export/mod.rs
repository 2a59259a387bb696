//! JSON export of lookup results.
//!
//! Single lookups export the payload as returned by the API; batch runs export
//! an ordered object mapping each domain to its payload or error descriptor.

mod json;

pub use json::{
    batch_export_file_name, export_batch, export_single, single_export_file_name,
    write_json_export,
};
