//! Extractor configuration converting decode failures into domain errors.
//!
//! Register both configs as app data so malformed JSON bodies and
//! unparseable path parameters answer with the shared error schema and a 422
//! status instead of actix's plain-text 400.

use actix_web::web;
use tracing::debug;

use super::validation::{invalid_body_error, invalid_path_error};

/// JSON body extractor config mapping every payload error to `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected request body");
        invalid_body_error(&err.to_string()).into()
    })
}

/// Path extractor config mapping parse failures to `invalid_request`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected path parameter");
        invalid_path_error(&err.to_string()).into()
    })
}
