//! Client-side preconditions, checked before any request is sent.

use crate::{Error, ErrorContext, Result};

/// A strict batch must hold between one and `max_batch_size` texts.
pub(crate) fn validate_batch_size(len: usize, max_batch_size: usize) -> Result<()> {
    if len > max_batch_size {
        return Err(Error::validation_with_context(
            format!(
                "Batch of {} texts exceeds the maximum batch size of {}",
                len, max_batch_size
            ),
            ErrorContext::new()
                .with_field_path("texts")
                .with_details(format!("max_batch_size = {}", max_batch_size))
                .with_source("batch_validator"),
        ));
    }
    if len == 0 {
        return Err(Error::validation_with_context(
            "Batch must contain at least one text",
            ErrorContext::new()
                .with_field_path("texts")
                .with_source("batch_validator"),
        ));
    }
    Ok(())
}
