//! Memory Vault rules
//!
//! The vault PIN is a UI gate only: memory content is stored in clear.

use crate::error::{Result, TaraError};
use std::path::Path;

pub const PIN_LENGTH: usize = 4;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// A PIN is exactly four ASCII digits. Checked before any hashing happens.
pub fn validate_pin(pin: &str) -> Result<()> {
    if pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(TaraError::InvalidPin)
    }
}

/// Whether a file looks like an image the vault accepts
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}
