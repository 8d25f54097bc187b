// Persistence for the user profile and the analysis history log.

mod history;
mod profile_store;

use std::path::PathBuf;

use crate::errors::StylistError;

pub use history::{HistoryEntry, HistoryLog};
pub use profile_store::{FileProfileStore, ProfileStore};

/// Default directory for stored data: `<data dir>/stylist`.
pub fn default_data_dir() -> Result<PathBuf, StylistError> {
    let app_data_dir = dirs::data_dir().ok_or(StylistError::NoDataDir)?;
    Ok(app_data_dir.join("stylist"))
}
