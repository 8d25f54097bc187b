// Error types for stylist

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum StylistError {
    // Profile construction errors
    #[snafu(display(
        "At least {required} photo observations are required to build a profile, got {provided}"
    ))]
    InsufficientInput { required: usize, provided: usize },

    // Profile storage errors
    #[snafu(display("No profile found at {path}"))]
    ProfileNotFound { path: String },
    #[snafu(display("A profile already exists at {path}, refresh it to overwrite"))]
    ProfileAlreadyExists { path: String },
    #[snafu(display("Profile file at {path} is corrupted"))]
    CorruptedProfile {
        path: String,
        source: serde_json::Error,
    },
    #[snafu(display("Error reading or writing stored data"))]
    StorageIOError { source: io::Error },
    #[snafu(display("Error serializing stored data"))]
    SerializeError { source: serde_json::Error },
    #[snafu(display("Could not find application data directory"))]
    NoDataDir,

    // History log errors
    #[snafu(display("Error accessing history log"))]
    HistoryIOError { source: io::Error },

    // Config management errors
    #[snafu(display("Could not find application config directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // Enrichment collaborator errors, always recovered by the advisor
    #[snafu(display("Enrichment failed: {reason}"))]
    EnrichmentFailed { reason: String },
    #[snafu(display("Enrichment response is not valid JSON"))]
    MalformedEnrichment { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },
    #[snafu(display("Could not read input file {path}"))]
    InputFileError { path: String, source: io::Error },
    #[snafu(display("Input file {path} does not match the expected format"))]
    InputFormatError {
        path: String,
        source: serde_json::Error,
    },
}
