// crates/placenames-core/src/loader.rs
//! # Feature Loader
//!
//! Reads features from a captured layer query response on disk. Accepts
//! either the full response object (`{"features": [...], ...}`) or a bare
//! array of features. Files ending in `.gz` are decompressed when the
//! `compact` feature is enabled.

use crate::error::{PlaceNamesError, Result};
use crate::model::Feature;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum FeaturePayload {
    Response { features: Vec<Feature> },
    Bare(Vec<Feature>),
}

/// Load every feature stored in `path`.
pub fn load_features_from_path(path: impl AsRef<Path>) -> Result<Vec<Feature>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let features = load_features_from_reader(reader)?;
    tracing::debug!(path = %path.display(), count = features.len(), "loaded features");
    Ok(features)
}

/// Parse features from any JSON reader.
pub fn load_features_from_reader<R: Read>(reader: R) -> Result<Vec<Feature>> {
    let payload: FeaturePayload = serde_json::from_reader(reader)?;
    Ok(match payload {
        FeaturePayload::Response { features } => features,
        FeaturePayload::Bare(features) => features,
    })
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `.gz` paths.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PlaceNamesError::NotFound(format!("Feature file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(PlaceNamesError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
