use placenames_core::loader::load_features_from_path;
use placenames_core::Feature;
use std::path::PathBuf;

pub fn sample_features() -> Vec<Feature> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("placenames_sample.json");
    load_features_from_path(path).expect("fixture loads")
}

#[allow(dead_code)]
pub fn names<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Vec<&'a str> {
    features.into_iter().map(Feature::name).collect()
}
