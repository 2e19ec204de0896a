//! placenames-cli
//! ==============
//!
//! Terminal explorer for the ACT Government place names dataset, built on
//! [`placenames-core`].
//!
//! Everything lives in the `placenames` binary; this library target only
//! carries the overview below.
//!
//! ```text
//! placenames --help
//! placenames search cook
//! placenames search --category Street --sort name mawson
//! placenames search --scope biography explorer
//! placenames show 1234 --summary
//! placenames --input captured.json.gz stats
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
