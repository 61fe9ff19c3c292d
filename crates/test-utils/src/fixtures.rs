//! Common test fixtures for glacier visualization tests.
//!
//! The standard fixture is a small glacier whose extents are easy to reason
//! about: x in [0, 10], y in [0, 20], bedrock in [100, 200].

use crate::generators::{coordinate_axis, create_bedrock_grid, create_outline_mask};
use std::path::PathBuf;
use viz_common::{Dataset, VisualizationContext};

/// Common CRS descriptors for testing.
pub mod srs {
    /// Local transverse Mercator centered on the Hintereisferner (Alps)
    pub const TMERC_ALPS: &str =
        "+proj=tmerc +lat_0=0 +lon_0=10.75 +k=0.9996 +x_0=0 +y_0=0 +datum=WGS84 +units=m +no_defs";

    /// UTM zone 32 north
    pub const UTM_32N: &str = "EPSG:32632";

    /// Geographic lat/lon
    pub const WGS84: &str = "EPSG:4326";

    /// Not a projection at all
    pub const INVALID: &str = "not-a-projection";
}

/// Grid size of the standard fixture.
pub const GLACIER_COLS: usize = 5;
pub const GLACIER_ROWS: usize = 6;

/// Name of the outline mask in the standard fixture.
pub const OUTLINE_FIELD: &str = "glacier_ext";

/// Dataset with `x`, `y`, `topo_bedrock` and a `glacier_ext` mask covering
/// rows 1..4 and columns 1..3.
pub fn glacier_dataset(srs: &str) -> Dataset {
    Dataset::new(srs)
        .with_field("x", coordinate_axis(0.0, 10.0, GLACIER_COLS))
        .with_field("y", coordinate_axis(0.0, 20.0, GLACIER_ROWS))
        .with_field(
            "topo_bedrock",
            create_bedrock_grid(GLACIER_ROWS, GLACIER_COLS, 100.0, 200.0),
        )
        .with_field(
            OUTLINE_FIELD,
            create_outline_mask(GLACIER_ROWS, GLACIER_COLS, 1..4, 1..3),
        )
}

/// Context built from [`glacier_dataset`] in the Alps transverse Mercator.
pub fn glacier_context() -> VisualizationContext {
    glacier_context_with_srs(srs::TMERC_ALPS)
}

pub fn glacier_context_with_srs(srs: &str) -> VisualizationContext {
    VisualizationContext::new(glacier_dataset(srs)).expect("fixture dataset is consistent")
}

/// Temporary directory for file outputs, removed on drop.
pub fn temp_output_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write temp file");
    path
}
