//! Coordinate reference system transformations.
//!
//! Implements map projections from scratch without external dependencies.
//! A [`Projection`] is parsed from a proj-string or an `EPSG:` code and
//! transforms geographic coordinates (degrees) into projected metres.

pub mod error;
pub mod geographic;
pub mod lambert;
pub mod mercator;
pub mod proj_string;
pub mod transform;
pub mod transverse_mercator;

pub use error::{ProjectionError, ProjectionResult};
pub use geographic::Ellipsoid;
pub use lambert::LambertConformal;
pub use mercator::Mercator;
pub use proj_string::ProjParams;
pub use transform::Projection;
pub use transverse_mercator::TransverseMercator;
