//! Fixed-size vector algebra for computational geometry
//!
//! ```rust
//! use scale_geom::{cross_product_3d, dot_product, Vector3f};
//!
//! let v1 = Vector3f::xyz(1.0, 0.0, 0.0);
//! let v2 = Vector3f::xyz(0.0, 1.0, 0.0);
//!
//! assert_eq!(cross_product_3d(v1, v2), Vector3f::xyz(0.0, 0.0, 1.0));
//! assert_eq!(dot_product(&v1, &v2), 0.0);
//! assert_eq!(format!("{}", v1 + v2), "(1, 1, 0)");
//! ```

pub mod errors;
pub mod log;
pub mod maths;
pub mod tolerance;

pub use errors::{Result, VectorError};
pub use maths::products::{cross_product_2d, cross_product_3d, dot_product, scalar_triple_product};
pub use maths::vector::{Coordinate, Vector, Vector2f, Vector3f, DIM2, DIM3, X, Y, Z};
pub use tolerance::{is_equal, TOLERANCE};
