//! Two-level (sum-of-products) Boolean logic minimization over BLIF
//! `.names` gate ON-sets, implementing the star/sharp/branching method of
//! Brown & Vranesic §4.10.2.
//!
//! The data flow is `BLIF text → Model (of Gates) → optimize(Gate::cover)
//! → optimized Cover → BLIF text`. The optimizer (`bit`, `cube`, `algebra`,
//! `cover`, `primes`, `essential`, `optimize`) is pure and synchronous: no
//! I/O, no shared mutable state. `blif` and `model` are the surrounding
//! I/O and container layer.
//!
//! ```
//! use sop_minimizer::{Cover, Cube, Bit, optimize};
//!
//! let a: Vec<Bit> = "010".chars().map(|c| Bit::from_char(c).unwrap()).collect();
//! let b: Vec<Bit> = "110".chars().map(|c| Bit::from_char(c).unwrap()).collect();
//! let c: Vec<Bit> = "111".chars().map(|c| Bit::from_char(c).unwrap()).collect();
//! let cover = Cover::from_cubes([
//!     Cube::new(&a, Bit::On),
//!     Cube::new(&b, Bit::On),
//!     Cube::new(&c, Bit::On),
//! ]);
//! let minimized = optimize(&cover);
//! assert_eq!(minimized.len(), 2);
//! assert!(minimized.is_equivalent(&cover));
//! ```

pub mod algebra;
pub mod bit;
pub mod blif;
pub mod cover;
pub mod cube;
pub mod essential;
pub mod error;
pub mod model;
pub mod optimize;
pub mod primes;

pub use algebra::{sharp, star};
pub use bit::Bit;
pub use blif::{parse_blif_file, parse_blif_str, to_blif_file, to_blif_string};
pub use cover::Cover;
pub use cube::Cube;
pub use error::{AlgebraError, BlifError, CubeError, Error};
pub use essential::essential_primes;
pub use model::{Gate, Model};
pub use optimize::optimize;
pub use primes::prime_implicants;
