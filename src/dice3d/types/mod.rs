//! Type definitions for the dice renderer.
//!
//! - `dice` - roll results, the `RollFrame` engine seam, die components
//! - `style` - appearance settings and their file loading

pub mod dice;
pub mod style;

pub use dice::*;
pub use style::*;
