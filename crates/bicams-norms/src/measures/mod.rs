//! Built-in Brazilian normative data, one module per measure.

pub mod bvmt;
pub mod cvlt;
pub mod sdmt;
