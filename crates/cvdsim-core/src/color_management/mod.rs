//! Color management: the sRGB codec and linear-RGB matrix primitives.

pub mod color_space;
pub mod transfer;

pub use color_space::ColorMatrix;
pub use transfer::{SrgbTransfer, TransferFunction, linear_to_srgb_u8, srgb_u8_to_linear};
