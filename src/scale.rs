pub(crate) mod band;
pub(crate) mod color;
pub(crate) mod linear;
pub(crate) mod size;
