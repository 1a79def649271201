pub mod color;
pub mod consts;
pub mod error;
pub mod filters;
pub mod frame;
pub mod histogram;
pub mod io;
pub mod mapping;
pub mod pipeline;
pub mod remap;
