pub mod channel;
pub mod colormap;
pub mod consts;
pub mod correlation;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod stats;
pub mod threshold;
