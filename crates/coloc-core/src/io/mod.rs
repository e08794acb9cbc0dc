pub mod batch;
pub mod image_io;
pub mod output;
pub mod samples;
