pub mod edgelist_reader;
pub use edgelist_reader::*;
pub mod edgelist_writer;
pub use edgelist_writer::EdgelistWriter;

pub mod report_writer;
pub use report_writer::*;
