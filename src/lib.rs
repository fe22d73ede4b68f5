pub mod algorithm;
pub mod analysis;
pub mod arboricity;
pub mod errors;
pub mod graph;
pub mod io;
pub mod log;
pub mod utils;

pub mod prelude {
    pub use super::analysis::*;
    pub use super::arboricity::*;
    pub use super::errors::*;
    pub use super::graph::*;
    pub use super::io::*;
}

#[cfg(test)]
mod testing;
