use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::graph::*;

/// Writes graphs in the format read by [`super::GraphEdgeListReader`]: a `#` header with
/// the graph size followed by one `u v` line per undirected edge.
pub trait EdgelistWriter {
    fn try_write_edgelist<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    /// Same as [`EdgelistWriter::try_write_edgelist`] but translates each node into its
    /// external id using `mapper`
    fn try_write_edgelist_with_mapper<W: Write>(
        &self,
        writer: W,
        mapper: &NodeMapper,
    ) -> Result<(), std::io::Error>;

    fn try_write_edgelist_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl<T> EdgelistWriter for T
where
    T: AdjacencyList,
{
    fn try_write_edgelist<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "# Nodes: {} Edges: {}",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for Edge(u, v) in self.edges() {
            writeln!(writer, "{u} {v}")?;
        }

        Ok(())
    }

    fn try_write_edgelist_with_mapper<W: Write>(
        &self,
        mut writer: W,
        mapper: &NodeMapper,
    ) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "# Nodes: {} Edges: {}",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for Edge(u, v) in self.edges() {
            writeln!(writer, "{} {}", mapper.old_id_of(u), mapper.old_id_of(v))?;
        }

        Ok(())
    }

    fn try_write_edgelist_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edgelist(&mut writer)?;
        writer.flush()
    }
}
