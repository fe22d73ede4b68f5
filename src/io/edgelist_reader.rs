use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::graph::{Edge, GraphFromEdges, NodeMapper, NumNodes};

type Result<T> = std::io::Result<T>;

pub trait GraphEdgeListReader: Sized {
    /// Reads a whitespace separated edge list with arbitrary integer ids. Returns the graph
    /// on contiguous ids (assigned in order of first appearance) and the mapper translating
    /// them back into the ids of the input.
    fn try_read_edgelist<R: BufRead>(reader: R) -> Result<(Self, NodeMapper)>;
    fn try_read_edgelist_file<P: AsRef<Path>>(path: P) -> Result<(Self, NodeMapper)>;
}

impl<G> GraphEdgeListReader for G
where
    G: GraphFromEdges,
{
    fn try_read_edgelist<R: BufRead>(reader: R) -> Result<(Self, NodeMapper)> {
        let mut edgelist_reader = EdgeListReader::new(reader);
        let edges: Vec<Edge> = edgelist_reader.by_ref().collect::<Result<_>>()?;
        let mapper = edgelist_reader.into_mapper();

        let graph = Self::from_edges(mapper.len() as NumNodes, edges);
        Ok((graph, mapper))
    }

    fn try_read_edgelist_file<P: AsRef<Path>>(path: P) -> Result<(Self, NodeMapper)> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_edgelist(buf_reader)
    }
}

/// Iterates over the edges of a SNAP/KONECT style edge list. Lines starting with `#` or `%`
/// and blank lines are skipped; each other line starts with two node ids, further columns
/// (e.g. weights or timestamps) are ignored.
pub struct EdgeListReader<R> {
    lines: Lines<R>,
    line_number: usize,
    mapper: NodeMapper,
}

impl<R: BufRead> EdgeListReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            mapper: NodeMapper::default(),
        }
    }

    /// Mapping between the contiguous ids of the returned edges and the ids of the input
    pub fn into_mapper(self) -> NodeMapper {
        self.mapper
    }
}

impl<R: BufRead> Iterator for EdgeListReader<R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr, $line : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Line {}: premature end of line when parsing {}.", $line, $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Line {}: invalid value found. Cannot parse {}.", $line, $name)
        );

        parsed.unwrap()
    }};
}

impl<R: BufRead> EdgeListReader<R> {
    fn next_data_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            self.line_number += 1;
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) => {
                    let trimmed = line.trim_start();
                    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%')
                    {
                        continue;
                    }
                    return Ok(Some(line));
                }
            }
        }
    }

    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_data_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();
        let from: u64 = parse_next_value!(parts, "source node", self.line_number);
        let dest: u64 = parse_next_value!(parts, "target node", self.line_number);

        raise_error_unless!(
            self.mapper.len() + 2 <= NumNodes::MAX as usize,
            ErrorKind::InvalidData,
            format!("Line {}: too many distinct nodes", self.line_number)
        );

        let u = self.mapper.get_or_insert(from);
        let v = self.mapper.get_or_insert(dest);
        Ok(Some(Edge(u, v)))
    }
}
