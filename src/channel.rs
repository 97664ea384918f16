//! The `p x p` matrix of one-way byte channels that underlies the whole group.
//!
//! Cell `(s, d)` is a pipe whose write end belongs to rank `s` and whose read end
//! belongs to rank `d`; diagonal cells never get a pipe since self-messages are
//! routed in-memory by the collectives. The whole matrix is built once, before any
//! `fork`, so every rank inherits identical endpoint handles (§4.1 of the spec).

use std::fs::File;
use std::io::{self, BufReader};

struct Cell {
    read: Option<BufReader<File>>,
    write: Option<File>,
}

/// Owns every directed channel between ranks in a group.
pub(crate) struct ChannelMatrix {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl ChannelMatrix {
    /// Allocates a fresh `p x p` grid of pipes. Must be called before forking.
    pub(crate) fn allocate(size: usize) -> nix::Result<Self> {
        let mut cells = Vec::with_capacity(size);
        for s in 0..size {
            let mut row = Vec::with_capacity(size);
            for d in 0..size {
                if s == d {
                    row.push(Cell { read: None, write: None });
                    continue;
                }
                let (read_end, write_end) = nix::unistd::pipe()?;
                row.push(Cell {
                    read: Some(BufReader::new(File::from(read_end))),
                    write: Some(File::from(write_end)),
                });
            }
            cells.push(row);
        }
        Ok(ChannelMatrix { size, cells })
    }

    /// Drops every endpoint this `rank` has no business holding: the write half of
    /// cells it doesn't source, and the read half of cells it doesn't sink. This is
    /// the optional hygiene pass from §4.1 — correctness does not depend on it, but
    /// it keeps each process's descriptor table from growing with the square of the
    /// group size.
    pub(crate) fn close_unused(&mut self, rank: usize) {
        for s in 0..self.size {
            for d in 0..self.size {
                if s == d {
                    continue;
                }
                let cell = &mut self.cells[s][d];
                if s != rank {
                    cell.write = None;
                }
                if d != rank {
                    cell.read = None;
                }
            }
        }
    }

    pub(crate) fn writer(&mut self, s: usize, d: usize) -> io::Result<&mut File> {
        self.cells[s][d]
            .write
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, format!("no write endpoint for cell ({s}, {d}) on this rank")))
    }

    pub(crate) fn reader(&mut self, s: usize, d: usize) -> io::Result<&mut BufReader<File>> {
        self.cells[s][d]
            .read
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, format!("no read endpoint for cell ({s}, {d}) on this rank")))
    }
}
