//! Collective operations layered on raw point-to-point (§4.6).
//!
//! Every collective here is single-program-multiple-data: every rank in the group
//! must call the same function with arguments that agree across ranks. They all
//! use the `raw_*` point-to-point primitives, bypassing the topology predicate,
//! because their traffic patterns are fixed and known not to need it.

use crate::codec::Payload;
use crate::error::Error;
use crate::group::Group;

impl Group {
    /// One-to-all broadcast: every rank ends up with the value `source` held.
    pub fn broadcast<T: Payload + Clone>(&mut self, source: usize, v: T) -> Result<T, Error> {
        if self.rank() == source {
            for dst in 0..self.size() {
                if dst != self.rank() {
                    self.raw_send(dst, &v)?;
                }
            }
            Ok(v)
        } else {
            self.raw_recv(source)
        }
    }

    /// All-to-one collect: at `destination`, the result's position `r` holds rank
    /// `r`'s value; every other rank gets an empty vector.
    pub fn collect<T: Payload + Clone>(&mut self, destination: usize, v: T) -> Result<Vec<T>, Error> {
        if self.rank() != destination {
            self.raw_send(destination, &v)?;
            return Ok(Vec::new());
        }
        let mut result = Vec::with_capacity(self.size());
        for r in 0..self.size() {
            if r == self.rank() {
                result.push(v.clone());
            } else {
                result.push(self.raw_recv(r)?);
            }
        }
        Ok(result)
    }

    /// All-to-all broadcast: every rank ends up with the same length-`size()`
    /// rank-ordered vector. Implemented as `collect(0, v)` followed by rank 0
    /// forwarding the gathered vector to everyone.
    pub fn all_broadcast<T: Payload + Clone>(&mut self, v: T) -> Result<Vec<T>, Error> {
        let gathered = self.collect(0, v)?;
        if self.rank() == 0 {
            for dst in 1..self.size() {
                for item in &gathered {
                    self.raw_send(dst, item)?;
                }
            }
            Ok(gathered)
        } else {
            let mut result = Vec::with_capacity(self.size());
            for _ in 0..self.size() {
                result.push(self.raw_recv(0)?);
            }
            Ok(result)
        }
    }

    /// One-to-all scatter of an integer sequence. `source` partitions `data` into
    /// `size()` contiguous chunks of `h = ceil(n / size())` elements each, the last
    /// chunk taking whatever remains (possibly shorter, possibly empty). Every rank,
    /// including `source`, returns its own chunk.
    ///
    /// `data` must be `Some` on `source` and is ignored elsewhere.
    pub fn scatter(&mut self, source: usize, data: Option<Vec<i64>>) -> Result<Vec<i64>, Error> {
        if self.rank() != source {
            return self.raw_recv(source);
        }

        let data = data.expect("scatter: the source rank must supply data");
        let p = self.size();
        let n = data.len();
        let h = (n + p - 1) / p;

        let mut mine = Vec::new();
        for r in 0..p {
            let start = r * h;
            let chunk = if r == p - 1 {
                if start >= n { Vec::new() } else { data[start..].to_vec() }
            } else if start >= n {
                Vec::new()
            } else {
                data[start..(start + h).min(n)].to_vec()
            };

            if r == self.rank() {
                mine = chunk;
            } else {
                self.raw_send(r, &chunk)?;
            }
        }
        Ok(mine)
    }

    /// All-to-one reduce: every rank sends `v` to `destination`, which folds them
    /// left-to-right in ascending rank order under `op`, starting from rank 0's
    /// value. `op` must be associative and, since the fold reorders by rank,
    /// commutative.
    ///
    /// The destination never sends to itself — its local value is spliced directly
    /// into the fold at its own position (§4.6, §9). Non-destination ranks get back
    /// a value that must not be interpreted; this implementation returns their own
    /// `v` unchanged as that placeholder.
    pub fn reduce<T, F>(&mut self, destination: usize, v: T, op: F) -> Result<T, Error>
    where
        T: Payload + Clone,
        F: Fn(T, T) -> T,
    {
        if self.rank() != destination {
            self.raw_send(destination, &v)?;
            return Ok(v);
        }

        let mut acc: Option<T> = None;
        for r in 0..self.size() {
            let val = if r == self.rank() { v.clone() } else { self.raw_recv(r)? };
            acc = Some(match acc {
                None => val,
                Some(a) => op(a, val),
            });
        }
        Ok(acc.expect("group size is always at least 1"))
    }

    /// All-reduce: every rank ends with the same result, equal to the left fold by
    /// rank of all contributed values under `op`. Defined as `broadcast(0,
    /// reduce(0, v, op))`.
    pub fn all_reduce<T, F>(&mut self, v: T, op: F) -> Result<T, Error>
    where
        T: Payload + Clone,
        F: Fn(T, T) -> T,
    {
        let reduced = self.reduce(0, v, op)?;
        self.broadcast(0, reduced)
    }

    /// Blocks every rank until every rank has entered. Defined as `all_broadcast(0)`
    /// on a throwaway integer payload; the return is a synchronization point, not a
    /// value.
    pub fn barrier(&mut self) -> Result<(), Error> {
        self.all_broadcast(0i64)?;
        Ok(())
    }
}
