//! The virtual topology: a pure predicate restricting which direct sends are legal.
//!
//! `send`/`recv` consult the active [`Topology`] before touching a channel; the
//! collectives bypass it entirely (§4.6 of the spec) because their own traffic
//! patterns are already known to be safe.

/// One of the fixed topology predicates a group can be built with.
///
/// `Bus` and `Switch` are defined identically in the original design — the
/// distinction there was documentary only — so both are kept as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Every rank may reach every other rank directly.
    Bus,
    /// Alias of [`Topology::Bus`].
    Switch,
    /// A 1-D line with open ends: `i` and `j` are adjacent iff `|i - j| == 1`.
    Mesh1,
    /// A 1-D ring: `i` and `j` are adjacent iff they differ by 1 modulo the group size.
    Torus1,
    /// A `q x q` grid (no wraparound), `q = floor(sqrt(p) + 0.1)`.
    Mesh2,
    /// [`Topology::Mesh2`] with wraparound on both axes.
    Torus2,
    /// A 0-rooted binary tree: `i` is `j`'s parent iff `i == floor((j - 1) / 2)`.
    Tree,
}

impl Topology {
    /// Does this topology permit a direct send from rank `i` to rank `j` in a group
    /// of size `p`?
    ///
    /// Pure: the same arguments always yield the same answer.
    pub fn allows(self, i: usize, j: usize, p: usize) -> bool {
        match self {
            Topology::Bus | Topology::Switch => true,
            Topology::Mesh1 => mesh1(i, j),
            Topology::Torus1 => torus1(i, j, p),
            Topology::Mesh2 => mesh2(i, j, p),
            Topology::Torus2 => torus2(i, j, p),
            Topology::Tree => tree(i, j),
        }
    }
}

fn mesh1(i: usize, j: usize) -> bool {
    // Historically spelled `(i - j)^2 == 1`; that is just `|i - j| == 1`.
    (i as i64 - j as i64).unsigned_abs() == 1
}

fn torus1(i: usize, j: usize, p: usize) -> bool {
    let p = p as i64;
    (i as i64 - j as i64).rem_euclid(p) == 1 || (j as i64 - i as i64).rem_euclid(p) == 1
}

/// `floor(sqrt(p) + 0.1)`, the grid side length used by `Mesh2`/`Torus2`.
fn grid_side(p: usize) -> i64 {
    ((p as f64).sqrt() + 0.1) as i64
}

fn mesh2(i: usize, j: usize, p: usize) -> bool {
    let q = grid_side(p);
    if q == 0 {
        return false;
    }
    let (i, j) = (i as i64, j as i64);
    let a = (i % q - j % q).unsigned_abs();
    let b = (i / q - j / q).unsigned_abs();
    (a == 1 && b == 0) || (a == 0 && b == 1)
}

fn torus2(i: usize, j: usize, p: usize) -> bool {
    let q = grid_side(p);
    if q == 0 {
        return false;
    }
    let (i, j) = (i as i64, j as i64);
    let a = (i % q - j % q).rem_euclid(q);
    let b = (i / q - j / q).rem_euclid(q);
    let c = (j % q - i % q).rem_euclid(q);
    let d = (j / q - i / q).rem_euclid(q);
    ((a == 0 && b == 1) || (a == 1 && b == 0)) || ((c == 0 && d == 1) || (c == 1 && d == 0))
}

fn tree(i: usize, j: usize) -> bool {
    let (i, j) = (i as i64, j as i64);
    i == (j - 1) / 2 || j == (i - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_and_switch_are_fully_connected_aliases() {
        for t in [Topology::Bus, Topology::Switch] {
            assert!(t.allows(0, 7, 8));
            assert!(t.allows(7, 0, 8));
        }
    }

    #[test]
    fn mesh1_only_connects_immediate_neighbors() {
        assert!(Topology::Mesh1.allows(2, 3, 8));
        assert!(Topology::Mesh1.allows(3, 2, 8));
        assert!(!Topology::Mesh1.allows(2, 4, 8));
        assert!(!Topology::Mesh1.allows(2, 2, 8));
    }

    #[test]
    fn torus1_wraps_around() {
        assert!(Topology::Torus1.allows(0, 7, 8));
        assert!(Topology::Torus1.allows(7, 0, 8));
        assert!(Topology::Torus1.allows(0, 1, 8));
        assert!(!Topology::Torus1.allows(0, 4, 8));
    }

    #[test]
    fn mesh2_connects_grid_neighbors_without_wrap() {
        // p = 9 -> q = 3, grid:
        // 0 1 2
        // 3 4 5
        // 6 7 8
        assert!(Topology::Mesh2.allows(4, 1, 9)); // up
        assert!(Topology::Mesh2.allows(4, 5, 9)); // right
        assert!(!Topology::Mesh2.allows(0, 2, 9)); // same row, not adjacent
        assert!(!Topology::Mesh2.allows(0, 8, 9)); // diagonal
        assert!(!Topology::Mesh2.allows(2, 0, 9)); // row wrap disallowed
    }

    #[test]
    fn torus2_adds_wraparound_over_mesh2() {
        assert!(Topology::Torus2.allows(4, 1, 9));
        assert!(Topology::Torus2.allows(2, 0, 9)); // row wraps
        assert!(Topology::Torus2.allows(0, 6, 9)); // column wraps
    }

    #[test]
    fn tree_connects_parent_and_child() {
        // 0 -> 1, 2; 1 -> 3, 4; 2 -> 5, 6
        assert!(Topology::Tree.allows(0, 1, 7));
        assert!(Topology::Tree.allows(2, 6, 7));
        assert!(Topology::Tree.allows(6, 2, 7));
        assert!(!Topology::Tree.allows(1, 2, 7));
    }
}
