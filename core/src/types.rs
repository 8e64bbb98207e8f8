use ndarray::Array3;

/// Single coordinate axis used for board dimensions and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Three-dimensional coordinates `(layer, row, col)`.
pub type Coord3 = (Coord, Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord3 {
    type Output = [usize; 3];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into(), self.2.into()]
    }
}

pub const fn mult3(a: Coord, b: Coord, c: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    let c = c as CellCount;
    a.saturating_mul(b).saturating_mul(c)
}

/// Whether `a` and `b` differ by at most one step along every axis.
pub const fn within_one_step(a: Coord3, b: Coord3) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1 && a.2.abs_diff(b.2) <= 1
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord3) -> NeighborIter;
}

impl<T> NeighborIterExt for Array3<T> {
    fn iter_neighbors(&self, index: Coord3) -> NeighborIter {
        let (depth, rows, cols) = self.dim();
        // dimensions come from Coord values, so they always fit back
        let bounds = (depth as Coord, rows as Coord, cols as Coord);
        NeighborIter::new(index, bounds)
    }
}

pub const NEIGHBOR_COUNT: usize = 26;

const DISPLACEMENTS: [(i8, i8, i8); NEIGHBOR_COUNT] = build_displacements();

const fn build_displacements() -> [(i8, i8, i8); NEIGHBOR_COUNT] {
    let mut out = [(0, 0, 0); NEIGHBOR_COUNT];
    let mut i = 0;
    let mut dl = -1;
    while dl <= 1 {
        let mut dr = -1;
        while dr <= 1 {
            let mut dc = -1;
            while dc <= 1 {
                if dl != 0 || dr != 0 || dc != 0 {
                    out[i] = (dl, dr, dc);
                    i += 1;
                }
                dc += 1;
            }
            dr += 1;
        }
        dl += 1;
    }
    out
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord3, delta: (i8, i8, i8), bounds: Coord3) -> Option<Coord3> {
    let (l, r, c) = coords;
    let (dl, dr, dc) = delta;
    let (max_l, max_r, max_c) = bounds;

    let next_l = l.checked_add_signed(dl)?;
    if next_l >= max_l {
        return None;
    }

    let next_r = r.checked_add_signed(dr)?;
    if next_r >= max_r {
        return None;
    }

    let next_c = c.checked_add_signed(dc)?;
    if next_c >= max_c {
        return None;
    }

    Some((next_l, next_r, next_c))
}

/// Iterates the in-bounds members of the 26-cell neighbourhood around `center`.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord3,
    bounds: Coord3,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord3, bounds: Coord3) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord3;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
