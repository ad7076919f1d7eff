use std::ops::{Add, Mul, Sub};

/// Grid coordinate as `(row, col)`, row-major, 0-indexed.
///
/// Also doubles as a size value: `Pos(rows, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos(pub i32, pub i32);

impl Pos {
    pub const ZERO: Pos = Pos(0, 0);

    /// Iterates every position in the half-open box `from..to`, row-major.
    pub fn iter_fill(from: Pos, to: Pos) -> impl Iterator<Item = Pos> {
        (from.0..to.0).flat_map(move |row| (from.1..to.1).map(move |col| Pos(row, col)))
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, other: Pos) -> Pos {
        Pos(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, other: Pos) -> Pos {
        Pos(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<i32> for Pos {
    type Output = Pos;

    fn mul(self, other: i32) -> Pos {
        Pos(self.0 * other, self.1 * other)
    }
}

impl From<(i32, i32)> for Pos {
    fn from(tuple: (i32, i32)) -> Self {
        Pos(tuple.0, tuple.1)
    }
}

impl From<Pos> for (i32, i32) {
    fn from(val: Pos) -> Self {
        (val.0, val.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Pos;

    #[test]
    fn tuple_conversions() {
        assert_eq!(Pos::from((2, 3)), Pos(2, 3));
        assert_eq!(<(i32, i32)>::from(Pos(2, 3)), (2, 3));
    }

    #[test]
    fn iter_fill_is_row_major() {
        let positions: Vec<_> = Pos::iter_fill(Pos::ZERO, Pos(2, 3)).collect();
        assert_eq!(
            positions,
            vec![
                Pos(0, 0),
                Pos(0, 1),
                Pos(0, 2),
                Pos(1, 0),
                Pos(1, 1),
                Pos(1, 2),
            ]
        );
    }
}
