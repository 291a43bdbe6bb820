/// Orthogonal step offsets `(dx, dy)` in enumeration order: North, East, South, West.
///
/// North is `y - 1`, so it points toward rank 1.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
