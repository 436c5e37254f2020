pub const MAP_WIDTH: usize = 8;
pub const MAP_HEIGHT: usize = 8;

#[rustfmt::skip]
const LEVEL: [u8; MAP_WIDTH * MAP_HEIGHT] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 4, 0, 0, 3, 0, 1,
    1, 0, 0, 0, 0, 3, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

/// Immutable tile grid. 0 is walkable, any nonzero code is a wall variant.
/// The border must be fully walled so every cast ray terminates inside the
/// grid; `new` rejects maps that break that invariant.
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
}

impl Map {
    pub fn new(width: usize, height: usize, tiles: Vec<u8>) -> Self {
        assert_eq!(
            tiles.len(),
            width * height,
            "map: {}x{} needs {} tiles, got {}",
            width,
            height,
            width * height,
            tiles.len()
        );
        let map = Map { width, height, tiles };
        map.assert_enclosed();
        map
    }

    pub fn default_level() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT, LEVEL.to_vec())
    }

    fn assert_enclosed(&self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let on_border =
                    x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1;
                if on_border && self.tile_at(x, y) == 0 {
                    panic!("map: border is open at ({x},{y}); rays would escape the grid");
                }
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn tile_at(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "map: tile_at({x},{y}) out of range");
        self.tiles[y * self.width + x]
    }

    /// Walkability test over continuous map-space coordinates. Anything
    /// outside the grid counts as solid.
    pub fn walkable(&self, x: f32, y: f32) -> bool {
        let cx = x.floor() as i32;
        let cy = y.floor() as i32;
        self.in_bounds(cx, cy) && self.tile_at(cx as usize, cy as usize) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_enclosed_and_has_pillars() {
        let map = Map::default_level();
        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 8);
        assert_eq!(map.tile_at(2, 4), 4);
        assert_eq!(map.tile_at(5, 4), 3);
        assert_eq!(map.tile_at(5, 5), 3);
        assert_eq!(map.tile_at(4, 4), 0);
    }

    #[test]
    fn walkable_rejects_walls_and_out_of_range() {
        let map = Map::default_level();
        assert!(map.walkable(4.5, 4.5));
        assert!(!map.walkable(2.5, 4.5));
        assert!(!map.walkable(-1.0, 4.5));
        assert!(!map.walkable(4.5, 9.0));
    }

    #[test]
    #[should_panic(expected = "border is open")]
    fn open_border_is_a_fatal_configuration_fault() {
        Map::new(3, 3, vec![1, 0, 1, 1, 0, 1, 1, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn tile_lookup_is_bounds_checked() {
        let map = Map::default_level();
        map.tile_at(8, 0);
    }
}
