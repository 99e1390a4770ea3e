use crate::math::IntRect;

/// An 8 bit coverage value per pixel over a rectangle of pixels.
///
/// Pixels are addressed in the coordinate space of the rectangle, which does not
/// need to start at the origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    rect: IntRect,
    pixels: Vec<u8>,
}

impl AlphaMask {
    /// Creates a fully transparent mask.
    pub fn new(rect: IntRect) -> Self {
        let len = extent(rect.width()) * extent(rect.height());
        AlphaMask {
            rect,
            pixels: vec![0; len],
        }
    }

    pub fn rect(&self) -> &IntRect {
        &self.rect
    }

    pub fn width(&self) -> usize {
        extent(self.rect.width())
    }

    pub fn height(&self) -> usize {
        extent(self.rect.height())
    }

    /// Row-major coverage values, starting at `rect().min`.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The coverage at `(x, y)`, or zero outside of the mask.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        match self.offset(x, y) {
            Some(offset) => self.pixels[offset],
            None => 0,
        }
    }

    /// The row of pixels at `y`, empty outside of the mask.
    pub fn row(&self, y: i32) -> &[u8] {
        match self.offset(self.rect.min.x, y) {
            Some(start) => &self.pixels[start..start + self.width()],
            None => &[],
        }
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < self.rect.min.x || x >= self.rect.max.x || y < self.rect.min.y || y >= self.rect.max.y
        {
            return None;
        }
        let x = (x - self.rect.min.x) as usize;
        let y = (y - self.rect.min.y) as usize;

        Some(y * self.width() + x)
    }
}

fn extent(size: i32) -> usize {
    size.max(0) as usize
}

#[test]
fn mask_addressing() {
    use crate::math::int_rect;

    let mut mask = AlphaMask::new(int_rect(-2, 3, 2, 5));
    assert_eq!(mask.width(), 4);
    assert_eq!(mask.height(), 2);
    assert_eq!(mask.pixels().len(), 8);

    mask.pixels_mut()[5] = 200;
    assert_eq!(mask.get(-1, 4), 200);
    assert_eq!(mask.get(-2, 3), 0);
    assert_eq!(mask.get(2, 4), 0);
    assert_eq!(mask.get(-1, 5), 0);
    assert_eq!(mask.row(4), &[0, 200, 0, 0]);
    assert!(mask.row(0).is_empty());

    let empty = AlphaMask::new(int_rect(5, 5, 0, 0));
    assert_eq!(empty.width(), 0);
    assert!(empty.pixels().is_empty());
    assert!(empty.row(5).is_empty());
}
