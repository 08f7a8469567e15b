use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{Dimensions, DrawTarget, OriginDimensions, PixelColor, Point, PointsIter, Size},
    primitives::Rectangle,
    Pixel,
};

/// In-memory frame buffer. Used to render the face off-screen and to inspect it in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeDisplay<C> {
    size: Size,
    pixels: Vec<C>,
}

impl<C: PixelColor> FakeDisplay<C> {
    pub fn with_default_color(size: Size, default_color: C) -> Self {
        let pixel_count = size.width as usize * size.height as usize;
        let pixels = vec![default_color; pixel_count];

        FakeDisplay { size, pixels }
    }

    /// Returns the color of the pixel at a point, `None` outside the display.
    pub fn pixel(&self, point: Point) -> Option<C> {
        self.point_to_index(point)
            .and_then(|index| self.pixels.get(index).copied())
    }

    fn point_to_index(&self, point: Point) -> Option<usize> {
        if let Ok((x, y)) = <(u32, u32)>::try_from(point) {
            if x < self.size.width && y < self.size.height {
                return Some((x + y * self.size.width) as usize);
            }
        }

        None
    }

    /// Points of `area` that have `color`.
    pub fn points_with(&self, area: Rectangle, color: C) -> impl Iterator<Item = Point> + '_ {
        area.intersection(&self.bounding_box())
            .points()
            .filter(move |p| self.pixel(*p) == Some(color))
    }

    /// Smallest rectangle inside `area` covering every pixel of `color`.
    pub fn extent_of(&self, area: Rectangle, color: C) -> Option<Rectangle> {
        let mut points = self.points_with(area, color);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (min.component_min(p), max.component_max(p))
        });
        Some(Rectangle::with_corners(min, max))
    }

    /// Marks every pixel that differs from `other`, or `None` if both are equal.
    ///
    /// # Panics
    ///
    /// Panics if the displays don't have the same size.
    pub fn diff(&self, other: &FakeDisplay<C>) -> Option<FakeDisplay<BinaryColor>> {
        assert!(
            self.size == other.size,
            "both displays must have the same size (self: {}x{}, other: {}x{})",
            self.size.width,
            self.size.height,
            other.size.width,
            other.size.height,
        );

        let pixels = self
            .pixels
            .iter()
            .zip(&other.pixels)
            .map(|(a, b)| BinaryColor::from(a != b))
            .collect::<Vec<_>>();

        if pixels.iter().any(|p| *p == BinaryColor::On) {
            Some(FakeDisplay {
                pixels,
                size: self.size,
            })
        } else {
            None
        }
    }
}

impl<C: PixelColor> DrawTarget for FakeDisplay<C> {
    type Color = C;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            if let Some(index) = self.point_to_index(point) {
                self.pixels[index] = color;
            }
        }

        Ok(())
    }
}

impl<C> OriginDimensions for FakeDisplay<C> {
    fn size(&self) -> Size {
        self.size
    }
}
