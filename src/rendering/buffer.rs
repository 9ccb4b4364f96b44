use image::RgbaImage;

/// Read-back of a rendered frame, row-major RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Buffer filled with a single colour.
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Wrap raw RGBA bytes. Returns `None` if the length does not match.
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x < self.width && y < self.height {
            let index = y as usize * self.width as usize + x as usize;
            self.pixels[index] = color;
        }
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_matching(&self, color: [u8; 4]) -> u64 {
        self.pixels.iter().filter(|px| **px == color).count() as u64
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.pixel(x, y).unwrap_or_default())
        })
    }
}
