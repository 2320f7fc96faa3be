//! CPU-side texture types and pixel decoding.

/// Pixel format of a CPU texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFormat {
    /// 8-bit RGB, normalized to [0, 1] on decode.
    Rgb8Unorm,
    /// 8-bit RGBA, normalized to [0, 1] on decode.
    #[default]
    Rgba8Unorm,
    /// 32-bit float RGBA, decoded as-is.
    Rgba32Float,
}

impl TextureFormat {
    /// Size of one pixel in bytes.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb8Unorm => 3,
            Self::Rgba8Unorm => 4,
            Self::Rgba32Float => 16,
        }
    }
}

/// Errors that can occur constructing or decoding textures.
#[derive(Debug)]
pub enum TextureError {
    /// Pixel data length does not match width × height × bytes-per-pixel.
    SizeMismatch {
        /// Required data length in bytes.
        expected: usize,
        /// Provided data length in bytes.
        actual: usize,
    },
    /// Width or height is zero.
    ZeroDimension,
    /// Failed to decode an image file.
    #[cfg(feature = "image")]
    Decode(image::ImageError),
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "pixel data length {actual} does not match expected {expected}")
            }
            Self::ZeroDimension => write!(f, "texture width and height must be non-zero"),
            #[cfg(feature = "image")]
            Self::Decode(e) => write!(f, "image decode error: {e}"),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "image")]
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        Self::Decode(e)
    }
}

/// A CPU-side texture holding raw pixel data.
///
/// Pixel (0, 0) is the first pixel in the data; rows are tightly packed.
/// Texel reads decode to normalized `[f32; 4]` RGBA, with missing alpha
/// decoding as 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTexture {
    width: u32,
    height: u32,
    format: TextureFormat,
    data: Vec<u8>,
}

impl CpuTexture {
    /// Create a texture from raw pixel bytes.
    ///
    /// The data length must equal `width * height * bytes_per_pixel` and
    /// both dimensions must be non-zero.
    pub fn new(
        width: u32,
        height: u32,
        format: TextureFormat,
        data: Vec<u8>,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroDimension);
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(TextureError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Create a 1×1 texture of a single color.
    pub fn solid(color: [f32; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            format: TextureFormat::Rgba32Float,
            data: bytemuck::cast_slice(&color).to_vec(),
        }
    }

    /// Create a black-and-white checkerboard test texture.
    ///
    /// `check_size` is the edge length of one square in pixels.
    pub fn checkerboard(width: u32, height: u32, check_size: u32) -> Result<Self, TextureError> {
        if check_size == 0 {
            return Err(TextureError::ZeroDimension);
        }
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let is_white = ((x / check_size) + (y / check_size)) % 2 == 0;
                let v = if is_white { 255 } else { 0 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        Self::new(width, height, TextureFormat::Rgba8Unorm, data)
    }

    /// Decode an image file (PNG, JPEG, ...) into an RGBA8 texture.
    #[cfg(feature = "image")]
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        let decoded = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = decoded.dimensions();
        log::debug!("decoded {width}x{height} image into RGBA8 texture");
        Self::new(width, height, TextureFormat::Rgba8Unorm, decoded.into_raw())
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel format.
    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one texel as normalized RGBA.
    ///
    /// `x` and `y` must be within the texture dimensions.
    pub fn texel(&self, x: u32, y: u32) -> [f32; 4] {
        debug_assert!(x < self.width && y < self.height);
        let bpp = self.format.bytes_per_pixel();
        let offset = (y as usize * self.width as usize + x as usize) * bpp;
        let px = &self.data[offset..offset + bpp];
        match self.format {
            TextureFormat::Rgb8Unorm => [
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
                1.0,
            ],
            TextureFormat::Rgba8Unorm => [
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
                px[3] as f32 / 255.0,
            ],
            TextureFormat::Rgba32Float => [
                bytemuck::pod_read_unaligned(&px[0..4]),
                bytemuck::pod_read_unaligned(&px[4..8]),
                bytemuck::pod_read_unaligned(&px[8..12]),
                bytemuck::pod_read_unaligned(&px[12..16]),
            ],
        }
    }
}
