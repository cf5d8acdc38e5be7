use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Resizes with bilinear filtering and lays pixels out as `[height, width, channel]`.
/// Pixel values stay in `0..=255`; the consuming network applies its own scaling.
pub fn image_to_input_tensor(image: &DynamicImage, resolution: u32) -> Tensor {
    let resized = image.resize_exact(resolution, resolution, imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();

    tract_ndarray::Array3::from_shape_fn(
        (resolution as usize, resolution as usize, 3),
        |(y, x, c)| rgb.get_pixel(x as u32, y as u32)[c] as f32,
    )
    .into_tensor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_square_input_resizes_to_target() {
        let image = solid_image(100, 100, [255, 0, 0]);

        let tensor = image_to_input_tensor(&image, 224);

        assert_eq!(tensor.shape(), &[224, 224, 3]);
    }

    #[test]
    fn test_landscape_input_resizes_to_target() {
        let image = solid_image(640, 480, [0, 255, 0]);

        let tensor = image_to_input_tensor(&image, 224);

        assert_eq!(tensor.shape(), &[224, 224, 3]);
    }

    #[test]
    fn test_portrait_input_resizes_to_target() {
        let image = solid_image(50, 200, [0, 0, 255]);

        let tensor = image_to_input_tensor(&image, 224);

        assert_eq!(tensor.shape(), &[224, 224, 3]);
    }

    #[test]
    fn test_pixel_values_are_not_normalized() {
        let image = solid_image(64, 64, [255, 128, 0]);

        let tensor = image_to_input_tensor(&image, 224);
        let slice = tensor.as_slice::<f32>().unwrap();

        // Interior pixels of a solid image keep their raw channel values.
        let center = (112 * 224 + 112) * 3;
        assert_eq!(slice[center], 255.0);
        assert_eq!(slice[center + 1], 128.0);
        assert_eq!(slice[center + 2], 0.0);
    }

    #[test]
    fn test_same_input_yields_same_tensor() {
        let image = solid_image(120, 90, [17, 34, 51]);

        let first = image_to_input_tensor(&image, 224);
        let second = image_to_input_tensor(&image, 224);

        assert_eq!(
            first.as_slice::<f32>().unwrap(),
            second.as_slice::<f32>().unwrap()
        );
    }
}
