// SPDX-License-Identifier: MPL-2.0
//! Raw frame conversion and encoding.

use super::ImageFormat;
use crate::error::CameraError;
use image_rs::{DynamicImage, RgbImage};
use std::io::Cursor;

/// Pixel layouts the capture backend knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePixelFormat {
    /// Motion-JPEG: every frame is a complete JPEG image.
    Mjpeg,
    /// Packed YUV 4:2:2, `Y0 U Y1 V` per two pixels.
    Yuyv,
}

/// A single frame copied out of the driver's buffer.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub pixel_format: FramePixelFormat,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Converts YUYV (YUV 4:2:2) to packed RGB using BT.601 coefficients.
pub fn yuyv_to_rgb(data: &[u8], width: u32, height: u32) -> Vec<u8> {
    let pixel_count = width as usize * height as usize;
    let mut rgb = Vec::with_capacity(pixel_count * 3);

    'chunks: for chunk in data.chunks_exact(4) {
        let y0 = f32::from(chunk[0]);
        let u = f32::from(chunk[1]) - 128.0;
        let y1 = f32::from(chunk[2]);
        let v = f32::from(chunk[3]) - 128.0;

        for y in [y0, y1] {
            if rgb.len() >= pixel_count * 3 {
                break 'chunks;
            }
            rgb.push((y + 1.402 * v).clamp(0.0, 255.0) as u8);
            rgb.push((y - 0.344 * u - 0.714 * v).clamp(0.0, 255.0) as u8);
            rgb.push((y + 1.772 * u).clamp(0.0, 255.0) as u8);
        }
    }

    rgb
}

/// Average brightness of the frame (0-255), or `None` if it can't be decoded.
pub fn mean_luma(frame: &RawFrame) -> Option<u8> {
    match frame.pixel_format {
        FramePixelFormat::Yuyv => {
            let luma = frame.data.iter().step_by(2);
            average(luma.copied())
        }
        FramePixelFormat::Mjpeg => {
            let decoded =
                image_rs::load_from_memory_with_format(&frame.data, image_rs::ImageFormat::Jpeg)
                    .ok()?;
            average(decoded.to_luma8().into_raw().into_iter())
        }
    }
}

fn average(values: impl Iterator<Item = u8>) -> Option<u8> {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), value| {
        (sum + u64::from(value), count + 1)
    });
    (count > 0).then(|| (sum / count) as u8)
}

/// Encodes a raw frame in the requested output format.
///
/// MJPEG frames requested as JPEG are passed through untouched.
pub fn encode(frame: &RawFrame, format: ImageFormat) -> Result<Vec<u8>, CameraError> {
    let image = match (frame.pixel_format, format) {
        (FramePixelFormat::Mjpeg, ImageFormat::Jpeg) => return Ok(frame.data.clone()),
        (FramePixelFormat::Mjpeg, ImageFormat::Png) => {
            image_rs::load_from_memory_with_format(&frame.data, image_rs::ImageFormat::Jpeg)
                .map_err(|err| CameraError::CaptureFailed(err.to_string()))?
        }
        (FramePixelFormat::Yuyv, _) => {
            let rgb = yuyv_to_rgb(&frame.data, frame.width, frame.height);
            let buffer = RgbImage::from_raw(frame.width, frame.height, rgb).ok_or_else(|| {
                CameraError::CaptureFailed(format!(
                    "short YUYV frame for {}x{}",
                    frame.width, frame.height
                ))
            })?;
            DynamicImage::ImageRgb8(buffer)
        }
    };

    let mut encoded = Cursor::new(Vec::new());
    image
        .write_to(&mut encoded, format.to_image_format())
        .map_err(|err| CameraError::CaptureFailed(err.to_string()))?;
    Ok(encoded.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yuyv_frame(width: u32, height: u32, y: u8) -> RawFrame {
        let pairs = (width * height / 2) as usize;
        RawFrame {
            pixel_format: FramePixelFormat::Yuyv,
            width,
            height,
            data: [y, 128, y, 128].repeat(pairs),
        }
    }

    #[test]
    fn neutral_chroma_yields_gray() {
        let rgb = yuyv_to_rgb(&[100, 128, 200, 128], 2, 1);
        assert_eq!(rgb, vec![100, 100, 100, 200, 200, 200]);
    }

    #[test]
    fn conversion_stops_at_frame_size() {
        let data = [50, 128, 50, 128].repeat(8);
        let rgb = yuyv_to_rgb(&data, 2, 2);
        assert_eq!(rgb.len(), 2 * 2 * 3);
    }

    #[test]
    fn mean_luma_of_yuyv_reads_y_samples() {
        assert_eq!(mean_luma(&yuyv_frame(4, 2, 30)), Some(30));
        assert_eq!(mean_luma(&yuyv_frame(4, 2, 220)), Some(220));
    }

    #[test]
    fn mean_luma_of_empty_frame_is_none() {
        let frame = RawFrame {
            pixel_format: FramePixelFormat::Yuyv,
            width: 0,
            height: 0,
            data: Vec::new(),
        };
        assert_eq!(mean_luma(&frame), None);
    }

    #[test]
    fn yuyv_encodes_to_png_and_jpeg() {
        let frame = yuyv_frame(4, 4, 128);

        let png = encode(&frame, ImageFormat::Png).expect("png");
        assert_eq!(&png[1..4], b"PNG");

        let jpeg = encode(&frame, ImageFormat::Jpeg).expect("jpeg");
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn mjpeg_round_trips_through_png() {
        let jpeg = encode(&yuyv_frame(8, 8, 90), ImageFormat::Jpeg).expect("jpeg");
        let frame = RawFrame {
            pixel_format: FramePixelFormat::Mjpeg,
            width: 8,
            height: 8,
            data: jpeg.clone(),
        };

        assert_eq!(encode(&frame, ImageFormat::Jpeg).expect("passthrough"), jpeg);
        let png = encode(&frame, ImageFormat::Png).expect("png");
        assert_eq!(&png[1..4], b"PNG");
        assert!(mean_luma(&frame).is_some());
    }

    #[test]
    fn truncated_yuyv_frame_is_rejected() {
        let frame = RawFrame {
            pixel_format: FramePixelFormat::Yuyv,
            width: 16,
            height: 16,
            data: vec![0; 8],
        };
        assert!(matches!(
            encode(&frame, ImageFormat::Png),
            Err(CameraError::CaptureFailed(_))
        ));
    }
}
