// SPDX-License-Identifier: MPL-2.0
//! Video4Linux still capture.
//!
//! Opens `/dev/video<N>`, negotiates MJPEG (falling back to YUYV), lets
//! auto-exposure settle for a few frames and grabs one. The device is closed
//! again after every capture so the camera LED only lights while shooting.

use super::flash::{self, FlashLed};
use super::frame::{self, FramePixelFormat, RawFrame};
use super::{CameraBackend, CaptureRequest, CaptureResult, FlashMode};
use crate::app::config::{
    AUTO_FLASH_LUMA_THRESHOLD, CAPTURE_BUFFER_COUNT, CAPTURE_WARMUP_FRAMES, FLASH_SETTLE_DURATION,
};
use crate::error::CameraError;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::path::PathBuf;
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::prelude::*;
use v4l::video::Capture;
use v4l::FourCC;

#[derive(Debug)]
pub struct V4l2Backend {
    device_index: usize,
    leds_dir: PathBuf,
    name: String,
}

impl V4l2Backend {
    pub fn new(device_index: usize) -> Self {
        Self {
            device_index,
            leds_dir: PathBuf::from(flash::SYSFS_LEDS_DIR),
            name: format!("v4l2:/dev/video{}", device_index),
        }
    }
}

impl CameraBackend for V4l2Backend {
    fn name(&self) -> &str {
        &self.name
    }

    fn capture(&self, request: CaptureRequest) -> BoxFuture<'static, CaptureResult> {
        let device_index = self.device_index;
        let leds_dir = self.leds_dir.clone();

        async move {
            tokio::task::spawn_blocking(move || {
                let leds = match request.flash_mode {
                    FlashMode::Off => Vec::new(),
                    FlashMode::On | FlashMode::Auto => FlashLed::discover_in(&leds_dir),
                };
                let raw = capture_frame(device_index, request.flash_mode, &leds)?;
                frame::encode(&raw, request.image_format)
            })
            .await
            .map_err(|err| CameraError::CaptureFailed(err.to_string()))?
        }
        .boxed()
    }
}

/// Turns the flash off when dropped, including on early error returns.
struct LitFlash<'a>(&'a [FlashLed]);

impl<'a> LitFlash<'a> {
    fn light(leds: &'a [FlashLed]) -> Self {
        flash::all_on(leds);
        Self(leds)
    }
}

impl Drop for LitFlash<'_> {
    fn drop(&mut self) {
        flash::all_off(self.0);
    }
}

fn capture_frame(
    device_index: usize,
    flash_mode: FlashMode,
    leds: &[FlashLed],
) -> Result<RawFrame, CameraError> {
    let dev = Device::new(device_index).map_err(|err| CameraError::from_io(&err))?;
    let (pixel_format, width, height) = negotiate_format(&dev)?;
    tracing::debug!(device_index, ?pixel_format, width, height, "capture format negotiated");

    let mut stream = Stream::with_buffers(&dev, Type::VideoCapture, CAPTURE_BUFFER_COUNT)
        .map_err(|err| CameraError::from_io(&err))?;

    let mut latest = grab(&mut stream, pixel_format, width, height)?;
    for _ in 1..CAPTURE_WARMUP_FRAMES {
        latest = grab(&mut stream, pixel_format, width, height)?;
    }

    let fire = match flash_mode {
        FlashMode::Off => false,
        FlashMode::On => true,
        FlashMode::Auto => frame::mean_luma(&latest)
            .map(|luma| luma < AUTO_FLASH_LUMA_THRESHOLD)
            .unwrap_or(false),
    };

    if !fire || leds.is_empty() {
        if fire {
            tracing::debug!("flash requested but no LED is available");
        }
        return Ok(latest);
    }

    let _lit = LitFlash::light(leds);
    std::thread::sleep(FLASH_SETTLE_DURATION);
    // The first buffer after lighting may have been exposed before the LED came on.
    grab(&mut stream, pixel_format, width, height)?;
    grab(&mut stream, pixel_format, width, height)
}

fn grab(
    stream: &mut Stream<'_>,
    pixel_format: FramePixelFormat,
    width: u32,
    height: u32,
) -> Result<RawFrame, CameraError> {
    let (buf, meta) = stream.next().map_err(|err| CameraError::from_io(&err))?;
    let used = (meta.bytesused as usize).min(buf.len());
    Ok(RawFrame {
        pixel_format,
        width,
        height,
        data: buf[..used].to_vec(),
    })
}

fn negotiate_format(dev: &Device) -> Result<(FramePixelFormat, u32, u32), CameraError> {
    let mjpg = FourCC::new(b"MJPG");
    let yuyv = FourCC::new(b"YUYV");

    let current = dev.format().map_err(|err| CameraError::from_io(&err))?;
    let mut offered = current.fourcc;
    for (fourcc, pixel_format) in [(mjpg, FramePixelFormat::Mjpeg), (yuyv, FramePixelFormat::Yuyv)] {
        let mut wanted = current.clone();
        wanted.fourcc = fourcc;
        match dev.set_format(&wanted) {
            Ok(actual) if actual.fourcc == fourcc => {
                return Ok((pixel_format, actual.width, actual.height));
            }
            Ok(actual) => offered = actual.fourcc,
            Err(err) => tracing::debug!(?fourcc, error = %err, "format rejected"),
        }
    }

    Err(CameraError::UnsupportedFormat(format!("{:?}", offered)))
}
