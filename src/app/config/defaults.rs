// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scan flow**: Simulated processing delay and success screen duration
//! - **Camera**: Device selection, stream buffering and auto-flash threshold

use std::time::Duration;

// ==========================================================================
// Scan Flow Defaults
// ==========================================================================

/// Default simulated receipt processing delay (in milliseconds).
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 5_000;

/// Minimum processing delay (in milliseconds).
pub const MIN_PROCESSING_DELAY_MS: u64 = 0;

/// Maximum processing delay (in milliseconds).
pub const MAX_PROCESSING_DELAY_MS: u64 = 60_000;

/// Default time the "Receipt saved!" screen stays up (in milliseconds).
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 1_500;

/// Minimum success display time (in milliseconds).
pub const MIN_SUCCESS_DISPLAY_MS: u64 = 0;

/// Maximum success display time (in milliseconds).
pub const MAX_SUCCESS_DISPLAY_MS: u64 = 10_000;

/// Receipt id reported once processing completes. Extraction is not
/// implemented, so every scan resolves to the same placeholder.
pub const PLACEHOLDER_RECEIPT_ID: &str = "xyz-123456";

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Default capture device index (`/dev/video0`).
pub const DEFAULT_CAMERA_DEVICE_INDEX: usize = 0;

/// Number of memory-mapped buffers requested from the capture driver.
pub const CAPTURE_BUFFER_COUNT: u32 = 4;

/// Frames discarded after stream start so auto-exposure can settle.
pub const CAPTURE_WARMUP_FRAMES: usize = 3;

/// Mean luma (0-255) below which `FlashMode::Auto` fires the flash.
pub const AUTO_FLASH_LUMA_THRESHOLD: u8 = 60;

/// How long the flash LED is lit before the capture frame is grabbed.
pub const FLASH_SETTLE_DURATION: Duration = Duration::from_millis(150);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scan flow validation
    assert!(MAX_PROCESSING_DELAY_MS > MIN_PROCESSING_DELAY_MS);
    assert!(DEFAULT_PROCESSING_DELAY_MS >= MIN_PROCESSING_DELAY_MS);
    assert!(DEFAULT_PROCESSING_DELAY_MS <= MAX_PROCESSING_DELAY_MS);
    assert!(MAX_SUCCESS_DISPLAY_MS > MIN_SUCCESS_DISPLAY_MS);
    assert!(DEFAULT_SUCCESS_DISPLAY_MS >= MIN_SUCCESS_DISPLAY_MS);
    assert!(DEFAULT_SUCCESS_DISPLAY_MS <= MAX_SUCCESS_DISPLAY_MS);
    assert!(!PLACEHOLDER_RECEIPT_ID.is_empty());

    // Camera validation
    assert!(CAPTURE_BUFFER_COUNT >= 2);
    assert!(AUTO_FLASH_LUMA_THRESHOLD > 0);
};
