// SPDX-License-Identifier: MPL-2.0
//! Flash LED control through Linux sysfs.
//!
//! LEDs are exposed as `/sys/class/leds/<color>:flash`. Only the `brightness`
//! file is used; the strobe interface is root-only on most systems.

use std::io;
use std::path::{Path, PathBuf};

/// Default sysfs directory scanned for flash LEDs.
pub const SYSFS_LEDS_DIR: &str = "/sys/class/leds";

/// A writable flash LED.
#[derive(Debug, Clone)]
pub struct FlashLed {
    path: PathBuf,
    max_brightness: u32,
    name: String,
}

impl FlashLed {
    /// Returns every writable `*:flash` LED under `leds_dir`, sorted by name.
    pub fn discover_in(leds_dir: &Path) -> Vec<FlashLed> {
        let Ok(entries) = std::fs::read_dir(leds_dir) else {
            tracing::debug!(dir = %leds_dir.display(), "no LED class directory");
            return Vec::new();
        };

        let mut leds: Vec<FlashLed> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.ends_with(":flash") {
                    return None;
                }
                Self::probe(entry.path(), name)
            })
            .collect();

        leds.sort_by(|a, b| a.name.cmp(&b.name));
        leds
    }

    /// Scans the system LED directory.
    pub fn discover() -> Vec<FlashLed> {
        Self::discover_in(Path::new(SYSFS_LEDS_DIR))
    }

    fn probe(path: PathBuf, name: String) -> Option<FlashLed> {
        let max_path = path.join("max_brightness");
        let max_brightness = match std::fs::read_to_string(&max_path) {
            Ok(raw) => match raw.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    tracing::warn!(path = %max_path.display(), "invalid max_brightness");
                    return None;
                }
            },
            Err(err) => {
                tracing::warn!(path = %max_path.display(), error = %err, "cannot read max_brightness");
                return None;
            }
        };

        let brightness_path = path.join("brightness");
        if let Err(err) = std::fs::OpenOptions::new()
            .write(true)
            .open(&brightness_path)
        {
            tracing::warn!(
                path = %brightness_path.display(),
                error = %err,
                "flash LED found but not writable"
            );
            return None;
        }

        tracing::info!(name = %name, max_brightness, "discovered flash LED");
        Some(FlashLed {
            path,
            max_brightness,
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn set_brightness(&self, value: u32) -> io::Result<()> {
        let clamped = value.min(self.max_brightness);
        std::fs::write(self.path.join("brightness"), clamped.to_string())
    }

    pub fn on(&self) -> io::Result<()> {
        self.set_brightness(self.max_brightness)
    }

    pub fn off(&self) -> io::Result<()> {
        self.set_brightness(0)
    }
}

/// Lights every LED; failures are logged.
pub fn all_on(leds: &[FlashLed]) {
    for led in leds {
        if let Err(err) = led.on() {
            tracing::warn!(led = %led.name, error = %err, "failed to turn on flash LED");
        }
    }
}

/// Turns every LED off; failures are logged.
pub fn all_off(leds: &[FlashLed]) {
    for led in leds {
        if let Err(err) = led.off() {
            tracing::warn!(led = %led.name, error = %err, "failed to turn off flash LED");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fake_led(root: &Path, name: &str, max: &str) -> PathBuf {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).expect("mkdir");
        std::fs::write(dir.join("max_brightness"), max).expect("write max");
        std::fs::write(dir.join("brightness"), "0").expect("write brightness");
        dir
    }

    #[test]
    fn discovers_only_flash_entries_sorted() {
        let root = tempdir().expect("temp dir");
        fake_led(root.path(), "yellow:flash", "255\n");
        fake_led(root.path(), "white:flash", "100\n");
        fake_led(root.path(), "input0::capslock", "1\n");

        let leds = FlashLed::discover_in(root.path());
        let names: Vec<_> = leds.iter().map(FlashLed::name).collect();
        assert_eq!(names, vec!["white:flash", "yellow:flash"]);
    }

    #[test]
    fn skips_led_with_invalid_max_brightness() {
        let root = tempdir().expect("temp dir");
        fake_led(root.path(), "white:flash", "0");
        assert!(FlashLed::discover_in(root.path()).is_empty());
    }

    #[test]
    fn missing_directory_yields_no_leds() {
        let root = tempdir().expect("temp dir");
        assert!(FlashLed::discover_in(&root.path().join("absent")).is_empty());
    }

    #[test]
    fn on_and_off_write_brightness() {
        let root = tempdir().expect("temp dir");
        let dir = fake_led(root.path(), "white:flash", "42");
        let leds = FlashLed::discover_in(root.path());

        all_on(&leds);
        let lit = std::fs::read_to_string(dir.join("brightness")).expect("read");
        assert_eq!(lit, "42");

        all_off(&leds);
        let dark = std::fs::read_to_string(dir.join("brightness")).expect("read");
        assert_eq!(dark, "0");
    }
}
