//! # Pedal Device Locator Module
//!
//! Finds the Skoorb Diffjoy pedal among the system's hidraw devices.
//!
//! ## Discovery
//!
//! Each entry under `/sys/class/hidraw` exposes a `device/uevent` file of
//! `KEY=VALUE` lines describing the underlying HID device. The pedal is
//! identified by an exact `HID_NAME` line; the matching entry's name is the
//! device node name under `/dev` (e.g. `hidraw3` -> `/dev/hidraw3`).
//!
//! A uevent file that cannot be read is treated as "not the pedal" and the
//! scan moves on to the next entry. If the class directory itself is missing
//! or no entry matches, there is no pedal.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Sysfs class directory listing all hidraw devices
pub const HIDRAW_CLASS_DIR: &str = "/sys/class/hidraw";

/// Directory containing the hidraw device nodes
pub const DEV_DIR: &str = "/dev";

/// uevent line identifying the Skoorb Diffjoy pedal
pub const PEDAL_SIGNATURE: &str = "HID_NAME=Skoorb Diffjoy";

/// Locate the pedal's device node
///
/// Scans `/sys/class/hidraw` and returns the `/dev/hidrawN` path of the
/// first entry whose uevent metadata carries the Diffjoy signature.
///
/// Entries are visited in whatever order the filesystem returns them; when
/// several pedals are plugged in, the first match wins.
///
/// # Returns
///
/// Returns `Some(path)` for the first matching entry, `None` if no entry
/// matches or the class directory is inaccessible.
///
/// # Examples
///
/// ```no_run
/// use pedal_pager::device::locator;
///
/// match locator::locate() {
///     Some(path) => println!("pedal at {}", path.display()),
///     None => println!("no pedal connected"),
/// }
/// ```
#[must_use]
pub fn locate() -> Option<PathBuf> {
    locate_in(Path::new(HIDRAW_CLASS_DIR), Path::new(DEV_DIR))
}

/// Locate the pedal under custom sysfs/dev roots
///
/// Same contract as [`locate`], with the class directory and device-node
/// directory as arguments.
///
/// # Arguments
///
/// * `class_dir` - Directory of hidraw class entries (e.g. `/sys/class/hidraw`)
/// * `dev_dir` - Directory the device nodes live in (e.g. `/dev`)
#[must_use]
pub fn locate_in(class_dir: &Path, dev_dir: &Path) -> Option<PathBuf> {
    let entries = match fs::read_dir(class_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Could not read {}: {}", class_dir.display(), e);
            return None;
        }
    };

    for entry in entries.flatten() {
        let uevent_path = entry.path().join("device").join("uevent");
        debug!("Checking {}", uevent_path.display());

        if uevent_matches(&uevent_path) {
            let node = dev_dir.join(entry.file_name());
            info!("Found pedal device at: {}", node.display());
            return Some(node);
        }
    }

    None
}

/// Check whether a uevent file carries the pedal signature
///
/// An unreadable file counts as no match; enumeration continues elsewhere.
fn uevent_matches(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(contents) => contents.lines().any(|line| line.trim() == PEDAL_SIGNATURE),
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            false
        }
    }
}
