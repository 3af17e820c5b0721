//! IDX binary dataset parsing (the MNIST on-disk format).
//!
//! Layout of an IDX3 image file:
//! ```text
//! bytes  0-1:   0x00 0x00   (reserved)
//! byte   2:     0x08        (dtype = uint8)
//! byte   3:     0x03        (number of dimensions)
//! bytes  4-7:   N           (item count, big-endian u32)
//! bytes  8-11:  rows        (big-endian u32)
//! bytes 12-15:  cols        (big-endian u32)
//! bytes 16..:   N * rows * cols pixel bytes, row-major
//! ```
//! An IDX1 label file has the same 4-byte prefix with dimension count 1,
//! the big-endian item count, then one class byte per item.
//!
//! Pixels are scaled by 1/255 so every feature lies in [0, 1]; labels come
//! back as one-hot rows, ready for the training loop.

use std::fs;
use std::path::Path;

use crate::error::{NetError, Result};

fn be_u32(bytes: &[u8], offset: usize) -> usize {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]) as usize
}

fn check_header(bytes: &[u8], n_dims: u8, what: &str) -> Result<()> {
    if bytes.len() < 8 {
        return Err(NetError::Data(format!(
            "IDX {} file too short: {} bytes",
            what,
            bytes.len()
        )));
    }
    if bytes[0] != 0x00 || bytes[1] != 0x00 {
        return Err(NetError::Data(format!(
            "IDX {} file: reserved bytes must be zero, got 0x{:02X} 0x{:02X}",
            what, bytes[0], bytes[1]
        )));
    }
    if bytes[2] != 0x08 {
        return Err(NetError::Data(format!(
            "IDX {} file: dtype must be 0x08 (uint8), got 0x{:02X}",
            what, bytes[2]
        )));
    }
    if bytes[3] != n_dims {
        return Err(NetError::Data(format!(
            "IDX {} file: expected {} dimensions, got {}",
            what, n_dims, bytes[3]
        )));
    }
    Ok(())
}

/// Parses an IDX3 image byte buffer into one feature row per image, pixel
/// values scaled to [0, 1].
pub fn parse_images(bytes: &[u8]) -> Result<Vec<Vec<f64>>> {
    check_header(bytes, 3, "image")?;
    if bytes.len() < 16 {
        return Err(NetError::Data(format!(
            "IDX image file too short: {} bytes",
            bytes.len()
        )));
    }

    let n_items = be_u32(bytes, 4);
    let rows = be_u32(bytes, 8);
    let cols = be_u32(bytes, 12);
    let n_pixels = rows
        .checked_mul(cols)
        .ok_or_else(|| NetError::Data(format!("image size {}x{} overflows", rows, cols)))?;
    let needed = n_items
        .checked_mul(n_pixels)
        .and_then(|d| d.checked_add(16))
        .ok_or_else(|| NetError::Data("image data length overflows".into()))?;
    if bytes.len() < needed {
        return Err(NetError::Data(format!(
            "IDX image file declares {} items of {} pixels but holds only {} bytes",
            n_items,
            n_pixels,
            bytes.len()
        )));
    }

    Ok(bytes[16..needed]
        .chunks_exact(n_pixels)
        .map(|chunk| chunk.iter().map(|&px| px as f64 / 255.0).collect())
        .collect())
}

/// Parses an IDX1 label byte buffer into one-hot rows of length `n_classes`.
pub fn parse_labels(bytes: &[u8], n_classes: usize) -> Result<Vec<Vec<f64>>> {
    check_header(bytes, 1, "label")?;

    let n_items = be_u32(bytes, 4);
    if bytes.len() < 8 + n_items {
        return Err(NetError::Data(format!(
            "IDX label file declares {} items but holds only {} bytes",
            n_items,
            bytes.len()
        )));
    }

    bytes[8..8 + n_items]
        .iter()
        .enumerate()
        .map(|(i, &class)| {
            let class = class as usize;
            if class >= n_classes {
                return Err(NetError::Data(format!(
                    "label {} at index {} out of range for {} classes",
                    class, i, n_classes
                )));
            }
            let mut one_hot = vec![0.0; n_classes];
            one_hot[class] = 1.0;
            Ok(one_hot)
        })
        .collect()
}

/// Reads an image/label file pair from disk.
///
/// The returned pair is guaranteed to have equal sample and label counts.
pub fn load_idx_pair(
    image_path: impl AsRef<Path>,
    label_path: impl AsRef<Path>,
    n_classes: usize,
) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>)> {
    let read = |path: &Path| {
        fs::read(path)
            .map_err(|e| NetError::Data(format!("cannot read {}: {}", path.display(), e)))
    };
    let images = parse_images(&read(image_path.as_ref())?)?;
    let labels = parse_labels(&read(label_path.as_ref())?, n_classes)?;

    if images.len() != labels.len() {
        return Err(NetError::Data(format!(
            "{} images but {} labels",
            images.len(),
            labels.len()
        )));
    }
    Ok((images, labels))
}

/// Splits `(x, y)` into a training prefix and a validation suffix, keeping
/// the first `train_fraction` of the samples for training.
pub fn split_train_val(
    x: Vec<Vec<f64>>,
    y: Vec<Vec<f64>>,
    train_fraction: f64,
) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<Vec<f64>>)> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(NetError::InvalidConfiguration(format!(
            "train_fraction must lie in (0, 1), got {}",
            train_fraction
        )));
    }
    if x.len() != y.len() {
        return Err(NetError::shape(
            format!("labels for {} samples", x.len()),
            format!("{} labels", y.len()),
        ));
    }

    let split = (x.len() as f64 * train_fraction) as usize;
    let mut x = x;
    let mut y = y;
    let val_x = x.split_off(split);
    let val_y = y.split_off(split);
    Ok((x, y, val_x, val_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_bytes(n: usize, rows: usize, cols: usize, pixels: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x00, 0x00, 0x08, 0x03];
        bytes.extend_from_slice(&(n as u32).to_be_bytes());
        bytes.extend_from_slice(&(rows as u32).to_be_bytes());
        bytes.extend_from_slice(&(cols as u32).to_be_bytes());
        bytes.extend_from_slice(pixels);
        bytes
    }

    fn label_bytes(labels: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x00, 0x00, 0x08, 0x01];
        bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
        bytes.extend_from_slice(labels);
        bytes
    }

    #[test]
    fn parses_and_scales_images() {
        let imgs = parse_images(&image_bytes(2, 1, 2, &[0, 255, 51, 102])).unwrap();
        assert_eq!(imgs.len(), 2);
        assert_eq!(imgs[0], vec![0.0, 1.0]);
        assert_eq!(imgs[1], vec![0.2, 0.4]);
    }

    #[test]
    fn one_hot_labels() {
        let labels = parse_labels(&label_bytes(&[1, 0]), 3).unwrap();
        assert_eq!(labels[0], vec![0.0, 1.0, 0.0]);
        assert_eq!(labels[1], vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn rejects_wrong_dimension_count() {
        let err = parse_images(&label_bytes(&[0])).unwrap_err();
        assert!(err.to_string().contains("dimensions"));
    }

    #[test]
    fn rejects_out_of_range_class() {
        assert!(parse_labels(&label_bytes(&[7]), 3).is_err());
    }

    #[test]
    fn rejects_truncated_pixel_data() {
        // Header promises 2 images of 4 pixels, body holds 3 bytes.
        assert!(parse_images(&image_bytes(2, 2, 2, &[1, 2, 3])).is_err());
    }

    #[test]
    fn split_keeps_prefix_for_training() {
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let y = x.clone();
        let (tx, ty, vx, vy) = split_train_val(x, y, 0.92).unwrap();
        assert_eq!(tx.len(), 9);
        assert_eq!(vx.len(), 1);
        assert_eq!(ty.len(), 9);
        assert_eq!(vy[0], vec![9.0]);
    }
}
