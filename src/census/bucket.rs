//! Channel quantization
//!
//! Bucketing rounds each RGB channel down to the nearest multiple of the
//! bucket size, collapsing nearby colors into a shared bucket so that
//! frequency counting aggregates instead of fragmenting.

use image::Rgb;

use crate::error::{CensusError, Result};

/// Quantize a pixel down to its bucket color
///
/// Each output channel equals `(channel / bucket_size) * bucket_size`
/// using integer division, so it is a multiple of `bucket_size`, never
/// exceeds the input channel, and lies within `bucket_size - 1` of it.
/// The operation is idempotent.
///
/// # Arguments
///
/// * `pixel` - RGB pixel with channels in [0, 255]
/// * `bucket_size` - quantization step, must be at least 1
///
/// # Errors
///
/// Returns `CensusError::InvalidParameter` if `bucket_size` is zero.
pub fn bucket_color(pixel: Rgb<u8>, bucket_size: u32) -> Result<Rgb<u8>> {
    validate_bucket_size(bucket_size)?;
    Ok(quantize_pixel(pixel, bucket_size))
}

/// Reject a zero bucket size before any channel math runs
pub(crate) fn validate_bucket_size(bucket_size: u32) -> Result<()> {
    if bucket_size == 0 {
        return Err(CensusError::invalid_parameter("bucket_size", bucket_size));
    }
    Ok(())
}

/// Quantize a pixel with an already-validated bucket size
pub(crate) fn quantize_pixel(pixel: Rgb<u8>, bucket_size: u32) -> Rgb<u8> {
    let Rgb([r, g, b]) = pixel;
    Rgb([
        quantize_channel(r, bucket_size),
        quantize_channel(g, bucket_size),
        quantize_channel(b, bucket_size),
    ])
}

fn quantize_channel(channel: u8, bucket_size: u32) -> u8 {
    // floor(c / b) * b <= c <= 255, so the cast back to u8 cannot truncate
    ((u32::from(channel) / bucket_size) * bucket_size) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_color_rounds_down() {
        let bucketed = bucket_color(Rgb([12, 19, 20]), 10).unwrap();
        assert_eq!(bucketed, Rgb([10, 10, 20]));
    }

    #[test]
    fn test_bucket_color_identity_for_unit_bucket() {
        let pixel = Rgb([37, 201, 255]);
        assert_eq!(bucket_color(pixel, 1).unwrap(), pixel);
    }

    #[test]
    fn test_bucket_color_idempotent() {
        for bucket_size in [1, 7, 10, 32, 100] {
            let once = bucket_color(Rgb([123, 45, 250]), bucket_size).unwrap();
            let twice = bucket_color(once, bucket_size).unwrap();
            assert_eq!(once, twice, "bucket size {}", bucket_size);
        }
    }

    #[test]
    fn test_bucket_color_properties() {
        let pixel = Rgb([200, 101, 3]);
        for bucket_size in [1u32, 3, 10, 64, 255] {
            let Rgb(bucketed) = bucket_color(pixel, bucket_size).unwrap();
            for (original, quantized) in pixel.0.iter().zip(bucketed.iter()) {
                assert_eq!(u32::from(*quantized) % bucket_size, 0);
                assert!(quantized <= original);
                assert!(u32::from(original - quantized) < bucket_size);
            }
        }
    }

    #[test]
    fn test_bucket_size_larger_than_range() {
        // Every channel collapses to zero once the step exceeds 255
        assert_eq!(bucket_color(Rgb([255, 128, 1]), 300).unwrap(), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_zero_bucket_size_rejected() {
        let err = bucket_color(Rgb([0, 0, 0]), 0).unwrap_err();
        assert!(matches!(err, CensusError::InvalidParameter { .. }));
    }
}
