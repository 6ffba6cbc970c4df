//! Tests for channel normalization and tint blending

#[cfg(test)]
mod tests {
    use image::Rgba;
    use mosaicmaker::io::configuration::TINT_ALPHA;
    use mosaicmaker::mosaic::tint::{
        Tint, blend_channel, normalize_channel, premultiply, stamp_row,
    };

    // Tests normalization truncates and stays within 8 bits
    // Verified by rounding instead of truncating
    #[test]
    fn test_normalize_channel_law() {
        for value in 0..=u16::MAX {
            let normalized = normalize_channel(value);
            assert_eq!(u32::from(normalized), u32::from(value) / 257);
        }
        assert_eq!(normalize_channel(256), 0);
        assert_eq!(normalize_channel(257), 1);
        assert_eq!(normalize_channel(u16::MAX), 255);
    }

    // Tests 8-bit values widened to 16 bits survive normalization
    // Verified by dividing by 256
    #[test]
    fn test_normalize_channel_inverts_widening() {
        for value in 0..=u8::MAX {
            assert_eq!(normalize_channel(u16::from(value) * 257), value);
        }
    }

    // Tests blending stays within one unit of the real-valued formula
    // Verified by swapping foreground and background weights
    #[test]
    fn test_blend_channel_matches_formula() {
        let a = f64::from(TINT_ALPHA) / 255.0;
        for existing in 0..=u8::MAX {
            for foreground in (0..=u8::MAX).step_by(5) {
                let exact = f64::from(foreground).mul_add(a, f64::from(existing) * (1.0 - a));
                let blended = f64::from(blend_channel(existing, foreground, TINT_ALPHA));
                assert!(
                    (blended - exact).abs() <= 1.0,
                    "{existing} under {foreground}: {blended} vs {exact}"
                );
            }
        }
    }

    // Tests a half-opacity red tint over black and white
    // Verified by changing the alpha constant
    #[test]
    fn test_blend_channel_known_values() {
        assert_eq!(blend_channel(0, 255, TINT_ALPHA), 127);
        assert_eq!(blend_channel(255, 0, TINT_ALPHA), 128);
        assert_eq!(blend_channel(255, 255, TINT_ALPHA), 255);
        assert_eq!(blend_channel(0, 0, TINT_ALPHA), 0);
    }

    // Tests opaque pixels normalize directly and use the fixed opacity
    // Verified by copying source alpha into the tint
    #[test]
    fn test_tint_from_pixel() {
        let tint = Tint::from_pixel(Rgba([65535, 32896, 0, 65535]));

        assert_eq!(tint.rgb, [255, 128, 0]);
        assert_eq!(tint.alpha, TINT_ALPHA);
    }

    // Tests translucent pixels are premultiplied before normalization
    // Verified by normalizing the straight color channels
    #[test]
    fn test_tint_from_translucent_pixel() {
        let transparent = Tint::from_pixel(Rgba([65535, 65535, 65535, 0]));
        assert_eq!(transparent.rgb, [0, 0, 0]);
        assert_eq!(transparent.alpha, TINT_ALPHA);

        let half = Tint::from_pixel(Rgba([65535, 32896, 0, 32896]));
        assert_eq!(half.rgb, [128, 64, 0]);
    }

    // Tests premultiplication matches widened 8-bit arithmetic
    // Verified by dividing by 0x10000 instead of 0xffff
    #[test]
    fn test_premultiply() {
        assert_eq!(premultiply(65535, 65535), 65535);
        assert_eq!(premultiply(65535, 0), 0);
        assert_eq!(premultiply(12345, 65535), 12345);
        for (value, alpha) in [(255u16, 128u16), (200, 17), (1, 254)] {
            let widened = premultiply(value * 257, alpha * 257);
            assert_eq!(
                u32::from(widened),
                u32::from(value) * 257 * u32::from(alpha) / 255
            );
        }
    }

    // Tests applying a tint blends color channels and keeps pixels opaque
    // Verified by blending the alpha channel
    #[test]
    fn test_tint_apply() {
        let tint = Tint::from_pixel(Rgba([65535, 0, 0, 65535]));
        let mut row = vec![0, 0, 0, 255, 255, 255, 255, 255];

        tint.apply(&mut row);

        assert_eq!(row, vec![127, 0, 0, 255, 255, 128, 128, 255]);
    }

    // Tests stamping copies opaque pixels and flattens translucent ones onto black
    // Verified by copying alpha verbatim
    #[test]
    fn test_stamp_row() {
        let thumbnail = [10, 20, 30, 255, 200, 100, 50, 0];
        let mut target = [9u8; 8];

        stamp_row(&mut target, &thumbnail);

        assert_eq!(target, [10, 20, 30, 255, 0, 0, 0, 255]);
    }
}
