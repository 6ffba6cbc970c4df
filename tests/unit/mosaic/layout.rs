//! Tests for mosaic geometry and the canvas size guard

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbImage};
    use mosaicmaker::MosaicError;
    use mosaicmaker::io::configuration::MAX_CANVAS_PIXELS;
    use mosaicmaker::mosaic::{MosaicLayout, TileSize};

    fn tile(size: u32) -> TileSize {
        TileSize::new(size).unwrap()
    }

    // Tests canvas dimensions are the source scaled by the tile size
    // Verified by swapping width and height
    #[test]
    fn test_canvas_dimensions() {
        let layout = MosaicLayout::new(3, 5, tile(4)).unwrap();

        assert_eq!(layout.source_dimensions(), (3, 5));
        assert_eq!(layout.canvas_dimensions(), (12, 20));
        assert_eq!(layout.canvas_pixels(), 240);
        assert_eq!(layout.canvas_stride(), 48);
        assert_eq!(layout.band_len(), 192);
        assert_eq!(layout.tile(), tile(4));
    }

    // Tests the smallest mosaic is a single 2x2 cell
    // Verified by allowing empty canvases
    #[test]
    fn test_single_pixel_layout() {
        let layout = MosaicLayout::new(1, 1, tile(2)).unwrap();
        assert_eq!(layout.canvas_dimensions(), (2, 2));
    }

    // Tests layouts are derived from decoded images
    // Verified by reading dimensions transposed
    #[test]
    fn test_for_image() {
        let source = DynamicImage::ImageRgb8(RgbImage::new(7, 2));
        let layout = MosaicLayout::for_image(&source, tile(3)).unwrap();

        assert_eq!(layout.canvas_dimensions(), (21, 6));
    }

    // Tests empty sources are rejected
    // Verified by removing the emptiness check
    #[test]
    fn test_empty_source_rejected() {
        assert!(matches!(
            MosaicLayout::new(0, 10, tile(2)),
            Err(MosaicError::InvalidSourceData { .. })
        ));
        assert!(MosaicLayout::new(10, 0, tile(2)).is_err());
    }

    // Tests canvas sides that overflow u32 are rejected
    // Verified by using wrapping multiplication
    #[test]
    fn test_overflow_rejected() {
        let result = MosaicLayout::with_limit(u32::MAX, 1, tile(2), u64::MAX);

        assert!(matches!(result, Err(MosaicError::CanvasTooLarge { .. })));
    }

    // Tests the limit is inclusive and enforced
    // Verified by changing comparison to greater-or-equal
    #[test]
    fn test_pixel_limit() {
        assert!(MosaicLayout::with_limit(10, 10, tile(10), 10_000).is_ok());

        match MosaicLayout::with_limit(10, 10, tile(10), 9_999) {
            Err(MosaicError::CanvasTooLarge {
                source_width,
                source_height,
                tile_size,
                limit,
            }) => {
                assert_eq!((source_width, source_height), (10, 10));
                assert_eq!(tile_size, 10);
                assert_eq!(limit, 9_999);
            }
            other => unreachable!("Expected CanvasTooLarge, got {other:?}"),
        }
    }

    // Tests the default limit stops quadratic blow-up from large tiles
    // Verified by raising the default limit
    #[test]
    fn test_default_limit_applies() {
        assert!(MosaicLayout::new(1024, 1024, tile(16)).is_ok());

        let result = MosaicLayout::new(1024, 1024, tile(17));
        assert!(matches!(
            result,
            Err(MosaicError::CanvasTooLarge {
                limit: MAX_CANVAS_PIXELS,
                ..
            })
        ));
    }

    // Tests cells tile the canvas without gaps or overlaps
    // Verified by offsetting cell origins by one pixel
    #[test]
    fn test_cell_origins_tile_canvas() {
        let layout = MosaicLayout::new(4, 3, tile(5)).unwrap();
        let (canvas_width, canvas_height) = layout.canvas_dimensions();
        let mut coverage = vec![0u8; (canvas_width * canvas_height) as usize];

        for y in 0..3 {
            for x in 0..4 {
                let (origin_x, origin_y) = layout.cell_origin(x, y).unwrap();
                for dy in 0..5 {
                    for dx in 0..5 {
                        let index = ((origin_y + dy) * canvas_width + origin_x + dx) as usize;
                        coverage[index] += 1;
                    }
                }
            }
        }

        assert!(coverage.iter().all(|&count| count == 1));
        assert_eq!(layout.cell_origin(4, 0), None);
        assert_eq!(layout.cell_origin(0, 3), None);
    }
}
