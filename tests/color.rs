mod tests {
    use myrtio_night_light::color::{Rgb, hsv_to_rgb, normalize_hue};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn channel_distance(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(390.0), 30.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert!(normalize_hue(-0.000_001) < 360.0);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), RED);
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), GREEN);
        assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), BLUE);
        assert_eq!(hsv_to_rgb(360.0, 100.0, 100.0), RED);
        assert_eq!(hsv_to_rgb(60.0, 100.0, 100.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 100.0, 100.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 100.0, 100.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_sector_adjustment() {
        // Halfway through each sector the moving channel sits at 50%
        assert_eq!(hsv_to_rgb(30.0, 100.0, 100.0), Rgb::new(255, 128, 0));
        assert_eq!(hsv_to_rgb(90.0, 100.0, 100.0), Rgb::new(128, 255, 0));
        assert_eq!(hsv_to_rgb(150.0, 100.0, 100.0), Rgb::new(0, 255, 128));
        assert_eq!(hsv_to_rgb(210.0, 100.0, 100.0), Rgb::new(0, 128, 255));
        assert_eq!(hsv_to_rgb(270.0, 100.0, 100.0), Rgb::new(128, 0, 255));
        assert_eq!(hsv_to_rgb(330.0, 100.0, 100.0), Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_grayscale_without_saturation() {
        for value in 0..=100u8 {
            let expected = ((u32::from(value) * 255 + 50) / 100) as u8;
            for hue in [0.0, 45.0, 120.0, 200.0, 359.0] {
                let color = hsv_to_rgb(hue, 0.0, f32::from(value));
                assert_eq!(color, Rgb::new(expected, expected, expected), "value {value}");
            }
        }
        assert_eq!(hsv_to_rgb(0.0, 0.0, 50.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_black_without_value() {
        for saturation in [0.0, 10.0, 50.0, 100.0] {
            for hue in [0.0, 60.0, 180.0, 300.0, 360.0] {
                assert_eq!(hsv_to_rgb(hue, saturation, 0.0), BLACK);
            }
        }
    }

    #[test]
    fn test_hue_periodicity() {
        for hue in (0..360).step_by(7) {
            let hue = hue as f32;
            for (saturation, value) in [(100.0, 100.0), (10.0, 50.0), (65.0, 30.0)] {
                assert_eq!(
                    hsv_to_rgb(hue, saturation, value),
                    hsv_to_rgb(hue + 360.0, saturation, value)
                );
                assert_eq!(
                    hsv_to_rgb(hue, saturation, value),
                    hsv_to_rgb(hue - 360.0, saturation, value)
                );
            }
        }
    }

    #[test]
    fn test_sector_boundaries_are_continuous() {
        for boundary in [60.0, 120.0, 180.0, 240.0, 300.0, 360.0] {
            for (saturation, value) in [(100.0, 100.0), (40.0, 80.0)] {
                let below = hsv_to_rgb(boundary - 0.001, saturation, value);
                let at = hsv_to_rgb(boundary, saturation, value);
                assert!(
                    channel_distance(below, at) <= 1,
                    "boundary {boundary}: {below:?} vs {at:?}"
                );
            }
        }
    }

    #[test]
    fn test_night_light_defaults() {
        assert_eq!(hsv_to_rgb(360.0, 10.0, 50.0), Rgb::new(128, 115, 115));
        assert_eq!(hsv_to_rgb(120.0, 10.0, 50.0), Rgb::new(115, 128, 115));
        assert_eq!(hsv_to_rgb(120.0, 10.0, 0.0), BLACK);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 200.0), RED);
        assert_eq!(hsv_to_rgb(0.0, -50.0, 100.0), Rgb::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(0.0, 100.0, -20.0), BLACK);
        assert_eq!(hsv_to_rgb(f32::NAN, 100.0, 100.0), RED);
    }
}
