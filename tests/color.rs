mod tests {
    use word_clock_composer::color::{BLACK, Rgb, blend_colors, lerp_colors, rgb_from_u32};
    use word_clock_composer::word_clock::DEFAULT_ON_COLOR;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );

        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_lerp_colors_hits_both_ends() {
        assert_eq!(lerp_colors(DEFAULT_ON_COLOR, BLACK, 0.0), DEFAULT_ON_COLOR);
        assert_eq!(lerp_colors(DEFAULT_ON_COLOR, BLACK, 1.0), BLACK);
        assert_eq!(lerp_colors(BLACK, WHITE, 0.5), blend_colors(BLACK, WHITE, 128));
    }

    #[test]
    fn test_lerp_colors_clamps_fraction() {
        assert_eq!(lerp_colors(RED, BLUE, -1.0), RED);
        assert_eq!(lerp_colors(RED, BLUE, 2.0), BLUE);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x5A503C), DEFAULT_ON_COLOR);
        assert_eq!(rgb_from_u32(0xFF0000), RED);
    }
}
