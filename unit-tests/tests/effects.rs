mod tests {
    use myrtio_presence::color::{BLACK, BLUE, Hsv, fill_rainbow, hsv2rgb};
    use myrtio_presence::{FadeOutEffect, FrameEffect, PixelBuffer, RainbowEffect, Rgb, WipeInEffect};

    fn lit(frame: &PixelBuffer<60>) -> Vec<usize> {
        (0..60).filter(|&i| frame.pixel(i) != Some(BLACK)).collect()
    }

    #[test]
    fn test_wipe_in_converges_on_center() {
        let mut frame: PixelBuffer<60> = PixelBuffer::new(255);
        let mut wipe = WipeInEffect::new(BLUE);

        let mut steps = 0;
        while wipe.next_frame(&mut frame) {
            let expected: Vec<usize> = (0..=steps).chain(59 - steps..60).collect();
            assert_eq!(lit(&frame), expected, "step {}", steps);
            steps += 1;
        }

        assert_eq!(steps, 30);
        assert_eq!(WipeInEffect::steps(60), 30);
        assert!(frame.pixels().iter().all(|pixel| *pixel == BLUE));
        // Finished effects stay finished
        assert!(!wipe.next_frame(&mut frame));
    }

    #[test]
    fn test_wipe_in_odd_length_ends_with_center_pixel() {
        let mut frame: PixelBuffer<5> = PixelBuffer::new(255);
        let mut wipe = WipeInEffect::new(BLUE);

        assert!(wipe.next_frame(&mut frame));
        assert!(wipe.next_frame(&mut frame));
        assert_eq!(frame.pixel(2), Some(BLACK));
        assert!(wipe.next_frame(&mut frame));
        assert_eq!(frame.pixel(2), Some(BLUE));
        assert!(!wipe.next_frame(&mut frame));
    }

    #[test]
    fn test_wipe_in_on_empty_strip() {
        let mut frame: PixelBuffer<0> = PixelBuffer::new(255);
        let mut wipe = WipeInEffect::new(BLUE);
        assert!(!wipe.next_frame(&mut frame));
    }

    #[test]
    fn test_wipe_in_reset() {
        let mut frame: PixelBuffer<2> = PixelBuffer::new(255);
        let mut wipe = WipeInEffect::new(BLUE);
        assert!(wipe.next_frame(&mut frame));
        assert!(!wipe.next_frame(&mut frame));
        FrameEffect::<2>::reset(&mut wipe);
        assert!(wipe.next_frame(&mut frame));
    }

    fn fade_levels(from: u8, step: u8) -> Vec<u8> {
        let mut frame: PixelBuffer<1> = PixelBuffer::new(from);
        let mut fade = FadeOutEffect::new(from, step);
        let mut levels = Vec::new();
        while fade.next_frame(&mut frame) {
            levels.push(frame.brightness());
        }
        levels
    }

    #[test]
    fn test_fade_out_levels() {
        assert_eq!(fade_levels(80, 10), vec![80, 70, 60, 50, 40, 30, 20, 10, 0]);
        assert_eq!(fade_levels(25, 10), vec![25, 15, 5, 0]);
        assert_eq!(fade_levels(0, 10), vec![0]);
        assert_eq!(fade_levels(255, 0), vec![255, 0]);
        assert_eq!(fade_levels(3, 255), vec![3, 0]);
    }

    #[test]
    fn test_fade_out_keeps_colors() {
        let mut frame: PixelBuffer<3> = PixelBuffer::new(80);
        frame.fill(BLUE);
        let mut fade = FadeOutEffect::new(80, 10);
        while fade.next_frame(&mut frame) {}
        assert_eq!(frame.brightness(), 0);
        assert_eq!(frame.pixels(), &[BLUE; 3]);
        assert_eq!(frame.output(), [BLACK; 3]);
    }

    #[test]
    fn test_rainbow_advances_one_hue_per_frame() {
        let mut frame: PixelBuffer<10> = PixelBuffer::new(255);
        let mut rainbow = RainbowEffect::new(7).with_hue(250);

        for frames in 1..=300u32 {
            assert!(rainbow.next_frame(&mut frame));
            assert_eq!(u32::from(rainbow.hue()), (250 + frames) % 256);
        }
    }

    #[test]
    fn test_rainbow_frame_depends_only_on_frame_count() {
        let mut frame: PixelBuffer<10> = PixelBuffer::new(255);
        let mut rainbow = RainbowEffect::new(7).with_hue(3);
        for _ in 0..20 {
            rainbow.next_frame(&mut frame);
        }

        // The 20th frame starts at hue 3 + 19
        let mut expected = [Rgb::default(); 10];
        fill_rainbow(&mut expected, 22, 7);
        assert_eq!(frame.pixels(), &expected);
        assert_eq!(frame.pixel(0), Some(hsv2rgb(Hsv { hue: 22, sat: 255, val: 255 })));

        // Reset returns to the configured phase, not to zero
        FrameEffect::<10>::reset(&mut rainbow);
        assert_eq!(rainbow.hue(), 3);
    }
}
