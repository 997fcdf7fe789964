// Watermark placement tests
// Sizing and anchoring rules checked through the public API

use batch_watermark::watermark::*;
use rstest::rstest;

fn dims(width: u32, height: u32) -> ImageDimensions {
    ImageDimensions { width, height }
}

#[rstest]
#[case(3000, 4000, 45)]
#[case(4000, 3000, 45)]
#[case(4000, 6000, 60)]
#[case(100, 100, 1)]
#[case(1920, 1080, 16)]
#[case(66, 1000, 0)]
fn test_font_size_is_one_and_a_half_percent_of_min_side(
    #[case] width: u32,
    #[case] height: u32,
    #[case] expected: u32,
) {
    assert_eq!(font_size_for(&dims(width, height)), expected);
}

#[test]
fn test_reference_placement_for_portrait_photo() {
    let placement = compute_placement(&dims(3000, 4000), &WatermarkSpec::default(), 300);

    assert_eq!(margin_pixels(&dims(3000, 4000), 0.03), 90);
    assert_eq!(placement.font_size, 45);
    assert_eq!(placement.position, PlacementPosition::new(2610, 3865));
}

#[test]
fn test_placement_is_deterministic() {
    let spec = WatermarkSpec::default();
    let first = compute_placement(&dims(4032, 3024), &spec, 512);
    for _ in 0..10 {
        assert_eq!(compute_placement(&dims(4032, 3024), &spec, 512), first);
    }
}

#[test]
fn test_wide_text_goes_negative_without_clamping() {
    let placement = compute_placement(&dims(200, 200), &WatermarkSpec::default(), 500);
    assert_eq!(placement.position.x, 200 - 500 - 6);
}

#[test]
fn test_clamping_is_opt_in() {
    let spec = WatermarkSpec {
        clamp_to_image: true,
        ..Default::default()
    };
    let placement = compute_placement(&dims(200, 200), &spec, 500);
    assert_eq!(placement.position.x, 0);
}

#[test]
fn test_text_fits_when_width_plus_two_margins_fits() {
    let image = dims(3000, 4000);
    let spec = WatermarkSpec::default();
    // 300 + 2 * 90 <= 3000
    let placement = compute_placement(&image, &spec, 300);
    let text_box = WatermarkDimensions {
        width: 300,
        height: placement.font_size,
    };
    assert!(is_fully_inside(&placement.position, &image, &text_box));
}

#[test]
fn test_measured_width_from_builtin_font_drives_anchor() {
    let font = builtin_font();
    let image = dims(3000, 4000);
    let width = text_advance(font, "© All rights reserved", 45.0);

    let placement = compute_placement(&image, &WatermarkSpec::default(), width);

    assert_eq!(placement.position.x, 3000 - width as i32 - 90);
    assert_eq!(placement.position.y, 3865);
}
