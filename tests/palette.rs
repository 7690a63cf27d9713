use pixel_paint::palette::DEFAULT_COLORS;
use pixel_paint::{Color, Palette};

#[test]
fn a_new_palette_offers_exactly_the_defaults() {
    let palette = Palette::new();
    let colors = palette.colors();

    assert_eq!(colors.len(), DEFAULT_COLORS.len());
    for (color, token) in colors.iter().zip(DEFAULT_COLORS) {
        assert_eq!(color.as_str(), token);
    }
    assert!(palette.custom_colors().is_empty());
}

#[test]
fn custom_colors_follow_the_defaults_in_insertion_order() {
    let mut palette = Palette::new();
    assert!(palette.add_custom(Color::new("#123456")));
    assert!(palette.add_custom(Color::new("#ABCDEF")));

    let colors = palette.colors();
    assert_eq!(colors.len(), DEFAULT_COLORS.len() + 2);
    assert_eq!(colors[DEFAULT_COLORS.len()].as_str(), "#123456");
    assert_eq!(colors[DEFAULT_COLORS.len() + 1].as_str(), "#ABCDEF");
}

#[test]
fn a_default_color_cannot_be_added_as_custom() {
    let mut palette = Palette::new();
    assert!(!palette.add_custom(Color::black()));
    assert!(!palette.add_custom(Color::new("#FF00FF")));
    assert!(palette.custom_colors().is_empty());
}

#[test]
fn duplicate_custom_colors_are_rejected() {
    let mut palette = Palette::new();
    assert!(palette.add_custom(Color::new("#123456")));
    assert!(!palette.add_custom(Color::new("#123456")));
    assert_eq!(palette.custom_colors().len(), 1);
}

#[test]
fn only_custom_colors_can_be_removed() {
    let mut palette = Palette::new();
    palette.add_custom(Color::new("#123456"));

    // Defaults stay put
    assert!(!palette.remove_custom(&Color::black()));
    assert_eq!(palette.colors().len(), DEFAULT_COLORS.len() + 1);

    assert!(palette.remove_custom(&Color::new("#123456")));
    assert!(!palette.remove_custom(&Color::new("#123456")));
    assert_eq!(palette.colors().len(), DEFAULT_COLORS.len());
}
