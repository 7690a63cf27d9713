use pixel_paint::export::{
    animation_json, drawing_json, encode_png, render_frame, render_sheet, ExportError,
    ExportOptions,
};
use pixel_paint::geometry::Point;
use pixel_paint::{Color, Frame, GridSize};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn options(scale: u32) -> ExportOptions {
    ExportOptions {
        scale,
        background: None,
    }
}

fn two_by_two() -> Frame {
    let mut frame = Frame::blank(GridSize::new(2, 2));
    frame.set(p(0, 0), &Color::new("#FF0000"));
    frame.set(p(1, 1), &Color::black());
    frame
}

#[test]
fn render_scales_each_cell_to_a_block() {
    let img = render_frame(&two_by_two(), &options(3)).unwrap();
    assert_eq!((img.width(), img.height()), (6, 6));

    // Every pixel of the top-left block is the cell's color
    for dy in 0..3 {
        for dx in 0..3 {
            assert_eq!(img.get_pixel(dx, dy).0, [255, 0, 0, 255]);
        }
    }
    // Blank cells render as opaque white
    assert_eq!(img.get_pixel(5, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 255]);
}

#[test]
fn alpha_tokens_keep_their_alpha_channel() {
    let mut frame = Frame::blank(GridSize::new(1, 2));
    frame.set(p(0, 0), &Color::new("#FF000080"));
    frame.set(p(0, 1), &Color::new("#00000000"));

    let img = render_frame(&frame, &options(1)).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    // A fully transparent token leaves the canvas untouched
    assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0, 0]);
}

#[test]
fn background_option_fills_the_canvas_first() {
    let mut frame = Frame::blank(GridSize::new(1, 1));
    frame.set(p(0, 0), &Color::new("#00000000"));

    let opts = ExportOptions {
        scale: 2,
        background: Some(Color::new("#0000FF")),
    };
    let img = render_frame(&frame, &opts).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
}

#[test]
fn malformed_tokens_are_an_export_error() {
    let mut frame = Frame::blank(GridSize::new(2, 1));
    frame.set(p(1, 0), &Color::new("red"));

    let err = render_frame(&frame, &options(1)).unwrap_err();
    assert!(matches!(err, ExportError::InvalidColor(token) if token == "red"));

    let mut frame = Frame::blank(GridSize::new(1, 1));
    frame.set(p(0, 0), &Color::new("#12345"));
    assert!(render_frame(&frame, &options(1)).is_err());
}

#[test]
fn png_encoding_produces_a_png_document() {
    let bytes = encode_png(&two_by_two(), &options(4)).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
}

#[test]
fn sprite_sheet_lays_frames_out_horizontally() {
    let first = two_by_two();
    let mut second = Frame::blank(GridSize::new(2, 2));
    second.set(p(0, 0), &Color::new("#00FF00"));

    let sheet = render_sheet(&[first, second], &options(1)).unwrap();
    assert_eq!((sheet.width(), sheet.height()), (4, 2));
    assert_eq!(sheet.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(sheet.get_pixel(2, 0).0, [0, 255, 0, 255]);
}

#[test]
fn sheet_of_nothing_is_an_error() {
    assert!(matches!(
        render_sheet(&[], &options(1)),
        Err(ExportError::EmptyAnimation)
    ));
    assert!(matches!(
        animation_json(&[], &ExportOptions::default()),
        Err(ExportError::EmptyAnimation)
    ));
}

#[test]
fn drawing_json_carries_the_raw_tokens() {
    let json = drawing_json(&two_by_two(), &options(10)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["width"], 2);
    assert_eq!(value["height"], 2);
    assert_eq!(value["scale"], 10);
    assert_eq!(value["pixels"][0][0], "#FF0000");
    assert_eq!(value["pixels"][0][1], "#FFFFFF");
    assert_eq!(value["pixels"][1][1], "#000000");
    assert!(value["timestamp"].as_u64().is_some());
}

#[test]
fn animation_json_carries_every_frame_in_order() {
    let frames = vec![two_by_two(), Frame::blank(GridSize::new(2, 2))];
    let json = animation_json(&frames, &ExportOptions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["kind"], "animation");
    assert_eq!(value["frame_count"], 2);
    assert_eq!(value["frames"][0]["index"], 0);
    assert_eq!(value["frames"][0]["pixels"][0][0], "#FF0000");
    assert_eq!(value["frames"][1]["pixels"][0][0], "#FFFFFF");
}
