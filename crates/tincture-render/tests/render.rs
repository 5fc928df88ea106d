//! Rendering a real `FieldStore` into strided frames.

use proptest::prelude::*;
use tincture_core::{LayerId, Rgb};
use tincture_field::{FieldStore, GridShape, Layer, LayerTable};
use tincture_render::{normalize_color, Frame, FrameRenderer, PixelLayout, BYTES_PER_PIXEL};
use tincture_test_utils::poke;

fn coloured_store(w: u32, h: u32, colors: &[Rgb]) -> FieldStore {
    let mut table = LayerTable::new();
    for (i, &color) in colors.iter().enumerate() {
        table
            .push(Layer {
                supplier_id: tincture_core::SupplierId(i as u32),
                name: format!("s{i}"),
                color,
                strength: 1.0,
            })
            .unwrap();
    }
    FieldStore::new(GridShape::new(w, h).unwrap(), table).unwrap()
}

#[test]
fn padding_bytes_stay_zero() {
    let store = coloured_store(3, 2, &[Rgb::new(255, 0, 0)]);
    let mut frame = Frame::new(PixelLayout::with_stride(3, 2, 20).unwrap());
    FrameRenderer::default().render_store(&store, &mut frame);

    for y in 0..2usize {
        let row = &frame.as_bytes()[y * 20..(y + 1) * 20];
        let (pixels, padding) = row.split_at(3 * BYTES_PER_PIXEL);
        assert!(pixels.chunks(4).all(|px| px == [76, 76, 76, 255]));
        assert!(padding.iter().all(|&b| b == 0));
    }
}

#[test]
fn two_layers_blend_additively() {
    let mut store = coloured_store(2, 2, &[Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);
    poke(&mut store, 0, 1, 0, 0.5);
    poke(&mut store, 1, 1, 0, 0.5);
    let mut frame = Frame::new(PixelLayout::tight(2, 2).unwrap());
    FrameRenderer::new(0.0).unwrap().render_store(&store, &mut frame);
    // r = 0.5, g = 0, b = 0.5 → bytes truncated from 127.5
    assert_eq!(frame.pixel(1, 0), Some([127, 0, 127, 255]));
}

#[test]
fn overlapping_layers_rescaled_not_clipped() {
    let mut store = coloured_store(1, 1, &[Rgb::new(255, 255, 0), Rgb::new(255, 0, 0)]);
    poke(&mut store, 0, 0, 0, 1.0);
    poke(&mut store, 1, 0, 0, 1.0);
    let mut frame = Frame::new(PixelLayout::tight(1, 1).unwrap());
    FrameRenderer::new(0.0).unwrap().render_store(&store, &mut frame);
    // r = 2, g = 1 → rescaled to r = 1, g = 0.5
    assert_eq!(frame.pixel(0, 0), Some([0, 127, 255, 255]));
}

#[test]
fn render_reads_current_buffer() {
    let mut store = coloured_store(2, 2, &[Rgb::new(0, 255, 0)]);
    poke(&mut store, 0, 0, 0, 1.0);
    store.swap();
    let mut frame = Frame::new(PixelLayout::tight(2, 2).unwrap());
    FrameRenderer::new(0.0).unwrap().render_store(&store, &mut frame);
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(store.get(LayerId(0), 0, 0).unwrap(), 0.0);
}

proptest! {
    #[test]
    fn rescale_preserves_channel_ratios(
        r in 0.0f64..5.0,
        g in 0.0f64..5.0,
        b in 0.0f64..5.0,
    ) {
        let max = r.max(g).max(b);
        prop_assume!(max > 1.0);
        let out = normalize_color([r, g, b], 0.0);
        let out_max = out[0].max(out[1]).max(out[2]);
        prop_assert!((out_max - 1.0).abs() < 1e-12);
        for (o, i) in out.iter().zip([r, g, b]) {
            prop_assert!((o * max - i).abs() < 1e-9);
        }
    }

    #[test]
    fn floored_channels_stay_in_unit_range(
        r in 0.0f64..10.0,
        g in 0.0f64..10.0,
        b in 0.0f64..10.0,
        floor in 0.0f64..=1.0,
    ) {
        for c in normalize_color([r, g, b], floor) {
            prop_assert!(c >= floor - 1e-12 && c <= 1.0 + 1e-12);
        }
    }
}
