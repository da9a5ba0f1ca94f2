use super::*;

fn stops(n: usize) -> Vec<GradientStop> {
    (0..n)
        .map(|i| GradientStop {
            position: Fixed::from_f64(i as f64 / (n.max(2) - 1) as f64),
            color: Color::new(0xffff, 0, 0, 0),
        })
        .collect()
}

fn point(x: i16, y: i16) -> PointFixed {
    PointFixed::new(Fixed::from_int(x), Fixed::from_int(y))
}

#[test]
fn solid_fill_packs_by_truncation() {
    let image = Image::solid_fill(Color::new(0xffff, 0x8000, 0x4000, 0x2000));

    assert_eq!(image.kind(), ImageKindTag::Solid);
    image.with_kind(|kind| match kind {
        ImageKind::Solid(solid) => {
            assert_eq!(solid.color, 0xff80_4020);
            assert_eq!(solid.class(), SourceClass::Unknown);
        }
        _ => panic!("expected solid variant"),
    });
}

#[test]
fn every_constructor_yields_ref_count_one_and_default_attributes() {
    let images = [
        Image::solid_fill(Color::default()),
        Image::linear_gradient(point(0, 0), point(1, 0), &stops(2)).unwrap(),
        Image::radial_gradient(CircleFixed::default(), CircleFixed::default(), &stops(2)).unwrap(),
        Image::conical_gradient(point(0, 0), Fixed::ZERO, &stops(2)).unwrap(),
        Image::bitmap(PixelFormat::A8R8G8B8, 2, 2, None, 8).unwrap(),
    ];

    for image in &images {
        assert_eq!(image.ref_count(), 1);
        assert!(image.clip_region().is_empty());
        assert!(image.transform().is_none());
        assert_eq!(image.repeat(), Repeat::None);
        assert_eq!(image.filter(), FilterKind::Nearest);
        assert!(image.filter_params().is_empty());
        assert!(image.alpha_map().is_none());
        assert_eq!(image.alpha_origin(), (0, 0));
        assert!(!image.component_alpha());
        assert!(image.accessors().read.is_none());
        assert!(image.accessors().write.is_none());
    }
}

#[test]
fn linear_and_radial_require_two_stops_conical_accepts_one() {
    assert!(Image::linear_gradient(point(0, 0), point(1, 0), &stops(1)).is_err());
    assert!(
        Image::radial_gradient(CircleFixed::default(), CircleFixed::default(), &stops(1)).is_err()
    );

    // The conical constructor forwards any non-empty stop array.
    assert!(Image::conical_gradient(point(0, 0), Fixed::ZERO, &stops(1)).is_ok());
    assert!(Image::conical_gradient(point(0, 0), Fixed::ZERO, &[]).is_err());
}

#[test]
fn gradient_stops_are_independent_of_the_callers_array() {
    let mut original = stops(3);
    let image = Image::linear_gradient(point(0, 0), point(4, 0), &original).unwrap();

    let expected = original.clone();
    original[1].color = Color::new(0, 0x1234, 0, 0);
    original.clear();

    image.with_kind(|kind| match kind {
        ImageKind::Linear(linear) => assert_eq!(linear.gradient.stops(), expected.as_slice()),
        _ => panic!("expected linear variant"),
    });
}

#[test]
fn radial_constructor_precomputes_the_quadratic_coefficient() {
    let inner = CircleFixed::new(Fixed::ZERO, Fixed::ZERO, Fixed::ZERO);
    let outer = CircleFixed::new(Fixed::ZERO, Fixed::ZERO, Fixed::ONE);
    let image = Image::radial_gradient(inner, outer, &stops(2)).unwrap();

    image.with_kind(|kind| match kind {
        ImageKind::Radial(radial) => {
            assert_eq!(radial.c1, inner);
            assert_eq!(radial.c2, outer);
            assert_eq!(radial.coefficients.dr, 1.0);
            assert_eq!(radial.coefficients.a, -1.0);
        }
        _ => panic!("expected radial variant"),
    });
}

#[test]
fn bitmap_stores_stride_in_words() {
    let image = Image::bitmap(PixelFormat::A8R8G8B8, 3, 2, None, 16).unwrap();

    image.with_kind(|kind| match kind {
        ImageKind::Bitmap(bitmap) => {
            assert_eq!(bitmap.format(), PixelFormat::A8R8G8B8);
            assert_eq!(bitmap.width(), 3);
            assert_eq!(bitmap.height(), 2);
            assert_eq!(bitmap.stride_words(), 4);
            // Absent buffer: zero-filled stride_words * height allocation.
            assert_eq!(bitmap.bits(), [0u32; 8].as_slice());
            assert!(bitmap.palette().is_none());
        }
        _ => panic!("expected bitmap variant"),
    });
}

#[test]
fn bitmap_rejects_misaligned_strides_and_short_buffers() {
    assert!(Image::bitmap(PixelFormat::A8, 4, 4, None, 6).is_err());
    assert!(Image::bitmap(PixelFormat::A8, 4, 4, None, -4).is_err());
    assert!(Image::bitmap(PixelFormat::A8R8G8B8, -1, 4, None, 16).is_err());

    // 2 words per row, 2 rows: a 3-word buffer cannot back it.
    assert!(Image::bitmap(PixelFormat::A8R8G8B8, 2, 2, Some(vec![0; 3]), 8).is_err());
    assert!(Image::bitmap(PixelFormat::A8R8G8B8, 2, 2, Some(vec![0; 4]), 8).is_ok());
}

#[test]
fn bitmap_keeps_caller_supplied_words() {
    let words = vec![0xdead_beef, 1, 2, 3];
    let image = Image::bitmap(PixelFormat::X8R8G8B8, 2, 2, Some(words.clone()), 8).unwrap();

    image.with_kind(|kind| match kind {
        ImageKind::Bitmap(bitmap) => assert_eq!(bitmap.bits(), words.as_slice()),
        _ => panic!("expected bitmap variant"),
    });
}

#[test]
fn bitmap_pixels_are_writable_through_the_handle() {
    let image = Image::bitmap(PixelFormat::A8R8G8B8, 2, 2, None, 8).unwrap();

    image.with_kind_mut(|kind| match kind {
        ImageKind::Bitmap(bitmap) => bitmap.bits_mut()[3] = 7,
        _ => panic!("expected bitmap variant"),
    });

    image.with_kind(|kind| match kind {
        ImageKind::Bitmap(bitmap) => assert_eq!(bitmap.bits()[3], 7),
        _ => panic!("expected bitmap variant"),
    });
}

#[test]
fn solid_classification_can_be_refined_in_place() {
    let image = Image::solid_fill(Color::default());

    image.with_kind_mut(|kind| match kind {
        ImageKind::Solid(solid) => solid.set_class(SourceClass::Horizontal),
        _ => panic!("expected solid variant"),
    });

    image.with_kind(|kind| match kind {
        ImageKind::Solid(solid) => assert_eq!(solid.class(), SourceClass::Horizontal),
        _ => panic!("expected solid variant"),
    });
}

#[test]
fn acquire_release_are_symmetric() {
    let image = Image::solid_fill(Color::default());
    assert_eq!(image.ref_count(), 1);

    let alias = image.acquire();
    assert_eq!(image.ref_count(), 2);
    assert!(alias.ptr_eq(&image));

    alias.release();
    assert_eq!(image.ref_count(), 1);
}

#[test]
fn destruction_happens_exactly_at_the_nth_release() {
    // Observe destruction through the cascading alpha-map release: the
    // target's count drops back to one only when the owner actually dies.
    let target = Image::bitmap(PixelFormat::A8, 1, 1, None, 4).unwrap();
    let owner = Image::solid_fill(Color::default());
    owner.set_alpha_map(Some(&target), 0, 0).unwrap();
    assert_eq!(target.ref_count(), 2);

    let aliases: Vec<Image> = (0..4).map(|_| owner.acquire()).collect();
    assert_eq!(owner.ref_count(), 5);

    for alias in aliases {
        alias.release();
        assert_eq!(target.ref_count(), 2);
    }

    owner.release();
    assert_eq!(target.ref_count(), 1);
}

#[test]
fn pixel_format_bit_widths() {
    assert_eq!(PixelFormat::A8R8G8B8.bits_per_pixel(), 32);
    assert_eq!(PixelFormat::X8R8G8B8.bits_per_pixel(), 32);
    assert_eq!(PixelFormat::R5G6B5.bits_per_pixel(), 16);
    assert_eq!(PixelFormat::A8.bits_per_pixel(), 8);
    assert_eq!(PixelFormat::C8.bits_per_pixel(), 8);
    assert_eq!(PixelFormat::A1.bits_per_pixel(), 1);
}
