//! Build a gradient source and a bitmap destination, then dispatch one
//! rectangle through a backend that just reports what it was handed.
//!
//! Run with `cargo run --example dispatch_trace`.

use pigment::{
    Color, ComposeBackend, CompositeOp, CompositeRequest, Fixed, GradientStop, Image, PixelFormat,
    PointFixed, Repeat, composite_rect,
};

struct ReportingBackend;

impl ComposeBackend for ReportingBackend {
    fn compose(&mut self, request: &CompositeRequest<'_>, scratch: &mut [u32]) {
        println!(
            "compose {:?}: {}x{} at {:?}, mask: {}, scratch: {} words",
            request.op,
            request.width,
            request.height,
            request.dest_origin,
            request.mask.is_some(),
            scratch.len(),
        );
    }
}

fn main() -> pigment::PigmentResult<()> {
    tracing_subscriber::fmt::init();

    let stops = [
        GradientStop {
            position: Fixed::ZERO,
            color: Color::new(0xffff, 0xffff, 0, 0),
        },
        GradientStop {
            position: Fixed::ONE,
            color: Color::new(0xffff, 0, 0, 0xffff),
        },
    ];
    let src = Image::linear_gradient(
        PointFixed::new(Fixed::ZERO, Fixed::ZERO),
        PointFixed::new(Fixed::from_int(256), Fixed::ZERO),
        &stops,
    )?;
    src.set_repeat(Repeat::Pad);

    let dest = Image::bitmap(PixelFormat::A8R8G8B8, 256, 256, None, 1024)?;

    let mut backend = ReportingBackend;
    // Narrow enough for the stack scratch.
    composite_rect(
        &mut backend,
        CompositeOp::Over,
        &src,
        None,
        &dest,
        (0, 0),
        (0, 0),
        (0, 0),
        256,
        256,
    )?;
    // Wide enough to force the heap scratch (visible with RUST_LOG=trace).
    composite_rect(
        &mut backend,
        CompositeOp::Over,
        &src,
        None,
        &dest,
        (0, 0),
        (0, 0),
        (0, 0),
        4096,
        1,
    )?;

    Ok(())
}
