//! Stateless shape primitives.
//!
//! Each function emits the outline of one shape into a [`DrawContext`].
//! [`ellipse`] only appends segments to the current path; the polygon
//! primitives begin and close their own path. None of them paint except
//! [`arrowhead`], so callers decide how to fill and stroke.

use crate::{
    color::Color,
    draw::DrawContext,
    geometry::{Point, Size},
};

/// Control-point offset ratio for approximating a quarter circle with one
/// cubic Bézier segment.
pub const KAPPA: f32 = 0.552_284_8;

/// Which of the two parallel sides of a trapezoid is the long one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapezoidOrientation {
    WideTop,
    WideBottom,
}

/// Appends an ellipse inscribed in the rectangle at `topleft` with `size`.
///
/// The outline starts and ends at the middle of the left side and runs
/// clockwise through four cubic Bézier arcs.
pub fn ellipse(ctx: &mut dyn DrawContext, topleft: Point, size: Size) {
    let (x, y) = (topleft.x(), topleft.y());
    let (w, h) = (size.width(), size.height());

    let ox = (w / 2.0) * KAPPA;
    let oy = (h / 2.0) * KAPPA;
    let xe = x + w;
    let ye = y + h;
    let xm = x + w / 2.0;
    let ym = y + h / 2.0;

    ctx.move_to(Point::new(x, ym));
    ctx.bezier_curve_to(
        Point::new(x, ym - oy),
        Point::new(xm - ox, y),
        Point::new(xm, y),
    );
    ctx.bezier_curve_to(
        Point::new(xm + ox, y),
        Point::new(xe, ym - oy),
        Point::new(xe, ym),
    );
    ctx.bezier_curve_to(
        Point::new(xe, ym + oy),
        Point::new(xm + ox, ye),
        Point::new(xm, ye),
    );
    ctx.bezier_curve_to(
        Point::new(xm - ox, ye),
        Point::new(x, ym + oy),
        Point::new(x, ym),
    );
}

/// Begins and closes a hexagon centered on `center`, bounded by `size`.
///
/// The left and right tips sit at mid-height; the slanted corners are inset
/// by a third of the height.
pub fn hexagon(ctx: &mut dyn DrawContext, center: Point, size: Size) {
    let (w, h) = (size.width(), size.height());
    let left = center.x() - w / 2.0;
    let top = center.y() - h / 2.0;
    let segment = h / 3.0;

    ctx.begin_path();
    ctx.move_to(Point::new(left, center.y()));
    ctx.line_to(Point::new(left + segment, top));
    ctx.line_to(Point::new(left + w - segment, top));
    ctx.line_to(Point::new(left + w, center.y()));
    ctx.line_to(Point::new(left + w - segment, top + h));
    ctx.line_to(Point::new(left + segment, top + h));
    ctx.line_to(Point::new(left, center.y()));
    ctx.close_path();
}

/// Begins and closes a trapezoid in the rectangle at `topleft` with `size`.
///
/// The short side is inset by the height on both ends.
pub fn trapezoid(
    ctx: &mut dyn DrawContext,
    topleft: Point,
    size: Size,
    orientation: TrapezoidOrientation,
) {
    let (x, y) = (topleft.x(), topleft.y());
    let (w, h) = (size.width(), size.height());

    ctx.begin_path();
    match orientation {
        TrapezoidOrientation::WideTop => {
            ctx.move_to(Point::new(x, y));
            ctx.line_to(Point::new(x + w, y));
            ctx.line_to(Point::new(x + w - h, y + h));
            ctx.line_to(Point::new(x + h, y + h));
            ctx.line_to(Point::new(x, y));
        }
        TrapezoidOrientation::WideBottom => {
            ctx.move_to(Point::new(x, y + h));
            ctx.line_to(Point::new(x + w, y + h));
            ctx.line_to(Point::new(x + w - h, y));
            ctx.line_to(Point::new(x + h, y));
            ctx.line_to(Point::new(x, y + h));
        }
    }
    ctx.close_path();
}

/// Begins and closes an octagon in the rectangle at `topleft` with `size`.
///
/// Corners are cut by a third of the height on both axes.
pub fn octagon(ctx: &mut dyn DrawContext, topleft: Point, size: Size) {
    let (x, y) = (topleft.x(), topleft.y());
    let (w, h) = (size.width(), size.height());
    let segment = h / 3.0;

    ctx.begin_path();
    ctx.move_to(Point::new(x, y + segment));
    ctx.line_to(Point::new(x + segment, y));
    ctx.line_to(Point::new(x + w - segment, y));
    ctx.line_to(Point::new(x + w, y + segment));
    ctx.line_to(Point::new(x + w, y + 2.0 * segment));
    ctx.line_to(Point::new(x + w - segment, y + h));
    ctx.line_to(Point::new(x + segment, y + h));
    ctx.line_to(Point::new(x, y + 2.0 * segment));
    ctx.line_to(Point::new(x, y + segment));
    ctx.close_path();
}

/// Begins and closes a downward-pointing triangle: the base spans the top
/// side and the tip sits at the bottom center.
pub fn triangle(ctx: &mut dyn DrawContext, topleft: Point, size: Size) {
    let (x, y) = (topleft.x(), topleft.y());
    let (w, h) = (size.width(), size.height());

    ctx.begin_path();
    ctx.move_to(Point::new(x, y));
    ctx.line_to(Point::new(x + w / 2.0, y + h));
    ctx.line_to(Point::new(x + w, y));
    ctx.line_to(Point::new(x, y));
    ctx.close_path();
}

/// Fills an arrowhead whose tip sits on `to`, pointing along `to - from`.
///
/// The triangle is drawn in a local frame translated to `to` and rotated to
/// the segment direction; `size` is half the base width and half the depth.
/// The transform is restored before returning.
pub fn arrowhead(ctx: &mut dyn DrawContext, from: Point, to: Point, size: f32, color: Color) {
    ctx.save();
    ctx.translate(to);
    ctx.rotate(to.sub_point(from).angle());

    ctx.begin_path();
    ctx.move_to(Point::new(0.0, 0.0));
    ctx.line_to(Point::new(-2.0 * size, -size));
    ctx.line_to(Point::new(-2.0 * size, size));
    ctx.close_path();
    ctx.fill(color);
    ctx.restore();
}
