use folio_core::palette::rgba_css;
use folio_core::{DisplayList, LineDraw, PointDraw, Viewport};
use std::f64::consts::TAU;
use web_sys as web;

/// Paint a display list in CSS pixels; the transform absorbs the device pixel ratio.
pub fn paint(ctx: &web::CanvasRenderingContext2d, viewport: &Viewport, list: &DisplayList) {
    let dpr = viewport.dpr as f64;
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

    for line in &list.lines {
        paint_line(ctx, line);
    }
    for point in &list.points {
        paint_point(ctx, point);
    }
}

#[allow(deprecated)]
fn set_stroke_gradient(ctx: &web::CanvasRenderingContext2d, g: &web::CanvasGradient) {
    ctx.set_stroke_style(g);
}

#[allow(deprecated)]
fn set_fill_gradient(ctx: &web::CanvasRenderingContext2d, g: &web::CanvasGradient) {
    ctx.set_fill_style(g);
}

fn paint_line(ctx: &web::CanvasRenderingContext2d, l: &LineDraw) {
    let (x0, y0) = (l.from.x as f64, l.from.y as f64);
    let (x1, y1) = (l.to.x as f64, l.to.y as f64);
    let g = ctx.create_linear_gradient(x0, y0, x1, y1);
    let _ = g.add_color_stop(0.0, &rgba_css(l.from_color, l.opacity));
    let _ = g.add_color_stop(1.0, &rgba_css(l.to_color, l.opacity));
    set_stroke_gradient(ctx, &g);
    ctx.set_line_width(l.width as f64);
    ctx.begin_path();
    ctx.move_to(x0, y0);
    ctx.line_to(x1, y1);
    ctx.stroke();
}

fn fill_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    if ctx.arc(x, y, r, 0.0, TAU).is_ok() {
        ctx.fill();
    }
}

fn paint_point(ctx: &web::CanvasRenderingContext2d, p: &PointDraw) {
    let (x, y, r) = (p.center.x as f64, p.center.y as f64, p.radius as f64);

    // halo
    if p.glow > 0.0 {
        let halo = r * (2.5 + 2.0 * p.glow as f64);
        if let Ok(g) = ctx.create_radial_gradient(x, y, 0.0, x, y, halo) {
            let _ = g.add_color_stop(0.0, &rgba_css(p.color, 0.45 * p.glow * p.opacity));
            let _ = g.add_color_stop(1.0, &rgba_css(p.color, 0.0));
            set_fill_gradient(ctx, &g);
            fill_circle(ctx, x, y, halo);
        }
    }

    // body
    match ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
        Ok(g) => {
            let _ = g.add_color_stop(0.0, &rgba_css(p.color, p.opacity));
            let _ = g.add_color_stop(1.0, &rgba_css(p.color, p.opacity * 0.35));
            set_fill_gradient(ctx, &g);
        }
        Err(_) => ctx.set_fill_style_str(&rgba_css(p.color, p.opacity)),
    }
    fill_circle(ctx, x, y, r);

    if let Some(core) = p.core {
        ctx.set_fill_style_str(&rgba_css(core, p.opacity));
        fill_circle(ctx, x, y, r * 0.4);
    }
}
