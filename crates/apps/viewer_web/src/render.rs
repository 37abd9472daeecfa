//! Canvas2D drawing of the scene.
//!
//! Spheres are drawn as discs, far to near. Markers on the far side of the
//! globe are culled against the globe's horizon.

use foundation::math::Vec3;
use foundation::math::precision::stable_total_cmp_f64;
use runtime::viewport::Viewport;
use scene::World;
use scene::camera::OrbitCamera;
use scene::components::Shape3D;
use viewer::GLOBE_RADIUS;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn set_fill_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(value),
    );
}

/// Sizes the canvas backing store for `viewport`.
pub fn fit_canvas(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    viewport: Viewport,
) -> Result<(), JsValue> {
    let (w, h) = viewport.physical_size();
    canvas.set_width(w);
    canvas.set_height(h);
    ctx.set_transform(viewport.pixel_ratio, 0.0, 0.0, viewport.pixel_ratio, 0.0, 0.0)
}

/// Whether `point` on or above the globe faces the camera.
fn faces_camera(point: Vec3, eye: Vec3) -> bool {
    point.dot(eye) >= GLOBE_RADIUS * GLOBE_RADIUS
}

pub fn draw_world(
    ctx: &CanvasRenderingContext2d,
    world: &World,
    camera: &OrbitCamera,
    viewport: Viewport,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    let mut discs = Vec::new();
    for (entity, transform, drawable) in world.drawables_3d() {
        let Shape3D::Sphere { radius } = drawable.shape;
        let p = transform.position;
        // The globe is centered on the origin; everything else sits on it.
        if p.length() > 0.0 && !faces_camera(p, camera.eye) {
            continue;
        }
        let Some((nx, ny, depth)) = camera.project_to_ndc(p) else {
            continue;
        };
        let r_px = camera.screen_radius(radius * transform.scale, depth, viewport.height);
        let x = (nx + 1.0) * 0.5 * viewport.width;
        let y = (1.0 - ny) * 0.5 * viewport.height;
        discs.push((depth, entity.index(), x, y, r_px.max(1.0), drawable.color.to_css()));
    }

    discs.sort_by(|a, b| stable_total_cmp_f64(b.0, a.0).then_with(|| a.1.cmp(&b.1)));

    for (_, _, x, y, r, color) in discs {
        ctx.begin_path();
        ctx.arc(x, y, r, 0.0, std::f64::consts::TAU)?;
        set_fill_style(ctx, &color);
        ctx.fill();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::faces_camera;
    use foundation::math::{Vec3, geodesy};

    #[test]
    fn far_side_markers_are_culled() {
        let eye = Vec3::new(0.0, 0.0, 2.0);
        assert!(faces_camera(geodesy::project(0.0, -90.0, 1.0), eye));
        assert!(!faces_camera(geodesy::project(0.0, 90.0, 1.0), eye));
    }
}
