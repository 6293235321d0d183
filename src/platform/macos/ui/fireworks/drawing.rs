//! Particle drawing for the fireworks view.

use crate::model::Particle;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSPoint, NSRect, NSSize};

// NSCompositingOperationCopy
const COMPOSITE_COPY: usize = 1;

#[link(name = "AppKit", kind = "framework")]
extern "C" {
    fn NSRectFillUsingOperation(rect: NSRect, op: usize);
}

/// Erase the whole view to transparent.
///
/// # Safety
/// Must be called inside `drawRect:`.
pub unsafe fn clear(bounds: NSRect) {
    let clear: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![clear, set];
    NSRectFillUsingOperation(bounds, COMPOSITE_COPY);
}

/// Bounding box of the particle's oval.
fn particle_rect(p: &Particle) -> NSRect {
    let half = p.size / 2.0;
    NSRect::new(NSPoint::new(p.x - half, p.y - half), NSSize::new(p.size, p.size))
}

/// Draw every live particle.
///
/// # Safety
/// Must be called inside `drawRect:`.
pub unsafe fn draw_particles(particles: &[Particle]) {
    let ns_color = get_class("NSColor");
    let ns_bezier = get_class("NSBezierPath");

    for p in particles.iter().filter(|p| p.opacity > 0.0) {
        let (r, g, b) = p.color;
        let color: id = msg_send![
            ns_color,
            colorWithCalibratedRed: r,
            green: g,
            blue: b,
            alpha: p.opacity.min(1.0)
        ];
        let _: () = msg_send![color, set];
        let oval: id = msg_send![ns_bezier, bezierPathWithOvalInRect: particle_rect(p)];
        let _: () = msg_send![oval, fill];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_centred_on_particle() {
        let p = Particle {
            x: 100.0,
            y: 50.0,
            vx: 0.0,
            vy: 0.0,
            color: (1.0, 0.0, 0.0),
            size: 8.0,
            opacity: 1.0,
        };
        let rect = particle_rect(&p);
        assert_eq!(rect.origin.x, 96.0);
        assert_eq!(rect.origin.y, 46.0);
        assert_eq!(rect.size.width, 8.0);
    }
}
