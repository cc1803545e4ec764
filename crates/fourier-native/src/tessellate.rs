//! Draw lists to triangle lists for the wgpu renderer.
//!
//! Everything becomes triangles in logical pixel space: strokes are quads of
//! the requested width, circles are rings of quads, discs are fans. A
//! `Clear` command drops whatever came before it and becomes the pass'
//! clear colour.

use fourier_core::{Color, DrawCommand, DrawList, Point};
use glam::Vec2;

const DASH_ON: f32 = 4.0;
const DASH_OFF: f32 = 4.0;
const MIN_CIRCLE_SEGMENTS: usize = 16;
const MAX_CIRCLE_SEGMENTS: usize = 128;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

#[derive(Debug, Default)]
pub struct Mesh {
    pub clear: Option<Color>,
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn reset(&mut self) {
        self.clear = None;
        self.vertices.clear();
    }

    fn tri(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        for p in [a, b, c] {
            self.vertices.push(Vertex {
                pos: p.to_array(),
                color,
            });
        }
    }

    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
        self.tri(a, b, c, color);
        self.tri(a, c, d, color);
    }

    fn segment(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        let dir = to - from;
        let len = dir.length();
        if len <= f32::EPSILON {
            return;
        }
        let n = Vec2::new(-dir.y, dir.x) / len * (width.max(1.0) * 0.5);
        self.quad(from + n, to + n, to - n, from - n, color);
    }

    fn dashed_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        let dir = to - from;
        let len = dir.length();
        if len <= f32::EPSILON {
            return;
        }
        let unit = dir / len;
        let mut s = 0.0;
        while s < len {
            let e = (s + DASH_ON).min(len);
            self.segment(from + unit * s, from + unit * e, width, color);
            s += DASH_ON + DASH_OFF;
        }
    }

    fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: [f32; 4]) {
        let half = width.max(1.0) * 0.5;
        let inner = (radius - half).max(0.0);
        let outer = radius + half;
        let n = circle_segments(radius);
        for i in 0..n {
            let a0 = unit(i, n);
            let a1 = unit(i + 1, n);
            self.quad(
                center + a0 * inner,
                center + a0 * outer,
                center + a1 * outer,
                center + a1 * inner,
                color,
            );
        }
    }

    fn fan(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let n = circle_segments(radius);
        for i in 0..n {
            self.tri(
                center,
                center + unit(i, n) * radius,
                center + unit(i + 1, n) * radius,
                color,
            );
        }
    }
}

/// Segment count grows with the circumference so large circles stay round.
pub fn circle_segments(radius: f32) -> usize {
    ((radius.max(0.0) * 0.75) as usize).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

#[inline]
fn unit(i: usize, n: usize) -> Vec2 {
    let a = i as f32 / n as f32 * std::f32::consts::TAU;
    Vec2::new(a.cos(), a.sin())
}

#[inline]
fn v(p: Point) -> Vec2 {
    p.as_vec2()
}

/// Rebuild `mesh` from `list`.
pub fn tessellate(list: &DrawList, mesh: &mut Mesh) {
    mesh.reset();
    for cmd in list.commands() {
        match cmd {
            DrawCommand::Clear(color) => {
                mesh.vertices.clear();
                mesh.clear = Some(*color);
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
                dashed,
            } => {
                let c = color.to_f32_array();
                if *dashed {
                    mesh.dashed_segment(v(*from), v(*to), *width as f32, c);
                } else {
                    mesh.segment(v(*from), v(*to), *width as f32, c);
                }
            }
            DrawCommand::Polyline {
                points,
                color,
                width,
            } => {
                let c = color.to_f32_array();
                for w in points.windows(2) {
                    mesh.segment(v(w[0]), v(w[1]), *width as f32, c);
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                width,
            } => mesh.ring(v(*center), *radius as f32, *width as f32, color.to_f32_array()),
            DrawCommand::Disc {
                center,
                radius,
                color,
            } => mesh.fan(v(*center), *radius as f32, color.to_f32_array()),
            DrawCommand::Rect {
                origin,
                size,
                color,
            } => {
                let o = v(*origin);
                let s = v(*size);
                mesh.quad(
                    o,
                    o + Vec2::new(s.x, 0.0),
                    o + s,
                    o + Vec2::new(0.0, s.y),
                    color.to_f32_array(),
                );
            }
        }
    }
}
