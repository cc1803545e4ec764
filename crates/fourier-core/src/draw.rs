//! Backend-agnostic draw commands and the surface they are presented on.
//!
//! Drivers never call a drawing API. They append commands to a [`DrawList`]
//! in canvas pixel space (origin top-left, y down) and the host replays the
//! list on whatever [`Surface`] it owns: a Canvas 2D context on the web, a
//! wgpu line renderer on desktop.

use crate::color::{trail_color, Color, PURPLE, TEAL};
use crate::error::CoreError;
use crate::geometry::{Circle, Point};

/// Size of the drawing surface in CSS/logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Point at fractions of the width and height.
    #[inline]
    pub fn at(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Color),
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
        dashed: bool,
    },
    Polyline {
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
    /// Stroked circle outline.
    Circle {
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    },
    /// Filled circle.
    Disc {
        center: Point,
        radius: f64,
        color: Color,
    },
    Rect {
        origin: Point,
        size: Point,
        color: Color,
    },
}

/// Ordered list of commands for one frame. Reused across frames.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
            dashed: false,
        });
    }

    pub fn dashed_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
            dashed: true,
        });
    }

    pub fn polyline(&mut self, points: Vec<Point>, color: Color, width: f64) {
        if points.len() > 1 {
            self.commands.push(DrawCommand::Polyline {
                points,
                color,
                width,
            });
        }
    }

    pub fn circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            width,
        });
    }

    pub fn disc(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    pub fn rect(&mut self, origin: Point, size: Point, color: Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    /// Nested rotating circles plus their radius arms, translated by `offset`.
    ///
    /// Circles thinner than half a pixel are skipped entirely; `opacity` is
    /// clamped to [0, 1].
    pub fn epicycles(&mut self, circles: &[Circle], offset: Point, opacity: f64) {
        let o = opacity.clamp(0.0, 1.0);
        let ring = PURPLE.with_alpha((0.5 * o) as f32);
        let arm = TEAL.with_alpha((0.8 * o) as f32);
        for c in circles {
            if c.radius < 0.5 {
                continue;
            }
            let center = c.center + offset;
            self.circle(center, c.radius, ring, 1.0 + o);
            self.line(center, c.tip + offset, arm, 1.5 + o * 0.5);
        }
    }

    /// Trail as individually coloured segments, oldest faint, newest bright.
    pub fn fading_trail<'a, I>(&mut self, points: I, offset: Point, width: f64)
    where
        I: ExactSizeIterator<Item = &'a Point>,
    {
        self.fading_trail_with(points, offset, width, trail_color);
    }

    pub fn fading_trail_with<'a, I, F>(&mut self, points: I, offset: Point, width: f64, ramp: F)
    where
        I: ExactSizeIterator<Item = &'a Point>,
        F: Fn(f64) -> Color,
    {
        let len = points.len();
        if len < 2 {
            return;
        }
        let mut prev: Option<Point> = None;
        for (i, p) in points.enumerate() {
            let cur = *p + offset;
            if let Some(from) = prev {
                self.line(from, cur, ramp(i as f64 / len as f64), width);
            }
            prev = Some(cur);
        }
    }

    /// Long trail as `chunks` polylines sharing one colour each. Adjacent
    /// chunks overlap by one point so the stroke stays continuous.
    pub fn fading_polyline<'a, I, F>(
        &mut self,
        points: I,
        offset: Point,
        width: f64,
        chunks: usize,
        ramp: F,
    ) where
        I: ExactSizeIterator<Item = &'a Point>,
        F: Fn(f64) -> Color,
    {
        let len = points.len();
        if len < 2 || chunks == 0 {
            return;
        }
        let per_chunk = len.div_ceil(chunks).max(1);
        let mut current: Vec<Point> = Vec::with_capacity(per_chunk + 1);
        for (i, p) in points.enumerate() {
            current.push(*p + offset);
            let chunk_end = (i + 1) % per_chunk == 0;
            if chunk_end || i + 1 == len {
                let last = current[current.len() - 1];
                let age = (i + 1) as f64 / len as f64;
                self.polyline(std::mem::take(&mut current), ramp(age), width);
                current.push(last);
            }
        }
    }

    /// Small filled marker for an epicycle tip.
    pub fn tip_marker(&mut self, at: Point) {
        self.disc(at, 3.0, TEAL);
    }
}

/// A drawing target owned by the host.
///
/// Acquiring a surface is the implementor's constructor; dropping it releases
/// it. Only the active driver's output is ever presented.
pub trait Surface {
    fn viewport(&self) -> Viewport;

    /// Recreate backing storage at the new size.
    fn resize(&mut self, viewport: Viewport);

    fn present(&mut self, list: &DrawList) -> Result<(), CoreError>;
}

/// Surface that keeps the last presented list; handy for headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub frames: usize,
    pub last: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn present(&mut self, list: &DrawList) -> Result<(), CoreError> {
        self.frames += 1;
        self.last = list.commands().to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_circles_are_skipped() {
        let circles = [
            Circle {
                center: Point::ZERO,
                radius: 10.0,
                tip: Point::new(10.0, 0.0),
            },
            Circle {
                center: Point::new(10.0, 0.0),
                radius: 0.1,
                tip: Point::new(10.1, 0.0),
            },
        ];
        let mut list = DrawList::new();
        list.epicycles(&circles, Point::new(100.0, 100.0), 0.7);
        // one ring + one arm for the big circle only
        assert_eq!(list.len(), 2);
        match &list.commands()[0] {
            DrawCommand::Circle { center, .. } => assert_eq!(*center, Point::new(100.0, 100.0)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn fading_trail_emits_one_segment_per_gap() {
        let pts = vec![Point::ZERO, Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let mut list = DrawList::new();
        list.fading_trail(pts.iter(), Point::ZERO, 2.0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn fading_polyline_chunks_overlap() {
        let pts: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 0.0)).collect();
        let mut list = DrawList::new();
        list.fading_polyline(pts.iter(), Point::ZERO, 1.0, 3, trail_color);
        // 10 points in chunks of 4: [0..4], [3..8], [7..10]
        assert_eq!(list.len(), 3);
        match &list.commands()[1] {
            DrawCommand::Polyline { points, .. } => {
                assert_eq!(points.first(), Some(&Point::new(3.0, 0.0)));
                assert_eq!(points.last(), Some(&Point::new(7.0, 0.0)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn degenerate_polyline_is_dropped() {
        let mut list = DrawList::new();
        list.polyline(vec![Point::ZERO], TEAL, 1.0);
        assert!(list.is_empty());
    }
}
