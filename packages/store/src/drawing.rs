//! # Drawing canvas: scene model, pointer tracking and rasterisation
//!
//! The note editor lets children draw freehand, drop simple shapes and erase.
//! This module holds everything about that canvas that is not DOM plumbing:
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Drawing`] | The saved scene: canvas size, background and an ordered list of [`Shape`]s. Stored as JSON in the note's `drawing` column. |
//! | [`Canvas`] | Interactive state around a `Drawing`: active [`Tool`], active colour and the stroke currently being drawn. Fed by pointer events. |
//! | [`Bitmap`] | An RGBA raster produced by [`Drawing::rasterize`]. The UI copies it onto an HTML canvas to export a PNG. |
//!
//! ## Tools
//!
//! - `Draw` paints with the active colour at [`BRUSH_WIDTH`].
//! - `Eraser` paints the background colour (white) at [`ERASER_WIDTH`].
//! - `Rectangle` / `Circle` drop a filled 100×100 rectangle or a radius-50 circle
//!   at (100, 100) the moment they are picked, then stop drawing mode.
//! - `Select` does nothing on the canvas.
//!
//! ## Pointer tracking
//!
//! `pointer_down` opens a stroke, `pointer_move` extends it (dropping repeated
//! points and clamping to the canvas), `pointer_up` commits it. Leaving the
//! canvas commits too, so a drag that exits the element is not lost.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const BRUSH_WIDTH: f32 = 2.0;
pub const ERASER_WIDTH: f32 = 20.0;
/// Largest canvas side accepted from saved JSON.
pub const MAX_SIDE: u32 = 4096;
/// Saved coordinates and sizes must stay within this distance of the origin.
const MAX_COORD: f32 = 2.0 * MAX_SIDE as f32;

const SHAPE_ORIGIN: f32 = 100.0;
const RECT_SIZE: f32 = 100.0;
const CIRCLE_RADIUS: f32 = 50.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DrawingError {
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),
    #[error("malformed drawing: {0}")]
    Malformed(String),
}

/// An opaque RGB colour written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl FromStr for Color {
    type Err = DrawingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DrawingError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = DrawingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One element of a drawing, in paint order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Stroke {
        color: Color,
        width: f32,
        points: Vec<Point>,
    },
    Rect {
        color: Color,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    },
    Circle {
        color: Color,
        left: f32,
        top: f32,
        radius: f32,
    },
}

impl Shape {
    /// Every coordinate and size is finite and near the canvas.
    fn is_bounded(&self) -> bool {
        let coord = |v: f32| v.is_finite() && v.abs() <= MAX_COORD;
        let size = |v: f32| coord(v) && v >= 0.0;
        match self {
            Shape::Stroke { width, points, .. } => {
                size(*width) && points.iter().all(|p| coord(p.x) && coord(p.y))
            }
            Shape::Rect {
                left,
                top,
                width,
                height,
                ..
            } => coord(*left) && coord(*top) && size(*width) && size(*height),
            Shape::Circle {
                left, top, radius, ..
            } => coord(*left) && coord(*top) && size(*radius),
        }
    }
}

/// A saved drawing scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Drawing {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::WHITE,
            shapes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn to_json(&self) -> Result<String, DrawingError> {
        serde_json::to_string(self).map_err(|e| DrawingError::Malformed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, DrawingError> {
        let drawing: Drawing =
            serde_json::from_str(json).map_err(|e| DrawingError::Malformed(e.to_string()))?;
        if drawing.width == 0 || drawing.height == 0 {
            return Err(DrawingError::Malformed("canvas has no area".to_string()));
        }
        if drawing.width > MAX_SIDE || drawing.height > MAX_SIDE {
            return Err(DrawingError::Malformed(format!(
                "canvas {}x{} exceeds {MAX_SIDE}x{MAX_SIDE}",
                drawing.width, drawing.height
            )));
        }
        if let Some(index) = drawing.shapes.iter().position(|shape| !shape.is_bounded()) {
            return Err(DrawingError::Malformed(format!("shape {index} is out of range")));
        }
        Ok(drawing)
    }

    /// Render the scene into an RGBA bitmap.
    pub fn rasterize(&self) -> Bitmap {
        let mut bitmap = Bitmap::new(self.width, self.height, self.background);
        for shape in &self.shapes {
            bitmap.paint(shape);
        }
        bitmap
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    Select,
    #[default]
    Draw,
    Rectangle,
    Circle,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 5] = [Tool::Select, Tool::Draw, Tool::Rectangle, Tool::Circle, Tool::Eraser];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Draw => "Pencil",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Eraser => "Eraser",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ActiveStroke {
    color: Color,
    width: f32,
    points: Vec<Point>,
}

/// Interactive canvas state.
///
/// Keeps a bitmap of the scene including the stroke in progress, updated one
/// segment at a time while the pointer moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    drawing: Drawing,
    tool: Tool,
    color: Color,
    active: Option<ActiveStroke>,
    bitmap: Bitmap,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::from_drawing(Drawing::default())
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_drawing(Drawing::new(width, height))
    }

    pub fn from_drawing(drawing: Drawing) -> Self {
        let bitmap = drawing.rasterize();
        Self {
            drawing,
            tool: Tool::Draw,
            color: Color::BLACK,
            active: None,
            bitmap,
        }
    }

    /// What the canvas shows right now, including the stroke in progress.
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Committed scene, without any stroke still in progress.
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether pointer drags paint.
    pub fn is_drawing_mode(&self) -> bool {
        matches!(self.tool, Tool::Draw | Tool::Eraser)
    }

    pub fn is_stroking(&self) -> bool {
        self.active.is_some()
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), DrawingError> {
        self.color = color.parse()?;
        Ok(())
    }

    /// Switch tool. Shape tools add their shape immediately.
    pub fn select_tool(&mut self, tool: Tool) {
        self.commit();
        self.tool = tool;
        let shape = match tool {
            Tool::Rectangle => Shape::Rect {
                color: self.color,
                left: SHAPE_ORIGIN,
                top: SHAPE_ORIGIN,
                width: RECT_SIZE,
                height: RECT_SIZE,
            },
            Tool::Circle => Shape::Circle {
                color: self.color,
                left: SHAPE_ORIGIN,
                top: SHAPE_ORIGIN,
                radius: CIRCLE_RADIUS,
            },
            Tool::Select | Tool::Draw | Tool::Eraser => return,
        };
        self.bitmap.paint(&shape);
        self.drawing.shapes.push(shape);
    }

    fn brush(&self) -> Option<(Color, f32)> {
        match self.tool {
            Tool::Draw => Some((self.color, BRUSH_WIDTH)),
            Tool::Eraser => Some((self.drawing.background, ERASER_WIDTH)),
            _ => None,
        }
    }

    fn clamp(&self, x: f32, y: f32) -> Point {
        Point {
            x: x.clamp(0.0, self.drawing.width as f32),
            y: y.clamp(0.0, self.drawing.height as f32),
        }
    }

    /// Start a stroke. Returns `true` if the canvas changed.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        let Some((color, width)) = self.brush() else {
            return false;
        };
        self.commit();
        let point = self.clamp(x, y);
        self.bitmap.disc(point, width / 2.0, color.rgba());
        self.active = Some(ActiveStroke {
            color,
            width,
            points: vec![point],
        });
        true
    }

    /// Extend the active stroke. Returns `true` if a point was added.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let point = self.clamp(x, y);
        let Some(stroke) = self.active.as_mut() else {
            return false;
        };
        let Some(&last) = stroke.points.last() else {
            return false;
        };
        if last == point {
            return false;
        }
        stroke.points.push(point);
        self.bitmap
            .segment(last, point, stroke.width / 2.0, stroke.color.rgba());
        true
    }

    /// Finish the active stroke. Returns `true` if a stroke was committed.
    pub fn pointer_up(&mut self) -> bool {
        self.commit()
    }

    fn commit(&mut self) -> bool {
        let Some(stroke) = self.active.take() else {
            return false;
        };
        self.drawing.shapes.push(Shape::Stroke {
            color: stroke.color,
            width: stroke.width,
            points: stroke.points,
        });
        true
    }

    /// Remove everything and restore the white background.
    pub fn clear(&mut self) {
        self.active = None;
        self.drawing.shapes.clear();
        self.drawing.background = Color::WHITE;
        self.bitmap = Bitmap::new(self.drawing.width, self.drawing.height, Color::WHITE);
    }

    /// The scene as it should appear right now, including the stroke in progress.
    pub fn snapshot(&self) -> Drawing {
        let mut drawing = self.drawing.clone();
        if let Some(stroke) = &self.active {
            drawing.shapes.push(Shape::Stroke {
                color: stroke.color,
                width: stroke.width,
                points: stroke.points.clone(),
            });
        }
        drawing
    }

    /// Commit any stroke in progress and hand back the scene to save.
    pub fn finish(&mut self) -> Drawing {
        self.commit();
        self.drawing.clone()
    }
}

/// RGBA pixels, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let pixels = background
            .rgba()
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(px)
    }

    fn set(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Fill every pixel whose centre passes `inside`, scanning the given bounds.
    fn fill_where(
        &mut self,
        (min_x, min_y, max_x, max_y): (f32, f32, f32, f32),
        rgba: [u8; 4],
        inside: impl Fn(f32, f32) -> bool,
    ) {
        let x0 = (min_x.floor() as i64).max(0);
        let y0 = (min_y.floor() as i64).max(0);
        let x1 = (max_x.ceil() as i64).min(self.width as i64 - 1);
        let y1 = (max_y.ceil() as i64).min(self.height as i64 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside(x as f32 + 0.5, y as f32 + 0.5) {
                    self.set(x, y, rgba);
                }
            }
        }
    }

    fn disc(&mut self, center: Point, radius: f32, rgba: [u8; 4]) {
        let r = radius.max(0.75);
        let r2 = r * r;
        self.fill_where(
            (center.x - r, center.y - r, center.x + r, center.y + r),
            rgba,
            |px, py| {
                let (dx, dy) = (px - center.x, py - center.y);
                dx * dx + dy * dy <= r2
            },
        );
    }

    /// Stamp discs from `a` (exclusive) to `b` (inclusive).
    fn segment(&mut self, a: Point, b: Point, radius: f32, rgba: [u8; 4]) {
        let step = (radius / 2.0).max(0.5);
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len = (dx * dx + dy * dy).sqrt();
        let steps = (len / step).ceil().max(1.0) as usize;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.disc(
                Point {
                    x: a.x + dx * t,
                    y: a.y + dy * t,
                },
                radius,
                rgba,
            );
        }
    }

    fn stroke(&mut self, points: &[Point], width: f32, rgba: [u8; 4]) {
        let radius = width / 2.0;
        let Some(first) = points.first() else {
            return;
        };
        self.disc(*first, radius, rgba);
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], radius, rgba);
        }
    }

    fn paint(&mut self, shape: &Shape) {
        match shape {
            Shape::Stroke {
                color,
                width,
                points,
            } => self.stroke(points, *width, color.rgba()),
            Shape::Rect {
                color,
                left,
                top,
                width,
                height,
            } => {
                let (l, t, r, b) = (*left, *top, left + width, top + height);
                self.fill_where((l, t, r, b), color.rgba(), |px, py| {
                    px >= l && px < r && py >= t && py < b
                });
            }
            Shape::Circle {
                color,
                left,
                top,
                radius,
            } => {
                let center = Point {
                    x: left + radius,
                    y: top + radius,
                };
                self.disc(center, *radius, color.rgba());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn test_color_parsing() {
        assert_eq!(
            "#FF8000".parse::<Color>().unwrap(),
            Color { r: 255, g: 128, b: 0 }
        );
        assert_eq!(Color { r: 1, g: 2, b: 3 }.to_string(), "#010203");
        assert!("ff8000".parse::<Color>().is_err());
        assert!("#ff80".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("#+f+f+f".parse::<Color>().is_err());
        assert!("#-1ffff".parse::<Color>().is_err());

        let mut canvas = Canvas::default();
        assert!(canvas.set_color("red").is_err());
        assert_eq!(canvas.color(), Color::BLACK);
    }

    #[test]
    fn test_pointer_stroke_lifecycle() {
        let mut canvas = Canvas::new(100, 50);

        assert!(!canvas.pointer_move(10.0, 10.0));
        assert!(canvas.pointer_down(10.0, 10.0));
        assert!(canvas.is_stroking());
        assert!(canvas.pointer_move(20.0, 10.0));
        assert!(!canvas.pointer_move(20.0, 10.0));
        assert!(canvas.pointer_move(500.0, -3.0));

        // Not committed yet, but visible in the snapshot
        assert!(canvas.drawing().is_empty());
        assert_eq!(canvas.snapshot().shapes.len(), 1);

        assert!(canvas.pointer_up());
        assert!(!canvas.pointer_up());

        match &canvas.drawing().shapes[..] {
            [Shape::Stroke { color, width, points }] => {
                assert_eq!(*color, Color::BLACK);
                assert_eq!(*width, BRUSH_WIDTH);
                assert_eq!(points.len(), 3);
                assert_eq!(points[2], Point { x: 100.0, y: 0.0 });
            }
            other => panic!("unexpected shapes: {other:?}"),
        }
    }

    #[test]
    fn test_eraser_paints_background_wide() {
        let mut canvas = Canvas::default();
        canvas.select_tool(Tool::Eraser);
        canvas.pointer_down(5.0, 5.0);
        let drawing = canvas.finish();
        match &drawing.shapes[0] {
            Shape::Stroke { color, width, .. } => {
                assert_eq!(*color, Color::WHITE);
                assert_eq!(*width, ERASER_WIDTH);
            }
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_tools_add_immediately_and_stop_drawing() {
        let mut canvas = Canvas::default();
        canvas.set_color("#00ff00").unwrap();
        canvas.select_tool(Tool::Rectangle);
        canvas.select_tool(Tool::Circle);

        assert!(!canvas.is_drawing_mode());
        assert!(!canvas.pointer_down(1.0, 1.0));
        assert_eq!(canvas.drawing().shapes.len(), 2);
        assert!(matches!(
            canvas.drawing().shapes[1],
            Shape::Circle { radius, left, .. } if radius == 50.0 && left == 100.0
        ));

        canvas.select_tool(Tool::Select);
        assert_eq!(canvas.drawing().shapes.len(), 2);
    }

    #[test]
    fn test_switching_tool_commits_stroke() {
        let mut canvas = Canvas::default();
        canvas.pointer_down(1.0, 1.0);
        canvas.select_tool(Tool::Rectangle);
        assert!(!canvas.is_stroking());
        assert!(matches!(canvas.drawing().shapes[0], Shape::Stroke { .. }));
        assert!(matches!(canvas.drawing().shapes[1], Shape::Rect { .. }));
    }

    #[test]
    fn test_clear_resets_scene() {
        let mut canvas = Canvas::default();
        canvas.select_tool(Tool::Rectangle);
        canvas.select_tool(Tool::Draw);
        canvas.pointer_down(3.0, 3.0);
        canvas.clear();
        assert!(canvas.drawing().is_empty());
        assert!(!canvas.is_stroking());
        assert_eq!(canvas.drawing().background, Color::WHITE);
    }

    #[test]
    fn test_json_scene_format() {
        let mut canvas = Canvas::new(10, 10);
        canvas.select_tool(Tool::Circle);
        let json = canvas.drawing().to_json().unwrap();
        assert!(json.contains(r#""type":"circle""#));
        assert!(json.contains(r##""background":"#ffffff""##));
        assert_eq!(&Drawing::from_json(&json).unwrap(), canvas.drawing());

        assert!(matches!(
            Drawing::from_json("{\"width\": 10}"),
            Err(DrawingError::Malformed(_))
        ));
        assert!(matches!(
            Drawing::from_json(r##"{"width":0,"height":5,"background":"#ffffff"}"##),
            Err(DrawingError::Malformed(_))
        ));
        assert!(Drawing::from_json(r##"{"width":5,"height":5,"background":"white"}"##).is_err());
    }

    #[test]
    fn test_from_json_rejects_oversized_or_unbounded_scenes() {
        let huge = r##"{"width":100000,"height":100000,"background":"#ffffff","shapes":[]}"##;
        assert!(matches!(Drawing::from_json(huge), Err(DrawingError::Malformed(_))));

        let far_point = r##"{"width":800,"height":400,"background":"#ffffff","shapes":[
            {"type":"stroke","color":"#000000","width":2.0,"points":[{"x":0.0,"y":0.0},{"x":1e30,"y":0.0}]}
        ]}"##;
        assert!(matches!(Drawing::from_json(far_point), Err(DrawingError::Malformed(_))));

        let negative_radius = r##"{"width":800,"height":400,"background":"#ffffff","shapes":[
            {"type":"circle","color":"#000000","left":10.0,"top":10.0,"radius":-5.0}
        ]}"##;
        assert!(Drawing::from_json(negative_radius).is_err());

        let edge = r##"{"width":4096,"height":4096,"background":"#ffffff","shapes":[
            {"type":"rect","color":"#000000","left":-20.0,"top":4000.0,"width":200.0,"height":200.0}
        ]}"##;
        assert!(Drawing::from_json(edge).is_ok());
    }

    #[test]
    fn test_canvas_bitmap_tracks_scene_incrementally() {
        let mut canvas = Canvas::new(60, 30);
        canvas.select_tool(Tool::Rectangle);
        canvas.select_tool(Tool::Draw);
        canvas.set_color("#ff0000").unwrap();
        canvas.pointer_down(5.0, 5.0);
        canvas.pointer_move(30.0, 20.0);
        canvas.pointer_move(55.0, 8.0);

        assert_eq!(canvas.bitmap(), &canvas.snapshot().rasterize());
        canvas.pointer_up();
        assert_eq!(canvas.bitmap(), &canvas.drawing().rasterize());

        canvas.select_tool(Tool::Eraser);
        canvas.pointer_down(10.0, 10.0);
        canvas.pointer_move(12.0, 14.0);
        assert_eq!(canvas.bitmap(), &canvas.snapshot().rasterize());

        canvas.clear();
        assert_eq!(canvas.bitmap(), &Drawing::new(60, 30).rasterize());
    }

    #[test]
    fn test_rasterize_rect_and_dot() {
        let mut drawing = Drawing::new(20, 20);
        drawing.shapes.push(Shape::Rect {
            color: Color::BLACK,
            left: 2.0,
            top: 2.0,
            width: 3.0,
            height: 3.0,
        });
        drawing.shapes.push(Shape::Stroke {
            color: Color { r: 255, g: 0, b: 0 },
            width: 2.0,
            points: vec![Point { x: 15.5, y: 15.5 }],
        });

        let bitmap = drawing.rasterize();
        assert_eq!(bitmap.pixels().len(), 20 * 20 * 4);
        assert_eq!(bitmap.pixel(2, 2), Some(BLACK));
        assert_eq!(bitmap.pixel(4, 4), Some(BLACK));
        assert_eq!(bitmap.pixel(5, 5), Some(WHITE));
        assert_eq!(bitmap.pixel(1, 2), Some(WHITE));
        assert_eq!(bitmap.pixel(15, 15), Some([255, 0, 0, 255]));
        assert_eq!(bitmap.pixel(18, 18), Some(WHITE));
        assert_eq!(bitmap.pixel(20, 0), None);
    }

    #[test]
    fn test_rasterize_stroke_is_continuous_and_eraser_covers() {
        let mut canvas = Canvas::new(40, 10);
        canvas.pointer_down(2.0, 5.0);
        canvas.pointer_move(37.0, 5.0);
        canvas.pointer_up();

        let bitmap = canvas.drawing().rasterize();
        for x in 2..37 {
            assert_eq!(bitmap.pixel(x, 4), Some(BLACK), "gap at x={x}");
        }
        assert_eq!(bitmap.pixel(20, 0), Some(WHITE));

        canvas.select_tool(Tool::Eraser);
        canvas.pointer_down(20.0, 5.0);
        canvas.pointer_up();
        let bitmap = canvas.drawing().rasterize();
        assert_eq!(bitmap.pixel(20, 4), Some(WHITE));
        assert_eq!(bitmap.pixel(2, 4), Some(BLACK));
    }

    #[test]
    fn test_circle_respects_bounding_box() {
        let mut canvas = Canvas::new(300, 300);
        canvas.select_tool(Tool::Circle);
        let bitmap = canvas.drawing().rasterize();
        assert_eq!(bitmap.pixel(150, 150), Some(BLACK));
        assert_eq!(bitmap.pixel(101, 101), Some(WHITE));
        assert_eq!(bitmap.pixel(199, 150), Some(BLACK));
        assert_eq!(bitmap.pixel(201, 150), Some(WHITE));
    }
}
