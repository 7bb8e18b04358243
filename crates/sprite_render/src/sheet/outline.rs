use super::bounds::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentOp {
    MoveTo,
    LineTo,
    QuadTo,
    CubeTo,
}

impl SegmentOp {
    /// Number of leading argument slots the operation reads.
    pub fn arity(self) -> usize {
        match self {
            SegmentOp::MoveTo | SegmentOp::LineTo => 1,
            SegmentOp::QuadTo => 2,
            SegmentOp::CubeTo => 3,
        }
    }

    pub fn command(self) -> char {
        match self {
            SegmentOp::MoveTo => 'M',
            SegmentOp::LineTo => 'L',
            SegmentOp::QuadTo => 'Q',
            SegmentOp::CubeTo => 'C',
        }
    }
}

/// One drawing operation. Control points come first, the destination last;
/// slots past the operation's arity are unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub op: SegmentOp,
    pub args: [Point; 3],
}

impl Segment {
    pub fn move_to(p: Point) -> Self {
        Self { op: SegmentOp::MoveTo, args: [p, Point::default(), Point::default()] }
    }

    pub fn line_to(p: Point) -> Self {
        Self { op: SegmentOp::LineTo, args: [p, Point::default(), Point::default()] }
    }

    pub fn quad_to(ctrl: Point, to: Point) -> Self {
        Self { op: SegmentOp::QuadTo, args: [ctrl, to, Point::default()] }
    }

    pub fn cube_to(ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        Self { op: SegmentOp::CubeTo, args: [ctrl1, ctrl2, to] }
    }

    pub fn points(&self) -> &[Point] {
        &self.args[..self.op.arity()]
    }
}

/// Glyph outline in 26.6 fixed-point units. Whitespace glyphs have no segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline {
    segments: Vec<Segment>,
}

impl Outline {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
