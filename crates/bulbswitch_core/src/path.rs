//! Path building and representation

use smallvec::SmallVec;

use crate::geometry::Point;

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 32]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point the path visits, in order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        })
    }

    /// Number of drawn line segments
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::LineTo(_)))
            .count()
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { path: Path::new() }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Append a `LineTo` for each point
    pub fn polyline(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.path
            .commands
            .extend(points.into_iter().map(PathCommand::LineTo));
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
