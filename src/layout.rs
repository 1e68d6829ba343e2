//! Geometry for a physics or rendering layer: where the walls, the goal and the ball go
//! on a canvas of a given size. Rectangles are described by their centre point, matching
//! engines that position bodies by centre.

use std::fmt;

use crate::grid::MazeGrid;
use crate::units::{Height, Width};

pub const BORDER_THICKNESS: f32 = 2.0;
pub const WALL_THICKNESS: f32 = 5.0;

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Rect {
    pub centre_x: f32,
    pub centre_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(centre_x: f32, centre_y: f32, width: f32, height: f32) -> Rect {
        Rect { centre_x, centre_y, width, height }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum BodyLabel {
    Border,
    Wall,
    Goal,
}

impl fmt::Display for BodyLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match *self {
            BodyLabel::Border => "border",
            BodyLabel::Wall => "wall",
            BodyLabel::Goal => "goal",
        };
        write!(f, "{}", label)
    }
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Ball {
    pub centre_x: f32,
    pub centre_y: f32,
    pub radius: f32,
}

/// Every static body of one maze plus the ball's starting placement.
#[derive(PartialEq, Clone, Debug)]
pub struct MazeLayout {
    pub unit_length_x: f32,
    pub unit_length_y: f32,
    pub borders: Vec<Rect>,
    pub walls: Vec<Rect>,
    pub goal: Rect,
    pub ball: Ball,
}

impl MazeLayout {
    /// Lay out `grid` over a `width` x `height` canvas. Only closed walls become bodies.
    pub fn new(grid: &MazeGrid, width: Width, height: Height) -> MazeLayout {
        let (Width(width), Height(height)) = (width, height);
        let unit_x = width / grid.columns().0 as f32;
        let unit_y = height / grid.rows().0 as f32;

        let borders = vec![
            Rect::new(width / 2.0, 0.0, width, BORDER_THICKNESS),
            Rect::new(width / 2.0, height, width, BORDER_THICKNESS),
            Rect::new(0.0, height / 2.0, BORDER_THICKNESS, height),
            Rect::new(width, height / 2.0, BORDER_THICKNESS, height),
        ];

        let mut walls = Vec::with_capacity(grid.size() * 2);
        for (row, horizontals) in grid.horizontal_open().iter().enumerate() {
            for (column, _) in horizontals.iter().enumerate().filter(|&(_, open)| !*open) {
                walls.push(Rect::new(column as f32 * unit_x + unit_x / 2.0,
                                     row as f32 * unit_y + unit_y,
                                     unit_x,
                                     WALL_THICKNESS));
            }
        }
        for (row, verticals) in grid.vertical_open().iter().enumerate() {
            for (column, _) in verticals.iter().enumerate().filter(|&(_, open)| !*open) {
                walls.push(Rect::new(column as f32 * unit_x + unit_x,
                                     row as f32 * unit_y + unit_y / 2.0,
                                     WALL_THICKNESS,
                                     unit_y));
            }
        }

        let goal = Rect::new(width - unit_x / 2.0,
                             height - unit_y / 2.0,
                             unit_x * 0.5,
                             unit_y * 0.5);

        let ball = Ball {
            centre_x: unit_x / 2.0,
            centre_y: unit_y / 2.0,
            radius: unit_x.min(unit_y) / 4.0,
        };

        MazeLayout {
            unit_length_x: unit_x,
            unit_length_y: unit_y,
            borders,
            walls,
            goal,
            ball,
        }
    }

    /// All static bodies, labelled, borders first then walls then the goal.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyLabel, &Rect)> {
        self.borders
            .iter()
            .map(|rect| (BodyLabel::Border, rect))
            .chain(self.walls.iter().map(|rect| (BodyLabel::Wall, rect)))
            .chain(Some((BodyLabel::Goal, &self.goal)))
    }
}

/// One body per line, `label centre-x centre-y width height`, ending with
/// `ball centre-x centre-y radius`.
impl fmt::Display for MazeLayout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (label, rect) in self.bodies() {
            writeln!(f, "{} {} {} {} {}", label, rect.centre_x, rect.centre_y, rect.width, rect.height)?;
        }
        writeln!(f, "ball {} {} {}", self.ball.centre_x, self.ball.centre_y, self.ball.radius)
    }
}
