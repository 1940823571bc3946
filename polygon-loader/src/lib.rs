//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Reads control polygons either from a plain coordinate list or from
// straight-line SVG path data
//--------------------------------------------------------------------

extern crate derive_more;
extern crate planar_kernel;
extern crate svg;

use derive_more::Display;
use planar_kernel::*;
use svg::node::element::path::*;

#[derive(Debug, Display)]
pub enum LoadError {
    #[display(fmt = "malformed path data: {}", _0)]
    Parse(svg::parser::Error),
    #[display(fmt = "odd number of coordinates ({})", _0)]
    OddCoordinateCount(usize),
    #[display(fmt = "invalid number '{}'", _0)]
    InvalidNumber(String),
    #[display(fmt = "unsupported path command '{}'", _0)]
    UnsupportedCommand(char),
    #[display(fmt = "the polygon has no points")]
    Empty
}

impl std::error::Error for LoadError {}

impl From<svg::parser::Error> for LoadError {
    fn from(e: svg::parser::Error) -> LoadError { LoadError::Parse(e) }
}

pub type Result<T> = std::result::Result<T, LoadError>;

fn process_relative(cmd: Vec2, relative: Position, last_value: Vec2) -> Vec2 {
    match relative {
        Position::Absolute => cmd,
        Position::Relative => last_value + cmd
    }
}

fn process_update_relative(cmd: Vec2, relative: Position, last_value: &mut Vec2) -> Vec2 {
    let pos = process_relative(cmd, relative, *last_value);
    *last_value = pos;
    pos
}

fn non_empty(points: Vec<Vec2>) -> Result<Vec<Vec2>> {
    if points.is_empty() { Err(LoadError::Empty) } else { Ok(points) }
}

// Coordinate lists such as "-2 -2  -1 1  1 0  2 -2", whitespace or commas
pub fn polygon_from_points(data: &str) -> Result<Vec<Vec2>> {
    let coords = data.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Coord>().map_err(|_| LoadError::InvalidNumber(s.to_owned())))
        .collect::<Result<Vec<_>>>()?;

    if coords.len() % 2 != 0 { return Err(LoadError::OddCoordinateCount(coords.len())); }

    let points: Vec<_> = coords.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect();
    tracing::debug!(points = points.len(), "parsed coordinate list");
    non_empty(points)
}

// Straight-segment path data (M, L, H, V, Z); closing does not repeat
// the first point
pub fn polygon_from_path_data(data: &str) -> Result<Vec<Vec2>> {
    let data = Data::parse(data)?;

    let mut last_value = Vec2::new(0.0, 0.0);
    let mut first_value = last_value;

    let mut points = Vec::new();
    for command in data.iter() {
        match command {
            Command::Move(pos, params) => {
                for (i, cmd) in params.chunks_exact(2).enumerate() {
                    let p = process_update_relative(Vec2::new(cmd[0] as Coord, cmd[1] as Coord), *pos, &mut last_value);
                    if i == 0 { first_value = p; }
                    points.push(p);
                }
            }
            Command::Line(pos, params) => {
                for cmd in params.chunks_exact(2) {
                    points.push(process_update_relative(Vec2::new(cmd[0] as Coord, cmd[1] as Coord), *pos, &mut last_value));
                }
            }
            Command::HorizontalLine(pos, params) => {
                for cmd in params.iter() {
                    let x = match pos { Position::Absolute => *cmd as Coord, Position::Relative => last_value.x + *cmd as Coord };
                    last_value.x = x;
                    points.push(last_value);
                }
            }
            Command::VerticalLine(pos, params) => {
                for cmd in params.iter() {
                    let y = match pos { Position::Absolute => *cmd as Coord, Position::Relative => last_value.y + *cmd as Coord };
                    last_value.y = y;
                    points.push(last_value);
                }
            }
            Command::Close => { last_value = first_value; }
            Command::QuadraticCurve(..) | Command::SmoothQuadraticCurve(..) => return Err(LoadError::UnsupportedCommand('Q')),
            Command::CubicCurve(..) | Command::SmoothCubicCurve(..) => return Err(LoadError::UnsupportedCommand('C')),
            Command::EllipticalArc(..) => return Err(LoadError::UnsupportedCommand('A'))
        }
    }

    tracing::debug!(points = points.len(), "parsed path data");
    non_empty(points)
}

// Any command letter means path data
pub fn polygon_from_string(data: &str) -> Result<Vec<Vec2>> {
    let is_path = data.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E');
    if is_path { polygon_from_path_data(data) } else { polygon_from_points(data) }
}

#[cfg(test)]
mod test {
    use super::*;

    fn v(x: Coord, y: Coord) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn test_point_list() {
        let poly = polygon_from_points("-2 -2  -1 1  1 0  2 -2").unwrap();
        assert_eq!(poly, vec![v(-2.0, -2.0), v(-1.0, 1.0), v(1.0, 0.0), v(2.0, -2.0)]);

        let poly = polygon_from_points("0,0, 1.5e1,2\n3 4").unwrap();
        assert_eq!(poly, vec![v(0.0, 0.0), v(15.0, 2.0), v(3.0, 4.0)]);
    }

    #[test]
    fn test_point_list_errors() {
        assert!(matches!(polygon_from_points("1 2 3"), Err(LoadError::OddCoordinateCount(3))));
        assert!(matches!(polygon_from_points("1 two"), Err(LoadError::InvalidNumber(_))));
        assert!(matches!(polygon_from_points("   "), Err(LoadError::Empty)));
    }

    #[test]
    fn test_path_data() {
        let poly = polygon_from_path_data("M 0 0 L 2 0 l 0 2 H 0 Z").unwrap();
        assert_eq!(poly, vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)]);

        let poly = polygon_from_path_data("m 1 1 2 0 v 3 h -1").unwrap();
        assert_eq!(poly, vec![v(1.0, 1.0), v(3.0, 1.0), v(3.0, 4.0), v(2.0, 4.0)]);
    }

    #[test]
    fn test_path_data_rejects_curves() {
        let err = polygon_from_path_data("M 0 0 C 1 1 2 2 3 0").unwrap_err();
        assert_eq!(err.to_string(), "unsupported path command 'C'");

        assert!(matches!(polygon_from_path_data("M 0 0 Q 1 1 2 0"), Err(LoadError::UnsupportedCommand('Q'))));
        assert!(matches!(polygon_from_path_data("M 0 0 T 2 0"), Err(LoadError::UnsupportedCommand('Q'))));
        assert!(matches!(polygon_from_path_data("M 0 0 S 1 1 2 0"), Err(LoadError::UnsupportedCommand('C'))));
        assert!(matches!(polygon_from_path_data("M 0 0 A 1 1 0 0 1 2 0"), Err(LoadError::UnsupportedCommand('A'))));
    }

    #[test]
    fn test_path_data_parse_error() {
        assert!(matches!(polygon_from_path_data("M 0 0 X 1 1"), Err(LoadError::Parse(_))));
        assert!(matches!(polygon_from_string("M 0 0 L 1 1 # 2"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(polygon_from_string("1e0 2 3 4").unwrap(), vec![v(1.0, 2.0), v(3.0, 4.0)]);
        assert_eq!(polygon_from_string("M1 2L3 4").unwrap(), vec![v(1.0, 2.0), v(3.0, 4.0)]);
    }
}
