//! Terminal rendering of a cube's unfolded net, generalized from a fixed
//! 3x3 dump to any `n`.

use std::io::stdout;

use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Color as TermColor, SetBackgroundColor},
};

use crate::color::{Color, FaceName};
use crate::model::Cube;

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::White => TermColor::White,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Red => TermColor::Red,
        Color::Orange => TermColor::Magenta,
    }
}

/// Prints one face's `n x n` grid, top row first, each cell two spaces
/// wide under its color's background.
fn print_face(cube: &Cube, face: FaceName, offset: u16) -> Result<(), std::io::Error> {
    let n = cube.size();
    for display_row in 0..n {
        let row = n - 1 - display_row; // (row, col) convention is row0=bottom
        let mut layer = String::new();
        for col in 0..n {
            layer.push_str(&format!("{}  ", SetBackgroundColor(color_to_termcolor(cube.facelet(face, row, col)))));
        }
        layer.push_str(&format!("{}", SetBackgroundColor(TermColor::Reset)));
        println!("{layer}");

        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }
    Ok(())
}

/// Prints the cube as an unfolded net: `U` on top, `L F R B` across the
/// middle, `D` on the bottom — same arrangement regardless of `n`.
pub fn print_cube(cube: &Cube) -> Result<(), std::io::Error> {
    let n = cube.size() as u16;
    let cell = 2 * n;
    let stdout = stdout();

    println!();
    execute!(&stdout, MoveRight(cell))?;
    print_face(cube, FaceName::U, cell)?;
    execute!(&stdout, MoveLeft(cell))?;
    print_face(cube, FaceName::L, 0)?;
    execute!(&stdout, MoveRight(cell), MoveUp(n))?;
    print_face(cube, FaceName::F, cell)?;
    execute!(&stdout, MoveLeft(2 * cell), MoveUp(n), MoveRight(2 * cell))?;
    print_face(cube, FaceName::R, 2 * cell)?;
    execute!(&stdout, MoveLeft(2 * cell), MoveUp(n), MoveRight(3 * cell))?;
    print_face(cube, FaceName::B, 3 * cell)?;
    execute!(&stdout, MoveLeft(2 * cell))?;
    print_face(cube, FaceName::D, cell)?;
    execute!(&stdout, MoveLeft(2 * cell))?;
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_layout::CubeLayout;

    #[test]
    fn print_cube_does_not_panic_on_a_solved_5x5() {
        let cube = Cube::new(5, CubeLayout::boy(), false).unwrap();
        print_cube(&cube).unwrap();
    }
}
