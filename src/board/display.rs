use super::{Castle, Placement};
use std::fmt;

/* Example output for a 7x3 castle building row 1

       
 ██  █ c
███████
X  XX X

Every row is printed top to bottom, `c` marks the current row.
The last line marks the blocked columns.
*/

impl fmt::Display for Castle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_grid(f, self, None)
    }
}

/// Renders a [`Castle`] with a proposed block drawn as `X`, see [`Castle::preview`].
pub struct Preview<'a> {
    castle: &'a Castle,
    placement: Placement,
}

/// Lists the free spaces of the current row, see [`Castle::spaces_display`].
pub struct SpacesDisplay<'a>(&'a Castle);

impl Castle {
    /// Renders the castle with `placement` drawn into the current row.
    pub fn preview(&self, placement: Placement) -> Preview<'_> {
        Preview {
            castle: self,
            placement,
        }
    }

    /// Renders the free spaces of the current row, one per line.
    pub fn spaces_display(&self) -> SpacesDisplay<'_> {
        SpacesDisplay(self)
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_grid(f, self.castle, Some(self.placement))
    }
}

impl fmt::Display for SpacesDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let castle = self.0;
        for space in castle.spaces(castle.current_row()) {
            writeln!(f, "Space: [index {}, width {}]", space.start(), space.width())?;
        }
        Ok(())
    }
}

fn write_grid(f: &mut fmt::Formatter, castle: &Castle, proposed: Option<Placement>) -> fmt::Result {
    for row in 0..castle.height() {
        for col in 0..castle.width() {
            let is_proposed = row == castle.current_row()
                && proposed.map_or(false, |p| p.columns().contains(&col));
            let glyph = match (is_proposed, castle.is_occupied(row, col)) {
                (true, _) => 'X',
                (false, true) => '█',
                (false, false) => ' ',
            };
            write!(f, "{}", glyph)?;
        }
        // the preview only shows the grid
        if proposed.is_none() && row == castle.current_row() {
            write!(f, "c")?;
        }
        writeln!(f)?;
    }
    if proposed.is_none() {
        for col in 0..castle.width() {
            write!(f, "{}", if castle.is_blocked(col) { 'X' } else { ' ' })?;
        }
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::board::{Castle, Placement};

    #[test]
    fn renders_rows_and_blocked_columns() {
        let mut castle = Castle::new(4, 2);
        castle.place(Placement::new(1, 2), 0);
        assert_eq!(castle.to_string(), " ██ c\n████\nX  X\n");
    }

    #[test]
    fn preview_marks_placement() {
        let castle = Castle::new(3, 2);
        assert_eq!(castle.preview(Placement::new(1, 1)).to_string(), " X \n███\n");
    }

    #[test]
    fn lists_spaces() {
        let mut castle = Castle::new(7, 2);
        castle.place(Placement::new(3, 1), 0);
        assert_eq!(
            castle.spaces_display().to_string(),
            "Space: [index 0, width 2]\nSpace: [index 5, width 2]\n"
        );
    }
}
