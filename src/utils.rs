#[cfg(test)]
use crate::board::state::TextBoard;

#[cfg(test)]
/// Creates a [`std::collections::HashSet`] containing the arguments, similar to [`vec!`].
macro_rules! hashset {
    ($( $x: expr ),* ) => {
        {
            let mut tmp = std::collections::HashSet::new();
            $(
                tmp.insert($x);
            )*
            tmp
        }
    };
}

#[cfg(test)]
/// Parse a board fixture written as whitespace-separated cells, one row per line. Any cell
/// containing `_` is an empty square, so fixtures can be padded to line up.
pub(crate) fn text_board(fixture: &str) -> TextBoard {
    fixture.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace()
            .map(|cell| if cell.contains('_') { String::new() } else { String::from(cell) })
            .collect())
        .collect()
}
