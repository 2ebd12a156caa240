use super::Position;

/// Index over the newline offsets of a source text, answering line/column
/// queries for character offsets. Offsets are counted in characters, not
/// bytes, so columns stay correct for multibyte input.
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    newlines: Vec<usize>,
}

impl LineMap {
    pub fn new(input: &str) -> Self {
        let newlines = input
            .chars()
            .enumerate()
            .filter_map(|(offset, c)| (c == '\n').then_some(offset))
            .collect();

        Self { newlines }
    }

    /// Line and column (both 1-based) of the given character offset. The
    /// lookup is a binary search over the newline offsets.
    pub fn location(&self, offset: usize) -> Position {
        let line = self.newlines.partition_point(|&newline| newline <= offset);
        let column = if line > 0 {
            offset - self.newlines[line - 1]
        } else {
            offset + 1
        };

        (line + 1, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_on_single_line() {
        let map = LineMap::new("const int x = 5;");

        assert_eq!((1, 1), map.location(0));
        assert_eq!((1, 7), map.location(6));
        assert_eq!((1, 16), map.location(15));
    }

    #[test]
    fn test_location_across_lines() {
        let map = LineMap::new("const\nint\nx = 5;");

        assert_eq!((1, 1), map.location(0));
        assert_eq!((2, 1), map.location(6));
        assert_eq!((2, 3), map.location(8));
        assert_eq!((3, 1), map.location(10));
        assert_eq!((3, 5), map.location(14));
    }

    #[test]
    fn test_location_without_newlines() {
        let map = LineMap::new("");
        assert_eq!((1, 1), map.location(0));
    }
}
