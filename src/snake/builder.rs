use super::*;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        write!(f, "builder: {:?}", self.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub pos: Option<GridPoint>,
    pub dir: Option<Dir>,
    pub len: Option<usize>,

    /// Explicit layout, head first, overrides `pos`, `dir` and `len`
    pub cells: Option<Vec<GridPoint>>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: GridPoint) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn cells(mut self, value: impl IntoIterator<Item = GridPoint>) -> Self {
        self.cells = Some(value.into_iter().collect());
        self
    }

    fn error(&self, msg: &'static str) -> BuilderError {
        BuilderError(Box::new(self.clone()), msg)
    }

    pub fn build(&self, board: &Board) -> Result<Body, BuilderError> {
        let (cells, dir) = match &self.cells {
            Some(cells) => self.explicit_layout(cells)?,
            None => self.straight_layout()?,
        };

        if cells.iter().any(|pos| board.is_blocked(*pos)) {
            return Err(self.error("snake doesn't fit on the board"));
        }

        tracing::debug!(?dir, len = cells.len(), head = ?cells[0], "spawn snake");
        Ok(Body::new(cells, dir))
    }

    // head at `pos`, the rest of the body trailing behind it
    fn straight_layout(&self) -> Result<(VecDeque<GridPoint>, Dir), BuilderError> {
        let pos = self.pos.ok_or_else(|| self.error("missing field `pos`"))?;
        let dir = self.dir.ok_or_else(|| self.error("missing field `dir`"))?;
        let len = self.len.unwrap_or(Body::MIN_LEN);
        if len < Body::MIN_LEN {
            return Err(self.error("snake must be at least 3 cells long"));
        }

        let cells = (0..len).map(|i| pos.translate(-dir, i)).collect();
        Ok((cells, dir))
    }

    fn explicit_layout(&self, cells: &[GridPoint]) -> Result<(VecDeque<GridPoint>, Dir), BuilderError> {
        if cells.len() < Body::MIN_LEN {
            return Err(self.error("snake must be at least 3 cells long"));
        }
        if !cells.iter().all_unique() {
            return Err(self.error("snake cells overlap"));
        }
        if !cells.iter().tuple_windows().all(|(a, b)| a.dir_to(*b).is_some()) {
            return Err(self.error("snake cells aren't contiguous"));
        }

        // heading away from the neck
        let dir = cells[1]
            .dir_to(cells[0])
            .ok_or_else(|| self.error("snake cells aren't contiguous"))?;
        Ok((cells.iter().copied().collect(), dir))
    }
}
