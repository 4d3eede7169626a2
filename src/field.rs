use crate::{Error, Rule};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A bounded field of cells, updated one whole generation at a time.
///
/// Cells are stored in a flat row-major array. A second array of the same
/// shape holds the generation being computed; `step` writes it out completely
/// before swapping it in, so a generation is always computed against the full
/// pre-update snapshot. Positions outside the field count as dead: there is
/// no wraparound, edge and corner cells simply have fewer neighbors.
pub struct LifeField {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    rule: Rule,
}

impl LifeField {
    /// Creates a field filled with dead cells.
    pub fn blank(width: usize, height: usize, rule: Rule) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_configuration(format!(
                "field dimensions must be positive, got {width}x{height}"
            )));
        }
        let size = width * height;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
            rule,
        })
    }

    /// Creates a field with every cell independently alive with probability
    /// `fill_rate`.
    pub fn random(
        width: usize,
        height: usize,
        rule: Rule,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, Error> {
        let mut result = Self::blank(width, height, rule)?;
        result.randomize(seed, fill_rate)?;
        Ok(result)
    }

    /// Refills the field with random cells. Pass a seed to make the outcome
    /// reproducible.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) -> Result<(), Error> {
        if !(0. ..=1.).contains(&fill_rate) {
            return Err(Error::invalid_configuration(format!(
                "fill rate must be within [0, 1], got {fill_rate}"
            )));
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        Ok(())
    }

    /// `(width, height)` of the field.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells_curr[x + y * self.width]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells_curr[x + y * self.width] = state;
    }

    /// The current generation, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    /// Iterates over `(x, y, alive)` for every cell of the current generation.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells_curr
            .iter()
            .enumerate()
            .map(|(i, &alive)| (i % self.width, i / self.width, alive))
    }

    /// Number of live cells among the up to 8 neighbors of `(x, y)`.
    /// Neighbor positions outside the field count as dead.
    pub fn neighbor_count(&self, x: usize, y: usize) -> usize {
        let x1 = x.saturating_sub(1);
        let y1 = y.saturating_sub(1);
        let x2 = (x + 1).min(self.width - 1);
        let y2 = (y + 1).min(self.height - 1);
        let mut neibs = 0;
        for ny in y1..=y2 {
            for nx in x1..=x2 {
                neibs += self.cells_curr[nx + ny * self.width] as usize;
            }
        }
        neibs - self.cells_curr[x + y * self.width] as usize
    }

    /// Advances the field by one generation.
    ///
    /// The next generation is computed for every cell against the current one,
    /// then committed wholesale by swapping the two buffers. Neighbor counts
    /// never observe a partially updated field.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.neighbor_count(x, y);
                let idx = x + y * self.width;
                self.cells_next[idx] = self.rule.next_state(self.cells_curr[idx], neibs);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }

    /// Advances the field by `generations` generations.
    pub fn update(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Flips a single cell of the current generation. Does not advance the
    /// simulation.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.cells_curr[x + y * self.width] ^= true;
        Ok(())
    }
}

/// Maps a window pixel position to cell coordinates by floor division.
///
/// Pixels left of or above the field origin map to negative cells; callers
/// reject those before indexing.
pub fn pixel_to_cell(px: i64, py: i64, cell_width: usize, cell_height: usize) -> (i64, i64) {
    (
        px.div_euclid(cell_width as i64),
        py.div_euclid(cell_height as i64),
    )
}
