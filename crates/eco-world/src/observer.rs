//! Step observers that receive the grid after every step.

use crate::grid::Grid;
use eco_core::Result;
use std::io::Write;

/// Receives the grid once per completed step
pub trait Observer {
    fn observe(&mut self, step: u64, grid: &Grid) -> Result<()>;
}

impl<F> Observer for F
where
    F: FnMut(u64, &Grid) -> Result<()>,
{
    fn observe(&mut self, step: u64, grid: &Grid) -> Result<()> {
        self(step, grid)
    }
}

/// Observer that ignores every step
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Observer for Discard {
    fn observe(&mut self, _step: u64, _grid: &Grid) -> Result<()> {
        Ok(())
    }
}

/// Writes each step as a `Step <n>:` header, the grid rows and a blank line
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for TextRenderer<W> {
    fn observe(&mut self, step: u64, grid: &Grid) -> Result<()> {
        writeln!(self.out, "Step {}:", step)?;
        write!(self.out, "{}", grid)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
