//! Interactive figure manager over a token stream.
//!
//! The session owns a `ShapeList` and maps menu choices onto its operations.
//! Core errors are reported as `Error: <reason>` and the loop continues;
//! only I/O failures end the session.

use anyhow::Result;
use figures::{Point, Polygon, Rhombus, Shape, ShapeKind, ShapeList, TransferError, Trapezoid};
use std::io::{self, BufRead, Write};

use crate::tokens::Tokens;

const MENU: &str = "\
1. Add Trapezoid
2. Add Rhombus
3. Add Pentagon
4. Remove figure by index
5. Print all figures (with centres and areas)
6. Show total area
7. Demonstrate operations (copy, move, compare)
0. Exit
Choice: ";

enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    input: Tokens<R>,
    out: W,
    shapes: ShapeList,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input: Tokens::new(input),
            out,
            shapes: ShapeList::new(),
        }
    }

    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `0` is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "= Manage figures =")?;
        loop {
            write!(self.out, "{MENU}")?;
            self.out.flush()?;
            let Some(token) = self.input.next_token()? else {
                tracing::debug!("input closed");
                return Ok(());
            };
            match self.step(&token) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) if e.downcast_ref::<io::Error>().is_some() => return Err(e),
                Err(e) => {
                    tracing::debug!(error = %e, "menu action failed");
                    writeln!(self.out, "Error: {e}")?;
                    self.input.discard_line();
                }
            }
        }
    }

    fn step(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add(ShapeKind::Trapezoid)?,
            "2" => self.add(ShapeKind::Rhombus)?,
            "3" => self.add(ShapeKind::Pentagon)?,
            "4" => self.remove()?,
            "5" => self.print_all()?,
            "6" => self.total_area()?,
            "7" => self.demonstrate()?,
            "0" => {
                writeln!(self.out, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
            _ => {
                writeln!(self.out, "Invalid choice!")?;
                self.input.discard_line();
            }
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, kind: ShapeKind) -> Result<()> {
        let n = 2 * kind.vertex_count();
        write!(
            self.out,
            "Enter {} vertices for {} ({n} numbers): ",
            kind.vertex_count(),
            kind.label()
        )?;
        self.out.flush()?;
        let tokens = self.input.take(n)?;
        let shape = Shape::read(kind, &mut tokens.iter().map(String::as_str))?;
        tracing::info!(%kind, index = self.shapes.len(), "shape added");
        self.shapes.push(shape);
        writeln!(self.out, "{kind} added successfully!")?;
        Ok(())
    }

    /// Parse the next token as an index; `None` if missing or not a number.
    fn read_index(&mut self, prompt: &str) -> Result<Option<usize>> {
        write!(self.out, "{prompt} (0-{}): ", self.shapes.len().saturating_sub(1))?;
        self.out.flush()?;
        Ok(self.input.next_token()?.and_then(|t| t.parse().ok()))
    }

    fn remove(&mut self) -> Result<()> {
        if self.shapes.is_empty() {
            writeln!(self.out, "No figure to remove")?;
            return Ok(());
        }
        let index = self.read_index("Enter index to remove")?;
        match index.and_then(|i| self.shapes.remove(i)) {
            Some(_) => writeln!(self.out, "Figure removed!")?,
            None => writeln!(self.out, "Invalid index!")?,
        }
        Ok(())
    }

    fn print_all(&mut self) -> Result<()> {
        if self.shapes.is_empty() {
            writeln!(self.out, "No figures to display!")?;
            return Ok(());
        }
        writeln!(self.out, "\n= All Figures =")?;
        for (i, shape) in self.shapes.iter().enumerate() {
            writeln!(self.out, "Figure {i}: {shape}")?;
            match (shape.centroid(), shape.area()) {
                (Ok(c), Ok(a)) => writeln!(
                    self.out,
                    "  Centre: ({:.2}, {:.2}), Area: {a:.2}",
                    c.x, c.y
                )?,
                (Err(e), _) | (_, Err(e)) => writeln!(self.out, "  ({e})")?,
            }
        }
        Ok(())
    }

    fn total_area(&mut self) -> Result<()> {
        if self.shapes.is_empty() {
            writeln!(self.out, "No figures - total area is 0")?;
            return Ok(());
        }
        let total = self.shapes.total_area()?;
        writeln!(self.out, "Total area of all figures: {total:.2}")?;
        Ok(())
    }

    fn demonstrate(&mut self) -> Result<()> {
        if self.shapes.is_empty() {
            writeln!(self.out, "No figures available for demonstration!")?;
            return Ok(());
        }
        writeln!(self.out, "\n= Demonstration =")?;
        writeln!(self.out, "Available figures:")?;
        for (i, shape) in self.shapes.iter().enumerate() {
            writeln!(self.out, "[{i}] {}: {shape}", shape.kind())?;
        }
        self.demo_copy()?;
        self.demo_move()?;
        self.demo_compare()
    }

    fn demo_copy(&mut self) -> Result<()> {
        writeln!(self.out, "\n1. COPY:")?;
        let index = match self.read_index("Enter index of figure to copy")? {
            Some(i) if i < self.shapes.len() => i,
            _ => {
                writeln!(self.out, "Invalid index! Using first figure.")?;
                0
            }
        };
        let original = &self.shapes.as_slice()[index];
        let copy = original.duplicate();
        writeln!(self.out, "Original: {original}")?;
        writeln!(self.out, "Copy: {copy}")?;
        writeln!(self.out, "Are equal: {}", *original == copy)?;
        Ok(())
    }

    fn demo_move(&mut self) -> Result<()> {
        writeln!(self.out, "\n2. MOVE:")?;
        if self.shapes.len() < 2 {
            writeln!(self.out, "Need at least 2 figures for move operation!")?;
            return Ok(());
        }
        let src = self.read_index("Enter source index")?;
        let dst = self.read_index("Enter destination index")?;
        let (src, dst) = match (src, dst) {
            (Some(s), Some(d)) if s < self.shapes.len() && d < self.shapes.len() => (s, d),
            _ => {
                writeln!(self.out, "Invalid indexes! Using automatic demonstration.")?;
                let a = Trapezoid::new(pt(0.0, 0.0), pt(5.0, 0.0), pt(4.0, 3.0), pt(1.0, 3.0))?;
                let b = Trapezoid::new(pt(1.0, 1.0), pt(6.0, 1.0), pt(5.0, 4.0), pt(2.0, 4.0))?;
                return self.demo_temporary_move(a, b, Trapezoid::take);
            }
        };

        writeln!(self.out, "Before move:")?;
        self.print_pair("Source", src, "Destination", dst)?;
        let backups = (self.shapes.duplicate(src), self.shapes.duplicate(dst));
        match self.shapes.transfer(src, dst) {
            Ok(()) => {
                writeln!(self.out, "After move:")?;
                self.print_pair("Source", src, "Destination", dst)?;
                if let (Some(s), Some(d)) = backups {
                    self.restore(src, s);
                    self.restore(dst, d);
                }
                writeln!(self.out, "After restoration:")?;
                self.print_pair("Source", src, "Destination", dst)?;
                Ok(())
            }
            Err(TransferError::KindMismatch { .. }) => {
                writeln!(
                    self.out,
                    "Can't move different figure types! Using temporary objects"
                )?;
                let a = Rhombus::new(pt(0.0, 0.0), pt(2.0, 3.0), pt(4.0, 0.0), pt(2.0, -3.0))?;
                let b = Rhombus::new(pt(1.0, 1.0), pt(3.0, 4.0), pt(5.0, 1.0), pt(3.0, -2.0))?;
                self.demo_temporary_move(a, b, Rhombus::take)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn demo_temporary_move<T: Polygon>(
        &mut self,
        mut first: T,
        mut second: T,
        take: fn(&mut T) -> T,
    ) -> Result<()> {
        writeln!(self.out, "Temp1 before move: {first}")?;
        writeln!(self.out, "Temp2 before move: {second}")?;
        second = take(&mut first);
        writeln!(self.out, "After move:")?;
        writeln!(self.out, "Temp1: {first}")?;
        writeln!(self.out, "Temp2: {second}")?;
        Ok(())
    }

    fn restore(&mut self, index: usize, backup: Shape) {
        if let Some(slot) = self.shapes.get_mut(index) {
            *slot = backup;
        }
    }

    fn print_pair(&mut self, a_label: &str, a: usize, b_label: &str, b: usize) -> Result<()> {
        let slice = self.shapes.as_slice();
        writeln!(self.out, "{a_label}: {}", slice[a])?;
        writeln!(self.out, "{b_label}: {}", slice[b])?;
        Ok(())
    }

    fn demo_compare(&mut self) -> Result<()> {
        writeln!(self.out, "\n3. COMPARE:")?;
        if self.shapes.len() < 2 {
            writeln!(self.out, "Need at least 2 figures for comparison!")?;
            return Ok(());
        }
        let first = self.read_index("Enter first figure index")?;
        let second = self.read_index("Enter second figure index")?;
        let (i, j) = match (first, second) {
            (Some(i), Some(j)) if i < self.shapes.len() && j < self.shapes.len() => (i, j),
            _ => {
                writeln!(self.out, "Invalid indexes! Using first 2 figures")?;
                (0, 1)
            }
        };
        let slice = self.shapes.as_slice();
        let (a, b) = (&slice[i], &slice[j]);
        writeln!(self.out, "Figure 1 ({}): {a}", a.kind())?;
        writeln!(self.out, "Figure 2 ({}): {b}", b.kind())?;
        writeln!(self.out, "Figure 1 == Figure 2: {}", a == b)?;
        writeln!(self.out, "Figure 1 != Figure 2: {}", a != b)?;
        Ok(())
    }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}
