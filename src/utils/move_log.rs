//! Ordered record of every move played, in notation form.
//!
//! The log only renders text; writing it anywhere is up to the caller.

use std::fmt;

use chrono::{DateTime, Local};

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedMove {
    pub color: Color,
    pub notation: String,
}

#[derive(Debug, Clone)]
pub struct MoveLog {
    started_at: DateTime<Local>,
    entries: Vec<LoggedMove>,
}

impl Default for MoveLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveLog {
    pub fn new() -> Self {
        Self::starting_at(Local::now())
    }

    pub fn starting_at(started_at: DateTime<Local>) -> Self {
        MoveLog {
            started_at,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, color: Color, notation: impl Into<String>) {
        self.entries.push(LoggedMove {
            color,
            notation: notation.into(),
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LoggedMove> {
        self.entries.last()
    }

    /// One line per half-move, numbered from 1: `Turn Number 3:  N_f3`.
    pub fn turn_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("Turn Number {}:  {}", i + 1, entry.notation))
    }
}

/// Timestamp header followed by the turn lines.
impl fmt::Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.started_at.format("%Y-%m-%d %H:%M:%S"))?;
        for line in self.turn_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
