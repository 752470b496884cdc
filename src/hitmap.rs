use chrono::NaiveDate;
use ratatui::layout::{Position, Rect};

use crate::calendar::{ItemRef, ProjectId};

/// Something the mouse can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Day(NaiveDate),
    Item(NaiveDate, ItemRef),
    Project(ProjectId),
    AllProjects,
    PersonalFilter,
}

/// Screen regions recorded during the last draw, most specific last.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: Target) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Innermost target under the cursor. Items are recorded after their day
    /// cell, so the reverse scan finds them first.
    pub fn hit(&self, column: u16, row: u16) -> Option<&Target> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| target)
    }

    /// Last recorded area for `target`.
    pub fn area_of(&self, target: &Target) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, t)| t == target)
            .map(|(area, _)| *area)
    }

    /// Day under the cursor, whether it hit the cell or an item in it.
    pub fn day_at(&self, column: u16, row: u16) -> Option<NaiveDate> {
        self.regions
            .iter()
            .rev()
            .filter(|(area, _)| area.contains(Position::new(column, row)))
            .find_map(|(_, target)| match target {
                Target::Day(date) | Target::Item(date, _) => Some(*date),
                _ => None,
            })
    }
}
