//! Two navies taking turns firing at each other.

use log::{debug, info};

use crate::common::{CellState, NavyError};
use crate::coordinate::Coordinate;
use crate::navy::Navy;

/// One of the two players of an engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of an engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementStatus {
    InProgress,
    Won(Side),
}

/// Referee alternating shots between two deployed navies.
pub struct Engagement {
    navies: [Navy; 2],
    turn: Side,
    shots: [usize; 2],
}

impl Engagement {
    /// Start an engagement; `Side::First` fires first.
    pub fn new(first: Navy, second: Navy) -> Result<Self, NavyError> {
        if !first.is_deployed() || !second.is_deployed() {
            return Err(NavyError::NotDeployed);
        }
        if first.ocean_size() != second.ocean_size() || first.levels() != second.levels() {
            return Err(NavyError::MismatchedOceans);
        }
        Ok(Self {
            navies: [first, second],
            turn: Side::First,
            shots: [0; 2],
        })
    }

    /// Side whose shot is next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn navy(&self, side: Side) -> &Navy {
        &self.navies[side.index()]
    }

    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// The side whose opponent's fleet is destroyed, if any.
    pub fn winner(&self) -> Option<Side> {
        [Side::First, Side::Second]
            .into_iter()
            .find(|&side| self.navy(side.opponent()).fleet_destroyed())
    }

    pub fn status(&self) -> EngagementStatus {
        match self.winner() {
            Some(side) => EngagementStatus::Won(side),
            None => EngagementStatus::InProgress,
        }
    }

    /// Fire the current side's shot at `target` on the opponent's ocean.
    ///
    /// The result is mirrored onto the shooter's enemy ocean and the turn
    /// passes to the opponent. A rejected shot keeps the turn.
    pub fn fire(&mut self, target: Coordinate) -> Result<CellState, NavyError> {
        if self.winner().is_some() {
            return Err(NavyError::EngagementOver);
        }
        let shooter = self.turn;
        let defender = shooter.opponent();
        let result = self.navies[defender.index()].receive_attack(target)?;
        self.navies[shooter.index()].record_outgoing_attack(target, result)?;
        self.shots[shooter.index()] += 1;
        debug!("{:?} fired at {} -> {:?}", shooter, target, result);
        if self.navies[defender.index()].is_fleet_destroyed() {
            info!("{:?} wins after {} shots", shooter, self.shots[shooter.index()]);
        } else {
            self.turn = defender;
        }
        Ok(result)
    }

    /// Give the navies back, first side first.
    pub fn into_navies(self) -> (Navy, Navy) {
        let [first, second] = self.navies;
        (first, second)
    }
}
