//! Rabjung (60-year cycle) resolution.
//!
//! Each Tibetan year pairs one of 12 animals with one of 5 elements; an
//! element spans two consecutive years, the first male and the second
//! female. The first Rabjung began in Tibetan year 1154 (1027 CE) with a
//! Fire Female Rabbit year, so position 1 of every cycle is Fire Female
//! Rabbit rather than Wood Male Mouse.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::CalendarError;

/// Tibetan year in which the first Rabjung began (1027 CE).
pub const RABJUNG_EPOCH_YEAR: i32 = 1154;

/// Tibetan (royal era) year = Gregorian year of its Losar + 127.
pub const ROYAL_YEAR_OFFSET: i32 = 127;

/// The twelve animals, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Animal {
    Mouse,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Sheep,
    Monkey,
    Bird,
    Dog,
    Pig,
}

impl Animal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mouse => "Mouse",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Sheep => "Sheep",
            Self::Monkey => "Monkey",
            Self::Bird => "Bird",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

/// The five elements, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Iron,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Iron => "Iron",
            Self::Water => "Water",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// One entry of the 60-year table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CycleYear {
    pub element: Element,
    pub gender: Gender,
    pub animal: Animal,
}

impl CycleYear {
    const fn new(element: Element, gender: Gender, animal: Animal) -> Self {
        Self {
            element,
            gender,
            animal,
        }
    }
}

/// All 60 years of a Rabjung in order (index 0 = position 1).
pub const RABJUNG_YEARS: [CycleYear; 60] = [
    CycleYear::new(Element::Fire, Gender::Female, Animal::Rabbit),
    CycleYear::new(Element::Earth, Gender::Male, Animal::Dragon),
    CycleYear::new(Element::Earth, Gender::Female, Animal::Snake),
    CycleYear::new(Element::Iron, Gender::Male, Animal::Horse),
    CycleYear::new(Element::Iron, Gender::Female, Animal::Sheep),
    CycleYear::new(Element::Water, Gender::Male, Animal::Monkey),
    CycleYear::new(Element::Water, Gender::Female, Animal::Bird),
    CycleYear::new(Element::Wood, Gender::Male, Animal::Dog),
    CycleYear::new(Element::Wood, Gender::Female, Animal::Pig),
    CycleYear::new(Element::Fire, Gender::Male, Animal::Mouse),
    CycleYear::new(Element::Fire, Gender::Female, Animal::Ox),
    CycleYear::new(Element::Earth, Gender::Male, Animal::Tiger),
    CycleYear::new(Element::Earth, Gender::Female, Animal::Rabbit),
    CycleYear::new(Element::Iron, Gender::Male, Animal::Dragon),
    CycleYear::new(Element::Iron, Gender::Female, Animal::Snake),
    CycleYear::new(Element::Water, Gender::Male, Animal::Horse),
    CycleYear::new(Element::Water, Gender::Female, Animal::Sheep),
    CycleYear::new(Element::Wood, Gender::Male, Animal::Monkey),
    CycleYear::new(Element::Wood, Gender::Female, Animal::Bird),
    CycleYear::new(Element::Fire, Gender::Male, Animal::Dog),
    CycleYear::new(Element::Fire, Gender::Female, Animal::Pig),
    CycleYear::new(Element::Earth, Gender::Male, Animal::Mouse),
    CycleYear::new(Element::Earth, Gender::Female, Animal::Ox),
    CycleYear::new(Element::Iron, Gender::Male, Animal::Tiger),
    CycleYear::new(Element::Iron, Gender::Female, Animal::Rabbit),
    CycleYear::new(Element::Water, Gender::Male, Animal::Dragon),
    CycleYear::new(Element::Water, Gender::Female, Animal::Snake),
    CycleYear::new(Element::Wood, Gender::Male, Animal::Horse),
    CycleYear::new(Element::Wood, Gender::Female, Animal::Sheep),
    CycleYear::new(Element::Fire, Gender::Male, Animal::Monkey),
    CycleYear::new(Element::Fire, Gender::Female, Animal::Bird),
    CycleYear::new(Element::Earth, Gender::Male, Animal::Dog),
    CycleYear::new(Element::Earth, Gender::Female, Animal::Pig),
    CycleYear::new(Element::Iron, Gender::Male, Animal::Mouse),
    CycleYear::new(Element::Iron, Gender::Female, Animal::Ox),
    CycleYear::new(Element::Water, Gender::Male, Animal::Tiger),
    CycleYear::new(Element::Water, Gender::Female, Animal::Rabbit),
    CycleYear::new(Element::Wood, Gender::Male, Animal::Dragon),
    CycleYear::new(Element::Wood, Gender::Female, Animal::Snake),
    CycleYear::new(Element::Fire, Gender::Male, Animal::Horse),
    CycleYear::new(Element::Fire, Gender::Female, Animal::Sheep),
    CycleYear::new(Element::Earth, Gender::Male, Animal::Monkey),
    CycleYear::new(Element::Earth, Gender::Female, Animal::Bird),
    CycleYear::new(Element::Iron, Gender::Male, Animal::Dog),
    CycleYear::new(Element::Iron, Gender::Female, Animal::Pig),
    CycleYear::new(Element::Water, Gender::Male, Animal::Mouse),
    CycleYear::new(Element::Water, Gender::Female, Animal::Ox),
    CycleYear::new(Element::Wood, Gender::Male, Animal::Tiger),
    CycleYear::new(Element::Wood, Gender::Female, Animal::Rabbit),
    CycleYear::new(Element::Fire, Gender::Male, Animal::Dragon),
    CycleYear::new(Element::Fire, Gender::Female, Animal::Snake),
    CycleYear::new(Element::Earth, Gender::Male, Animal::Horse),
    CycleYear::new(Element::Earth, Gender::Female, Animal::Sheep),
    CycleYear::new(Element::Iron, Gender::Male, Animal::Monkey),
    CycleYear::new(Element::Iron, Gender::Female, Animal::Bird),
    CycleYear::new(Element::Water, Gender::Male, Animal::Dog),
    CycleYear::new(Element::Water, Gender::Female, Animal::Pig),
    CycleYear::new(Element::Wood, Gender::Male, Animal::Mouse),
    CycleYear::new(Element::Wood, Gender::Female, Animal::Ox),
    CycleYear::new(Element::Fire, Gender::Male, Animal::Tiger),
];

/// A Tibetan year located in its Rabjung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RabjungYear {
    /// 1-based Rabjung number; 17 began in 1987.
    pub rabjung: i32,
    /// 1-based position within the cycle (1..=60).
    pub position_in_cycle: u8,
    pub animal: Animal,
    pub element: Element,
    pub gender: Gender,
}

impl Display for RabjungYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rabjung {}, year {}: {} {} {}",
            self.rabjung,
            self.position_in_cycle,
            self.element.name(),
            self.gender.name(),
            self.animal.name()
        )
    }
}

/// Locate an absolute Tibetan year in the 60-year cycle.
///
/// Years before the first Rabjung get proleptic cycle numbers (0, -1, ...).
pub fn cycle_for_year(tibetan_year: i32) -> RabjungYear {
    let offset = i64::from(tibetan_year) - i64::from(RABJUNG_EPOCH_YEAR);
    let index = offset.rem_euclid(60) as usize;
    let entry = RABJUNG_YEARS[index];
    RabjungYear {
        rabjung: (offset.div_euclid(60) + 1) as i32,
        position_in_cycle: index as u8 + 1,
        animal: entry.animal,
        element: entry.element,
        gender: entry.gender,
    }
}

/// Cycle attributes for a year that may be unresolved upstream.
pub fn resolve_cycle(tibetan_year: Option<i32>) -> Result<RabjungYear, CalendarError> {
    tibetan_year
        .map(cycle_for_year)
        .ok_or(CalendarError::YearOutOfCoverage)
}

/// Tibetan year whose Losar falls in `gregorian_year`.
pub fn tibetan_year_from_gregorian(gregorian_year: i32) -> i32 {
    gregorian_year + ROYAL_YEAR_OFFSET
}
