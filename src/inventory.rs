use std::collections::BTreeMap;

use itertools::Itertools;
use log::{debug, trace};

use crate::error::Error;
use crate::parser::parse_item_value;

pub type ElfId = usize;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FoodItem {
    pub calories: f64,
}

/// The food items each elf is carrying, keyed by the order the elves appear in the input.
///
/// Ids are dense: an elf with nothing (two blank lines in a row, or a blank line at the end)
/// still gets an entry with no items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    elves: BTreeMap<ElfId, Vec<FoodItem>>,
}

fn add_up<I>(calories: I) -> f64
where
    I: Iterator<Item = f64>,
{
    // Not `Sum`, which starts from -0.0 and would print an empty total as "-0.0".
    calories.fold(0.0, |acc, c| acc + c)
}

impl Inventory {
    pub fn from_lines<I, S>(lines: I) -> Result<Inventory, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut elves = BTreeMap::new();
        let mut elf: ElfId = 0;
        let mut items = vec![];

        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.is_empty() {
                debug!("elf {} carries {} items", elf, items.len());
                elves.insert(elf, std::mem::take(&mut items));
                elf += 1;
            } else {
                let calories =
                    parse_item_value(line).map_err(|source| Error::MalformedItem {
                        line: i + 1,
                        value: line.to_owned(),
                        source,
                    })?;
                trace!("elf {}: {}", elf, calories);
                items.push(FoodItem { calories });
            }
        }

        debug!("elf {} carries {} items", elf, items.len());
        elves.insert(elf, items);

        Ok(Inventory { elves })
    }

    pub fn len(&self) -> usize {
        self.elves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elves.is_empty()
    }

    pub fn items(&self, elf: ElfId) -> Option<&[FoodItem]> {
        self.elves.get(&elf).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElfId, &[FoodItem])> {
        self.elves.iter().map(|(elf, items)| (*elf, items.as_slice()))
    }

    pub fn totals(&self) -> BTreeMap<ElfId, f64> {
        self.iter()
            .map(|(elf, items)| (elf, add_up(items.iter().map(|i| i.calories))))
            .collect()
    }

    pub fn max_total(&self) -> Result<f64, Error> {
        self.totals()
            .into_values()
            .max_by(|a, b| a.total_cmp(b))
            .ok_or(Error::NoGroups)
    }

    /// The elf with the largest total. Ties go to whichever comes first in the input.
    pub fn richest_elf(&self) -> Result<(ElfId, f64), Error> {
        self.totals()
            .into_iter()
            .min_by(|(_, a), (_, b)| b.total_cmp(a))
            .ok_or(Error::NoGroups)
    }

    /// Sum of the `n` largest totals, added smallest first.
    pub fn top_n_total(&self, n: usize) -> Result<f64, Error> {
        if n > self.len() {
            return Err(Error::TooFewGroups {
                requested: n,
                available: self.len(),
            });
        }

        let top = self
            .totals()
            .into_values()
            .sorted_by(|a, b| a.total_cmp(b))
            .skip(self.len() - n);

        Ok(add_up(top))
    }
}
