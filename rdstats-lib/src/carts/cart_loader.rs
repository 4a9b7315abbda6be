use super::{CartType, RivendellCart, repair_cart_dump};
use crate::Result;
use camino::Utf8Path;
use core::cmp::Ordering;
use csv::Reader;
use ohno::IntoAppError;
use std::collections::{HashMap, HashSet};
use std::fs;

const LOG_TARGET: &str = "     carts";

/// Loads a cart dump and applies the record filters shared by every command.
#[derive(Debug, Clone, Default)]
pub struct CartLoader {
    /// Carts in these groups are dropped
    pub excluded_groups: HashSet<String>,

    /// Keep macro carts instead of dropping them
    pub include_macros: bool,

    /// Keep every cut instead of only the lowest-numbered cut of each cart
    pub include_all_cuts: bool,
}

impl CartLoader {
    /// Read, repair, parse, and filter the cart dump at `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load_file(&self, path: &Utf8Path) -> Result<Vec<RivendellCart>> {
        let bytes = fs::read(path).into_app_err_with(|| format!("reading cart dump '{path}'"))?;
        let text = String::from_utf8_lossy(&bytes);
        self.load_str(&text).into_app_err_with(|| format!("loading cart dump '{path}'"))
    }

    pub fn load_str(&self, text: &str) -> Result<Vec<RivendellCart>> {
        let repaired = repair_cart_dump(text)?;
        let carts = parse_carts(&repaired)?;
        let total = carts.len();

        let carts = self.apply_filters(carts);
        log::info!(target: LOG_TARGET, "Loaded {total} cart row(s), {} left after filtering", carts.len());

        Ok(carts)
    }

    /// Drop excluded groups, then macro carts, then extra cuts, as configured.
    #[must_use]
    pub fn apply_filters(&self, carts: Vec<RivendellCart>) -> Vec<RivendellCart> {
        let carts = carts.into_iter().filter(|cart| {
            let keep = !self.excluded_groups.contains(&cart.group_name);
            if !keep {
                log::trace!(target: LOG_TARGET, "Excluding cart {} in group '{}'", cart.cart_number, cart.group_name);
            }
            keep
        });

        let carts: Vec<RivendellCart> = if self.include_macros {
            carts.collect()
        } else {
            carts.filter(|cart| cart.cart_type != CartType::Macro).collect()
        };

        if self.include_all_cuts { carts } else { keep_lowest_cuts(carts) }
    }
}

/// Deserialize every record of a repaired cart dump.
pub fn parse_carts(text: &str) -> Result<Vec<RivendellCart>> {
    let mut reader = Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    log::debug!(target: LOG_TARGET, "Cart dump has {} column(s)", headers.len());

    let mut carts = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cart: RivendellCart = record.deserialize(Some(&headers))?;
        carts.push(cart);
    }

    Ok(carts)
}

/// Keep the lowest-numbered cut of each cart, in the order carts are first seen.
pub fn keep_lowest_cuts(carts: Vec<RivendellCart>) -> Vec<RivendellCart> {
    let mut kept: Vec<RivendellCart> = Vec::with_capacity(carts.len());
    let mut index_by_cart: HashMap<String, usize> = HashMap::with_capacity(carts.len());

    for cart in carts {
        if let Some(&index) = index_by_cart.get(&cart.cart_number) {
            if let Some(existing) = kept.get_mut(index)
                && compare_cut_numbers(&cart.cut_number, &existing.cut_number) == Ordering::Less
            {
                *existing = cart;
            }
        } else {
            let _ = index_by_cart.insert(cart.cart_number.clone(), kept.len());
            kept.push(cart);
        }
    }

    kept
}

/// Compare cut numbers numerically when both are numbers, textually otherwise.
fn compare_cut_numbers(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Read a list file holding one entry per line, skipping blank lines.
pub fn read_list_file(path: &Utf8Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading list file '{path}'"))?;
    Ok(parse_list(&text))
}

fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches(['\r', '\n']))
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
