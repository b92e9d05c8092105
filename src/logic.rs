use std::ops::Index;

use itertools::Itertools;
use varisat::{Lit, Var};

pub(crate) fn at_most_one(vars: &[Var]) -> Vec<Vec<Lit>> {
    // no two are true; (!A + !B) * (!A + !C) * ...
    vars.iter()
        .combinations(2)
        .map(|pair| vec![pair.index(0).negative(), pair.index(1).negative()])
        .collect_vec()
}

pub(crate) fn exactly_one(vars: &[Var]) -> Vec<Vec<Lit>> {
    let mut clauses = at_most_one(vars);
    // at least one var is true; A + B + C + ...
    clauses.push(vars.iter().map(|v| v.positive()).collect_vec());

    clauses
}
