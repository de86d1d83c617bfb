use disjoint_set::{DisjointSet, QuickFind, QuickUnion, WeightedQuickUnion};

/// One fresh instance of every variant, labeled for assertion messages.
pub fn all_variants(n: usize) -> Vec<(&'static str, Box<dyn DisjointSet>)> {
    vec![
        ("quick_find", Box::new(QuickFind::new(n)) as Box<dyn DisjointSet>),
        ("quick_union", Box::new(QuickUnion::new(n))),
        ("weighted_quick_union", Box::new(WeightedQuickUnion::new(n))),
    ]
}

pub fn apply_unions(set: &mut dyn DisjointSet, script: &[(usize, usize)]) {
    for &(p, q) in script {
        set.union(p, q).unwrap();
    }
}
