//! Demo harness printing the trace of every routine in the collection.
//! Arguments:
//! - demo: which trace to run (all, search, sum, two-sum, brackets,
//!   subarray, palindrome, list, graph, sets, bench)

use clap::Parser;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use algo_std_rs::{brackets, graph, list, searching, sequence, strings, List};
use disjoint_set::{DisjointSet, QuickFind, QuickUnion, WeightedQuickUnion};

/// Arguments for the command line
/// - demo: trace selector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Trace selector: all, search, sum, two-sum, brackets, subarray,
    /// palindrome, list, graph, sets, bench
    #[arg(short, long, default_value_t = String::from("all"))]
    demo: String,
}

fn main() {
    let args = Args::parse();
    match args.demo.as_str() {
        "all" => {
            demo_search();
            demo_sum();
            demo_two_sum();
            demo_brackets();
            demo_subarray();
            demo_palindrome();
            demo_list();
            demo_graph();
            demo_sets();
            demo_bench();
        }
        "search" => demo_search(),
        "sum" => demo_sum(),
        "two-sum" => demo_two_sum(),
        "brackets" => demo_brackets(),
        "subarray" => demo_subarray(),
        "palindrome" => demo_palindrome(),
        "list" => demo_list(),
        "graph" => demo_graph(),
        "sets" => demo_sets(),
        "bench" => demo_bench(),
        _ => panic!("Unsupported demo"),
    }
}

fn demo_search() {
    println!("=== binary search ===");
    let list = [1, 3, 5, 7, 9];
    println!("{:?} in {:?}: {:?}", 5, list, searching::binary_search(&list, &5));
    println!("{:?} in {:?}: {:?}", -1, list, searching::binary_search(&list, &-1));
}

fn demo_sum() {
    println!("=== recursive sum ===");
    println!("sum of [2, 4, 6]: {}", sequence::recursive_sum(&[2, 4, 6]));
}

fn demo_two_sum() {
    println!("=== two sum ===");
    let nums = [2, 7, 11, 15];
    println!(
        "quadratic, target 9: {:?}",
        sequence::two_sum_quadratic(&nums, 9)
    );
    println!(
        "hashed, target 9:    {:?}",
        sequence::two_sum_hashed(&nums, 9)
    );
}

fn demo_brackets() {
    println!("=== balanced brackets ===");
    for s in ["{[()]}", "()", "()[]{}", "(]{}", "", "(", "({[}])"] {
        println!(
            "{:10} loose: {:5} strict: {}",
            format!("{:?}", s),
            brackets::is_balanced(s),
            brackets::is_balanced_strict(s)
        );
    }
}

fn demo_subarray() {
    println!("=== maximum subarray ===");
    let nums = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    println!(
        "range of {:?}: {:?}",
        nums,
        sequence::max_subarray(&nums)
    );
    println!("sum:   {}", sequence::max_subarray_sum(&nums));
}

fn demo_palindrome() {
    println!("=== palindrome ===");
    for s in ["racecar", "rust"] {
        println!("{:?}: {}", s, strings::is_palindrome(s));
    }
}

fn demo_list() {
    println!("=== linked list ===");
    let mut l: List<i32> = (1..=5).collect();
    println!("forward:  {:?}", l.iter().collect::<Vec<_>>());
    l.reverse();
    println!("reversed: {:?}", l.iter().collect::<Vec<_>>());

    let next = [Some(1), Some(2), Some(3), Some(1)];
    println!(
        "cycle in 0->1->2->3->1: {}",
        list::has_cycle(&next, 0).unwrap()
    );
}

fn demo_graph() {
    println!("=== breadth-first search ===");
    let adj = vec![vec![1, 2], vec![0, 3, 4], vec![0], vec![1], vec![1]];
    println!("visit order from 0: {:?}", graph::bfs(&adj, 0).unwrap());
    println!(
        "hops 2 -> 4: {:?}",
        graph::shortest_hops(&adj, 2, 4).unwrap()
    );
}

fn demo_sets() {
    println!("=== disjoint sets ===");
    let first = [(4, 3), (3, 8), (6, 5), (9, 4), (1, 2)];
    let second = [(5, 0), (7, 2), (6, 1)];
    let mut variants: Vec<(&str, Box<dyn DisjointSet>)> = vec![
        ("quick_find", Box::new(QuickFind::new(10))),
        ("quick_union", Box::new(QuickUnion::new(10))),
        ("weighted", Box::new(WeightedQuickUnion::new(10))),
    ];
    for (name, set) in variants.iter_mut() {
        for &(p, q) in &first {
            set.union(p, q).unwrap();
        }
        let a = set.connected(8, 9).unwrap();
        let b = set.connected(5, 0).unwrap();
        for &(p, q) in &second {
            set.union(p, q).unwrap();
        }
        let c = set.connected(9, 0).unwrap();
        let d = set.connected(2, 0).unwrap();
        println!(
            "{:13} connected(8,9)={} connected(5,0)={} connected(9,0)={} connected(2,0)={} components={}",
            name, a, b, c, d, set.count()
        );
    }
}

// Same script on each variant; quick-find pays for its O(n) unions, the
// weighted forest stays flat.
fn demo_bench() {
    println!("=== union-find timing ===");
    let n = 5000;
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let unions: Vec<(usize, usize)> = (0..n)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();
    let queries: Vec<(usize, usize)> = (0..n)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();

    let mut variants: Vec<(&str, Box<dyn DisjointSet>)> = vec![
        ("quick_find", Box::new(QuickFind::new(n))),
        ("quick_union", Box::new(QuickUnion::new(n))),
        ("weighted", Box::new(WeightedQuickUnion::new(n))),
    ];
    for (name, set) in variants.iter_mut() {
        let start = Instant::now();
        for &(p, q) in &unions {
            set.union(p, q).unwrap();
        }
        let mut hits = 0;
        for &(p, q) in &queries {
            if set.connected(p, q).unwrap() {
                hits += 1;
            }
        }
        println!(
            "{:13} n={} unions+queries in {:?}, {} connected pairs",
            name,
            n,
            start.elapsed(),
            hits
        );
    }
}
