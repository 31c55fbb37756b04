use mokp_utils::*;

fn sorted_points(frontier: Frontier) -> Vec<Point> {
    let mut points = frontier.into_points();
    points.sort();
    points
}

#[test]
fn test_pareto_compare() {
    let a: Point = vec![1, 0];
    assert_eq!(a.pareto_compare(&vec![1, 0]), ParetoCompare::Equal);
    assert_eq!(a.pareto_compare(&vec![1, 1]), ParetoCompare::BDominatesA);
    assert_eq!(a.pareto_compare(&vec![0, 0]), ParetoCompare::ADominatesB);
    assert_eq!(a.pareto_compare(&vec![0, 1]), ParetoCompare::Incomparable);
}

#[test]
fn test_dominates() {
    let p: Point = vec![2, 3];
    assert!(!p.dominates(&vec![2, 3]));
    assert!(p.dominates(&vec![0, 0]));
    assert!(p.dominates(&vec![2, 2]));
    assert!(!p.dominates(&vec![3, 1]));
    assert!(!vec![3, 1].dominates(&p));
}

#[test]
fn test_zero_point() {
    assert_eq!(zero_point(3), vec![0, 0, 0]);
}

#[test]
fn test_translate_point() {
    let p: Point = vec![1, 2, 3];
    assert_eq!(p.translate(&vec![10, 0, -1]), vec![11, 2, 2]);
    // fresh allocation, input untouched
    assert_eq!(p, vec![1, 2, 3]);
}

#[test]
fn test_translate_frontier() {
    let mut frontier = Frontier::with_capacity(4, 2).unwrap();
    frontier.push(vec![1, 2]).unwrap();
    frontier.push(vec![3, 0]).unwrap();

    let shifted = frontier.translate(&vec![10, 5]).unwrap();
    assert_eq!(shifted.len(), frontier.len());
    assert_eq!(sorted_points(shifted), vec![vec![11, 7], vec![13, 5]]);
}

#[test]
fn test_merge() {
    let mut a = Frontier::with_capacity(2, 2).unwrap();
    a.push(vec![3, 1]).unwrap();
    a.push(vec![1, 3]).unwrap();
    let mut b = Frontier::with_capacity(2, 2).unwrap();
    b.push(vec![2, 2]).unwrap();
    b.push(vec![0, 0]).unwrap();

    // (0,0) is dominated and excluded; no other eliminations apply
    let merged = a.merge(&b).unwrap();
    assert_eq!(
        sorted_points(merged),
        vec![vec![1, 3], vec![2, 2], vec![3, 1]]
    );
}

#[test]
fn test_merge_equal_points() {
    let mut a = Frontier::with_capacity(2, 2).unwrap();
    a.push(vec![1, 1]).unwrap();
    let mut b = Frontier::with_capacity(2, 2).unwrap();
    b.push(vec![1, 1]).unwrap();

    // an equal pair is represented exactly once
    let merged = a.merge(&b).unwrap();
    assert_eq!(sorted_points(merged), vec![vec![1, 1]]);
}

#[test]
fn test_merge_with_empty() {
    let mut a = Frontier::with_capacity(2, 2).unwrap();
    a.push(vec![4, 2]).unwrap();
    let b = Frontier::with_capacity(2, 2).unwrap();

    assert_eq!(sorted_points(a.merge(&b).unwrap()), vec![vec![4, 2]]);
    assert_eq!(sorted_points(b.merge(&a).unwrap()), vec![vec![4, 2]]);
}

#[test]
fn test_growth_preserves_points() {
    let mut frontier = Frontier::with_capacity(2, 2).unwrap();
    for i in 0..20i64 {
        frontier.push(vec![i, 20 - i]).unwrap();
    }
    assert_eq!(frontier.len(), 20);
    for i in 0..20i64 {
        assert!(frontier.contains(&vec![i, 20 - i]));
    }
}

#[test]
fn test_lorenz_vector() {
    let p: Point = vec![3, 1, 2];
    assert_eq!(p.lorenz_vector(), vec![1, 3, 6]);
    assert_eq!(zero_point(2).lorenz_vector(), vec![0, 0]);
}

#[test]
fn test_lorenz_dominates() {
    // (2,2) is more equitable than (3,1): [2,4] dominates [1,4]
    let balanced: Point = vec![2, 2];
    assert!(balanced.lorenz_dominates(&vec![3, 1]));
    assert!(!vec![3, 1].lorenz_dominates(&balanced));
    // permutations share a Lorenz vector, so neither dominates
    assert!(!vec![3, 1].lorenz_dominates(&vec![1, 3]));
    assert!(!vec![1, 3].lorenz_dominates(&vec![3, 1]));
    assert!(!balanced.lorenz_dominates(&balanced));
}

#[test]
fn test_lorenz_filter() {
    let mut frontier = Frontier::with_capacity(4, 2).unwrap();
    frontier.push(vec![3, 1]).unwrap();
    frontier.push(vec![1, 3]).unwrap();
    frontier.push(vec![2, 2]).unwrap();

    let filtered = frontier.lorenz_filter().unwrap();
    assert_eq!(sorted_points(filtered), vec![vec![2, 2]]);
}

#[test]
fn test_lorenz_filter_keeps_equal_lorenz_vectors() {
    let mut frontier = Frontier::with_capacity(2, 2).unwrap();
    frontier.push(vec![5, 0]).unwrap();
    frontier.push(vec![0, 5]).unwrap();

    let filtered = frontier.lorenz_filter().unwrap();
    assert_eq!(sorted_points(filtered), vec![vec![0, 5], vec![5, 0]]);
}

#[test]
fn test_pareto_filter() {
    let points: Vec<Point> = vec![
        vec![3, 1],
        vec![1, 0],
        vec![0, 1],
        vec![1, 1],
        vec![0, 0],
        vec![2, 2],
        vec![2, 1],
        vec![1, 3],
    ];
    let frontier = Frontier::pareto_filter(&points, 2).unwrap();
    assert_eq!(
        sorted_points(frontier),
        vec![vec![1, 3], vec![2, 2], vec![3, 1]]
    );
}

#[test]
fn test_pareto_filter_deduplicates() {
    let points: Vec<Point> = vec![vec![2, 2], vec![2, 2], vec![1, 1]];
    let frontier = Frontier::pareto_filter(&points, 2).unwrap();
    assert_eq!(sorted_points(frontier), vec![vec![2, 2]]);
}
