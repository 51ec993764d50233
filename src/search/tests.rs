use super::*;

fn run(strategy: &dyn SearchStrategy, target: &[f32], vecs: &[Vec<f32>], k: usize) -> Vec<usize> {
    let mut iter = vecs.iter().map(|v| v.as_slice());
    strategy.search(target, &mut iter, k)
}

#[test]
fn test_nearest_euclidean() {
    let vecs = vec![vec![10.0, 0.0], vec![1.0, 0.0], vec![5.0, 0.0]];
    let res = run(&Nearest(Metric::Euclidean), &[0.0, 0.0], &vecs, 2);
    assert_eq!(res, vec![1, 2]);
}

#[test]
fn test_farthest_euclidean() {
    let vecs = vec![vec![10.0, 0.0], vec![1.0, 0.0], vec![5.0, 0.0]];
    let res = run(&Farthest(Metric::Euclidean), &[0.0, 0.0], &vecs, 2);
    assert_eq!(res, vec![0, 2]);
}

#[test]
fn test_nearest_cosine() {
    let vecs = vec![vec![0.0, 1.0], vec![1.0, 0.1], vec![-1.0, 0.0]];
    let res = run(&Nearest(Metric::Cosine), &[1.0, 0.0], &vecs, 1);
    assert_eq!(res, vec![1]);
}

#[test]
fn test_farthest_cosine() {
    let vecs = vec![vec![0.0, 1.0], vec![1.0, 0.1], vec![-1.0, 0.0]];
    let res = run(&Farthest(Metric::Cosine), &[1.0, 0.0], &vecs, 1);
    assert_eq!(res, vec![2]);
}

#[test]
fn test_k_larger_than_candidates() {
    let vecs = vec![vec![1.0], vec![2.0]];
    let res = run(&Nearest(Metric::Euclidean), &[0.0], &vecs, 10);
    assert_eq!(res, vec![0, 1]);
}

#[test]
fn test_k_zero_and_empty() {
    let vecs = vec![vec![1.0], vec![2.0]];
    assert!(run(&Nearest(Metric::Euclidean), &[0.0], &vecs, 0).is_empty());
    assert!(run(&Farthest(Metric::Euclidean), &[0.0], &[], 3).is_empty());
}

#[test]
fn test_mismatched_candidates_skipped() {
    let vecs = vec![vec![1.0, 1.0, 1.0], vec![3.0, 0.0], vec![2.0, 0.0]];
    let res = run(&Nearest(Metric::Euclidean), &[0.0, 0.0], &vecs, 3);
    assert_eq!(res, vec![2, 1]);
}

#[test]
fn test_ties_keep_candidate_order() {
    let vecs = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, 0.0]];
    let res = run(&Nearest(Metric::Euclidean), &[0.0, 0.0], &vecs, 3);
    assert_eq!(res, vec![0, 1, 2]);
}

#[test]
fn test_candidates_fully_consumed() {
    let vecs = vec![vec![1.0], vec![2.0], vec![3.0]];
    let mut iter = vecs.iter().map(|v| v.as_slice());
    let _ = Nearest(Metric::Euclidean).search(&[0.0], &mut iter, 1);
    assert!(iter.next().is_none());
}

#[test]
fn test_metric_serde_names() {
    assert_eq!(serde_json::to_string(&Metric::Cosine).unwrap(), "\"cosine\"");
    let m: Metric = serde_json::from_str("\"euclidean\"").unwrap();
    assert_eq!(m, Metric::Euclidean);
}

#[test]
fn test_metric_display_matches_serde() {
    for m in [Metric::Cosine, Metric::Euclidean] {
        assert_eq!(format!("\"{}\"", m), serde_json::to_string(&m).unwrap());
    }
}
