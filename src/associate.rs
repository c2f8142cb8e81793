use std::collections::{BTreeMap, HashSet};

use log::trace;
use nalgebra::{Point2, distance};
use pathfinding::prelude::{Matrix, kuhn_munkres_min};

use crate::tracker::Identity;

// used to convert distances, relative to the threshold, to
// integers since the weight matrix of the hungarian algorithm
// only accepts integers.
const DISTANCE_MULTIPLIER: f64 = 1_000_000.0;

/// Greedy association of detection centroids to live identities.
///
/// ## Args
///  - centroids: Centroids of the frame's detections, in input order.
///  - registry: Last known centroid of every live identity.
///  - threshold: Exclusive upper bound on the centroid distance of a match.
///
/// Each centroid, in input order, takes the first identity in ascending
/// order that lies within the threshold and was not taken by an earlier
/// centroid of the same frame. Returns the matched identity per centroid.
pub fn greedy_first_match(
    centroids: &[Point2<f64>],
    registry: &BTreeMap<Identity, Point2<f64>>,
    threshold: f64,
) -> Vec<Option<Identity>> {
    let mut claimed = HashSet::new();

    centroids
        .iter()
        .map(|centroid| {
            let matched = registry
                .iter()
                .filter(|(id, _)| !claimed.contains(*id))
                .find(|(_, last)| distance(centroid, *last) < threshold)
                .map(|(&id, _)| id);
            if let Some(id) = matched {
                trace!("centroid {centroid} matched identity {id}");
                claimed.insert(id);
            }
            matched
        })
        .collect()
}

/// Minimum-cost association of detection centroids to live identities.
///
/// ## Args
///  - centroids: Centroids of the frame's detections, in input order.
///  - registry: Last known centroid of every live identity.
///  - threshold: Exclusive upper bound on the centroid distance of a match.
///
/// Maximises the number of matches within the threshold, then minimises
/// their summed distance. Pairs at or beyond the threshold are never
/// returned as matches.
pub fn min_cost_assignment(
    centroids: &[Point2<f64>],
    registry: &BTreeMap<Identity, Point2<f64>>,
    threshold: f64,
) -> Vec<Option<Identity>> {
    let mut matches = vec![None; centroids.len()];
    if centroids.is_empty() || registry.is_empty() {
        return matches;
    }

    let identities: Vec<(Identity, Point2<f64>)> =
        registry.iter().map(|(&id, &last)| (id, last)).collect();
    let (cost_matrix, distances) = calc_distance_cost_matrix(centroids, &identities, threshold);

    let transpose = cost_matrix.rows > cost_matrix.columns;
    let transposed;
    let weights = if transpose {
        transposed = cost_matrix.transposed();
        &transposed
    } else {
        &cost_matrix
    };
    let assignment_vector = kuhn_munkres_min(weights).1;

    for (i, &j) in assignment_vector.iter().enumerate() {
        let (centroid_index, identity_index) = if transpose { (j, i) } else { (i, j) };

        if distances[(centroid_index, identity_index)] >= threshold {
            continue;
        }
        let id = identities[identity_index].0;
        trace!(
            "centroid {} assigned identity {id}",
            centroids[centroid_index]
        );
        matches[centroid_index] = Some(id);
    }

    matches
}

fn calc_distance_cost_matrix(
    centroids: &[Point2<f64>],
    identities: &[(Identity, Point2<f64>)],
    threshold: f64,
) -> (Matrix<i64>, Matrix<f64>) {
    let rows = centroids.len();
    let columns = identities.len();

    // valid pairs cost less than DISTANCE_MULTIPLIER whatever the threshold,
    // so an out-of-range pair costs more than any complete set of valid pairs.
    let invalid_cost = (DISTANCE_MULTIPLIER as i64 + 1) * (rows.max(columns) as i64 + 1);

    let mut costs = Matrix::new(rows, columns, 0);
    let mut distances = Matrix::new(rows, columns, 0.0);

    for (i, centroid) in centroids.iter().enumerate() {
        for (j, (_, last)) in identities.iter().enumerate() {
            let dist = distance(centroid, last);
            distances[(i, j)] = dist;
            costs[(i, j)] = if dist < threshold {
                (dist / threshold * DISTANCE_MULTIPLIER) as i64
            } else {
                invalid_cost
            };
        }
    }

    (costs, distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(points: &[(Identity, f64, f64)]) -> BTreeMap<Identity, Point2<f64>> {
        points
            .iter()
            .map(|&(id, x, y)| (id, Point2::new(x, y)))
            .collect()
    }

    #[test]
    fn test_greedy_takes_lowest_identity_within_threshold() {
        let registry = registry(&[(3, 0.0, 0.0), (7, 10.0, 0.0)]);
        let centroids = vec![Point2::new(9.0, 0.0)];

        assert_eq!(greedy_first_match(&centroids, &registry, 100.0), vec![Some(3)]);
    }

    #[test]
    fn test_greedy_does_not_hand_out_an_identity_twice() {
        let registry = registry(&[(0, 0.0, 0.0)]);
        let centroids = vec![Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];

        assert_eq!(
            greedy_first_match(&centroids, &registry, 100.0),
            vec![Some(0), None]
        );
    }

    #[test]
    fn test_greedy_threshold_is_exclusive() {
        let registry = registry(&[(0, 0.0, 0.0)]);
        let centroids = vec![Point2::new(100.0, 0.0)];

        assert_eq!(greedy_first_match(&centroids, &registry, 100.0), vec![None]);
    }

    #[test]
    fn test_min_cost_resolves_crossing() {
        let registry = registry(&[(0, 0.0, 0.0), (1, 50.0, 0.0)]);
        // the first centroid is closer to identity 1, the second to identity 0.
        let centroids = vec![Point2::new(45.0, 0.0), Point2::new(5.0, 0.0)];

        assert_eq!(
            greedy_first_match(&centroids, &registry, 100.0),
            vec![Some(0), Some(1)]
        );
        assert_eq!(
            min_cost_assignment(&centroids, &registry, 100.0),
            vec![Some(1), Some(0)]
        );
    }

    #[test]
    fn test_min_cost_leaves_out_of_range_pairs_unmatched() {
        let registry = registry(&[(0, 0.0, 0.0)]);
        let centroids = vec![Point2::new(500.0, 0.0), Point2::new(3.0, 4.0)];

        assert_eq!(
            min_cost_assignment(&centroids, &registry, 100.0),
            vec![None, Some(0)]
        );
    }

    #[test]
    fn test_min_cost_with_more_identities_than_centroids() {
        let registry = registry(&[(0, 0.0, 0.0), (1, 200.0, 0.0), (2, 400.0, 0.0)]);
        let centroids = vec![Point2::new(390.0, 0.0)];

        assert_eq!(min_cost_assignment(&centroids, &registry, 100.0), vec![Some(2)]);
    }

    #[test]
    fn test_min_cost_with_huge_threshold() {
        let registry = registry(&[(0, 0.0, 0.0), (1, 50.0, 0.0)]);
        let centroids: Vec<Point2<f64>> = (0..10)
            .map(|i| Point2::new(i as f64 * 1.0e9, 0.0))
            .collect();

        let matches = min_cost_assignment(&centroids, &registry, 1.0e16);

        assert_eq!(matches.iter().flatten().count(), 2);
        assert_eq!(matches[..2], [Some(0), Some(1)]);
        assert!(matches[2..].iter().all(Option::is_none));
    }

    #[test]
    fn test_min_cost_with_empty_registry() {
        let centroids = vec![Point2::new(0.0, 0.0)];

        assert_eq!(
            min_cost_assignment(&centroids, &BTreeMap::new(), 100.0),
            vec![None]
        );
    }
}
