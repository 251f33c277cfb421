use super::*;
use crate::construction::create_initial_solution;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::*;
use crate::models::problem::{Catalog, Task};
use crate::utils::DefaultRandom;

#[test]
fn can_skip_selection_when_all_routes_are_empty() {
    let random = DefaultRandom::new_with_seed(0);
    let solution = Solution::empty(3);

    assert_eq!(select_reference_vehicle(&solution, &random), None);
}

#[test]
fn can_select_only_non_empty_route() {
    let random = DefaultRandom::new_with_seed(0);
    let solution = solution_with_routes(vec![Route::default(), route_with_tasks(&[0]), Route::default()]);

    for _ in 0..10 {
        assert_eq!(select_reference_vehicle(&solution, &random), Some(1));
    }
}

#[test]
fn can_generate_candidate_per_feasible_target() {
    let problem = create_test_problem();
    let random = DefaultRandom::new_with_seed(1);
    let evaluator = CostEvaluator::new(&problem);
    let current = create_initial_solution(&problem).unwrap();
    let current_costs = evaluator.route_costs(&current).unwrap();

    let candidates = Neighborhood::new(&problem).explore(&current, &current_costs, &random).unwrap();

    // only the first task (weight 4) is considered and only vehicle 1 (capacity 5) can take it
    assert_eq!(candidates.len(), 1);
    let candidate = &candidates[0];
    assert!(candidate.solution.is_complete(&problem.catalog));
    assert_eq!(candidate.cost, candidate.route_costs.iter().sum::<f64>());
}

#[test]
fn can_return_empty_neighborhood_when_no_target_fits() {
    let catalog = Catalog::new(vec![Task { id: 0, weight: 6, pickup: 1, delivery: 2 }]);
    let problem = create_test_problem_with_catalog(catalog, vec![test_vehicle(0, 10, 0), test_vehicle(1, 5, 0)]);
    let random = DefaultRandom::new_with_seed(0);
    let evaluator = CostEvaluator::new(&problem);
    let current = create_initial_solution(&problem).unwrap();
    let current_costs = evaluator.route_costs(&current).unwrap();

    let candidates = Neighborhood::new(&problem).explore(&current, &current_costs, &random).unwrap();

    assert!(candidates.is_empty());
}

#[test]
fn can_keep_unique_candidates_only() {
    let problem = create_test_problem_with_vehicles(vec![
        test_vehicle(0, 10, 0),
        test_vehicle(1, 5, 0),
        test_vehicle(2, 5, 0),
    ]);
    let random = DefaultRandom::new_with_seed(1);
    let evaluator = CostEvaluator::new(&problem);
    let current = create_initial_solution(&problem).unwrap();
    let current_costs = evaluator.route_costs(&current).unwrap();

    let candidates = Neighborhood::new(&problem).explore(&current, &current_costs, &random).unwrap();

    let unique = candidates.iter().map(|candidate| candidate.solution.clone()).collect::<FxHashSet<_>>();
    assert_eq!(unique.len(), candidates.len());
}
