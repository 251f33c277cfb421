use super::*;
use crate::helpers::models::problem::*;

fn create_no_op_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}

fn create_test_state(problem: &Problem) -> SearchState {
    let evaluator = CostEvaluator::new(problem);
    let initial = create_initial_solution(problem).unwrap();
    let route_costs = evaluator.route_costs(&initial).unwrap();

    SearchState::new(initial, route_costs)
}

#[test]
fn can_keep_best_cost_non_increasing() {
    let problem = create_test_problem();
    let random = DefaultRandom::new_with_seed(11);
    let neighborhood = Neighborhood::new(&problem);
    let acceptance = RandomProbability::default();
    let mut state = create_test_state(&problem);

    let mut previous_best = state.best_cost;
    for _ in 0..50 {
        step(&mut state, &neighborhood, &acceptance, &random).unwrap();

        assert!(compare_floats(state.best_cost, previous_best) != Ordering::Greater);
        assert!(state.best.is_complete(&problem.catalog));
        previous_best = state.best_cost;
    }

    assert_eq!(state.iteration, 50);
}

#[test]
fn can_count_empty_neighborhood_as_no_op() {
    let problem = create_test_problem_with_vehicles(vec![test_vehicle(0, 10, 0)]);
    let random = DefaultRandom::new_with_seed(3);
    let neighborhood = Neighborhood::new(&problem);
    let acceptance = RandomProbability::default();
    let mut state = create_test_state(&problem);
    let current = state.current.clone();

    step(&mut state, &neighborhood, &acceptance, &random).unwrap();

    assert_eq!(state.empty_neighborhoods, 1);
    assert_eq!(state.iteration, 1);
    assert_eq!(state.current, current);
    assert_eq!(state.best, current);
}

#[test]
fn can_solve_problem_end_to_end() {
    let problem = Arc::new(create_test_problem());
    let config = SearchConfig { max_iterations: 200, seed: Some(42), log_interval: 0, ..SearchConfig::default() };
    let solver = Solver::new_with_logger(problem.clone(), config, create_no_op_logger()).unwrap();

    let best = solver.solve().unwrap();

    assert!(best.is_complete(&problem.catalog));
    for vehicle in problem.fleet.iter() {
        assert!(best.route(vehicle.id).is_feasible(vehicle.capacity, &problem.catalog));
    }

    let evaluator = CostEvaluator::new(&problem);
    let initial_cost = evaluator.solution_cost(&create_initial_solution(&problem).unwrap()).unwrap();
    let best_cost = evaluator.solution_cost(&best).unwrap();
    assert!(compare_floats(best_cost, initial_cost) != Ordering::Greater);
}

#[test]
fn can_terminate_early_on_time_quota() {
    let problem = Arc::new(create_test_problem());
    let config = SearchConfig {
        max_iterations: usize::MAX,
        seed: Some(42),
        max_time: Some(std::time::Duration::from_millis(0)),
        log_interval: 0,
        ..SearchConfig::default()
    };
    let solver = Solver::new_with_logger(problem.clone(), config, create_no_op_logger()).unwrap();

    let best = solver.solve().unwrap();

    assert!(best.is_complete(&problem.catalog));
}

parameterized_test! {can_reject_invalid_config, config, {
    let problem = Arc::new(create_test_problem());

    let result = Solver::new_with_logger(problem, config, create_no_op_logger());

    assert!(matches!(result.err(), Some(SolverError::InvalidConfig(_))));
}}

can_reject_invalid_config! {
    case01_zero_iterations: SearchConfig { max_iterations: 0, ..SearchConfig::default() },
    case02_probability_above_one: SearchConfig { acceptance_probability: 1.5, ..SearchConfig::default() },
    case03_probability_not_finite: SearchConfig { acceptance_probability: f64::NAN, ..SearchConfig::default() },
}

#[test]
fn can_pick_cheapest_candidate_from_ties() {
    let problem = create_test_problem();
    let random = DefaultRandom::new_with_seed(7);
    let solution = create_initial_solution(&problem).unwrap();

    let candidates = vec![
        Candidate { solution: solution.clone(), route_costs: vec![5., 0.], cost: 5. },
        Candidate { solution: solution.clone(), route_costs: vec![3., 0.], cost: 3. },
        Candidate { solution, route_costs: vec![0., 3.], cost: 3. },
    ];

    for _ in 0..10 {
        let chosen = select_cheapest_candidate(candidates.clone(), &random);
        assert_eq!(chosen.cost, 3.);
    }
}
