use super::*;

#[test]
fn can_reproduce_seeded_stream() {
    let first = DefaultRandom::new_with_seed(42);
    let first_values = (0..10).map(|_| first.uniform_int(0, 100)).collect::<Vec<_>>();

    let second = DefaultRandom::new_with_seed(42);
    let second_values = (0..10).map(|_| second.uniform_int(0, 100)).collect::<Vec<_>>();

    assert_eq!(first_values, second_values);
}

#[test]
fn can_return_bound_when_bounds_are_equal() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(1., 1.), 1.);
}

#[test]
fn can_produce_values_within_bounds() {
    let random = DefaultRandom::default();

    for _ in 0..100 {
        let int_value = random.uniform_int(-5, 5);
        assert!((-5..=5).contains(&int_value));

        let real_value = random.uniform_real(0., 1.);
        assert!((0. ..1.).contains(&real_value));
    }
}
