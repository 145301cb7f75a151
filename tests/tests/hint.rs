use branch_hint::mode::Mode;
use branch_hint::opt::hint::{expect, likely, unlikely};
use branch_hint_tests::{Probe, Skewed};

#[test]
fn test_likely_equality() {
	#[allow(clippy::eq_op)]
	let cond = likely(5 == 5);

	assert!(cond);
}

#[test]
fn test_unlikely_counter() {
	let mut counter = 0;

	let hit = unlikely({
		counter += 1;
		counter == 1
	});

	assert!(hit);
	assert_eq!(counter, 1);
}

#[test]
fn test_transparency() {
	for cond in [true, false] {
		assert_eq!(likely(cond), cond);
		assert_eq!(unlikely(cond), cond);
		assert_eq!(expect::<true>(cond), cond);
		assert_eq!(expect::<false>(cond), cond);
	}
}

#[test]
fn test_single_evaluation() {
	let probe = Probe::new();

	assert!(likely(probe.check(true)));
	assert!(!likely(probe.check(false)));
	assert!(unlikely(probe.check(true)));
	assert!(!unlikely(probe.check(false)));
	assert_eq!(probe.calls(), 4);
}

#[test]
fn test_logical_combinators() {
	let probe = Probe::new();

	assert!(likely(probe.check(true) || probe.check(false)));
	assert_eq!(probe.calls(), 1);

	assert!(!unlikely(probe.check(false) && probe.check(true)));
	assert_eq!(probe.calls(), 2);

	assert!(likely(true) && !unlikely(false));
}

#[test]
fn test_loop_condition() {
	let skewed = Skewed::new();
	let mut taken = 0;

	for _ in 0..100 {
		if likely(skewed.mostly_true()) {
			taken += 1;
		}
	}

	assert_eq!(taken, 90);

	let mut remaining = 5;

	while likely(remaining > 0) {
		remaining -= 1;
	}

	assert_eq!(remaining, 0);
}

#[test]
fn test_mode_consistency() {
	assert_eq!(
		Mode::CURRENT.is_enabled(),
		Mode::CURRENT.fallback_reason().is_none()
	);

	branch_hint::mode::report();
}
