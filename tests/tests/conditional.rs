use branch_hint::macros::{likely_if, unlikely_if};
use branch_hint_tests::{Probe, Skewed};

#[test]
fn test_likely_if_false_takes_else() {
	let mut taken = Vec::new();

	likely_if! { false {
		taken.push("x");
	} else {
		taken.push("y");
	}}

	assert_eq!(taken, ["y"]);
}

#[test]
fn test_branch_selection() {
	for cond in [true, false] {
		let likely = likely_if!(cond { 'a' } else { 'b' });
		let unlikely = unlikely_if!(cond { 'a' } else { 'b' });
		let plain = if cond { 'a' } else { 'b' };

		assert_eq!(likely, plain);
		assert_eq!(unlikely, plain);
	}
}

#[test]
fn test_without_else() {
	let mut hits = 0;

	for value in 0..10 {
		unlikely_if! { value == 3 {
			hits += 1;
		}}

		likely_if! { value != 3 {
			hits += 10;
		}}
	}

	assert_eq!(hits, 91);
}

#[test]
fn test_else_chain() {
	fn classify(a: bool, b: bool, c: bool) -> u8 {
		unlikely_if!(a {
			1
		} else likely_if b {
			2
		} else if c {
			3
		} else unlikely_if !c {
			4
		} else {
			unreachable!()
		})
	}

	assert_eq!(classify(true, true, true), 1);
	assert_eq!(classify(false, true, true), 2);
	assert_eq!(classify(false, false, true), 3);
	assert_eq!(classify(false, false, false), 4);
}

#[test]
fn test_single_evaluation() {
	let probe = Probe::new();

	likely_if! { probe.check(false) {
		panic!("then branch taken");
	} else unlikely_if probe.check(true) {
	} else {
		panic!("else branch taken");
	}}

	assert_eq!(probe.calls(), 2);
}

#[test]
fn test_scoping() {
	let value = 7;

	let doubled = likely_if!(value > 0 {
		let value = value * 2;

		value
	} else {
		0
	});

	assert_eq!(doubled, 14);
	assert_eq!(value, 7);
}

#[test]
fn test_struct_comparison_in_condition() {
	#[derive(PartialEq)]
	struct Point {
		x: i32
	}

	let point = Point { x: 1 };

	let matched = likely_if!((point == Point { x: 1 }) { true } else { false });

	assert!(matched);
}

#[test]
fn test_else_if_let() {
	fn first(opt: Option<u32>) -> u32 {
		unlikely_if!(opt.is_none() {
			0
		} else if let Some(n) = opt {
			n
		} else {
			1
		})
	}

	assert_eq!(first(None), 0);
	assert_eq!(first(Some(7)), 7);
}

#[test]
fn test_skewed_dispatch() {
	let truthy = Skewed::new();
	let falsy = Skewed::new();
	let (mut one, mut two, mut three, mut four) = (0, 0, 0, 0);

	for _ in 0..20 {
		let almost_always_true = truthy.mostly_true();
		let almost_always_false = falsy.mostly_false();

		likely_if! { almost_always_true {
			one += 1;
		} else {
			two += 1;
		}}

		unlikely_if! { almost_always_false {
			three += 1;
		} else likely_if almost_always_true {
			four += 1;
		}}
	}

	assert_eq!((one, two), (18, 2));
	assert_eq!((three, four), (2, 18));
}
