use super::*;
use proptest::prelude::*;

/// Reference model: a plain bool vector queried by linear scans.
fn ups(model: &[bool]) -> Vec<usize> {
    (0..model.len()).filter(|&i| model[i]).collect()
}

fn downs(model: &[bool]) -> Vec<usize> {
    (0..model.len()).filter(|&i| !model[i]).collect()
}

fn assert_matches_model(ta: &ToggleArray, model: &[bool]) {
    let n = model.len();
    let up = ups(model);
    let down = downs(model);
    assert_eq!(ta.up_count(), up.len());
    assert_eq!(ta.down_count(), down.len());
    assert_eq!(ta.up_count() + ta.down_count(), n);

    for i in 0..n {
        let ule = model[..i].iter().filter(|&&b| b).count();
        let dle = i - ule;
        let uli = ule + usize::from(model[i]);
        let dli = dle + usize::from(!model[i]);
        assert_eq!(ta.get(i), model[i], "get({i})");
        assert_eq!(ta.num_ule(i), ule, "num_ule({i})");
        assert_eq!(ta.num_uli(i), uli, "num_uli({i})");
        assert_eq!(ta.num_ure(i), up.len() - uli, "num_ure({i})");
        assert_eq!(ta.num_uri(i), up.len() - ule, "num_uri({i})");
        assert_eq!(ta.num_dle(i), dle, "num_dle({i})");
        assert_eq!(ta.num_dli(i), dli, "num_dli({i})");
        assert_eq!(ta.num_dre(i), down.len() - dli, "num_dre({i})");
        assert_eq!(ta.num_dri(i), down.len() - dle, "num_dri({i})");
    }

    for (k, &i) in up.iter().enumerate() {
        assert_eq!(ta.up_index(k), Some(i), "up_index({k})");
    }
    assert_eq!(ta.up_index(up.len()), None);
    for (k, &i) in down.iter().enumerate() {
        assert_eq!(ta.down_index(k), Some(i), "down_index({k})");
    }
    assert_eq!(ta.down_index(down.len()), None);
}

#[test]
fn starts_all_down() {
    let ta = ToggleArray::new(7);
    assert_eq!(ta.len(), 7);
    assert_eq!(ta.up_count(), 0);
    assert_eq!(ta.down_count(), 7);
    assert_matches_model(&ta, &[false; 7]);
}

#[test]
fn set_up_in_order() {
    let mut ta = ToggleArray::new(5);
    for i in 0..5 {
        assert_eq!(ta.set_up(0), Some(i));
    }
    assert_eq!(ta.set_up(0), None);
    assert_matches_model(&ta, &[true; 5]);
}

#[test]
fn set_up_from_the_right() {
    let mut ta = ToggleArray::new(6);
    for i in (0..6).rev() {
        assert_eq!(ta.set_up(ta.down_count() - 1), Some(i));
    }
    assert_eq!(ta.up_count(), 6);
}

#[test]
fn set_up_skips_raised_toggles() {
    // toggles [0 0 1 1 1 1 0]: the example tree of the module docs
    let mut ta = ToggleArray::new(7);
    for i in 2..6 {
        ta.set_up(ta.num_dle(i));
    }
    let model = [false, false, true, true, true, true, false];
    assert_matches_model(&ta, &model);

    // The third down toggle is index 6, past the raised block.
    assert_eq!(ta.set_up(2), Some(6));
}

#[test]
fn out_of_range_ranks_are_none() {
    let mut ta = ToggleArray::new(3);
    assert_eq!(ta.set_down(0), None);
    assert_eq!(ta.set_up(3), None);
    assert_eq!(ta.up_count(), 0);

    assert_eq!(ta.set_up(0), Some(0));
    assert_eq!(ta.set_down(1), None);
    assert_eq!(ta.set_down(0), Some(0));
    assert_eq!(ta.up_count(), 0);
}

#[test]
fn index_zero_is_distinguishable_from_failure() {
    let mut ta = ToggleArray::new(1);
    assert_eq!(ta.set_up(0), Some(0));
    assert_eq!(ta.set_up(0), None);
}

#[test]
fn queries_past_the_end_are_zero() {
    let mut ta = ToggleArray::new_up(4);
    ta.set_down(2);
    for i in [4, 5, usize::MAX] {
        assert_eq!(ta.num_ule(i), 0);
        assert_eq!(ta.num_uli(i), 0);
        assert_eq!(ta.num_ure(i), 0);
        assert_eq!(ta.num_uri(i), 0);
        assert_eq!(ta.num_dle(i), 0);
        assert_eq!(ta.num_dli(i), 0);
        assert_eq!(ta.num_dre(i), 0);
        assert_eq!(ta.num_dri(i), 0);
        assert!(!ta.get(i));
    }
}

#[test]
fn empty_array() {
    let mut ta = ToggleArray::new(0);
    assert!(ta.is_empty());
    assert_eq!(ta.set_up(0), None);
    assert_eq!(ta.set_down(0), None);
    assert_eq!(ta.up_index(0), None);
    assert_eq!(ta.down_index(0), None);
    assert_eq!(ta.num_ule(0), 0);
    ta.all_up();
    ta.all_down();
    assert_eq!(ta.up_count(), 0);
}

#[test]
fn all_up_builds_consistent_counters() {
    for n in 1..40 {
        let mut ta = ToggleArray::new_up(n);
        assert_matches_model(&ta, &vec![true; n]);

        // Lowering everything from the left must walk back to an all-down array.
        for i in 0..n {
            assert_eq!(ta.set_down(0), Some(i), "n = {n}");
        }
        assert_matches_model(&ta, &vec![false; n]);
        assert!(ta.counts.iter().all(|&c| c == 0), "n = {n}");
    }
}

#[test]
fn all_down_resets() {
    let mut ta = ToggleArray::new(9);
    ta.set_up(3);
    ta.set_up(5);
    ta.all_down();
    assert_matches_model(&ta, &[false; 9]);

    ta.all_up();
    ta.set_down(4);
    let mut model = [true; 9];
    model[4] = false;
    assert_matches_model(&ta, &model);
}

#[test]
fn debug_is_compact() {
    let mut ta = ToggleArray::new(3);
    ta.set_up(1);
    assert_eq!(
        format!("{ta:?}"),
        "ToggleArray { len: 3, up: 1, down: 2 }"
    );
}

#[derive(Debug, Clone)]
enum Op {
    Up(usize),
    Down(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![(0..64usize).prop_map(Op::Up), (0..64usize).prop_map(Op::Down)]
}

proptest! {
    #[test]
    fn random_operations_match_model(
        n in 1..48usize,
        start_up in any::<bool>(),
        ops in prop::collection::vec(op(), 0..120),
    ) {
        let mut ta = if start_up { ToggleArray::new_up(n) } else { ToggleArray::new(n) };
        let mut model = vec![start_up; n];

        for op in ops {
            match op {
                Op::Up(k) => {
                    let expected = downs(&model).get(k).copied();
                    prop_assert_eq!(ta.set_up(k), expected);
                    if let Some(i) = expected {
                        model[i] = true;
                    }
                }
                Op::Down(k) => {
                    let expected = ups(&model).get(k).copied();
                    prop_assert_eq!(ta.set_down(k), expected);
                    if let Some(i) = expected {
                        model[i] = false;
                    }
                }
            }
        }
        assert_matches_model(&ta, &model);
    }
}
