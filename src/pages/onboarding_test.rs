use super::*;

#[test]
fn wizard_walks_all_four_steps() {
    assert_eq!(advance(0), Some(1));
    assert_eq!(advance(1), Some(2));
    assert_eq!(advance(2), Some(3));
}

#[test]
fn final_step_exits_the_wizard() {
    assert_eq!(advance(3), None);
    // Out-of-range positions also exit instead of wrapping.
    assert_eq!(advance(9), None);
}
