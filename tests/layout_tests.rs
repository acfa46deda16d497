use pvalue_dots::config::SimulationParams;
use pvalue_dots::histogram::Histogram;
use pvalue_dots::layout::ViewScale;
use rstest::rstest;

#[rstest]
#[case(ViewScale::Full, 80, 42)]
#[case(ViewScale::Callback, 80, 42)]
#[case(ViewScale::Full, 500, 7)]
#[case(ViewScale::Callback, 0, 42)]
fn test_sweep_order_is_left_to_right(
    #[case] scale: ViewScale,
    #[case] guessers: usize,
    #[case] seed: u64,
) {
    let params = SimulationParams {
        guessers,
        seed,
        ..Default::default()
    };
    let hist = Histogram::generate(&params).unwrap();
    let sweep = hist.sweep_order(scale);

    assert_eq!(sweep.len(), guessers);
    assert!(
        sweep.windows(2).all(|w| w[0].x <= w[1].x),
        "x values decreased in {} sweep",
        scale
    );

    // Within a column the reveal keeps draw order, so stacks climb.
    for pair in sweep.windows(2).filter(|w| w[0].outcome == w[1].outcome) {
        assert!(pair[0].guesser < pair[1].guesser);
        assert_eq!(pair[0].stack + 1, pair[1].stack);
    }
}

#[test]
fn test_sweep_is_a_permutation_of_the_view() {
    let hist = Histogram::generate(&SimulationParams::default()).unwrap();
    let mut sweep: Vec<usize> = hist
        .sweep_order(ViewScale::Callback)
        .iter()
        .map(|d| d.guesser)
        .collect();
    sweep.sort_unstable();
    assert_eq!(sweep, (0..hist.len()).collect::<Vec<_>>());
}
