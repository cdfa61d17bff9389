use proptest::prelude::*;
use spark_clamp::*;

const MARKER: &str = "...";

fn word_box(text: &str, width: usize) -> CellBox {
    CellBox::new(text, width, WrapMode::Word)
}

/// Sentences of lowercase words, optionally joined by commas and periods.
fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::collection::vec("[a-z]{1,9}", 1..6), prop::bool::ANY),
        1..5,
    )
    .prop_map(|sentences| {
        sentences
            .into_iter()
            .map(|(words, comma)| {
                let sep = if comma { ", " } else { " " };
                words.join(sep)
            })
            .collect::<Vec<_>>()
            .join(". ")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_result_fits_or_pass_exhausted(
        text in prose(),
        width in 8usize..40,
        lines in 1u32..4
    ) {
        let oracle = CellOracle::rows();
        let mut element = word_box(&text, width);
        let report = fit_text(&oracle, &mut element, lines, &ClampOptions::default());

        if report.outcome != FitOutcome::Exhausted {
            prop_assert!(
                oracle.rendered_height(&element) <= lines,
                "{:?} renders {} rows, budget {}",
                element.text(), element.rows(), lines
            );
        }
    }

    #[test]
    fn prop_marker_present_iff_truncated(
        text in prose(),
        width in 8usize..40,
        lines in 1u32..4
    ) {
        let oracle = CellOracle::rows();
        let mut element = word_box(&text, width);
        let report = fit_text(&oracle, &mut element, lines, &ClampOptions::default());

        if report.truncated() {
            prop_assert!(element.text().ends_with(MARKER));
            prop_assert!(element.text().len() <= text.len() + MARKER.len());
        } else {
            prop_assert_eq!(element.text(), text.as_str());
        }
    }

    #[test]
    fn prop_refit_is_idempotent(
        text in prose(),
        width in 8usize..40,
        lines in 1u32..4
    ) {
        let oracle = CellOracle::rows();
        let mut element = word_box(&text, width);
        fit_text(&oracle, &mut element, lines, &ClampOptions::default());
        let first = element.text().to_string();

        fit_text(&oracle, &mut element, lines, &ClampOptions::default());
        prop_assert_eq!(element.text(), first.as_str());
    }

    #[test]
    fn prop_controller_never_accumulates_markers(
        text in prose(),
        widths in prop::collection::vec(8usize..40, 1..5),
        lines in 1u32..4
    ) {
        let element = word_box("", widths[0]);
        let mut clamp = Clamp::new(element, CellOracle::rows(), ClampOptions::default()).unwrap();
        clamp.on_inputs_changed(lines, Some(text.clone()));

        for width in widths {
            clamp.element_mut().set_width(width);
            clamp.refresh();
            let fitted = clamp.element().text();
            let markers = fitted.len() - fitted.trim_end_matches('.').len();
            prop_assert!(markers <= MARKER.len() + 1, "{fitted:?}");
        }
    }

    #[test]
    fn prop_zero_budget_terminates(
        text in "[a-z ,.]{0,60}",
        width in 1usize..20
    ) {
        let oracle = CellOracle::rows();
        let mut element = word_box(&text, width);
        let report = fit_text(&oracle, &mut element, 0, &ClampOptions::default());

        if text.is_empty() {
            prop_assert_eq!(report.outcome, FitOutcome::AlreadyFits);
        } else {
            prop_assert_eq!(report.outcome, FitOutcome::Exhausted);
            prop_assert!(report.cuts <= text.len() + 1);
        }
    }
}

#[test]
fn word_cut_preferred_over_character_cut() {
    let oracle = CellOracle::rows();
    let mut element = word_box("lorem ipsum dolor sit amet consectetur", 12);
    let report = fit_text(&oracle, &mut element, 2, &ClampOptions::default());

    assert_eq!(report.separator.as_deref(), Some(" "));
    assert!(element.text().starts_with("lorem ipsum"));
    assert!(element.text().ends_with(MARKER));
}

#[test]
fn line_height_string_feeds_budget() {
    let line_height: LineHeight = "18px".parse().unwrap();
    let oracle = CellOracle::new(line_height, 14.0);
    let element = word_box("text", 10);
    assert_eq!(compute_max_height(&oracle, &element, 3), 54);
}
