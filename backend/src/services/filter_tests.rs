#[cfg(test)]
mod tests {
    use crate::error::EngineError;
    use crate::models::{Field, FilterSelection, Selection};
    use crate::routes::{age, insurance};
    use crate::services::filter::{filter, filter_rows, has_unknown_value, Subset};
    use crate::services::fixtures::sample_dataset;

    fn value(v: &str) -> Selection {
        Selection::Value(v.to_string())
    }

    #[test]
    fn test_all_wildcards_return_full_dataset() {
        let ds = sample_dataset();
        let sel = FilterSelection::new()
            .with("gender", "All")
            .with("blood_type", "All");

        let subset = filter(&ds, &age::VIEW, &sel).unwrap();
        assert_eq!(subset, Subset::all(&ds));
        assert_eq!(subset.len(), 8);
    }

    #[test]
    fn test_single_field() {
        let ds = sample_dataset();
        let sel = FilterSelection::new().with("gender", "Female");

        let subset = filter(&ds, &age::VIEW, &sel).unwrap();
        assert_eq!(subset.rows(), &[0, 2, 4, 5, 7]);
    }

    #[test]
    fn test_conjunction() {
        let ds = sample_dataset();
        let sel = FilterSelection::new()
            .with("gender", "Female")
            .with("blood_type", "O-");

        let subset = filter(&ds, &age::VIEW, &sel).unwrap();
        assert_eq!(subset.rows(), &[2, 7]);
    }

    #[test]
    fn test_unknown_value_yields_empty_subset() {
        let ds = sample_dataset();
        let sel = FilterSelection::new().with("blood_type", "AB-");

        let subset = filter(&ds, &age::VIEW, &sel).unwrap();
        assert!(subset.is_empty());
    }

    #[test]
    fn test_has_unknown_value() {
        let ds = sample_dataset();
        let known = age::VIEW
            .resolve(&FilterSelection::new().with("gender", "Male").with("blood_type", "All"))
            .unwrap();
        assert!(!has_unknown_value(&ds, &known));

        let unknown = age::VIEW
            .resolve(&FilterSelection::new().with("blood_type", "AB-"))
            .unwrap();
        assert!(has_unknown_value(&ds, &unknown));
    }

    #[test]
    fn test_undeclared_field_is_rejected() {
        let ds = sample_dataset();
        // Blood type is not a filter of the insurance provider view.
        let sel = FilterSelection::new().with("blood_type", "A+");

        let err = filter(&ds, &insurance::VIEW, &sel).unwrap_err();
        assert!(matches!(err, EngineError::UnknownFilterField { .. }));
    }

    #[test]
    fn test_constraint_order_does_not_matter() {
        let ds = sample_dataset();
        let a = filter_rows(
            &ds,
            &[(Field::Gender, value("Male")), (Field::AdmissionType, value("Elective"))],
        );
        let b = filter_rows(
            &ds,
            &[(Field::AdmissionType, value("Elective")), (Field::Gender, value("Male"))],
        );
        assert_eq!(a, b);
        assert_eq!(a.rows(), &[6]);
    }

    #[test]
    fn test_sequential_refinement_commutes() {
        let ds = sample_dataset();
        let all = Subset::all(&ds);

        let gender_first = all
            .refine(&ds, Field::Gender, &value("Female"))
            .refine(&ds, Field::BloodType, &value("A+"));
        let blood_first = all
            .refine(&ds, Field::BloodType, &value("A+"))
            .refine(&ds, Field::Gender, &value("Female"));

        assert_eq!(gender_first, blood_first);
        assert_eq!(gender_first.rows(), &[0, 5]);
    }

    #[test]
    fn test_refinement_is_idempotent() {
        let ds = sample_dataset();
        let once = Subset::all(&ds).refine(&ds, Field::Gender, &value("Male"));
        let twice = once.refine(&ds, Field::Gender, &value("Male"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_by_derived_age_group() {
        let ds = sample_dataset();
        let subset = filter_rows(&ds, &[(Field::AgeGroup, value("19-30"))]);
        assert_eq!(subset.rows(), &[1, 6]);
    }

    #[test]
    fn test_filter_does_not_mutate_dataset() {
        let ds = sample_dataset();
        let before = ds.records().to_vec();
        let _ = filter_rows(&ds, &[(Field::Gender, value("Female"))]);
        assert_eq!(ds.records(), before.as_slice());
    }
}
