//! Column Splitter — stable partition of the gated section list for two-column canvases.

use serde::Serialize;

use crate::models::layout::SectionType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnSplit {
    /// Skills, languages and certifications.
    pub narrow: Vec<SectionType>,
    /// Everything else.
    pub main: Vec<SectionType>,
}

/// Partitions ordered, visible sections into narrow and main columns, keeping
/// the relative order of each side.
pub fn split_columns(sections: &[SectionType]) -> ColumnSplit {
    let (narrow, main) = sections.iter().partition(|s| s.is_narrow());
    ColumnSplit { narrow, main }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_example_modern_two() {
        let split = split_columns(&[
            SectionType::Summary,
            SectionType::Experience,
            SectionType::Skills,
            SectionType::Languages,
        ]);
        assert_eq!(split.narrow, vec![SectionType::Skills, SectionType::Languages]);
        assert_eq!(split.main, vec![SectionType::Summary, SectionType::Experience]);
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split_columns(&[]), ColumnSplit::default());
    }

    #[test]
    fn test_certifications_go_narrow_awards_go_main() {
        let split = split_columns(&[SectionType::Awards, SectionType::Certifications]);
        assert_eq!(split.narrow, vec![SectionType::Certifications]);
        assert_eq!(split.main, vec![SectionType::Awards]);
    }

    fn section_order() -> impl Strategy<Value = Vec<SectionType>> {
        Just(SectionType::ALL.to_vec())
            .prop_shuffle()
            .prop_flat_map(|all| (0..=all.len()).prop_map(move |n| all[..n].to_vec()))
    }

    proptest! {
        #[test]
        fn prop_split_is_a_stable_partition(order in section_order()) {
            let split = split_columns(&order);

            prop_assert_eq!(split.narrow.len() + split.main.len(), order.len());

            let narrow_in_input: Vec<_> = order.iter().copied().filter(|s| s.is_narrow()).collect();
            let main_in_input: Vec<_> = order.iter().copied().filter(|s| !s.is_narrow()).collect();
            prop_assert_eq!(split.narrow, narrow_in_input);
            prop_assert_eq!(split.main, main_in_input);
        }
    }
}
