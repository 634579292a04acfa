//! Catalog Behavior Tests
//!
//! Properties that must hold for any sequence of user actions.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use crate::{AddItemForm, Catalog, Draft, DraftField};

    #[derive(Debug, Clone)]
    enum Action {
        Add(Draft),
        Toggle(u32),
    }

    fn draft_strategy() -> impl Strategy<Value = Draft> {
        let name = prop_oneof!["[A-Za-z][A-Za-z ]{0,11}", Just(String::new()), Just("   ".to_string())];
        let price = prop_oneof![
            (0u32..10_000).prop_map(|cents| format!("{}.{:02}", cents / 100, cents % 100)),
            Just("abc".to_string()),
            Just(String::new()),
            Just("-5".to_string()),
        ];
        let discount = prop_oneof![(0u32..=100).prop_map(|d| d.to_string()), Just("x".to_string())];
        (name, price, discount).prop_map(|(name, price, discount)| Draft {
            name,
            price,
            discount,
            image: String::new(),
        })
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            draft_strategy().prop_map(Action::Add),
            (0u32..40).prop_map(Action::Toggle),
        ]
    }

    fn apply(catalog: &mut Catalog, action: &Action) {
        match action {
            Action::Add(draft) => {
                let _ = catalog.add_item(draft);
            }
            Action::Toggle(id) => {
                catalog.toggle_selected(*id);
            }
        }
    }

    proptest! {
        #[test]
        fn test_ids_are_unique(actions in prop::collection::vec(action_strategy(), 0..60)) {
            let mut catalog = Catalog::new();
            for action in &actions {
                apply(&mut catalog, action);
            }
            let ids: HashSet<u32> = catalog.items().iter().map(|item| item.id).collect();
            prop_assert_eq!(ids.len(), catalog.len());
            prop_assert!(ids.iter().all(|id| *id > 0));
        }

        #[test]
        fn test_selected_count_matches_flags(actions in prop::collection::vec(action_strategy(), 0..60)) {
            let mut catalog = Catalog::new();
            for action in &actions {
                apply(&mut catalog, action);
                let flagged = catalog.items().iter().filter(|item| item.selected).count();
                prop_assert_eq!(catalog.selected_count(), flagged);
                prop_assert_eq!(catalog.cart_summary().count, flagged);
            }
        }

        #[test]
        fn test_double_toggle_restores_flag(
            actions in prop::collection::vec(action_strategy(), 1..40),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut catalog = Catalog::new();
            catalog.add_item(&Draft::new("Aspirin", "10")).unwrap();
            for action in &actions {
                apply(&mut catalog, action);
            }
            let id = catalog.items()[pick.index(catalog.len())].id;
            let before = catalog.clone();

            catalog.toggle_selected(id);
            catalog.toggle_selected(id);

            prop_assert_eq!(catalog, before);
        }

        #[test]
        fn test_rejected_draft_never_mutates(draft in draft_strategy()) {
            let mut catalog = Catalog::new();
            catalog.add_item(&Draft::new("Aspirin", "10")).unwrap();
            let before = catalog.clone();
            if catalog.add_item(&draft).is_err() {
                prop_assert_eq!(catalog, before);
            } else {
                prop_assert_eq!(catalog.len(), before.len() + 1);
            }
        }

        #[test]
        fn test_stored_values_respect_bounds(drafts in prop::collection::vec(draft_strategy(), 0..30)) {
            let mut catalog = Catalog::new();
            for draft in &drafts {
                let _ = catalog.add_item(draft);
            }
            for item in catalog.items() {
                prop_assert!(item.price >= 0.0);
                prop_assert!((0.0..=100.0).contains(&item.discount));
                prop_assert!(!item.name.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_empty_name_rejected_without_mutation() {
        let mut catalog = Catalog::new();
        let err = catalog.add_item(&Draft::new("", "10").with_discount("0")).unwrap_err();
        assert!(err.contains(DraftField::Name));
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_non_numeric_price_rejected_without_mutation() {
        let mut catalog = Catalog::new();
        let err = catalog.add_item(&Draft::new("Aspirin", "abc").with_discount("0")).unwrap_err();
        assert!(err.contains(DraftField::Price));
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_discount_pricing() {
        let mut catalog = Catalog::new();
        catalog.add_item(&Draft::new("Discounted", "100").with_discount("10")).unwrap();
        catalog.add_item(&Draft::new("Full price", "42.5")).unwrap();

        assert_eq!(catalog.get(1).unwrap().display_price(), 90.0);
        assert_eq!(format!("{:.2}", catalog.get(1).unwrap().display_price()), "90.00");
        assert_eq!(catalog.get(2).unwrap().display_price(), 42.5);
    }

    #[test]
    fn test_successful_add_through_form() {
        let mut catalog = Catalog::new();
        catalog.add_item(&Draft::new("Aspirin", "10")).unwrap();
        let mut form = AddItemForm::default();
        form.open();
        form.draft = Draft::new("Vitamin C", "20").with_discount("5");

        let id = form.submit(&mut catalog).unwrap();

        assert_eq!(catalog.len(), 2);
        let added = catalog.get(id).unwrap();
        assert_eq!(added.name, "Vitamin C");
        assert!(!added.selected);
        assert_ne!(id, catalog.items()[0].id);
        assert_eq!(form.draft, Draft::default());
        assert!(!form.open);
    }
}
