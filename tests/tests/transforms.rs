//! Transform attachment scenarios.
//!
//! Ordering across multiple attachment calls, mask derivation, and the
//! failure modes of attaching transforms.

use stratum_tests::prelude::*;

mod ordering {
    use super::*;

    #[test]
    fn test_transforms_concatenate_in_call_then_argument_order() {
        // GIVEN: transforms [A, B] attached in one call, [C] in a second
        let mutation = Mutation::upsert(&task_key(1), &props! {})
            .with_transforms([
                PropertyTransform::set_to_server_time("a"),
                PropertyTransform::increment("b", Value::Int(1)),
            ])
            .with_transforms([PropertyTransform::maximum("c", Value::Int(10))]);

        // WHEN
        let order: Vec<_> = mutation
            .transforms()
            .iter()
            .filter_map(PropertyTransform::property)
            .collect();

        // THEN: order is exactly [A, B, C]
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_transform_order_survives_to_the_wire() {
        // GIVEN
        let batch = [Mutation::upsert(&task_key(1), &props! {})
            .with_transforms([
                PropertyTransform::increment("first", Value::Int(1)),
                PropertyTransform::increment("second", Value::Int(2)),
            ])];

        // WHEN
        let wire = build_batch(&batch).unwrap();

        // THEN
        let names: Vec<_> = wire[0]
            .property_transforms
            .iter()
            .map(|t| t.property.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}

mod masks {
    use super::*;

    #[test]
    fn test_mask_is_exactly_the_written_property_set() {
        // GIVEN: a payload writing {"x", "y"}
        let src = props! { "x" => 1i64, "y" => 2i64 };

        // WHEN: any transform is attached
        let mutation = Mutation::upsert(&task_key(1), &src)
            .with_transforms([PropertyTransform::increment("views", Value::Int(1))]);

        // THEN: the mask is {"x", "y"}; the transform target is excluded
        assert_eq!(
            mutation.property_mask(),
            Some(&["x".to_string(), "y".to_string()][..])
        );
    }

    #[test]
    fn test_transformed_property_in_mask_only_when_also_written() {
        // GIVEN: the payload writes the same property a transform targets
        let src = props! { "views" => 0i64 };

        // WHEN
        let mutation = Mutation::upsert(&task_key(1), &src)
            .with_transforms([PropertyTransform::increment("views", Value::Int(1))]);

        // THEN
        assert_eq!(mutation.property_mask(), Some(&["views".to_string()][..]));
    }

    #[test]
    fn test_empty_payload_masks_out_all_client_writes() {
        // GIVEN: no client-side properties, server-side transform only
        let mutation = Mutation::upsert(&task_key(1), &props! {})
            .with_transforms([PropertyTransform::increment("views", Value::Int(1))]);

        // THEN: the mask is empty (present), so the server transforms its
        // held value without any client round trip
        assert_eq!(mutation.property_mask(), Some(&[][..]));
    }

    #[test]
    fn test_no_transforms_means_no_mask_on_the_wire() {
        // GIVEN
        let batch = [Mutation::upsert(&task_key(1), &task_props("Cleanup", 3))];

        // WHEN
        let wire = build_batch(&batch).unwrap();

        // THEN: absent mask = "write all properties in the payload"
        assert!(wire[0].property_mask.is_none());
        assert!(wire[0].property_transforms.is_empty());
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_transforms_on_delete_are_rejected() {
        // GIVEN
        let mutation = Mutation::delete(&task_key(1));

        // WHEN
        let mutation =
            mutation.with_transforms([PropertyTransform::set_to_server_time("updated_at")]);

        // THEN
        assert_eq!(mutation.error(), Some(&MutationError::TransformOnDelete));
    }

    #[test]
    fn test_invalid_transforms_poison_the_mutation() {
        // GIVEN: an increment with a non-numeric operand never builds
        let bad = PropertyTransform::increment("views", Value::Text("1".into()));
        assert!(!bad.is_valid());

        // WHEN
        let mutation =
            Mutation::upsert(&task_key(1), &props! { "views" => 0i64 }).with_transforms([bad]);

        // THEN: the attachment fails rather than dropping the transform
        assert_eq!(
            mutation.error(),
            Some(&MutationError::UninitializedTransform)
        );
    }
}
