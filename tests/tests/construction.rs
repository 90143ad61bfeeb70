//! Mutation construction scenarios.
//!
//! Constructor validity rules across the four operation kinds, and the
//! sticky deferred-error behavior on decorated mutations.

use stratum_tests::prelude::*;

mod constructors {
    use super::*;

    #[test]
    fn test_all_write_constructors_accept_valid_input() {
        // GIVEN: a complete key and a well-formed payload
        let key = task_key(1);
        let src = task_props("Cleanup", 3);

        // WHEN: each constructor runs

        // THEN: the variant matches the constructor and no error is carried
        let insert = Mutation::insert(&key, &src);
        assert!(matches!(insert.operation(), Some(Operation::Insert(_))));
        assert_eq!(insert.error(), None);

        let upsert = Mutation::upsert(&key, &src);
        assert!(matches!(upsert.operation(), Some(Operation::Upsert(_))));
        assert_eq!(upsert.error(), None);

        let update = Mutation::update(&key, &src);
        assert!(matches!(update.operation(), Some(Operation::Update(_))));
        assert_eq!(update.error(), None);

        let delete = Mutation::delete(&key);
        assert!(matches!(delete.operation(), Some(Operation::Delete)));
        assert_eq!(delete.error(), None);
    }

    #[test]
    fn test_invalid_keys_are_rejected_by_every_constructor() {
        // GIVEN
        let key = invalid_key();
        let src = task_props("Cleanup", 3);

        // THEN
        for mutation in [
            Mutation::insert(&key, &src),
            Mutation::upsert(&key, &src),
            Mutation::update(&key, &src),
            Mutation::delete(&key),
        ] {
            assert!(matches!(
                mutation.error(),
                Some(MutationError::InvalidKey { .. })
            ));
        }
    }

    #[test]
    fn test_incomplete_keys_are_rejected_by_update_and_delete() {
        // GIVEN: an incomplete key (server has not assigned an id yet)
        let key = incomplete_key("Task");
        let src = task_props("Cleanup", 3);

        // THEN: insert and upsert accept it, update and delete do not
        assert_eq!(Mutation::insert(&key, &src).error(), None);
        assert_eq!(Mutation::upsert(&key, &src).error(), None);
        assert!(matches!(
            Mutation::update(&key, &src).error(),
            Some(MutationError::IncompleteKey { .. })
        ));
        assert!(matches!(
            Mutation::delete(&key).error(),
            Some(MutationError::IncompleteKey { .. })
        ));
    }

    #[test]
    fn test_encoder_failures_surface_on_the_mutation() {
        // GIVEN: a payload with a reserved property name
        let key = named_key("Task", "cleanup");
        let src = props! { "__key__" => 1i64 };

        // WHEN
        let mutation = Mutation::insert(&key, &src);

        // THEN
        assert!(matches!(mutation.error(), Some(MutationError::Encode(_))));
    }
}

mod sticky_errors {
    use super::*;

    #[test]
    fn test_decoration_after_failure_preserves_the_first_error() {
        // GIVEN: a mutation that failed construction
        let mutation = Mutation::delete(&incomplete_key("Task"));
        let first = mutation.error().cloned();

        // WHEN: it is decorated anyway
        let mutation =
            mutation.with_transforms([PropertyTransform::set_to_server_time("updated_at")]);

        // THEN: the original error is untouched
        assert_eq!(mutation.error(), first.as_ref());
    }
}
