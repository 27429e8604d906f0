#[cfg(test)]
mod tests {
    use crate::api::query::{QueryArgs, QueryKind, build_url};
    use crate::error::TngError;

    #[test]
    fn person_url_works() {
        let params = build_url(
            "person",
            &QueryArgs::new(Some(5), Some("family1".to_string())),
        )
        .unwrap();

        assert_eq!(params, "personID=I5&tree=family1");
    }

    #[test]
    fn family_url_works() {
        let params = build_url(
            "family",
            &QueryArgs::new(Some(5), Some("family1".to_string())),
        )
        .unwrap();

        assert_eq!(params, "familyID=F5&tree=family1");
    }

    #[test]
    fn omitted_args_default_to_empty() {
        let params = build_url("person", &QueryArgs::default()).unwrap();

        assert_eq!(params, "personID=I&tree=");
    }

    #[test]
    fn tree_names_are_encoded() {
        let params = build_url(
            "family",
            &QueryArgs::new(Some(12), Some("smith & jones".to_string())),
        )
        .unwrap();

        assert_eq!(params, "familyID=F12&tree=smith+%26+jones");
    }

    #[test]
    fn empty_kind_is_rejected() {
        let err = build_url("", &QueryArgs::default()).unwrap_err();

        assert!(matches!(err, TngError::InvalidRequestKind(kind) if kind.is_empty()));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = build_url("bogus", &QueryArgs::default()).unwrap_err();

        assert!(matches!(err, TngError::InvalidRequestKind(kind) if kind == "bogus"));
    }

    #[test]
    fn kind_knows_its_endpoint() {
        assert_eq!(QueryKind::Person.endpoint(), "api_person.php");
        assert_eq!(QueryKind::Family.endpoint(), "api_family.php");
    }
}
