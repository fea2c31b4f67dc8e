use sigma_algebra::{
    atoms, atoms_with, full_universe, generate_algebra, generate_algebra_with, summarize,
    AlgebraOpts, Family, SigmaError, Subset,
};

mod common;
use common::{family, set};

#[test]
fn atoms_of_empty_family_is_a_type_validation_error() {
    let err = atoms(&Family::<u32>::new(), None).unwrap_err();
    assert!(matches!(err, SigmaError::TypeValidation(_)));
    assert_eq!(err.code(), "empty-family");
}

#[test]
fn trivial_algebra_has_the_universe_as_its_only_atom() {
    let candidate = family(&[&[], &[1, 2, 3]]);
    assert_eq!(atoms(&candidate, None).unwrap(), family(&[&[1, 2, 3]]));
}

#[test]
fn atoms_of_a_non_algebra_are_its_minimal_members() {
    let candidate = family(&[&[1, 2], &[1], &[3, 4]]);
    assert_eq!(atoms(&candidate, None).unwrap(), family(&[&[1], &[3, 4]]));
}

#[test]
fn algebra_over_empty_universe_has_no_atoms() {
    let algebra = generate_algebra(&Family::<u32>::new(), Some(&Subset::new())).unwrap();
    assert_eq!(algebra, family(&[&[]]));
    assert!(atoms(&algebra, None).unwrap().is_empty());
}

#[test]
fn empty_family_generates_the_trivial_algebra() {
    let universe = set(&[4, 5]);
    let algebra = generate_algebra(&Family::new(), Some(&universe)).unwrap();
    assert_eq!(algebra, family(&[&[], &[4, 5]]));
}

#[test]
fn generation_respects_max_classes() {
    let generators = family(&[&[1], &[2], &[3]]);
    let opts = AlgebraOpts {
        max_classes: 2,
        ..AlgebraOpts::default()
    };
    let err = generate_algebra_with(&generators, None, &opts).unwrap_err();
    if let SigmaError::Limit(info) = err {
        assert_eq!(info.code, "too-many-classes");
        assert_eq!(info.context.get("classes").map(String::as_str), Some("3"));
    } else {
        panic!("unexpected error variant");
    }
}

#[test]
fn atom_extraction_respects_max_atom_size() {
    let candidate = family(&[&[], &[1, 2, 3]]);
    let opts = AlgebraOpts {
        max_atom_size: 2,
        ..AlgebraOpts::default()
    };
    let err = atoms_with(&candidate, None, &opts).unwrap_err();
    assert_eq!(err.code(), "subset-too-large");
}

#[test]
fn summary_reports_classes_without_enumerating() {
    let generators = family(&[&[1], &[2, 3]]);
    let summary = summarize(&generators, Some(&set(&[1, 2, 3, 4]))).unwrap();
    assert_eq!(summary.universe_size, 4);
    assert_eq!(summary.family_size, 2);
    assert_eq!(summary.num_classes, 3);
    assert_eq!(summary.classes, vec![vec![0], vec![1, 2], vec![3]]);
    assert_eq!(summary.generated_size, Some(8));
    assert!(!summary.is_algebra);

    let algebra = generate_algebra(&generators, None).unwrap();
    assert!(summarize(&algebra, None).unwrap().is_algebra);
}

#[test]
fn elements_need_only_be_ordered() {
    let generators: Family<&str> = [["red", "green"].into_iter().collect()]
        .into_iter()
        .collect();
    let universe: Subset<&str> = ["red", "green", "blue"].into_iter().collect();
    let algebra = generate_algebra(&generators, Some(&universe)).unwrap();
    assert_eq!(algebra.len(), 4);
    let found = atoms(&algebra, None).unwrap();
    assert!(found.contains(&["blue"].into_iter().collect::<Subset<&str>>()));
}

#[test]
fn unbounded_opts_still_generate_small_algebras() {
    let generators = family(&[&[1], &[2]]);
    let algebra = generate_algebra_with(&generators, None, &AlgebraOpts::unbounded()).unwrap();
    assert_eq!(algebra.len(), 4);
    let found = atoms_with(&algebra, None, &AlgebraOpts::unbounded()).unwrap();
    assert_eq!(found, family(&[&[1], &[2]]));
}

#[test]
fn plain_generation_is_not_capped_by_default_opts() {
    let universe = full_universe(21);
    let generators = family(&[&[0]]);
    let algebra = generate_algebra(&generators, Some(&universe)).unwrap();
    assert_eq!(algebra.len(), 4);
    assert!(algebra.contains(&universe));
}

#[test]
fn default_opts_reject_twenty_one_classes() {
    let universe = full_universe(21);
    let generators: Family<u32> = universe.iter().map(|&x| set(&[x])).collect();
    let err = generate_algebra_with(&generators, None, &AlgebraOpts::default()).unwrap_err();
    assert_eq!(err.code(), "too-many-classes");
    assert_eq!(err.info().context.get("max_classes").map(String::as_str), Some("20"));
}

#[test]
fn plain_atoms_accept_members_beyond_twenty_elements() {
    let universe = full_universe(21);
    let algebra = generate_algebra(&family(&[&[0]]), Some(&universe)).unwrap();
    let rest: Subset<u32> = (1..21).collect();
    let expected: Family<u32> = [set(&[0]), rest].into_iter().collect();
    assert_eq!(atoms(&algebra, Some(&universe)).unwrap(), expected);
}

#[test]
fn default_opts_accept_a_twenty_one_element_universe() {
    let universe = full_universe(21);
    let generators: Family<u32> = (0..10).map(|x| set(&[x])).collect();
    let algebra = generate_algebra(&generators, Some(&universe)).unwrap();
    assert!(algebra.contains(&universe));

    let found = atoms_with(&algebra, None, &AlgebraOpts::default()).unwrap();
    assert_eq!(found.len(), 11);
    assert!(found.contains(&(10..21).collect::<Subset<u32>>()));
}

#[test]
fn non_atoms_stop_before_the_atom_size_budget() {
    let algebra = generate_algebra(&family(&[&[1], &[2]]), Some(&set(&[1, 2, 3]))).unwrap();
    let opts = AlgebraOpts {
        max_atom_size: 1,
        ..AlgebraOpts::default()
    };
    let found = atoms_with(&algebra, None, &opts).unwrap();
    assert_eq!(found, family(&[&[1], &[2], &[3]]));
}
