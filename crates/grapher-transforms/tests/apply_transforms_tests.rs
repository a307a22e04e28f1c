mod common;

use common::{nums, series};
use grapher_coretable::{Cell, ColumnDef, ColumnStore, InvalidCell};
use grapher_transforms::{apply_transforms, TransformError, TransformKind};
use pretty_assertions::assert_eq;

fn covid_store() -> ColumnStore {
    let mut store = series(
        &["France", "France", "France", "Spain", "Spain", "Spain"],
        &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0],
        nums(&[10.0, 20.0, 40.0, 5.0, 5.0, 10.0]).into_cells(),
    );
    store
        .insert_column("population", nums(&[10.0, 10.0, 10.0, 5.0, 5.0, 5.0]))
        .unwrap();
    store
}

#[test]
fn definitions_without_directives_are_ignored() {
    let mut store = covid_store();
    let before = store.clone();

    let report = apply_transforms(
        &mut store,
        &[ColumnDef::new("value"), ColumnDef::with_transform("population", "  ")],
    );

    assert_eq!(report.applied, Vec::<String>::new());
    assert!(report.is_clean());
    assert_eq!(store, before);
}

#[test]
fn dependent_definitions_run_after_their_inputs() {
    let mut store = covid_store();

    // Declared out of order: the percentage reads `perCapita`, which is itself derived.
    let defs = vec![
        ColumnDef::with_transform("perCapitaChange", "percentChange day entity perCapita 1"),
        ColumnDef::with_transform("perCapita", "divideBy value population"),
    ];
    let report = apply_transforms(&mut store, &defs);

    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(report.applied, vec!["perCapita", "perCapitaChange"]);
    assert_eq!(
        store.get("perCapita").unwrap(),
        &nums(&[1.0, 2.0, 4.0, 1.0, 1.0, 2.0])
    );
    assert_eq!(
        store.get("perCapitaChange").unwrap()[2],
        Cell::Number(100.0)
    );
    assert_eq!(
        store.get("perCapitaChange").unwrap()[3],
        Cell::Invalid(InvalidCell::NoValueToCompareAgainst)
    );
}

#[test]
fn independent_definitions_keep_declaration_order() {
    let mut store = covid_store();
    let defs = vec![
        ColumnDef::with_transform("b", "asPercentageOf value population"),
        ColumnDef::with_transform("a", "divideBy value population"),
    ];

    let report = apply_transforms(&mut store, &defs);
    assert_eq!(report.applied, vec!["b", "a"]);
}

#[test]
fn unknown_transform_leaves_column_untouched_with_one_diagnostic() {
    let mut store = covid_store();
    let before = store.get("value").cloned();

    let defs = vec![
        ColumnDef::with_transform("value", "smooth day entity value 7"),
        ColumnDef::with_transform("fresh", "cumulative value"),
        ColumnDef::with_transform("ratio", "divideBy value population"),
    ];
    let report = apply_transforms(&mut store, &defs);

    assert_eq!(store.get("value").cloned(), before);
    assert!(!store.contains("fresh"));
    assert_eq!(report.diagnostics.len(), 2);
    assert!(matches!(
        report.diagnostic("value").unwrap().error,
        TransformError::UnknownTransform { .. }
    ));
    assert!(report
        .diagnostic("fresh")
        .unwrap()
        .to_string()
        .contains("transform not found"));
    // The failures did not stop the rest of the batch.
    assert_eq!(report.applied, vec!["ratio"]);
}

#[test]
fn malformed_parameters_are_configuration_errors() {
    let mut store = covid_store();
    let defs = vec![
        ColumnDef::with_transform("t", "timeSinceEntityExceededThreshold day entity value lots"),
        ColumnDef::with_transform("r", "rollingAverage day entity value"),
        ColumnDef::with_transform("ok", "rollingAverage day entity value 2"),
    ];

    let report = apply_transforms(&mut store, &defs);

    assert!(matches!(
        report.diagnostic("t").unwrap().error,
        TransformError::InvalidParameter {
            parameter: "threshold",
            ..
        }
    ));
    assert!(matches!(
        report.diagnostic("r").unwrap().error,
        TransformError::Arity {
            expected: 4,
            actual: 3,
            ..
        }
    ));
    assert_eq!(report.applied, vec!["ok"]);
}

#[test]
fn dependency_cycles_are_reported_and_skipped() {
    let mut store = covid_store();
    let defs = vec![
        ColumnDef::with_transform("a", "divideBy b population"),
        ColumnDef::with_transform("b", "divideBy a population"),
        ColumnDef::with_transform("c", "asPercentageOf value population"),
    ];

    let report = apply_transforms(&mut store, &defs);

    assert_eq!(report.applied, vec!["c"]);
    assert_eq!(report.diagnostics.len(), 2);
    let message = report.diagnostic("a").unwrap().error.to_string();
    assert_eq!(message, "dependency cycle: a -> b -> a");
    assert!(!store.contains("a"));
    assert!(!store.contains("b"));
}

#[test]
fn transform_may_overwrite_its_own_input() {
    let mut store = covid_store();
    let defs = vec![ColumnDef::with_transform(
        "value",
        "asPercentageOf value population",
    )];

    let report = apply_transforms(&mut store, &defs);
    assert!(report.is_clean());
    assert_eq!(
        store.get("value").unwrap(),
        &nums(&[100.0, 200.0, 400.0, 100.0, 100.0, 200.0])
    );
}

#[test]
fn applying_twice_without_dependencies_is_idempotent() {
    let defs = vec![
        ColumnDef::with_transform("ratio", "divideBy value population"),
        ColumnDef::with_transform("change", "percentChange day entity value 1"),
        ColumnDef::with_transform(
            "since",
            "timeSinceEntityExceededThreshold day entity value 10",
        ),
        ColumnDef::with_transform("avg", "rollingAverage day entity value 3"),
    ];

    let mut once = covid_store();
    apply_transforms(&mut once, &defs);

    let mut twice = covid_store();
    apply_transforms(&mut twice, &defs);
    let report = apply_transforms(&mut twice, &defs);

    assert!(report.is_clean());
    assert_eq!(once, twice);
}

#[test]
fn definitions_load_from_json() {
    let defs: Vec<ColumnDef> = serde_json::from_str(
        r#"[
            { "slug": "entity" },
            { "slug": "day" },
            { "slug": "value" },
            { "slug": "since", "name": "Days since 10 cases", "transform": "timeSinceEntityExceededThreshold day entity value 10" }
        ]"#,
    )
    .unwrap();

    let mut store = covid_store();
    let report = apply_transforms(&mut store, &defs);

    assert_eq!(report.applied, vec!["since"]);
    assert_eq!(
        store.get("since").unwrap().cells(),
        &[
            Cell::Number(0.0),
            Cell::Number(0.0),
            Cell::Number(0.0),
            Cell::Invalid(InvalidCell::ValueTooLow),
            Cell::Invalid(InvalidCell::ValueTooLow),
            Cell::Number(2.0),
        ]
    );
}

#[test]
fn registry_lists_every_transform_name() {
    let names: Vec<_> = TransformKind::names().collect();
    assert_eq!(
        names,
        vec![
            "asPercentageOf",
            "timeSinceEntityExceededThreshold",
            "divideBy",
            "rollingAverage",
            "percentChange",
        ]
    );
}
