//! Static dataset documents used across harnesses.
//!
//! Each document exercises one of the shapes or field-name variants the
//! loader has to accept (or reject).

use ptable_core::ElementTable;

/// Upstream layout: `{"elements": [...]}` with `number`/`phase` and extra columns.
pub const DOC_ELEMENTS_OBJECT: &str = r#"{
    "elements": [
        {"name": "Hydrogen", "symbol": "H", "number": 1, "phase": "Gas", "atomic_mass": 1.008, "appearance": "colorless gas", "summary": "Lightest element."},
        {"name": "Carbon", "symbol": "C", "number": 6, "phase": "Solid", "atomic_mass": 12.011, "appearance": null, "summary": "Tetravalent nonmetal."},
        {"name": "Oxygen", "symbol": "O", "number": 8, "phase": "Gas", "atomic_mass": 15.999, "summary": "Reactive nonmetal."},
        {"name": "Mercury", "symbol": "Hg", "number": 80, "phase": "Liquid", "atomic_mass": 200.59, "appearance": "silvery", "summary": "Liquid metal."}
    ]
}"#;

/// Bare array with the `atomic_number`/`type` spelling.
pub const DOC_BARE_ARRAY: &str = r#"[
    {"name": "Hydrogen", "symbol": "H", "atomic_number": 1, "type": "Gas", "summary": "Lightest element."},
    {"name": "Carbon", "symbol": "C", "atomic_number": 6, "type": "Solid", "summary": "Tetravalent nonmetal."},
    {"name": "Oxygen", "symbol": "O", "atomic_number": 8, "type": "Gas", "summary": "Reactive nonmetal."},
    {"name": "Mercury", "symbol": "Hg", "atomic_number": 80, "type": "Liquid", "summary": "Liquid metal."}
]"#;

/// Object with a single array field under a non-standard name, using the
/// `atomicNumber`/`state`/`description` spelling.
pub const DOC_SINGLE_FIELD: &str = r#"{
    "table": [
        {"name": "Hydrogen", "symbol": "H", "atomicNumber": 1, "state": "Gas", "description": "Lightest element."},
        {"name": "Carbon", "symbol": "C", "atomicNumber": 6, "state": "Solid", "description": "Tetravalent nonmetal."},
        {"name": "Oxygen", "symbol": "O", "atomicNumber": 8, "state": "Gas", "description": "Reactive nonmetal."},
        {"name": "Mercury", "symbol": "Hg", "atomicNumber": 80, "state": "Liquid", "description": "Liquid metal."}
    ],
    "source": "fixture"
}"#;

/// Records with no phase column; they load as "Unknown".
pub const DOC_MISSING_PHASE: &str = r#"[
    {"name": "Tennessine", "symbol": "Ts", "number": 117},
    {"name": "Oganesson", "symbol": "Og", "number": 118}
]"#;

/// Documents the loader must refuse.
pub const DOC_MALFORMED: &[&str] = &[
    "",
    "not json",
    "{\"elements\": [",
    "17",
    "{\"elements\": \"H, He, Li\"}",
    "{\"count\": 3}",
    "[{\"symbol\": \"H\", \"number\": 1}]",
    "[{\"name\": \"Hydrogen\", \"symbol\": \"H\", \"number\": \"one\"}]",
    "[{\"name\": \"Hydrogen\", \"symbol\": \"H\", \"number\": 1}, {\"name\": \"Protium\", \"symbol\": \"P\", \"number\": 1}]",
];

/// The table compiled into the binary.
pub fn bundled() -> ElementTable {
    ElementTable::bundled().expect("bundled dataset must load")
}

/// Write `contents` to `name` inside a fresh temporary directory. Keep the
/// returned guard alive for as long as the file is needed.
pub fn write_dataset(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write dataset fixture");
    (dir, path)
}
